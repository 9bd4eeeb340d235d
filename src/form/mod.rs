//! Contact form: per-field validation, the submission state machine, the
//! status message and the email relay payload.
//!
//! # Flow
//!
//! ```ignore
//! form.set_value(i, value);            // for every field, from the DOM
//! match form.submit(honeypot, values) {
//!     SubmitOutcome::Dispatch { record } => {
//!         let result = relay.send(&record).await;
//!         let done = match result {
//!             Ok(()) => form.relay_succeeded(),
//!             Err(e) => form.relay_failed(&e),
//!         };
//!         // render done.notice, reset, arm done.reenable_after
//!     }
//!     _ => {}
//! }
//! ```

pub mod notice;
pub mod relay;
pub mod submit;
pub mod validate;

pub use notice::{FormNotice, NoticeBoard, NoticeKind, NOTICE_CLASS};
pub use relay::EmailRelay;
pub use submit::{
    Completion, ContactForm, ContactRecord, ContactValues, SubmitOutcome,
    SubmitPhase,
};
pub use validate::{FieldError, FieldKind, FieldSpec, FormField, Validity};
