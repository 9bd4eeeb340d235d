//! Submission state machine for the contact form.
//!
//! `ContactForm` owns the field states and the [`SubmitPhase`]. The binding
//! layer performs the relay call and reports back through
//! [`ContactForm::relay_succeeded`] or [`ContactForm::relay_failed`].

use std::time::Duration;

use serde::Serialize;

use super::{FieldSpec, FormField, FormNotice, Validity};
use crate::analytics::Tracker;
use crate::options::FormOptions;
use crate::SiteError;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// Ready to submit.
    #[default]
    Idle,
    /// A relay call is in flight.
    Sending,
    /// Delivered; the button stays disabled until the cooldown elapses.
    CoolingDown,
}

/// Raw values read from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactValues {
    /// `name` field.
    pub name: String,
    /// `email` field.
    pub email: String,
    /// `phone` field (optional).
    pub phone: String,
    /// `service` select (optional).
    pub service: String,
    /// `message` textarea.
    pub message: String,
}

/// Template parameters handed to the email relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    /// Sender name.
    pub from_name: String,
    /// Sender address.
    pub from_email: String,
    /// Phone number or the "not provided" placeholder.
    pub phone: String,
    /// Requested service or the "not provided" placeholder.
    pub service: String,
    /// Message body.
    pub message: String,
    /// Recipient mailbox.
    pub to_email: String,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Honeypot filled: drop silently, show nothing.
    Dropped,
    /// A previous submission is still in flight or cooling down.
    Busy,
    /// A required field failed validation. Field states were updated.
    Rejected {
        /// Summary to show under the form.
        notice: FormNotice,
    },
    /// Disable the button and send `record` to the relay.
    Dispatch {
        /// What to send.
        record: ContactRecord,
    },
}

/// What to render once the relay call finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Status message.
    pub notice: FormNotice,
    /// Whether the form's inputs should be reset.
    pub reset_fields: bool,
    /// Re-enable the button after this delay, or right away when `None`.
    pub reenable_after: Option<Duration>,
}

/// The contact form controller.
#[derive(Debug)]
pub struct ContactForm {
    fields: Vec<FormField>,
    phase: SubmitPhase,
    options: FormOptions,
    recipient: String,
    tracker: Tracker,
}

impl ContactForm {
    /// Form over `fields` (in document order), delivering to `recipient`.
    pub fn new(
        fields: impl IntoIterator<Item = FieldSpec>,
        options: FormOptions,
        recipient: &str,
        tracker: Tracker,
    ) -> Self {
        Self {
            fields: fields.into_iter().map(FormField::new).collect(),
            phase: SubmitPhase::Idle,
            options,
            recipient: recipient.to_owned(),
            tracker,
        }
    }

    /// All fields, in document order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Configured texts and delays.
    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Current submit phase.
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == SubmitPhase::Idle
    }

    /// Inline error text for a validity state.
    pub fn error_text(&self, validity: Validity) -> &str {
        validity.error_text(&self.options.messages)
    }

    /// Copy a DOM value into field `index` without validating.
    pub fn set_value(&mut self, index: usize, value: &str) {
        if let Some(field) = self.fields.get_mut(index) {
            field.set_value(value);
        }
    }

    /// Field `index` lost focus.
    pub fn blur(&mut self, index: usize, value: &str) -> Option<Validity> {
        let min = self.options.min_phone_length;
        self.fields.get_mut(index).map(|f| f.blur(value, min))
    }

    /// Field `index` received input. `Some` when the field was re-validated.
    pub fn input(&mut self, index: usize, value: &str) -> Option<Validity> {
        let min = self.options.min_phone_length;
        self.fields.get_mut(index)?.input(value, min)
    }

    /// The form was submitted. Field values must be synced with
    /// [`set_value`](Self::set_value) first.
    ///
    /// Only required fields are validated here; optional fields were
    /// checked on blur.
    pub fn submit(&mut self, honeypot: &str, values: &ContactValues) -> SubmitOutcome {
        if !honeypot.is_empty() {
            log::debug!("honeypot filled, dropping submission");
            return SubmitOutcome::Dropped;
        }
        if self.phase != SubmitPhase::Idle {
            return SubmitOutcome::Busy;
        }

        let min = self.options.min_phone_length;
        let mut valid = true;
        for field in self.fields.iter_mut().filter(|f| f.spec().required) {
            valid &= !field.validate(min).is_invalid();
        }
        if !valid {
            return SubmitOutcome::Rejected {
                notice: FormNotice::error(&self.options.messages.fix_errors),
            };
        }

        self.phase = SubmitPhase::Sending;
        SubmitOutcome::Dispatch {
            record: self.record(values),
        }
    }

    fn record(&self, values: &ContactValues) -> ContactRecord {
        let or_placeholder = |value: &str| {
            let value = value.trim();
            if value.is_empty() {
                self.options.not_provided.clone()
            } else {
                value.to_owned()
            }
        };
        ContactRecord {
            from_name: values.name.trim().to_owned(),
            from_email: values.email.trim().to_owned(),
            phone: or_placeholder(&values.phone),
            service: or_placeholder(&values.service),
            message: values.message.trim().to_owned(),
            to_email: self.recipient.clone(),
        }
    }

    /// The relay accepted the message.
    pub fn relay_succeeded(&mut self) -> Completion {
        self.phase = SubmitPhase::CoolingDown;
        self.fields.iter_mut().for_each(FormField::clear);
        self.tracker.track(
            "Contact",
            "form_submit",
            "Contact form submitted successfully",
        );
        Completion {
            notice: FormNotice::success(&self.options.messages.success),
            reset_fields: true,
            reenable_after: Some(self.options.reenable_delay()),
        }
    }

    /// The relay call failed.
    pub fn relay_failed(&mut self, error: &SiteError) -> Completion {
        log::error!("contact form delivery failed: {error}");
        self.phase = SubmitPhase::Idle;
        self.tracker
            .track("Contact", "form_error", "Contact form submission failed");
        Completion {
            notice: FormNotice::error(&self.options.messages.failure),
            reset_fields: false,
            reenable_after: None,
        }
    }

    /// The post-success cooldown elapsed.
    pub fn cooldown_elapsed(&mut self) {
        if self.phase == SubmitPhase::CoolingDown {
            self.phase = SubmitPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::recording;
    use crate::form::{FieldError, FieldKind, NoticeKind};

    fn specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", FieldKind::Text, true),
            FieldSpec::new("email", FieldKind::Email, true),
            FieldSpec::new("phone", FieldKind::Text, false),
            FieldSpec::new("service", FieldKind::Text, false),
            FieldSpec::new("message", FieldKind::Text, true),
        ]
    }

    fn values() -> ContactValues {
        ContactValues {
            name: " Ana ".to_owned(),
            email: "ana@vodovod.si".to_owned(),
            phone: String::new(),
            service: "  ".to_owned(),
            message: "Pušča pipa.".to_owned(),
        }
    }

    fn filled(form: &mut ContactForm, v: &ContactValues) {
        form.set_value(0, &v.name);
        form.set_value(1, &v.email);
        form.set_value(2, &v.phone);
        form.set_value(3, &v.service);
        form.set_value(4, &v.message);
    }

    fn form() -> (ContactForm, std::rc::Rc<crate::analytics::testing::RecordingSink>) {
        let (tracker, sink) = recording();
        let form =
            ContactForm::new(specs(), FormOptions::default(), "info@efadskejic.si", tracker);
        (form, sink)
    }

    #[test]
    fn honeypot_drops_without_validation() {
        let (mut form, sink) = form();
        assert_eq!(
            form.submit("http://spam.example", &ContactValues::default()),
            SubmitOutcome::Dropped
        );
        assert!(form.fields().iter().all(|f| f.validity() == Validity::Unchecked));
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn empty_required_fields_block_submission() {
        let (mut form, _) = form();
        let outcome = form.submit("", &ContactValues::default());
        let SubmitOutcome::Rejected { notice } = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, FormOptions::default().messages.fix_errors);

        let states: Vec<_> = form.fields().iter().map(FormField::validity).collect();
        assert_eq!(states[0], Validity::Invalid(FieldError::Required));
        assert_eq!(states[2], Validity::Unchecked);
        assert_eq!(form.phase(), SubmitPhase::Idle);

        // Filling the field clears its error on the next input.
        assert_eq!(form.input(0, "Ana"), Some(Validity::Valid));
    }

    #[test]
    fn blank_optionals_get_placeholder() {
        let (mut form, _) = form();
        let v = values();
        filled(&mut form, &v);
        let SubmitOutcome::Dispatch { record } = form.submit("", &v) else {
            panic!("expected dispatch");
        };
        assert_eq!(record.from_name, "Ana");
        assert_eq!(record.phone, "Ni navedeno");
        assert_eq!(record.service, "Ni navedeno");
        assert_eq!(record.to_email, "info@efadskejic.si");
        assert_eq!(form.phase(), SubmitPhase::Sending);
        assert!(!form.can_submit());
    }

    #[test]
    fn second_submit_while_sending_is_busy() {
        let (mut form, _) = form();
        let v = values();
        filled(&mut form, &v);
        assert!(matches!(form.submit("", &v), SubmitOutcome::Dispatch { .. }));
        assert_eq!(form.submit("", &v), SubmitOutcome::Busy);
    }

    #[test]
    fn success_resets_and_cools_down() {
        let (mut form, sink) = form();
        let v = values();
        filled(&mut form, &v);
        let _ = form.submit("", &v);

        let done = form.relay_succeeded();
        assert_eq!(done.notice.kind, NoticeKind::Success);
        assert!(done.reset_fields);
        assert_eq!(done.reenable_after, Some(Duration::from_secs(2)));
        assert!(form.fields().iter().all(|f| f.value().is_empty()));
        assert_eq!(sink.actions(), vec!["form_submit"]);

        assert!(!form.can_submit());
        assert_eq!(form.submit("", &v), SubmitOutcome::Busy);
        form.cooldown_elapsed();
        assert!(form.can_submit());
    }

    #[test]
    fn failure_reenables_immediately() {
        let (mut form, sink) = form();
        let v = values();
        filled(&mut form, &v);
        let _ = form.submit("", &v);

        let error = SiteError::RelayTransport("offline".to_owned());
        let done = form.relay_failed(&error);
        assert_eq!(done.notice.kind, NoticeKind::Error);
        assert!(!done.reset_fields);
        assert_eq!(done.reenable_after, None);
        assert!(form.can_submit());
        assert_eq!(form.fields()[0].value(), " Ana ");
        assert_eq!(sink.actions(), vec!["form_error"]);
    }

    #[test]
    fn cooldown_elapsed_outside_cooldown_is_noop() {
        let (mut form, _) = form();
        let v = values();
        filled(&mut form, &v);
        let _ = form.submit("", &v);
        form.cooldown_elapsed();
        assert_eq!(form.phase(), SubmitPhase::Sending);
    }
}
