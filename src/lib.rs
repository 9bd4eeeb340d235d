// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (clippy default thresholds)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Client-side behavior layer for a single-page plumbing business website.
//!
//! Tapline wires the static marketing page up: analytics tracking, the
//! mobile menu, smooth in-page scrolling, contact-form validation and
//! delivery through an email relay, the portfolio lightbox, the FAQ
//! accordion, scroll-triggered entrance animations, parallax, and small
//! cosmetic touches.
//!
//! # Key entry points
//!
//! - [`options::SiteOptions`] - runtime configuration (texts, delays,
//!   relay credentials, motion constants)
//! - [`analytics::Tracker`] - fire-and-forget analytics hook shared by every
//!   feature
//! - [`form::ContactForm`] - field validation and the submission state
//!   machine
//! - [`animation`] - entrance, counter, parallax and reveal motion
//!
//! # Architecture
//!
//! Every feature is a controller object that owns its state explicitly and
//! answers events with plain-data updates. Nothing in the core touches the
//! DOM, so all of it is unit-tested natively. The `web` feature compiles the
//! binding layer in the `web` module, which reads the page,
//! drives the controllers, and writes their updates back as attributes,
//! classes and inline styles.
//!
//! # Web feature
//!
//! With `--features web` the crate exports a `#[wasm_bindgen(start)]` entry
//! point that mounts every feature once the document is ready.

pub mod analytics;
pub mod animation;
pub mod chrome;
pub mod error;
pub mod faq;
pub mod form;
pub mod lightbox;
pub mod navigation;
pub mod options;
pub mod util;

#[cfg(feature = "web")]
pub mod web;

pub use error::SiteError;
