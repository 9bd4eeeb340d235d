//! Shared utilities: easing curves and CSS transition values, frame gating
//! and debouncing, and the one-shot marker type.

pub mod easing;
pub mod frame_timing;
pub mod once;
