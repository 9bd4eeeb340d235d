//! Analytics event tracking.
//!
//! Every feature reports interactions through a [`Tracker`]. The tracker
//! forwards to an optional [`AnalyticsSink`]; without a sink every call is a
//! no-op, and a sink must never fail the interaction it observes.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

/// A category/action/label triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    /// Coarse grouping (`"Contact"`, `"Navigation"`, ...).
    pub category: String,
    /// What happened (`"phone_click"`, `"faq_open"`, ...).
    pub action: String,
    /// Free-form detail (question text, link target, ...).
    pub label: String,
}

/// Event parameters in the shape `gtag('event', action, params)` expects.
#[derive(Debug, Serialize)]
struct EventParams<'a> {
    event_category: &'a str,
    event_label: &'a str,
}

impl AnalyticsEvent {
    /// Build an event from its three parts.
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.into(),
        }
    }

    /// A click on a `tel:` link.
    #[must_use]
    pub fn phone_click() -> Self {
        Self::new("Contact", "phone_click", "Phone number clicked")
    }

    /// A click on a social profile link, labelled by platform.
    #[must_use]
    pub fn social_click(platform: Option<&str>) -> Self {
        let platform = platform
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or("Unknown");
        Self::new("Social", "social_click", platform)
    }

    /// Parameters object for the analytics call.
    #[must_use]
    pub fn params(&self) -> serde_json::Value {
        serde_json::to_value(EventParams {
            event_category: &self.category,
            event_label: &self.label,
        })
        .unwrap_or_default()
    }
}

/// A non-fatal runtime error forwarded to analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExceptionReport {
    /// Error text, or `"Unknown error"` when the page gave none.
    pub description: String,
    /// Always `false`: the page keeps running.
    pub fatal: bool,
}

impl ExceptionReport {
    /// Report for an uncaught error that did not stop the page.
    #[must_use]
    pub fn non_fatal(description: Option<&str>) -> Self {
        Self {
            description: description
                .filter(|d| !d.is_empty())
                .unwrap_or("Unknown error")
                .to_owned(),
            fatal: false,
        }
    }

    /// Parameters object for the analytics call.
    #[must_use]
    pub fn params(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Destination for analytics records.
///
/// Implementations are fire-and-forget: they swallow their own failures.
pub trait AnalyticsSink {
    /// Deliver an interaction event.
    fn send_event(&self, event: &AnalyticsEvent);
    /// Deliver a non-fatal exception report.
    fn send_exception(&self, report: &ExceptionReport);
}

/// Shared, cheap-to-clone handle every feature records through.
#[derive(Clone, Default)]
pub struct Tracker {
    sink: Option<Rc<dyn AnalyticsSink>>,
}

impl Tracker {
    /// Tracker forwarding to `sink`.
    pub fn new(sink: Rc<dyn AnalyticsSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Tracker that records nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Record a category/action/label triple.
    pub fn track(&self, category: &str, action: &str, label: &str) {
        self.record(&AnalyticsEvent::new(category, action, label));
    }

    /// Record a prepared event.
    pub fn record(&self, event: &AnalyticsEvent) {
        log::debug!(
            "analytics {}/{}: {}",
            event.category,
            event.action,
            event.label
        );
        if let Some(sink) = &self.sink {
            sink.send_event(event);
        }
    }

    /// Record a non-fatal exception.
    pub fn exception(&self, report: &ExceptionReport) {
        if let Some(sink) = &self.sink {
            sink.send_exception(report);
        }
    }
}

impl fmt::Debug for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker")
            .field("enabled", &self.sink.is_some())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{AnalyticsEvent, AnalyticsSink, ExceptionReport, Tracker};

    /// Sink that keeps everything it receives.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub(crate) events: RefCell<Vec<AnalyticsEvent>>,
        pub(crate) exceptions: RefCell<Vec<ExceptionReport>>,
    }

    impl RecordingSink {
        pub(crate) fn actions(&self) -> Vec<String> {
            self.events.borrow().iter().map(|e| e.action.clone()).collect()
        }

        pub(crate) fn last(&self) -> Option<AnalyticsEvent> {
            self.events.borrow().last().cloned()
        }
    }

    impl AnalyticsSink for RecordingSink {
        fn send_event(&self, event: &AnalyticsEvent) {
            self.events.borrow_mut().push(event.clone());
        }

        fn send_exception(&self, report: &ExceptionReport) {
            self.exceptions.borrow_mut().push(report.clone());
        }
    }

    pub(crate) fn recording() -> (Tracker, Rc<RecordingSink>) {
        let sink = Rc::new(RecordingSink::default());
        (Tracker::new(sink.clone()), sink)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::recording;
    use super::*;

    #[test]
    fn disabled_tracker_is_silent() {
        let tracker = Tracker::disabled();
        tracker.track("Contact", "phone_click", "x");
        tracker.exception(&ExceptionReport::non_fatal(None));
    }

    #[test]
    fn events_reach_the_sink() {
        let (tracker, sink) = recording();
        tracker.track("FAQ", "faq_open", "How fast?");
        assert_eq!(
            sink.last(),
            Some(AnalyticsEvent::new("FAQ", "faq_open", "How fast?"))
        );
    }

    #[test]
    fn social_click_falls_back_to_unknown() {
        assert_eq!(AnalyticsEvent::social_click(None).label, "Unknown");
        assert_eq!(AnalyticsEvent::social_click(Some("  ")).label, "Unknown");
        assert_eq!(
            AnalyticsEvent::social_click(Some("Facebook")).label,
            "Facebook"
        );
    }

    #[test]
    fn params_use_gtag_keys() {
        let params = AnalyticsEvent::phone_click().params();
        assert_eq!(params["event_category"], "Contact");
        assert_eq!(params["event_label"], "Phone number clicked");

        let report = ExceptionReport::non_fatal(Some("TypeError: x"));
        assert_eq!(report.params()["fatal"], false);
        assert_eq!(report.params()["description"], "TypeError: x");
    }

    #[test]
    fn exceptions_reach_the_sink() {
        let (tracker, sink) = recording();
        tracker.exception(&ExceptionReport::non_fatal(Some("")));
        let reports = sink.exceptions.borrow();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].description, "Unknown error");
    }
}
