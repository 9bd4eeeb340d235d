//! Global `gtag` sink, click tracking and the page error listener.

use std::rc::Rc;

use js_sys::{Function, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ErrorEvent, Event};

use super::{dom, Page};
use crate::analytics::{
    AnalyticsEvent, AnalyticsSink, ExceptionReport, Tracker,
};
use crate::SiteError;

/// Forwards to `window.gtag` when the analytics script has loaded.
///
/// The global is looked up on every call since the script loads
/// asynchronously and may appear after boot.
struct GtagSink;

impl GtagSink {
    fn gtag() -> Option<Function> {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str("gtag"))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn send(action: &str, params: &serde_json::Value) {
        let Some(gtag) = Self::gtag() else {
            return;
        };
        let result = JSON::parse(&params.to_string()).and_then(|params| {
            gtag.call3(
                &JsValue::NULL,
                &JsValue::from_str("event"),
                &JsValue::from_str(action),
                &params,
            )
        });
        if let Err(e) = result {
            log::debug!("gtag call failed: {}", SiteError::from(e));
        }
    }
}

impl AnalyticsSink for GtagSink {
    fn send_event(&self, event: &AnalyticsEvent) {
        Self::send(&event.action, &event.params());
    }

    fn send_exception(&self, report: &ExceptionReport) {
        Self::send("exception", &report.params());
    }
}

/// Tracker backed by `gtag`.
pub(super) fn tracker() -> Tracker {
    Tracker::new(Rc::new(GtagSink))
}

pub(super) fn mount(page: &Page) -> Result<(), SiteError> {
    for link in dom::select_all(".phone-link")? {
        let tracker = page.tracker.clone();
        dom::on(&link, "click", move |_: Event| {
            tracker.record(&AnalyticsEvent::phone_click());
        })?;
    }

    for el in dom::select_all("[data-ga-event=\"social_click\"]")? {
        let tracker = page.tracker.clone();
        let platform = el.get_attribute("aria-label");
        dom::on(&el, "click", move |_: Event| {
            tracker.record(&AnalyticsEvent::social_click(platform.as_deref()));
        })?;
    }
    Ok(())
}

/// Log uncaught page errors and report them as non-fatal exceptions.
///
/// Installed from the entry point, before the document is parsed.
pub(super) fn watch_errors(tracker: Tracker) -> Result<(), SiteError> {
    let window = dom::window()?;
    dom::on(&window, "error", move |event: ErrorEvent| {
        let description = describe(&event.error());
        let logged = description.clone().unwrap_or_else(|| event.message());
        log::error!("uncaught page error: {logged}");
        tracker.exception(&ExceptionReport::non_fatal(description.as_deref()));
    })
}

/// `String(error)` for a thrown value, `None` for `null`/`undefined`.
fn describe(error: &JsValue) -> Option<String> {
    if error.is_null() || error.is_undefined() {
        return None;
    }
    let text = error
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.to_string()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{error:?}"));
    Some(text)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::ErrorEventInit;

    use super::*;
    use crate::analytics::testing::RecordingSink;

    #[wasm_bindgen_test]
    fn page_errors_reach_the_tracker() {
        let sink = Rc::new(RecordingSink::default());
        watch_errors(Tracker::new(sink.clone())).unwrap();

        let init = ErrorEventInit::new();
        init.set_message("boom");
        init.set_error(&JsValue::from_str("TypeError: boom"));
        let event = ErrorEvent::new_with_event_init_dict("error", &init).unwrap();
        let _ = dom::window().unwrap().dispatch_event(&event).unwrap();

        let reports = sink.exceptions.borrow();
        let report = reports.last().unwrap();
        assert_eq!(report.description, "TypeError: boom");
        assert!(!report.fatal);
    }

    #[wasm_bindgen_test]
    fn describe_skips_missing_errors() {
        assert_eq!(describe(&JsValue::NULL), None);
        assert_eq!(describe(&JsValue::UNDEFINED), None);
        assert_eq!(describe(&JsValue::from_str("x")).as_deref(), Some("x"));
    }
}
