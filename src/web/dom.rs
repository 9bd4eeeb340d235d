//! Thin helpers over `web-sys`: globals, queries, listeners, styles and
//! timers.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, HtmlElement,
    NodeList, ScrollBehavior, ScrollToOptions, Window,
};

use crate::SiteError;

pub(super) fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::MissingGlobal("window"))
}

pub(super) fn document() -> Result<Document, SiteError> {
    window()?
        .document()
        .ok_or(SiteError::MissingGlobal("document"))
}

pub(super) fn body() -> Result<HtmlElement, SiteError> {
    document()?.body().ok_or(SiteError::MissingGlobal("body"))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First match in the document, `None` when absent or the selector is
/// invalid.
pub(super) fn select(selector: &str) -> Result<Option<Element>, SiteError> {
    Ok(document()?.query_selector(selector).ok().flatten())
}

/// All matches in the document, in document order.
pub(super) fn select_all(selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(elements(&document()?.query_selector_all(selector)?))
}

/// All matches below `root`.
pub(super) fn select_all_in(
    root: &Element,
    selector: &str,
) -> Result<Vec<Element>, SiteError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

/// Attach a listener for the lifetime of the page.
pub(super) fn on<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), SiteError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`on`], registered as passive (scroll, resize).
pub(super) fn on_passive<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), SiteError>
where
    E: FromWasmAbi + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Set one inline style property. Non-HTML elements are left alone.
pub(super) fn set_style(el: &Element, property: &str, value: &str) -> Result<(), SiteError> {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        el.style().set_property(property, value)?;
    }
    Ok(())
}

/// Remove one inline style property.
pub(super) fn clear_style(el: &Element, property: &str) -> Result<(), SiteError> {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().remove_property(property)?;
    }
    Ok(())
}

/// Viewport-relative top of `el`.
pub(super) fn top_of(el: &Element) -> f64 {
    el.get_bounding_client_rect().top()
}

/// Vertical scroll offset of the page.
pub(super) fn scroll_y() -> Result<f64, SiteError> {
    Ok(window()?.scroll_y()?)
}

/// Window inner height in CSS pixels.
pub(super) fn viewport_height() -> Result<f64, SiteError> {
    Ok(window()?.inner_height()?.as_f64().unwrap_or_default())
}

/// Smooth-scroll the window to document offset `top`.
pub(super) fn scroll_smooth_to(top: f64) -> Result<(), SiteError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Run `f` on the next animation frame.
pub(super) fn request_frame(f: impl FnOnce() + 'static) -> Result<(), SiteError> {
    let callback = Closure::once_into_js(f);
    let _ = window()?.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}

/// Run `f` once after `delay`.
pub(super) fn after(delay: Duration, f: impl FnOnce() + 'static) {
    let _ = Timeout::new(millis(delay), f).forget();
}

/// Timer milliseconds for `delay`, saturating.
pub(super) fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Log a failure inside a callback that has no caller to report to.
pub(super) fn report(context: &str, result: Result<(), SiteError>) {
    if let Err(e) = result {
        log::warn!("{context}: {e}");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::Event;

    use super::*;

    #[wasm_bindgen_test]
    fn window_listeners_receive_events() {
        let window = window().unwrap();
        let seen = Rc::new(Cell::new(0));

        let count = Rc::clone(&seen);
        on(&window, "tapline-ping", move |_: Event| count.set(count.get() + 1)).unwrap();
        let count = Rc::clone(&seen);
        on_passive(&window, "tapline-ping", move |_: Event| count.set(count.get() + 1))
            .unwrap();

        let event = Event::new("tapline-ping").unwrap();
        let _ = window.dispatch_event(&event).unwrap();
        assert_eq!(seen.get(), 2);
    }

    #[wasm_bindgen_test]
    fn timer_millis_saturate() {
        assert_eq!(millis(Duration::from_millis(150)), 150);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
