//! Browser binding layer.
//!
//! Reads the DOM, drives the controllers of the core modules, and projects
//! their updates back onto attributes, classes and inline styles. Nothing
//! in here decides anything a unit test would care about.

mod analytics;
mod animation;
mod chrome;
mod dom;
mod faq;
mod form;
mod lightbox;
mod navigation;
mod observer;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::analytics::Tracker;
use crate::animation::preferences::REDUCED_MOTION_QUERY;
use crate::animation::MotionPreference;
use crate::options::{SiteOptions, OPTIONS_ELEMENT_ID};
use crate::SiteError;

/// Everything a feature needs to mount.
struct Page {
    options: SiteOptions,
    tracker: Tracker,
    motion: MotionPreference,
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        // Another logger was installed first; keep using it.
        log::debug!("console logger not installed: {e}");
    }
    if let Err(e) = analytics::watch_errors(analytics::tracker()) {
        log::warn!("page error listener not installed: {e}");
    }
    if let Err(e) = when_ready(boot) {
        log::error!("page behavior not started: {e}");
    }
}

/// Run `f` once the document is parsed.
fn when_ready(f: fn()) -> Result<(), SiteError> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let closure = Closure::<dyn FnMut(Event)>::once(move |_: Event| f());
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}

fn boot() {
    let options = load_options();
    let reduced = reduced_motion_requested();
    let page = Page {
        motion: MotionPreference::resolve(options.motion.enabled, reduced),
        tracker: analytics::tracker(),
        options,
    };
    log::info!("tapline starting (motion: {:?})", page.motion);

    mount("analytics", analytics::mount(&page));
    mount("navigation", navigation::mount(&page));
    mount("contact form", form::mount(&page));
    mount("lightbox", lightbox::mount(&page));
    mount("faq", faq::mount(&page));
    mount("animations", animation::mount(&page));
    mount("chrome", chrome::mount(&page));

    for line in page.options.branding.banner() {
        log::info!("{line}");
    }
}

fn mount(feature: &str, result: Result<(), SiteError>) {
    match result {
        Ok(()) => log::debug!("mounted {feature}"),
        Err(e) => log::warn!("{feature} not mounted: {e}"),
    }
}

fn load_options() -> SiteOptions {
    let embedded = dom::document()
        .ok()
        .and_then(|d| d.get_element_by_id(OPTIONS_ELEMENT_ID))
        .and_then(|el| el.text_content());
    SiteOptions::from_embedded(embedded.as_deref())
}

fn reduced_motion_requested() -> bool {
    dom::window()
        .ok()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
