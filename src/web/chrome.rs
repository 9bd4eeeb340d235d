//! Hover classes, footer year, lazy-image fallback and the body fade-in.

use js_sys::{Date, Reflect};
use wasm_bindgen::JsValue;
use web_sys::{Element, Event};

use super::{dom, observer, Page};
use crate::chrome::{
    body_fade_css, lazy_source, BODY_HIDDEN, BODY_SHOWN, CURRENT_YEAR_ID,
    HOVER_CLASSES, LAZY_CLASS, LAZY_SELECTOR,
};
use crate::SiteError;

pub(super) fn mount(_page: &Page) -> Result<(), SiteError> {
    for (selector, class) in HOVER_CLASSES {
        for el in dom::select_all(selector)? {
            el.class_list().add_1(class)?;
        }
    }

    if let Some(year) = dom::document()?.get_element_by_id(CURRENT_YEAR_ID) {
        let now = Date::new_0();
        year.set_text_content(Some(&now.get_full_year().to_string()));
    }

    if native_lazy_loading() {
        log::debug!("native lazy loading available");
    } else {
        mount_lazy_fallback()?;
    }
    mount_fade_in()
}

/// Whether `HTMLImageElement.prototype` knows `loading`.
fn native_lazy_loading() -> bool {
    let Ok(window) = dom::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str("HTMLImageElement"))
        .and_then(|ctor| Reflect::get(&ctor, &JsValue::from_str("prototype")))
        .and_then(|proto| Reflect::has(&proto, &JsValue::from_str("loading")))
        .unwrap_or(false)
}

fn mount_lazy_fallback() -> Result<(), SiteError> {
    let images = dom::select_all(LAZY_SELECTOR)?;
    if images.is_empty() {
        return Ok(());
    }
    let _ = observer::observe(&images, &[0.0], "0px", |entries, watcher| {
        for entry in entries.iter().filter(|e| e.is_intersecting()) {
            let img = entry.target();
            dom::report("lazy image", swap_source(&img));
            watcher.unobserve(&img);
        }
    })?;
    Ok(())
}

fn swap_source(img: &Element) -> Result<(), SiteError> {
    let data_src = img.get_attribute("data-src");
    let src = img.get_attribute("src").unwrap_or_default();
    let chosen = lazy_source(data_src.as_deref(), &src).to_owned();
    img.set_attribute("src", &chosen)?;
    img.class_list().remove_1(LAZY_CLASS)?;
    Ok(())
}

fn mount_fade_in() -> Result<(), SiteError> {
    let body = dom::body()?;
    body.style().set_property("opacity", BODY_HIDDEN)?;
    body.style().set_property("transition", &body_fade_css())?;

    if dom::document()?.ready_state() == "complete" {
        body.style().set_property("opacity", BODY_SHOWN)?;
        return Ok(());
    }
    let window = dom::window()?;
    dom::on(&window, "load", move |_: Event| {
        if let Err(e) = body.style().set_property("opacity", BODY_SHOWN) {
            log::warn!("body fade-in: {}", SiteError::from(e));
        }
    })
}
