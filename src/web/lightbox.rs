//! Portfolio lightbox binding.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement, KeyboardEvent, MouseEvent};

use super::{dom, Page};
use crate::lightbox::{CloseTrigger, Lightbox, LightboxUpdate};
use crate::SiteError;

struct LightboxView {
    overlay: Element,
    image: Element,
    title: Option<Element>,
}

impl LightboxView {
    fn render(&self, update: &LightboxUpdate) -> Result<(), SiteError> {
        if let LightboxUpdate::Open { src, title } = update {
            self.image.set_attribute("src", src)?;
            self.image.set_attribute("alt", title)?;
            if let Some(el) = &self.title {
                el.set_text_content(Some(title));
            }
        }
        self.overlay.set_attribute("aria-hidden", update.aria_hidden())?;
        dom::body()?
            .style()
            .set_property("overflow", update.body_overflow())?;
        Ok(())
    }
}

/// Shared handles every listener closes over.
#[derive(Clone)]
struct Controls {
    view: Rc<LightboxView>,
    lightbox: Rc<RefCell<Lightbox>>,
}

impl Controls {
    fn run(&self, f: impl FnOnce(&mut Lightbox) -> Option<LightboxUpdate>) {
        let update = f(&mut self.lightbox.borrow_mut());
        if let Some(update) = update {
            dom::report("lightbox", self.view.render(&update));
        }
    }
}

pub(super) fn mount(page: &Page) -> Result<(), SiteError> {
    let document = dom::document()?;
    let (Some(overlay), Some(image)) = (
        document.get_element_by_id("lightbox"),
        document.get_element_by_id("lightbox-image"),
    ) else {
        return Ok(());
    };

    let controls = Controls {
        view: Rc::new(LightboxView {
            overlay: overlay.clone(),
            image,
            title: document.get_element_by_id("lightbox-title"),
        }),
        lightbox: Rc::new(RefCell::new(Lightbox::new(page.tracker.clone()))),
    };

    for button in dom::select_all(".portfolio-view-btn")? {
        let controls = controls.clone();
        let source = button.clone();
        dom::on(&button, "click", move |_: MouseEvent| {
            let Some(item) = source.closest(".portfolio-item").ok().flatten() else {
                return;
            };
            let src = item
                .query_selector(".portfolio-image")
                .ok()
                .flatten()
                .and_then(|img| image_source(&img));
            let title = item
                .query_selector("h3")
                .ok()
                .flatten()
                .and_then(|h| h.text_content())
                .unwrap_or_default();
            controls.run(|lb| lb.open(src.as_deref(), &title));
        })?;
    }

    if let Some(close) = dom::select(".lightbox-close")? {
        let controls = controls.clone();
        dom::on(&close, "click", move |_: MouseEvent| {
            controls.run(|lb| lb.close(CloseTrigger::Button));
        })?;
    }

    {
        let controls = controls.clone();
        dom::on(&document, "keydown", move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                controls.run(|lb| lb.close(CloseTrigger::Escape));
            }
        })?;
    }

    let backdrop = overlay.clone();
    dom::on(&backdrop, "click", move |event: MouseEvent| {
        let on_backdrop = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|t| t == overlay);
        if on_backdrop {
            controls.run(|lb| lb.close(CloseTrigger::Backdrop));
        }
    })
}

fn image_source(el: &Element) -> Option<String> {
    el.dyn_ref::<HtmlImageElement>()
        .map(HtmlImageElement::src)
        .or_else(|| el.get_attribute("src"))
        .filter(|src| !src.is_empty())
}
