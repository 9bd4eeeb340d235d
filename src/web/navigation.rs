//! Mobile menu, smooth anchors, the back-to-top button and the scroll
//! progress bar.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent, Node};

use super::{dom, Page};
use crate::navigation::{
    scroll_progress, AnchorAction, AnchorScroller, ListenerChange, MenuUpdate,
    MobileMenu, ScrollTopButton,
};
use crate::SiteError;

const SCROLL_TOP_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; \
    width: 50px; height: 50px; border-radius: 50%; \
    background-color: var(--primary-color); color: white; border: none; \
    font-size: 24px; cursor: pointer; display: none; z-index: 999; \
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3); transition: all 0.3s ease;";

const PROGRESS_STYLE: &str = "position: fixed; top: 0; left: 0; width: 0%; \
    height: 3px; background: linear-gradient(90deg, var(--primary), \
    var(--secondary)); z-index: 9999; transition: width 0.1s ease;";

pub(super) fn mount(page: &Page) -> Result<(), SiteError> {
    mount_menu()?;
    mount_anchors(page)?;
    mount_scroll_top(page)?;
    mount_progress()
}

// -- Mobile menu -----------------------------------------------------------

struct MenuView {
    document: Document,
    toggle: Element,
    nav: Element,
    /// The document-level outside-click listener.
    outside: RefCell<Option<Function>>,
}

impl MenuView {
    fn render(&self, update: MenuUpdate) -> Result<(), SiteError> {
        let expanded = if update.expanded { "true" } else { "false" };
        self.toggle.set_attribute("aria-expanded", expanded)?;
        self.nav.set_attribute("aria-expanded", expanded)?;

        let outside = self.outside.borrow();
        let Some(listener) = outside.as_ref() else {
            return Ok(());
        };
        match update.listener {
            ListenerChange::Install => self
                .document
                .add_event_listener_with_callback("click", listener)?,
            ListenerChange::Remove => self
                .document
                .remove_event_listener_with_callback("click", listener)?,
            ListenerChange::Keep => {}
        }
        Ok(())
    }

    fn contains(&self, target: Option<&Node>) -> bool {
        self.toggle.contains(target) || self.nav.contains(target)
    }
}

fn mount_menu() -> Result<(), SiteError> {
    let (Some(toggle), Some(nav)) =
        (dom::select(".mobile-menu-toggle")?, dom::select("nav")?)
    else {
        return Ok(());
    };

    let expanded = toggle.get_attribute("aria-expanded").as_deref() == Some("true");
    let menu = Rc::new(RefCell::new(MobileMenu::from_markup(expanded)));
    let view = Rc::new(MenuView {
        document: dom::document()?,
        toggle: toggle.clone(),
        nav: nav.clone(),
        outside: RefCell::new(None),
    });

    let outside = {
        let menu = Rc::clone(&menu);
        let view = Rc::clone(&view);
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let update = menu.borrow_mut().document_click(view.contains(target.as_ref()));
            if let Some(update) = update {
                dom::report("menu", view.render(update));
            }
        })
    };
    *view.outside.borrow_mut() = Some(outside.as_ref().unchecked_ref::<Function>().clone());
    outside.forget();

    {
        let menu = Rc::clone(&menu);
        let view = Rc::clone(&view);
        dom::on(&toggle, "click", move |_: MouseEvent| {
            let update = menu.borrow_mut().toggle();
            dom::report("menu", view.render(update));
        })?;
    }

    for link in dom::select_all_in(&nav, "a")? {
        let menu = Rc::clone(&menu);
        let view = Rc::clone(&view);
        dom::on(&link, "click", move |_: MouseEvent| {
            let update = menu.borrow_mut().link_clicked();
            dom::report("menu", view.render(update));
        })?;
    }
    Ok(())
}

// -- Smooth anchors ----------------------------------------------------------

fn mount_anchors(page: &Page) -> Result<(), SiteError> {
    let scroller = Rc::new(AnchorScroller::new(
        page.options.navigation.header_offset,
        page.tracker.clone(),
    ));

    for link in dom::select_all("a[href^=\"#\"]")? {
        let scroller = Rc::clone(&scroller);
        let href_of = link.clone();
        dom::on(&link, "click", move |event: MouseEvent| {
            let href = href_of.get_attribute("href").unwrap_or_default();
            dom::report("anchor", follow(&scroller, &href, &event));
        })?;
    }
    Ok(())
}

fn follow(scroller: &AnchorScroller, href: &str, event: &MouseEvent) -> Result<(), SiteError> {
    let target_top = if AnchorScroller::is_fragment(href) {
        dom::select(href)?.map(|el| dom::top_of(&el))
    } else {
        None
    };
    match scroller.click(href, target_top, dom::scroll_y()?) {
        AnchorAction::SuppressOnly => event.prevent_default(),
        AnchorAction::ScrollTo { top } => {
            event.prevent_default();
            dom::scroll_smooth_to(top)?;
        }
        AnchorAction::Ignore => {}
    }
    Ok(())
}

// -- Back to top ---------------------------------------------------------------

fn mount_scroll_top(page: &Page) -> Result<(), SiteError> {
    let document = dom::document()?;
    let el = document.create_element("button")?;
    el.set_class_name("scroll-to-top");
    el.set_text_content(Some("↑"));
    el.set_attribute("aria-label", &page.options.navigation.scroll_top_label)?;
    el.set_attribute("style", SCROLL_TOP_STYLE)?;
    let _ = dom::body()?.append_child(&el)?;

    let button = Rc::new(RefCell::new(ScrollTopButton::new(
        page.options.navigation.scroll_top_threshold,
        page.tracker.clone(),
    )));

    {
        let button = Rc::clone(&button);
        let el = el.clone();
        let window = dom::window()?;
        dom::on_passive(&window, "scroll", move |_: Event| {
            let result = dom::scroll_y().and_then(|y| {
                let mut button = button.borrow_mut();
                if button.scrolled(y).is_some() {
                    dom::set_style(&el, "display", button.display())?;
                }
                Ok(())
            });
            dom::report("scroll-to-top", result);
        })?;
    }

    {
        let button = Rc::clone(&button);
        dom::on(&el, "click", move |_: MouseEvent| {
            let top = button.borrow().clicked();
            dom::report("scroll-to-top", dom::scroll_smooth_to(top));
        })?;
    }

    for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
        let target = el.clone();
        dom::on(&el, event, move |_: MouseEvent| {
            let transform = ScrollTopButton::hover_transform(hovered);
            dom::report("scroll-to-top", dom::set_style(&target, "transform", transform));
        })?;
    }
    Ok(())
}

// -- Progress bar ----------------------------------------------------------------

fn mount_progress() -> Result<(), SiteError> {
    let bar = match dom::select(".scroll-progress")? {
        Some(bar) => bar,
        None => {
            let bar = dom::document()?.create_element("div")?;
            bar.set_class_name("scroll-progress");
            bar.set_attribute("style", PROGRESS_STYLE)?;
            let _ = dom::body()?.append_child(&bar)?;
            bar
        }
    };

    let window = dom::window()?;
    dom::on_passive(&window, "scroll", move |_: Event| {
        dom::report("scroll progress", update_progress(&bar));
    })
}

fn update_progress(bar: &Element) -> Result<(), SiteError> {
    let root = dom::document()?
        .document_element()
        .ok_or(SiteError::MissingGlobal("documentElement"))?;
    let percent = scroll_progress(
        dom::scroll_y()?,
        f64::from(root.scroll_height()),
        dom::viewport_height()?,
    );
    dom::set_style(bar, "width", &format!("{percent}%"))
}
