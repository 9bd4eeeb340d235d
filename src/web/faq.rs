//! FAQ accordion binding and the resize re-measure.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use web_sys::{Element, Event, MouseEvent};
use web_time::Instant;

use super::{dom, Page};
use crate::faq::{EntryUpdate, FaqAccordion};
use crate::util::frame_timing::Debounce;
use crate::SiteError;

const RESIZE_QUIET: Duration = Duration::from_millis(150);

struct Entry {
    question: Element,
    answer: Option<Element>,
}

impl Entry {
    fn render(&self, update: EntryUpdate) -> Result<(), SiteError> {
        self.question
            .set_attribute("aria-expanded", update.aria_expanded())?;
        let Some(answer) = &self.answer else {
            return Ok(());
        };
        let height = update.max_height(answer.scroll_height());
        if height.is_empty() {
            dom::clear_style(answer, "max-height")
        } else {
            dom::set_style(answer, "max-height", &height)
        }
    }

    fn is_expanded(&self) -> bool {
        self.question.get_attribute("aria-expanded").as_deref() == Some("true")
    }

    fn label(&self) -> String {
        self.question
            .query_selector("span")
            .ok()
            .flatten()
            .and_then(|span| span.text_content())
            .unwrap_or_default()
    }
}

pub(super) fn mount(page: &Page) -> Result<(), SiteError> {
    let entries: Rc<Vec<Entry>> = Rc::new(
        dom::select_all(".faq-question")?
            .into_iter()
            .map(|question| Entry {
                answer: question.next_element_sibling(),
                question,
            })
            .collect(),
    );
    if entries.is_empty() {
        return Ok(());
    }
    let accordion = FaqAccordion::from_states(
        entries.iter().map(Entry::is_expanded),
        page.tracker.clone(),
    );
    for update in accordion.snapshot() {
        if let Some(entry) = entries.get(update.index) {
            entry.render(update)?;
        }
    }
    let accordion = Rc::new(RefCell::new(accordion));

    for (index, entry) in entries.iter().enumerate() {
        let entries = Rc::clone(&entries);
        let accordion = Rc::clone(&accordion);
        dom::on(&entry.question, "click", move |_: MouseEvent| {
            let label = entries[index].label();
            let updates = accordion.borrow_mut().toggle(index, &label);
            for update in updates {
                if let Some(entry) = entries.get(update.index) {
                    dom::report("faq", entry.render(update));
                }
            }
        })?;
    }

    let debounce = Rc::new(RefCell::new(Debounce::new(RESIZE_QUIET)));
    let window = dom::window()?;
    dom::on_passive(&window, "resize", move |_: Event| {
        debounce.borrow_mut().touch(Instant::now());
        let debounce = Rc::clone(&debounce);
        let entries = Rc::clone(&entries);
        let accordion = Rc::clone(&accordion);
        dom::after(RESIZE_QUIET, move || {
            if !debounce.borrow_mut().settled(Instant::now()) {
                return;
            }
            let Some(index) = accordion.borrow().expanded_index() else {
                return;
            };
            if let Some(entry) = entries.get(index) {
                let update = EntryUpdate {
                    index,
                    expanded: true,
                };
                dom::report("faq", entry.render(update));
            }
        });
    })
}
