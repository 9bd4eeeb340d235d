//! Entrance choreography, stat counters, parallax and the scroll reveal.
//!
//! Everything here is skipped when the visitor asked for reduced motion.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use web_sys::{Element, Event, IntersectionObserverEntry};

use super::{dom, observer, Page};
use crate::animation::counter::{start_delay, STAT_CONTAINERS, STAT_NUMBERS, STAT_THRESHOLD};
use crate::animation::entrance::{transition_css, ANIMATED_CLASS};
use crate::animation::parallax::{
    ABOUT_SELECTOR, FLOATING_SELECTOR, HERO_SELECTOR, PORTFOLIO_SELECTOR,
};
use crate::animation::reveal::{
    ACTIVE_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR,
};
use crate::animation::{
    Bounds, Cue, CueTarget, Entrance, EntranceGroup, EntranceTracker, Layer,
    Parallax, RevealFrame, RevealStep, RevealTask, StatCounter, Trigger,
    DEFAULT_THRESHOLDS, ENTRANCE_GROUPS,
};
use crate::options::MotionOptions;
use crate::util::frame_timing::FrameGate;
use crate::util::once::OneShotSet;
use crate::SiteError;

pub(super) fn mount(page: &Page) -> Result<(), SiteError> {
    if !page.motion.allows_motion() {
        log::info!("reduced motion requested, animations skipped");
        return Ok(());
    }
    let motion = &page.options.motion;
    let settle = Duration::from_millis(u64::from(motion.settle_delay_ms));

    for group in ENTRANCE_GROUPS {
        let name = group.name;
        if let Err(e) = mount_group(group, settle) {
            log::warn!("entrance group {name} not mounted: {e}");
        }
    }
    mount_counters(motion)?;
    mount_parallax(Parallax::new(motion.parallax.clone()))?;
    mount_reveal()
}

// -- Entrances -----------------------------------------------------------------

fn mount_group(group: EntranceGroup, settle: Duration) -> Result<(), SiteError> {
    let elements = Rc::new(dom::select_all(group.selector)?);
    if elements.is_empty() {
        return Ok(());
    }
    for (index, el) in elements.iter().enumerate() {
        if let Some(delay) = group.css_delay(index) {
            dom::set_style(el, "transition-delay", &delay)?;
        }
    }
    log::debug!("entrance group {}: {} elements", group.name, elements.len());

    let trigger = group.trigger;
    let root_margin = group.root_margin;
    let tracker = Rc::new(RefCell::new(EntranceTracker::new(group, elements.len())));

    let observed: Vec<Element> = match trigger {
        Trigger::Immediate => {
            let cues = tracker.borrow_mut().release_all();
            play(cues, &elements, settle);
            return Ok(());
        }
        Trigger::EachElement => elements.to_vec(),
        Trigger::Container(selector) => match dom::select(selector)? {
            Some(container) => vec![container],
            None => return Ok(()),
        },
    };

    let targets = observed.clone();
    let _ = observer::observe(
        &observed,
        &DEFAULT_THRESHOLDS,
        root_margin,
        move |entries, watcher| {
            let sightings = observer::sightings(&targets, entries);
            let cues = {
                let mut tracker = tracker.borrow_mut();
                let cues = tracker.observed(&sightings);
                if tracker.is_finished() {
                    watcher.disconnect();
                }
                cues
            };
            play(cues, &elements, settle);
        },
    )?;
    Ok(())
}

fn play(cues: Vec<Cue>, elements: &[Element], settle: Duration) {
    for cue in cues {
        let Some(host) = elements.get(cue.element) else {
            continue;
        };
        let (target, mark) = match cue.target {
            CueTarget::Element => (host.clone(), true),
            CueTarget::Part(selector) => {
                dom::report("entrance", add_class(host, ANIMATED_CLASS));
                match host.query_selector(selector).ok().flatten() {
                    Some(part) => (part, false),
                    None => continue,
                }
            }
        };
        let entrance = cue.entrance;
        dom::after(cue.delay, move || {
            dom::report("entrance", animate(&target, entrance, mark, settle));
        });
    }
}

fn animate(
    el: &Element,
    entrance: Entrance,
    mark: bool,
    settle: Duration,
) -> Result<(), SiteError> {
    let start = entrance.start();
    dom::set_style(el, "opacity", &start.opacity.to_string())?;
    dom::set_style(el, "transform", start.transform)?;
    dom::set_style(el, "transition", &transition_css())?;
    if mark {
        add_class(el, ANIMATED_CLASS)?;
    }

    let el = el.clone();
    dom::request_frame(move || {
        dom::after(settle, move || {
            let end = entrance.end();
            let result = dom::set_style(&el, "opacity", &end.opacity.to_string())
                .and_then(|()| dom::set_style(&el, "transform", end.transform));
            dom::report("entrance", result);
        });
    })
}

fn add_class(el: &Element, class: &str) -> Result<(), SiteError> {
    el.class_list().add_1(class)?;
    Ok(())
}

// -- Stat counters ---------------------------------------------------------------

struct Counters {
    numbers: Vec<Element>,
    started: OneShotSet,
    duration: Duration,
    tick: Duration,
}

impl Counters {
    /// Start every not-yet-counted number inside `container`.
    fn sighted(&mut self, container: &Element) -> Result<(), SiteError> {
        let inside = dom::select_all_in(container, STAT_NUMBERS)?;
        for (i, el) in inside.into_iter().enumerate() {
            let Some(index) = self.numbers.iter().position(|n| *n == el) else {
                continue;
            };
            if !self.started.trigger(index) {
                continue;
            }
            let text = el.text_content().unwrap_or_default();
            let Some(counter) = StatCounter::parse(&text, self.duration, self.tick) else {
                continue;
            };
            let tick = self.tick;
            dom::after(start_delay(i), move || run_counter(el, counter, tick));
        }
        Ok(())
    }
}

fn run_counter(el: Element, mut counter: StatCounter, tick: Duration) {
    el.set_text_content(Some(&counter.initial_text()));
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&handle);
    let interval = Interval::new(dom::millis(tick), move || {
        let frame = counter.tick();
        el.set_text_content(Some(&frame.text));
        if frame.finished {
            // Dropped outside the callback that is still running.
            if let Some(interval) = slot.borrow_mut().take() {
                dom::after(Duration::ZERO, move || drop(interval));
            }
        }
    });
    *handle.borrow_mut() = Some(interval);
}

fn mount_counters(motion: &MotionOptions) -> Result<(), SiteError> {
    let containers = dom::select_all(STAT_CONTAINERS)?;
    if containers.is_empty() {
        return Ok(());
    }
    let numbers = dom::select_all(STAT_NUMBERS)?;
    let counters = Rc::new(RefCell::new(Counters {
        started: OneShotSet::new(numbers.len()),
        numbers,
        duration: motion.counter_duration(),
        tick: motion.counter_tick(),
    }));

    let _ = observer::observe(
        &containers,
        &[STAT_THRESHOLD],
        "0px",
        move |entries: &[IntersectionObserverEntry], _| {
            for entry in entries {
                if entry.is_intersecting() && entry.intersection_ratio() > STAT_THRESHOLD {
                    let result = counters.borrow_mut().sighted(&entry.target());
                    dom::report("stat counter", result);
                }
            }
        },
    )?;
    Ok(())
}

// -- Parallax ----------------------------------------------------------------------

fn layers() -> Result<Vec<(Layer, Element)>, SiteError> {
    let mut layers = Vec::new();
    if let Some(el) = dom::select(HERO_SELECTOR)? {
        layers.push((Layer::Hero, el));
    }
    if let Some(el) = dom::select(ABOUT_SELECTOR)? {
        layers.push((Layer::About, el));
    }
    for (i, el) in dom::select_all(PORTFOLIO_SELECTOR)?.into_iter().enumerate() {
        layers.push((Layer::Portfolio(i), el));
    }
    for (i, el) in dom::select_all(FLOATING_SELECTOR)?.into_iter().enumerate() {
        layers.push((Layer::Floating(i), el));
    }
    Ok(layers)
}

fn mount_parallax(parallax: Parallax) -> Result<(), SiteError> {
    let layers = Rc::new(layers()?);
    if layers.is_empty() {
        return Ok(());
    }
    let parallax = Rc::new(parallax);
    let gate = Rc::new(RefCell::new(FrameGate::new()));

    let window = dom::window()?;
    dom::on_passive(&window, "scroll", move |_: Event| {
        if !gate.borrow_mut().request() {
            return;
        }
        let gate = Rc::clone(&gate);
        let layers = Rc::clone(&layers);
        let parallax = Rc::clone(&parallax);
        let scheduled = dom::request_frame(move || {
            dom::report("parallax", apply_parallax(&parallax, &layers));
            gate.borrow_mut().finish();
        });
        dom::report("parallax", scheduled);
    })
}

fn apply_parallax(parallax: &Parallax, layers: &[(Layer, Element)]) -> Result<(), SiteError> {
    let scroll_y = dom::scroll_y()?;
    let viewport = dom::viewport_height()?;
    for (layer, el) in layers {
        let rect = el.get_bounding_client_rect();
        let bounds = Bounds {
            top: rect.top(),
            bottom: rect.bottom(),
        };
        if let Some(transform) = parallax.frame(*layer, bounds, scroll_y, viewport) {
            dom::set_style(el, "transform", &transform)?;
        }
    }
    Ok(())
}

// -- Reveal ------------------------------------------------------------------------

fn mount_reveal() -> Result<(), SiteError> {
    let elements = dom::select_all(REVEAL_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }
    let tasks: Rc<RefCell<Vec<RevealTask>>> =
        Rc::new(RefCell::new(vec![RevealTask::new(); elements.len()]));
    let targets = Rc::new(elements.clone());

    let _ = observer::observe(
        &elements,
        &DEFAULT_THRESHOLDS,
        REVEAL_ROOT_MARGIN,
        move |entries, _| {
            for sighting in observer::sightings(&targets, entries) {
                let start = tasks
                    .borrow_mut()
                    .get_mut(sighting.element)
                    .is_some_and(|task| task.sighted(sighting.ratio));
                if start {
                    reveal_frame(Rc::clone(&tasks), Rc::clone(&targets), sighting.element);
                }
            }
        },
    )?;
    Ok(())
}

fn reveal_frame(tasks: Rc<RefCell<Vec<RevealTask>>>, targets: Rc<Vec<Element>>, index: usize) {
    let scheduled = dom::request_frame(move || {
        let Some(el) = targets.get(index) else {
            return;
        };
        let Ok(viewport) = dom::viewport_height() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let step = tasks
            .borrow_mut()
            .get_mut(index)
            .map(|task| task.frame(rect.top(), rect.height(), viewport));

        match step {
            Some(RevealStep::Continue(frame)) => {
                if let Some(frame) = frame {
                    dom::report("reveal", apply_reveal(el, frame));
                }
                reveal_frame(Rc::clone(&tasks), Rc::clone(&targets), index);
            }
            Some(RevealStep::Finish) => {
                let result = apply_reveal(el, RevealFrame::DONE)
                    .and_then(|()| add_class(el, ACTIVE_CLASS));
                dom::report("reveal", result);
            }
            Some(RevealStep::Park) | None => {}
        }
    });
    dom::report("reveal", scheduled);
}

fn apply_reveal(el: &Element, frame: RevealFrame) -> Result<(), SiteError> {
    dom::set_style(el, "opacity", &frame.opacity.to_string())?;
    dom::set_style(el, "transform", &frame.transform())
}
