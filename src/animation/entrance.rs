//! Scroll-triggered entrance animations.
//!
//! Each observed group has a selector, a trigger, a choreography and a
//! stagger rule (see [`ENTRANCE_GROUPS`]). An [`EntranceTracker`] turns
//! intersection sightings into [`Cue`]s: which element (or which part of
//! it) animates, with which entrance, after which delay.
//!
//! # Playing a cue
//!
//! After the cue's delay the start pose is applied together with
//! [`transition_css`], then one frame plus the settle delay later the end
//! pose. Element cues also get [`ANIMATED_CLASS`].

use std::time::Duration;

use super::DEFAULT_ROOT_MARGIN;
use crate::util::easing::{EasingFunction, Transition};
use crate::util::once::OneShotSet;

/// Class added to an element once its entrance has played.
pub const ANIMATED_CLASS: &str = "animated";

const ENTRANCE_TRANSITIONS: [Transition; 2] = [
    Transition::new("opacity", 800, EasingFunction::STANDARD),
    Transition::new("transform", 800, EasingFunction::STANDARD),
];

/// CSS `transition` value applied with the start pose.
pub fn transition_css() -> String {
    Transition::css_list(&ENTRANCE_TRANSITIONS)
}

/// Opacity and transform of one end of an entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// CSS opacity.
    pub opacity: f64,
    /// CSS transform.
    pub transform: &'static str,
}

impl Pose {
    const fn new(opacity: f64, transform: &'static str) -> Self {
        Self { opacity, transform }
    }
}

/// Entrance variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    /// Rise while fading in, with a slight zoom.
    FadeUp,
    /// Drop in from above.
    FadeDown,
    /// Slide in from the left with a small tilt.
    FadeLeft,
    /// Slide in from the right with a small tilt.
    FadeRight,
    /// Grow in with a slight turn.
    ScaleIn,
    /// Rise from further below, no zoom.
    SlideUp,
    /// Turn upright while growing. No built-in group uses it.
    RotateIn,
}

impl Entrance {
    /// Left for even indices, right for odd.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Self::FadeLeft
        } else {
            Self::FadeRight
        }
    }

    /// Pose applied before the transition starts.
    pub fn start(self) -> Pose {
        match self {
            Self::FadeUp => Pose::new(0.0, "translateY(60px) scale(0.95)"),
            Self::FadeDown => Pose::new(0.0, "translateY(-40px)"),
            Self::FadeLeft => Pose::new(0.0, "translateX(-60px) rotate(-5deg)"),
            Self::FadeRight => Pose::new(0.0, "translateX(60px) rotate(5deg)"),
            Self::ScaleIn => Pose::new(0.0, "scale(0.8) rotateY(15deg)"),
            Self::SlideUp => Pose::new(0.0, "translateY(80px)"),
            Self::RotateIn => Pose::new(0.0, "rotate(-10deg) scale(0.9)"),
        }
    }

    /// Pose the element settles into.
    pub fn end(self) -> Pose {
        match self {
            Self::FadeUp => Pose::new(1.0, "translateY(0) scale(1)"),
            Self::FadeDown | Self::SlideUp => Pose::new(1.0, "translateY(0)"),
            Self::FadeLeft | Self::FadeRight => {
                Pose::new(1.0, "translateX(0) rotate(0deg)")
            }
            Self::ScaleIn => Pose::new(1.0, "scale(1) rotateY(0deg)"),
            Self::RotateIn => Pose::new(1.0, "rotate(0deg) scale(1)"),
        }
    }
}

/// What starts a group's entrances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Every element is observed on its own.
    EachElement,
    /// One container is observed; when it shows, every element of the
    /// group animates.
    Container(&'static str),
    /// All elements animate right after boot.
    Immediate,
}

/// A sub-element animated as part of its parent's entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    /// Selector resolved inside the triggering element.
    pub selector: &'static str,
    /// Entrance of the part.
    pub entrance: Entrance,
    /// Fixed delay of the part.
    pub delay_ms: u32,
}

/// Which entrance each element (or part) gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choreography {
    /// The same entrance for all.
    Uniform(Entrance),
    /// [`Entrance::alternating`] by stagger index.
    Alternating,
    /// The element itself does not move; its parts do.
    Parts(&'static [Part]),
}

/// How delays grow across a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stagger {
    /// No delay.
    None,
    /// `ms` times the position of the sighting within its observer batch.
    BatchIndex(u32),
    /// `ms` times the element's position within the group.
    ElementIndex(u32),
    /// No scheduling delay; a CSS `transition-delay` of `ms` times the
    /// element index is set once at mount instead.
    CssDelay(u32),
}

impl Stagger {
    fn delay(self, batch_index: usize, element_index: usize) -> Duration {
        let (ms, index) = match self {
            Self::None | Self::CssDelay(_) => return Duration::ZERO,
            Self::BatchIndex(ms) => (ms, batch_index),
            Self::ElementIndex(ms) => (ms, element_index),
        };
        Duration::from_millis(u64::from(ms) * index as u64)
    }

    fn index(self, batch_index: usize, element_index: usize) -> usize {
        match self {
            Self::BatchIndex(_) => batch_index,
            Self::None | Self::ElementIndex(_) | Self::CssDelay(_) => element_index,
        }
    }
}

/// One observed group of elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceGroup {
    /// Short name used in logs.
    pub name: &'static str,
    /// Selector of the animated elements.
    pub selector: &'static str,
    /// What starts the entrances.
    pub trigger: Trigger,
    /// Sightings must exceed this intersection ratio, when set.
    pub min_ratio: Option<f64>,
    /// Observer root margin.
    pub root_margin: &'static str,
    /// Entrance per element.
    pub choreography: Choreography,
    /// Delay rule.
    pub stagger: Stagger,
}

impl EntranceGroup {
    const fn each(
        name: &'static str,
        selector: &'static str,
        choreography: Choreography,
        stagger: Stagger,
    ) -> Self {
        Self {
            name,
            selector,
            trigger: Trigger::EachElement,
            min_ratio: None,
            root_margin: DEFAULT_ROOT_MARGIN,
            choreography,
            stagger,
        }
    }

    /// `transition-delay` to set on element `index` at mount, for groups
    /// staggered in CSS.
    pub fn css_delay(&self, index: usize) -> Option<String> {
        match self.stagger {
            Stagger::CssDelay(ms) => {
                let secs = Duration::from_millis(u64::from(ms) * index as u64)
                    .as_secs_f64();
                Some(format!("{secs}s"))
            }
            Stagger::None | Stagger::BatchIndex(_) | Stagger::ElementIndex(_) => {
                None
            }
        }
    }
}

const SECTION_HEADER_PARTS: [Part; 3] = [
    Part {
        selector: ".section-label",
        entrance: Entrance::FadeDown,
        delay_ms: 0,
    },
    Part {
        selector: ".section-title",
        entrance: Entrance::FadeUp,
        delay_ms: 200,
    },
    Part {
        selector: ".section-description",
        entrance: Entrance::FadeUp,
        delay_ms: 400,
    },
];

const ABOUT_PARTS: [Part; 2] = [
    Part {
        selector: ".about-image",
        entrance: Entrance::FadeLeft,
        delay_ms: 0,
    },
    Part {
        selector: ".about-content",
        entrance: Entrance::FadeRight,
        delay_ms: 300,
    },
];

/// Every entrance group on the page.
pub const ENTRANCE_GROUPS: [EntranceGroup; 9] = [
    EntranceGroup {
        min_ratio: Some(0.1),
        root_margin: "0px 0px -150px 0px",
        ..EntranceGroup::each(
            "service cards",
            ".service-card",
            Choreography::Alternating,
            Stagger::BatchIndex(150),
        )
    },
    EntranceGroup::each(
        "portfolio",
        ".portfolio-item",
        Choreography::Uniform(Entrance::ScaleIn),
        Stagger::BatchIndex(200),
    ),
    EntranceGroup::each(
        "testimonials",
        ".testimonial-card",
        Choreography::Uniform(Entrance::SlideUp),
        Stagger::CssDelay(150),
    ),
    EntranceGroup::each(
        "section headers",
        ".section-header",
        Choreography::Parts(&SECTION_HEADER_PARTS),
        Stagger::None,
    ),
    EntranceGroup::each(
        "about",
        ".about-section",
        Choreography::Parts(&ABOUT_PARTS),
        Stagger::None,
    ),
    EntranceGroup::each(
        "faq items",
        ".faq-item",
        Choreography::Uniform(Entrance::FadeUp),
        Stagger::ElementIndex(100),
    ),
    EntranceGroup {
        trigger: Trigger::Container(".contact-section"),
        ..EntranceGroup::each(
            "contact items",
            ".contact-item",
            Choreography::Alternating,
            Stagger::ElementIndex(200),
        )
    },
    EntranceGroup {
        trigger: Trigger::Container(".service-areas-section"),
        ..EntranceGroup::each(
            "service areas",
            ".area-item",
            Choreography::Uniform(Entrance::ScaleIn),
            Stagger::ElementIndex(50),
        )
    },
    EntranceGroup {
        trigger: Trigger::Immediate,
        ..EntranceGroup::each(
            "hero features",
            ".hero-feature",
            Choreography::Uniform(Entrance::FadeLeft),
            Stagger::ElementIndex(200),
        )
    },
];

/// One entry of an intersection observer batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    /// Index of the observed element within the group.
    pub element: usize,
    /// Whether it intersects the root.
    pub intersecting: bool,
    /// Visible share of the element.
    pub ratio: f64,
}

/// What a cue animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueTarget {
    /// The group element itself.
    Element,
    /// The first match of this selector inside the group element.
    Part(&'static str),
}

/// A scheduled entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    /// Index of the group element.
    pub element: usize,
    /// What animates.
    pub target: CueTarget,
    /// Which entrance.
    pub entrance: Entrance,
    /// Wait before applying the start pose.
    pub delay: Duration,
}

/// One-shot bookkeeping for one group.
///
/// Elements are marked when their cue is scheduled, so a second sighting
/// during the stagger delay schedules nothing.
#[derive(Debug, Clone)]
pub struct EntranceTracker {
    group: EntranceGroup,
    markers: OneShotSet,
}

impl EntranceTracker {
    /// Tracker for `len` elements of `group`.
    pub fn new(group: EntranceGroup, len: usize) -> Self {
        Self {
            group,
            markers: OneShotSet::new(len),
        }
    }

    /// The tracked group.
    pub fn group(&self) -> &EntranceGroup {
        &self.group
    }

    /// Whether every element has been scheduled.
    pub fn is_finished(&self) -> bool {
        self.markers.all_triggered()
    }

    /// An observer batch arrived.
    ///
    /// For [`Trigger::EachElement`] groups each sighting stands for its
    /// element. For container groups any qualifying sighting releases the
    /// whole group.
    pub fn observed(&mut self, batch: &[Sighting]) -> Vec<Cue> {
        let qualifies = |s: &Sighting| {
            s.intersecting && self.group.min_ratio.is_none_or(|min| s.ratio > min)
        };
        match self.group.trigger {
            Trigger::EachElement => {
                let hits: Vec<(usize, usize)> = batch
                    .iter()
                    .enumerate()
                    .filter(|&(_, s)| qualifies(s))
                    .map(|(batch_index, s)| (batch_index, s.element))
                    .collect();
                hits.into_iter()
                    .flat_map(|(b, e)| self.schedule(b, e))
                    .collect()
            }
            Trigger::Container(_) | Trigger::Immediate => {
                if batch.iter().any(qualifies) {
                    self.release_all()
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Schedule every pending element (container sighting or boot).
    pub fn release_all(&mut self) -> Vec<Cue> {
        (0..self.markers.len())
            .flat_map(|e| self.schedule(e, e))
            .collect()
    }

    fn schedule(&mut self, batch_index: usize, element: usize) -> Vec<Cue> {
        if !self.markers.trigger(element) {
            return Vec::new();
        }
        let stagger = self.group.stagger;
        let delay = stagger.delay(batch_index, element);
        let cue = |target, entrance, delay| Cue {
            element,
            target,
            entrance,
            delay,
        };
        match self.group.choreography {
            Choreography::Uniform(entrance) => {
                vec![cue(CueTarget::Element, entrance, delay)]
            }
            Choreography::Alternating => {
                let entrance =
                    Entrance::alternating(stagger.index(batch_index, element));
                vec![cue(CueTarget::Element, entrance, delay)]
            }
            Choreography::Parts(parts) => parts
                .iter()
                .map(|p| {
                    let offset = Duration::from_millis(u64::from(p.delay_ms));
                    cue(CueTarget::Part(p.selector), p.entrance, delay + offset)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str) -> EntranceGroup {
        ENTRANCE_GROUPS
            .iter()
            .copied()
            .find(|g| g.name == name)
            .unwrap()
    }

    fn seen(element: usize, ratio: f64) -> Sighting {
        Sighting {
            element,
            intersecting: ratio > 0.0,
            ratio,
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn transition_value() {
        assert_eq!(
            transition_css(),
            "opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1), \
             transform 0.8s cubic-bezier(0.4, 0, 0.2, 1)"
        );
    }

    #[test]
    fn every_entrance_ends_fully_opaque() {
        for entrance in [
            Entrance::FadeUp,
            Entrance::FadeDown,
            Entrance::FadeLeft,
            Entrance::FadeRight,
            Entrance::ScaleIn,
            Entrance::SlideUp,
            Entrance::RotateIn,
        ] {
            assert_eq!(entrance.start().opacity, 0.0);
            assert_eq!(entrance.end().opacity, 1.0);
            assert_ne!(entrance.start().transform, entrance.end().transform);
        }
    }

    #[test]
    fn rotate_in_turns_upright() {
        assert_eq!(
            Entrance::RotateIn.start().transform,
            "rotate(-10deg) scale(0.9)"
        );
        assert_eq!(Entrance::RotateIn.end().transform, "rotate(0deg) scale(1)");
    }

    #[test]
    fn service_cards_need_ratio_and_alternate_by_batch() {
        let mut tracker = EntranceTracker::new(group("service cards"), 4);
        let cues = tracker.observed(&[seen(2, 0.05), seen(3, 0.3), seen(0, 0.5)]);
        assert_eq!(
            cues,
            vec![
                Cue {
                    element: 3,
                    target: CueTarget::Element,
                    entrance: Entrance::FadeRight,
                    delay: ms(150),
                },
                Cue {
                    element: 0,
                    target: CueTarget::Element,
                    entrance: Entrance::FadeLeft,
                    delay: ms(300),
                },
            ]
        );
    }

    #[test]
    fn animated_element_does_not_reanimate() {
        let mut tracker = EntranceTracker::new(group("portfolio"), 2);
        assert_eq!(tracker.observed(&[seen(1, 0.4)]).len(), 1);
        assert!(tracker.observed(&[seen(1, 0.9)]).is_empty());
        assert!(!tracker.is_finished());
        assert_eq!(tracker.observed(&[seen(0, 0.2)])[0].delay, Duration::ZERO);
        assert!(tracker.is_finished());
    }

    #[test]
    fn non_intersecting_sightings_are_ignored() {
        let mut tracker = EntranceTracker::new(group("faq items"), 3);
        assert!(tracker.observed(&[seen(0, 0.0)]).is_empty());
        let cues = tracker.observed(&[seen(2, 0.1)]);
        assert_eq!(cues[0].delay, ms(200));
        assert_eq!(cues[0].entrance, Entrance::FadeUp);
    }

    #[test]
    fn section_header_animates_its_parts() {
        let mut tracker = EntranceTracker::new(group("section headers"), 1);
        let cues = tracker.observed(&[seen(0, 0.2)]);
        let plan: Vec<_> = cues.iter().map(|c| (c.target, c.entrance, c.delay)).collect();
        assert_eq!(
            plan,
            vec![
                (CueTarget::Part(".section-label"), Entrance::FadeDown, ms(0)),
                (CueTarget::Part(".section-title"), Entrance::FadeUp, ms(200)),
                (
                    CueTarget::Part(".section-description"),
                    Entrance::FadeUp,
                    ms(400)
                ),
            ]
        );
        assert!(tracker.observed(&[seen(0, 0.9)]).is_empty());
    }

    #[test]
    fn container_releases_whole_group_once() {
        let mut tracker = EntranceTracker::new(group("contact items"), 3);
        assert!(tracker.observed(&[seen(0, 0.0)]).is_empty());

        let cues = tracker.observed(&[seen(0, 0.3)]);
        let plan: Vec<_> = cues.iter().map(|c| (c.element, c.entrance, c.delay)).collect();
        assert_eq!(
            plan,
            vec![
                (0, Entrance::FadeLeft, ms(0)),
                (1, Entrance::FadeRight, ms(200)),
                (2, Entrance::FadeLeft, ms(400)),
            ]
        );
        assert!(tracker.observed(&[seen(0, 1.0)]).is_empty());
    }

    #[test]
    fn hero_features_release_at_boot() {
        let mut tracker = EntranceTracker::new(group("hero features"), 2);
        let cues = tracker.release_all();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[1].delay, ms(200));
        assert!(tracker.release_all().is_empty());
    }

    #[test]
    fn testimonials_stagger_in_css() {
        let testimonials = group("testimonials");
        assert_eq!(testimonials.css_delay(0).as_deref(), Some("0s"));
        assert_eq!(testimonials.css_delay(2).as_deref(), Some("0.3s"));
        assert_eq!(group("portfolio").css_delay(2), None);

        let mut tracker = EntranceTracker::new(testimonials, 3);
        assert_eq!(tracker.observed(&[seen(2, 0.5)])[0].delay, Duration::ZERO);
    }

    #[test]
    fn default_margin_unless_overridden() {
        assert_eq!(group("portfolio").root_margin, DEFAULT_ROOT_MARGIN);
        assert_eq!(group("service cards").root_margin, "0px 0px -150px 0px");
    }
}
