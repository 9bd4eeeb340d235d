//! Progress-driven reveal of sections.
//!
//! Once a section is more than [`REVEAL_START_RATIO`] visible, a per-frame
//! task fades and lifts it in proportion to how far it has travelled up
//! the viewport. The task parks while the section is below the fold and
//! finishes for good once progress reaches 1.

/// Elements driven by the reveal.
pub const REVEAL_SELECTOR: &str = ".reveal, section";

/// Observer root margin of the reveal.
pub const REVEAL_ROOT_MARGIN: &str = "0px";

/// Visible share that starts (or resumes) a reveal.
pub const REVEAL_START_RATIO: f64 = 0.1;

/// Class added once the reveal is complete.
pub const ACTIVE_CLASS: &str = "active";

/// Travel distance of the lift, in pixels.
const LIFT: f64 = 50.0;

/// Progress of an element through the viewport, in `[0, 1]`.
///
/// `top` and `height` come from the element's bounding rect.
pub fn reveal_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + height;
    if span <= 0.0 {
        return 1.0;
    }
    (1.0 - top / span).clamp(0.0, 1.0)
}

/// Styles for one reveal frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    /// CSS opacity.
    pub opacity: f64,
    /// Downward offset in pixels.
    pub translate_y: f64,
}

impl RevealFrame {
    /// Frame at `progress`, `None` at zero progress (styles untouched).
    pub fn at(progress: f64) -> Option<Self> {
        (progress > 0.0).then(|| Self {
            opacity: (progress * 1.5).min(1.0),
            translate_y: (1.0 - progress) * LIFT,
        })
    }

    /// Fully revealed.
    pub const DONE: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
    };

    /// CSS transform.
    pub fn transform(self) -> String {
        if self.translate_y == 0.0 {
            "translateY(0)".to_owned()
        } else {
            format!("translateY({}px)", self.translate_y)
        }
    }
}

/// Lifecycle of one element's reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Not started.
    #[default]
    Idle,
    /// A frame task is running.
    Revealing,
    /// Left the viewport mid-reveal; waits for the next sighting.
    Parked,
    /// Finished; never runs again.
    Done,
}

/// What the frame task does next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealStep {
    /// Apply the frame (if any) and request another animation frame.
    Continue(Option<RevealFrame>),
    /// Stop requesting frames until the observer fires again.
    Park,
    /// Apply [`RevealFrame::DONE`], add [`ACTIVE_CLASS`], stop.
    Finish,
}

/// Reveal state machine for one element.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealTask {
    state: RevealState,
}

impl RevealTask {
    /// Idle task.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(self) -> RevealState {
        self.state
    }

    /// The observer reported `ratio`. True when a frame task must be
    /// started.
    pub fn sighted(&mut self, ratio: f64) -> bool {
        match self.state {
            RevealState::Idle | RevealState::Parked if ratio > REVEAL_START_RATIO => {
                self.state = RevealState::Revealing;
                true
            }
            _ => false,
        }
    }

    /// Run one frame with the element's current geometry.
    pub fn frame(&mut self, top: f64, height: f64, viewport_height: f64) -> RevealStep {
        if self.state != RevealState::Revealing {
            return RevealStep::Park;
        }
        let progress = reveal_progress(top, height, viewport_height);
        if progress >= 1.0 {
            self.state = RevealState::Done;
            return RevealStep::Finish;
        }
        if top >= viewport_height {
            self.state = RevealState::Parked;
            return RevealStep::Park;
        }
        RevealStep::Continue(RevealFrame::at(progress))
    }
}
