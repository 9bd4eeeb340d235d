//! Motion: scroll-triggered entrances, stat counters, parallax and the
//! progress-driven reveal.
//!
//! Entrances and reveal are independent subsystems; an element may be
//! driven by both. Everything here is pure: the browser layer feeds in
//! intersection sightings and element geometry and applies the returned
//! styles.

pub mod counter;
pub mod entrance;
pub mod parallax;
pub mod preferences;
pub mod reveal;

pub use counter::{CounterFrame, StatCounter};
pub use entrance::{
    Choreography, Cue, CueTarget, Entrance, EntranceGroup, EntranceTracker,
    Pose, Sighting, Stagger, Trigger, ENTRANCE_GROUPS,
};
pub use parallax::{Bounds, Layer, Parallax};
pub use preferences::MotionPreference;
pub use reveal::{RevealFrame, RevealState, RevealStep, RevealTask};

/// Intersection thresholds shared by the entrance and reveal observers.
pub const DEFAULT_THRESHOLDS: [f64; 6] = [0.0, 0.1, 0.25, 0.5, 0.75, 1.0];

/// Root margin of the entrance observers unless a group overrides it.
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -100px 0px";
