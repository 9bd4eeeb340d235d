//! The user's motion preference.

/// Media query matched when the user asked for reduced motion.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Whether decorative motion may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    /// Animations run.
    #[default]
    Full,
    /// Entrance animations, parallax and reveal are skipped.
    Reduced,
}

impl MotionPreference {
    /// Resolve from the config switch and the reduced-motion media query.
    /// Either one can turn motion off.
    pub fn resolve(enabled: bool, reduced_query_matches: bool) -> Self {
        if enabled && !reduced_query_matches {
            Self::Full
        } else {
            Self::Reduced
        }
    }

    /// Whether decorative motion may run.
    pub fn allows_motion(self) -> bool {
        self == Self::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_switch_reduces_motion() {
        assert_eq!(MotionPreference::resolve(true, false), MotionPreference::Full);
        assert_eq!(
            MotionPreference::resolve(true, true),
            MotionPreference::Reduced
        );
        assert_eq!(
            MotionPreference::resolve(false, false),
            MotionPreference::Reduced
        );
        assert!(!MotionPreference::Reduced.allows_motion());
    }
}
