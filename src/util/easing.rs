//! Easing curves and CSS transition declarations.
//!
//! The browser runs every transition the page uses; this module only names
//! the curves and renders them as `transition` values.

use std::fmt;
use std::time::Duration;

/// Timing function of a CSS transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// `linear`.
    Linear,
    /// `ease`.
    Ease,
    /// `ease-in` (slow start).
    EaseIn,
    /// Cubic Bézier curve with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier {
        /// First control point, x.
        x1: f32,
        /// First control point, y.
        y1: f32,
        /// Second control point, x.
        x2: f32,
        /// Second control point, y.
        y2: f32,
    },
}

impl EasingFunction {
    /// Standard ease-out curve used by entrance animations.
    pub const STANDARD: Self = Self::CubicBezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Ease => f.write_str("ease"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// One `property duration easing` entry of a CSS `transition` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Animated CSS property (`"opacity"`, `"all"`, ...).
    pub property: &'static str,
    /// Transition length.
    pub duration: Duration,
    /// Timing function.
    pub easing: EasingFunction,
}

impl Transition {
    /// Transition of `property` over `millis` with `easing`.
    #[must_use]
    pub const fn new(
        property: &'static str,
        millis: u64,
        easing: EasingFunction,
    ) -> Self {
        Self {
            property,
            duration: Duration::from_millis(millis),
            easing,
        }
    }

    /// Render several transitions as one comma-separated CSS value.
    #[must_use]
    pub fn css_list(transitions: &[Self]) -> String {
        transitions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}s {}",
            self.property,
            self.duration.as_secs_f64(),
            self.easing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_curves() {
        assert_eq!(EasingFunction::Linear.to_string(), "linear");
        assert_eq!(EasingFunction::Ease.to_string(), "ease");
        assert_eq!(EasingFunction::EaseIn.to_string(), "ease-in");
    }

    #[test]
    fn test_standard_curve() {
        assert_eq!(
            EasingFunction::default().to_string(),
            "cubic-bezier(0.4, 0, 0.2, 1)"
        );
    }

    #[test]
    fn test_transition_list() {
        let css = Transition::css_list(&[
            Transition::new("opacity", 800, EasingFunction::STANDARD),
            Transition::new("transform", 800, EasingFunction::STANDARD),
        ]);
        assert_eq!(
            css,
            "opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1), \
             transform 0.8s cubic-bezier(0.4, 0, 0.2, 1)"
        );
    }

    #[test]
    fn test_short_transition() {
        let t = Transition::new("width", 100, EasingFunction::Ease);
        assert_eq!(t.to_string(), "width 0.1s ease");
    }
}
