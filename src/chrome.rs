//! Small page-wide touches: hover classes, the lazy-image fallback, the
//! body fade-in and the footer year.

use crate::util::easing::{EasingFunction, Transition};

/// Hover effect classes and the elements that receive them.
pub const HOVER_CLASSES: [(&str, &str); 3] = [
    (".service-card, .portfolio-item, .testimonial-card", "hover-lift"),
    (".btn", "hover-scale"),
    (".btn-primary", "hover-glow"),
];

/// Footer element showing the current year.
pub const CURRENT_YEAR_ID: &str = "current-year";

/// Images handled by the lazy-load fallback.
pub const LAZY_SELECTOR: &str = "img[loading=\"lazy\"]";

/// Placeholder class removed once the real image is swapped in.
pub const LAZY_CLASS: &str = "lazy";

/// Source to load for a lazy image entering the viewport: `data-src` when
/// present, else the current `src`.
pub fn lazy_source<'a>(data_src: Option<&'a str>, src: &'a str) -> &'a str {
    data_src.filter(|s| !s.is_empty()).unwrap_or(src)
}

/// Body opacity while the page is loading.
pub const BODY_HIDDEN: &str = "0";

/// Body opacity once the window has loaded.
pub const BODY_SHOWN: &str = "1";

const BODY_FADE: Transition = Transition::new("opacity", 500, EasingFunction::EaseIn);

/// CSS `transition` of the body fade-in.
pub fn body_fade_css() -> String {
    BODY_FADE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy_prefers_data_src() {
        assert_eq!(lazy_source(Some("full.jpg"), "thumb.jpg"), "full.jpg");
        assert_eq!(lazy_source(None, "thumb.jpg"), "thumb.jpg");
        assert_eq!(lazy_source(Some(""), "thumb.jpg"), "thumb.jpg");
    }

    #[test]
    fn body_fade() {
        assert_eq!(body_fade_css(), "opacity 0.5s ease-in");
    }

    #[test]
    fn hover_catalog() {
        let classes: Vec<_> = HOVER_CLASSES.iter().map(|(_, c)| *c).collect();
        assert_eq!(classes, vec!["hover-lift", "hover-scale", "hover-glow"]);
    }
}
