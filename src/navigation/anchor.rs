use crate::analytics::Tracker;

/// How a click on a same-page anchor link is handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorAction {
    /// `href` is `#` or empty: cancel navigation, do nothing else.
    SuppressOnly,
    /// Cancel navigation and smooth-scroll the viewport to `top`.
    ScrollTo {
        /// Document-relative scroll target.
        top: f64,
    },
    /// The fragment names no element: let the click through untouched.
    Ignore,
}

/// Handles clicks on `a[href^="#"]` links.
#[derive(Debug, Clone)]
pub struct AnchorScroller {
    header_offset: f64,
    tracker: Tracker,
}

impl AnchorScroller {
    /// Scroller leaving `header_offset` pixels above each target.
    pub fn new(header_offset: f64, tracker: Tracker) -> Self {
        Self {
            header_offset,
            tracker,
        }
    }

    /// Whether `href` points at an actual fragment, i.e. is neither empty
    /// nor a bare `#`.
    pub fn is_fragment(href: &str) -> bool {
        !matches!(href, "" | "#")
    }

    /// Decide what a click on a link with `href` does.
    ///
    /// `target_top` is the viewport-relative top of the element the
    /// fragment resolves to, if any; `page_y` is the current vertical
    /// scroll offset.
    pub fn click(
        &self,
        href: &str,
        target_top: Option<f64>,
        page_y: f64,
    ) -> AnchorAction {
        if !Self::is_fragment(href) {
            return AnchorAction::SuppressOnly;
        }
        let Some(top) = target_top else {
            return AnchorAction::Ignore;
        };
        self.tracker.track("Navigation", "section_click", href);
        AnchorAction::ScrollTo {
            top: top + page_y - self.header_offset,
        }
    }
}

/// The synthesized "back to top" button.
#[derive(Debug, Clone)]
pub struct ScrollTopButton {
    threshold: f64,
    visible: bool,
    tracker: Tracker,
}

impl ScrollTopButton {
    /// Hidden button that shows once scrolled past `threshold`.
    pub fn new(threshold: f64, tracker: Tracker) -> Self {
        Self {
            threshold,
            visible: false,
            tracker,
        }
    }

    /// Whether the button is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// CSS `display` value for the current visibility.
    pub fn display(&self) -> &'static str {
        if self.visible {
            "block"
        } else {
            "none"
        }
    }

    /// The page scrolled to `page_y`. Returns the new visibility when it
    /// changed.
    pub fn scrolled(&mut self, page_y: f64) -> Option<bool> {
        let visible = page_y > self.threshold;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }

    /// Transform while the pointer is over the button, or not.
    pub fn hover_transform(hovered: bool) -> &'static str {
        if hovered {
            "scale(1.1)"
        } else {
            "scale(1)"
        }
    }

    /// The button was clicked; returns the scroll target.
    pub fn clicked(&self) -> f64 {
        self.tracker
            .track("Navigation", "scroll_to_top", "Scroll to top clicked");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::recording;

    #[test]
    fn bare_hash_is_suppressed_without_tracking() {
        let (tracker, sink) = recording();
        let scroller = AnchorScroller::new(80.0, tracker);
        assert_eq!(
            scroller.click("#", Some(10.0), 0.0),
            AnchorAction::SuppressOnly
        );
        assert_eq!(scroller.click("", None, 0.0), AnchorAction::SuppressOnly);
        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn unresolved_fragment_is_ignored() {
        let (tracker, sink) = recording();
        let scroller = AnchorScroller::new(80.0, tracker);
        assert_eq!(
            scroller.click("#missing", None, 120.0),
            AnchorAction::Ignore
        );
        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn resolved_fragment_scrolls_below_header() {
        let (tracker, sink) = recording();
        let scroller = AnchorScroller::new(80.0, tracker);
        let action = scroller.click("#services", Some(400.0), 250.0);
        assert_eq!(action, AnchorAction::ScrollTo { top: 570.0 });

        let event = sink.last().unwrap();
        assert_eq!(event.action, "section_click");
        assert_eq!(event.label, "#services");
    }

    #[test]
    fn scroll_top_button_follows_threshold() {
        let (tracker, sink) = recording();
        let mut button = ScrollTopButton::new(300.0, tracker);
        assert_eq!(button.display(), "none");
        assert_eq!(button.scrolled(300.0), None);
        assert_eq!(button.scrolled(301.0), Some(true));
        assert_eq!(button.scrolled(900.0), None);
        assert_eq!(button.display(), "block");
        assert_eq!(button.scrolled(0.0), Some(false));

        assert_eq!(ScrollTopButton::hover_transform(true), "scale(1.1)");
        assert_eq!(button.clicked(), 0.0);
        assert_eq!(sink.actions(), vec!["scroll_to_top"]);
    }
}
