//! Portfolio image lightbox.

use crate::analytics::Tracker;

/// What to render after a lightbox interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxUpdate {
    /// Show the overlay with this image and caption; lock page scroll.
    Open {
        /// Image URL for `#lightbox-image`.
        src: String,
        /// Caption for `#lightbox-title` and the image's `alt`.
        title: String,
    },
    /// Hide the overlay and unlock page scroll.
    Close,
}

impl LightboxUpdate {
    /// Value for the overlay's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        match self {
            Self::Open { .. } => "false",
            Self::Close => "true",
        }
    }

    /// Value for `body.style.overflow`.
    pub fn body_overflow(&self) -> &'static str {
        match self {
            Self::Open { .. } => "hidden",
            Self::Close => "",
        }
    }
}

/// Why the lightbox is being closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The close button.
    Button,
    /// The Escape key.
    Escape,
    /// A click on the backdrop itself (not on its content).
    Backdrop,
}

/// Overlay state: visibility plus the image shown last.
#[derive(Debug, Clone)]
pub struct Lightbox {
    open: bool,
    src: String,
    title: String,
    tracker: Tracker,
}

impl Lightbox {
    /// Hidden lightbox.
    pub fn new(tracker: Tracker) -> Self {
        Self {
            open: false,
            src: String::new(),
            title: String::new(),
            tracker,
        }
    }

    /// Whether the overlay is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Caption of the image shown last.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// URL of the image shown last.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// A portfolio item's view button was clicked. Without an image
    /// source nothing opens.
    pub fn open(&mut self, src: Option<&str>, title: &str) -> Option<LightboxUpdate> {
        let src = src.filter(|s| !s.is_empty())?;
        self.open = true;
        src.clone_into(&mut self.src);
        title.clone_into(&mut self.title);
        self.tracker.track("Portfolio", "lightbox_open", title);
        Some(LightboxUpdate::Open {
            src: self.src.clone(),
            title: self.title.clone(),
        })
    }

    /// A close gesture happened. Escape only counts while open; the button
    /// and backdrop always close.
    pub fn close(&mut self, trigger: CloseTrigger) -> Option<LightboxUpdate> {
        if trigger == CloseTrigger::Escape && !self.open {
            return None;
        }
        self.open = false;
        self.tracker
            .track("Portfolio", "lightbox_close", &self.title);
        Some(LightboxUpdate::Close)
    }
}
