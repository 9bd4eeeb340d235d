//! Navigation: the mobile menu, smooth anchor scrolling, the scroll-to-top
//! button and the scroll-progress bar.

/// Same-page anchor links and the scroll-to-top button.
pub mod anchor;
/// Mobile menu expansion state.
pub mod menu;
/// Scroll-progress bar width.
pub mod progress;

pub use anchor::{AnchorAction, AnchorScroller, ScrollTopButton};
pub use menu::{ListenerChange, MenuUpdate, MobileMenu};
pub use progress::scroll_progress;
