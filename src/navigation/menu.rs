/// What the document-level outside-click listener should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerChange {
    /// Attach the listener.
    Install,
    /// Detach the listener.
    Remove,
    /// Leave it as it is.
    Keep,
}

/// Result of a menu interaction: the state to render and the listener
/// bookkeeping that goes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuUpdate {
    /// New expansion state, written to both control and nav as
    /// `aria-expanded`.
    pub expanded: bool,
    /// Outside-click listener change.
    pub listener: ListenerChange,
}

/// Mobile navigation toggle.
///
/// While expanded, a document-level click listener watches for clicks
/// landing outside both the toggle and the nav; the first such click
/// collapses the menu and detaches the listener.
#[derive(Debug, Default)]
pub struct MobileMenu {
    expanded: bool,
    listening: bool,
}

impl MobileMenu {
    /// Collapsed menu with no listener attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu in the state the page markup declares. The outside-click
    /// listener is only attached by a later open.
    pub fn from_markup(expanded: bool) -> Self {
        Self {
            expanded,
            listening: false,
        }
    }

    /// Whether the menu is expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the outside-click listener is attached.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The toggle control was clicked.
    pub fn toggle(&mut self) -> MenuUpdate {
        self.expanded = !self.expanded;
        let listener = if self.expanded && !self.listening {
            self.listening = true;
            ListenerChange::Install
        } else {
            ListenerChange::Keep
        };
        MenuUpdate {
            expanded: self.expanded,
            listener,
        }
    }

    /// The outside-click listener saw a click. `inside` is true when the
    /// click target lies within the toggle or the nav region.
    ///
    /// Returns `None` when the click is ignored.
    pub fn document_click(&mut self, inside: bool) -> Option<MenuUpdate> {
        if inside || !self.listening {
            return None;
        }
        self.expanded = false;
        self.listening = false;
        Some(MenuUpdate {
            expanded: false,
            listener: ListenerChange::Remove,
        })
    }

    /// A link inside the nav was clicked.
    pub fn link_clicked(&mut self) -> MenuUpdate {
        self.expanded = false;
        MenuUpdate {
            expanded: false,
            listener: ListenerChange::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_installs_listener_once() {
        let mut menu = MobileMenu::new();
        let update = menu.toggle();
        assert!(update.expanded);
        assert_eq!(update.listener, ListenerChange::Install);

        let update = menu.toggle();
        assert!(!update.expanded);
        assert_eq!(update.listener, ListenerChange::Keep);

        // Listener is still attached, so reopening does not attach twice.
        let update = menu.toggle();
        assert_eq!(update.listener, ListenerChange::Keep);
    }

    #[test]
    fn outside_click_collapses_and_detaches() {
        let mut menu = MobileMenu::new();
        let _ = menu.toggle();

        assert_eq!(menu.document_click(true), None);
        assert!(menu.is_expanded());

        let update = menu.document_click(false).unwrap();
        assert!(!update.expanded);
        assert_eq!(update.listener, ListenerChange::Remove);
        assert!(!menu.is_listening());

        assert_eq!(menu.document_click(false), None);
    }

    #[test]
    fn markup_expanded_menu_collapses_on_toggle() {
        let mut menu = MobileMenu::from_markup(true);
        let update = menu.toggle();
        assert!(!update.expanded);
        assert_eq!(update.listener, ListenerChange::Keep);

        let update = menu.toggle();
        assert!(update.expanded);
        assert_eq!(update.listener, ListenerChange::Install);
    }

    #[test]
    fn link_click_collapses() {
        let mut menu = MobileMenu::new();
        let _ = menu.toggle();
        let update = menu.link_clicked();
        assert!(!update.expanded);
        assert!(!menu.is_expanded());
    }
}
