//! FAQ accordion with mutually exclusive entries.

use crate::analytics::Tracker;

/// New state of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryUpdate {
    /// Entry index in document order.
    pub index: usize,
    /// Whether the entry is now expanded.
    pub expanded: bool,
}

impl EntryUpdate {
    /// `aria-expanded` value for the question control.
    pub fn aria_expanded(self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// Answer `max-height`: the natural height when expanding, cleared
    /// otherwise.
    pub fn max_height(self, scroll_height: i32) -> String {
        if self.expanded {
            format!("{scroll_height}px")
        } else {
            String::new()
        }
    }
}

/// Accordion over a fixed number of entries. At most one is expanded.
#[derive(Debug, Clone)]
pub struct FaqAccordion {
    expanded: Vec<bool>,
    tracker: Tracker,
}

impl FaqAccordion {
    /// All `count` entries collapsed.
    pub fn new(count: usize, tracker: Tracker) -> Self {
        Self {
            expanded: vec![false; count],
            tracker,
        }
    }

    /// Entries seeded from the page's `aria-expanded` values. Only the
    /// first expanded entry stays expanded.
    pub fn from_states(states: impl IntoIterator<Item = bool>, tracker: Tracker) -> Self {
        let mut seen = false;
        let expanded = states
            .into_iter()
            .map(|e| {
                let keep = e && !seen;
                seen |= e;
                keep
            })
            .collect();
        Self { expanded, tracker }
    }

    /// Current state of every entry, for the initial render.
    pub fn snapshot(&self) -> Vec<EntryUpdate> {
        self.expanded
            .iter()
            .enumerate()
            .map(|(index, &expanded)| EntryUpdate { index, expanded })
            .collect()
    }

    /// Whether entry `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// The currently expanded entry, if any.
    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded.iter().position(|&e| e)
    }

    /// Question `index` was clicked. Returns the entries whose state
    /// changed, the clicked one last.
    pub fn toggle(&mut self, index: usize, question: &str) -> Vec<EntryUpdate> {
        let Some(&was_expanded) = self.expanded.get(index) else {
            return Vec::new();
        };

        let mut updates: Vec<_> = self
            .expanded
            .iter_mut()
            .enumerate()
            .filter(|(i, e)| *i != index && **e)
            .map(|(i, e)| {
                *e = false;
                EntryUpdate {
                    index: i,
                    expanded: false,
                }
            })
            .collect();

        let expanded = !was_expanded;
        self.expanded[index] = expanded;
        updates.push(EntryUpdate { index, expanded });

        let action = if expanded { "faq_open" } else { "faq_close" };
        self.tracker.track("FAQ", action, question);
        updates
    }
}
