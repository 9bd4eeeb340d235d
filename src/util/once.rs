//! One-shot markers.
//!
//! Entrance animations and stat counters each fire at most once per element
//! per page load. The transition `Pending → Triggered` is one-way and
//! idempotent.

/// Whether an element's one-shot effect has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    /// Not fired yet.
    #[default]
    Pending,
    /// Fired; never fires again.
    Triggered,
}

/// Markers for a fixed list of elements, addressed by index.
#[derive(Debug, Clone, Default)]
pub struct OneShotSet {
    markers: Vec<Marker>,
}

impl OneShotSet {
    /// `len` pending markers.
    pub fn new(len: usize) -> Self {
        Self {
            markers: vec![Marker::Pending; len],
        }
    }

    /// Number of tracked elements.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether no elements are tracked.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Marker of element `index` (`None` when out of range).
    pub fn get(&self, index: usize) -> Option<Marker> {
        self.markers.get(index).copied()
    }

    /// Move element `index` to `Triggered`. Returns true only on the call
    /// that performed the transition.
    pub fn trigger(&mut self, index: usize) -> bool {
        match self.markers.get_mut(index) {
            Some(marker @ Marker::Pending) => {
                *marker = Marker::Triggered;
                true
            }
            _ => false,
        }
    }

    /// Whether every element has fired.
    pub fn all_triggered(&self) -> bool {
        self.markers.iter().all(|m| *m == Marker::Triggered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_is_one_way() {
        let mut set = OneShotSet::new(2);
        assert_eq!(set.get(0), Some(Marker::Pending));
        assert!(set.trigger(0));
        assert!(!set.trigger(0));
        assert_eq!(set.get(0), Some(Marker::Triggered));
        assert!(!set.all_triggered());
        assert!(set.trigger(1));
        assert!(set.all_triggered());
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut set = OneShotSet::new(1);
        assert!(!set.trigger(5));
        assert_eq!(set.get(5), None);
    }
}
