//! Rate limiting for high-frequency browser events.

use web_time::{Duration, Instant};

/// Allows at most one pending animation-frame callback.
///
/// High-frequency events (scroll, resize) call [`request`](Self::request);
/// only the first call before the frame runs gets to schedule it.
#[derive(Debug, Default)]
pub struct FrameGate {
    /// A frame callback is queued and has not run yet.
    scheduled: bool,
}

impl FrameGate {
    /// Create an idle gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the caller should schedule a frame callback.
    pub fn request(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Call from the frame callback once its work is done.
    pub fn finish(&mut self) {
        self.scheduled = false;
    }

    /// Whether a frame callback is pending.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

/// Defers work until input has been quiet for `wait`.
///
/// Every [`touch`](Self::touch) pushes the deadline back; a timer armed by
/// the caller checks [`settled`](Self::settled) when it fires and only the
/// last one in a burst finds it true.
#[derive(Debug)]
pub struct Debounce {
    /// Quiet period required before the work runs.
    wait: Duration,
    /// Time of the most recent input.
    last_touch: Option<Instant>,
}

impl Debounce {
    /// Debounce with the given quiet period.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            last_touch: None,
        }
    }

    /// Quiet period.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record an input at `now`.
    pub fn touch(&mut self, now: Instant) {
        self.last_touch = Some(now);
    }

    /// Returns true (once per burst) if input has been quiet for the full
    /// period at `now`.
    pub fn settled(&mut self, now: Instant) -> bool {
        match self.last_touch {
            Some(last) if now.saturating_duration_since(last) >= self.wait => {
                self.last_touch = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_allows_one_pending_frame() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(gate.is_scheduled());
        gate.finish();
        assert!(gate.request());
    }

    #[test]
    fn debounce_waits_for_quiet() {
        let start = Instant::now();
        let mut debounce = Debounce::new(Duration::from_millis(100));
        assert!(!debounce.settled(start));

        debounce.touch(start);
        debounce.touch(start + Duration::from_millis(60));
        // First timer fires 100ms after the first touch: still noisy.
        assert!(!debounce.settled(start + Duration::from_millis(100)));
        // Second timer fires 100ms after the last touch.
        assert!(debounce.settled(start + Duration::from_millis(160)));
        // Only once per burst.
        assert!(!debounce.settled(start + Duration::from_millis(400)));
    }
}
