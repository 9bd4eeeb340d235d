//! Count-up animation for the hero statistics.

use std::time::Duration;

/// Containers whose visibility starts their counters.
pub const STAT_CONTAINERS: &str = ".hero-stats, .hero-stats-card, .stat-item";

/// Number elements inside a container.
pub const STAT_NUMBERS: &str = ".stat-number, .stats-number";

/// Visible share a container needs before its counters start.
pub const STAT_THRESHOLD: f64 = 0.5;

/// Delay between successive counters of one container.
pub const STAT_STAGGER: Duration = Duration::from_millis(300);

/// Start delay of the `index`-th counter in a container.
pub fn start_delay(index: usize) -> Duration {
    STAT_STAGGER * u32::try_from(index).unwrap_or(u32::MAX)
}

/// Text to show after one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    /// New text content.
    pub text: String,
    /// Whether the target was reached; the interval should stop.
    pub finished: bool,
}

/// A number counting up from 0 to the value it was written with.
///
/// `"500+"` counts `0+`, `3+`, ... `500+`: the digits give the target and
/// every other character is kept as the suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    target: u64,
    suffix: String,
    current: f64,
    increment: f64,
}

impl StatCounter {
    /// Counter for an element showing `text`. `None` when the text holds
    /// no positive number.
    pub fn parse(text: &str, duration: Duration, tick: Duration) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let target: u64 = digits.parse().ok().filter(|&n| n > 0)?;
        let suffix = text
            .chars()
            .filter(|c| !c.is_ascii_digit())
            .collect::<String>()
            .trim()
            .to_owned();

        let ticks =
            (duration.as_millis() as f64 / tick.as_millis().max(1) as f64).max(1.0);
        Some(Self {
            target,
            suffix,
            current: 0.0,
            increment: target as f64 / ticks,
        })
    }

    /// Value the counter ends on.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Characters kept after the number.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Text written before the first tick.
    pub fn initial_text(&self) -> String {
        format!("0{}", self.suffix)
    }

    /// Advance one tick.
    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            CounterFrame {
                text: format!("{}{}", self.target, self.suffix),
                finished: true,
            }
        } else {
            CounterFrame {
                text: format!("{}{}", self.current.floor() as u64, self.suffix),
                finished: false,
            }
        }
    }
}
