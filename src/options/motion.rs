use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parallax rate constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Parallax", inline)]
#[serde(default)]
pub struct ParallaxOptions {
    /// Rate of the hero image wrapper.
    pub hero_rate: f64,
    /// Rate of the about-section image.
    pub about_rate: f64,
    /// Rate of the first portfolio image.
    pub portfolio_base_rate: f64,
    /// Rate added per following portfolio image.
    pub portfolio_rate_step: f64,
    /// Peak displacement of the floating icon wrappers, in pixels.
    pub float_amplitude: f64,
    /// Scroll distance per radian of the floating wave.
    pub float_period: f64,
    /// Scroll-offset phase shift between consecutive floating icons.
    pub float_phase: f64,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            hero_rate: 0.15,
            about_rate: 0.1,
            portfolio_base_rate: 0.05,
            portfolio_rate_step: 0.02,
            float_amplitude: 5.0,
            float_period: 200.0,
            float_phase: 100.0,
        }
    }
}

/// Entrance, counter and parallax settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
pub struct MotionOptions {
    /// Master switch. `false` behaves like a reduced-motion preference.
    pub enabled: bool,
    /// Time a stat counter takes to reach its value.
    #[schemars(title = "Counter Duration (ms)")]
    pub counter_duration_ms: u32,
    /// Interval between counter updates.
    #[schemars(title = "Counter Tick (ms)")]
    pub counter_tick_ms: u32,
    /// Pause between applying an entrance start pose and its end pose.
    #[schemars(title = "Settle Delay (ms)")]
    pub settle_delay_ms: u32,
    /// Parallax rates.
    pub parallax: ParallaxOptions,
}

impl MotionOptions {
    /// Counter duration as a [`Duration`].
    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.counter_duration_ms))
    }

    /// Counter tick as a [`Duration`].
    pub fn counter_tick(&self) -> Duration {
        Duration::from_millis(u64::from(self.counter_tick_ms))
    }
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            counter_duration_ms: 2_000,
            counter_tick_ms: 16,
            settle_delay_ms: 50,
            parallax: ParallaxOptions::default(),
        }
    }
}
