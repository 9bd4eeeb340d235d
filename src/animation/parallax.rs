//! Scroll-linked parallax offsets.

use crate::options::ParallaxOptions;

/// Hero image wrapper.
pub const HERO_SELECTOR: &str = ".hero-image-wrapper";
/// About-section image.
pub const ABOUT_SELECTOR: &str = ".about-image";
/// Portfolio images.
pub const PORTFOLIO_SELECTOR: &str = ".portfolio-image";
/// Icons that bob with scrolling.
pub const FLOATING_SELECTOR: &str = ".service-icon-wrapper, .contact-icon-wrapper";

/// Element kinds with their own parallax rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// The hero image.
    Hero,
    /// The about image.
    About,
    /// The `n`-th portfolio image; later images move faster.
    Portfolio(usize),
    /// The `n`-th floating icon; phase shifts with the index.
    Floating(usize),
}

/// Viewport-relative vertical extent of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Top edge.
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl Bounds {
    /// Whether any part lies inside a viewport of `viewport_height`.
    pub fn in_view(self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

/// Computes parallax transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct Parallax {
    options: ParallaxOptions,
}

impl Parallax {
    /// Parallax with the given rates.
    pub fn new(options: ParallaxOptions) -> Self {
        Self { options }
    }

    /// Vertical offset in pixels for `layer` at `scroll_y`, given the
    /// element's viewport-relative `top`.
    pub fn offset(&self, layer: Layer, scroll_y: f64, top: f64) -> f64 {
        let o = &self.options;
        match layer {
            Layer::Hero => (scroll_y - top) * o.hero_rate,
            Layer::About => (scroll_y - top) * o.about_rate,
            Layer::Portfolio(i) => {
                (scroll_y - top) * o.portfolio_rate_step.mul_add(i as f64, o.portfolio_base_rate)
            }
            Layer::Floating(i) => {
                (o.float_phase.mul_add(i as f64, scroll_y) / o.float_period).sin()
                    * o.float_amplitude
            }
        }
    }

    /// CSS transform for `layer`.
    pub fn transform(&self, layer: Layer, scroll_y: f64, top: f64) -> String {
        let y = self.offset(layer, scroll_y, top);
        match layer {
            Layer::Hero => format!("translateY({y}px) scale(1.02)"),
            Layer::Portfolio(_) => format!("translateY({y}px) scale(1.05)"),
            Layer::About | Layer::Floating(_) => format!("translateY({y}px)"),
        }
    }

    /// Transform for one frame, `None` when the element is off screen and
    /// should keep its last transform.
    pub fn frame(
        &self,
        layer: Layer,
        bounds: Bounds,
        scroll_y: f64,
        viewport_height: f64,
    ) -> Option<String> {
        bounds
            .in_view(viewport_height)
            .then(|| self.transform(layer, scroll_y, bounds.top))
    }
}
