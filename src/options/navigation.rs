use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Anchor scrolling, scroll-to-top and progress bar settings.
pub struct NavigationOptions {
    /// Height of the fixed header, subtracted from anchor scroll targets.
    #[schemars(title = "Header Offset")]
    pub header_offset: f64,
    /// Vertical scroll offset past which the scroll-to-top button shows.
    #[schemars(title = "Scroll-to-top Threshold")]
    pub scroll_top_threshold: f64,
    /// Accessible label of the scroll-to-top button.
    #[schemars(title = "Scroll-to-top Label")]
    pub scroll_top_label: String,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scroll_top_threshold: 300.0,
            scroll_top_label: "Nazaj na vrh".to_owned(),
        }
    }
}
