//! Centralized site options with TOML support.
//!
//! All tweakable settings (texts, delays, thresholds, relay credentials,
//! motion constants) are consolidated here. The page may embed a TOML
//! document in `<script type="application/toml" id="site-options">`; any
//! section it leaves out keeps its defaults.

mod branding;
mod form;
mod motion;
mod navigation;
mod relay;

pub use branding::BrandingOptions;
pub use form::{FormMessages, FormOptions};
pub use motion::{MotionOptions, ParallaxOptions};
pub use navigation::NavigationOptions;
pub use relay::RelayOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Id of the inline element carrying a TOML options document.
pub const OPTIONS_ELEMENT_ID: &str = "site-options";

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML documents (e.g. only overriding `[relay]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct SiteOptions {
    /// Menu, anchor scrolling and scroll-to-top settings.
    pub navigation: NavigationOptions,
    /// Contact form texts and timing.
    pub form: FormOptions,
    /// Email relay endpoint and credentials.
    pub relay: RelayOptions,
    /// Entrance, counter and parallax constants.
    pub motion: MotionOptions,
    /// Console banner lines.
    pub branding: BrandingOptions,
}

impl SiteOptions {
    /// Generate JSON Schema describing the options document.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(SiteOptions)
    }

    /// Parse options from a TOML document. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, SiteError> {
        toml::from_str(content)
            .map_err(|e| SiteError::OptionsParse(e.to_string()))
    }

    /// Serialize to a TOML document (pretty-printed).
    pub fn to_toml(&self) -> Result<String, SiteError> {
        toml::to_string_pretty(self)
            .map_err(|e| SiteError::OptionsParse(e.to_string()))
    }

    /// Parse an embedded document, falling back to defaults when it is
    /// absent, blank or malformed.
    #[must_use]
    pub fn from_embedded(content: Option<&str>) -> Self {
        match content.map(str::trim).filter(|c| !c.is_empty()) {
            None => {
                log::info!("no embedded site options, using defaults");
                Self::default()
            }
            Some(doc) => match Self::from_toml(doc) {
                Ok(options) => {
                    log::info!("loaded embedded site options");
                    options
                }
                Err(e) => {
                    log::warn!("ignoring embedded site options: {e}");
                    Self::default()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = SiteOptions::default();
        let toml_str = opts.to_toml().unwrap();
        let parsed = SiteOptions::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[relay]
service_id = "service_live"
template_id = "template_contact"
"#;
        let opts = SiteOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.relay.service_id, "service_live");
        // Everything else should be default
        assert_eq!(opts.relay.recipient, RelayOptions::default().recipient);
        assert_eq!(opts.navigation.header_offset, 80.0);
        assert_eq!(opts.form.reenable_delay_ms, 2000);
    }

    #[test]
    fn malformed_embedded_document_falls_back() {
        let opts = SiteOptions::from_embedded(Some("[navigation\nheader"));
        assert_eq!(opts, SiteOptions::default());

        let opts = SiteOptions::from_embedded(Some("   "));
        assert_eq!(opts, SiteOptions::default());

        let opts = SiteOptions::from_embedded(Some(
            "[navigation]\nscroll_top_threshold = 500.0",
        ));
        assert_eq!(opts.navigation.scroll_top_threshold, 500.0);
    }

    #[test]
    fn parse_errors_are_reported() {
        let err = SiteOptions::from_toml("[form]\nmin_phone_length = \"x\"")
            .unwrap_err();
        assert!(matches!(err, SiteError::OptionsParse(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(SiteOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        for section in ["navigation", "form", "relay", "motion", "branding"] {
            assert!(props.contains_key(section), "missing {section}");
        }
    }
}
