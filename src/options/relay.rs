use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// EmailJS REST endpoint and credentials.
///
/// The defaults are placeholders; a deployed page overrides them in its
/// embedded options document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Email Relay", inline)]
#[serde(default)]
pub struct RelayOptions {
    /// Send endpoint of the relay REST API.
    pub endpoint: String,
    /// Public client key (`user_id` in the request).
    pub public_key: String,
    /// Relay service identifier.
    pub service_id: String,
    /// Relay template identifier.
    pub template_id: String,
    /// Mailbox the template delivers to.
    pub recipient: String,
}

impl Default for RelayOptions {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_owned(),
            public_key: "YOUR_PUBLIC_KEY".to_owned(),
            service_id: "YOUR_SERVICE_ID".to_owned(),
            template_id: "YOUR_TEMPLATE_ID".to_owned(),
            recipient: "info@efadskejic.si".to_owned(),
        }
    }
}
