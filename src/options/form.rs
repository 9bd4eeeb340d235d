use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Localized texts shown by the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Messages", inline)]
#[serde(default)]
pub struct FormMessages {
    /// Inline error for a required field left empty.
    pub required: String,
    /// Inline error for a malformed email address.
    pub invalid_email: String,
    /// Inline error for a malformed phone number.
    pub invalid_phone: String,
    /// Summary shown when submission is blocked by field errors.
    pub fix_errors: String,
    /// Shown once the relay accepted the message.
    pub success: String,
    /// Shown when the relay call failed.
    pub failure: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            required: "To polje je obvezno.".to_owned(),
            invalid_email: "Vnesite veljaven e-poštni naslov.".to_owned(),
            invalid_phone: "Vnesite veljavno telefonsko številko.".to_owned(),
            fix_errors: "Prosimo, popravite napake v obrazcu.".to_owned(),
            success: "Hvala! Vaše sporočilo je bilo uspešno poslano. \
                      Odgovoril vam bom v najkrajšem možnem času."
                .to_owned(),
            failure: "Oprostite, prišlo je do napake. Prosimo, poskusite \
                      znova ali me pokličite neposredno."
                .to_owned(),
        }
    }
}

/// Contact form texts and timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Form", inline)]
#[serde(default)]
pub struct FormOptions {
    /// Localized messages.
    pub messages: FormMessages,
    /// How long a success message stays before clearing itself.
    #[schemars(title = "Success Message Lifetime (ms)")]
    pub success_clear_ms: u32,
    /// Delay before the submit button is usable again after a success.
    #[schemars(title = "Re-enable Delay (ms)")]
    pub reenable_delay_ms: u32,
    /// Minimum character count of a phone number.
    #[schemars(title = "Minimum Phone Length")]
    pub min_phone_length: usize,
    /// Placeholder sent for optional fields left blank.
    #[schemars(title = "Not Provided Placeholder")]
    pub not_provided: String,
}

impl FormOptions {
    /// Success message lifetime as a [`Duration`].
    pub fn success_clear_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.success_clear_ms))
    }

    /// Submit re-enable delay as a [`Duration`].
    pub fn reenable_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.reenable_delay_ms))
    }
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            messages: FormMessages::default(),
            success_clear_ms: 10_000,
            reenable_delay_ms: 2_000,
            min_phone_length: 8,
            not_provided: "Ni navedeno".to_owned(),
        }
    }
}
