use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lines printed to the console once the page is wired up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Branding", inline)]
#[serde(default)]
pub struct BrandingOptions {
    /// Business name.
    pub name: String,
    /// One-line description.
    pub tagline: String,
    /// Contact line.
    pub contact: String,
}

impl BrandingOptions {
    /// Banner lines in print order, skipping blank ones.
    pub fn banner(&self) -> impl Iterator<Item = &str> {
        [&self.name, &self.tagline, &self.contact]
            .into_iter()
            .map(String::as_str)
            .filter(|line| !line.trim().is_empty())
    }
}

impl Default for BrandingOptions {
    fn default() -> Self {
        Self {
            name: "Efad Skejić - Vodovodar".to_owned(),
            tagline: "Profesionalne vodovodne storitve v Sloveniji".to_owned(),
            contact: "Kontakt: info@efadskejic.si".to_owned(),
        }
    }
}
