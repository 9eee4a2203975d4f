use serde::{Deserialize, Serialize};

use crate::{
    errors::LedgerError,
    locale::{self, LocaleConfig},
};

/// Caller-supplied formatting preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub locale: String,
    pub currency: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
        }
    }
}

impl FormatConfig {
    pub fn new(locale: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            currency: currency.into(),
        }
    }

    /// Parses a JSON document; missing fields fall back to the defaults.
    pub fn from_json(data: &str) -> Result<Self, LedgerError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn to_json(&self) -> Result<String, LedgerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolves the stored codes to a formatting profile.
    pub fn resolve(&self) -> Result<LocaleConfig, LedgerError> {
        locale::resolve(&self.locale, &self.currency)
    }
}
