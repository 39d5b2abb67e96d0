use serde::{Deserialize, Serialize};

use super::currency::DEFAULT_BASE_CURRENCY;
use super::history::DEFAULT_HISTORY_WEEKS;
use crate::errors::CoreError;

/// Client configuration. Passed explicitly; nothing here is read from ambient storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Root of the REST API, e.g. `http://localhost:8080/api`.
    pub api_base_url: String,

    /// Currency all sums are normalised to.
    pub base_currency: String,

    /// The user's preferred display currency (cached between sessions by the shell).
    pub display_currency: String,

    pub request_timeout_secs: u64,

    /// Weeks of snapshot history requested by default.
    pub history_weeks: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            display_currency: DEFAULT_BASE_CURRENCY.to_string(),
            request_timeout_secs: 30,
            history_weeks: DEFAULT_HISTORY_WEEKS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Set the preferred display currency. Must be a 3-letter alphabetic code.
    pub fn set_display_currency(&mut self, currency: &str) -> Result<(), CoreError> {
        self.display_currency = validate_currency_code(currency)?;
        Ok(())
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

pub(crate) fn validate_currency_code(currency: &str) -> Result<String, CoreError> {
    let trimmed = currency.trim().to_uppercase();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::InvalidCurrencyCode(currency.to_string()));
    }
    Ok(trimmed)
}
