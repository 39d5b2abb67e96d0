use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::amount::lenient_f64;
use super::settings::validate_currency_code;
use crate::errors::CoreError;

/// Reference currency all monetary values are normalised to.
pub const DEFAULT_BASE_CURRENCY: &str = "INR";

/// A user-configured conversion rate (`GET /api/configuration/currency-rates`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRate {
    #[serde(default)]
    pub id: Option<i64>,

    pub currency_code: String,

    #[serde(default)]
    pub currency_name: String,

    /// How much one unit of this currency is worth in the base currency.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rate_to_inr: f64,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CurrencyRate {
    pub fn new(code: impl Into<String>, name: impl Into<String>, rate: f64) -> Self {
        Self {
            id: None,
            currency_code: code.into(),
            currency_name: name.into(),
            rate_to_inr: rate,
            is_active: true,
        }
    }

    /// Check the rate can be saved; returns it with the code upper-cased.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.currency_code = validate_currency_code(&self.currency_code)?;
        if self.currency_name.trim().is_empty() {
            return Err(CoreError::Validation("Currency name must not be empty".into()));
        }
        if !(self.rate_to_inr.is_finite() && self.rate_to_inr > 0.0) {
            return Err(CoreError::Validation(format!(
                "Rate for {} must be positive, got {}",
                self.currency_code, self.rate_to_inr
            )));
        }
        Ok(self)
    }
}

/// Lookup table `code -> rate to base currency`.
///
/// The base currency is always present at rate 1 and cannot be removed.
/// Codes are stored uppercased; lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// A table that only knows the base currency.
    pub fn base_only(base: &str) -> Self {
        let base = base.trim().to_uppercase();
        let mut rates = HashMap::new();
        rates.insert(base.clone(), 1.0);
        Self { base, rates }
    }

    /// Build from the configured rates, keeping active entries with a usable rate.
    pub fn from_rates(rates: &[CurrencyRate], base: &str) -> Self {
        let mut table = Self::base_only(base);
        for rate in rates.iter().filter(|r| r.is_active) {
            table.insert(&rate.currency_code, rate.rate_to_inr);
        }
        table
    }

    /// Insert or replace a rate. Non-positive or non-finite rates and the
    /// base currency itself are ignored.
    pub fn insert(&mut self, code: &str, rate: f64) {
        let code = code.trim().to_uppercase();
        if code.is_empty() || code == self.base {
            return;
        }
        if rate.is_finite() && rate > 0.0 {
            self.rates.insert(code, rate);
        }
    }

    /// Remove a rate; the base currency stays. Returns whether anything was removed.
    pub fn remove(&mut self, code: &str) -> bool {
        let code = code.trim().to_uppercase();
        if code == self.base {
            return false;
        }
        self.rates.remove(&code).is_some()
    }

    /// Strict lookup: `None` when the code is unknown.
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(&code.trim().to_uppercase()).copied()
    }

    pub fn base_currency(&self) -> &str {
        &self.base
    }

    /// Known codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::base_only(DEFAULT_BASE_CURRENCY)
    }
}
