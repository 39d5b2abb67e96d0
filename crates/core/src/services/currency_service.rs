use log::warn;

use crate::models::amount::finite_or_zero;
use crate::models::currency::RateTable;

/// Converts amounts in any configured currency to the base currency.
///
/// Unknown codes are converted at rate 1 (fail-open). The result is then a
/// number in the wrong unit, so callers that care should check
/// [`CurrencyService::is_known`] or collect the codes via [`Normalized`].
pub struct CurrencyService;

/// Result of a single conversion, recording whether the rate was a fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub value: f64,
    pub rate_found: bool,
}

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// `amount * rate(code)`; absent code means base currency, unknown code means rate 1.
    /// Missing or non-finite amounts count as 0. Never fails.
    pub fn normalize(&self, amount: Option<f64>, currency_code: Option<&str>, rates: &RateTable) -> f64 {
        self.normalize_checked(amount, currency_code, rates).value
    }

    /// Same as [`normalize`](Self::normalize) but reports whether a real rate was used.
    pub fn normalize_checked(
        &self,
        amount: Option<f64>,
        currency_code: Option<&str>,
        rates: &RateTable,
    ) -> Normalized {
        let amount = finite_or_zero(amount);

        let code = match currency_code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => code,
            None => {
                return Normalized {
                    value: amount,
                    rate_found: true,
                }
            }
        };

        match rates.rate_for(code) {
            Some(rate) => Normalized {
                value: finite_or_zero(Some(amount * rate)),
                rate_found: true,
            },
            None => Normalized {
                value: amount,
                rate_found: false,
            },
        }
    }

    /// Whether `code` (or the base currency, when absent) has a configured rate.
    pub fn is_known(&self, currency_code: Option<&str>, rates: &RateTable) -> bool {
        match currency_code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => rates.rate_for(code).is_some(),
            None => true,
        }
    }

    /// Convert a base-currency amount into `target` for display.
    /// Falls back to the base amount when `target` has no rate.
    pub fn from_base(&self, amount: f64, target: &str, rates: &RateTable) -> f64 {
        let amount = finite_or_zero(Some(amount));
        match rates.rate_for(target) {
            Some(rate) => amount / rate,
            None => {
                warn!(
                    "No rate for display currency {target}; showing amount in {}",
                    rates.base_currency()
                );
                amount
            }
        }
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}
