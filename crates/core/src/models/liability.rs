use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::{finite_or_zero, lenient_f64, percentage_of};
use crate::errors::CoreError;

/// A liability record as returned by `GET /api/liabilities`.
///
/// Balances are taken as already expressed in the base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub custom_liability_type_id: i64,

    #[serde(default)]
    pub liability_type_name: Option<String>,

    #[serde(default)]
    pub liability_type_display_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_balance: f64,

    #[serde(default)]
    pub original_amount: Option<f64>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Annual interest rate in percent.
    #[serde(default)]
    pub interest_rate: Option<f64>,

    #[serde(default)]
    pub monthly_payment: Option<f64>,

    /// Currency the loan is denominated in. Informational; balances are summed as-is.
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub lender: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub paid_amount: Option<f64>,

    #[serde(default)]
    pub repayment_percentage: Option<f64>,
}

impl Liability {
    pub fn new(name: impl Into<String>, category: impl Into<String>, current_balance: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            custom_liability_type_id: 0,
            liability_type_name: None,
            liability_type_display_name: Some(category.into()),
            current_balance,
            original_amount: None,
            start_date: None,
            end_date: None,
            interest_rate: None,
            monthly_payment: None,
            currency: None,
            lender: None,
            description: None,
            paid_amount: None,
            repayment_percentage: None,
        }
    }

    pub fn with_original_amount(mut self, original_amount: f64) -> Self {
        self.original_amount = Some(original_amount);
        self
    }

    pub fn with_type_id(mut self, custom_liability_type_id: i64) -> Self {
        self.custom_liability_type_id = custom_liability_type_id;
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("Liability name must not be empty".into()));
        }
        if self.custom_liability_type_id <= 0 {
            return Err(CoreError::Validation("Please select a liability type".into()));
        }
        if !(self.current_balance.is_finite() && self.current_balance >= 0.0) {
            return Err(CoreError::Validation(format!(
                "Liability balance must be zero or more, got {}",
                self.current_balance
            )));
        }
        Ok(())
    }

    pub fn category_name(&self) -> &str {
        self.liability_type_display_name.as_deref().unwrap_or("")
    }

    /// A liability with nothing left to pay is closed.
    pub fn is_closed(&self) -> bool {
        finite_or_zero(Some(self.current_balance)) == 0.0
    }

    /// Original amount minus current balance; 0 without an original amount.
    pub fn derived_paid_amount(&self) -> f64 {
        match self.original_amount {
            Some(original) => finite_or_zero(Some(original)) - finite_or_zero(Some(self.current_balance)),
            None => 0.0,
        }
    }

    pub fn derived_repayment_percentage(&self) -> f64 {
        percentage_of(self.derived_paid_amount(), finite_or_zero(self.original_amount))
    }
}
