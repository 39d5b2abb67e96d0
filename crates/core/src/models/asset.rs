use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::{finite_or_zero, lenient_f64, percentage_of};
use crate::errors::CoreError;

/// An asset record as returned by `GET /api/assets`.
///
/// Monetary fields are in the asset's own `currency` (base currency when absent).
/// `gain_loss` / `gain_loss_percentage` are filled in by the backend; use
/// [`Asset::derived_gain_loss`] when they are missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    /// Foreign key to the user's custom asset type.
    #[serde(default)]
    pub custom_asset_type_id: i64,

    #[serde(default)]
    pub asset_type_name: Option<String>,

    /// Display name of the category; the category filter matches on this.
    #[serde(default)]
    pub asset_type_display_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_value: f64,

    /// Price per unit at purchase.
    #[serde(default)]
    pub purchase_price: Option<f64>,

    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,

    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// ISO currency code; `None` means the base currency.
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub illiquid: Option<bool>,

    #[serde(default)]
    pub gain_loss: Option<f64>,

    #[serde(default)]
    pub gain_loss_percentage: Option<f64>,
}

impl Asset {
    pub fn new(name: impl Into<String>, category: impl Into<String>, current_value: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            custom_asset_type_id: 0,
            asset_type_name: None,
            asset_type_display_name: Some(category.into()),
            current_value,
            purchase_price: None,
            purchase_date: None,
            quantity: None,
            description: None,
            location: None,
            currency: None,
            illiquid: None,
            gain_loss: None,
            gain_loss_percentage: None,
        }
    }

    /// Builder-style setter for the per-unit purchase price and quantity.
    pub fn with_purchase(mut self, purchase_price: f64, quantity: f64) -> Self {
        self.purchase_price = Some(purchase_price);
        self.quantity = Some(quantity);
        self
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }

    pub fn with_illiquid(mut self, illiquid: bool) -> Self {
        self.illiquid = Some(illiquid);
        self
    }

    pub fn with_type_id(mut self, custom_asset_type_id: i64) -> Self {
        self.custom_asset_type_id = custom_asset_type_id;
        self
    }

    /// Check the asset can be persisted: a name, a chosen type and a usable value.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("Asset name must not be empty".into()));
        }
        if self.custom_asset_type_id <= 0 {
            return Err(CoreError::Validation("Please select an asset type".into()));
        }
        if !(self.current_value.is_finite() && self.current_value >= 0.0) {
            return Err(CoreError::Validation(format!(
                "Asset current value must be zero or more, got {}",
                self.current_value
            )));
        }
        Ok(())
    }

    /// Quantity held, 1 when the record does not carry one.
    pub fn quantity_or_default(&self) -> f64 {
        match self.quantity {
            Some(q) if q.is_finite() && q != 0.0 => q,
            _ => 1.0,
        }
    }

    pub fn is_illiquid(&self) -> bool {
        self.illiquid.unwrap_or(false)
    }

    /// Display name of the category, empty when the backend did not resolve it.
    pub fn category_name(&self) -> &str {
        self.asset_type_display_name.as_deref().unwrap_or("")
    }

    /// `purchase_price * quantity` in the asset's own currency.
    pub fn total_purchase_price(&self) -> f64 {
        finite_or_zero(self.purchase_price) * self.quantity_or_default()
    }

    /// Current value minus total purchase price, 0 when no purchase price is recorded.
    pub fn derived_gain_loss(&self) -> f64 {
        if self.purchase_price.is_none() {
            return 0.0;
        }
        finite_or_zero(Some(self.current_value)) - self.total_purchase_price()
    }

    pub fn derived_gain_loss_percentage(&self) -> f64 {
        percentage_of(self.derived_gain_loss(), self.total_purchase_price())
    }

    /// Backend gain/loss percentage when present, otherwise derived locally.
    pub fn effective_gain_loss_percentage(&self) -> f64 {
        match self.gain_loss_percentage {
            Some(p) if p.is_finite() => p,
            _ => self.derived_gain_loss_percentage(),
        }
    }
}
