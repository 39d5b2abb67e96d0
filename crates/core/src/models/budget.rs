use serde::{Deserialize, Serialize};

use super::amount::{lenient_bool, lenient_f64};
use crate::errors::CoreError;

/// Whether a budget line brings money in or sends it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetItemType {
    Income,
    Expense,
}

impl std::fmt::Display for BudgetItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetItemType::Income => write!(f, "INCOME"),
            BudgetItemType::Expense => write!(f, "EXPENSE"),
        }
    }
}

/// One monthly budget line (`GET /api/budget`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub item_type: BudgetItemType,

    pub item_name: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,

    /// Only meaningful for expenses (SIP, EPF, NPS and similar).
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_investment: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
}

impl BudgetItem {
    pub fn income(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: None,
            item_type: BudgetItemType::Income,
            item_name: name.into(),
            amount,
            is_investment: false,
            description: None,
            display_order: None,
        }
    }

    pub fn expense(name: impl Into<String>, amount: f64, is_investment: bool) -> Self {
        Self {
            id: None,
            item_type: BudgetItemType::Expense,
            item_name: name.into(),
            amount,
            is_investment,
            description: None,
            display_order: None,
        }
    }

    pub fn with_display_order(mut self, order: i32) -> Self {
        self.display_order = Some(order);
        self
    }

    /// Sort key used by every budget listing; absent order sorts as 0.
    pub fn order_key(&self) -> i32 {
        self.display_order.unwrap_or(0)
    }

    /// Investment flag with the income case masked out.
    pub fn counts_as_investment(&self) -> bool {
        self.item_type == BudgetItemType::Expense && self.is_investment
    }

    /// Check the item can be persisted: non-blank name and a positive amount.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.item_name.trim().is_empty() {
            return Err(CoreError::Validation("Budget item name must not be empty".into()));
        }
        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(CoreError::Validation(format!(
                "Budget item amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Pre-computed monthly totals from `GET /api/budget/summary`.
///
/// Consumed as-is; the client never re-derives these numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_income: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_expenses: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_investments: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_non_investment_expenses: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_surplus: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub investment_percentage: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub non_investment_expense_percentage: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub savings_rate: f64,
}
