use serde::{Deserialize, Serialize};

use super::asset::Asset;
use super::budget::{BudgetItem, BudgetSummary};
use super::category::CategoryType;
use super::chart::{AllocationRow, SeriesEntry};
use super::liability::Liability;
use super::summary::{AssetSummary, LiabilitySummary, PortfolioSummary};

/// Everything the asset list screen binds to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetListView {
    /// Assets passing the filter, in API order.
    pub assets: Vec<Asset>,
    pub summary: AssetSummary,
    pub categories: Vec<CategoryType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiabilityListView {
    pub liabilities: Vec<Liability>,
    pub summary: LiabilitySummary,
    pub categories: Vec<CategoryType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub summary: PortfolioSummary,
    pub asset_series: Vec<SeriesEntry>,
    pub liability_series: Vec<SeriesEntry>,
    pub allocation: Vec<AllocationRow>,
    pub top_assets: Vec<Asset>,
    pub liabilities: Vec<Liability>,
}

/// One bar of the "top expenses" chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBar {
    pub name: String,
    pub amount: f64,
    pub is_investment: bool,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetView {
    /// Income items by display order.
    pub income: Vec<BudgetItem>,
    /// Expense items by display order.
    pub expenses: Vec<BudgetItem>,
    pub investments: Vec<BudgetItem>,
    pub living_expenses: Vec<BudgetItem>,
    pub summary: BudgetSummary,
    pub top_expenses: Vec<ExpenseBar>,
    pub expense_breakdown: Vec<SeriesEntry>,
    pub income_breakdown: Vec<SeriesEntry>,
    pub has_chart_data: bool,
}
