use crate::models::budget::{BudgetItem, BudgetItemType, BudgetSummary};
use crate::models::chart::SeriesEntry;
use crate::models::view::{BudgetView, ExpenseBar};
use crate::services::chart_service::{palette_color, BUDGET_PALETTE};

/// Bars shown in the "top expenses" chart.
pub const TOP_EXPENSES: usize = 10;

pub const INVESTMENT_COLOR: &str = "#3b82f6";
pub const LIVING_EXPENSE_COLOR: &str = "#f97316";

/// Shapes budget items for display.
///
/// Totals come from the backend's [`BudgetSummary`]; this service only
/// partitions, orders and colours.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Items of one type, ordered by `display_order` ascending (stable).
    pub fn items_of_type(&self, items: &[BudgetItem], item_type: BudgetItemType) -> Vec<BudgetItem> {
        let mut selected: Vec<BudgetItem> = items
            .iter()
            .filter(|i| i.item_type == item_type)
            .cloned()
            .collect();
        selected.sort_by_key(BudgetItem::order_key);
        selected
    }

    /// Split ordered expenses into (investments, living expenses), keeping order.
    pub fn split_expenses(&self, expenses: &[BudgetItem]) -> (Vec<BudgetItem>, Vec<BudgetItem>) {
        expenses
            .iter()
            .filter(|i| i.item_type == BudgetItemType::Expense)
            .cloned()
            .partition(BudgetItem::counts_as_investment)
    }

    /// Largest expenses first, at most `count`.
    pub fn top_expenses(&self, expenses: &[BudgetItem], count: usize) -> Vec<ExpenseBar> {
        let mut ranked: Vec<&BudgetItem> = expenses.iter().collect();
        ranked.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));
        ranked
            .into_iter()
            .take(count)
            .map(|item| ExpenseBar {
                name: item.item_name.clone(),
                amount: item.amount,
                is_investment: item.counts_as_investment(),
                color: if item.counts_as_investment() {
                    INVESTMENT_COLOR.to_string()
                } else {
                    LIVING_EXPENSE_COLOR.to_string()
                },
            })
            .collect()
    }

    /// Investments vs living expenses pie; empty slices are dropped.
    pub fn expense_breakdown(&self, summary: &BudgetSummary) -> Vec<SeriesEntry> {
        [
            ("Investments", summary.total_investments, INVESTMENT_COLOR),
            ("Living Expenses", summary.total_non_investment_expenses, LIVING_EXPENSE_COLOR),
        ]
        .into_iter()
        .filter(|(_, value, _)| *value > 0.0)
        .map(|(name, value, color)| SeriesEntry {
            name: name.to_string(),
            value,
            color: color.to_string(),
        })
        .collect()
    }

    /// Income sources in display order, coloured by position.
    pub fn income_breakdown(&self, income: &[BudgetItem]) -> Vec<SeriesEntry> {
        income
            .iter()
            .enumerate()
            .map(|(i, item)| SeriesEntry {
                name: item.item_name.clone(),
                value: item.amount,
                color: palette_color(BUDGET_PALETTE, i).to_string(),
            })
            .collect()
    }

    /// Assemble the full budget screen from the fetched items and summary.
    pub fn build_view(&self, items: &[BudgetItem], summary: BudgetSummary) -> BudgetView {
        let income = self.items_of_type(items, BudgetItemType::Income);
        let expenses = self.items_of_type(items, BudgetItemType::Expense);
        let (investments, living_expenses) = self.split_expenses(&expenses);
        let has_chart_data = !income.is_empty() || !expenses.is_empty();

        let (top_expenses, expense_breakdown, income_breakdown) = if has_chart_data {
            (
                self.top_expenses(&expenses, TOP_EXPENSES),
                self.expense_breakdown(&summary),
                self.income_breakdown(&income),
            )
        } else {
            (Vec::new(), Vec::new(), Vec::new())
        };

        BudgetView {
            income,
            expenses,
            investments,
            living_expenses,
            summary,
            top_expenses,
            expense_breakdown,
            income_breakdown,
            has_chart_data,
        }
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
