use log::{debug, warn};
use std::collections::BTreeSet;

use crate::models::amount::{finite_or_zero, percentage_of, saturating_add};
use crate::models::asset::Asset;
use crate::models::currency::RateTable;
use crate::models::filter::{name_matches, AssetFilter, LiabilityFilter};
use crate::models::liability::Liability;
use crate::models::summary::{AssetSummary, LiabilitySummary};
use crate::services::currency_service::CurrencyService;

/// Number of assets shown in the dashboard's "top performers" card.
pub const DEFAULT_TOP_ASSETS: usize = 5;

/// Filters entity lists and derives the totals shown above each list.
///
/// Pure business logic: no I/O, no retained state, total over its inputs.
/// Every percentage guards a zero denominator by returning 0.
pub struct AggregationService {
    currency_service: CurrencyService,
}

impl AggregationService {
    pub fn new() -> Self {
        Self {
            currency_service: CurrencyService::new(),
        }
    }

    // ── Assets ──────────────────────────────────────────────────────

    /// Assets matching category AND name search AND liquidity, in input order.
    pub fn apply_asset_filters<'a>(&self, assets: &'a [Asset], filter: &AssetFilter) -> Vec<&'a Asset> {
        assets
            .iter()
            .filter(|a| {
                filter.category.matches(a.category_name())
                    && name_matches(&a.name, &filter.search)
                    && filter.liquidity.matches(a.is_illiquid())
            })
            .collect()
    }

    /// Filter, normalise to the base currency, and total.
    pub fn summarize_assets(&self, assets: &[Asset], filter: &AssetFilter, rates: &RateTable) -> AssetSummary {
        let filtered = self.apply_asset_filters(assets, filter);
        self.summarize_filtered_assets(&filtered, rates)
    }

    /// Totals over an already-filtered slice.
    pub fn summarize_filtered_assets(&self, assets: &[&Asset], rates: &RateTable) -> AssetSummary {
        let mut total_purchase_price = 0.0;
        let mut total_current_value = 0.0;
        let mut unconverted = BTreeSet::new();

        for asset in assets {
            let code = asset.currency.as_deref();
            let purchase = self.currency_service.normalize_checked(
                Some(asset.total_purchase_price()),
                code,
                rates,
            );
            let current = self
                .currency_service
                .normalize_checked(Some(asset.current_value), code, rates);

            if !purchase.rate_found || !current.rate_found {
                if let Some(code) = code {
                    unconverted.insert(code.trim().to_uppercase());
                }
            }

            total_purchase_price = saturating_add(total_purchase_price, purchase.value);
            total_current_value = saturating_add(total_current_value, current.value);
        }

        for code in &unconverted {
            warn!(
                "No active rate for {code}; its amounts were summed at rate 1 against {}",
                rates.base_currency()
            );
        }

        let total_gains = saturating_add(total_current_value, -total_purchase_price);
        debug!(
            "Summarized {} assets: value={total_current_value}, cost={total_purchase_price}",
            assets.len()
        );

        AssetSummary {
            total_purchase_price,
            total_current_value,
            total_gains,
            total_gains_percentage: percentage_of(total_gains, total_purchase_price),
            asset_count: assets.len(),
            unconverted_currencies: unconverted.into_iter().collect(),
        }
    }

    /// The best performers by backend gain/loss percentage, highest first.
    /// Assets the backend sent without a percentage are left out; ties keep input order.
    pub fn top_assets<'a>(&self, assets: &'a [Asset], count: usize) -> Vec<&'a Asset> {
        let mut ranked: Vec<&Asset> = assets
            .iter()
            .filter(|a| a.gain_loss_percentage.is_some())
            .collect();
        ranked.sort_by(|a, b| {
            finite_or_zero(b.gain_loss_percentage)
                .partial_cmp(&finite_or_zero(a.gain_loss_percentage))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(count);
        ranked
    }

    // ── Liabilities ─────────────────────────────────────────────────

    /// Liabilities matching category AND name search AND status, in input order.
    pub fn apply_liability_filters<'a>(
        &self,
        liabilities: &'a [Liability],
        filter: &LiabilityFilter,
    ) -> Vec<&'a Liability> {
        liabilities
            .iter()
            .filter(|l| {
                filter.category.matches(l.category_name())
                    && name_matches(&l.name, &filter.search)
                    && filter.status.matches(finite_or_zero(Some(l.current_balance)))
            })
            .collect()
    }

    /// Filter and total. Balances are already in the base currency.
    pub fn summarize_liabilities(&self, liabilities: &[Liability], filter: &LiabilityFilter) -> LiabilitySummary {
        let filtered = self.apply_liability_filters(liabilities, filter);
        self.summarize_filtered_liabilities(&filtered)
    }

    pub fn summarize_filtered_liabilities(&self, liabilities: &[&Liability]) -> LiabilitySummary {
        let (total_current_balance, total_original_amount) =
            liabilities.iter().fold((0.0, 0.0), |(balance, original), l| {
                (
                    saturating_add(balance, finite_or_zero(Some(l.current_balance))),
                    saturating_add(original, finite_or_zero(l.original_amount)),
                )
            });

        let total_paid_amount = saturating_add(total_original_amount, -total_current_balance);

        LiabilitySummary {
            total_current_balance,
            total_original_amount,
            total_paid_amount,
            overall_paid_off_percentage: percentage_of(total_paid_amount, total_original_amount),
            liability_count: liabilities.len(),
        }
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
