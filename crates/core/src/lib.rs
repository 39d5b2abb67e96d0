pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use log::warn;

use errors::CoreError;
use models::{
    asset::Asset,
    budget::BudgetItem,
    category::{active_categories, CategoryType},
    chart::HistoryPoint,
    currency::{CurrencyRate, RateTable},
    filter::{AssetFilter, LiabilityFilter},
    history::HistoryFilter,
    liability::Liability,
    session::Session,
    settings::Settings,
    summary::PortfolioSummary,
    view::{AssetListView, BudgetView, DashboardView, LiabilityListView},
};
use providers::{http::HttpPortfolioApi, traits::PortfolioApi};
use services::{
    aggregation_service::{AggregationService, DEFAULT_TOP_ASSETS},
    budget_service::BudgetService,
    chart_service::{ChartService, LIABILITY_PALETTE},
    format_service::FormatService,
};

/// Main entry point for the Netly client core.
///
/// Owns the explicit context (settings and session) plus an API backend, and
/// turns freshly fetched data into view-models. Every `load_*` call starts
/// from a new fetch; nothing is cached between calls.
#[must_use]
pub struct NetlyClient {
    settings: Settings,
    session: Session,
    api: Box<dyn PortfolioApi>,
    aggregation_service: AggregationService,
    chart_service: ChartService,
    budget_service: BudgetService,
}

impl std::fmt::Debug for NetlyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetlyClient")
            .field("settings", &self.settings)
            .field("authenticated", &self.session.is_authenticated())
            .field("session_expired", &self.session.is_expired())
            .finish()
    }
}

impl NetlyClient {
    /// Client talking HTTP to `settings.api_base_url`.
    pub fn new(settings: Settings, session: Session) -> Result<Self, CoreError> {
        let api = HttpPortfolioApi::new(&settings)?;
        Ok(Self::with_api(settings, session, Box::new(api)))
    }

    /// Client over any [`PortfolioApi`] implementation.
    pub fn with_api(settings: Settings, session: Session, api: Box<dyn PortfolioApi>) -> Self {
        Self {
            settings,
            session,
            api,
            aggregation_service: AggregationService::new(),
            chart_service: ChartService::new(),
            budget_service: BudgetService::new(),
        }
    }

    // ── Context ─────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Install a freshly issued token (after login).
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.session = Session::with_token(token);
    }

    pub fn logout(&mut self) {
        self.session.clear();
    }

    /// Change the preferred display currency (3-letter code).
    pub fn set_display_currency(&mut self, currency: &str) -> Result<(), CoreError> {
        self.settings.set_display_currency(currency)
    }

    /// Formatter bound to the current base and display currencies.
    #[must_use]
    pub fn formatter(&self) -> FormatService {
        FormatService::new(&self.settings.base_currency, &self.settings.display_currency)
    }

    // ── Views ───────────────────────────────────────────────────────

    /// Active conversion rates. A failed fetch degrades to a base-only table.
    pub async fn load_rate_table(&mut self) -> Result<RateTable, CoreError> {
        let result = self.api.currency_rates(&self.session).await;
        let rates = self.degrade(result, "currency rates")?;
        Ok(RateTable::from_rates(&rates, &self.settings.base_currency))
    }

    /// Every configured rate, inactive ones included, for the settings screen.
    pub async fn load_currency_rates(&mut self) -> Result<Vec<CurrencyRate>, CoreError> {
        let result = self.api.currency_rates(&self.session).await;
        self.intercept(result)
    }

    /// Every custom asset type, inactive ones included.
    pub async fn load_asset_types(&mut self) -> Result<Vec<CategoryType>, CoreError> {
        let result = self.api.asset_types(&self.session).await;
        self.intercept(result)
    }

    /// Every custom liability type, inactive ones included.
    pub async fn load_liability_types(&mut self) -> Result<Vec<CategoryType>, CoreError> {
        let result = self.api.liability_types(&self.session).await;
        self.intercept(result)
    }

    /// Asset list screen: filtered assets and their base-currency totals.
    pub async fn load_asset_list(&mut self, filter: &AssetFilter) -> Result<AssetListView, CoreError> {
        let result = self.api.asset_types(&self.session).await;
        let categories = self.degrade(result, "asset types")?;
        let rates = self.load_rate_table().await?;
        let result = self.api.list_assets(&self.session).await;
        let assets = self.intercept(result)?;

        Ok(self.asset_list_view(&assets, filter, &rates, categories))
    }

    /// Liability list screen.
    pub async fn load_liability_list(&mut self, filter: &LiabilityFilter) -> Result<LiabilityListView, CoreError> {
        let result = self.api.liability_types(&self.session).await;
        let categories = self.degrade(result, "liability types")?;
        let result = self.api.list_liabilities(&self.session).await;
        let liabilities = self.intercept(result)?;

        Ok(self.liability_list_view(&liabilities, filter, categories))
    }

    /// Dashboard: server summary, breakdown charts, allocation and top performers.
    pub async fn load_dashboard(&mut self) -> Result<DashboardView, CoreError> {
        let result = self.api.portfolio_summary(&self.session).await;
        let summary = self.intercept(result)?;
        let result = self.api.list_assets(&self.session).await;
        let assets = self.intercept(result)?;
        let result = self.api.list_liabilities(&self.session).await;
        let liabilities = self.degrade(result, "liabilities")?;

        Ok(self.dashboard_view(summary, &assets, liabilities))
    }

    /// Budget screen. Items are required; a missing summary shows zeros.
    pub async fn load_budget(&mut self) -> Result<BudgetView, CoreError> {
        let result = self.api.budget_items(&self.session).await;
        let items = self.intercept(result)?;
        let result = self.api.budget_summary(&self.session).await;
        let summary = self.degrade(result, "budget summary")?;

        Ok(self.budget_service.build_view(&items, summary))
    }

    /// History chart points for the given scope.
    pub async fn load_history(&mut self, filter: &HistoryFilter) -> Result<Vec<HistoryPoint>, CoreError> {
        let result = self.api.portfolio_history(&self.session, filter).await;
        let history = self.intercept(result)?;
        Ok(self.chart_service.build_time_series(&history))
    }

    /// Overview history over the configured default number of weeks.
    pub async fn load_overview_history(&mut self) -> Result<Vec<HistoryPoint>, CoreError> {
        let filter = HistoryFilter::overview().with_weeks(self.settings.history_weeks);
        self.load_history(&filter).await
    }

    // ── Mutations (each returns the reloaded view) ──────────────────

    pub async fn add_budget_item(&mut self, item: BudgetItem) -> Result<BudgetView, CoreError> {
        let item = normalize_budget_item(item);
        item.validate()?;
        let result = self.api.create_budget_item(&self.session, &item).await;
        self.intercept(result)?;
        self.load_budget().await
    }

    pub async fn update_budget_item(&mut self, id: i64, item: BudgetItem) -> Result<BudgetView, CoreError> {
        let item = normalize_budget_item(item);
        item.validate()?;
        let result = self.api.update_budget_item(&self.session, id, &item).await;
        self.intercept(result)?;
        self.load_budget().await
    }

    pub async fn delete_budget_item(&mut self, id: i64) -> Result<BudgetView, CoreError> {
        let result = self.api.delete_budget_item(&self.session, id).await;
        self.intercept(result)?;
        self.load_budget().await
    }

    pub async fn add_asset(&mut self, asset: Asset, filter: &AssetFilter) -> Result<AssetListView, CoreError> {
        asset.validate()?;
        let result = self.api.create_asset(&self.session, &asset).await;
        self.intercept(result)?;
        self.load_asset_list(filter).await
    }

    pub async fn update_asset(
        &mut self,
        id: i64,
        asset: Asset,
        filter: &AssetFilter,
    ) -> Result<AssetListView, CoreError> {
        asset.validate()?;
        let result = self.api.update_asset(&self.session, id, &asset).await;
        self.intercept(result)?;
        self.load_asset_list(filter).await
    }

    pub async fn delete_asset(&mut self, id: i64, filter: &AssetFilter) -> Result<AssetListView, CoreError> {
        let result = self.api.delete_asset(&self.session, id).await;
        self.intercept(result)?;
        self.load_asset_list(filter).await
    }

    pub async fn add_liability(
        &mut self,
        liability: Liability,
        filter: &LiabilityFilter,
    ) -> Result<LiabilityListView, CoreError> {
        liability.validate()?;
        let result = self.api.create_liability(&self.session, &liability).await;
        self.intercept(result)?;
        self.load_liability_list(filter).await
    }

    pub async fn update_liability(
        &mut self,
        id: i64,
        liability: Liability,
        filter: &LiabilityFilter,
    ) -> Result<LiabilityListView, CoreError> {
        liability.validate()?;
        let result = self.api.update_liability(&self.session, id, &liability).await;
        self.intercept(result)?;
        self.load_liability_list(filter).await
    }

    pub async fn delete_liability(
        &mut self,
        id: i64,
        filter: &LiabilityFilter,
    ) -> Result<LiabilityListView, CoreError> {
        let result = self.api.delete_liability(&self.session, id).await;
        self.intercept(result)?;
        self.load_liability_list(filter).await
    }

    /// Insert or update a rate by code.
    pub async fn save_currency_rate(&mut self, rate: CurrencyRate) -> Result<Vec<CurrencyRate>, CoreError> {
        let rate = rate.validated()?;
        if rate.currency_code.eq_ignore_ascii_case(&self.settings.base_currency) {
            return Err(CoreError::Validation(format!(
                "{} is the base currency; its rate is always 1",
                rate.currency_code
            )));
        }
        let result = self.api.save_currency_rate(&self.session, &rate).await;
        self.intercept(result)?;
        self.load_currency_rates().await
    }

    /// Delete a rate. The base currency is refused before any request is made.
    pub async fn delete_currency_rate(&mut self, code: &str) -> Result<Vec<CurrencyRate>, CoreError> {
        let code = code.trim().to_uppercase();
        if code == self.settings.base_currency.trim().to_uppercase() {
            return Err(CoreError::Validation(format!("Cannot delete {code} currency")));
        }
        let result = self.api.delete_currency_rate(&self.session, &code).await;
        self.intercept(result)?;
        self.load_currency_rates().await
    }

    pub async fn add_asset_type(&mut self, asset_type: CategoryType) -> Result<Vec<CategoryType>, CoreError> {
        asset_type.validate()?;
        let result = self.api.create_asset_type(&self.session, &asset_type).await;
        self.intercept(result)?;
        self.load_asset_types().await
    }

    pub async fn delete_asset_type(&mut self, id: i64) -> Result<Vec<CategoryType>, CoreError> {
        let result = self.api.delete_asset_type(&self.session, id).await;
        self.intercept(result)?;
        self.load_asset_types().await
    }

    pub async fn add_liability_type(
        &mut self,
        liability_type: CategoryType,
    ) -> Result<Vec<CategoryType>, CoreError> {
        liability_type.validate()?;
        let result = self.api.create_liability_type(&self.session, &liability_type).await;
        self.intercept(result)?;
        self.load_liability_types().await
    }

    pub async fn delete_liability_type(&mut self, id: i64) -> Result<Vec<CategoryType>, CoreError> {
        let result = self.api.delete_liability_type(&self.session, id).await;
        self.intercept(result)?;
        self.load_liability_types().await
    }

    // ── Pure view builders ──────────────────────────────────────────

    /// Asset list view from already-resolved data.
    #[must_use]
    pub fn asset_list_view(
        &self,
        assets: &[Asset],
        filter: &AssetFilter,
        rates: &RateTable,
        categories: Vec<CategoryType>,
    ) -> AssetListView {
        let filtered = self.aggregation_service.apply_asset_filters(assets, filter);
        let summary = self.aggregation_service.summarize_filtered_assets(&filtered, rates);
        AssetListView {
            assets: filtered.into_iter().cloned().collect(),
            summary,
            categories: active_categories(categories),
        }
    }

    #[must_use]
    pub fn liability_list_view(
        &self,
        liabilities: &[Liability],
        filter: &LiabilityFilter,
        categories: Vec<CategoryType>,
    ) -> LiabilityListView {
        let filtered = self.aggregation_service.apply_liability_filters(liabilities, filter);
        let summary = self.aggregation_service.summarize_filtered_liabilities(&filtered);
        LiabilityListView {
            liabilities: filtered.into_iter().cloned().collect(),
            summary,
            categories: active_categories(categories),
        }
    }

    #[must_use]
    pub fn dashboard_view(
        &self,
        summary: PortfolioSummary,
        assets: &[Asset],
        liabilities: Vec<Liability>,
    ) -> DashboardView {
        let asset_series = self.chart_service.build_series(&summary.breakdown.type_breakdown);
        let liability_series = self
            .chart_service
            .build_series_with_palette(&summary.liability_breakdown.type_breakdown, LIABILITY_PALETTE);
        let allocation = self
            .chart_service
            .allocation_rows(&summary.breakdown.type_breakdown, summary.total_value);
        let top_assets = self
            .aggregation_service
            .top_assets(assets, DEFAULT_TOP_ASSETS)
            .into_iter()
            .cloned()
            .collect();

        DashboardView {
            summary,
            asset_series,
            liability_series,
            allocation,
            top_assets,
            liabilities,
        }
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Drop the session when the backend rejected the token, then pass the result on.
    fn intercept<T>(&mut self, result: Result<T, CoreError>) -> Result<T, CoreError> {
        if let Err(e) = &result {
            if e.is_session_expired() {
                warn!("Session rejected by the server; clearing token");
                self.session.expire();
            }
        }
        result
    }

    /// Like [`intercept`](Self::intercept), but any failure other than an expired
    /// session is logged and replaced by an empty value.
    fn degrade<T: Default>(&mut self, result: Result<T, CoreError>, what: &str) -> Result<T, CoreError> {
        match self.intercept(result) {
            Ok(value) => Ok(value),
            Err(e) if e.is_session_expired() => Err(e),
            Err(e) => {
                warn!("Failed to load {what}: {e}");
                Ok(T::default())
            }
        }
    }
}

/// Income lines never count as investments.
fn normalize_budget_item(mut item: BudgetItem) -> BudgetItem {
    if !item.counts_as_investment() {
        item.is_investment = false;
    }
    item
}
