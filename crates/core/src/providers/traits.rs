use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::budget::{BudgetItem, BudgetSummary};
use crate::models::category::{CustomAssetType, CustomLiabilityType};
use crate::models::currency::CurrencyRate;
use crate::models::history::{HistoryFilter, PortfolioHistory};
use crate::models::liability::Liability;
use crate::models::session::Session;
use crate::models::summary::PortfolioSummary;

/// The backend's REST contract, as seen by the client.
///
/// `HttpPortfolioApi` talks to the real server; tests plug in an in-memory
/// implementation. Every call receives the session explicitly so that token
/// handling never depends on ambient state.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PortfolioApi: Send + Sync {
    /// `GET /assets`
    async fn list_assets(&self, session: &Session) -> Result<Vec<Asset>, CoreError>;

    /// `GET /assets/summary`
    async fn portfolio_summary(&self, session: &Session) -> Result<PortfolioSummary, CoreError>;

    /// `POST /assets`
    async fn create_asset(&self, session: &Session, asset: &Asset) -> Result<Asset, CoreError>;

    /// `PUT /assets/{id}`
    async fn update_asset(&self, session: &Session, id: i64, asset: &Asset) -> Result<Asset, CoreError>;

    /// `DELETE /assets/{id}`
    async fn delete_asset(&self, session: &Session, id: i64) -> Result<(), CoreError>;

    /// `GET /liabilities`
    async fn list_liabilities(&self, session: &Session) -> Result<Vec<Liability>, CoreError>;

    /// `POST /liabilities`
    async fn create_liability(&self, session: &Session, liability: &Liability) -> Result<Liability, CoreError>;

    /// `PUT /liabilities/{id}`
    async fn update_liability(
        &self,
        session: &Session,
        id: i64,
        liability: &Liability,
    ) -> Result<Liability, CoreError>;

    /// `DELETE /liabilities/{id}`
    async fn delete_liability(&self, session: &Session, id: i64) -> Result<(), CoreError>;

    /// `GET /configuration/currency-rates`
    async fn currency_rates(&self, session: &Session) -> Result<Vec<CurrencyRate>, CoreError>;

    /// `POST /configuration/currency-rates` (insert or update by code)
    async fn save_currency_rate(&self, session: &Session, rate: &CurrencyRate) -> Result<CurrencyRate, CoreError>;

    /// `DELETE /configuration/currency-rates/{code}`
    async fn delete_currency_rate(&self, session: &Session, code: &str) -> Result<(), CoreError>;

    /// `GET /configuration/custom-asset-types`
    async fn asset_types(&self, session: &Session) -> Result<Vec<CustomAssetType>, CoreError>;

    /// `POST /configuration/custom-asset-types`
    async fn create_asset_type(
        &self,
        session: &Session,
        asset_type: &CustomAssetType,
    ) -> Result<CustomAssetType, CoreError>;

    /// `DELETE /configuration/custom-asset-types/{id}`
    async fn delete_asset_type(&self, session: &Session, id: i64) -> Result<(), CoreError>;

    /// `GET /configuration/custom-liability-types`
    async fn liability_types(&self, session: &Session) -> Result<Vec<CustomLiabilityType>, CoreError>;

    /// `POST /configuration/custom-liability-types`
    async fn create_liability_type(
        &self,
        session: &Session,
        liability_type: &CustomLiabilityType,
    ) -> Result<CustomLiabilityType, CoreError>;

    /// `DELETE /configuration/custom-liability-types/{id}`
    async fn delete_liability_type(&self, session: &Session, id: i64) -> Result<(), CoreError>;

    /// `GET /budget`
    async fn budget_items(&self, session: &Session) -> Result<Vec<BudgetItem>, CoreError>;

    /// `GET /budget/summary`
    async fn budget_summary(&self, session: &Session) -> Result<BudgetSummary, CoreError>;

    /// `POST /budget`
    async fn create_budget_item(&self, session: &Session, item: &BudgetItem) -> Result<BudgetItem, CoreError>;

    /// `PUT /budget/{id}`
    async fn update_budget_item(
        &self,
        session: &Session,
        id: i64,
        item: &BudgetItem,
    ) -> Result<BudgetItem, CoreError>;

    /// `DELETE /budget/{id}`
    async fn delete_budget_item(&self, session: &Session, id: i64) -> Result<(), CoreError>;

    /// `GET /portfolio-snapshots/history[/scope/key]?weeks=N`
    async fn portfolio_history(
        &self,
        session: &Session,
        filter: &HistoryFilter,
    ) -> Result<PortfolioHistory, CoreError>;
}
