use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::budget::{BudgetItem, BudgetSummary};
use crate::models::category::{CustomAssetType, CustomLiabilityType};
use crate::models::currency::CurrencyRate;
use crate::models::history::{HistoryFilter, PortfolioHistory};
use crate::models::liability::Liability;
use crate::models::session::Session;
use crate::models::settings::Settings;
use crate::models::summary::PortfolioSummary;
use super::traits::PortfolioApi;

/// [`PortfolioApi`] over HTTP with `reqwest`.
///
/// - Adds `Authorization: Bearer <token>` whenever the session carries one.
/// - Maps every non-2xx status through [`CoreError::from_status`], so a 401/403
///   surfaces as [`CoreError::SessionExpired`].
/// - Path segments are percent-encoded (category names may contain spaces).
pub struct HttpPortfolioApi {
    client: Client,
    base_url: Url,
}

impl HttpPortfolioApi {
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        let base_url = Url::parse(settings.api_base_url.trim_end_matches('/')).map_err(|e| {
            CoreError::Validation(format!("Invalid API base URL '{}': {e}", settings.api_base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::Validation(format!(
                "API base URL '{}' cannot carry a path",
                settings.api_base_url
            )));
        }

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
        let client = builder
            .build()
            .map_err(|e| CoreError::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, base_url })
    }

    /// Full URL for `segments` below the API root.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        session: &Session,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, CoreError> {
        debug!("{method} {}", url.path());

        let mut request = self.client.request(method, url);
        if let Some(token) = session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.ok();
        Err(CoreError::from_status(status.as_u16(), body.as_deref()))
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CoreError> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, session: &Session, segments: &[&str]) -> Result<T, CoreError> {
        let url = self.endpoint(segments);
        let response = self.send::<()>(session, Method::GET, url, None).await?;
        Self::read_json(response).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        session: &Session,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<T, CoreError> {
        let url = self.endpoint(segments);
        let response = self.send(session, method, url, Some(body)).await?;
        Self::read_json(response).await
    }

    async fn delete(&self, session: &Session, segments: &[&str]) -> Result<(), CoreError> {
        let url = self.endpoint(segments);
        self.send::<()>(session, Method::DELETE, url, None).await?;
        Ok(())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PortfolioApi for HttpPortfolioApi {
    async fn list_assets(&self, session: &Session) -> Result<Vec<Asset>, CoreError> {
        self.get_json(session, &["assets"]).await
    }

    async fn portfolio_summary(&self, session: &Session) -> Result<PortfolioSummary, CoreError> {
        self.get_json(session, &["assets", "summary"]).await
    }

    async fn create_asset(&self, session: &Session, asset: &Asset) -> Result<Asset, CoreError> {
        self.send_json(session, Method::POST, &["assets"], asset).await
    }

    async fn update_asset(&self, session: &Session, id: i64, asset: &Asset) -> Result<Asset, CoreError> {
        self.send_json(session, Method::PUT, &["assets", id.to_string().as_str()], asset)
            .await
    }

    async fn delete_asset(&self, session: &Session, id: i64) -> Result<(), CoreError> {
        self.delete(session, &["assets", id.to_string().as_str()]).await
    }

    async fn list_liabilities(&self, session: &Session) -> Result<Vec<Liability>, CoreError> {
        self.get_json(session, &["liabilities"]).await
    }

    async fn create_liability(&self, session: &Session, liability: &Liability) -> Result<Liability, CoreError> {
        self.send_json(session, Method::POST, &["liabilities"], liability).await
    }

    async fn update_liability(
        &self,
        session: &Session,
        id: i64,
        liability: &Liability,
    ) -> Result<Liability, CoreError> {
        self.send_json(session, Method::PUT, &["liabilities", id.to_string().as_str()], liability)
            .await
    }

    async fn delete_liability(&self, session: &Session, id: i64) -> Result<(), CoreError> {
        self.delete(session, &["liabilities", id.to_string().as_str()]).await
    }

    async fn currency_rates(&self, session: &Session) -> Result<Vec<CurrencyRate>, CoreError> {
        self.get_json(session, &["configuration", "currency-rates"]).await
    }

    async fn save_currency_rate(&self, session: &Session, rate: &CurrencyRate) -> Result<CurrencyRate, CoreError> {
        self.send_json(session, Method::POST, &["configuration", "currency-rates"], rate)
            .await
    }

    async fn delete_currency_rate(&self, session: &Session, code: &str) -> Result<(), CoreError> {
        self.delete(session, &["configuration", "currency-rates", code]).await
    }

    async fn asset_types(&self, session: &Session) -> Result<Vec<CustomAssetType>, CoreError> {
        self.get_json(session, &["configuration", "custom-asset-types"]).await
    }

    async fn create_asset_type(
        &self,
        session: &Session,
        asset_type: &CustomAssetType,
    ) -> Result<CustomAssetType, CoreError> {
        self.send_json(session, Method::POST, &["configuration", "custom-asset-types"], asset_type)
            .await
    }

    async fn delete_asset_type(&self, session: &Session, id: i64) -> Result<(), CoreError> {
        self.delete(session, &["configuration", "custom-asset-types", id.to_string().as_str()])
            .await
    }

    async fn liability_types(&self, session: &Session) -> Result<Vec<CustomLiabilityType>, CoreError> {
        self.get_json(session, &["configuration", "custom-liability-types"]).await
    }

    async fn create_liability_type(
        &self,
        session: &Session,
        liability_type: &CustomLiabilityType,
    ) -> Result<CustomLiabilityType, CoreError> {
        self.send_json(
            session,
            Method::POST,
            &["configuration", "custom-liability-types"],
            liability_type,
        )
        .await
    }

    async fn delete_liability_type(&self, session: &Session, id: i64) -> Result<(), CoreError> {
        self.delete(session, &["configuration", "custom-liability-types", id.to_string().as_str()])
            .await
    }

    async fn budget_items(&self, session: &Session) -> Result<Vec<BudgetItem>, CoreError> {
        self.get_json(session, &["budget"]).await
    }

    async fn budget_summary(&self, session: &Session) -> Result<BudgetSummary, CoreError> {
        self.get_json(session, &["budget", "summary"]).await
    }

    async fn create_budget_item(&self, session: &Session, item: &BudgetItem) -> Result<BudgetItem, CoreError> {
        self.send_json(session, Method::POST, &["budget"], item).await
    }

    async fn update_budget_item(
        &self,
        session: &Session,
        id: i64,
        item: &BudgetItem,
    ) -> Result<BudgetItem, CoreError> {
        self.send_json(session, Method::PUT, &["budget", id.to_string().as_str()], item)
            .await
    }

    async fn delete_budget_item(&self, session: &Session, id: i64) -> Result<(), CoreError> {
        self.delete(session, &["budget", id.to_string().as_str()]).await
    }

    async fn portfolio_history(
        &self,
        session: &Session,
        filter: &HistoryFilter,
    ) -> Result<PortfolioHistory, CoreError> {
        let segments = filter.path_segments();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        let mut url = self.endpoint(&segments);
        url.query_pairs_mut().append_pair("weeks", &filter.weeks.to_string());

        let response = self.send::<()>(session, Method::GET, url, None).await?;
        Self::read_json(response).await
    }
}
