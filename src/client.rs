use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{AssetRecord, HistoryRecord, Interval};

pub const DEFAULT_BASE_URL: &str = "https://api.coincap.io/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure at the market-data boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure or non-2xx status.
    #[error("market data request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// 2xx body that does not carry the expected shape.
    #[error("malformed market data response: {0}")]
    MalformedResponse(String),
}

/// Thin typed client over the market data REST API. No retry, no caching,
/// no rate limiting — callers that loop over assets space their own requests.
#[derive(Debug, Clone)]
pub struct MarketClient {
    http: reqwest::Client,
    base_url: String,
}

impl MarketClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("coinscope/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(MarketClient {
            http,
            base_url: base_url.into(),
        })
    }

    /// GET `{base}{path}`, unwrap the top-level `data` key, decode the array.
    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let body: serde_json::Value = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let data = body.get("data").cloned().ok_or_else(|| {
            ClientError::MalformedResponse(format!("missing `data` key in response from {path}"))
        })?;
        serde_json::from_value(data)
            .map_err(|e| ClientError::MalformedResponse(format!("{path}: {e}")))
    }

    /// Listing of asset snapshots, largest market cap first.
    pub async fn assets(&self, limit: u32) -> Result<Vec<AssetRecord>, ClientError> {
        self.get_data("/assets", &[("limit", limit.to_string())])
            .await
    }

    /// Price history for one asset over `[start_ms, end_ms]` at `interval`.
    pub async fn asset_history(
        &self,
        asset_id: &str,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<HistoryRecord>, ClientError> {
        self.get_data(
            &format!("/assets/{asset_id}/history"),
            &[
                ("interval", interval.to_string()),
                ("start", start_ms.to_string()),
                ("end", end_ms.to_string()),
            ],
        )
        .await
    }

    /// Market listings, optionally filtered to one base asset.
    pub async fn markets(
        &self,
        limit: u32,
        base_id: Option<&str>,
    ) -> Result<Vec<serde_json::Value>, ClientError> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(id) = base_id {
            query.push(("baseId", id.to_string()));
        }
        self.get_data("/markets", &query).await
    }

    /// Exchange listings.
    pub async fn exchanges(&self, limit: u32) -> Result<Vec<serde_json::Value>, ClientError> {
        self.get_data("/exchanges", &[("limit", limit.to_string())])
            .await
    }

    /// Fiat exchange rates.
    pub async fn rates(&self) -> Result<Vec<serde_json::Value>, ClientError> {
        self.get_data("/rates", &[]).await
    }
}
