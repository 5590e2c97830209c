//! Biconomy REST client
//!
//! One method per reader. Public endpoints are plain GETs with query
//! parameters; private endpoints are form-encoded POSTs signed by
//! [`BiconomyAuth`]. Every request carries the exchange's mandatory
//! `X-SITE-ID` header.

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

use super::auth::BiconomyAuth;
use super::error::ExchangeError;
use super::types;
use crate::account::{AssetBalance, OrderRecord};
use crate::market::{MarketTrade, Orderbook, TickerSnapshot};

/// Biconomy REST base URL
pub const BICONOMY_API_URL: &str = "https://api.biconomy.vip";

/// Site id the exchange requires on every request
const X_SITE_ID: &str = "127";

/// Configuration for the REST client
#[derive(Debug, Clone)]
pub struct BiconomyConfig {
    /// Base URL for the REST API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Depth levels to request per side
    pub depth_size: u32,
    /// Recent trades to request
    pub trade_size: u32,
    /// Finished orders to request (single page)
    pub history_page_size: u32,
}

impl Default for BiconomyConfig {
    fn default() -> Self {
        Self {
            base_url: BICONOMY_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            depth_size: 20,
            trade_size: 30,
            history_page_size: 50,
        }
    }
}

/// Client for the Biconomy REST API
pub struct BiconomyClient {
    config: BiconomyConfig,
    client: Client,
    auth: Option<BiconomyAuth>,
}

impl BiconomyClient {
    /// Create an unauthenticated client for the public endpoints
    pub fn new() -> Self {
        Self::with_config(BiconomyConfig::default(), None)
    }

    /// Create a client that can also call the private endpoints
    pub fn with_auth(auth: BiconomyAuth) -> Self {
        Self::with_config(BiconomyConfig::default(), Some(auth))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: BiconomyConfig, auth: Option<BiconomyAuth>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("X-SITE-ID", HeaderValue::from_static(X_SITE_ID));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            auth,
        }
    }

    /// Fetch the orderbook for one symbol
    pub async fn fetch_orderbook(&self, symbol: &str) -> Result<Orderbook, ExchangeError> {
        let value = self
            .get(
                "/api/v1/depth",
                &[
                    ("symbol", symbol.to_string()),
                    ("size", self.config.depth_size.to_string()),
                ],
            )
            .await?;
        let depth: types::DepthResponse = decode(value)?;
        depth.into_orderbook(symbol)
    }

    /// Fetch the 24h ticker for one symbol
    ///
    /// The endpoint returns every market on the exchange; the entry for
    /// `symbol` is selected client-side.
    pub async fn fetch_ticker(&self, symbol: &str) -> Result<TickerSnapshot, ExchangeError> {
        let value = self.get("/api/v1/tickers", &[]).await?;
        let tickers: types::TickersResponse = decode(value)?;
        tickers.into_snapshot(symbol)
    }

    /// Fetch recent public trades for one symbol, most recent first
    pub async fn fetch_trades(&self, symbol: &str) -> Result<Vec<MarketTrade>, ExchangeError> {
        let value = self
            .get(
                "/api/v1/trades",
                &[
                    ("symbol", symbol.to_string()),
                    ("size", self.config.trade_size.to_string()),
                ],
            )
            .await?;
        types::trades_from_value(value)
    }

    /// Fetch the exchange's server time
    pub async fn fetch_server_time(&self) -> Result<DateTime<Utc>, ExchangeError> {
        let value = self.get("/api/v1/time", &[]).await?;
        types::server_time_from_value(&value)
    }

    /// Fetch all asset balances on the account
    pub async fn fetch_balances(&self) -> Result<Vec<AssetBalance>, ExchangeError> {
        let value = self.post_signed("/api/v2/private/user", BTreeMap::new()).await?;
        let balances: types::BalancesResponse = decode(value)?;
        balances.into_balances()
    }

    /// Fetch open orders for one market
    pub async fn fetch_open_orders(&self, market: &str) -> Result<Vec<OrderRecord>, ExchangeError> {
        let mut params = BTreeMap::new();
        params.insert("market".to_string(), market.to_string());

        let value = self.post_signed("/api/v2/private/order/pending", params).await?;
        let orders: types::OrdersResponse = decode(value)?;
        orders.into_records()
    }

    /// Fetch the most recent finished orders for one market (one page)
    pub async fn fetch_order_history(
        &self,
        market: &str,
    ) -> Result<Vec<OrderRecord>, ExchangeError> {
        let mut params = BTreeMap::new();
        params.insert("market".to_string(), market.to_string());
        params.insert("page".to_string(), "1".to_string());
        params.insert(
            "page_size".to_string(),
            self.config.history_page_size.to_string(),
        );

        let value = self.post_signed("/api/v2/private/order/finished", params).await?;
        let orders: types::OrdersResponse = decode(value)?;
        orders.into_records()
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ExchangeError> {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(&url).query(query).send().await?;
        self.read_body(response).await
    }

    async fn post_signed(
        &self,
        path: &str,
        params: BTreeMap<String, String>,
    ) -> Result<Value, ExchangeError> {
        let auth = self
            .auth
            .as_ref()
            .ok_or(ExchangeError::MissingCredentials(crate::config::API_KEY_ENV))?;

        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(url = %url, "signed POST");

        let form = auth.signed_form(params, Utc::now().timestamp_millis());
        let response = self.client.post(&url).form(&form).send().await?;
        self.read_body(response).await
    }

    /// Shared response handling: non-2xx keeps the exchange's body verbatim,
    /// then the JSON envelope is checked before the caller decodes.
    async fn read_body(&self, response: reqwest::Response) -> Result<Value, ExchangeError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ExchangeError::Status { status, body });
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| ExchangeError::Payload(format!("{} in body: {}", e, body)))?;
        types::check_envelope(&value)?;
        Ok(value)
    }
}

impl Default for BiconomyClient {
    fn default() -> Self {
        Self::new()
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ExchangeError> {
    serde_json::from_value(value).map_err(|e| ExchangeError::Payload(e.to_string()))
}
