//! Alegra REST client

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AlegraError, Result};
use crate::http_client::HttpUtils;
use crate::query::{self, ResourceSpec};
use crate::traits::AccountingApi;
use crate::types::{BillQuery, InvoiceQuery, ListQuery, PaginationParams, PaymentQuery};
use crate::utils::log_sanitizer::mask_secret;

/// Production API root.
pub const ALEGRA_API_BASE: &str = "https://api.alegra.com/api/v1";
/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`AlegraClient`].
#[derive(Clone)]
pub struct AlegraConfig {
    /// Account e-mail used as the basic-auth user.
    pub username: String,
    /// API token used as the basic-auth password.
    pub api_token: String,
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl AlegraConfig {
    /// Settings for the production API with default timeouts.
    pub fn new(username: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_token: api_token.into(),
            base_url: ALEGRA_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

impl std::fmt::Debug for AlegraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlegraConfig")
            .field("username", &mask_secret(&self.username))
            .field("api_token", &"***")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Alegra API client.
///
/// The basic-auth header is computed once at construction and baked into the
/// underlying `reqwest::Client`, so the client is immutable and can be shared
/// across tasks behind an `Arc`.
pub struct AlegraClient {
    client: Client,
    base_url: String,
}

impl AlegraClient {
    /// Build a client from `config`.
    ///
    /// Fails with [`AlegraError::Configuration`] if the username, token or base
    /// URL is empty, or if the HTTP client cannot be built.
    pub fn new(config: AlegraConfig) -> Result<Self> {
        for (field, value) in [
            ("username", &config.username),
            ("api_token", &config.api_token),
            ("base_url", &config.base_url),
        ] {
            if value.trim().is_empty() {
                return Err(AlegraError::Configuration {
                    detail: format!("{field} must not be empty"),
                });
            }
        }

        let token = STANDARD.encode(format!("{}:{}", config.username, config.api_token));
        let mut auth = HeaderValue::from_str(&format!("Basic {token}")).map_err(|e| {
            AlegraError::Configuration {
                detail: format!("invalid credentials header: {e}"),
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AlegraError::Configuration {
                detail: format!("failed to build HTTP client: {e}"),
            })?;

        log::info!(
            "[alegra] client ready for {} (user {})",
            config.base_url,
            mask_secret(&config.username)
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a GET and parse the body as JSON.
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let url = format!("{}{path}", self.base_url);
        let request = self.client.get(&url).query(query);
        let body = HttpUtils::execute_request(request, "GET", path).await?;
        HttpUtils::parse_json(&body)
    }

    /// Fetch one page of a list resource.
    async fn fetch_list<Q: Serialize + Sync>(
        &self,
        resource: &ResourceSpec,
        pagination: &PaginationParams,
        filters: &Q,
    ) -> Result<Value> {
        let query = query::build_query(resource, pagination, filters)?;
        log::debug!("[alegra] listing {} with {query:?}", resource.name);
        self.get_json(resource.path, &query).await
    }

    /// Fetch one entity by id from `collection`.
    async fn fetch_entity(&self, collection: &str, param: &str, id: &str) -> Result<Value> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AlegraError::InvalidParameter {
                param: param.to_string(),
                detail: "must not be blank".to_string(),
            });
        }
        let path = format!("{collection}/{}", urlencoding::encode(id));
        self.get_json(&path, &[]).await
    }
}

#[async_trait]
impl AccountingApi for AlegraClient {
    async fn list_invoices(&self, params: &InvoiceQuery) -> Result<Value> {
        self.fetch_list(&query::INVOICES, &params.pagination, params)
            .await
    }

    async fn get_invoice(&self, id: &str) -> Result<Value> {
        self.fetch_entity(query::INVOICES.path, "invoice_id", id)
            .await
    }

    async fn list_payments(&self, params: &PaymentQuery) -> Result<Value> {
        self.fetch_list(&query::PAYMENTS, &params.pagination, params)
            .await
    }

    async fn list_bills(&self, params: &BillQuery) -> Result<Value> {
        self.fetch_list(&query::BILLS, &params.pagination, params)
            .await
    }

    async fn get_bill(&self, id: &str) -> Result<Value> {
        self.fetch_entity(query::BILLS.path, "bill_id", id).await
    }

    async fn list_items(&self, params: &ListQuery) -> Result<Value> {
        self.fetch_list(&query::ITEMS, &params.pagination, params)
            .await
    }

    async fn get_item(&self, id: &str) -> Result<Value> {
        self.fetch_entity(query::ITEMS.path, "item_id", id).await
    }

    async fn list_inventory_value(&self, params: &ListQuery) -> Result<Value> {
        self.fetch_list(&query::INVENTORY_VALUE, &params.pagination, params)
            .await
    }

    async fn list_inventory_adjustments(&self, params: &ListQuery) -> Result<Value> {
        self.fetch_list(&query::INVENTORY_ADJUSTMENTS, &params.pagination, params)
            .await
    }

    async fn list_warehouses(&self, params: &ListQuery) -> Result<Value> {
        self.fetch_list(&query::WAREHOUSES, &params.pagination, params)
            .await
    }

    async fn list_bank_accounts(&self, params: &ListQuery) -> Result<Value> {
        self.fetch_list(&query::BANK_ACCOUNTS, &params.pagination, params)
            .await
    }

    async fn list_journal_entries(&self, params: &ListQuery) -> Result<Value> {
        self.fetch_list(&query::JOURNAL_ENTRIES, &params.pagination, params)
            .await
    }

    async fn get_journal_entry(&self, id: &str) -> Result<Value> {
        self.fetch_entity(query::JOURNAL_ENTRIES.path, "journal_entry_id", id)
            .await
    }

    async fn list_expenses(&self, params: &ListQuery) -> Result<Value> {
        self.fetch_list(&query::EXPENSES, &params.pagination, params)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_are_rejected() {
        let result = AlegraClient::new(AlegraConfig::new("", "token"));
        assert!(
            matches!(&result, Err(AlegraError::Configuration { detail }) if detail.contains("username")),
            "expected configuration error"
        );

        let result = AlegraClient::new(AlegraConfig::new("user@example.com", "  "));
        assert!(
            matches!(&result, Err(AlegraError::Configuration { detail }) if detail.contains("api_token")),
            "expected configuration error"
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config = AlegraConfig::new("user@example.com", "token").with_base_url("");
        assert!(matches!(
            AlegraClient::new(config),
            Err(AlegraError::Configuration { .. })
        ));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config =
            AlegraConfig::new("user@example.com", "token").with_base_url("http://localhost:9/v1/");
        let client = AlegraClient::new(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9/v1");
    }

    #[test]
    fn debug_output_hides_token() {
        let config = AlegraConfig::new("admin@example.com", "super-secret-token");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(!debug.contains("admin@example.com"));
    }

    #[test]
    fn defaults_match_production() {
        let config = AlegraConfig::new("u", "t");
        assert_eq!(config.base_url, "https://api.alegra.com/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn blank_id_fails_before_any_request() {
        let config =
            AlegraConfig::new("user@example.com", "token").with_base_url("http://127.0.0.1:9");
        let client = AlegraClient::new(config).unwrap();
        let result = client.get_invoice("   ").await;
        assert!(
            matches!(&result, Err(AlegraError::InvalidParameter { param, .. }) if param == "invoice_id"),
            "unexpected result: {result:?}"
        );
    }
}
