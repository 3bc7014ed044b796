//! HTTP domain store (`/api/domains`)

mod error;
mod http;
mod store;
mod types;

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{Result, StoreError};

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const DOMAINS_PATH: &str = "api/domains";

/// Connection settings for [`HttpDomainStore`].
#[derive(Debug, Clone)]
pub struct HttpStoreConfig {
    /// Origin (optionally with a path prefix) that serves `/api/domains`.
    pub base_url: String,
    /// Session token, sent as `Authorization: JWT <token>`.
    pub api_token: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for HttpStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            api_token: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Domain store backed by the inventory's REST endpoint.
pub struct HttpDomainStore {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
    pub(crate) api_token: Option<String>,
}

impl HttpDomainStore {
    /// Build a store with its own HTTP client.
    pub fn new(config: HttpStoreConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| StoreError::NetworkError {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Self::with_client(client, &config.base_url, config.api_token)
    }

    /// Build a store around an existing client.
    pub fn with_client(client: Client, base_url: &str, api_token: Option<String>) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            api_token: api_token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// `<base>/api/domains`
    pub(crate) fn collection_url(&self) -> Result<Url> {
        self.join(DOMAINS_PATH)
    }

    /// `<base>/api/domains/<id>` with the id percent-encoded.
    pub(crate) fn item_url(&self, id: &str) -> Result<Url> {
        self.join(&format!("{DOMAINS_PATH}/{}", urlencoding::encode(id)))
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| StoreError::InvalidRequest {
                raw_message: Some(format!("Invalid request URL: {e}")),
            })
    }
}

/// Parse the base URL and make sure its path ends with `/`, so joining keeps
/// any prefix (`http://host/app` → `http://host/app/api/domains`).
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| StoreError::InvalidRequest {
        raw_message: Some(format!("Invalid base URL '{raw}': {e}")),
    })?;
    if url.cannot_be_a_base() {
        return Err(StoreError::InvalidRequest {
            raw_message: Some(format!("Invalid base URL '{raw}'")),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
