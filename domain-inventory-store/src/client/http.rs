//! HTTP 请求方法

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::error::{Result, StoreError};
use crate::http_client::HttpUtils;
use crate::traits::{DomainStore, ErrorContext};

use super::HttpDomainStore;
use super::error::map_status_error;

pub(crate) const STORE_NAME: &str = "http";

impl HttpDomainStore {
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.api_token {
            Some(token) => builder.header("Authorization", format!("JWT {token}")),
            None => builder,
        }
    }

    /// Send a request and return the body of a 2xx response.
    async fn send(
        &self,
        builder: RequestBuilder,
        method: &Method,
        url: &Url,
        context: ErrorContext,
    ) -> Result<String> {
        let store = self.id();
        let (status, body) =
            HttpUtils::execute_request(builder, store, method.as_str(), url.as_str()).await?;

        if (200..300).contains(&status) {
            return Ok(body);
        }

        let err = map_status_error(status, &body, context);
        if err.is_expected() {
            log::warn!("[{store}] {method} {url} rejected: {err}");
        } else {
            log::error!("[{store}] {method} {url} failed: {err}");
        }
        Err(err)
    }

    /// 执行 GET 请求
    pub(crate) async fn get(&self, url: Url, context: ErrorContext) -> Result<String> {
        let builder = self
            .request(Method::GET, url.clone())
            .header("Accept", "application/json");
        self.send(builder, &Method::GET, &url, context).await
    }

    /// 执行 POST 请求 (JSON body)
    pub(crate) async fn post_json<B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
        context: ErrorContext,
    ) -> Result<String> {
        let payload = serde_json::to_vec(body).map_err(|e| StoreError::SerializationError {
            detail: e.to_string(),
        })?;
        let builder = self
            .request(Method::POST, url.clone())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(payload);
        self.send(builder, &Method::POST, &url, context).await
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, url: Url, context: ErrorContext) -> Result<()> {
        let builder = self.request(Method::DELETE, url.clone());
        self.send(builder, &Method::DELETE, &url, context)
            .await
            .map(|_| ())
    }
}
