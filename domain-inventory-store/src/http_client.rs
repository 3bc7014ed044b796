//! Generic HTTP client tools
//!
//! Sending requests, logging and reading responses in one place, so the
//! store client only has to build `RequestBuilder`s and map status codes.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Maximum number of characters of a body written to the log.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for safe logging.
///
/// Bodies may echo tokens or user data; only the first `TRUNCATE_LIMIT`
/// characters are kept, followed by the total length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text.
    ///
    /// Transport failures become [`StoreError::Timeout`] or
    /// [`StoreError::NetworkError`]; status codes are left to the caller.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        store_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), StoreError> {
        log::debug!("[{store_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                StoreError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{store_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| StoreError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{store_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response, logging the raw body on failure.
    pub fn parse_json<T>(response_text: &str, store_name: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{store_name}] JSON parse failed: {e}");
            log::error!(
                "[{store_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            StoreError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}
