//! HTTP client wrapper for the Tradier API.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::api_types::TradierErrorResponse;
use super::config::TradierConfig;
use super::error::TradierError;
use crate::encoding::FormFields;

/// Default wait suggested when a 429 carries no `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Tradier API.
///
/// Requests are sent once. Retry policy is left to the caller.
#[derive(Debug, Clone)]
pub struct TradierHttpClient {
    client: Client,
    access_token: String,
    base_url: String,
}

impl TradierHttpClient {
    /// Create a new HTTP client from config.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` for an empty token, or `Http` if the
    /// underlying client cannot be built.
    pub fn new(config: &TradierConfig) -> Result<Self, TradierError> {
        if config.access_token.trim().is_empty() {
            return Err(TradierError::AuthenticationFailed);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| TradierError::Http(e.to_string()))?;

        Ok(Self {
            client,
            access_token: config.access_token.clone(),
            base_url: config.base_url().to_string(),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a form-encoded body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns a transport, status or decoding error.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &FormFields,
    ) -> Result<T, TradierError> {
        let url = format!("{}{path}", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .form(form.as_pairs())
            .send()
            .await
            .map_err(|e| TradierError::Network(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| TradierError::Network(e.to_string()))?;
            return serde_json::from_str(&text).map_err(|e| TradierError::JsonParse(e.to_string()));
        }

        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let error_body = response.text().await.unwrap_or_default();
        let error_message = serde_json::from_str::<TradierErrorResponse>(&error_body)
            .map_or(error_body, |err| err.message());

        tracing::warn!(
            status = status.as_u16(),
            message = %error_message,
            path = %path,
            "Tradier request failed"
        );

        Err(match categorize_status(status) {
            ErrorCategory::RateLimited => TradierError::RateLimited {
                retry_after_secs: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
            },
            ErrorCategory::Authentication => TradierError::AuthenticationFailed,
            ErrorCategory::Other => TradierError::Api {
                status: status.as_u16(),
                message: error_message,
            },
        })
    }
}

/// Error category for a failed response.
#[derive(Debug, PartialEq, Eq)]
enum ErrorCategory {
    RateLimited,
    Authentication,
    Other,
}

/// Categorize a non-success HTTP status code.
const fn categorize_status(status: StatusCode) -> ErrorCategory {
    match status.as_u16() {
        429 => ErrorCategory::RateLimited,
        401 | 403 => ErrorCategory::Authentication,
        _ => ErrorCategory::Other,
    }
}
