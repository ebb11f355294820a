//! HTTP client for the Vercel REST API.
//!
//! Every outbound request made by the server goes through [`VercelClient`].
//! It injects the bearer token and JSON content type, enforces the configured
//! timeout and classifies failures into [`ApiError`] variants.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::{ApiError, ApiRequest};
use crate::core::config::ApiConfig;

/// Client bound to one base URL and one token for the process lifetime.
#[derive(Clone)]
pub struct VercelClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    timeout: Duration,
}

impl std::fmt::Debug for VercelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VercelClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl VercelClient {
    /// Build a client from the API section of the configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            timeout,
        })
    }

    /// Swap the underlying reqwest client (e.g. a `no_proxy()` client in tests).
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Absolute URL for a request.
    pub fn url_for(&self, request: &ApiRequest) -> String {
        format!(
            "{}/{}",
            self.base_url,
            request.endpoint().trim_start_matches('/')
        )
    }

    fn headers_for(&self, request: &ApiRequest) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| ApiError::Setup("API token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in request.headers() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::Setup(format!("invalid header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::Setup(format!("invalid value for header '{name}': {e}")))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    /// Send a request and decode the JSON body.
    ///
    /// Returns `Ok(None)` when the API answers 2xx with an empty body.
    #[instrument(skip_all, fields(method = %request.method(), path = request.path()))]
    pub async fn send<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<Option<T>, ApiError> {
        let url = self.url_for(request);
        debug!("Sending request to {}", url);

        let mut builder = self
            .http
            .request(request.method().clone(), &url)
            .headers(self.headers_for(request)?);
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            error!(status = status.as_u16(), "Vercel API returned an error");
            return Err(ApiError::remote(status.as_u16(), &text));
        }

        if text.trim().is_empty() {
            debug!("Empty response body");
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request and return the raw JSON; `null` counts as no data.
    pub async fn send_json(&self, request: &ApiRequest) -> Result<Option<Value>, ApiError> {
        Ok(self.send::<Value>(request).await?.filter(|v| !v.is_null()))
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
