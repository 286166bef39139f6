//! Thin HTTP wrapper around the target cluster's REST API.

use esrecon_core::Endpoint;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

use crate::error::{ReconError, Result};

/// Applied to every request, connect and read combined.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct EsClient {
    endpoint: Endpoint,
    http: Client,
}

impl EsClient {
    /// Build a client for `endpoint`. Certificate validation is always off:
    /// targets are untrusted and routinely run self-signed certificates.
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(true)
            .user_agent(format!("esrecon/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ReconError::Client)?;
        Ok(EsClient { endpoint, http })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post_json<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Send `method` to `path` and decode a 2xx JSON body into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        let url = self.endpoint.url(path);
        debug!(%method, %url, "sending request");
        let mut req = self.http.request(method, &url);
        if let Some(b) = body {
            req = req.json(b);
        }
        let resp = req
            .send()
            .await
            .map_err(|source| ReconError::Transport { url: url.clone(), source })?;
        let status = resp.status();
        trace!(%url, status = status.as_u16(), "response received");
        let text = resp
            .text()
            .await
            .map_err(|source| ReconError::Transport { url: url.clone(), source })?;
        if !status.is_success() {
            return Err(ReconError::Status { url, status, body: text });
        }
        serde_json::from_str(&text).map_err(|source| ReconError::Decode { url, source })
    }

    /// PUT with no body. Any status is returned as-is together with the body text.
    pub async fn put_empty(&self, path: &str) -> Result<(StatusCode, String)> {
        let url = self.endpoint.url(path);
        debug!(method = "PUT", %url, "sending request");
        let resp = self
            .http
            .put(&url)
            .send()
            .await
            .map_err(|source| ReconError::Transport { url: url.clone(), source })?;
        let status = resp.status();
        trace!(%url, status = status.as_u16(), "response received");
        let text = resp
            .text()
            .await
            .map_err(|source| ReconError::Transport { url, source })?;
        Ok((status, text))
    }
}
