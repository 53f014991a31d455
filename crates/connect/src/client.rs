//! HTTP client for the Aluma backend API.
//!
//! This module provides the shared reqwest-based [`Transport`]
//! implementation. The authorization header is read from the session
//! store on every request, so a token refresh or logout takes effect
//! without rebuilding the client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use aluma_core::constants::DEFAULT_API_BASE_URL;
use aluma_core::errors::{Error, Result};

use crate::session::{self, SessionStore};
use crate::transport::{Method, Transport, TransportReply};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the Aluma backend API.
///
/// # Example
///
/// ```ignore
/// let session = Arc::new(MemorySessionStore::new());
/// let client = ApiClient::new(DEFAULT_API_BASE_URL, session)?;
/// let reply = client.send(Method::Get, "accounts", None).await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client against `base_url` (the versioned API
    /// root, e.g. the default `…/api/v1`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Client against the default backend URL.
    pub fn with_default_base_url(session: Arc<dyn SessionStore>) -> Result<Self> {
        Self::new(DEFAULT_API_BASE_URL, session)
    }

    /// Create default headers for API requests, attaching the bearer
    /// token currently held in the session store, when there is one.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = session::access_token(self.session.as_ref()) {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<TransportReply> {
        let url = self.url(path);
        debug!("[AlumaApi] {} {}", method.as_str(), url);

        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        }
        .headers(self.headers());

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response: {}", e)))?;

        // Bodies that are not JSON (proxy error pages and the like) are
        // classified the same as an empty envelope.
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        Ok(TransportReply { status, body })
    }
}
