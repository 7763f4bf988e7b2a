// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network module with async JSON fetches.
//!
//! ```text
//! Fetcher::new()
//!   .url() .header() .bearer() .timeout()
//!        |
//!        +-------------+
//!        v             v
//!   fetch_string()  fetch_json::<T>()
//!        |
//!        v
//!   non-2xx  -> NetworkError::HttpError
//!   elapsed  -> NetworkError::Timeout
//!   bad body -> NetworkError::Decode
//!
//! Global client: OnceLock, connection pool, keep-alive
//! ```

use crate::error::{NetworkError, SiteEnvResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

/// Global HTTP client - initialized once, reused across all requests.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("site-env/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Async HTTP GET helper with builder pattern.
///
/// # Example
/// ```ignore
/// use site_env::net::Fetcher;
///
/// let list: Vec<serde_json::Value> = Fetcher::new()
///     .url("https://example.com/plugins.json")
///     .timeout(std::time::Duration::from_secs(60))
///     .fetch_json()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    url: Option<String>,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Create a new fetcher sharing the global client.
    /// User-Agent is set to "site-env/VERSION"
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: global_client().clone(),
            url: None,
            headers: Vec::new(),
            timeout: None,
        }
    }

    /// Set the URL to fetch.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Add a custom header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Authenticate with a bearer token.
    #[must_use]
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    /// Abort the request (including body read) after `timeout`.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Map a reqwest failure, singling out timeouts.
    fn map_reqwest(url: &str, err: reqwest::Error) -> NetworkError {
        if err.is_timeout() {
            NetworkError::Timeout {
                url: url.to_string(),
            }
        } else {
            NetworkError::Reqwest(err)
        }
    }

    /// Fetch the body as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if no URL is configured, the request fails or times
    /// out, or the server answers with a non-success status code.
    pub async fn fetch_string(&self) -> SiteEnvResult<String> {
        let url = self
            .url
            .as_ref()
            .ok_or_else(|| NetworkError::InvalidUrl("no URL provided".to_string()))?;

        let mut request = self.client.get(url);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        debug!(url = %url, "sending GET request");

        let response = request
            .send()
            .await
            .map_err(|e| Self::map_reqwest(url, e))?;

        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: url.clone(),
            }
            .into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| Self::map_reqwest(url, e))?;
        Ok(text)
    }

    /// Fetch the body and deserialize it as JSON.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Fetcher::fetch_string`], or
    /// `NetworkError::Decode` if the body is not the expected JSON shape.
    pub async fn fetch_json<T: DeserializeOwned>(&self) -> SiteEnvResult<T> {
        let text = self.fetch_string().await?;
        serde_json::from_str(&text).map_err(|e| {
            NetworkError::Decode {
                url: self.url.clone().unwrap_or_default(),
                message: e.to_string(),
            }
            .into()
        })
    }
}
