// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable service client.
//!
//! ```text
//! EnvelopeClient (trait)
//!   get_env_var(account, key, site?)  -> EnvVarRecord
//!   get_env_vars(account, site?)      -> Vec<EnvVarRecord>
//!        ^
//!        |
//! EnvelopeApi (REST)
//!   GET {base}/accounts/{account}/env[/{key}]?site_id={site}
//!   Authorization: Bearer {token}
//! ```

use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

use super::types::EnvVarRecord;
use crate::config::types::ApiConfig;
use crate::error::{NetworkError, SiteEnvResult};
use crate::net::Fetcher;

/// Remote variable service.
///
/// Implementations return errors for network and authorization failures;
/// callers decide whether to propagate or degrade them.
#[async_trait]
pub trait EnvelopeClient: Send + Sync {
    /// Fetch a single variable for an account, optionally scoped to a site.
    async fn get_env_var(
        &self,
        account_id: &str,
        key: &str,
        site_id: Option<&str>,
    ) -> SiteEnvResult<EnvVarRecord>;

    /// Fetch every variable for an account, optionally scoped to a site.
    async fn get_env_vars(
        &self,
        account_id: &str,
        site_id: Option<&str>,
    ) -> SiteEnvResult<Vec<EnvVarRecord>>;
}

/// [`EnvelopeClient`] over the platform REST API.
#[derive(Debug, Clone)]
pub struct EnvelopeApi {
    base_url: Url,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl EnvelopeApi {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::InvalidUrl` if `base_url` cannot be parsed or
    /// cannot carry path segments.
    pub fn new(base_url: &str) -> SiteEnvResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| NetworkError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(NetworkError::InvalidUrl(base_url.to_string()).into());
        }
        Ok(Self {
            base_url,
            token: None,
            timeout: None,
        })
    }

    /// Create a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL is invalid.
    pub fn from_config(api: &ApiConfig) -> SiteEnvResult<Self> {
        let client = Self::new(&api.url)?.with_timeout(Duration::from_secs(api.timeout_secs));
        Ok(match api.token.as_deref() {
            Some(token) if !token.is_empty() => client.with_token(token),
            _ => client,
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// `{base}/accounts/{account}/env[/{key}][?site_id={site}]`
    fn env_url(&self, account_id: &str, key: Option<&str>, site_id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["accounts", account_id, "env"]);
            if let Some(key) = key {
                segments.push(key);
            }
        }
        if let Some(site_id) = site_id {
            url.query_pairs_mut().append_pair("site_id", site_id);
        }
        url
    }

    fn fetcher(&self, url: &Url) -> Fetcher {
        let mut fetcher = Fetcher::new()
            .url(url.as_str())
            .header("Accept", "application/json");
        if let Some(token) = &self.token {
            fetcher = fetcher.bearer(token);
        }
        if let Some(timeout) = self.timeout {
            fetcher = fetcher.timeout(timeout);
        }
        fetcher
    }
}

#[async_trait]
impl EnvelopeClient for EnvelopeApi {
    async fn get_env_var(
        &self,
        account_id: &str,
        key: &str,
        site_id: Option<&str>,
    ) -> SiteEnvResult<EnvVarRecord> {
        let url = self.env_url(account_id, Some(key), site_id);
        self.fetcher(&url).fetch_json().await
    }

    async fn get_env_vars(
        &self,
        account_id: &str,
        site_id: Option<&str>,
    ) -> SiteEnvResult<Vec<EnvVarRecord>> {
        let url = self.env_url(account_id, None, site_id);
        self.fetcher(&url).fetch_json().await
    }
}
