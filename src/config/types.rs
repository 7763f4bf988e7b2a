// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for site-env.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ApiConfig, SiteConfig, PluginsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::env::SiteInfo;
use crate::logging::LogLevel;

/// Default variable service endpoint.
pub const DEFAULT_API_URL: &str = "https://api.netlify.com/api/v1";

/// Default build plugin catalogue.
pub const DEFAULT_PLUGINS_URL: &str = "https://list-v2--netlify-plugins.netlify.app/plugins.json";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub log_level: LogLevel,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Project file holding local variables and plugins.
    pub project_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::INFO,
            log_file: None,
            project_file: PathBuf::from("site.toml"),
        }
    }
}

/// Variable service API options.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the REST API.
    pub url: String,
    /// Personal access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

// Hand-written so the token never reaches logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "[hidden]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Account and site the variables belong to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Account (team) slug or id. Remote lookups need it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Site id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

impl SiteConfig {
    #[must_use]
    pub fn site_info(&self) -> SiteInfo {
        SiteInfo::new(self.account_id.clone(), self.site_id.clone())
    }
}

/// Build plugin catalogue options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginsConfig {
    /// URL of the JSON plugin list.
    pub url: String,
    /// Fetch timeout before falling back to the bundled list.
    pub timeout_secs: u64,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PLUGINS_URL.to_string(),
            timeout_secs: 60,
        }
    }
}
