// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for site-env.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. site-env.toml (cwd)
//! 3. --config FILE (repeatable)
//! 4. SITE_ENV_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SITE_ENV_API__TOKEN=abc        → api.token = "abc"
//! SITE_ENV_SITE__ACCOUNT_ID=team → site.account_id = "team"
//! SITE_ENV_GLOBAL__LOG_LEVEL=4   → global.log_level = 4
//! ```
//!
//! Local variables are not configuration: they live in the project file,
//! see [`crate::project`].

pub mod loader;
pub mod types;


use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigError, SiteEnvResult};

use types::{ApiConfig, GlobalConfig, PluginsConfig, SiteConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Variable service API.
    pub api: ApiConfig,
    /// Account and site.
    pub site: SiteConfig,
    /// Build plugin catalogue.
    pub plugins: PluginsConfig,
}

impl Config {
    /// Check values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unparseable URL or a zero
    /// timeout.
    pub fn validate(&self) -> SiteEnvResult<()> {
        check_url("api", &self.api.url)?;
        check_url("plugins", &self.plugins.url)?;
        check_timeout("api", self.api.timeout_secs)?;
        check_timeout("plugins", self.plugins.timeout_secs)?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// The API token is shown as `[hidden]`. Output is ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        let or_empty = |value: &Option<String>| value.clone().unwrap_or_default();

        options.insert(
            "global.log_level".to_string(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "global.project_file".to_string(),
            self.global.project_file.display().to_string(),
        );
        options.insert("api.url".to_string(), self.api.url.clone());
        if self.api.token.as_ref().is_some_and(|t| !t.is_empty()) {
            options.insert("api.token".to_string(), "[hidden]".to_string());
        }
        options.insert(
            "api.timeout_secs".to_string(),
            self.api.timeout_secs.to_string(),
        );
        options.insert("site.account_id".to_string(), or_empty(&self.site.account_id));
        options.insert("site.site_id".to_string(), or_empty(&self.site.site_id));
        options.insert("plugins.url".to_string(), self.plugins.url.clone());
        options.insert(
            "plugins.timeout_secs".to_string(),
            self.plugins.timeout_secs.to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

fn check_url(section: &str, url: &str) -> SiteEnvResult<()> {
    Url::parse(url).map(|_| ()).map_err(|e| {
        ConfigError::InvalidValue {
            section: section.to_string(),
            key: "url".to_string(),
            message: format!("'{url}' is not a valid URL: {e}"),
        }
        .into()
    })
}

fn check_timeout(section: &str, secs: u64) -> SiteEnvResult<()> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            section: section.to_string(),
            key: "timeout_secs".to_string(),
            message: "timeout must be at least 1 second".to_string(),
        }
        .into());
    }
    Ok(())
}
