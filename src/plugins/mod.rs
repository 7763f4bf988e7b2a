// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build plugin catalogue.
//!
//! ```text
//! get_plugins_list(source, fallback)
//!        |
//!        v
//!   PluginsSource::fetch_plugins()   (HttpPluginsSource: GET url, 60s)
//!        |
//!   Ok(list) -> list
//!   Err(_)   -> fallback (bundled plugins.json)
//! ```
//!
//! No list is cached between calls.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::types::PluginsConfig;
use crate::error::{PluginError, SiteEnvResult};
use crate::net::Fetcher;

const BUNDLED_PLUGINS: &str = include_str!("plugins.json");

/// One entry of the plugin catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginInfo {
    pub package: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub recommended: bool,
}

/// Where a configured plugin was added from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginOrigin {
    /// Installed through the site settings UI.
    Ui,
    /// Declared in the project file.
    #[default]
    Config,
    /// Added by the platform.
    Default,
}

/// Plugin entry of the project file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfiguredPlugin {
    pub package: String,
    #[serde(default)]
    pub origin: PluginOrigin,
}

/// Something that can produce the plugin catalogue.
#[async_trait]
pub trait PluginsSource: Send + Sync {
    async fn fetch_plugins(&self) -> SiteEnvResult<Vec<PluginInfo>>;
}

/// Catalogue served as JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPluginsSource {
    url: String,
    timeout: Duration,
}

impl HttpPluginsSource {
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    #[must_use]
    pub fn from_config(config: &PluginsConfig) -> Self {
        Self::new(&config.url, Duration::from_secs(config.timeout_secs))
    }
}

#[async_trait]
impl PluginsSource for HttpPluginsSource {
    async fn fetch_plugins(&self) -> SiteEnvResult<Vec<PluginInfo>> {
        Fetcher::new()
            .url(&self.url)
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .fetch_json()
            .await
    }
}

/// Catalogue shipped with the binary.
#[must_use]
pub fn bundled_plugins() -> Vec<PluginInfo> {
    serde_json::from_str(BUNDLED_PLUGINS).unwrap_or_else(|e| {
        warn!(error = %e, "bundled plugin list is unreadable");
        Vec::new()
    })
}

/// Fetch the catalogue, or return `fallback` when the source fails.
pub async fn get_plugins_list<S>(source: &S, fallback: &[PluginInfo]) -> Vec<PluginInfo>
where
    S: PluginsSource + ?Sized,
{
    match source.fetch_plugins().await {
        Ok(plugins) => {
            debug!(count = plugins.len(), "fetched plugin list");
            plugins
        }
        Err(e) => {
            debug!(error = %e, "plugin list unavailable, using bundled list");
            fallback.to_vec()
        }
    }
}

/// Look up a plugin by package name.
///
/// # Errors
///
/// Returns `PluginError::NotFound` if no entry has this package name.
pub fn get_plugin_info<'a>(
    plugins: &'a [PluginInfo],
    package: &str,
) -> SiteEnvResult<&'a PluginInfo> {
    plugins
        .iter()
        .find(|p| p.package == package)
        .ok_or_else(|| PluginError::NotFound(package.to_string()).into())
}

/// Packages to install.
///
/// An explicit list wins. Otherwise, with `install_single`, the only
/// recommended plugin is installed; several recommendations install nothing.
#[must_use]
pub fn plugins_to_install(
    explicit: &[String],
    install_single: bool,
    recommended: &[PluginInfo],
) -> Vec<String> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }
    match recommended {
        [only] if install_single => vec![only.package.clone()],
        _ => Vec::new(),
    }
}

/// Recommended entries of a catalogue.
#[must_use]
pub fn recommended_plugins(plugins: &[PluginInfo]) -> Vec<PluginInfo> {
    plugins.iter().filter(|p| p.recommended).cloned().collect()
}

/// Packages of the configured plugins that were installed from the UI.
#[must_use]
pub fn ui_plugins(configured: &[ConfiguredPlugin]) -> Vec<String> {
    configured
        .iter()
        .filter(|p| p.origin == PluginOrigin::Ui)
        .map(|p| p.package.clone())
        .collect()
}

#[cfg(test)]
mod tests;
