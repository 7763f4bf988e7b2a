// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered loading of `site-env.toml` files, `SITE_ENV_*` variables and
//! command-line overrides.
//!
//! ```text
//! site-env.toml (optional) --+
//! --config FILE ...        --+--> SITE_ENV_SECTION__KEY --> overrides --> build() --> Config
//! ```
//!
//! Later layers win. `build()` validates the merged result.

use std::path::{Path, PathBuf};

use config::{ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};

use super::Config;
use crate::error::Result;

/// Settings file that takes part in a load.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SettingsFile {
    path: PathBuf,
    required: bool,
}

/// Collects configuration layers in priority order.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    files: Vec<SettingsFile>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Layer a settings file that must exist.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Layer a settings file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), false)
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required || path.exists() {
            self.files.push(SettingsFile {
                path: path.to_path_buf(),
                required,
            });
        }
        self
    }

    /// Read `{prefix}_{SECTION}__{KEY}` environment variables.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Override one dotted key, e.g. `site.account_id`.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed key.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// [`ConfigLoader::set`] when `value` is present, a no-op otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::set`].
    pub fn set_if_some<T: Into<config::Value>>(self, key: &str, value: Option<T>) -> Result<Self> {
        match value {
            Some(value) => self.set(key, value),
            None => Ok(self),
        }
    }

    /// Merge every layer and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing required file, malformed TOML, an
    /// unknown key, or a value that fails [`Config::validate`].
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Numbered list of the files this load reads, lowest priority first.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, file)| {
                let kind = if file.required { "required" } else { "optional" };
                format!("{}. [{kind}] {}", i + 1, file.path.display())
            })
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
