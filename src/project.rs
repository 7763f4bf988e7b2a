// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local project file (`site.toml`).
//!
//! ```toml
//! [general]
//! NODE_VERSION = "20"
//!
//! [build.environment]
//! API_URL = "https://staging.example.com"
//!
//! [addons.fauna.environment]
//! FAUNA_SECRET = "..."
//!
//! [[plugins]]
//! package = "@site/plugin-sitemap"
//! origin = "ui"
//! ```
//!
//! ```text
//! [general]             -> sources: [general]
//! [addons.*.environment]-> sources: [addons]
//! [build.environment]   -> sources: [configFile]
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::env::{EnvEntry, EnvMap, FlatEnv, Source};
use crate::error::{ConfigError, SiteEnvResult};
use crate::plugins::ConfiguredPlugin;

/// Parsed project file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectFile {
    /// Variables that apply everywhere, lowest precedence.
    pub general: FlatEnv,
    pub build: BuildSection,
    /// Addon name -> addon settings.
    pub addons: BTreeMap<String, AddonSection>,
    pub plugins: Vec<ConfiguredPlugin>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    pub environment: FlatEnv,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddonSection {
    pub environment: FlatEnv,
}

impl ProjectFile {
    /// Parse project file content; `origin` names the file in errors.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for invalid TOML or a table of the
    /// wrong shape.
    pub fn parse(content: &str, origin: &str) -> SiteEnvResult<Self> {
        toml::from_str(content).map_err(|e| {
            ConfigError::ParseError {
                path: origin.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load `path`, or an empty project when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file exists but cannot be
    /// read, or the errors of [`ProjectFile::parse`].
    pub fn load(path: &Path) -> SiteEnvResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no project file");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Legacy flat env with every local variable tagged by source.
    ///
    /// A name defined in several sections keeps one entry: the value of the
    /// highest-precedence section, with the shadowed sources listed after it.
    #[must_use]
    pub fn legacy_env(&self) -> EnvMap {
        let mut env = EnvMap::new();
        add_layer(&mut env, Source::General, &self.general);
        for addon in self.addons.values() {
            add_layer(&mut env, Source::Addons, &addon.environment);
        }
        add_layer(&mut env, Source::ConfigFile, &self.build.environment);
        env
    }
}

fn add_layer(env: &mut EnvMap, source: Source, vars: &FlatEnv) {
    for (key, value) in vars.iter() {
        let mut entry = EnvEntry::legacy(source, value.as_str());
        if let Some(previous) = env.get(key) {
            entry
                .sources
                .extend(previous.sources.iter().filter(|s| **s != source));
        }
        env.insert(key, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectFile;
    use crate::env::Source;
    use crate::plugins::PluginOrigin;

    const PROJECT: &str = r#"
[general]
NODE_VERSION = "20"
SHARED = "general"

[build.environment]
API_URL = "https://staging.example.com"
SHARED = "config"

[addons.fauna.environment]
FAUNA_SECRET = "fauna"

[addons.auth.environment]
SHARED = "addon"

[[plugins]]
package = "@site/plugin-sitemap"
origin = "ui"

[[plugins]]
package = "@site/plugin-lighthouse"
"#;

    #[test]
    fn test_legacy_env_sources() {
        let project = ProjectFile::parse(PROJECT, "site.toml").unwrap();
        let env = project.legacy_env();

        assert_eq!(env.get("NODE_VERSION").unwrap().origin(), Some(Source::General));
        assert_eq!(env.get("FAUNA_SECRET").unwrap().origin(), Some(Source::Addons));
        assert_eq!(env.get("API_URL").unwrap().origin(), Some(Source::ConfigFile));

        let shared = env.get("SHARED").unwrap();
        assert_eq!(shared.value, "config");
        assert_eq!(
            shared.sources,
            vec![Source::ConfigFile, Source::Addons, Source::General]
        );
        assert!(shared.scopes.is_none());
        assert!(shared.context.is_none());
    }

    #[test]
    fn test_plugins_section() {
        let project = ProjectFile::parse(PROJECT, "site.toml").unwrap();
        let plugins: Vec<(&str, PluginOrigin)> = project
            .plugins
            .iter()
            .map(|p| (p.package.as_str(), p.origin))
            .collect();
        assert_eq!(
            plugins,
            vec![
                ("@site/plugin-sitemap", PluginOrigin::Ui),
                ("@site/plugin-lighthouse", PluginOrigin::Config),
            ]
        );
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let missing = ProjectFile::load(&dir.path().join("site.toml")).unwrap();
        assert!(missing.legacy_env().is_empty());
        assert!(missing.plugins.is_empty());

        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[general\n").unwrap();
        let err = ProjectFile::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("config error: failed to parse config file"));

        let wrong = ProjectFile::parse("[[plugins]]\norigin = \"ui\"\n", "inline");
        assert!(wrong.is_err());
    }
}
