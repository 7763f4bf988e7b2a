// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for the variable model.
//!
//! ```text
//! Context:     dev | branch-deploy | deploy-preview | production | all
//! Scope:       builds | functions | runtime | post_processing
//! ScopeFilter: any | Only(Scope)
//! Source:      general < account < addons < ui < configFile   (Ord = precedence)
//!
//! EnvVarRecord { key, scopes, values: [ValueEntry { context, value }] }   remote
//! EnvEntry     { context?, scopes?, sources, value }                      resolved
//! ```

use serde::{Deserialize, Serialize};

use super::map::OrderedMap;
use crate::error::EnvelopeError;

/// Deploy context a variable value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Context {
    /// Local development.
    #[default]
    Dev,
    /// Branch deploys.
    BranchDeploy,
    /// Deploy previews.
    DeployPreview,
    /// Production deploys.
    Production,
    /// Wildcard: applies to every context.
    All,
}

impl Context {
    /// Wire tag for this context.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::BranchDeploy => "branch-deploy",
            Self::DeployPreview => "deploy-preview",
            Self::Production => "production",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Context {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "branch-deploy" => Ok(Self::BranchDeploy),
            "deploy-preview" => Ok(Self::DeployPreview),
            "production" => Ok(Self::Production),
            "all" => Ok(Self::All),
            _ => Err(EnvelopeError::InvalidContext(s.to_string())),
        }
    }
}

/// Pipeline stage a variable is exposed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Builds,
    Functions,
    Runtime,
    PostProcessing,
}

impl Scope {
    /// Every recognized scope, in canonical order.
    pub const ALL: [Self; 4] = [
        Self::Builds,
        Self::Functions,
        Self::Runtime,
        Self::PostProcessing,
    ];

    /// Wire tag for this scope.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Builds => "builds",
            Self::Functions => "functions",
            Self::Runtime => "runtime",
            Self::PostProcessing => "post_processing",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Builds => "Builds",
            Self::Functions => "Functions",
            Self::Runtime => "Runtime",
            Self::PostProcessing => "Post processing",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested scope: either every scope or a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeFilter {
    #[default]
    Any,
    Only(Scope),
}

impl ScopeFilter {
    /// Whether a record carrying `scopes` passes this filter.
    #[must_use]
    pub fn accepts(&self, scopes: &[Scope]) -> bool {
        match self {
            Self::Any => true,
            Self::Only(scope) => scopes.contains(scope),
        }
    }

    /// Whether addon and config-file variables are visible under this filter.
    ///
    /// Those sources only ever reach builds and post processing.
    #[must_use]
    pub const fn includes_config_file(&self) -> bool {
        matches!(
            self,
            Self::Any | Self::Only(Scope::Builds | Scope::PostProcessing)
        )
    }
}

impl std::fmt::Display for ScopeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Only(scope) => scope.fmt(f),
        }
    }
}

impl std::str::FromStr for ScopeFilter {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Any),
            "builds" => Ok(Self::Only(Scope::Builds)),
            "functions" => Ok(Self::Only(Scope::Functions)),
            "runtime" => Ok(Self::Only(Scope::Runtime)),
            "post_processing" => Ok(Self::Only(Scope::PostProcessing)),
            _ => Err(EnvelopeError::InvalidScope(s.to_string())),
        }
    }
}

/// Origin of a variable.
///
/// Variant order is merge precedence, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Source {
    General,
    Account,
    Addons,
    Ui,
    ConfigFile,
}

impl Source {
    /// Wire tag for this source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Account => "account",
            Self::Addons => "addons",
            Self::Ui => "ui",
            Self::ConfigFile => "configFile",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Source {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "general" => Ok(Self::General),
            "account" => Ok(Self::Account),
            "addons" => Ok(Self::Addons),
            "ui" => Ok(Self::Ui),
            "configFile" => Ok(Self::ConfigFile),
            _ => Err(EnvelopeError::InvalidSource(s.to_string())),
        }
    }
}

/// One per-context value of a remote variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueEntry {
    pub context: Context,
    pub value: String,
}

impl ValueEntry {
    #[must_use]
    pub fn new(context: Context, value: impl Into<String>) -> Self {
        Self {
            context,
            value: value.into(),
        }
    }
}

/// Variable record as returned by the variable service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVarRecord {
    pub key: String,
    /// Required: only local variables may leave scopes implicit.
    pub scopes: Vec<Scope>,
    pub values: Vec<ValueEntry>,
}

/// Resolved variable, keyed by name in an [`EnvMap`].
///
/// `context` is absent for variables that never went through context
/// matching (project file, addons). `scopes` is absent for legacy variables,
/// which implicitly reach builds and post processing only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<Scope>>,
    pub sources: Vec<Source>,
    pub value: String,
}

impl EnvEntry {
    /// Entry for a legacy variable from a single source.
    #[must_use]
    pub fn legacy(source: Source, value: impl Into<String>) -> Self {
        Self {
            context: None,
            scopes: None,
            sources: vec![source],
            value: value.into(),
        }
    }

    /// First listed source, the one that decides partitioning.
    #[must_use]
    pub fn origin(&self) -> Option<Source> {
        self.sources.first().copied()
    }
}

/// Name -> resolved variable, in insertion order.
pub type EnvMap = OrderedMap<EnvEntry>;

/// Legacy flat name -> value shape.
pub type FlatEnv = OrderedMap<String>;

/// Account and site the variables belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteInfo {
    pub account_id: Option<String>,
    pub site_id: Option<String>,
}

impl SiteInfo {
    #[must_use]
    pub const fn new(account_id: Option<String>, site_id: Option<String>) -> Self {
        Self {
            account_id,
            site_id,
        }
    }
}
