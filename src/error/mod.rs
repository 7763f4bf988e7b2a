// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          SiteEnvError (16 bytes)
//!                 |
//!     +-------+---+---+--------+
//!     |       |       |        |
//!     v       v       v        v
//!    Net     Cfg    Envel    Plugin
//!    Box     Box     Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Network  Reqwest, HttpError, InvalidUrl, Timeout, Decode
//!   Config   ReadError, ParseError, InvalidValue
//!   Envelope InvalidContext, InvalidScope, InvalidSource
//!   Plugin   NotFound
//!
//! All variants boxed => SiteEnvError is one pointer plus a tag.
//! ```
//!
//! Remote variable fetches never surface here: the fetcher in
//! [`crate::env::fetch`] degrades every failure to an empty result.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SiteEnvError`].
pub type SiteEnvResult<T> = std::result::Result<T, SiteEnvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum SiteEnvError {
    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Invalid context, scope or source tag.
    #[error("envelope error: {0}")]
    Envelope(#[from] Box<EnvelopeError>),

    /// Plugin catalogue error.
    #[error("plugin error: {0}")]
    Plugin(#[from] Box<PluginError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SiteEnvError {
                fn from(err: $error) -> Self {
                    SiteEnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ConfigError => Config,
    EnvelopeError => Envelope,
    PluginError => Plugin,
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Request did not complete within the configured timeout.
    #[error("request timeout: {url}")]
    Timeout { url: String },

    /// Response body did not match the expected shape.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Envelope Errors ---

/// Tag validation errors for the variable model.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Unknown deploy context.
    #[error(
        "invalid context '{0}': expected dev, branch-deploy, deploy-preview, production or all"
    )]
    InvalidContext(String),

    /// Unknown scope.
    #[error("invalid scope '{0}': expected any, builds, functions, runtime or post_processing")]
    InvalidScope(String),

    /// Unknown variable source.
    #[error("invalid source '{0}': expected general, account, addons, ui or configFile")]
    InvalidSource(String),
}

// --- Plugin Errors ---

/// Build plugin catalogue errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// No plugin with this package name in the catalogue.
    #[error("plugin '{0}' not found")]
    NotFound(String),
}
