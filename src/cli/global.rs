// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --log-level N     ← global.log_level
//! --log-file FILE   ← global.log_file
//! --log-json        ← JSON console logs
//! --auth TOKEN      ← api.token      (or SITE_AUTH_TOKEN)
//! --account ID      ← site.account_id
//! --site ID         ← site.site_id
//! --project FILE    ← global.project_file
//!
//! Precedence: CLI flags > SITE_ENV_* > --config > site-env.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Writes console logs as JSON lines.
    #[arg(long = "log-json")]
    pub log_json: bool,

    /// API access token.
    #[arg(long = "auth", value_name = "TOKEN", env = "SITE_AUTH_TOKEN", hide_env_values = true)]
    pub auth: Option<String>,

    /// Account the variables belong to.
    #[arg(short = 'a', long = "account", value_name = "ID")]
    pub account: Option<String>,

    /// Site the variables belong to.
    #[arg(short = 's', long = "site", value_name = "ID")]
    pub site: Option<String>,

    /// Project file with local variables and plugins.
    #[arg(short = 'p', long = "project", value_name = "FILE")]
    pub project: Option<PathBuf>,
}

impl GlobalOptions {
    /// Applies command-line options as configuration overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override key is rejected by the loader.
    pub fn apply_overrides(&self, loader: ConfigLoader) -> Result<ConfigLoader> {
        let path = |p: &PathBuf| p.display().to_string();

        loader
            .set_if_some("global.log_level", self.log_level.map(i64::from))?
            .set_if_some("global.log_file", self.log_file.as_ref().map(path))?
            .set_if_some("global.project_file", self.project.as_ref().map(path))?
            .set_if_some("api.token", self.auth.clone())?
            .set_if_some("site.account_id", self.account.clone())?
            .set_if_some("site.site_id", self.site.clone())
    }
}
