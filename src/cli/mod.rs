// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for site-env using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! site-env [global options] <command>
//! version
//! options
//! configs
//! env {list|get|export|convert}
//! plugins {list|show|install}
//! ```

pub mod env;
pub mod global;
pub mod plugins;


use crate::cli::env::EnvArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::plugins::PluginsArgs;
use clap::{Parser, Subcommand};

/// Deploy site environment variable resolver
///
/// Lists the variables a deploy would see, merged from the project file,
/// the account, addons and the site settings.
#[derive(Debug, Parser)]
#[command(
    name = "site-env",
    author,
    version,
    about = "Deploy site environment variable resolver",
    long_about = "site-env Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves the environment variables of a deploy site for a\n\
                  deploy context and scope. Variables come, from lowest to\n\
                  highest precedence, from [general] in the project file, the\n\
                  account, addons, the site settings and [build.environment].",
    after_help = "CONFIG FILES:\n\n\
                  site-env reads `site-env.toml` in the current directory if it\n\
                  exists, then every file given with --config, in order. Any key\n\
                  can also be set with SITE_ENV_<SECTION>__<KEY>, for example\n\
                  SITE_ENV_SITE__ACCOUNT_ID. Command-line flags override all of\n\
                  these."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the config files used by site-env.
    Configs,

    /// Resolves and converts environment variables.
    Env(EnvArgs),

    /// Queries the build plugin catalogue.
    Plugins(PluginsArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
