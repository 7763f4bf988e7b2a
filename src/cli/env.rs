// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command arguments.
//!
//! # Subcommands
//!
//! ```text
//! env list    [-c CONTEXT] [--scope SCOPE] [--json]
//!   → resolved variables
//! env get KEY [-c CONTEXT] [--scope SCOPE]
//!   → one resolved value
//! env export
//!   → site variables as flat JSON
//! env convert FILE
//!   → flat JSON to variable records
//! ```

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::env::{Context, ScopeFilter};

/// Arguments for the `env` command.
#[derive(Debug, Clone, Args)]
pub struct EnvArgs {
    /// Env subcommand.
    #[command(subcommand)]
    pub subcommand: EnvSubcommand,
}

/// Env subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum EnvSubcommand {
    /// Lists resolved variables.
    List(EnvListArgs),

    /// Prints the resolved value of one variable.
    Get(EnvGetArgs),

    /// Prints the site variables in the legacy flat JSON shape.
    Export,

    /// Converts a legacy flat JSON file to variable records.
    Convert(EnvConvertArgs),
}

/// Context and scope selection shared by `list` and `get`.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Deploy context (dev, branch-deploy, deploy-preview, production, all).
    #[arg(short = 'c', long = "context", value_name = "CONTEXT", default_value_t = Context::Dev)]
    pub context: Context,

    /// Scope (any, builds, functions, runtime, post_processing).
    #[arg(long = "scope", value_name = "SCOPE", default_value_t = ScopeFilter::Any)]
    pub scope: ScopeFilter,
}

/// Arguments for env list subcommand.
#[derive(Debug, Clone, Args)]
pub struct EnvListArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Prints JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for env get subcommand.
#[derive(Debug, Clone, Args)]
pub struct EnvGetArgs {
    /// Variable name.
    #[arg(value_name = "KEY")]
    pub key: String,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}

/// Arguments for env convert subcommand.
#[derive(Debug, Clone, Args)]
pub struct EnvConvertArgs {
    /// JSON object of name to value.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
