// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plugins command arguments.

use clap::{Args, Subcommand};

/// Arguments for the `plugins` command.
#[derive(Debug, Clone, Args)]
pub struct PluginsArgs {
    /// Plugins subcommand.
    #[command(subcommand)]
    pub subcommand: PluginsSubcommand,
}

/// Plugins subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum PluginsSubcommand {
    /// Lists the plugin catalogue.
    List(PluginsListArgs),

    /// Shows one catalogue entry.
    Show(PluginsShowArgs),

    /// Lists the plugins an install would add.
    Install(PluginsInstallArgs),
}

#[derive(Debug, Clone, Args)]
pub struct PluginsListArgs {
    /// Lists the project plugins installed from the UI instead.
    #[arg(long)]
    pub ui: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PluginsShowArgs {
    /// Package name, e.g. `@netlify/plugin-lighthouse`.
    #[arg(value_name = "PACKAGE")]
    pub package: String,
}

#[derive(Debug, Clone, Args)]
pub struct PluginsInstallArgs {
    /// Packages to install.
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Installs the recommended plugin when there is exactly one.
    #[arg(long)]
    pub single: bool,
}
