// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plugins command implementation for site-env.

use comfy_table::Table;
use tracing::info;

use crate::cli::plugins::{PluginsArgs, PluginsSubcommand};
use crate::config::Config;
use crate::error::{Result, SiteEnvResult};
use crate::plugins::{
    HttpPluginsSource, PluginInfo, bundled_plugins, get_plugin_info, get_plugins_list,
    plugins_to_install, recommended_plugins, ui_plugins,
};
use crate::project::ProjectFile;

use super::new_table;

/// Main handler for plugins command.
///
/// # Errors
///
/// Returns an error if the project file is invalid or a package is not in
/// the catalogue.
pub async fn run_plugins_command(args: &PluginsArgs, config: &Config) -> Result<()> {
    if let PluginsSubcommand::List(list) = &args.subcommand
        && list.ui
    {
        let project = ProjectFile::load(&config.global.project_file)?;
        let packages = ui_plugins(&project.plugins);
        if packages.is_empty() {
            println!("No plugins installed from the UI");
        }
        for package in packages {
            println!("{package}");
        }
        return Ok(());
    }

    let source = HttpPluginsSource::from_config(&config.plugins);
    let catalogue = get_plugins_list(&source, &bundled_plugins()).await;

    match &args.subcommand {
        PluginsSubcommand::List(_) => {
            println!("{}", format_plugin_table(&catalogue));
        }
        PluginsSubcommand::Show(show) => {
            let plugin = get_plugin_info(&catalogue, &show.package)?;
            for line in format_plugin_details(plugin) {
                println!("{line}");
            }
        }
        PluginsSubcommand::Install(install) => {
            let recommended = recommended_plugins(&catalogue);
            let packages = plugins_to_install(&install.packages, install.single, &recommended);
            let plan = install_plan(&catalogue, &packages)?;
            if plan.is_empty() {
                println!("No plugins to install");
            }
            for line in plan {
                println!("{line}");
            }
            info!(count = packages.len(), "plugin install plan");
        }
    }
    Ok(())
}

/// Table of package, version and name.
#[must_use]
pub fn format_plugin_table(plugins: &[PluginInfo]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["PACKAGE", "VERSION", "NAME"]);

    for p in plugins {
        table.add_row(vec![&p.package, &p.version, &p.name]);
    }
    table
}

/// Every field of one plugin, one per line.
#[must_use]
pub fn format_plugin_details(plugin: &PluginInfo) -> Vec<String> {
    vec![
        format!("package:     {}", plugin.package),
        format!("name:        {}", plugin.name),
        format!("version:     {}", plugin.version),
        format!("author:      {}", plugin.author),
        format!("repo:        {}", plugin.repo),
        format!("recommended: {}", plugin.recommended),
        format!("description: {}", plugin.description),
    ]
}

/// `package@version` for each package, failing on the first unknown one.
///
/// # Errors
///
/// Returns `PluginError::NotFound` for a package missing from `catalogue`.
pub fn install_plan(catalogue: &[PluginInfo], packages: &[String]) -> SiteEnvResult<Vec<String>> {
    packages
        .iter()
        .map(|package| {
            get_plugin_info(catalogue, package).map(|p| format!("{}@{}", p.package, p.version))
        })
        .collect()
}
