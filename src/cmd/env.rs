// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command implementation for site-env.

use anyhow::{Context as _, bail};
use comfy_table::Table;
use std::path::Path;
use tracing::{info, warn};

use crate::cli::env::{EnvArgs, EnvSubcommand, ResolveArgs};
use crate::config::Config;
use crate::env::{
    EnvMap, EnvRequest, EnvelopeApi, EnvelopeClient, FlatEnv, SiteInfo, get_env_vars_from_remote,
    human_readable_scopes, resolve_env, translate_from_envelope_to_mongo,
    translate_from_mongo_to_envelope,
};
use crate::error::Result;
use crate::project::ProjectFile;

use super::new_table;

/// Main handler for env command.
///
/// # Errors
///
/// Returns an error if the API URL or project file is invalid, a requested
/// variable is not set, or an input file cannot be read.
pub async fn run_env_command(args: &EnvArgs, config: &Config) -> Result<()> {
    let client = EnvelopeApi::from_config(&config.api)?;

    match &args.subcommand {
        EnvSubcommand::List(list) => {
            let project = ProjectFile::load(&config.global.project_file)?;
            let request = env_request(&list.resolve, &project, remote_site(config), None);
            let env = resolve_env(&client, &request).await;
            info!(count = env.len(), context = %request.context, "resolved variables");

            if list.json {
                println!("{}", serde_json::to_string_pretty(&env)?);
            } else if env.is_empty() {
                println!("No environment variables set");
            } else {
                println!("{}", format_env_table(&env));
            }
        }
        EnvSubcommand::Get(get) => {
            let project = ProjectFile::load(&config.global.project_file)?;
            let request = env_request(
                &get.resolve,
                &project,
                remote_site(config),
                Some(get.key.clone()),
            );
            let env = resolve_env(&client, &request).await;
            let Some(entry) = env.get(&get.key) else {
                bail!(
                    "variable '{}' is not set for context '{}' and scope '{}'",
                    get.key,
                    request.context,
                    request.scope
                );
            };
            println!("{}", entry.value);
        }
        EnvSubcommand::Export => {
            println!("{}", export_site_env(&client, &remote_site(config)).await?);
        }
        EnvSubcommand::Convert(convert) => {
            println!("{}", convert_file(&convert.file)?);
        }
    }
    Ok(())
}

fn remote_site(config: &Config) -> SiteInfo {
    let site = config.site.site_info();
    if site.account_id.is_none() {
        warn!("no account configured, remote variables are skipped");
    }
    site
}

/// Resolver input for a `list` or `get` invocation.
#[must_use]
pub fn env_request(
    resolve: &ResolveArgs,
    project: &ProjectFile,
    site: SiteInfo,
    key: Option<String>,
) -> EnvRequest {
    EnvRequest::builder()
        .context(resolve.context)
        .scope(resolve.scope)
        .env(project.legacy_env())
        .site(site)
        .maybe_key(key)
        .build()
}

/// Table of key, value, scopes and origin.
#[must_use]
pub fn format_env_table(env: &EnvMap) -> Table {
    let mut table = new_table();
    table.set_header(vec!["KEY", "VALUE", "SCOPE", "SOURCE"]);

    for (key, entry) in env.iter() {
        let scopes = human_readable_scopes(entry.scopes.as_deref());
        let source = entry.origin().map_or("", |s| s.as_str());
        table.add_row(vec![key, entry.value.as_str(), scopes.as_str(), source]);
    }
    table
}

/// Site-level variables in the legacy flat shape, as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub async fn export_site_env<C>(client: &C, site: &SiteInfo) -> Result<String>
where
    C: EnvelopeClient + ?Sized,
{
    let records = get_env_vars_from_remote(
        client,
        site.account_id.as_deref(),
        None,
        site.site_id.as_deref(),
    )
    .await;
    let flat = translate_from_envelope_to_mongo(&records);
    Ok(serde_json::to_string_pretty(&flat)?)
}

/// Convert legacy flat JSON (`{"NAME": "value"}`) to records JSON.
///
/// # Errors
///
/// Returns an error if the content is not a JSON object of strings.
pub fn convert_flat_json(content: &str) -> Result<String> {
    let flat: FlatEnv =
        serde_json::from_str(content).context("expected a JSON object of name to string value")?;
    let records = translate_from_mongo_to_envelope(flat);
    Ok(serde_json::to_string_pretty(&records)?)
}

fn convert_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    convert_flat_json(&content).with_context(|| format!("failed to convert {}", path.display()))
}
