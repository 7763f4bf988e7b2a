// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use site_env::config::Config;
use site_env::config::loader::ConfigLoader;
use site_env::error::Result;
use site_env::logging::LogLevel;
use std::path::PathBuf;

fn parse(content: &str) -> Result<Config> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site-env.toml");
    std::fs::write(&path, content).unwrap();
    ConfigLoader::new().add_toml_file(&path).build()
}

// =============================================================================
// Loading a single file
// =============================================================================

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
log_level = 4
log_file = "logs/site-env.log"
project_file = "deploy/site.toml"

[api]
url = "https://api.example.test/v1"
token = "tok_123"
timeout_secs = 10

[site]
account_id = "team"
site_id = "1234"

[plugins]
url = "https://plugins.example.test/plugins.json"
"#;
    let config = parse(toml).unwrap();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    api.timeout_secs     = 10
    api.token            = [hidden]
    api.url              = https://api.example.test/v1
    global.log_file      = logs/site-env.log
    global.log_level     = 4
    global.project_file  = deploy/site.toml
    plugins.timeout_secs = 60
    plugins.url          = https://plugins.example.test/plugins.json
    site.account_id      = team
    site.site_id         = 1234
    ");
}

#[test]
fn config_default_values() {
    let config = parse("").unwrap();
    assert_eq!(config.global.log_level, LogLevel::INFO);
    assert_eq!(config.global.project_file, PathBuf::from("site.toml"));
    assert!(config.api.token.is_none());
    assert!(config.site.site_info().account_id.is_none());
}

#[test]
fn config_rejects_unknown_section() {
    let err = parse("[paths]\nprefix = \"/build\"\n").unwrap_err();
    assert!(err.to_string().contains("paths"));
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_builder_layered() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("site-env.toml");
    let local = dir.path().join("local.toml");
    std::fs::write(
        &base,
        "[site]\naccount_id = \"base-team\"\nsite_id = \"base-site\"\n\n[api]\ntimeout_secs = 5\n",
    )
    .unwrap();
    std::fs::write(&local, "[site]\nsite_id = \"local-site\"\n").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file_optional(&base)
        .add_toml_file(&local)
        .set("api.timeout_secs", 7_i64)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.site.account_id.as_deref(), Some("base-team"));
    assert_eq!(config.site.site_id.as_deref(), Some("local-site"));
    assert_eq!(config.api.timeout_secs, 7);
}

#[test]
fn config_required_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(dir.path().join("missing.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn config_invalid_values() {
    assert!(parse("[api]\ntimeout_secs = 0\n").is_err());
    assert!(parse("[plugins]\nurl = \"::\"\n").is_err());
    assert!(parse("[global]\nlog_level = 6\n").is_err());
}
