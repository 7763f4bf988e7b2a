// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use async_trait::async_trait;

use super::{
    ConfiguredPlugin, PluginInfo, PluginOrigin, PluginsSource, bundled_plugins, get_plugin_info,
    get_plugins_list, plugins_to_install, recommended_plugins, ui_plugins,
};
use crate::error::{NetworkError, SiteEnvResult};

fn plugin(package: &str, recommended: bool) -> PluginInfo {
    PluginInfo {
        package: package.to_string(),
        name: package.to_string(),
        description: String::new(),
        repo: String::new(),
        version: "1.0.0".to_string(),
        author: String::new(),
        recommended,
    }
}

struct FixedSource(Vec<PluginInfo>);

#[async_trait]
impl PluginsSource for FixedSource {
    async fn fetch_plugins(&self) -> SiteEnvResult<Vec<PluginInfo>> {
        Ok(self.0.clone())
    }
}

struct FailingSource;

#[async_trait]
impl PluginsSource for FailingSource {
    async fn fetch_plugins(&self) -> SiteEnvResult<Vec<PluginInfo>> {
        Err(NetworkError::Timeout {
            url: "https://plugins.example.test/plugins.json".to_string(),
        }
        .into())
    }
}

#[test]
fn test_bundled_plugins_parse() {
    let bundled = bundled_plugins();
    assert!(!bundled.is_empty());
    assert!(bundled.iter().all(|p| !p.package.is_empty()));
}

#[tokio::test]
async fn test_get_plugins_list_prefers_source() {
    let fallback = vec![plugin("fallback", false)];
    let list = get_plugins_list(&FixedSource(vec![plugin("remote", false)]), &fallback).await;
    assert_eq!(list, vec![plugin("remote", false)]);
}

#[tokio::test]
async fn test_get_plugins_list_falls_back() {
    let fallback = vec![plugin("fallback", false)];
    let list = get_plugins_list(&FailingSource, &fallback).await;
    assert_eq!(list, fallback);
}

#[test]
fn test_get_plugin_info() {
    let list = vec![plugin("a", false), plugin("b", false)];
    assert_eq!(get_plugin_info(&list, "b").unwrap().package, "b");

    let err = get_plugin_info(&list, "missing").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"plugin error: plugin 'missing' not found");
}

#[test]
fn test_plugins_to_install() {
    let one = vec![plugin("only", true)];
    let two = vec![plugin("first", true), plugin("second", true)];
    let explicit = vec!["chosen".to_string()];

    assert_eq!(plugins_to_install(&explicit, true, &one), explicit);
    assert_eq!(plugins_to_install(&[], true, &one), vec!["only".to_string()]);
    assert!(plugins_to_install(&[], false, &one).is_empty());
    assert!(plugins_to_install(&[], true, &two).is_empty());
    assert!(plugins_to_install(&[], true, &[]).is_empty());
}

#[test]
fn test_recommended_and_ui_plugins() {
    let list = vec![plugin("a", false), plugin("b", true)];
    assert_eq!(recommended_plugins(&list), vec![plugin("b", true)]);

    let configured = vec![
        ConfiguredPlugin {
            package: "from-ui".to_string(),
            origin: PluginOrigin::Ui,
        },
        ConfiguredPlugin {
            package: "from-config".to_string(),
            origin: PluginOrigin::Config,
        },
        ConfiguredPlugin {
            package: "from-platform".to_string(),
            origin: PluginOrigin::Default,
        },
    ];
    assert_eq!(ui_plugins(&configured), vec!["from-ui".to_string()]);
}

#[test]
fn test_plugin_info_defaults() {
    let info: PluginInfo = serde_json::from_str(r#"{"package":"bare"}"#).unwrap();
    assert_eq!(info.package, "bare");
    assert!(info.version.is_empty());
    assert!(!info.recommended);
}
