// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for variable resolution against a mocked REST API.

use serde_json::json;
use site_env::env::{
    Context, EnvRequest, EnvelopeApi, EnvelopeClient, Scope, ScopeFilter, SiteInfo, Source,
    get_env_vars_from_remote, resolve_env,
};
use site_env::error::{NetworkError, SiteEnvError};
use site_env::project::ProjectFile;
use wiremock::matchers::{bearer_token, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT: &str = r#"
[general]
SHARED = "general"
GEN = "g"

[build.environment]
SHARED = "config"
CONFIG_ONLY = "c"
"#;

fn api(server: &MockServer) -> EnvelopeApi {
    EnvelopeApi::new(&format!("{}/api/v1", server.uri()))
        .unwrap()
        .with_token("tok_123")
}

fn site() -> SiteInfo {
    SiteInfo::new(Some("team".to_string()), Some("abc".to_string()))
}

async fn mount_account_and_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/team/env"))
        .and(query_param_is_missing("site_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "key": "SHARED",
                "scopes": ["builds", "functions", "runtime", "post_processing"],
                "values": [{ "context": "all", "value": "account" }]
            },
            {
                "key": "ACCOUNT_ONLY",
                "scopes": ["functions"],
                "values": [{ "context": "production", "value": "p" }]
            }
        ])))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/team/env"))
        .and(query_param("site_id", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "key": "SHARED",
                "scopes": ["builds", "functions", "runtime", "post_processing"],
                "values": [
                    { "context": "dev", "value": "ui-dev" },
                    { "context": "production", "value": "ui-prod" }
                ]
            }
        ])))
        .expect(1)
        .mount(server)
        .await;
}

fn sorted_keys(env: &site_env::env::EnvMap) -> Vec<&str> {
    let mut keys: Vec<&str> = env.keys().collect();
    keys.sort_unstable();
    keys
}

// =============================================================================
// EnvelopeApi
// =============================================================================

#[tokio::test]
async fn test_api_lists_account_vars_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/team/env"))
        .and(bearer_token("tok_123"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "key": "A", "scopes": ["builds"], "values": [{ "context": "all", "value": "1" }] }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = api(&server).get_env_vars("team", None).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "A");
    assert_eq!(records[0].scopes, vec![Scope::Builds]);
}

#[tokio::test]
async fn test_api_fetches_single_key_for_site() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/team/env/API_KEY"))
        .and(query_param("site_id", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            { "key": "API_KEY", "scopes": ["runtime"], "values": [{ "context": "dev", "value": "k" }] }
        )))
        .expect(1)
        .mount(&server)
        .await;

    let record = api(&server)
        .get_env_var("team", "API_KEY", Some("abc"))
        .await
        .unwrap();
    assert_eq!(record.key, "API_KEY");
    assert_eq!(record.scopes, vec![Scope::Runtime]);
    assert_eq!(record.values[0].context, Context::Dev);
}

#[tokio::test]
async fn test_api_unauthorized_is_an_error_but_fetch_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/team/env"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = api(&server);
    match client.get_env_vars("team", Some("abc")).await {
        Err(SiteEnvError::Network(boxed)) => {
            assert!(matches!(*boxed, NetworkError::HttpError { status: 401, .. }));
        }
        other => panic!("expected 401 HttpError, got {other:?}"),
    }

    // Collaborators without access see the same thing as "no shared variables".
    let records = get_env_vars_from_remote(&client, Some("team"), None, Some("abc")).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_api_rejects_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/team/env"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
        .mount(&server)
        .await;

    match api(&server).get_env_vars("team", None).await {
        Err(SiteEnvError::Network(boxed)) => {
            assert!(matches!(*boxed, NetworkError::Decode { .. }));
        }
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_record_without_scopes_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/team/env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "key": "NO_SCOPES", "values": [{ "context": "all", "value": "x" }] }
        ])))
        .mount(&server)
        .await;

    let client = api(&server);
    match client.get_env_vars("team", None).await {
        Err(SiteEnvError::Network(boxed)) => match *boxed {
            NetworkError::Decode { message, .. } => {
                assert!(message.contains("missing field `scopes`"));
            }
            other => panic!("expected Decode error, got {other:?}"),
        },
        other => panic!("expected Decode error, got {other:?}"),
    }

    let request = EnvRequest::builder().site(site()).build();
    assert!(resolve_env(&client, &request).await.is_empty());
}

#[test]
fn test_api_rejects_invalid_base_url() {
    assert!(EnvelopeApi::new("not a url").is_err());
    assert!(EnvelopeApi::new("mailto:someone@example.com").is_err());
}

// =============================================================================
// resolve_env
// =============================================================================

#[tokio::test]
async fn test_resolve_dev_any_scope() {
    let server = MockServer::start().await;
    mount_account_and_site(&server).await;
    let project = ProjectFile::parse(PROJECT, "site.toml").unwrap();

    let request = EnvRequest::builder()
        .env(project.legacy_env())
        .site(site())
        .build();
    let env = resolve_env(&api(&server), &request).await;

    assert_eq!(sorted_keys(&env), vec!["CONFIG_ONLY", "GEN", "SHARED"]);
    let shared = env.get("SHARED").unwrap();
    assert_eq!(shared.value, "config");
    assert_eq!(shared.origin(), Some(Source::ConfigFile));
    assert_eq!(env.get("GEN").unwrap().origin(), Some(Source::General));
}

#[tokio::test]
async fn test_resolve_production_functions_scope() {
    let server = MockServer::start().await;
    mount_account_and_site(&server).await;
    let project = ProjectFile::parse(PROJECT, "site.toml").unwrap();

    let request = EnvRequest::builder()
        .context(Context::Production)
        .scope(ScopeFilter::Only(Scope::Functions))
        .env(project.legacy_env())
        .site(site())
        .build();
    let env = resolve_env(&api(&server), &request).await;

    assert_eq!(sorted_keys(&env), vec!["ACCOUNT_ONLY", "GEN", "SHARED"]);
    let shared = env.get("SHARED").unwrap();
    assert_eq!(shared.value, "ui-prod");
    assert_eq!(shared.sources, vec![Source::Ui]);
    assert_eq!(shared.context, Some(Context::Production));

    let account_only = env.get("ACCOUNT_ONLY").unwrap();
    assert_eq!(account_only.value, "p");
    assert_eq!(account_only.origin(), Some(Source::Account));
}

#[tokio::test]
async fn test_resolve_without_account_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let project = ProjectFile::parse(PROJECT, "site.toml").unwrap();

    let request = EnvRequest::builder()
        .env(project.legacy_env())
        .site(SiteInfo::new(None, Some("abc".to_string())))
        .build();
    let env = resolve_env(&api(&server), &request).await;

    assert_eq!(sorted_keys(&env), vec!["CONFIG_ONLY", "GEN", "SHARED"]);
}
