// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Effective variable set for a context/scope pair.
//!
//! ```text
//!   account records ----+            +---- site records
//!   (tokio::join!)      |            |
//!                       v            v
//!               format(account)   format(ui)
//!
//!   legacy env --> filter_by_source: general | addons | configFile
//!
//!   merge_by_precedence (low -> high, whole-entry overwrite)
//!     general  account  [addons]  ui  [configFile]
//!                         ^             ^
//!                         +-- only for scope any | builds | post_processing
//! ```

use bon::Builder;
use tracing::debug;

use super::client::EnvelopeClient;
use super::fetch::get_env_vars_from_remote;
use super::format::format_env_vars;
use super::matcher::filter_by_source;
use super::types::{Context, EnvMap, ScopeFilter, SiteInfo, Source};

/// Parameters for [`resolve_env`].
///
/// ```ignore
/// let request = EnvRequest::builder()
///     .context(Context::Production)
///     .scope(ScopeFilter::Only(Scope::Functions))
///     .env(project.legacy_env())
///     .site(SiteInfo::new(Some("acct".into()), Some("site".into())))
///     .build();
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct EnvRequest {
    /// Deploy context to resolve values for.
    #[builder(default)]
    pub context: Context,
    /// Scope the variables must be exposed to.
    #[builder(default)]
    pub scope: ScopeFilter,
    /// Legacy flat env carrying `general`, `addons` and `configFile` entries.
    #[builder(default)]
    pub env: EnvMap,
    /// Restrict the remote fetch to a single variable.
    #[builder(into)]
    pub key: Option<String>,
    /// Account and site the remote variables belong to.
    #[builder(default)]
    pub site: SiteInfo,
}

/// Merge layers in ascending [`Source`] precedence.
///
/// Layers are stably sorted by source first, so the order of `layers` only
/// matters between layers of the same source. A key present in several
/// layers ends up with the entry of the highest one, whole.
#[must_use]
pub fn merge_by_precedence(mut layers: Vec<(Source, EnvMap)>) -> EnvMap {
    layers.sort_by_key(|(source, _)| *source);
    layers
        .into_iter()
        .fold(EnvMap::new(), |mut merged, (_, layer)| {
            merged.extend_from(layer);
            merged
        })
}

/// Resolve the effective variables for `request`.
///
/// Remote fetch failures never surface: an unreachable or forbidden variable
/// service contributes no variables.
pub async fn resolve_env<C>(client: &C, request: &EnvRequest) -> EnvMap
where
    C: EnvelopeClient + ?Sized,
{
    let account_id = request.site.account_id.as_deref();
    let site_id = request.site.site_id.as_deref();
    let key = request.key.as_deref();

    let (account_records, site_records) = tokio::join!(
        get_env_vars_from_remote(client, account_id, key, None),
        get_env_vars_from_remote(client, account_id, key, site_id),
    );

    let account = format_env_vars(
        request.context,
        &account_records,
        request.scope,
        Source::Account,
    );
    let site = format_env_vars(request.context, &site_records, request.scope, Source::Ui);

    let mut layers = vec![
        (Source::General, filter_by_source(&request.env, Source::General)),
        (Source::Account, account),
        (Source::Ui, site),
    ];
    if request.scope.includes_config_file() {
        layers.push((Source::Addons, filter_by_source(&request.env, Source::Addons)));
        layers.push((
            Source::ConfigFile,
            filter_by_source(&request.env, Source::ConfigFile),
        ));
    }

    let merged = merge_by_precedence(layers);
    debug!(
        context = %request.context,
        scope = %request.scope,
        count = merged.len(),
        "resolved environment"
    );
    merged
}
