// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Context matching, source partitioning and scope labels.

use super::types::{Context, EnvMap, Scope, Source, ValueEntry};

/// First value whose context is `context` or `all`.
///
/// Only list order decides between a concrete entry and the `all` wildcard.
#[must_use]
pub fn find_value_for_context(values: &[ValueEntry], context: Context) -> Option<&ValueEntry> {
    values
        .iter()
        .find(|entry| entry.context == context || entry.context == Context::All)
}

/// Entries whose first listed source is `source`.
#[must_use]
pub fn filter_by_source(env: &EnvMap, source: Source) -> EnvMap {
    env.iter()
        .filter(|(_, entry)| entry.origin() == Some(source))
        .map(|(key, entry)| (key, entry.clone()))
        .collect()
}

/// Label used when a variable carries no explicit scopes.
pub const LEGACY_SCOPES_LABEL: &str = "Builds, Post processing";

/// Human-readable, comma-joined label for a scope list.
///
/// Legacy variables (no scopes) reach builds and post processing only. A list
/// as long as the set of recognized scopes is reported as `All`.
#[must_use]
pub fn human_readable_scopes(scopes: Option<&[Scope]>) -> String {
    let Some(scopes) = scopes else {
        return LEGACY_SCOPES_LABEL.to_string();
    };
    if scopes.len() == Scope::ALL.len() {
        return "All".to_string();
    }
    scopes
        .iter()
        .map(Scope::label)
        .collect::<Vec<_>>()
        .join(", ")
}
