// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote records -> resolved entries.
//!
//! ```text
//! records
//!   | drop: no value for context
//!   | drop: scope not accepted
//!   | stable sort by lowercase key
//!   v
//! EnvMap { key -> { context, scopes, sources: [source], value } }
//! ```

use super::matcher::find_value_for_context;
use super::types::{Context, EnvEntry, EnvMap, EnvVarRecord, ScopeFilter, Source};

/// Filter `records` by context and scope and reshape them into an [`EnvMap`]
/// tagged with `source`, ordered by key case-insensitively.
#[must_use]
pub fn format_env_vars(
    context: Context,
    records: &[EnvVarRecord],
    scope: ScopeFilter,
    source: Source,
) -> EnvMap {
    let mut matching: Vec<(&EnvVarRecord, &str, Context)> = records
        .iter()
        .filter(|record| scope.accepts(&record.scopes))
        .filter_map(|record| {
            find_value_for_context(&record.values, context)
                .map(|entry| (record, entry.value.as_str(), entry.context))
        })
        .collect();

    // sort_by_key is stable: equal keys keep their fetch order
    matching.sort_by_key(|(record, _, _)| record.key.to_lowercase());

    matching
        .into_iter()
        .map(|(record, value, matched)| {
            (
                record.key.clone(),
                EnvEntry {
                    context: Some(matched),
                    scopes: Some(record.scopes.clone()),
                    sources: vec![source],
                    value: value.to_string(),
                },
            )
        })
        .collect()
}
