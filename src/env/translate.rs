// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion between the legacy flat shape and variable records.
//!
//! ```text
//! { KEY: value }  --to_records-->  { key, scopes: all four, values: [all = value] }
//! records         --to_flat---->   { KEY: dev-or-all value }   (sorted, empty dropped)
//! ```
//!
//! `to_flat` keeps one value per key: records with per-context values lose
//! everything but the `dev`/`all` value.

use super::types::{Context, EnvVarRecord, FlatEnv, Scope, ValueEntry};

/// Legacy flat variables -> records visible in every scope and context.
#[must_use]
pub fn translate_from_mongo_to_envelope<I, K, V>(flat: I) -> Vec<EnvVarRecord>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    flat.into_iter()
        .map(|(key, value)| EnvVarRecord {
            key: key.into(),
            scopes: Scope::ALL.to_vec(),
            values: vec![ValueEntry::new(Context::All, value)],
        })
        .collect()
}

/// Records -> legacy flat variables, sorted by key case-insensitively.
///
/// Takes the first `dev` or `all` value of each record. Records without one,
/// or whose value is empty, are left out of the result.
#[must_use]
pub fn translate_from_envelope_to_mongo(records: &[EnvVarRecord]) -> FlatEnv {
    let mut sorted: Vec<&EnvVarRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.key.to_lowercase());

    sorted
        .into_iter()
        .filter_map(|record| {
            record
                .values
                .iter()
                .find(|entry| matches!(entry.context, Context::Dev | Context::All))
                .filter(|entry| !entry.value.is_empty())
                .map(|entry| (record.key.as_str(), entry.value.clone()))
        })
        .collect()
}
