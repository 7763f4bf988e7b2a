// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote variable fetch.
//!
//! ```text
//! account_id?  --none/empty--> []            (no request)
//!      |
//!   key? --yes--> get_env_var  -> [record]
//!      |  no
//!      +--------> get_env_vars -> records
//!      |
//!   Err(_) -------------------> []            (logged at debug)
//! ```
//!
//! A collaborator without permission to read shared variables gets an error
//! from the service; that case is reported exactly like "no variables". A
//! transient network error is reported the same way.

use tracing::debug;

use super::client::EnvelopeClient;
use super::types::EnvVarRecord;

/// Fetch raw variable records for an account, optionally narrowed to one
/// key and/or one site.
///
/// Never fails: a missing account short-circuits to an empty list without a
/// request, and any client error degrades to an empty list.
pub async fn get_env_vars_from_remote<C>(
    client: &C,
    account_id: Option<&str>,
    key: Option<&str>,
    site_id: Option<&str>,
) -> Vec<EnvVarRecord>
where
    C: EnvelopeClient + ?Sized,
{
    let Some(account_id) = account_id.filter(|id| !id.is_empty()) else {
        return Vec::new();
    };

    let result = match key.filter(|k| !k.is_empty()) {
        Some(key) => client
            .get_env_var(account_id, key, site_id)
            .await
            .map(|record| vec![record]),
        None => client.get_env_vars(account_id, site_id).await,
    };

    match result {
        Ok(records) => {
            debug!(
                account_id,
                site_id,
                count = records.len(),
                "fetched remote variables"
            );
            records
        }
        Err(e) => {
            debug!(account_id, site_id, error = %e, "remote variables unavailable, treating as empty");
            Vec::new()
        }
    }
}
