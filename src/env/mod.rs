// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable resolution.
//!
//! # Architecture
//!
//! ```text
//!                  resolve_env (EnvRequest)
//!                         |
//!        +----------------+-----------------+
//!        v                v                 v
//!      fetch            format           matcher
//!  EnvelopeClient   context/scope     find_value_for_context
//!   (never fails)   filter + sort     filter_by_source
//!                                     human_readable_scopes
//!
//!  translate: FlatEnv <-> Vec<EnvVarRecord>
//! ```
//!
//! Precedence (low -> high): general, account, addons, ui, configFile.

pub mod client;
pub mod fetch;
pub mod format;
pub mod map;
pub mod matcher;
pub mod resolve;
pub mod translate;
pub mod types;


pub use client::{EnvelopeApi, EnvelopeClient};
pub use fetch::get_env_vars_from_remote;
pub use format::format_env_vars;
pub use matcher::{filter_by_source, find_value_for_context, human_readable_scopes};
pub use resolve::{EnvRequest, merge_by_precedence, resolve_env};
pub use translate::{translate_from_envelope_to_mongo, translate_from_mongo_to_envelope};
pub use types::{
    Context, EnvEntry, EnvMap, EnvVarRecord, FlatEnv, Scope, ScopeFilter, SiteInfo, Source,
    ValueEntry,
};
