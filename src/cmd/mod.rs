// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config, env, plugins
//! ```
//!
//! Results go to stdout; diagnostics go through `tracing` to stderr.

use comfy_table::{ContentArrangement, Table, presets};

pub mod config;
pub mod env;
pub mod plugins;


/// Borderless table, columns separated by padding only.
fn new_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(presets::NOTHING);
    table
}
