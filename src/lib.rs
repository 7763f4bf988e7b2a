// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |              env / plugins
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |   config        project   |
//!              |  site-env.toml  site.toml |
//!              '--+-------------------+----'
//!                 |                   |
//!                 v                   v
//!                env               plugins
//!        fetch/format/merge     catalogue list
//!                 |                   |
//!                 +---------+---------+
//!                           v
//!                      net (HTTP)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod net;
pub mod plugins;
pub mod project;
