// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Configs | Env | Plugins
//! ```

use std::process::ExitCode;

use site_env::cli::global::GlobalOptions;
use site_env::cli::{self, Command};
use site_env::cmd::config::{run_configs_command, run_options_command};
use site_env::cmd::env::run_env_command;
use site_env::cmd::plugins::run_plugins_command;
use site_env::config::Config;
use site_env::config::loader::ConfigLoader;
use site_env::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_CONFIG_FILE: &str = "site-env.toml";
const ENV_PREFIX: &str = "SITE_ENV";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return ExitCode::FAILURE;
    };

    if matches!(command, Command::Version) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match start_logging(&config, &cli.global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(command, &cli.global, &config).await
}

fn start_logging(config: &Config, global: &GlobalOptions) -> site_env::error::Result<LogGuard> {
    let log_config = LogConfig::builder()
        .with_console_level(config.global.log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .with_json(global.log_json)
        .build();
    init_logging(&log_config)
}

async fn dispatch_command(command: &Command, global: &GlobalOptions, config: &Config) -> ExitCode {
    let result = match command {
        Command::Version => {
            handle_version_command();
            Ok(())
        }
        Command::Options => {
            run_options_command(config);
            Ok(())
        }
        Command::Configs => {
            let loader = build_config_loader(global);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Command::Env(args) => run_env_command(args, config).await,
        Command::Plugins(args) => run_plugins_command(args, config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> site_env::error::Result<Config> {
    global
        .apply_overrides(build_config_loader(global))?
        .build()
}
