// site-env: Deploy Site Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    let err = LogLevel::new(6).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-5, got 6"
    );
    assert_eq!(LogLevel::try_from(4).unwrap(), LogLevel::DEBUG);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<&str> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        "off",
        "error",
        "warn",
        "info",
        "debug",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("2").unwrap();
    assert_eq!(level, LogLevel::WARN);
    assert_eq!(serde_json::to_string(&LogLevel::TRACE).unwrap(), "5");
    assert!(serde_json::from_str::<LogLevel>("7").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert!(config.log_file().is_none());
    assert!(!config.json());
    assert!(!config.show_target());

    let custom = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_log_file("logs/site-env.log".into())
        .with_json(true)
        .build();
    assert_eq!(custom.console_level(), LogLevel::WARN);
    assert!(custom.json());
    assert_eq!(
        custom.log_file(),
        Some(std::path::Path::new("logs/site-env.log"))
    );
}
