// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogContext, LogLevel};

#[test]
fn test_log_context_prefix() {
    let op_only = LogContext::with_operation("fetch");
    let mut with_remote = LogContext::with_operation("push");
    with_remote.set_remote("origin");
    let empty = LogContext::default();

    insta::assert_debug_snapshot!(
        vec![op_only.prefix(), with_remote.prefix(), empty.prefix()],
        @r#"
    [
        "[fetch] ",
        "[push/origin] ",
        "",
    ]
    "#
    );
}

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert!(LogLevel::try_from(9).is_err());
}

#[test]
fn test_log_level_filters_cap_gix_below_dump() {
    assert_eq!(LogLevel::INFO.to_filter_string(), "info,gix=warn");
    assert_eq!(LogLevel::DUMP.to_filter_string(), "trace");
    assert_eq!(LogLevel::SILENT.to_filter_string(), "off");
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
