// ABOUTME: Tests for logging configuration
// ABOUTME: Validates defaults, environment handling, filter directives, and format parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use eare_intelligence::config::{Environment, LogLevel};
use eare_intelligence::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const LOGGING_VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_SPANS",
];

fn clear_logging_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "eare-test");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.service_name, "eare-test");
    assert!(config.include_location);
    assert!(config.include_spans);

    clear_logging_env();
}

#[test]
#[serial]
fn test_development_from_env_omits_location() {
    clear_logging_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
    assert!(!config.include_spans);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.service_name, "eare-intelligence");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
fn test_env_filter_targets_our_crates() {
    let filter = LoggingConfig::default()
        .with_level(LogLevel::Debug)
        .env_filter()
        .to_string();

    assert!(filter.contains("eare_intelligence=debug"));
    assert!(filter.contains("eare_core=debug"));
    assert!(filter.contains("reqwest=warn"));
}

#[test]
fn test_builders_override_fields() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Trace);

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, LogLevel::Trace);
}
