// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Weight table selection, deployment environment and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_profile_dashboard::config::{DashboardConfig, Environment};
use pierre_profile_dashboard::errors::{ErrorCode, ProfileError};
use pierre_profile_dashboard::logging::{LogFormat, LoggingConfig};
use pierre_profile_dashboard::{CompletenessWeights, EngineConfig};
use pierre_profile_engine::config::WEIGHTS_ENV_VAR;
use pierre_profile_engine::ConfigError;
use serial_test::serial;

#[test]
#[serial]
fn test_engine_config_defaults_to_v1() {
    env::remove_var(WEIGHTS_ENV_VAR);
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.completeness_weights, CompletenessWeights::V1);
    config.validate().unwrap();
}

#[test]
#[serial]
fn test_engine_config_reads_version() {
    env::set_var(WEIGHTS_ENV_VAR, "V1");
    let config = EngineConfig::from_env();
    env::remove_var(WEIGHTS_ENV_VAR);

    assert_eq!(
        config.unwrap().completeness_weights.version,
        CompletenessWeights::V1.version
    );
}

#[test]
#[serial]
fn test_engine_config_rejects_unknown_version() {
    env::set_var(WEIGHTS_ENV_VAR, "v2");
    let result = EngineConfig::from_env();
    env::remove_var(WEIGHTS_ENV_VAR);

    let error = result.unwrap_err();
    assert!(matches!(error, ConfigError::UnknownWeightsVersion(ref version) if version == "v2"));

    let profile_error = ProfileError::from(error);
    assert_eq!(profile_error.code(), ErrorCode::ConfigInvalid);
    assert!(profile_error.to_string().contains("v2"));
}

#[test]
#[serial]
fn test_dashboard_config_from_env() {
    env::remove_var(WEIGHTS_ENV_VAR);
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "json");
    let config = DashboardConfig::from_env();
    env::remove_var("ENVIRONMENT");
    env::remove_var("LOG_FORMAT");

    let config = config.unwrap();
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.logging.include_location);
    assert_eq!(config.engine.completeness_weights, CompletenessWeights::V1);
    config.validate().unwrap();
}

#[test]
#[serial]
fn test_logging_treats_environment_aliases_as_production() {
    for key in ["LOG_INCLUDE_LOCATION", "LOG_INCLUDE_THREAD", "LOG_INCLUDE_SPANS"] {
        env::remove_var(key);
    }
    env::set_var("ENVIRONMENT", "prod");
    let logging = LoggingConfig::from_env();
    let environment = Environment::from_env();
    env::remove_var("ENVIRONMENT");

    assert!(environment.is_production());
    assert_eq!(logging.environment, "production");
    assert!(logging.include_location);
    assert!(logging.include_thread);
    assert!(logging.include_spans);
}

#[test]
#[serial]
fn test_logging_config_defaults() {
    for key in [
        "RUST_LOG",
        "LOG_FORMAT",
        "ENVIRONMENT",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_THREAD",
        "LOG_INCLUDE_SPANS",
        "SERVICE_NAME",
    ] {
        env::remove_var(key);
    }
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "pierre-profile-dashboard");
    assert_eq!(config.environment, "development");
    config.env_filter().unwrap();
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}
