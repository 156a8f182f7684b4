// ABOUTME: Top-level configuration for the profile dashboard
// ABOUTME: Combines deployment environment, engine weights and logging settings loaded from env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration
//!
//! There is no configuration file. Every setting has a default and can be
//! overridden through environment variables:
//!
//! - `ENVIRONMENT`: development, testing or production
//! - `PROFILE_COMPLETENESS_WEIGHTS`: completeness weight table version (`v1`)
//! - `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_*`, `SERVICE_NAME`, `SERVICE_VERSION`: logging

/// Deployment environment parsing
pub mod environment;

pub use environment::Environment;

use pierre_profile_engine::{ConfigError, EngineConfig};
use tracing::info;

use crate::logging::LoggingConfig;

/// Dashboard configuration
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Engine settings
    pub engine: EngineConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Load all settings from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the engine settings are invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            environment: Environment::from_env(),
            engine: EngineConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the engine settings are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()
    }

    /// Log a one-line summary of the loaded configuration
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            completeness_weights = self.engine.completeness_weights.version,
            log_format = ?self.logging.format,
            "Configuration loaded"
        );
    }
}
