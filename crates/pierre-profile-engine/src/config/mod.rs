// ABOUTME: Engine configuration selecting the completeness weight table
// ABOUTME: Reads PROFILE_COMPLETENESS_WEIGHTS from the environment and validates the table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine configuration

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use std::env;

use tracing::debug;

use crate::completeness::CompletenessWeights;

/// Environment variable naming the completeness weight table version
pub const WEIGHTS_ENV_VAR: &str = "PROFILE_COMPLETENESS_WEIGHTS";

/// Profile engine configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    /// Weight table used to score completeness
    pub completeness_weights: CompletenessWeights,
}

impl EngineConfig {
    /// Load configuration from the environment, defaulting to the v1 table
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not unicode, names an unknown
    /// version, or selects a table that fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let completeness_weights = match env::var(WEIGHTS_ENV_VAR) {
            Ok(version) => CompletenessWeights::by_version(&version)?,
            Err(env::VarError::NotPresent) => CompletenessWeights::default(),
            Err(error) => return Err(error.into()),
        };
        debug!(
            version = completeness_weights.version,
            "Loaded engine configuration"
        );
        let config = Self {
            completeness_weights,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the selected weight table
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` when the table is inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.completeness_weights.validate()
    }
}
