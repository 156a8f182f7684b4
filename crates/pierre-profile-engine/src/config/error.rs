// ABOUTME: Configuration error types for the profile engine
// ABOUTME: Weight-table validation, unknown versions and environment access failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for engine validation.

use pierre_profile_core::errors::ProfileError;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Weights don't sum to the required total or list an item twice
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Requested weight table version does not exist
    #[error("Unknown completeness weights version: {0}")]
    UnknownWeightsVersion(String),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),
}

impl From<ConfigError> for ProfileError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error.to_string())
    }
}
