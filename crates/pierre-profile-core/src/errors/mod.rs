// ABOUTME: Error types for the few fallible edges of the profile dashboard
// ABOUTME: Snapshot parsing and configuration failures with stable error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Error Types
//!
//! Missing or partial data is never an error in this workspace. The variants
//! here cover a snapshot that cannot be read as JSON at all, and invalid
//! configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the profile dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input could not be interpreted at all
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input has the wrong top-level shape
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
    /// View model could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided profile snapshot is not valid JSON",
            Self::InvalidFormat => "The provided profile snapshot is not a JSON object",
            Self::ConfigInvalid => "The profile engine configuration is invalid",
            Self::SerializationError => "The profile view could not be serialized",
        }
    }
}

/// Errors raised at the edges of the profile dashboard
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Snapshot text is not valid JSON
    #[error("Invalid {record} snapshot: {source}")]
    InvalidJson {
        /// Which record failed (`user` or `profile`)
        record: &'static str,
        /// Underlying parser error
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot root is valid JSON but not an object
    #[error("{record} snapshot must be a JSON object, got {found}")]
    NotAnObject {
        /// Which record failed (`user` or `profile`)
        record: &'static str,
        /// JSON type that was found instead
        found: &'static str,
    },

    /// Configuration rejected during validation
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// View model serialization failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProfileError {
    /// Stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidJson { .. } => ErrorCode::InvalidInput,
            Self::NotAnObject { .. } => ErrorCode::InvalidFormat,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Serialization(_) => ErrorCode::SerializationError,
        }
    }
}

/// Result alias for fallible profile operations
pub type ProfileResult<T> = Result<T, ProfileError>;
