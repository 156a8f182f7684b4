// ABOUTME: Service-level constants for the profile dashboard binary and library
// ABOUTME: Service name and the environment variable names read by the root crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service name reported in structured logs
pub const SERVICE_NAME: &str = "pierre-profile-dashboard";

/// Environment variable names
pub mod env_config {
    /// Deployment environment (development, staging, production)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
