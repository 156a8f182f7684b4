// ABOUTME: Core types for the Pierre profile dashboard
// ABOUTME: Foundation crate with intake records, processed shapes, errors and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Profile Core
//!
//! Shared types for the profile dashboard. Nothing in this crate performs I/O;
//! the engine crate turns the raw records defined here into processed shapes.
//!
//! ## Modules
//!
//! - **models**: raw intake records, processed shapes, activity and section types
//! - **errors**: `ProfileError` and stable `ErrorCode` values
//! - **constants**: validation limits shared by processors and formatters
//! - **formatters**: display helpers (humanized keys, hours, numbers)

/// Error types for snapshot parsing and configuration
pub mod errors;

/// Validation limits and labels
pub mod constants;

/// Display helpers for processed values
pub mod formatters;

/// Raw and processed profile data models
pub mod models;
