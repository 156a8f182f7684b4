// ABOUTME: Main library entry point for the Pierre profile dashboard
// ABOUTME: Facade over the profile engine plus logging and environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Profile Dashboard
//!
//! Turns the partial user and fitness profile records gathered during
//! onboarding into everything a profile dashboard renders: normalized
//! records, a completeness score, ordered section descriptors with
//! visibility, and an activity-specific metrics view.
//!
//! ## Architecture
//!
//! - **`pierre-profile-core`**: raw and processed data models
//! - **`pierre-profile-engine`**: the pure processing components
//! - **dashboard**: `ProfileDashboard` composes the engine into one view
//! - **config** / **logging**: environment-driven settings and tracing setup
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_profile_dashboard::models::{FitnessProfileInput, GoalsInput, SectionId, UserInput};
//! use pierre_profile_dashboard::ProfileDashboard;
//!
//! let user = UserInput {
//!     name: Some("Alex".into()),
//!     ..UserInput::default()
//! };
//! let profile = FitnessProfileInput {
//!     goals: Some(GoalsInput {
//!         primary_goal: Some("strength".into()),
//!         ..GoalsInput::default()
//!     }),
//!     ..FitnessProfileInput::default()
//! };
//!
//! let view = ProfileDashboard::default().build(&user, &profile);
//! assert!(view.is_visible(SectionId::Goals));
//! assert!(!view.is_visible(SectionId::Metrics));
//! ```

/// Environment-driven configuration
pub mod config;

/// Service constants
pub mod constants;

/// Dashboard facade
pub mod dashboard;

/// Structured logging setup
pub mod logging;

pub use pierre_profile_core::{errors, formatters, models};
pub use pierre_profile_engine::{
    ActivityDataDiscriminator, CompletenessCalculator, CompletenessWeights, EngineConfig,
    ProfileDataProcessor, RawSnapshot, SectionOrderingEngine, SectionVisibilityPolicy,
    UserDataProcessor,
};

pub use config::DashboardConfig;
pub use dashboard::{CompletenessSummary, DashboardSection, DashboardView, ProfileDashboard};
