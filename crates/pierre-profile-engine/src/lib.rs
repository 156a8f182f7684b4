// ABOUTME: Profile normalization and section composition engine
// ABOUTME: Turns raw user and fitness profile records into scored, ordered dashboard sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Profile Engine
//!
//! Pure, synchronous processing for the profile dashboard. Every component is
//! stateless: the same input always yields the same output and no function
//! here returns an error for malformed field values. Invalid values are
//! dropped with a `debug!` event and processing continues.
//!
//! ## Components
//!
//! - **`UserDataProcessor`**: trims and validates the user record
//! - **`ProfileDataProcessor`**: normalizes each fitness profile sub-record
//! - **`ActivityDataDiscriminator`**: picks a typed or generic activity view
//! - **`CompletenessCalculator`**: weighted 0-100 completeness score
//! - **`SectionOrderingEngine`**: fixed-priority section descriptors
//! - **`SectionVisibilityPolicy`**: show/hide rules and empty-state copy

/// Activity type discrimination and metric interpretation
pub mod activity;

/// Weighted completeness scoring
pub mod completeness;

/// Engine configuration
pub mod config;

/// Lenient JSON ingestion
pub mod ingest;

/// Fitness profile normalization
pub mod profile_processor;

/// Section ordering and data counts
pub mod sections;

/// User record normalization
pub mod user_processor;

/// Section visibility rules
pub mod visibility;

mod normalize;

pub use activity::{activity_entry, ActivityDataDiscriminator, ActivityView, KeyedMetric};
pub use completeness::{
    CompletenessCalculator, CompletenessEntry, CompletenessItem, CompletenessWeights, MAX_SCORE,
};
pub use config::{ConfigError, EngineConfig};
pub use ingest::{profile_from_json, user_from_json, RawSnapshot};
pub use profile_processor::ProfileDataProcessor;
pub use sections::{section_data_count, SectionOrderingEngine};
pub use user_processor::UserDataProcessor;
pub use visibility::SectionVisibilityPolicy;
