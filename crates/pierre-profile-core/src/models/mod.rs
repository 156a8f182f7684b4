// ABOUTME: Profile data models for intake records and processed view shapes
// ABOUTME: Re-exports user, fitness profile, activity and section types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Two families of types live here:
//!
//! - **Input records** (`UserInput`, `FitnessProfileInput`): sparse, loosely
//!   typed, deserializable straight from intake JSON.
//! - **Processed shapes** (`ProcessedUserData`, `ProcessedProfileData`): one
//!   canonical representation per field, built by the engine crate.
//!
//! Section types (`SectionId`, `SectionDescriptor`) describe how the dashboard
//! lays those shapes out.

mod activity;
mod fitness_profile;
mod loose;
mod presence;
mod profile;
mod section;
mod user;

// Loose intake values
pub use loose::{one_or_many, DateInput, Scalar};

// Field presence
pub use presence::PopulatedFields;

// User domain
pub use user::{ProcessedUserData, UserInput};

// Fitness profile intake
pub use fitness_profile::{
    AvailabilityInput, ConstraintInput, CurrentTrainingInput, EquipmentInput, FitnessProfileInput,
    GoalsInput, LiftInput, MeasurementInput, MetricsInput, PreferencesInput,
};

// Processed profile
pub use profile::{
    ConstraintSeverity, ConstraintStatus, ConstraintType, Measurement, PersonalRecordLift,
    ProcessedAvailability, ProcessedConstraint, ProcessedCurrentTraining, ProcessedEquipment,
    ProcessedGoals, ProcessedMetrics, ProcessedPreferences, ProcessedProfileData, WeightUnit,
};

// Activity domain
pub use activity::{
    ActivityDataInput, ActivityType, KeyMetric, MetricInterpretation, MetricKind,
    ProcessedActivityData,
};

// Sections
pub use section::{SectionDescriptor, SectionId, UnknownSectionId};
