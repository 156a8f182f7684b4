// ABOUTME: Fitness profile intake record with independently optional sub-records
// ABOUTME: Goals, metrics, equipment, availability, constraints, preferences, training and activity data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Raw fitness profile shapes
//!
//! These mirror what the chat extraction layer writes. Field names follow the
//! intake JSON (camelCase) and a few common aliases are accepted. Validation
//! happens in the engine's processors, not here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::activity::ActivityDataInput;
use super::loose::{one_or_many, DateInput, Scalar};

/// Fitness profile as supplied by the intake layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FitnessProfileInput {
    /// Training goals
    pub goals: Option<GoalsInput>,
    /// Body metrics and personal records
    pub metrics: Option<MetricsInput>,
    /// Equipment access
    pub equipment: Option<EquipmentInput>,
    /// Weekly availability
    pub availability: Option<AvailabilityInput>,
    /// Injuries and other limitations, in the order they were reported
    pub constraints: Vec<ConstraintInput>,
    /// Workout and coaching preferences
    pub preferences: Option<PreferencesInput>,
    /// Program the user is currently following
    pub current_training: Option<CurrentTrainingInput>,
    /// Activity-specific data keyed by activity type
    pub activity_data: Option<ActivityDataInput>,
}

/// Goals sub-record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalsInput {
    /// Primary goal tag (e.g. `strength`, `endurance`)
    pub primary_goal: Option<String>,
    /// Specific objective in the user's words
    #[serde(alias = "specific")]
    pub specific_objective: Option<String>,
    /// Self-reported experience level
    pub experience_level: Option<String>,
    /// What the user is doing today
    pub current_activity: Option<String>,
    /// Date of a target event
    #[serde(alias = "eventDate")]
    pub target_event_date: Option<DateInput>,
    /// Weeks available to reach the goal
    pub timeline_weeks: Option<Scalar>,
}

/// A measured value with a weight unit
///
/// Intake sometimes sends a bare number instead of `{value, unit}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasurementInput {
    /// `{value, unit}` object
    Structured {
        /// Measured value
        #[serde(default)]
        value: Option<Scalar>,
        /// Unit spelling (`lbs`, `kg`, ...)
        #[serde(default)]
        unit: Option<String>,
    },
    /// Bare value with no unit
    Bare(Scalar),
}

/// A personal-record lift
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiftInput {
    /// Weight lifted
    pub weight: Option<Scalar>,
    /// Unit spelling
    pub unit: Option<String>,
    /// Repetitions at that weight
    pub reps: Option<Scalar>,
}

/// Body metrics sub-record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsInput {
    /// Height in centimeters
    #[serde(alias = "heightCm")]
    pub height: Option<Scalar>,
    /// Body weight
    #[serde(alias = "bodyWeight")]
    pub bodyweight: Option<MeasurementInput>,
    /// Body-fat percentage
    #[serde(alias = "bodyFat")]
    pub body_fat_percent: Option<Scalar>,
    /// Personal records keyed by lift name
    #[serde(alias = "personalRecords")]
    pub pr_lifts: BTreeMap<String, LiftInput>,
}

/// Equipment sub-record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentInput {
    /// Access type (`full-gym`, `home-gym`, `none`, ...)
    #[serde(alias = "accessType")]
    pub access: Option<String>,
    /// Where the user trains
    pub location: Option<String>,
    /// Items available
    #[serde(alias = "items", alias = "availableItems", deserialize_with = "one_or_many")]
    pub available: Vec<String>,
    /// Equipment limitations
    #[serde(deserialize_with = "one_or_many")]
    pub constraints: Vec<String>,
}

/// Availability sub-record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityInput {
    /// Training days per week
    pub days_per_week: Option<Scalar>,
    /// Minutes per session
    pub minutes_per_session: Option<Scalar>,
    /// Preferred times of day
    #[serde(deserialize_with = "one_or_many")]
    pub preferred_times: Vec<String>,
    /// Travel pattern description
    pub travel_pattern: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
}

/// A single constraint record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstraintInput {
    /// Stable identifier
    pub id: Option<String>,
    /// `injury`, `equipment`, `schedule`, `mobility` or `other`
    #[serde(rename = "type")]
    pub constraint_type: Option<String>,
    /// Short description
    pub label: Option<String>,
    /// `mild`, `moderate` or `severe`
    pub severity: Option<String>,
    /// `active` or `resolved`
    pub status: Option<String>,
    /// Body areas affected
    #[serde(deserialize_with = "one_or_many")]
    pub affected_areas: Vec<String>,
    /// Training modifications in place
    pub modifications: Option<String>,
}

/// Preferences sub-record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesInput {
    /// Preferred workout style
    pub workout_style: Option<String>,
    /// Exercises the user enjoys
    #[serde(deserialize_with = "one_or_many")]
    pub enjoyed_exercises: Vec<String>,
    /// Exercises the user dislikes
    #[serde(deserialize_with = "one_or_many")]
    pub disliked_exercises: Vec<String>,
    /// Preferred coaching tone
    pub coaching_tone: Option<String>,
    /// Music or vibe preference
    #[serde(alias = "musicOrVibe", alias = "vibe", alias = "music")]
    pub music_vibe: Option<String>,
}

/// Current training sub-record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentTrainingInput {
    /// Program name
    pub program_name: Option<String>,
    /// Weeks completed so far
    pub weeks_completed: Option<Scalar>,
    /// Training focus
    pub focus: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
}
