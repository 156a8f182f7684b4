// ABOUTME: Processed fitness profile shapes consumed by section renderers
// ABOUTME: Each sub-record is present only when it carries at least one informative field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Processed Profile
//!
//! The engine builds these from `FitnessProfileInput`. A group that would
//! contain only empty values is `None` rather than an all-empty struct, so
//! callers can check existence instead of scanning fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::activity::ProcessedActivityData;
use super::presence::{count_some, with_zero_leaves, PopulatedFields};
use crate::constants::units::{KILOGRAM_ALIASES, POUND_ALIASES};
use crate::formatters::format_number;

/// Normalized fitness profile
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedProfileData {
    /// Training goals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<ProcessedGoals>,
    /// Body metrics and personal records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ProcessedMetrics>,
    /// Equipment access
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<ProcessedEquipment>,
    /// Weekly availability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<ProcessedAvailability>,
    /// Constraints in intake order; never an empty list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<ProcessedConstraint>>,
    /// Workout and coaching preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<ProcessedPreferences>,
    /// Current training program
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_training: Option<ProcessedCurrentTraining>,
    /// Activity-specific data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_data: Option<ProcessedActivityData>,
}

impl ProcessedProfileData {
    /// Constraints that are still active, in intake order
    pub fn active_constraints(&self) -> impl Iterator<Item = &ProcessedConstraint> {
        self.constraints
            .iter()
            .flatten()
            .filter(|constraint| constraint.is_active())
    }

    /// Whether no sub-record is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.goals.is_none()
            && self.metrics.is_none()
            && self.equipment.is_none()
            && self.availability.is_none()
            && self.constraints.is_none()
            && self.preferences.is_none()
            && self.current_training.is_none()
            && self.activity_data.is_none()
    }
}

/// Normalized goals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedGoals {
    /// Primary goal tag
    pub primary_goal: Option<String>,
    /// Specific objective
    pub specific_objective: Option<String>,
    /// Experience level
    pub experience_level: Option<String>,
    /// Current activity
    pub current_activity: Option<String>,
    /// Target event date
    pub target_event_date: Option<NaiveDate>,
    /// Weeks available to reach the goal
    pub timeline_weeks: Option<u32>,
}

impl PopulatedFields for ProcessedGoals {
    fn populated_fields(&self) -> usize {
        count_some([
            self.primary_goal.is_some(),
            self.specific_objective.is_some(),
            self.experience_level.is_some(),
            self.current_activity.is_some(),
            self.target_event_date.is_some(),
            self.timeline_weeks.is_some(),
        ])
    }
}

/// Weight unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Pounds
    #[default]
    Lbs,
    /// Kilograms
    Kg,
}

impl WeightUnit {
    /// Parse a unit spelling; unknown spellings return `None`
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_lowercase();
        if POUND_ALIASES.contains(&normalized.as_str()) {
            Some(Self::Lbs)
        } else if KILOGRAM_ALIASES.contains(&normalized.as_str()) {
            Some(Self::Kg)
        } else {
            None
        }
    }

    /// Short label
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Lbs => "lbs",
            Self::Kg => "kg",
        }
    }
}

/// A positive weight with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    /// Value, always finite and positive
    pub value: f64,
    /// Unit
    pub unit: WeightUnit,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_number(self.value), self.unit.abbreviation())
    }
}

/// A validated personal-record lift
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecordLift {
    /// Lift name as keyed in intake
    pub name: String,
    /// Weight lifted
    pub weight: Measurement,
    /// Repetitions at that weight
    pub reps: Option<u32>,
}

impl fmt::Display for PersonalRecordLift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reps {
            Some(reps) => write!(f, "{} x {reps}", self.weight),
            None => write!(f, "{}", self.weight),
        }
    }
}

/// Normalized body metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedMetrics {
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Body weight
    pub bodyweight: Option<Measurement>,
    /// Body-fat percentage in [0,100]
    pub body_fat_percent: Option<f64>,
    /// Personal records ordered by lift name
    pub pr_lifts: Vec<PersonalRecordLift>,
}

impl PopulatedFields for ProcessedMetrics {
    /// Each personal-record lift counts as its own field; a zero body fat
    /// counts only next to another metric
    fn populated_fields(&self) -> usize {
        let zero_body_fat = self.body_fat_percent.is_some_and(|percent| percent <= 0.0);
        let substantive = count_some([
            self.height_cm.is_some(),
            self.bodyweight.is_some(),
            self.body_fat_percent.is_some() && !zero_body_fat,
        ]) + self.pr_lifts.len();
        with_zero_leaves(substantive, usize::from(zero_body_fat))
    }
}

/// Normalized equipment access
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedEquipment {
    /// Access type
    pub access: Option<String>,
    /// Training location
    pub location: Option<String>,
    /// Items available
    pub available: Vec<String>,
    /// Equipment limitations
    pub constraints: Vec<String>,
}

impl PopulatedFields for ProcessedEquipment {
    fn populated_fields(&self) -> usize {
        count_some([
            self.access.is_some(),
            self.location.is_some(),
            !self.available.is_empty(),
            !self.constraints.is_empty(),
        ])
    }
}

/// Normalized availability
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedAvailability {
    /// Training days per week (1-7)
    pub days_per_week: Option<u8>,
    /// Minutes per session
    pub minutes_per_session: Option<u32>,
    /// Preferred times of day
    pub preferred_times: Vec<String>,
    /// Travel pattern
    pub travel_pattern: Option<String>,
    /// Notes
    pub notes: Option<String>,
}

impl PopulatedFields for ProcessedAvailability {
    fn populated_fields(&self) -> usize {
        count_some([
            self.days_per_week.is_some(),
            self.minutes_per_session.is_some(),
            !self.preferred_times.is_empty(),
            self.travel_pattern.is_some(),
            self.notes.is_some(),
        ])
    }
}

/// Constraint category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintType {
    /// Injury
    Injury,
    /// Equipment limitation
    Equipment,
    /// Scheduling limitation
    Schedule,
    /// Mobility limitation
    Mobility,
    /// Anything else
    Other,
}

impl ConstraintType {
    /// Parse an intake tag; unknown tags map to `Other`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "injury" => Self::Injury,
            "equipment" => Self::Equipment,
            "schedule" => Self::Schedule,
            "mobility" => Self::Mobility,
            _ => Self::Other,
        }
    }
}

/// Constraint severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintSeverity {
    /// Mild
    Mild,
    /// Moderate
    Moderate,
    /// Severe
    Severe,
}

impl ConstraintSeverity {
    /// Parse an intake tag; unknown tags return `None`
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "mild" => Some(Self::Mild),
            "moderate" => Some(Self::Moderate),
            "severe" => Some(Self::Severe),
            _ => None,
        }
    }
}

/// Constraint lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintStatus {
    /// Still affects training
    #[default]
    Active,
    /// No longer affects training
    Resolved,
}

impl ConstraintStatus {
    /// Parse an intake tag; anything but `resolved` is active
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("resolved") {
            Self::Resolved
        } else {
            Self::Active
        }
    }
}

/// Normalized constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedConstraint {
    /// Identifier (synthesized from position when intake omitted it)
    pub id: String,
    /// Category
    #[serde(rename = "type")]
    pub constraint_type: ConstraintType,
    /// Short description
    pub label: String,
    /// Severity
    pub severity: Option<ConstraintSeverity>,
    /// Status
    pub status: ConstraintStatus,
    /// Body areas affected
    pub affected_areas: Vec<String>,
    /// Training modifications in place
    pub modifications: Option<String>,
}

impl ProcessedConstraint {
    /// Whether the constraint still affects training
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ConstraintStatus::Active
    }
}

impl PopulatedFields for Vec<ProcessedConstraint> {
    /// The constraints section counts list entries
    fn populated_fields(&self) -> usize {
        self.len()
    }
}

/// Normalized preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedPreferences {
    /// Workout style
    pub workout_style: Option<String>,
    /// Enjoyed exercises
    pub enjoyed_exercises: Vec<String>,
    /// Disliked exercises
    pub disliked_exercises: Vec<String>,
    /// Coaching tone
    pub coaching_tone: Option<String>,
    /// Music or vibe
    pub music_vibe: Option<String>,
}

impl PopulatedFields for ProcessedPreferences {
    fn populated_fields(&self) -> usize {
        count_some([
            self.workout_style.is_some(),
            !self.enjoyed_exercises.is_empty(),
            !self.disliked_exercises.is_empty(),
            self.coaching_tone.is_some(),
            self.music_vibe.is_some(),
        ])
    }
}

/// Normalized current training
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedCurrentTraining {
    /// Program name
    pub program_name: Option<String>,
    /// Weeks completed; zero means the program just started
    pub weeks_completed: Option<u32>,
    /// Focus
    pub focus: Option<String>,
    /// Notes
    pub notes: Option<String>,
}

impl PopulatedFields for ProcessedCurrentTraining {
    /// Week zero counts only next to another field
    fn populated_fields(&self) -> usize {
        let week_zero = self.weeks_completed == Some(0);
        let substantive = count_some([
            self.program_name.is_some(),
            self.weeks_completed.is_some_and(|weeks| weeks > 0),
            self.focus.is_some(),
            self.notes.is_some(),
        ]);
        with_zero_leaves(substantive, usize::from(week_zero))
    }
}
