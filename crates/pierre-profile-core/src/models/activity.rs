// ABOUTME: Activity-specific profile data tagged by activity type
// ABOUTME: Closed activity type set, metric semantic kinds and the processed activity shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::loose::{one_or_many, Scalar};
use super::presence::{count_some, PopulatedFields};

/// Closed set of activity types the dashboard knows how to interpret
///
/// `Other` is the exhaustive fallback: any tag outside the known set,
/// including a missing tag, maps to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Running
    Running,
    /// Strength training
    Strength,
    /// Hiking
    Hiking,
    /// Cycling
    Cycling,
    /// Skiing
    Skiing,
    /// Anything else, described by a free-form activity name
    Other,
}

impl ActivityType {
    /// Every activity type, `Other` last
    pub const ALL: [Self; 6] = [
        Self::Running,
        Self::Strength,
        Self::Hiking,
        Self::Cycling,
        Self::Skiing,
        Self::Other,
    ];

    /// Parse an intake tag (case-insensitive); unknown tags return `None`
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "running" | "run" => Some(Self::Running),
            "strength" | "strength_training" | "weightlifting" => Some(Self::Strength),
            "hiking" | "hike" => Some(Self::Hiking),
            "cycling" | "bike" | "ride" => Some(Self::Cycling),
            "skiing" | "ski" => Some(Self::Skiing),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Canonical intake tag
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Strength => "strength",
            Self::Hiking => "hiking",
            Self::Cycling => "cycling",
            Self::Skiing => "skiing",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Semantic type of a key metric, used by generic display code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// A load (lbs/kg)
    Weight,
    /// A distance or elevation
    Distance,
    /// A duration or pace
    Time,
    /// A percentage in [0,100]
    Percentage,
    /// A non-negative count
    Count,
    /// Free text
    Text,
}

/// Activity data as supplied by the intake layer
///
/// `key_metrics` stays untyped here: its shape depends on `activity_type` and
/// is checked by the engine's discriminator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityDataInput {
    /// Activity tag (`running`, `strength`, ...)
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    /// Free-form activity name, used by the `other` variant
    pub activity_name: Option<String>,
    /// Experience level in this activity
    pub experience_level: Option<String>,
    /// Activity-specific goals
    #[serde(deserialize_with = "one_or_many")]
    pub goals: Vec<String>,
    /// Activity-specific equipment
    #[serde(deserialize_with = "one_or_many")]
    pub equipment: Vec<String>,
    /// Activity-specific metrics
    pub key_metrics: Option<Value>,
}

/// How the key metrics of an activity were interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricInterpretation {
    /// Matched the activity's metric table
    Typed,
    /// Generic key/scalar rendering (unknown type or payload mismatch)
    Generic,
}

/// One validated key metric
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetric {
    /// Intake key (`weeklyMileage`, `benchPress`, ...)
    pub key: String,
    /// Semantic type
    pub kind: MetricKind,
    /// Validated value
    pub value: Scalar,
}

/// Normalized activity data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedActivityData {
    /// Resolved activity type
    pub activity_type: ActivityType,
    /// Whether intake sent a non-blank type tag
    pub type_supplied: bool,
    /// Free-form name for `Other` (or the unrecognized intake tag, humanized)
    pub activity_name: Option<String>,
    /// Experience level in this activity
    pub experience_level: Option<String>,
    /// Activity-specific goals
    pub goals: Vec<String>,
    /// Activity-specific equipment
    pub equipment: Vec<String>,
    /// Validated key metrics, in table order for typed data
    pub key_metrics: Vec<KeyMetric>,
    /// Whether `key_metrics` follows the activity's metric table
    pub interpretation: MetricInterpretation,
}

impl PopulatedFields for ProcessedActivityData {
    /// A supplied type tag counts as one field; each key metric counts once
    fn populated_fields(&self) -> usize {
        count_some([
            self.type_supplied,
            self.activity_name.is_some(),
            self.experience_level.is_some(),
            !self.goals.is_empty(),
            !self.equipment.is_empty(),
        ]) + self.key_metrics.len()
    }
}
