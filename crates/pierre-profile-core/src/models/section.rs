// ABOUTME: Dashboard section identifiers and per-render section descriptors
// ABOUTME: SectionId is a closed enumeration with a static display priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Logical section of the profile dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    /// Name, contact and scheduling details
    PersonalInfo,
    /// Training goals
    Goals,
    /// Body metrics and personal records
    Metrics,
    /// Equipment access
    Equipment,
    /// Weekly availability
    Availability,
    /// Injuries and limitations
    Constraints,
    /// Workout and coaching preferences
    Preferences,
    /// Current training program
    TrainingStatus,
    /// Activity-specific data
    ActivityData,
}

impl SectionId {
    /// Every section, in declaration order
    pub const ALL: [Self; 9] = [
        Self::PersonalInfo,
        Self::Goals,
        Self::Metrics,
        Self::Equipment,
        Self::Availability,
        Self::Constraints,
        Self::Preferences,
        Self::TrainingStatus,
        Self::ActivityData,
    ];

    /// Display order of the dashboard; independent of which sections hold data
    pub const PRIORITY: [Self; 9] = [
        Self::PersonalInfo,
        Self::Goals,
        Self::Metrics,
        Self::TrainingStatus,
        Self::ActivityData,
        Self::Equipment,
        Self::Availability,
        Self::Constraints,
        Self::Preferences,
    ];

    /// Stable camelCase identifier used by the rendering layer
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PersonalInfo => "personalInfo",
            Self::Goals => "goals",
            Self::Metrics => "metrics",
            Self::Equipment => "equipment",
            Self::Availability => "availability",
            Self::Constraints => "constraints",
            Self::Preferences => "preferences",
            Self::TrainingStatus => "trainingStatus",
            Self::ActivityData => "activityData",
        }
    }

    /// Section heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Goals => "Goals",
            Self::Metrics => "Body Metrics",
            Self::Equipment => "Equipment",
            Self::Availability => "Availability",
            Self::Constraints => "Constraints",
            Self::Preferences => "Preferences",
            Self::TrainingStatus => "Current Training",
            Self::ActivityData => "Activity",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown section identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown section id: {0}")]
pub struct UnknownSectionId(pub String);

impl FromStr for SectionId {
    type Err = UnknownSectionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSectionId(s.to_owned()))
    }
}

/// Per-render summary of one section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    /// Section
    pub id: SectionId,
    /// Whether the section's data group is present
    pub has_data: bool,
    /// Populated leaf fields (list length for constraints); zero when `has_data` is false
    pub data_count: usize,
}
