// ABOUTME: Profile completeness scoring from a static, versioned weight table
// ABOUTME: Sums the weights of present items into an integer score between 0 and 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Completeness Calculator
//!
//! Each tracked item has a fixed integer weight and the weights of a table sum
//! to exactly 100. The score is the sum of weights of present items, so it can
//! only grow as fields are filled in. Changing a weight means publishing a new
//! table version, never editing `V1` in place.

use pierre_profile_core::models::{ProcessedProfileData, ProcessedUserData};
use serde::Serialize;

use crate::config::ConfigError;

/// Upper bound of the completeness score
pub const MAX_SCORE: u32 = 100;

/// An item tracked by the completeness score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletenessItem {
    /// User name
    Name,
    /// User email
    Email,
    /// User phone number
    PhoneNumber,
    /// User timezone
    Timezone,
    /// Preferred send hour
    PreferredSendHour,
    /// Goals sub-record
    Goals,
    /// Metrics sub-record
    Metrics,
    /// Current training sub-record
    TrainingStatus,
    /// Activity data sub-record
    ActivityData,
    /// Equipment sub-record
    Equipment,
    /// Availability sub-record
    Availability,
    /// At least one constraint
    Constraints,
    /// Preferences sub-record
    Preferences,
}

impl CompletenessItem {
    /// Whether this item is present in the processed data
    #[must_use]
    pub const fn is_present(self, user: &ProcessedUserData, profile: &ProcessedProfileData) -> bool {
        match self {
            Self::Name => user.name.is_some(),
            Self::Email => user.email.is_some(),
            Self::PhoneNumber => user.phone_number.is_some(),
            Self::Timezone => user.timezone.is_some(),
            Self::PreferredSendHour => user.preferred_send_hour.is_some(),
            Self::Goals => profile.goals.is_some(),
            Self::Metrics => profile.metrics.is_some(),
            Self::TrainingStatus => profile.current_training.is_some(),
            Self::ActivityData => profile.activity_data.is_some(),
            Self::Equipment => profile.equipment.is_some(),
            Self::Availability => profile.availability.is_some(),
            Self::Constraints => profile.constraints.is_some(),
            Self::Preferences => profile.preferences.is_some(),
        }
    }

    /// Short label for "still missing" nudges
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "your name",
            Self::Email => "your email",
            Self::PhoneNumber => "your phone number",
            Self::Timezone => "your timezone",
            Self::PreferredSendHour => "when you'd like to hear from us",
            Self::Goals => "your goals",
            Self::Metrics => "your body metrics",
            Self::TrainingStatus => "your current training",
            Self::ActivityData => "your main activity",
            Self::Equipment => "your equipment",
            Self::Availability => "your availability",
            Self::Constraints => "any injuries or limitations",
            Self::Preferences => "your workout preferences",
        }
    }
}

/// One row of a weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightEntry {
    /// Tracked item
    pub item: CompletenessItem,
    /// Points awarded when present
    pub weight: u8,
}

const fn entry(item: CompletenessItem, weight: u8) -> WeightEntry {
    WeightEntry { item, weight }
}

/// A versioned completeness weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletenessWeights {
    /// Version label (`v1`, ...)
    pub version: &'static str,
    /// Weighted items
    pub entries: &'static [WeightEntry],
}

impl CompletenessWeights {
    /// First published table: contact details 30, profile sub-records 70
    pub const V1: Self = Self {
        version: "v1",
        entries: &[
            entry(CompletenessItem::Name, 10),
            entry(CompletenessItem::Email, 5),
            entry(CompletenessItem::PhoneNumber, 5),
            entry(CompletenessItem::Timezone, 5),
            entry(CompletenessItem::PreferredSendHour, 5),
            entry(CompletenessItem::Goals, 15),
            entry(CompletenessItem::Metrics, 10),
            entry(CompletenessItem::TrainingStatus, 5),
            entry(CompletenessItem::ActivityData, 10),
            entry(CompletenessItem::Equipment, 10),
            entry(CompletenessItem::Availability, 10),
            entry(CompletenessItem::Constraints, 5),
            entry(CompletenessItem::Preferences, 5),
        ],
    };

    /// Every published table
    pub const PUBLISHED: &'static [Self] = &[Self::V1];

    /// Look up a published table by version label
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownWeightsVersion` for an unpublished version
    pub fn by_version(version: &str) -> Result<Self, ConfigError> {
        Self::PUBLISHED
            .iter()
            .find(|table| table.version.eq_ignore_ascii_case(version.trim()))
            .copied()
            .ok_or_else(|| ConfigError::UnknownWeightsVersion(version.to_owned()))
    }

    /// Sum of all weights
    #[must_use]
    pub const fn total(&self) -> u32 {
        let mut sum = 0;
        let mut i = 0;
        while i < self.entries.len() {
            sum += self.entries[i].weight as u32;
            i += 1;
        }
        sum
    }

    /// Check the table sums to 100 and lists each item once
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` describing the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let total = self.total();
        if total != MAX_SCORE {
            return Err(ConfigError::InvalidWeights(format!(
                "{} weights sum to {total}, expected {MAX_SCORE}",
                self.version
            )));
        }
        for (i, row) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|prior| prior.item == row.item) {
                return Err(ConfigError::InvalidWeights(format!(
                    "{} lists {:?} more than once",
                    self.version, row.item
                )));
            }
        }
        Ok(())
    }
}

impl Default for CompletenessWeights {
    fn default() -> Self {
        Self::V1
    }
}

const _: () = assert!(CompletenessWeights::V1.total() == MAX_SCORE);

/// Presence of one tracked item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessEntry {
    /// Tracked item
    pub item: CompletenessItem,
    /// Points the item is worth
    pub weight: u8,
    /// Whether the item is present
    pub present: bool,
}

/// Scores profile completeness
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletenessCalculator {
    weights: CompletenessWeights,
}

impl CompletenessCalculator {
    /// Create a calculator for a weight table
    #[must_use]
    pub const fn new(weights: CompletenessWeights) -> Self {
        Self { weights }
    }

    /// Weight table in use
    #[must_use]
    pub const fn weights(&self) -> CompletenessWeights {
        self.weights
    }

    /// Completeness score in `[0, 100]`
    #[must_use]
    pub fn score(&self, user: &ProcessedUserData, profile: &ProcessedProfileData) -> u8 {
        let earned: u32 = self
            .weights
            .entries
            .iter()
            .filter(|row| row.item.is_present(user, profile))
            .map(|row| u32::from(row.weight))
            .sum();
        earned.min(MAX_SCORE) as u8
    }

    /// Per-item presence, in table order
    #[must_use]
    pub fn breakdown(
        &self,
        user: &ProcessedUserData,
        profile: &ProcessedProfileData,
    ) -> Vec<CompletenessEntry> {
        self.weights
            .entries
            .iter()
            .map(|row| CompletenessEntry {
                item: row.item,
                weight: row.weight,
                present: row.item.is_present(user, profile),
            })
            .collect()
    }

    /// Absent items, in table order
    #[must_use]
    pub fn missing_items(
        &self,
        user: &ProcessedUserData,
        profile: &ProcessedProfileData,
    ) -> Vec<CompletenessItem> {
        self.weights
            .entries
            .iter()
            .filter(|row| !row.item.is_present(user, profile))
            .map(|row| row.item)
            .collect()
    }
}
