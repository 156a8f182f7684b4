// ABOUTME: Section visibility rules and empty-state copy
// ABOUTME: Personal info always shows; other sections show only when their data group is present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_profile_core::models::{ProcessedProfileData, ProcessedUserData, SectionId};

/// Decides which sections mount and what they say when empty
pub struct SectionVisibilityPolicy;

impl SectionVisibilityPolicy {
    /// Whether a section should be rendered
    ///
    /// `PersonalInfo` is always shown as the anchor section. Every other
    /// section is hidden when its data group is absent, so the dashboard never
    /// shows placeholders for questions that were never asked.
    #[must_use]
    pub const fn should_show(
        id: SectionId,
        _user: &ProcessedUserData,
        profile: &ProcessedProfileData,
    ) -> bool {
        match id {
            SectionId::PersonalInfo => true,
            SectionId::Goals => profile.goals.is_some(),
            SectionId::Metrics => profile.metrics.is_some(),
            SectionId::Equipment => profile.equipment.is_some(),
            SectionId::Availability => profile.availability.is_some(),
            SectionId::Constraints => profile.constraints.is_some(),
            SectionId::Preferences => profile.preferences.is_some(),
            SectionId::TrainingStatus => profile.current_training.is_some(),
            SectionId::ActivityData => profile.activity_data.is_some(),
        }
    }

    /// Nudge shown when a section has no data
    #[must_use]
    pub const fn empty_state_message(id: SectionId) -> &'static str {
        match id {
            SectionId::PersonalInfo => {
                "Tell us a little about yourself so we can personalize your plan."
            }
            SectionId::Goals => {
                "No goals yet. Share what you're training for and we'll build around it."
            }
            SectionId::Metrics => "No body metrics or personal records recorded yet.",
            SectionId::Equipment => "Let us know what equipment you have access to.",
            SectionId::Availability => "Share how often and how long you can train each week.",
            SectionId::Constraints => "No injuries or limitations noted.",
            SectionId::Preferences => {
                "Tell us which workouts you enjoy and how you like to be coached."
            }
            SectionId::TrainingStatus => "No current training program recorded.",
            SectionId::ActivityData => {
                "Add details about your main activity to unlock sport-specific metrics."
            }
        }
    }
}
