// ABOUTME: Section ordering for the profile dashboard
// ABOUTME: Fixed priority order with per-section data counts for the "N fields" badge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Section Ordering Engine
//!
//! Sections always appear in `SectionId::PRIORITY` order. Sections holding
//! data are not promoted, so the layout stays put while the user is still
//! answering intake questions.

use pierre_profile_core::models::{
    PopulatedFields, ProcessedProfileData, ProcessedUserData, SectionDescriptor, SectionId,
};

/// Number of populated leaf fields backing a section
///
/// Constraints report list length and each personal-record lift counts as
/// its own metrics field.
#[must_use]
pub fn section_data_count(
    id: SectionId,
    user: &ProcessedUserData,
    profile: &ProcessedProfileData,
) -> usize {
    match id {
        SectionId::PersonalInfo => user.populated_fields(),
        SectionId::Goals => profile.goals.populated_fields(),
        SectionId::Metrics => profile.metrics.populated_fields(),
        SectionId::Equipment => profile.equipment.populated_fields(),
        SectionId::Availability => profile.availability.populated_fields(),
        SectionId::Constraints => profile.constraints.populated_fields(),
        SectionId::Preferences => profile.preferences.populated_fields(),
        SectionId::TrainingStatus => profile.current_training.populated_fields(),
        SectionId::ActivityData => profile.activity_data.populated_fields(),
    }
}

/// Produces the ordered section list
pub struct SectionOrderingEngine;

impl SectionOrderingEngine {
    /// One descriptor per section, in priority order
    #[must_use]
    pub fn order(
        user: &ProcessedUserData,
        profile: &ProcessedProfileData,
    ) -> [SectionDescriptor; SectionId::PRIORITY.len()] {
        SectionId::PRIORITY.map(|id| Self::describe(id, user, profile))
    }

    /// Descriptor for a single section
    #[must_use]
    pub fn describe(
        id: SectionId,
        user: &ProcessedUserData,
        profile: &ProcessedProfileData,
    ) -> SectionDescriptor {
        let data_count = section_data_count(id, user, profile);
        SectionDescriptor {
            id,
            has_data: data_count > 0,
            data_count,
        }
    }
}
