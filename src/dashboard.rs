// ABOUTME: Profile dashboard facade composing processors, scoring, ordering and visibility
// ABOUTME: Produces one serializable view per user/profile pair for the rendering layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Dashboard
//!
//! `ProfileDashboard::build` runs every engine component once and returns a
//! `DashboardView`. The build is pure and deterministic, so hosts can memoize
//! it on their input records.

use pierre_profile_core::errors::ProfileResult;
use pierre_profile_core::models::{
    FitnessProfileInput, ProcessedProfileData, ProcessedUserData, SectionDescriptor, SectionId,
    UserInput,
};
use pierre_profile_engine::{
    ActivityDataDiscriminator, ActivityView, CompletenessCalculator, CompletenessEntry,
    CompletenessItem, EngineConfig, ProfileDataProcessor, RawSnapshot, SectionOrderingEngine,
    SectionVisibilityPolicy, UserDataProcessor,
};
use serde::Serialize;
use tracing::debug;

/// Completeness score with its per-item breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessSummary {
    /// Score in `[0, 100]`
    pub score: u8,
    /// Weight table version used
    pub weights_version: &'static str,
    /// Every tracked item with weight and presence
    pub breakdown: Vec<CompletenessEntry>,
    /// Absent items in table order
    pub missing: Vec<CompletenessItem>,
}

/// One section as the rendering layer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSection {
    /// Ordering descriptor
    #[serde(flatten)]
    pub descriptor: SectionDescriptor,
    /// Section heading
    pub title: &'static str,
    /// Whether the section mounts at all
    pub visible: bool,
    /// Nudge rendered when the section has no data
    pub empty_state_message: &'static str,
}

impl DashboardSection {
    /// Section id
    #[must_use]
    pub const fn id(&self) -> SectionId {
        self.descriptor.id
    }
}

/// Everything the dashboard needs to render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Normalized user record
    pub user: ProcessedUserData,
    /// Normalized fitness profile
    pub profile: ProcessedProfileData,
    /// Completeness score
    pub completeness: CompletenessSummary,
    /// Sections in display order, hidden ones included
    pub sections: Vec<DashboardSection>,
    /// Interpreted activity data, when present
    pub activity: Option<ActivityView>,
}

impl DashboardView {
    /// Look up a section by id
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&DashboardSection> {
        self.sections.iter().find(|section| section.id() == id)
    }

    /// Whether a section is visible
    #[must_use]
    pub fn is_visible(&self, id: SectionId) -> bool {
        self.section(id).is_some_and(|section| section.visible)
    }

    /// Visible sections in display order
    pub fn visible_sections(&self) -> impl Iterator<Item = &DashboardSection> {
        self.sections.iter().filter(|section| section.visible)
    }

    /// Render as JSON, pretty-printed unless `compact`
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Serialization` if the view cannot be serialized
    pub fn to_json(&self, compact: bool) -> ProfileResult<String> {
        let rendered = if compact {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(rendered)
    }
}

/// Composes engine components into a `DashboardView`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileDashboard {
    calculator: CompletenessCalculator,
}

impl ProfileDashboard {
    /// Create a dashboard using the configured weight table
    #[must_use]
    pub const fn new(config: &EngineConfig) -> Self {
        Self {
            calculator: CompletenessCalculator::new(config.completeness_weights),
        }
    }

    /// Completeness calculator in use
    #[must_use]
    pub const fn calculator(&self) -> &CompletenessCalculator {
        &self.calculator
    }

    /// Build the view for a raw user and fitness profile
    #[must_use]
    pub fn build(&self, user: &UserInput, profile: &FitnessProfileInput) -> DashboardView {
        let user = UserDataProcessor::process(user);
        let profile = ProfileDataProcessor::process(profile);
        self.compose(user, profile)
    }

    /// Build the view for an ingested snapshot
    #[must_use]
    pub fn build_snapshot(&self, snapshot: &RawSnapshot) -> DashboardView {
        self.build(&snapshot.user, &snapshot.profile)
    }

    /// Build the view from records that are already processed
    #[must_use]
    pub fn compose(&self, user: ProcessedUserData, profile: ProcessedProfileData) -> DashboardView {
        let completeness = CompletenessSummary {
            score: self.calculator.score(&user, &profile),
            weights_version: self.calculator.weights().version,
            breakdown: self.calculator.breakdown(&user, &profile),
            missing: self.calculator.missing_items(&user, &profile),
        };

        let sections = SectionOrderingEngine::order(&user, &profile)
            .into_iter()
            .map(|descriptor| DashboardSection {
                descriptor,
                title: descriptor.id.title(),
                visible: SectionVisibilityPolicy::should_show(descriptor.id, &user, &profile),
                empty_state_message: SectionVisibilityPolicy::empty_state_message(descriptor.id),
            })
            .collect::<Vec<_>>();

        let activity = profile
            .activity_data
            .as_ref()
            .map(ActivityDataDiscriminator::interpret);

        debug!(
            score = completeness.score,
            visible = sections.iter().filter(|section| section.visible).count(),
            "Composed profile dashboard"
        );

        DashboardView {
            user,
            profile,
            completeness,
            sections,
            activity,
        }
    }
}
