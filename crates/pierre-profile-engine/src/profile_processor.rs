// ABOUTME: Normalizes a partial fitness profile into ProcessedProfileData
// ABOUTME: Each sub-record is validated independently and kept only when informative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Data Processor
//!
//! Applies the all-or-nothing rule per sub-record: a group is returned only
//! when at least one of its fields survives validation. Malformed values are
//! treated as absent, never displayed half-parsed.

use pierre_profile_core::constants::availability_limits::{MAX_DAYS_PER_WEEK, MIN_DAYS_PER_WEEK};
use pierre_profile_core::constants::identifiers::CONSTRAINT_ID_PREFIX;
use pierre_profile_core::models::{
    AvailabilityInput, ConstraintInput, ConstraintSeverity, ConstraintStatus, ConstraintType,
    CurrentTrainingInput, EquipmentInput, FitnessProfileInput, GoalsInput, LiftInput, Measurement,
    MeasurementInput, MetricsInput, PersonalRecordLift, PopulatedFields, PreferencesInput,
    ProcessedAvailability, ProcessedConstraint, ProcessedCurrentTraining, ProcessedEquipment,
    ProcessedGoals, ProcessedMetrics, ProcessedPreferences, ProcessedProfileData, Scalar,
    WeightUnit,
};
use tracing::debug;

use crate::activity::ActivityDataDiscriminator;
use crate::normalize::{
    non_negative_whole, percentage, positive, positive_whole, text, text_list, whole_in_range,
};

/// Keep a processed group only when it carries information
fn informative<T: PopulatedFields>(group: T) -> Option<T> {
    Some(group).filter(PopulatedFields::is_informative)
}

/// Turns a partial `FitnessProfileInput` into `ProcessedProfileData`
pub struct ProfileDataProcessor;

impl ProfileDataProcessor {
    /// Normalize a fitness profile
    #[must_use]
    pub fn process(profile: &FitnessProfileInput) -> ProcessedProfileData {
        ProcessedProfileData {
            goals: profile.goals.as_ref().and_then(Self::goals),
            metrics: profile.metrics.as_ref().and_then(Self::metrics),
            equipment: profile.equipment.as_ref().and_then(Self::equipment),
            availability: profile.availability.as_ref().and_then(Self::availability),
            constraints: Self::constraints(&profile.constraints),
            preferences: profile.preferences.as_ref().and_then(Self::preferences),
            current_training: profile
                .current_training
                .as_ref()
                .and_then(Self::current_training),
            activity_data: profile
                .activity_data
                .as_ref()
                .and_then(ActivityDataDiscriminator::classify),
        }
    }

    /// Normalize the goals sub-record
    #[must_use]
    pub fn goals(input: &GoalsInput) -> Option<ProcessedGoals> {
        informative(ProcessedGoals {
            primary_goal: text(input.primary_goal.as_deref()),
            specific_objective: text(input.specific_objective.as_deref()),
            experience_level: text(input.experience_level.as_deref()),
            current_activity: text(input.current_activity.as_deref()),
            target_event_date: input.target_event_date.as_ref().and_then(|raw| {
                let date = raw.to_date();
                if date.is_none() {
                    debug!(field = "goals.targetEventDate", value = ?raw, "Rejected unparseable date");
                }
                date
            }),
            timeline_weeks: positive_whole(input.timeline_weeks.as_ref(), "goals.timelineWeeks"),
        })
    }

    /// Normalize the metrics sub-record
    #[must_use]
    pub fn metrics(input: &MetricsInput) -> Option<ProcessedMetrics> {
        informative(ProcessedMetrics {
            height_cm: positive(input.height.as_ref(), "metrics.height"),
            bodyweight: input
                .bodyweight
                .as_ref()
                .and_then(|raw| Self::measurement(raw, "metrics.bodyweight")),
            body_fat_percent: percentage(input.body_fat_percent.as_ref(), "metrics.bodyFatPercent"),
            pr_lifts: input
                .pr_lifts
                .iter()
                .filter_map(|(name, lift)| Self::lift(name, lift))
                .collect(),
        })
    }

    fn measurement(raw: &MeasurementInput, field: &'static str) -> Option<Measurement> {
        match raw {
            MeasurementInput::Structured { value, unit } => {
                let unit = Self::unit(unit.as_deref(), field)?;
                let value = positive(value.as_ref(), field)?;
                Some(Measurement { value, unit })
            }
            MeasurementInput::Bare(Scalar::Text(text_value)) => {
                Self::measurement_from_text(text_value, field)
            }
            MeasurementInput::Bare(scalar) => positive(Some(scalar), field).map(|value| Measurement {
                value,
                unit: WeightUnit::default(),
            }),
        }
    }

    /// Parse text such as `"180 lbs"` or `"82kg"`
    fn measurement_from_text(raw: &str, field: &'static str) -> Option<Measurement> {
        let trimmed = raw.trim();
        let split = trimmed
            .find(|c: char| c.is_alphabetic())
            .unwrap_or(trimmed.len());
        let (number_part, unit_part) = trimmed.split_at(split);
        let unit = Self::unit(Some(unit_part), field)?;
        let value = positive(Some(&Scalar::from(number_part)), field)?;
        Some(Measurement { value, unit })
    }

    /// Missing unit defaults to pounds; an unrecognized unit rejects the value
    fn unit(raw: Option<&str>, field: &'static str) -> Option<WeightUnit> {
        match raw.map(str::trim).filter(|u| !u.is_empty()) {
            None => Some(WeightUnit::default()),
            Some(tag) => {
                let unit = WeightUnit::from_tag(tag);
                if unit.is_none() {
                    debug!(field, unit = tag, "Rejected measurement with unknown unit");
                }
                unit
            }
        }
    }

    fn lift(name: &str, input: &LiftInput) -> Option<PersonalRecordLift> {
        let Some(name) = text(Some(name)) else {
            debug!("Dropped personal record without a lift name");
            return None;
        };
        let unit = Self::unit(input.unit.as_deref(), "metrics.prLifts.unit")?;
        let Some(weight) = positive(input.weight.as_ref(), "metrics.prLifts.weight") else {
            debug!(lift = %name, "Dropped personal record without a valid weight");
            return None;
        };
        Some(PersonalRecordLift {
            name,
            weight: Measurement {
                value: weight,
                unit,
            },
            reps: positive_whole(input.reps.as_ref(), "metrics.prLifts.reps"),
        })
    }

    /// Normalize the equipment sub-record
    #[must_use]
    pub fn equipment(input: &EquipmentInput) -> Option<ProcessedEquipment> {
        informative(ProcessedEquipment {
            access: text(input.access.as_deref()),
            location: text(input.location.as_deref()),
            available: text_list(&input.available),
            constraints: text_list(&input.constraints),
        })
    }

    /// Normalize the availability sub-record
    #[must_use]
    pub fn availability(input: &AvailabilityInput) -> Option<ProcessedAvailability> {
        informative(ProcessedAvailability {
            days_per_week: whole_in_range(
                input.days_per_week.as_ref(),
                "availability.daysPerWeek",
                u32::from(MIN_DAYS_PER_WEEK),
                u32::from(MAX_DAYS_PER_WEEK),
            )
            .map(|days| days as u8),
            minutes_per_session: positive_whole(
                input.minutes_per_session.as_ref(),
                "availability.minutesPerSession",
            ),
            preferred_times: text_list(&input.preferred_times),
            travel_pattern: text(input.travel_pattern.as_deref()),
            notes: text(input.notes.as_deref()),
        })
    }

    /// Normalize the constraint list, keeping intake order
    #[must_use]
    pub fn constraints(inputs: &[ConstraintInput]) -> Option<Vec<ProcessedConstraint>> {
        let constraints: Vec<ProcessedConstraint> = inputs
            .iter()
            .enumerate()
            .filter_map(|(index, input)| Self::constraint(index, input))
            .collect();
        informative(constraints)
    }

    fn constraint(index: usize, input: &ConstraintInput) -> Option<ProcessedConstraint> {
        let Some(label) = text(input.label.as_deref()) else {
            debug!(index, "Dropped constraint without a label");
            return None;
        };
        Some(ProcessedConstraint {
            id: text(input.id.as_deref())
                .unwrap_or_else(|| format!("{CONSTRAINT_ID_PREFIX}{}", index + 1)),
            constraint_type: input
                .constraint_type
                .as_deref()
                .map_or(ConstraintType::Other, ConstraintType::from_tag),
            label,
            severity: input
                .severity
                .as_deref()
                .and_then(ConstraintSeverity::from_tag),
            status: input
                .status
                .as_deref()
                .map_or_else(ConstraintStatus::default, ConstraintStatus::from_tag),
            affected_areas: text_list(&input.affected_areas),
            modifications: text(input.modifications.as_deref()),
        })
    }

    /// Normalize the preferences sub-record
    #[must_use]
    pub fn preferences(input: &PreferencesInput) -> Option<ProcessedPreferences> {
        informative(ProcessedPreferences {
            workout_style: text(input.workout_style.as_deref()),
            enjoyed_exercises: text_list(&input.enjoyed_exercises),
            disliked_exercises: text_list(&input.disliked_exercises),
            coaching_tone: text(input.coaching_tone.as_deref()),
            music_vibe: text(input.music_vibe.as_deref()),
        })
    }

    /// Normalize the current-training sub-record
    #[must_use]
    pub fn current_training(input: &CurrentTrainingInput) -> Option<ProcessedCurrentTraining> {
        informative(ProcessedCurrentTraining {
            program_name: text(input.program_name.as_deref()),
            weeks_completed: non_negative_whole(
                input.weeks_completed.as_ref(),
                "currentTraining.weeksCompleted",
            ),
            focus: text(input.focus.as_deref()),
            notes: text(input.notes.as_deref()),
        })
    }
}
