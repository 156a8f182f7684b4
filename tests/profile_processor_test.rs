// ABOUTME: Integration tests for fitness profile normalization
// ABOUTME: All-or-nothing sub-records, numeric coercion, units, lifts and constraint defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use pierre_profile_dashboard::models::{
    ConstraintSeverity, ConstraintStatus, ConstraintType, FitnessProfileInput, Measurement,
    PopulatedFields, ProcessedProfileData, WeightUnit,
};
use pierre_profile_dashboard::ProfileDataProcessor;
use serde_json::{json, Value};

use common::{full_profile_json, init_test_logging, profile_from};

fn process(value: Value) -> ProcessedProfileData {
    ProfileDataProcessor::process(&profile_from(value))
}

#[test]
fn test_empty_profile_has_no_groups() {
    init_test_logging();
    let processed = ProfileDataProcessor::process(&FitnessProfileInput::default());
    assert!(processed.is_empty());
    assert_eq!(processed, ProcessedProfileData::default());
}

#[test]
fn test_full_profile_keeps_every_group() {
    let processed = process(full_profile_json());

    let goals = processed.goals.as_ref().unwrap();
    assert_eq!(goals.primary_goal.as_deref(), Some("strength"));
    assert_eq!(
        goals.target_event_date,
        NaiveDate::from_ymd_opt(2026, 6, 1)
    );
    assert_eq!(goals.timeline_weeks, Some(24));

    assert!(processed.metrics.is_some());
    assert!(processed.equipment.is_some());
    assert!(processed.availability.is_some());
    assert_eq!(processed.constraints.as_ref().map(Vec::len), Some(2));
    assert!(processed.preferences.is_some());
    assert!(processed.current_training.is_some());
    assert!(processed.activity_data.is_some());
}

#[test]
fn test_blank_sub_record_is_absent() {
    let processed = process(json!({
        "goals": { "primaryGoal": "  ", "specificObjective": "" },
        "equipment": { "available": [] },
        "preferences": {}
    }));
    assert!(processed.goals.is_none());
    assert!(processed.equipment.is_none());
    assert!(processed.preferences.is_none());
    assert!(processed.is_empty());
}

#[test]
fn test_sub_record_with_only_invalid_values_is_absent() {
    let processed = process(json!({
        "metrics": { "height": -180, "bodyweight": { "value": 0 } },
        "availability": { "daysPerWeek": 9, "minutesPerSession": 0 }
    }));
    assert!(processed.metrics.is_none());
    assert!(processed.availability.is_none());
}

#[test]
fn test_body_fat_is_clamped() {
    let metrics = process(json!({ "metrics": { "bodyFatPercent": 150 } }))
        .metrics
        .unwrap();
    assert_eq!(metrics.body_fat_percent, Some(100.0));

    let metrics = process(json!({ "metrics": { "height": 180, "bodyFat": -3 } }))
        .metrics
        .unwrap();
    assert_eq!(metrics.body_fat_percent, Some(0.0));
    assert_eq!(metrics.populated_fields(), 2);
}

#[test]
fn test_zero_body_fat_alone_is_not_informative() {
    assert!(process(json!({ "metrics": { "bodyFatPercent": -5 } }))
        .metrics
        .is_none());
    assert!(process(json!({ "metrics": { "bodyFatPercent": 0 } }))
        .metrics
        .is_none());
}

#[test]
fn test_bodyweight_shapes_and_units() {
    let weight = |value: Value| {
        process(json!({ "metrics": { "bodyweight": value } }))
            .metrics
            .and_then(|metrics| metrics.bodyweight)
    };

    assert_eq!(
        weight(json!(180)),
        Some(Measurement {
            value: 180.0,
            unit: WeightUnit::Lbs
        })
    );
    assert_eq!(
        weight(json!("82kg")),
        Some(Measurement {
            value: 82.0,
            unit: WeightUnit::Kg
        })
    );
    assert_eq!(
        weight(json!({ "value": "72.5", "unit": "Kilograms" })),
        Some(Measurement {
            value: 72.5,
            unit: WeightUnit::Kg
        })
    );
    assert_eq!(weight(json!({ "value": 12, "unit": "stone" })), None);
    assert_eq!(weight(json!("heavy")), None);
    assert_eq!(weight(json!(-10)), None);
}

#[test]
fn test_measurement_display() {
    let bodyweight = process(json!({ "metrics": { "bodyweight": "180 lbs" } }))
        .metrics
        .unwrap()
        .bodyweight
        .unwrap();
    assert_eq!(bodyweight.to_string(), "180 lbs");
}

#[test]
fn test_pr_lifts_are_validated_and_ordered() {
    let metrics = process(json!({
        "metrics": {
            "prLifts": {
                "squat": { "weight": 315, "reps": 3 },
                "bench": { "weight": "225", "unit": "lb", "reps": 0 },
                "deadlift": { "reps": 5 },
                "press": { "weight": 100, "unit": "stone" }
            }
        }
    }))
    .metrics
    .unwrap();

    let names: Vec<&str> = metrics.pr_lifts.iter().map(|lift| lift.name.as_str()).collect();
    assert_eq!(names, ["bench", "squat"]);

    assert_eq!(metrics.pr_lifts[0].reps, None);
    assert_eq!(metrics.pr_lifts[1].reps, Some(3));
    assert_eq!(metrics.pr_lifts[1].to_string(), "315 lbs x 3");
    assert_eq!(metrics.pr_lifts[0].to_string(), "225 lbs");
}

#[test]
fn test_availability_bounds() {
    let days = |value: Value| {
        process(json!({ "availability": { "daysPerWeek": value } }))
            .availability
            .and_then(|availability| availability.days_per_week)
    };
    assert_eq!(days(json!(1)), Some(1));
    assert_eq!(days(json!(7)), Some(7));
    assert_eq!(days(json!("3")), Some(3));
    assert_eq!(days(json!(0)), None);
    assert_eq!(days(json!(8)), None);
    assert_eq!(days(json!(2.5)), None);
}

#[test]
fn test_weeks_completed_zero_is_valid() {
    let training = process(json!({
        "currentTraining": { "programName": "Couch to 5K", "weeksCompleted": 0 }
    }))
    .current_training
    .unwrap();
    assert_eq!(training.weeks_completed, Some(0));
    assert_eq!(training.populated_fields(), 2);
}

#[test]
fn test_week_zero_alone_is_not_informative() {
    let processed = process(json!({ "currentTraining": { "weeksCompleted": 0 } }));
    assert!(processed.current_training.is_none());
}

#[test]
fn test_timeline_must_be_positive() {
    let goals = process(json!({
        "goals": { "primaryGoal": "endurance", "timelineWeeks": 0 }
    }))
    .goals
    .unwrap();
    assert_eq!(goals.timeline_weeks, None);
}

#[test]
fn test_constraint_defaults_and_order() {
    let constraints = process(json!({
        "constraints": [
            { "label": "Sore shoulder", "type": "INJURY", "severity": "extreme" },
            { "type": "injury" },
            { "label": "Only weekends", "type": "calendar", "status": "Resolved", "id": "  " }
        ]
    }))
    .constraints
    .unwrap();

    assert_eq!(constraints.len(), 2);

    assert_eq!(constraints[0].id, "constraint-1");
    assert_eq!(constraints[0].constraint_type, ConstraintType::Injury);
    assert_eq!(constraints[0].severity, None);
    assert_eq!(constraints[0].status, ConstraintStatus::Active);

    assert_eq!(constraints[1].id, "constraint-3");
    assert_eq!(constraints[1].label, "Only weekends");
    assert_eq!(constraints[1].constraint_type, ConstraintType::Other);
    assert_eq!(constraints[1].status, ConstraintStatus::Resolved);
}

#[test]
fn test_active_constraints_filter() {
    let processed = process(full_profile_json());
    let active: Vec<&str> = processed
        .active_constraints()
        .map(|constraint| constraint.id.as_str())
        .collect();
    assert_eq!(active, ["knee"]);

    let knee = &processed.constraints.as_ref().unwrap()[0];
    assert_eq!(knee.severity, Some(ConstraintSeverity::Mild));
    assert_eq!(knee.affected_areas, ["knee"]);
}

#[test]
fn test_unlabeled_constraints_leave_group_absent() {
    let processed = process(json!({ "constraints": [{ "type": "injury" }, {}] }));
    assert!(processed.constraints.is_none());
}

#[test]
fn test_list_fields_accept_single_strings() {
    let processed = process(json!({
        "equipment": { "items": "kettlebell" },
        "preferences": { "enjoyedExercises": "swings", "vibe": "lofi" }
    }));
    assert_eq!(processed.equipment.unwrap().available, ["kettlebell"]);

    let preferences = processed.preferences.unwrap();
    assert_eq!(preferences.enjoyed_exercises, ["swings"]);
    assert_eq!(preferences.music_vibe.as_deref(), Some("lofi"));
}

#[test]
fn test_list_entries_are_trimmed() {
    let equipment = process(json!({
        "equipment": { "available": [" bands ", "", "  "] }
    }))
    .equipment
    .unwrap();
    assert_eq!(equipment.available, ["bands"]);
}

#[test]
fn test_processing_is_deterministic() {
    let input = profile_from(full_profile_json());
    assert_eq!(
        ProfileDataProcessor::process(&input),
        ProfileDataProcessor::process(&input)
    );
}
