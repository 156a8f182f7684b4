// ABOUTME: Integration tests for lenient snapshot ingestion
// ABOUTME: Malformed sub-records drop individually; only unreadable snapshots are errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_profile_dashboard::errors::{ErrorCode, ProfileError};
use pierre_profile_dashboard::models::{FitnessProfileInput, UserInput};
use pierre_profile_dashboard::{ProfileDataProcessor, RawSnapshot};
use pierre_profile_engine::{profile_from_json, user_from_json};
use serde_json::json;

use common::{full_profile_json, full_user_json, init_test_logging, profile_from, user_from};

#[test]
fn test_blank_and_null_snapshots_are_empty() {
    init_test_logging();
    for (user, profile) in [("", ""), ("null", "  null "), ("{}", "{}")] {
        let snapshot = RawSnapshot::from_json_strs(user, profile).unwrap();
        assert_eq!(snapshot, RawSnapshot::default());
    }
}

#[test]
fn test_invalid_json_is_an_error() {
    let error = RawSnapshot::from_json_strs("{ name: Alex", "{}").unwrap_err();
    assert!(matches!(error, ProfileError::InvalidJson { record: "user", .. }));
    assert_eq!(error.code(), ErrorCode::InvalidInput);
}

#[test]
fn test_non_object_root_is_an_error() {
    let error = RawSnapshot::from_json_strs("{}", "[1, 2]").unwrap_err();
    assert!(matches!(
        error,
        ProfileError::NotAnObject {
            record: "profile",
            found: "array"
        }
    ));
    assert_eq!(error.code(), ErrorCode::InvalidFormat);
    assert!(error.to_string().contains("array"));
}

#[test]
fn test_well_formed_snapshot_matches_strict_parse() {
    assert_eq!(user_from_json(&full_user_json()), user_from(full_user_json()));
    assert_eq!(
        profile_from_json(&full_profile_json()),
        profile_from(full_profile_json())
    );
}

#[test]
fn test_malformed_sub_record_is_dropped_alone() {
    let raw = json!({
        "goals": "get strong",
        "metrics": { "height": 180 },
        "availability": { "daysPerWeek": { "min": 3 } },
        "preferences": { "coachingTone": "direct" }
    });

    // A strict parse rejects the whole record
    assert!(serde_json::from_value::<FitnessProfileInput>(raw.clone()).is_err());

    let profile = profile_from_json(&raw);
    assert!(profile.goals.is_none());
    assert!(profile.availability.is_none());
    assert!(profile.metrics.is_some());
    assert!(profile.preferences.is_some());

    let processed = ProfileDataProcessor::process(&profile);
    assert!(processed.goals.is_none());
    assert!(processed.metrics.is_some());
}

#[test]
fn test_malformed_user_field_is_dropped_alone() {
    let user = user_from_json(&json!({
        "name": 42,
        "email": "alex@example.com",
        "preferredSendHour": [6]
    }));
    assert_eq!(user.name, None);
    assert_eq!(user.email.as_deref(), Some("alex@example.com"));
    assert_eq!(user.preferred_send_hour, None);
}

#[test]
fn test_user_field_aliases() {
    let user = user_from_json(&json!({ "phone": "555-0100" }));
    assert_eq!(user.phone_number.as_deref(), Some("555-0100"));
}

#[test]
fn test_constraints_are_read_per_entry() {
    let profile = profile_from_json(&json!({
        "constraints": [
            { "label": "Sore shoulder" },
            "bad entry",
            { "label": "No running", "affectedAreas": 7 },
            { "label": "Bad knee", "type": "injury" }
        ]
    }));
    let labels: Vec<&str> = profile
        .constraints
        .iter()
        .filter_map(|constraint| constraint.label.as_deref())
        .collect();
    assert_eq!(labels, ["Sore shoulder", "Bad knee"]);
}

#[test]
fn test_single_constraint_object_is_accepted() {
    let profile = profile_from_json(&json!({
        "constraints": { "label": "Bad knee", "type": "injury" }
    }));
    assert_eq!(profile.constraints.len(), 1);

    let scalar = profile_from_json(&json!({ "constraints": "none" }));
    assert!(scalar.constraints.is_empty());
}

#[test]
fn test_non_object_values_read_as_empty() {
    assert_eq!(user_from_json(&json!("Alex")), UserInput::default());
    assert_eq!(profile_from_json(&json!(null)), FitnessProfileInput::default());
}
