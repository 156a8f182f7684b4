// ABOUTME: Integration tests for section ordering and per-section data counts
// ABOUTME: One descriptor per section, stable priority order and field-count badges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use pierre_profile_dashboard::models::{
    ProcessedProfileData, ProcessedUserData, SectionDescriptor, SectionId,
};
use pierre_profile_dashboard::{ProfileDataProcessor, SectionOrderingEngine, UserDataProcessor};
use pierre_profile_engine::section_data_count;

use common::{alex_inputs, full_processed, init_test_logging};

fn ids(descriptors: &[SectionDescriptor]) -> Vec<SectionId> {
    descriptors.iter().map(|descriptor| descriptor.id).collect()
}

#[test]
fn test_one_descriptor_per_section() {
    init_test_logging();
    let order = SectionOrderingEngine::order(
        &ProcessedUserData::default(),
        &ProcessedProfileData::default(),
    );
    let unique: HashSet<SectionId> = order.iter().map(|descriptor| descriptor.id).collect();
    assert_eq!(order.len(), SectionId::ALL.len());
    assert_eq!(unique.len(), SectionId::ALL.len());
}

#[test]
fn test_order_is_stable_regardless_of_data() {
    let empty = SectionOrderingEngine::order(
        &ProcessedUserData::default(),
        &ProcessedProfileData::default(),
    );
    let (user, profile) = full_processed();
    let full = SectionOrderingEngine::order(&user, &profile);

    let (alex_user, alex_profile) = alex_inputs();
    let alex = SectionOrderingEngine::order(
        &UserDataProcessor::process(&alex_user),
        &ProfileDataProcessor::process(&alex_profile),
    );

    assert_eq!(ids(&empty), SectionId::PRIORITY);
    assert_eq!(ids(&full), SectionId::PRIORITY);
    assert_eq!(ids(&alex), SectionId::PRIORITY);
}

#[test]
fn test_priority_order_starts_with_personal_info() {
    assert_eq!(
        SectionId::PRIORITY,
        [
            SectionId::PersonalInfo,
            SectionId::Goals,
            SectionId::Metrics,
            SectionId::TrainingStatus,
            SectionId::ActivityData,
            SectionId::Equipment,
            SectionId::Availability,
            SectionId::Constraints,
            SectionId::Preferences,
        ]
    );
}

#[test]
fn test_empty_sections_have_no_data() {
    let order = SectionOrderingEngine::order(
        &ProcessedUserData::default(),
        &ProcessedProfileData::default(),
    );
    for descriptor in order {
        assert!(!descriptor.has_data, "{} should be empty", descriptor.id);
        assert_eq!(descriptor.data_count, 0);
    }
}

#[test]
fn test_full_profile_data_counts() {
    let (user, profile) = full_processed();
    let count = |id| section_data_count(id, &user, &profile);

    assert_eq!(count(SectionId::PersonalInfo), 5);
    assert_eq!(count(SectionId::Goals), 6);
    // height, bodyweight, body fat and two lifts
    assert_eq!(count(SectionId::Metrics), 5);
    assert_eq!(count(SectionId::Equipment), 4);
    assert_eq!(count(SectionId::Availability), 5);
    assert_eq!(count(SectionId::Constraints), 2);
    assert_eq!(count(SectionId::Preferences), 5);
    assert_eq!(count(SectionId::TrainingStatus), 4);
    // type, name, experience, goals, equipment and four metrics
    assert_eq!(count(SectionId::ActivityData), 9);
}

#[test]
fn test_has_data_matches_count() {
    let (user, profile) = alex_inputs();
    let user = UserDataProcessor::process(&user);
    let profile = ProfileDataProcessor::process(&profile);

    for descriptor in SectionOrderingEngine::order(&user, &profile) {
        assert_eq!(descriptor.has_data, descriptor.data_count > 0);
    }

    let goals = SectionOrderingEngine::describe(SectionId::Goals, &user, &profile);
    assert!(goals.has_data);
    assert_eq!(goals.data_count, 2);

    let personal = SectionOrderingEngine::describe(SectionId::PersonalInfo, &user, &profile);
    assert_eq!(personal.data_count, 1);
}

#[test]
fn test_section_id_round_trips_through_strings() {
    for id in SectionId::ALL {
        assert_eq!(id.as_str().parse::<SectionId>().unwrap(), id);
        assert_eq!(id.to_string(), id.as_str());
        assert!(!id.title().is_empty());
    }
    assert!("personal_info".parse::<SectionId>().is_err());
}

#[test]
fn test_section_ids_serialize_camel_case() {
    let value = serde_json::to_value(SectionId::TrainingStatus).unwrap();
    assert_eq!(value, "trainingStatus");

    let descriptor = SectionOrderingEngine::describe(
        SectionId::Goals,
        &ProcessedUserData::default(),
        &ProcessedProfileData::default(),
    );
    let value = serde_json::to_value(descriptor).unwrap();
    assert_eq!(value["id"], "goals");
    assert_eq!(value["hasData"], false);
    assert_eq!(value["dataCount"], 0);
}
