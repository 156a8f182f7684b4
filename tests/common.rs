// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging setup plus canonical user and fitness profile snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_profile_dashboard`
//!
//! Fixtures are written as JSON so they read like real intake snapshots.

use std::env;
use std::sync::Once;

use pierre_profile_dashboard::models::{
    FitnessProfileInput, ProcessedProfileData, ProcessedUserData, UserInput,
};
use pierre_profile_dashboard::{ProfileDataProcessor, UserDataProcessor};
use serde_json::{json, Value};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Deserialize a user record from JSON
pub fn user_from(value: Value) -> UserInput {
    serde_json::from_value(value).expect("valid user fixture")
}

/// Deserialize a fitness profile from JSON
pub fn profile_from(value: Value) -> FitnessProfileInput {
    serde_json::from_value(value).expect("valid profile fixture")
}

/// A user record with every tracked field filled in
pub fn full_user_json() -> Value {
    json!({
        "name": "Alex Rivera",
        "email": "alex@example.com",
        "phoneNumber": "+1 555 0100",
        "timezone": "America/Denver",
        "preferredSendHour": 6,
        "createdAt": "2025-01-15T08:30:00Z"
    })
}

/// A fitness profile with every sub-record filled in
pub fn full_profile_json() -> Value {
    json!({
        "goals": {
            "primaryGoal": "strength",
            "specificObjective": "Deadlift twice bodyweight",
            "experienceLevel": "intermediate",
            "currentActivity": "powerlifting",
            "targetEventDate": "2026-06-01",
            "timelineWeeks": 24
        },
        "metrics": {
            "height": 180,
            "bodyweight": { "value": 185, "unit": "lbs" },
            "bodyFatPercent": 18,
            "prLifts": {
                "squat": { "weight": 315, "unit": "lbs", "reps": 3 },
                "deadlift": { "weight": 405, "reps": 1 }
            }
        },
        "equipment": {
            "access": "commercial gym",
            "location": "downtown",
            "available": ["barbell", "dumbbells", "rack"],
            "constraints": "no sled"
        },
        "availability": {
            "daysPerWeek": 4,
            "minutesPerSession": 60,
            "preferredTimes": ["morning"],
            "travelPattern": "one week a month",
            "notes": "Early sessions work best"
        },
        "constraints": [
            {
                "id": "knee",
                "type": "injury",
                "label": "Left knee tendinitis",
                "severity": "mild",
                "status": "active",
                "affectedAreas": ["knee"],
                "modifications": "No deep lunges"
            },
            {
                "type": "schedule",
                "label": "Travel week each month",
                "status": "resolved"
            }
        ],
        "preferences": {
            "workoutStyle": "heavy compounds",
            "enjoyedExercises": ["squat", "deadlift"],
            "dislikedExercises": "burpees",
            "coachingTone": "direct",
            "musicVibe": "metal"
        },
        "currentTraining": {
            "programName": "5/3/1",
            "weeksCompleted": 6,
            "focus": "strength",
            "notes": "Deload next week"
        },
        "activityData": {
            "type": "strength",
            "activityName": "Powerlifting",
            "experienceLevel": "intermediate",
            "goals": ["1200 lb total"],
            "equipment": ["belt"],
            "keyMetrics": {
                "trainingDays": 4,
                "benchPress": 225,
                "squat": 315,
                "deadlift": 405
            }
        }
    })
}

/// Fully populated raw records
pub fn full_inputs() -> (UserInput, FitnessProfileInput) {
    (user_from(full_user_json()), profile_from(full_profile_json()))
}

/// Fully populated processed records
pub fn full_processed() -> (ProcessedUserData, ProcessedProfileData) {
    let (user, profile) = full_inputs();
    (
        UserDataProcessor::process(&user),
        ProfileDataProcessor::process(&profile),
    )
}

/// The onboarding example: a name and a strength goal, nothing else
pub fn alex_inputs() -> (UserInput, FitnessProfileInput) {
    (
        user_from(json!({ "name": "Alex" })),
        profile_from(json!({
            "goals": { "primaryGoal": "strength", "experienceLevel": "beginner" }
        })),
    )
}
