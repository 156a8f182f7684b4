// ABOUTME: Lenient JSON ingestion for user and fitness profile snapshots
// ABOUTME: Malformed fields and sub-records are dropped individually instead of failing the record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Snapshot Ingestion
//!
//! Strict `serde` deserialization of a whole `FitnessProfileInput` fails if any
//! nested value has the wrong shape. Intake data is partial and occasionally
//! garbled, so this module reads each user field and each profile sub-record
//! on its own and drops only the part that does not fit.

use pierre_profile_core::errors::{ProfileError, ProfileResult};
use pierre_profile_core::models::{ConstraintInput, FitnessProfileInput, UserInput};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

/// Raw user and profile records read from JSON
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSnapshot {
    /// User record
    pub user: UserInput,
    /// Fitness profile record
    pub profile: FitnessProfileInput,
}

impl RawSnapshot {
    /// Parse both records from JSON text; blank text reads as an empty record
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidJson` when either text is not JSON, or
    /// `ProfileError::NotAnObject` when a root is neither an object nor null
    pub fn from_json_strs(user: &str, profile: &str) -> ProfileResult<Self> {
        let user_value = parse_text(user, "user")?;
        let profile_value = parse_text(profile, "profile")?;
        Self::from_values(&user_value, &profile_value)
    }

    /// Build both records from parsed JSON values
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::NotAnObject` when a root is neither an object nor null
    pub fn from_values(user: &Value, profile: &Value) -> ProfileResult<Self> {
        check_root(user, "user")?;
        check_root(profile, "profile")?;
        Ok(Self {
            user: user_from_json(user),
            profile: profile_from_json(profile),
        })
    }
}

fn parse_text(raw: &str, record: &'static str) -> ProfileResult<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(raw).map_err(|source| ProfileError::InvalidJson { record, source })
}

fn check_root(value: &Value, record: &'static str) -> ProfileResult<()> {
    match value {
        Value::Null | Value::Object(_) => Ok(()),
        other => Err(ProfileError::NotAnObject {
            record,
            found: json_type(other),
        }),
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read the first present key among `keys`, dropping it if its shape is wrong
fn lenient<T: DeserializeOwned>(
    object: &Map<String, Value>,
    keys: &[&'static str],
    record: &'static str,
) -> Option<T> {
    let (key, value) = keys
        .iter()
        .find_map(|key| object.get(*key).map(|value| (*key, value)))?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            debug!(record, key, %error, "Dropped malformed field");
            None
        }
    }
}

/// Build a `UserInput`, keeping every field that parses
///
/// Anything other than a JSON object reads as an empty record.
#[must_use]
pub fn user_from_json(value: &Value) -> UserInput {
    let Some(object) = value.as_object() else {
        return UserInput::default();
    };
    UserInput {
        name: lenient(object, &["name"], "user"),
        email: lenient(object, &["email"], "user"),
        phone_number: lenient(object, &["phoneNumber", "phone"], "user"),
        timezone: lenient(object, &["timezone"], "user"),
        preferred_send_hour: lenient(object, &["preferredSendHour"], "user"),
        created_at: lenient(object, &["createdAt"], "user"),
    }
}

/// Build a `FitnessProfileInput`, keeping every sub-record that parses
///
/// Constraints are read one entry at a time so one bad entry does not hide
/// the rest; a single constraint object is accepted as a one-entry list.
#[must_use]
pub fn profile_from_json(value: &Value) -> FitnessProfileInput {
    let Some(object) = value.as_object() else {
        return FitnessProfileInput::default();
    };
    FitnessProfileInput {
        goals: lenient(object, &["goals"], "profile"),
        metrics: lenient(object, &["metrics"], "profile"),
        equipment: lenient(object, &["equipment"], "profile"),
        availability: lenient(object, &["availability"], "profile"),
        constraints: constraints_from_json(object.get("constraints")),
        preferences: lenient(object, &["preferences"], "profile"),
        current_training: lenient(object, &["currentTraining"], "profile"),
        activity_data: lenient(object, &["activityData"], "profile"),
    }
}

fn constraints_from_json(value: Option<&Value>) -> Vec<ConstraintInput> {
    let entries: Vec<&Value> = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single @ Value::Object(_)) => vec![single],
        Some(other) => {
            debug!(found = json_type(other), "Dropped constraints that are not a list");
            return Vec::new();
        }
    };
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry.clone()) {
            Ok(constraint) => Some(constraint),
            Err(error) => {
                debug!(index, %error, "Dropped malformed constraint");
                None
            }
        })
        .collect()
}
