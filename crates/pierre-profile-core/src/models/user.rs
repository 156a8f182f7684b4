// ABOUTME: User intake record and its processed form
// ABOUTME: Identity, contact and scheduling attributes gathered during intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::loose::{DateInput, Scalar};
use super::presence::{count_some, PopulatedFields};
use crate::formatters::format_hour;

/// User record as supplied by the intake layer
///
/// Every field is optional; the record may describe a user mid-intake.
///
/// # Examples
///
/// ```rust
/// use pierre_profile_core::models::UserInput;
///
/// let user = UserInput {
///     name: Some("Alex".into()),
///     preferred_send_hour: Some(0.into()),
///     ..UserInput::default()
/// };
/// assert!(user.email.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInput {
    /// Display name
    pub name: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone number
    #[serde(alias = "phone")]
    pub phone_number: Option<String>,
    /// IANA timezone name
    pub timezone: Option<String>,
    /// Preferred hour (0-23) for daily messages
    pub preferred_send_hour: Option<Scalar>,
    /// Account creation timestamp
    pub created_at: Option<DateInput>,
}

/// Normalized user data
///
/// Every field is always serialized; `null` is the single empty marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedUserData {
    /// Display name
    pub name: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone number
    pub phone_number: Option<String>,
    /// IANA timezone name
    pub timezone: Option<String>,
    /// Preferred hour for daily messages; `Some(0)` is midnight, not unset
    pub preferred_send_hour: Option<u8>,
    /// Account creation timestamp
    pub created_at: Option<DateTime<Utc>>,
}

impl ProcessedUserData {
    /// Preferred send hour on a 12-hour clock
    #[must_use]
    pub fn preferred_send_hour_label(&self) -> Option<String> {
        self.preferred_send_hour.map(format_hour)
    }
}

impl PopulatedFields for ProcessedUserData {
    /// Counts the intake fields; `created_at` is account metadata and not counted
    fn populated_fields(&self) -> usize {
        count_some([
            self.name.is_some(),
            self.email.is_some(),
            self.phone_number.is_some(),
            self.timezone.is_some(),
            self.preferred_send_hour.is_some(),
        ])
    }
}
