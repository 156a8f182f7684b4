// ABOUTME: Normalizes a partial user record into ProcessedUserData
// ABOUTME: Trims text, validates contact fields and coerces timestamps and the send hour
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_profile_core::constants::user_limits::MAX_SEND_HOUR;
use pierre_profile_core::models::{DateInput, ProcessedUserData, UserInput};
use tracing::debug;

use crate::normalize::{text, whole_in_range};

/// Turns a partial `UserInput` into `ProcessedUserData`
///
/// Total and pure: every input produces a value and nothing is logged above
/// debug level.
pub struct UserDataProcessor;

impl UserDataProcessor {
    /// Normalize a user record
    ///
    /// Blank strings read as absent. A preferred send hour of `0` is midnight
    /// and is kept.
    #[must_use]
    pub fn process(user: &UserInput) -> ProcessedUserData {
        ProcessedUserData {
            name: text(user.name.as_deref()),
            email: text(user.email.as_deref()).filter(|email| Self::plausible_email(email)),
            phone_number: text(user.phone_number.as_deref())
                .filter(|phone| Self::plausible_phone(phone)),
            timezone: text(user.timezone.as_deref()).filter(|tz| Self::plausible_timezone(tz)),
            preferred_send_hour: whole_in_range(
                user.preferred_send_hour.as_ref(),
                "preferredSendHour",
                0,
                u32::from(MAX_SEND_HOUR),
            )
            .map(|hour| hour as u8),
            created_at: user.created_at.as_ref().and_then(|raw| {
                let parsed = raw.to_datetime();
                if parsed.is_none() {
                    Self::log_bad_date(raw);
                }
                parsed
            }),
        }
    }

    fn plausible_email(email: &str) -> bool {
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !valid {
            debug!(field = "email", "Rejected email without local part and domain");
        }
        valid
    }

    fn plausible_phone(phone: &str) -> bool {
        let valid = phone.chars().any(|c| c.is_ascii_digit());
        if !valid {
            debug!(field = "phoneNumber", "Rejected phone number without digits");
        }
        valid
    }

    fn plausible_timezone(timezone: &str) -> bool {
        let valid = !timezone.chars().any(char::is_whitespace);
        if !valid {
            debug!(field = "timezone", timezone, "Rejected timezone containing whitespace");
        }
        valid
    }

    fn log_bad_date(raw: &DateInput) {
        debug!(field = "createdAt", value = ?raw, "Rejected unparseable timestamp");
    }
}
