// ABOUTME: Loosely-typed intake values produced by conversational extraction
// ABOUTME: Scalars, date-like values and string-or-list fields with lenient deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::formatters::format_number;

/// A scalar value as it arrives from intake: number, string or boolean
///
/// Extraction often yields `"180"` where a number was expected, so numeric
/// accessors also accept numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean flag
    Bool(bool),
    /// Any JSON number
    Number(f64),
    /// Free text
    Text(String),
}

impl Scalar {
    /// Numeric reading of this value, if it is a finite number or numeric text
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n).filter(|n| n.is_finite()),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite()),
            Self::Bool(_) => None,
        }
    }

    /// Non-blank text content, trimmed
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.trim()).filter(|t| !t.is_empty()),
            Self::Number(_) | Self::Bool(_) => None,
        }
    }

    /// Whether this value carries no information (blank text or non-finite number)
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(n) => !n.is_finite(),
            Self::Bool(_) => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("Yes"),
            Self::Bool(false) => f.write_str("No"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(text) => f.write_str(text.trim()),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A date-like intake value: RFC 3339 text, `YYYY-MM-DD`, or epoch milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch
    EpochMillis(i64),
    /// Milliseconds since the Unix epoch, sent as a float
    FractionalMillis(f64),
    /// Textual date or timestamp
    Text(String),
}

impl DateInput {
    /// Coerce to a UTC timestamp
    ///
    /// Date-only text resolves to midnight UTC. Negative epoch values and
    /// unparseable text yield `None`.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::EpochMillis(millis) => from_millis(*millis),
            Self::FractionalMillis(millis) => {
                if millis.is_finite() {
                    from_millis(millis.round() as i64)
                } else {
                    None
                }
            }
            Self::Text(text) => parse_datetime_text(text.trim()),
        }
    }

    /// Coerce to a calendar date
    #[must_use]
    pub fn to_date(&self) -> Option<NaiveDate> {
        if let Self::Text(text) = self {
            if let Ok(date) = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d") {
                return Some(date);
            }
        }
        self.to_datetime().map(|dt| dt.date_naive())
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::EpochMillis(value)
    }
}

fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    if millis < 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

fn parse_datetime_text(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Deserialize either a single string or a list of strings into a list
///
/// `null` and a missing field both produce an empty list.
///
/// # Errors
///
/// Returns an error when the value is neither a string, a list of strings, nor null
pub fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    })
}
