// ABOUTME: Coercion helpers shared by the profile processors
// ABOUTME: Trim text, drop blanks, and validate loosely-typed numbers against domain ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Value coercion shared by the processors
//!
//! Every helper returns `None` for a value that should read as absent. A
//! rejection is logged at debug level with the field name; missing values are
//! not logged.

use pierre_profile_core::constants::metric_limits::{MAX_PERCENT, MIN_PERCENT};
use pierre_profile_core::models::Scalar;
use tracing::debug;

/// Trimmed text, or `None` when blank
pub fn text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(ToOwned::to_owned)
}

/// Trimmed list entries with blanks removed, input order kept
pub fn text_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn number(value: &Scalar, field: &'static str) -> Option<f64> {
    let parsed = value.as_number();
    if parsed.is_none() && !value.is_blank() {
        debug!(field, value = %value, "Rejected non-numeric value");
    }
    parsed
}

/// A finite number strictly greater than zero
pub fn positive(value: Option<&Scalar>, field: &'static str) -> Option<f64> {
    let n = number(value?, field)?;
    if n > 0.0 {
        Some(n)
    } else {
        debug!(field, value = n, "Rejected non-positive value");
        None
    }
}

/// A whole number in `[min, max]`
pub fn whole_in_range(
    value: Option<&Scalar>,
    field: &'static str,
    min: u32,
    max: u32,
) -> Option<u32> {
    let n = number(value?, field)?;
    if n.fract().abs() > f64::EPSILON {
        debug!(field, value = n, "Rejected fractional value");
        return None;
    }
    if n < f64::from(min) || n > f64::from(max) {
        debug!(field, value = n, min, max, "Rejected out-of-range value");
        return None;
    }
    Some(n as u32)
}

/// A whole number of zero or more
pub fn non_negative_whole(value: Option<&Scalar>, field: &'static str) -> Option<u32> {
    whole_in_range(value, field, 0, u32::MAX)
}

/// A whole number of one or more
pub fn positive_whole(value: Option<&Scalar>, field: &'static str) -> Option<u32> {
    whole_in_range(value, field, 1, u32::MAX)
}

/// A percentage clamped into `[0, 100]`
pub fn percentage(value: Option<&Scalar>, field: &'static str) -> Option<f64> {
    let n = number(value?, field)?;
    let clamped = n.clamp(MIN_PERCENT, MAX_PERCENT);
    if (clamped - n).abs() > f64::EPSILON {
        debug!(field, value = n, clamped, "Clamped percentage into range");
    }
    Some(clamped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_trims_and_drops_blank() {
        assert_eq!(text(Some("  Alex ")), Some("Alex".to_owned()));
        assert_eq!(text(Some("   ")), None);
        assert_eq!(text(None), None);
    }

    #[test]
    fn test_whole_in_range_rejects_fractions_and_bounds() {
        let three = Scalar::from(3);
        let half = Scalar::from(3.5);
        let eight = Scalar::from(8);
        assert_eq!(whole_in_range(Some(&three), "days", 1, 7), Some(3));
        assert_eq!(whole_in_range(Some(&half), "days", 1, 7), None);
        assert_eq!(whole_in_range(Some(&eight), "days", 1, 7), None);
    }

    #[test]
    fn test_numeric_text_is_accepted() {
        let value = Scalar::from(" 72.5 ");
        assert_eq!(positive(Some(&value), "height"), Some(72.5));
    }

    #[test]
    fn test_percentage_clamps_both_ends() {
        assert_eq!(percentage(Some(&Scalar::from(150)), "bf"), Some(100.0));
        assert_eq!(percentage(Some(&Scalar::from(-4)), "bf"), Some(0.0));
        assert_eq!(percentage(Some(&Scalar::from("abc")), "bf"), None);
    }
}
