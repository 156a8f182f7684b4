// ABOUTME: Display helpers for processed profile values
// ABOUTME: Humanized metric labels, compact number rendering and 12-hour clock labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Display formatting for processed profile values
//!
//! These helpers produce the strings the dashboard shows next to a value.
//! They never fail: every input has a rendering.

use std::mem;

/// Turn a metric key into a display label
///
/// Splits camelCase, `snake_case` and kebab-case boundaries and capitalizes
/// each word, so `weeklyMileage` becomes `Weekly Mileage`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut previous: Option<char> = None;

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(mem::take(&mut current));
            }
            previous = None;
            continue;
        }
        let boundary = ch.is_uppercase()
            && previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
        if boundary && !current.is_empty() {
            words.push(mem::take(&mut current));
        }
        current.push(ch);
        previous = Some(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Render a number without a trailing `.0` and with at most two decimals
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let rendered = format!("{value:.2}");
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_owned()
    }
}

/// Render an hour of the day (0-23) on a 12-hour clock, e.g. `6:00 AM`
#[must_use]
pub fn format_hour(hour: u8) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{display}:00 {suffix}")
}
