// ABOUTME: Validation limits and labels shared across the profile dashboard
// ABOUTME: Pure data constants grouped by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Limits used by the processors when deciding whether a loosely-typed value
//! is displayable, grouped by the sub-record they apply to.

/// Limits for user contact and scheduling fields
pub mod user_limits {
    /// Latest valid preferred send hour (24h clock)
    pub const MAX_SEND_HOUR: u8 = 23;
}

/// Limits for body metrics
pub mod metric_limits {
    /// Lower bound for percentage values
    pub const MIN_PERCENT: f64 = 0.0;
    /// Upper bound for percentage values
    pub const MAX_PERCENT: f64 = 100.0;
}

/// Limits for training availability
pub mod availability_limits {
    /// Fewest training days per week that carries information
    pub const MIN_DAYS_PER_WEEK: u8 = 1;
    /// Days in a week
    pub const MAX_DAYS_PER_WEEK: u8 = 7;
}

/// Identifiers generated during normalization
pub mod identifiers {
    /// Prefix for constraint ids synthesized when the intake omitted one
    pub const CONSTRAINT_ID_PREFIX: &str = "constraint-";
}

/// Weight unit spellings accepted from intake
pub mod units {
    /// Spellings that map to pounds
    pub const POUND_ALIASES: &[&str] = &["lb", "lbs", "pound", "pounds"];
    /// Spellings that map to kilograms
    pub const KILOGRAM_ALIASES: &[&str] = &["kg", "kgs", "kilogram", "kilograms", "kilo", "kilos"];
}
