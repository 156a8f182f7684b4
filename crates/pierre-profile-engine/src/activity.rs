// ABOUTME: Activity data discriminator dispatching on the closed activity type set
// ABOUTME: Per-activity metric tables, typed extraction with generic fallback, and display views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Activity Data Discriminator
//!
//! Each `ActivityType` owns one [`ActivityEntry`]: a title and an ordered
//! metric table mapping intake keys to semantic kinds. `activity_entry` is an
//! exhaustive match, so a new activity type does not compile until it has an
//! entry; callers never change.
//!
//! Unknown tags resolve to `Other`. A known tag whose `keyMetrics` payload
//! does not match its table degrades to the generic key/scalar rendering.

use pierre_profile_core::constants::metric_limits::{MAX_PERCENT, MIN_PERCENT};
use pierre_profile_core::formatters::humanize_key;
use pierre_profile_core::models::{
    ActivityDataInput, ActivityType, KeyMetric, MetricInterpretation, MetricKind,
    ProcessedActivityData, Scalar,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::normalize::{text, text_list};

/// One row of an activity's metric table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    /// Intake key inside `keyMetrics`
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Semantic type
    pub kind: MetricKind,
}

/// Title and metric table for one activity type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEntry {
    /// Activity type this entry interprets
    pub activity_type: ActivityType,
    /// Section title
    pub title: &'static str,
    /// Metrics in display order; empty for `Other`
    pub metrics: &'static [MetricSpec],
}

const fn metric(key: &'static str, label: &'static str, kind: MetricKind) -> MetricSpec {
    MetricSpec { key, label, kind }
}

const RUNNING: ActivityEntry = ActivityEntry {
    activity_type: ActivityType::Running,
    title: "Running",
    metrics: &[
        metric("weeklyMileage", "Weekly Mileage", MetricKind::Distance),
        metric("longestRun", "Longest Run", MetricKind::Distance),
        metric("averagePace", "Average Pace", MetricKind::Time),
        metric("racesCompleted", "Races Completed", MetricKind::Count),
        metric("trailShare", "Trail Share", MetricKind::Percentage),
    ],
};

const STRENGTH: ActivityEntry = ActivityEntry {
    activity_type: ActivityType::Strength,
    title: "Strength Training",
    metrics: &[
        metric("trainingDays", "Training Days", MetricKind::Count),
        metric("benchPress", "Bench Press", MetricKind::Weight),
        metric("squat", "Squat", MetricKind::Weight),
        metric("deadlift", "Deadlift", MetricKind::Weight),
    ],
};

const HIKING: ActivityEntry = ActivityEntry {
    activity_type: ActivityType::Hiking,
    title: "Hiking",
    metrics: &[
        metric("longestHike", "Longest Hike", MetricKind::Distance),
        metric("elevationGain", "Elevation Gain", MetricKind::Distance),
        metric("packWeight", "Pack Weight", MetricKind::Weight),
        metric("hikesPerMonth", "Hikes per Month", MetricKind::Count),
    ],
};

const CYCLING: ActivityEntry = ActivityEntry {
    activity_type: ActivityType::Cycling,
    title: "Cycling",
    metrics: &[
        metric("weeklyMileage", "Weekly Mileage", MetricKind::Distance),
        metric("longestRide", "Longest Ride", MetricKind::Distance),
        metric("averageSpeed", "Average Speed", MetricKind::Text),
        metric("ftp", "FTP", MetricKind::Count),
    ],
};

const SKIING: ActivityEntry = ActivityEntry {
    activity_type: ActivityType::Skiing,
    title: "Skiing",
    metrics: &[
        metric("daysPerSeason", "Days per Season", MetricKind::Count),
        metric("preferredTerrain", "Preferred Terrain", MetricKind::Text),
        metric("verticalPerDay", "Vertical per Day", MetricKind::Distance),
        metric("skillLevel", "Skill Level", MetricKind::Text),
        metric("offPisteShare", "Off-Piste Share", MetricKind::Percentage),
    ],
};

const OTHER: ActivityEntry = ActivityEntry {
    activity_type: ActivityType::Other,
    title: "Activity",
    metrics: &[],
};

/// Dispatch table lookup; exhaustive over `ActivityType`
#[must_use]
pub const fn activity_entry(activity_type: ActivityType) -> &'static ActivityEntry {
    match activity_type {
        ActivityType::Running => &RUNNING,
        ActivityType::Strength => &STRENGTH,
        ActivityType::Hiking => &HIKING,
        ActivityType::Cycling => &CYCLING,
        ActivityType::Skiing => &SKIING,
        ActivityType::Other => &OTHER,
    }
}

/// One metric prepared for generic display code
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyedMetric {
    /// Intake key
    pub key: String,
    /// Display label
    pub label: String,
    /// Semantic type
    pub kind: MetricKind,
    /// Validated value
    pub value: Scalar,
    /// Rendered value (`"18%"`, `"225"`, `"8:30/mi"`)
    pub display: String,
}

/// Display view of activity data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityView {
    /// Resolved activity type
    pub activity_type: ActivityType,
    /// Section title
    pub title: String,
    /// Experience level in this activity
    pub experience_level: Option<String>,
    /// Activity-specific goals
    pub goals: Vec<String>,
    /// Activity-specific equipment
    pub equipment: Vec<String>,
    /// Metrics in display order
    pub metrics_view: Vec<KeyedMetric>,
    /// Whether the generic key/scalar rendering was used
    pub generic: bool,
}

/// Interprets activity data according to its type tag
pub struct ActivityDataDiscriminator;

impl ActivityDataDiscriminator {
    /// Normalize raw activity data; `None` when nothing informative was supplied
    #[must_use]
    pub fn classify(input: &ActivityDataInput) -> Option<ProcessedActivityData> {
        let tag = text(input.activity_type.as_deref());
        let (activity_type, unknown_tag) = match tag.as_deref() {
            None => (ActivityType::Other, None),
            Some(raw) => ActivityType::from_tag(raw).map_or_else(
                || {
                    debug!(tag = raw, "Unknown activity type, using generic interpretation");
                    (ActivityType::Other, Some(raw))
                },
                |known| (known, None),
            ),
        };

        let activity_name =
            text(input.activity_name.as_deref()).or_else(|| unknown_tag.map(humanize_key));
        let experience_level = text(input.experience_level.as_deref());
        let goals = text_list(&input.goals);
        let equipment = text_list(&input.equipment);

        let payload = input.key_metrics.as_ref();
        let entries = payload.and_then(Value::as_object);
        if payload.is_some_and(|value| !value.is_null()) && entries.is_none() {
            debug!(activity = %activity_type, "keyMetrics is not an object, ignoring payload");
        }

        let (key_metrics, interpretation) =
            Self::extract_metrics(activity_entry(activity_type), entries);

        let informative = tag.is_some()
            || activity_name.is_some()
            || experience_level.is_some()
            || !goals.is_empty()
            || !equipment.is_empty()
            || !key_metrics.is_empty();
        if !informative {
            return None;
        }

        Some(ProcessedActivityData {
            activity_type,
            type_supplied: tag.is_some(),
            activity_name,
            experience_level,
            goals,
            equipment,
            key_metrics,
            interpretation,
        })
    }

    fn extract_metrics(
        entry: &ActivityEntry,
        entries: Option<&Map<String, Value>>,
    ) -> (Vec<KeyMetric>, MetricInterpretation) {
        // Typed as soon as one table key is present; invalid values are dropped, not re-read
        let matched =
            entries.filter(|entries| entry.metrics.iter().any(|def| entries.contains_key(def.key)));
        if let Some(entries) = matched {
            return (Self::typed_metrics(entry, entries), MetricInterpretation::Typed);
        }
        if !entry.metrics.is_empty() && entries.is_some_and(|entries| !entries.is_empty()) {
            debug!(
                activity = %entry.activity_type,
                "keyMetrics does not match the activity table, degrading to generic view"
            );
        }
        (Self::generic_metrics(entries), MetricInterpretation::Generic)
    }

    fn typed_metrics(entry: &ActivityEntry, entries: &Map<String, Value>) -> Vec<KeyMetric> {
        for key in entries
            .keys()
            .filter(|key| entry.metrics.iter().all(|def| def.key != key.as_str()))
        {
            debug!(
                activity = %entry.activity_type,
                metric = %key,
                "Ignoring key metric outside the activity table"
            );
        }
        entry
            .metrics
            .iter()
            .filter_map(|def| {
                let raw = entries.get(def.key).and_then(scalar_from_json)?;
                let value = validate_metric(def.kind, raw);
                if value.is_none() {
                    debug!(metric = def.key, "Rejected key metric value for its kind");
                }
                Some(KeyMetric {
                    key: def.key.to_owned(),
                    kind: def.kind,
                    value: value?,
                })
            })
            .collect()
    }

    fn generic_metrics(entries: Option<&Map<String, Value>>) -> Vec<KeyMetric> {
        entries
            .into_iter()
            .flatten()
            .filter_map(|(key, value)| {
                let value = scalar_from_json(value)?;
                Some(KeyMetric {
                    key: key.clone(),
                    kind: MetricKind::Text,
                    value,
                })
            })
            .collect()
    }

    /// Build the display view for processed activity data
    #[must_use]
    pub fn interpret(data: &ProcessedActivityData) -> ActivityView {
        let entry = activity_entry(data.activity_type);
        let title = match data.activity_type {
            ActivityType::Other => data
                .activity_name
                .clone()
                .unwrap_or_else(|| entry.title.to_owned()),
            _ => entry.title.to_owned(),
        };
        let generic = data.interpretation == MetricInterpretation::Generic;

        let metrics_view = data
            .key_metrics
            .iter()
            .map(|metric| {
                let label = entry
                    .metrics
                    .iter()
                    .find(|def| !generic && def.key == metric.key)
                    .map_or_else(|| humanize_key(&metric.key), |def| def.label.to_owned());
                KeyedMetric {
                    key: metric.key.clone(),
                    label,
                    kind: metric.kind,
                    value: metric.value.clone(),
                    display: display_metric(metric.kind, &metric.value),
                }
            })
            .collect();

        ActivityView {
            activity_type: data.activity_type,
            title,
            experience_level: data.experience_level.clone(),
            goals: data.goals.clone(),
            equipment: data.equipment.clone(),
            metrics_view,
            generic,
        }
    }

    /// Classify and interpret raw activity data in one step
    ///
    /// Input with nothing informative yields the empty generic view.
    #[must_use]
    pub fn interpret_input(input: &ActivityDataInput) -> ActivityView {
        Self::classify(input).map_or_else(
            || ActivityView {
                activity_type: ActivityType::Other,
                title: OTHER.title.to_owned(),
                experience_level: None,
                goals: Vec::new(),
                equipment: Vec::new(),
                metrics_view: Vec::new(),
                generic: true,
            },
            |data| Self::interpret(&data),
        )
    }
}

/// Scalars only; nested objects, arrays, null and blank strings are skipped
fn scalar_from_json(value: &Value) -> Option<Scalar> {
    match value {
        Value::Bool(flag) => Some(Scalar::Bool(*flag)),
        Value::Number(number) => number
            .as_f64()
            .filter(|n| n.is_finite())
            .map(Scalar::Number),
        Value::String(raw) => text(Some(raw)).map(Scalar::Text),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn validate_metric(kind: MetricKind, value: Scalar) -> Option<Scalar> {
    match kind {
        MetricKind::Text => Some(value),
        MetricKind::Count => {
            let n = value.as_number()?;
            (n >= 0.0 && n.fract().abs() < f64::EPSILON).then_some(Scalar::Number(n))
        }
        MetricKind::Percentage => value
            .as_number()
            .map(|n| Scalar::Number(n.clamp(MIN_PERCENT, MAX_PERCENT))),
        MetricKind::Weight | MetricKind::Distance | MetricKind::Time => match value {
            Scalar::Bool(_) => None,
            other => match other.as_number() {
                Some(n) if n >= 0.0 => Some(Scalar::Number(n)),
                Some(_) => None,
                None => Some(other),
            },
        },
    }
}

fn display_metric(kind: MetricKind, value: &Scalar) -> String {
    match (kind, value) {
        (MetricKind::Percentage, Scalar::Number(_)) => format!("{value}%"),
        _ => value.to_string(),
    }
}
