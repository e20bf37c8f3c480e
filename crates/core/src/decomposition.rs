// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration decomposition input.
//!
//! A [`Decomposition`] holds any subset of the four known components. A
//! component that is `None` is absent from the input, which is distinct from
//! being present with a value of zero.

use crate::label::TimeLabel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from converting untyped input into a [`Decomposition`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompositionError {
    #[error("decomposition must be an object, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid value for {label}: expected a non-negative integer, got {value}")]
    InvalidValue { label: TimeLabel, value: String },
}

/// A duration broken down into days, hours, minutes and seconds.
///
/// Keys outside the four known labels are dropped on construction.
/// Deserializing goes through [`Decomposition::from_json`], so a known key
/// holding `null` or a non-integer is an error rather than an absent key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct Decomposition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u64>,
}

impl Decomposition {
    /// An empty decomposition with no components present.
    pub fn new() -> Self {
        Self::default()
    }

    /// A decomposition with all four components present.
    pub fn full(days: u64, hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            days: Some(days),
            hours: Some(hours),
            minutes: Some(minutes),
            seconds: Some(seconds),
        }
    }

    /// Build from `(key, value)` pairs, dropping unknown keys.
    ///
    /// A repeated key keeps its last value.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, u64)>,
    {
        let mut out = Self::new();
        for (key, value) in entries {
            let key = key.as_ref();
            match key.parse::<TimeLabel>() {
                Ok(label) => out.set(label, value),
                Err(_) => tracing::trace!(key, "ignoring unknown time component"),
            }
        }
        out
    }

    /// Build from a JSON object such as `{"minutes": 5, "seconds": 30}`.
    ///
    /// Unknown keys are ignored whatever their value. A known key must hold a
    /// non-negative integer; negatives, floats, strings and nulls are rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, DecompositionError> {
        let map = value
            .as_object()
            .ok_or_else(|| DecompositionError::NotAnObject(json_kind(value)))?;

        let mut out = Self::new();
        for label in TimeLabel::CANONICAL_ORDER {
            let Some(raw) = map.get(label.as_str()) else {
                continue;
            };
            let n = raw
                .as_u64()
                .ok_or_else(|| DecompositionError::InvalidValue {
                    label,
                    value: raw.to_string(),
                })?;
            out.set(label, n);
        }
        Ok(out)
    }

    /// Set (or overwrite) a component, consuming and returning `self`.
    pub fn with(mut self, label: TimeLabel, value: u64) -> Self {
        self.set(label, value);
        self
    }

    pub fn with_days(self, value: u64) -> Self {
        self.with(TimeLabel::Days, value)
    }

    pub fn with_hours(self, value: u64) -> Self {
        self.with(TimeLabel::Hours, value)
    }

    pub fn with_minutes(self, value: u64) -> Self {
        self.with(TimeLabel::Minutes, value)
    }

    pub fn with_seconds(self, value: u64) -> Self {
        self.with(TimeLabel::Seconds, value)
    }

    /// Set (or overwrite) a component in place.
    pub fn set(&mut self, label: TimeLabel, value: u64) {
        *self.slot_mut(label) = Some(value);
    }

    /// Value of a component, or `None` when absent.
    pub fn get(&self, label: TimeLabel) -> Option<u64> {
        match label {
            TimeLabel::Days => self.days,
            TimeLabel::Hours => self.hours,
            TimeLabel::Minutes => self.minutes,
            TimeLabel::Seconds => self.seconds,
        }
    }

    pub fn contains(&self, label: TimeLabel) -> bool {
        self.get(label).is_some()
    }

    /// Number of components present.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present components in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TimeLabel, u64)> + '_ {
        TimeLabel::CANONICAL_ORDER
            .into_iter()
            .filter_map(move |label| self.get(label).map(|value| (label, value)))
    }

    fn slot_mut(&mut self, label: TimeLabel) -> &mut Option<u64> {
        match label {
            TimeLabel::Days => &mut self.days,
            TimeLabel::Hours => &mut self.hours,
            TimeLabel::Minutes => &mut self.minutes,
            TimeLabel::Seconds => &mut self.seconds,
        }
    }
}

impl TryFrom<serde_json::Value> for Decomposition {
    type Error = DecompositionError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}

impl<K: AsRef<str>> FromIterator<(K, u64)> for Decomposition {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "decomposition_tests.rs"]
mod tests;
