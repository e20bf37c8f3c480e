// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time component labels and their canonical order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a label string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("unknown time label '{0}' (expected days, hours, minutes or seconds)")]
    Unknown(String),
}

/// One component of a duration decomposition.
///
/// Variants are declared in canonical order, so `Ord` sorts them
/// `Days < Hours < Minutes < Seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeLabel {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeLabel {
    /// Every label, largest unit first.
    pub const CANONICAL_ORDER: [TimeLabel; 4] = [
        TimeLabel::Days,
        TimeLabel::Hours,
        TimeLabel::Minutes,
        TimeLabel::Seconds,
    ];

    /// The lowercase key used in mappings and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeLabel::Days => "days",
            TimeLabel::Hours => "hours",
            TimeLabel::Minutes => "minutes",
            TimeLabel::Seconds => "seconds",
        }
    }

    /// Seconds are always eligible for selection, even when zero.
    pub fn is_floor(&self) -> bool {
        matches!(self, TimeLabel::Seconds)
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeLabel {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CANONICAL_ORDER
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| LabelError::Unknown(s.to_string()))
    }
}

impl AsRef<str> for TimeLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
