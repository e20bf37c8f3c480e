//! Test helpers for behavioral specifications.
//!
//! Inputs are written as JSON objects so specs read like the mappings callers
//! hand over; expectations are written as `(label, value)` pairs.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use serde_json::json;
pub use tparts_core::{
    select_significant_parts, Decomposition, DecompositionError, FakeSelectionLog, Selector,
    SelectorConfig, TimeLabel, TimePart,
};

/// Parse a JSON object into a decomposition, panicking on malformed input.
pub fn decomposition(value: serde_json::Value) -> Decomposition {
    Decomposition::from_json(&value)
        .unwrap_or_else(|e| panic!("invalid decomposition {value}: {e}"))
}

/// Select from a JSON object.
pub fn select(value: serde_json::Value, significant: usize) -> Vec<TimePart> {
    select_significant_parts(&decomposition(value), significant)
}

/// Build expected output from `(label, value)` pairs.
pub fn parts(expected: &[(&str, u64)]) -> Vec<TimePart> {
    expected
        .iter()
        .map(|&(label, value)| TimePart::new(label.parse().unwrap(), value))
        .collect()
}

/// Labels of a selection, in output order.
pub fn labels(result: &[TimePart]) -> Vec<&'static str> {
    result.iter().map(|p| p.label.as_str()).collect()
}
