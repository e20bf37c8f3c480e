//! Leading zero suppression and the seconds floor.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn leading_zeros_skipped_until_first_nonzero() {
    let result = select(json!({"days": 0, "hours": 0, "minutes": 5, "seconds": 30}), 2);
    assert_eq!(labels(&result), vec!["minutes", "seconds"]);
}

#[test]
fn zeros_after_first_nonzero_are_kept() {
    let result = select(json!({"days": 1, "hours": 0, "minutes": 0, "seconds": 30}), 4);
    assert_eq!(
        result,
        parts(&[("days", 1), ("hours", 0), ("minutes", 0), ("seconds", 30)])
    );
}

#[test]
fn zero_seconds_kept_after_minutes() {
    let result = select(json!({"days": 0, "hours": 0, "minutes": 15, "seconds": 0}), 2);
    assert_eq!(result, parts(&[("minutes", 15), ("seconds", 0)]));
}

#[test]
fn seconds_alone_with_spare_budget() {
    let result = select(json!({"days": 0, "hours": 0, "minutes": 0, "seconds": 45}), 2);
    assert_eq!(result, parts(&[("seconds", 45)]));
}

#[test]
fn missing_seconds_removes_the_floor() {
    let result = select(json!({"days": 0, "hours": 0, "minutes": 0}), 3);
    assert!(result.is_empty());
}

#[test]
fn missing_seconds_still_keeps_nonzero() {
    let result = select(json!({"days": 0, "hours": 6, "minutes": 0}), 3);
    assert_eq!(result, parts(&[("hours", 6), ("minutes", 0)]));
}
