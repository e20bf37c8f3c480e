//! Accepting decompositions from JSON.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn unknown_keys_are_dropped() {
    let result = select(json!({"weeks": 2, "days": 0, "seconds": 8, "ms": 120}), 3);
    assert_eq!(result, parts(&[("seconds", 8)]));
}

#[test]
fn negative_value_is_rejected() {
    let err = Decomposition::from_json(&json!({"days": 1, "hours": -2})).unwrap_err();
    assert_eq!(
        err,
        DecompositionError::InvalidValue {
            label: TimeLabel::Hours,
            value: "-2".to_string(),
        }
    );
}

#[test]
fn fractional_value_is_rejected() {
    let err = Decomposition::from_json(&json!({"minutes": 0.5})).unwrap_err();
    assert!(matches!(
        err,
        DecompositionError::InvalidValue {
            label: TimeLabel::Minutes,
            ..
        }
    ));
}

#[test]
fn non_object_is_rejected() {
    let err = Decomposition::from_json(&json!([1, 2, 3, 4])).unwrap_err();
    assert_eq!(err.to_string(), "decomposition must be an object, got an array");
}

#[test]
fn serde_and_from_json_agree() {
    let value = json!({"hours": 4, "seconds": 0, "extra": true});
    let via_serde: Decomposition = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(via_serde, decomposition(value));
}

#[test]
fn serde_and_from_json_agree_on_null() {
    let value = json!({"days": 0, "seconds": null});
    let expected = DecompositionError::InvalidValue {
        label: TimeLabel::Seconds,
        value: "null".to_string(),
    };

    assert_eq!(Decomposition::from_json(&value), Err(expected.clone()));

    let err = serde_json::from_value::<Decomposition>(value).unwrap_err();
    assert_eq!(err.to_string(), expected.to_string());
}
