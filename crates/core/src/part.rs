// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Selected output record.

use crate::label::TimeLabel;
use serde::{Deserialize, Serialize};

/// A labeled component chosen for display.
///
/// `value` is copied unchanged from the input decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimePart {
    pub label: TimeLabel,
    pub value: u64,
}

impl TimePart {
    pub fn new(label: TimeLabel, value: u64) -> Self {
        Self { label, value }
    }
}
