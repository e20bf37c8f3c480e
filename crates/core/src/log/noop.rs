// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op selection log.

use super::SelectionLog;
use crate::decomposition::Decomposition;
use crate::part::TimePart;

/// Selection log that discards everything.
///
/// The default for [`Selector`](crate::Selector).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpSelectionLog;

impl NoOpSelectionLog {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionLog for NoOpSelectionLog {
    fn record(&self, _input: &Decomposition, _result: &[TimePart]) {}
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
