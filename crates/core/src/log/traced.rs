// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Selection log backed by `tracing`

use super::SelectionLog;
use crate::decomposition::Decomposition;
use crate::part::TimePart;

/// Emits one `debug` event per selection with the input and result.
///
/// Nothing is printed unless the host installs a subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSelectionLog;

impl TracingSelectionLog {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionLog for TracingSelectionLog {
    fn record(&self, input: &Decomposition, result: &[TimePart]) {
        tracing::debug!(
            input = ?input,
            result = ?result,
            parts = result.len(),
            "selected significant time parts"
        );
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
