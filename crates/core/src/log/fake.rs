// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake selection log for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::SelectionLog;
use crate::decomposition::Decomposition;
use crate::part::TimePart;
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCall {
    pub input: Decomposition,
    pub result: Vec<TimePart>,
}

struct FakeSelectionState {
    calls: Vec<SelectionCall>,
}

/// Fake selection log for testing
///
/// Clones share the same recorded calls, so a clone can be handed to a
/// [`Selector`](crate::Selector) and inspected afterwards.
#[derive(Clone)]
pub struct FakeSelectionLog {
    inner: Arc<Mutex<FakeSelectionState>>,
}

impl Default for FakeSelectionLog {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeSelectionState { calls: Vec::new() })),
        }
    }
}

impl FakeSelectionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded selections
    pub fn calls(&self) -> Vec<SelectionCall> {
        self.inner.lock().calls.clone()
    }
}

impl SelectionLog for FakeSelectionLog {
    fn record(&self, input: &Decomposition, result: &[TimePart]) {
        self.inner.lock().calls.push(SelectionCall {
            input: *input,
            result: result.to_vec(),
        });
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
