// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logs for selection calls

mod noop;
mod traced;

pub use noop::NoOpSelectionLog;
pub use traced::TracingSelectionLog;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSelectionLog, SelectionCall};

use crate::decomposition::Decomposition;
use crate::part::TimePart;

/// Receives the input and result of every selection made through a
/// [`Selector`](crate::Selector).
pub trait SelectionLog: Send + Sync {
    fn record(&self, input: &Decomposition, result: &[TimePart]);
}
