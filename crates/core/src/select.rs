// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Significant-part selection.
//!
//! Walks the present components in canonical order and keeps at most
//! `significant` of them. Zero-valued days, hours and minutes are skipped
//! while they lead; seconds are always kept, and once anything has been kept
//! every later component is kept too.

use crate::config::SelectorConfig;
use crate::decomposition::Decomposition;
use crate::label::TimeLabel;
use crate::log::{NoOpSelectionLog, SelectionLog, TracingSelectionLog};
use crate::part::TimePart;
use std::fmt;
use std::sync::Arc;

/// Count used when none is configured.
pub const DEFAULT_SIGNIFICANT: usize = 2;

/// Select up to `significant` parts from `decomposition`.
///
/// A count of `0` or `None` yields an empty result. The input is not modified
/// and every call returns a new `Vec`.
pub fn select_significant_parts(
    decomposition: &Decomposition,
    significant: impl Into<Option<usize>>,
) -> Vec<TimePart> {
    let mut remaining = match significant.into() {
        Some(n) if n > 0 => n,
        _ => return Vec::new(),
    };

    let mut parts = Vec::with_capacity(remaining.min(TimeLabel::CANONICAL_ORDER.len()));
    let mut nonzero_found = false;

    for (label, value) in decomposition.iter() {
        if remaining == 0 {
            break;
        }
        if value > 0 || label.is_floor() || nonzero_found {
            nonzero_found = true;
            parts.push(TimePart::new(label, value));
            remaining -= 1;
        }
    }

    parts
}

/// Selection with a stored default count and an injectable diagnostic log.
#[derive(Clone)]
pub struct Selector {
    significant: usize,
    log: Arc<dyn SelectionLog>,
}

impl Selector {
    /// A selector keeping `significant` parts, with logging disabled.
    pub fn new(significant: usize) -> Self {
        Self {
            significant,
            log: Arc::new(NoOpSelectionLog),
        }
    }

    /// Build from loaded configuration.
    ///
    /// `trace = true` installs [`TracingSelectionLog`].
    pub fn from_config(config: &SelectorConfig) -> Self {
        let selector = Self::new(config.significant);
        if config.trace {
            selector.with_log(TracingSelectionLog)
        } else {
            selector
        }
    }

    /// Replace the diagnostic log.
    pub fn with_log(mut self, log: impl SelectionLog + 'static) -> Self {
        self.log = Arc::new(log);
        self
    }

    pub fn significant(&self) -> usize {
        self.significant
    }

    /// Select using the stored count.
    pub fn select(&self, decomposition: &Decomposition) -> Vec<TimePart> {
        self.select_with(decomposition, self.significant)
    }

    /// Select using `significant` for this call only.
    pub fn select_with(
        &self,
        decomposition: &Decomposition,
        significant: impl Into<Option<usize>>,
    ) -> Vec<TimePart> {
        let parts = select_significant_parts(decomposition, significant);
        self.log.record(decomposition, &parts);
        parts
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNIFICANT)
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("significant", &self.significant)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
