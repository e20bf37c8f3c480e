// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tparts-core: picks the significant parts of a days/hours/minutes/seconds
//! duration breakdown for display.

pub mod config;
pub mod decomposition;
pub mod label;
pub mod log;
pub mod part;
pub mod select;

pub use config::{ConfigError, SelectorConfig};
pub use decomposition::{Decomposition, DecompositionError};
pub use label::{LabelError, TimeLabel};
pub use log::{NoOpSelectionLog, SelectionLog, TracingSelectionLog};
#[cfg(any(test, feature = "test-support"))]
pub use log::{FakeSelectionLog, SelectionCall};
pub use part::TimePart;
pub use select::{select_significant_parts, Selector, DEFAULT_SIGNIFICANT};
