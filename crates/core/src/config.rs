// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Selector configuration (TOML)

use crate::select::DEFAULT_SIGNIFICANT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading selector configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Defaults for a [`Selector`](crate::Selector).
///
/// ```toml
/// significant = 3
/// trace = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// How many parts to keep. `0` disables selection.
    pub significant: usize,
    /// Report every selection through `tracing` at debug level.
    pub trace: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            significant: DEFAULT_SIGNIFICANT,
            trace: false,
        }
    }
}

impl SelectorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
