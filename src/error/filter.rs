//! Filter error module.
//!
//! Errors raised while a visibility filter is applied to query candidates.

use thiserror::Error;

/// Errors that can occur while evaluating a trie filter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The filter pattern could not be compiled.
    #[error("Invalid filter pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as entered
        pattern: String,
        /// Compiler diagnostic
        reason: String,
    },
}

impl FilterError {
    /// Builds an [`FilterError::InvalidPattern`] from a pattern and its diagnostic.
    #[must_use]
    pub fn invalid_pattern(pattern: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}
