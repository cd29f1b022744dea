//! Parse error module.
//!
//! Errors raised when a user-supplied label does not name a known value.

use thiserror::Error;

/// Errors produced by the `FromStr` impls behind CLI flags and settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text names no match mode.
    #[error("Unknown match mode '{0}' (expected prefix or substring)")]
    UnknownMatchMode(String),

    /// The text names no result column.
    #[error("Unknown column '{column}' (known columns: {})", known.join(", "))]
    UnknownColumn {
        /// The column as entered
        column: String,
        /// Keys that would have been accepted
        known: Vec<String>,
    },
}
