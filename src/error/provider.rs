//! Provider error module.
//!
//! Errors surfaced by a data provider while it answers a query.

use super::filter::FilterError;
use thiserror::Error;

/// Errors that can occur while a provider builds a result page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The requested sort key has no registered comparator.
    #[error("Unknown sort key '{key}' (known keys: {})", known.join(", "))]
    UnknownSortKey {
        /// The key that was requested
        key: String,
        /// Keys the sorter does know, in registration order
        known: Vec<String>,
    },

    /// The visibility filter failed while narrowing candidates.
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),
}
