//! Error module for Mauka Search.
//!
//! This module provides the error handling framework for the whole crate:
//! one explicit error type per component, aggregated into [`SearchError`]
//! for callers that drive several components at once.

use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::data_structures::niihau_trie::NiihauTrieError;

pub mod config;
pub mod filter;
pub mod parse;
pub mod provider;

pub use filter::FilterError;
pub use parse::ParseError;
pub use provider::ProviderError;

/// Result type alias used throughout Mauka Search.
pub type SearchResult<T> = Result<T, SearchError>;

/// Core error enum for Mauka Search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised while answering a query.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A label that names no known value.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Errors raised while building the trie from a corpus.
    #[error("Trie error: {0}")]
    Trie(#[from] NiihauTrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

impl From<FilterError> for SearchError {
    fn from(err: FilterError) -> Self {
        Self::Provider(ProviderError::Filter(err))
    }
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: SearchError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: SearchError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}
