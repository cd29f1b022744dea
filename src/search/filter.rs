//! Visibility filters applied to trie matches at query time.
//!
//! The trie narrows candidates by spelling; a filter narrows them further by
//! any predicate over the payload, such as "declared in a class matching X".

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use regex::Regex;

use super::query::QuerySource;
use crate::error::FilterError;

/// Result type for filter evaluation.
pub type FilterResult<T> = Result<T, FilterError>;

/// Predicate deciding whether a payload is shown.
pub trait TrieFilter<V>: Send + Sync {
    /// Whether `value` passes the filter.
    ///
    /// # Errors
    ///
    /// Fails when the filter's own configuration is unusable, e.g. a pattern
    /// that does not compile. Such a failure is never read as "hidden" or
    /// "visible".
    fn is_visible(&self, value: &V) -> FilterResult<bool>;

    /// Checks the filter's configuration before any payload is seen.
    ///
    /// Lets a broken filter fail even when a query has no matches to
    /// evaluate. Stateless predicates have nothing to check.
    fn validate(&self) -> FilterResult<()> {
        Ok(())
    }
}

impl<V, F> TrieFilter<V> for F
where
    F: Fn(&V) -> bool + Send + Sync,
{
    fn is_visible(&self, value: &V) -> FilterResult<bool> {
        Ok(self(value))
    }
}

/// Filter that lets every payload through.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<V> TrieFilter<V> for AcceptAll {
    fn is_visible(&self, _value: &V) -> FilterResult<bool> {
        Ok(true)
    }
}

/// Regex filter over one text field of the payload.
///
/// The pattern is read from a live [`QuerySource`] on every evaluation, so a
/// settings field can change it between queries. A missing or blank pattern
/// shows everything. The pattern is unanchored: it may match anywhere in the
/// field.
pub struct PatternFilter<V> {
    pattern: Arc<dyn QuerySource>,
    field: Arc<dyn Fn(&V) -> String + Send + Sync>,
    compiled: Mutex<Option<(String, Regex)>>,
}

impl<V> PatternFilter<V> {
    /// Creates a filter matching `pattern` against `field(payload)`.
    pub fn new<Q, F>(pattern: Q, field: F) -> Self
    where
        Q: QuerySource + 'static,
        F: Fn(&V) -> String + Send + Sync + 'static,
    {
        Self {
            pattern: Arc::new(pattern),
            field: Arc::new(field),
            compiled: Mutex::new(None),
        }
    }

    /// Returns the regex for the current pattern text, compiling it only when
    /// the text changed since the last call. `None` means no active pattern.
    fn current_regex(&self) -> FilterResult<Option<Regex>> {
        let Some(text) = self.pattern.current() else {
            return Ok(None);
        };
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let mut cache = self.compiled.lock();
        if let Some((cached, regex)) = cache.as_ref() {
            if cached == text {
                return Ok(Some(regex.clone()));
            }
        }

        let regex = Regex::new(text).map_err(|e| FilterError::invalid_pattern(text, e))?;
        *cache = Some((text.to_string(), regex.clone()));
        Ok(Some(regex))
    }
}

impl<V> fmt::Debug for PatternFilter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternFilter")
            .field("pattern", &self.pattern.current())
            .finish_non_exhaustive()
    }
}

impl<V> TrieFilter<V> for PatternFilter<V> {
    fn is_visible(&self, value: &V) -> FilterResult<bool> {
        match self.current_regex()? {
            Some(regex) => Ok(regex.is_match(&(self.field)(value))),
            None => Ok(true),
        }
    }

    /// Fails with [`FilterError::InvalidPattern`] when the current pattern
    /// does not compile.
    fn validate(&self) -> FilterResult<()> {
        self.current_regex().map(|_| ())
    }
}
