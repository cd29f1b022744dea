//! Sort-key to comparator resolution.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::comparator::{CompareFn, DirectionalComparator, SortSpec};
use crate::error::ProviderError;

/// Resolves a sort request to the comparator that implements it.
pub trait ProviderSorter<V>: Send + Sync {
    /// Returns the comparator for `sort`.
    ///
    /// # Errors
    ///
    /// [`ProviderError::UnknownSortKey`] when no comparator is registered
    /// under `sort.key`. Implementations must not fall back to a default.
    fn comparator_for(&self, sort: &SortSpec) -> Result<DirectionalComparator<V>, ProviderError>;
}

/// Sorter backed by a table of named ascending comparisons.
///
/// ```
/// use mauka_search_lib::search::{KeyedSorter, ProviderSorter, SortSpec};
///
/// let sorter = KeyedSorter::<String>::new()
///     .with_key("TEXT", |a, b| a.cmp(b))
///     .with_key("LENGTH", |a, b| a.len().cmp(&b.len()));
///
/// let cmp = sorter.comparator_for(&SortSpec::descending("LENGTH")).unwrap();
/// assert!(cmp.compare(&"abc".to_string(), &"a".to_string()).is_lt());
/// assert!(sorter.comparator_for(&SortSpec::ascending("NAME")).is_err());
/// ```
pub struct KeyedSorter<V> {
    comparators: Vec<(String, CompareFn<V>)>,
}

impl<V> KeyedSorter<V> {
    /// Creates a sorter with no keys.
    pub fn new() -> Self {
        Self {
            comparators: Vec::new(),
        }
    }

    /// Registers the ascending comparison for `key`, replacing any earlier one.
    pub fn with_key<F>(mut self, key: impl Into<String>, ascending: F) -> Self
    where
        F: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
    {
        self.register(key, ascending);
        self
    }

    /// Registers the ascending comparison for `key`, replacing any earlier one.
    pub fn register<F>(&mut self, key: impl Into<String>, ascending: F)
    where
        F: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
    {
        let key = key.into();
        let ascending: CompareFn<V> = Arc::new(ascending);
        match self.comparators.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = ascending,
            None => self.comparators.push((key, ascending)),
        }
    }

    /// Registered keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.comparators.iter().map(|(k, _)| k.as_str())
    }
}

impl<V> Default for KeyedSorter<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for KeyedSorter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedSorter")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<V> ProviderSorter<V> for KeyedSorter<V> {
    fn comparator_for(&self, sort: &SortSpec) -> Result<DirectionalComparator<V>, ProviderError> {
        self.comparators
            .iter()
            .find(|(key, _)| *key == sort.key)
            .map(|(_, ascending)| {
                DirectionalComparator::from_shared(Arc::clone(ascending), sort.direction)
            })
            .ok_or_else(|| ProviderError::UnknownSortKey {
                key: sort.key.clone(),
                known: self.keys().map(str::to_string).collect(),
            })
    }
}
