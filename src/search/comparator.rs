//! Directional comparators and sort requests.
//!
//! A comparator is built from a single "compare ascending" function; the
//! descending order is derived by reversing its result, so
//! `descending(a, b) == ascending(a, b).reverse()` holds exactly, equal keys
//! included.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Shared ascending comparison function.
pub type CompareFn<V> = Arc<dyn Fn(&V, &V) -> Ordering + Send + Sync>;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Builds a direction from an "ascending?" flag.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A requested ordering: which sort key, and which way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    /// Sort key identifier, e.g. a column name
    pub key: String,
    /// Requested direction
    pub direction: SortDirection,
}

impl SortSpec {
    /// Creates a sort request.
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Ascending sort on `key`.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Descending sort on `key`.
    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// Whether the request is ascending.
    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Ascending
    }
}

/// Total order over payloads in one direction.
pub struct DirectionalComparator<V> {
    ascending: CompareFn<V>,
    direction: SortDirection,
}

impl<V> DirectionalComparator<V> {
    /// Wraps an existing ascending comparison.
    pub fn from_shared(ascending: CompareFn<V>, direction: SortDirection) -> Self {
        Self {
            ascending,
            direction,
        }
    }

    /// Creates a comparator from a "compare ascending" function.
    pub fn new<F>(ascending: F, direction: SortDirection) -> Self
    where
        F: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(ascending), direction)
    }

    /// Orders payloads by an extracted key.
    pub fn by_key<K, F>(extract: F, direction: SortDirection) -> Self
    where
        K: Ord,
        F: Fn(&V) -> K + Send + Sync + 'static,
    {
        Self::new(move |a, b| extract(a).cmp(&extract(b)), direction)
    }

    /// The direction this comparator sorts in.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Same ordering, opposite direction.
    pub fn reversed(&self) -> Self {
        Self::from_shared(Arc::clone(&self.ascending), self.direction.flip())
    }

    /// Compares two payloads in this comparator's direction.
    pub fn compare(&self, a: &V, b: &V) -> Ordering {
        let ordering = (self.ascending)(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Breaks ties of `self` with `next`, each keeping its own direction.
    pub fn then(self, next: DirectionalComparator<V>) -> Self
    where
        V: 'static,
    {
        Self::new(
            move |a, b| self.compare(a, b).then_with(|| next.compare(a, b)),
            SortDirection::Ascending,
        )
    }

    /// Stable sort of `items`: equal payloads keep their incoming order.
    pub fn sort(&self, items: &mut [V]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl<V> Clone for DirectionalComparator<V> {
    fn clone(&self) -> Self {
        Self::from_shared(Arc::clone(&self.ascending), self.direction)
    }
}

impl<V> fmt::Debug for DirectionalComparator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionalComparator")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}
