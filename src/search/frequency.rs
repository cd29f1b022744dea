//! Per-first-character frequency statistics over a trie.

use std::fmt;

use serde::Serialize;

use crate::data_structures::niihau_trie::NiihauTrie;

/// Payload counts per leading character, ordered by character.
///
/// Payloads stored under the empty key have no leading character; they are
/// kept in a separate root bucket and still count towards the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyReport {
    root: usize,
    entries: Vec<(char, usize)>,
    total: usize,
}

impl FrequencyReport {
    /// Builds a report from one snapshot of `trie`. Recomputed on every call.
    pub fn from_trie<V>(trie: &NiihauTrie<V>) -> Self {
        let (root, entries) = trie.branch_snapshot();
        Self::from_parts(root, entries)
    }

    /// Builds a report from `(character, count)` pairs with an empty root bucket.
    pub fn from_counts(entries: Vec<(char, usize)>) -> Self {
        Self::from_parts(0, entries)
    }

    /// Builds a report from a root payload count and `(character, count)` pairs.
    pub fn from_parts(root: usize, mut entries: Vec<(char, usize)>) -> Self {
        entries.sort_by_key(|(c, _)| *c);
        let branches: usize = entries.iter().map(|(_, n)| n).sum();
        Self {
            root,
            entries,
            total: root + branches,
        }
    }

    /// Payloads stored under the empty key.
    pub fn root_count(&self) -> usize {
        self.root
    }

    /// `(character, count)` pairs in character order.
    pub fn entries(&self) -> &[(char, usize)] {
        &self.entries
    }

    /// Count for `c`, zero if no key starts with it.
    pub fn count(&self, c: char) -> usize {
        self.entries
            .binary_search_by_key(&c, |(ch, _)| *ch)
            .map_or(0, |i| self.entries[i].1)
    }

    /// Sum over all characters plus the root bucket.
    pub fn total(&self) -> usize {
        self.total
    }
}

impl fmt::Display for FrequencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root > 0 {
            writeln!(f, "(empty key) (elements = {})", self.root)?;
        }
        for (c, n) in &self.entries {
            writeln!(f, "{c} (elements = {n})")?;
        }
        write!(f, "total = {}", self.total)
    }
}
