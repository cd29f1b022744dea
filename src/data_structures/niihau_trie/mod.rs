//! Niihau Trie Implementation
//!
//! This module provides a character trie that stores arbitrary payloads under
//! their string key, with fast prefix lookups and a scanning substring lookup.
//! It is the shared corpus index behind every search session.
//!
//! # Concurrency
//!
//! The whole tree sits behind a single [`parking_lot::RwLock`]. Lookups take
//! the read lock, so any number of readers proceed in parallel; inserts,
//! removals and reloads take the write lock and therefore never interleave
//! with a traversal. A reader sees the corpus either before or after a
//! mutation, never half of one.
//!
//! # Example
//!
//! ```
//! use mauka_search_lib::data_structures::niihau_trie::NiihauTrie;
//!
//! let trie = NiihauTrie::new();
//! trie.insert("add", 1);
//! trie.insert("addAll", 2);
//! trie.insert("subtract", 3);
//!
//! assert_eq!(trie.lookup_prefix("add"), vec![1, 2]);
//! assert_eq!(trie.lookup_substring("bt"), vec![3]);
//! assert_eq!(trie.size(), 3);
//! ```

mod error;
mod node;

use std::borrow::Cow;
use std::collections::BTreeSet;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use error::NiihauTrieError;
use node::TrieNode;

/// Result type for Niihau Trie operations
pub type NiihauTrieResult<T> = Result<T, NiihauTrieError>;

/// Configuration options for the Niihau Trie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NiihauTrieConfig {
    /// Whether keys and queries are matched case-sensitively
    pub case_sensitive: bool,
}

impl Default for NiihauTrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// Root node together with the payload count it holds.
#[derive(Debug)]
struct TrieState<V> {
    root: TrieNode<V>,
    size: usize,
}

impl<V> TrieState<V> {
    fn empty() -> Self {
        Self {
            root: TrieNode::new(),
            size: 0,
        }
    }

    fn push(&mut self, key: &str, value: V) -> bool {
        let node = self.root.descend_or_create(key.chars());
        let is_new = !node.is_terminal();
        node.values.push(value);
        self.size += 1;
        is_new
    }
}

/// Niihau Trie is a character-indexed prefix tree storing payloads of type
/// `V` keyed by their string representation.
///
/// Key features:
/// * Multiple payloads per spelling (e.g. overloaded method names)
/// * Prefix lookup in O(key length) plus the size of the matched subtree
/// * Substring lookup by full scan
/// * Per-first-character branch statistics
/// * Readers never block each other
#[derive(Debug)]
pub struct NiihauTrie<V> {
    /// The root node and payload count
    state: RwLock<TrieState<V>>,

    /// Configuration options
    config: NiihauTrieConfig,
}

impl<V> NiihauTrie<V> {
    /// Creates a new empty `NiihauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(NiihauTrieConfig::default())
    }

    /// Creates a new empty `NiihauTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: NiihauTrieConfig) -> Self {
        Self {
            state: RwLock::new(TrieState::empty()),
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &NiihauTrieConfig {
        &self.config
    }

    /// Applies the case policy to a key or query.
    pub fn normalize<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        }
    }

    /// Inserts a payload under `key`.
    ///
    /// The empty key stores the payload at the root. Inserting a second
    /// payload under an existing key keeps both.
    ///
    /// # Returns
    ///
    /// `true` if no payload was stored under this key before.
    pub fn insert<K>(&self, key: K, value: V) -> bool
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref());
        self.state.write().push(&key, value)
    }

    /// Replaces the whole corpus with `entries`.
    ///
    /// The replacement tree is built before the write lock is taken, so
    /// concurrent readers only ever observe the old or the new corpus.
    ///
    /// # Returns
    ///
    /// The number of payloads in the new corpus.
    pub fn reload<I, K>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        let mut fresh = TrieState::empty();
        for (key, value) in entries {
            let key = self.normalize(key.as_ref());
            fresh.push(&key, value);
        }
        let size = fresh.size;

        *self.state.write() = fresh;
        info!(size, "Trie corpus reloaded");
        size
    }

    /// Removes every payload stored under exactly `key`, pruning branches
    /// that become empty.
    ///
    /// # Returns
    ///
    /// The removed payloads, empty if the key was not present.
    pub fn remove<K>(&self, key: K) -> Vec<V>
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref());
        let chars: Vec<char> = key.chars().collect();

        let mut state = self.state.write();
        let removed = Self::remove_recursive(&mut state.root, &chars);
        state.size -= removed.len();
        removed
    }

    fn remove_recursive(node: &mut TrieNode<V>, chars: &[char]) -> Vec<V> {
        let Some((first, rest)) = chars.split_first() else {
            return std::mem::take(&mut node.values);
        };

        let Some(child) = node.children.get_mut(first) else {
            return Vec::new();
        };

        let removed = Self::remove_recursive(child, rest);
        if child.is_vacant() {
            node.children.remove(first);
        }
        removed
    }

    /// Returns the number of payloads stored in the trie.
    pub fn size(&self) -> usize {
        self.state.read().size
    }

    /// Alias for [`NiihauTrie::size`].
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Checks if the trie holds no payloads.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Clears all entries from the trie.
    pub fn clear(&self) {
        *self.state.write() = TrieState::empty();
    }

    /// Returns the characters labelling the root's direct children.
    pub fn next_node_character_set(&self) -> BTreeSet<char> {
        self.state.read().root.children.keys().copied().collect()
    }

    /// Counts the payloads reachable under the root child labelled `c`.
    pub fn word_count(&self, c: char) -> usize {
        self.state
            .read()
            .root
            .children
            .get(&c)
            .map_or(0, TrieNode::subtree_len)
    }

    /// Returns `(character, payload count)` for every root branch, ordered by
    /// character, all taken from one consistent snapshot.
    pub fn branch_counts(&self) -> Vec<(char, usize)> {
        self.state
            .read()
            .root
            .children
            .iter()
            .map(|(c, child)| (*c, child.subtree_len()))
            .collect()
    }

    /// Returns the number of payloads stored under the empty key together
    /// with [`NiihauTrie::branch_counts`], both read under one lock. The two
    /// parts always sum to [`NiihauTrie::size`] at that instant.
    pub fn branch_snapshot(&self) -> (usize, Vec<(char, usize)>) {
        let state = self.state.read();
        let branches = state
            .root
            .children
            .iter()
            .map(|(c, child)| (*c, child.subtree_len()))
            .collect();
        (state.root.values.len(), branches)
    }
}

impl<V: Clone> NiihauTrie<V> {
    /// Retrieves the payloads stored under exactly `key`.
    pub fn get<K>(&self, key: K) -> Vec<V>
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref());
        let state = self.state.read();
        state
            .root
            .descend(key.chars())
            .map(|node| node.values.clone())
            .unwrap_or_default()
    }

    /// Checks if at least one payload is stored under exactly `key`.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref());
        let state = self.state.read();
        state
            .root
            .descend(key.chars())
            .is_some_and(TrieNode::is_terminal)
    }

    /// Returns every payload whose key starts with `prefix`.
    ///
    /// The empty prefix returns the whole corpus. Results come in depth-first
    /// order: shorter keys before their extensions, siblings by character.
    pub fn lookup_prefix<P>(&self, prefix: P) -> Vec<V>
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref());
        let state = self.state.read();

        let mut result = Vec::new();
        if let Some(node) = state.root.descend(prefix.chars()) {
            node.collect_into(&mut result);
        }
        debug!(prefix = %prefix, matches = result.len(), "Prefix lookup");
        result
    }

    /// Returns every payload whose key contains `fragment` as a contiguous
    /// substring. The empty fragment matches everything.
    ///
    /// A trie only indexes prefixes, so this walks every stored word and is
    /// O(total key length) per call. That is the cost of matching anywhere.
    pub fn lookup_substring<P>(&self, fragment: P) -> Vec<V>
    where
        P: AsRef<str>,
    {
        let fragment = self.normalize(fragment.as_ref());
        let state = self.state.read();

        let mut result = Vec::new();
        state.root.walk(&mut String::new(), &mut |key, value| {
            if key.contains(&*fragment) {
                result.push(value.clone());
            }
        });
        debug!(fragment = %fragment, matches = result.len(), "Substring lookup");
        result
    }

    /// Returns every payload reachable under the root child labelled `c`.
    pub fn word_list(&self, c: char) -> Vec<V> {
        let state = self.state.read();
        let mut result = Vec::new();
        if let Some(child) = state.root.children.get(&c) {
            child.collect_into(&mut result);
        }
        result
    }
}

impl<V> Default for NiihauTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for NiihauTrie<V>
where
    K: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let trie = Self::new();
        trie.reload(iter);
        trie
    }
}
