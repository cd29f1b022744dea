//! Data structures for Mauka Search.
//!
//! This module contains the specialized data structures the search core is
//! built on. All implementations adhere to the project requirements:
//! - No unsafe code
//! - Readers never block each other
//! - Mutations are all-or-nothing from a reader's point of view

pub mod niihau_trie;

// Re-export common data structures
pub use niihau_trie::{NiihauTrie, NiihauTrieConfig, NiihauTrieError, NiihauTrieResult};
