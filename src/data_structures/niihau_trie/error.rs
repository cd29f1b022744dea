//! Error types for the Niihau Trie.
//!
//! Lookups and inserts on the trie itself cannot fail; these errors come from
//! building a trie out of external corpus data.

/// Errors that can occur while loading entries into a Niihau Trie.
#[derive(Debug, thiserror::Error)]
pub enum NiihauTrieError {
    /// A corpus entry could not be turned into a key/payload pair.
    #[error("Invalid corpus entry at position {index}: {reason}")]
    InvalidEntry {
        /// Position of the entry in the corpus.
        index: usize,
        /// Why it was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NiihauTrieError::InvalidEntry {
            index: 3,
            reason: "missing name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid corpus entry at position 3: missing name"
        );
    }
}
