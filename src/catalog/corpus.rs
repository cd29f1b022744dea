//! Loading method corpora and indexing them.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::{MethodDescriptor, MethodRef};
use crate::data_structures::niihau_trie::{NiihauTrie, NiihauTrieConfig, NiihauTrieError};
use crate::error::SearchResult;

/// Parses a JSON array of method descriptors.
///
/// # Errors
///
/// * [`crate::error::SearchError::Serialization`] for malformed JSON
/// * [`crate::error::SearchError::Trie`] for an entry with a blank name or class
pub fn parse_corpus(json: &str) -> SearchResult<Vec<MethodDescriptor>> {
    let methods: Vec<MethodDescriptor> = serde_json::from_str(json)?;

    for (index, method) in methods.iter().enumerate() {
        if method.name.trim().is_empty() {
            return Err(NiihauTrieError::InvalidEntry {
                index,
                reason: "method name is blank".to_string(),
            }
            .into());
        }
        if method.declaring_class.trim().is_empty() {
            return Err(NiihauTrieError::InvalidEntry {
                index,
                reason: format!("method '{}' has no declaring class", method.name),
            }
            .into());
        }
    }

    Ok(methods)
}

/// Reads and parses a corpus file.
///
/// # Errors
///
/// IO errors, plus everything [`parse_corpus`] reports.
pub fn load_corpus(path: &Path) -> SearchResult<Vec<MethodDescriptor>> {
    let json = std::fs::read_to_string(path)?;
    let methods = parse_corpus(&json)?;
    info!(path = %path.display(), methods = methods.len(), "Corpus loaded");
    Ok(methods)
}

/// Indexes `methods` by name.
pub fn build_trie<I>(methods: I, config: NiihauTrieConfig) -> NiihauTrie<MethodRef>
where
    I: IntoIterator<Item = MethodDescriptor>,
{
    let trie = NiihauTrie::with_config(config);
    trie.reload(methods.into_iter().map(|m| {
        let method = Arc::new(m);
        (method.name.clone(), method)
    }));
    trie
}
