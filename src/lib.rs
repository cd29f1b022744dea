//! Mauka Search Library
//!
//! This library contains the autocomplete search core: a character trie over
//! a shared corpus, and per-session data providers that filter, sort and
//! paginate trie matches for a live query.
//!
//! # Architecture
//!
//! - [`data_structures::niihau_trie`] indexes payloads by key and answers
//!   prefix and substring lookups
//! - [`search`] turns a query into a [`search::ResultPage`] through a
//!   pluggable filter and sorter, and reports row selections
//! - [`catalog`] is the method-descriptor payload used by the CLI
//! - [`config`] and [`error`] are shared by all of the above
//!
//! The trie is constructed explicitly and handed to each provider behind an
//! `Arc`; there is no process-wide instance.

// Re-export public modules
pub mod catalog;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod search;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Mauka Search.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
