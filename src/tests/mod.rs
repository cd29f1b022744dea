//! Test modules for Mauka Search.
//!
//! This module contains the crate-level testing infrastructure:
//! - Tests spanning several components (config loading, error conversions)
//! - Property-based tests of the trie and provider using proptest
//! - Mock-based tests of selection notifications using mockall
//! - Shared fixtures and strategies

pub mod selection_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{corpus_strategy, key_strategy, sample_methods, TestFixture};
