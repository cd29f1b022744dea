//! Session-level tests: a provider over the method catalogue, a live class
//! filter, and selection notifications checked with a mock handler.

use mockall::mock;
use mockall::predicate::eq;
use std::sync::Arc;

use super::test_utils::sample_methods;
use crate::catalog::{class_name_filter, method_sorter, MethodDescriptor, MethodRef};
use crate::data_structures::niihau_trie::NiihauTrie;
use crate::error::{FilterError, ProviderError};
use crate::search::{MatchMode, QueryModel, SelectionHandler, SortSpec, TrieDataProvider};

mock! {
    pub Handler {}

    impl SelectionHandler<MethodRef> for Handler {
        fn on_select(&self, index: usize, payload: &MethodRef);
    }
}

struct Session {
    provider: TrieDataProvider<MethodRef>,
    query: QueryModel,
    class_pattern: QueryModel,
}

fn session() -> Session {
    let trie = Arc::new(NiihauTrie::new());
    for method in sample_methods() {
        trie.insert(method.name.clone(), method);
    }

    let query = QueryModel::new();
    let class_pattern = QueryModel::new();
    let provider = TrieDataProvider::new(trie, query.clone(), method_sorter())
        .with_filter(class_name_filter(class_pattern.clone()));

    Session {
        provider,
        query,
        class_pattern,
    }
}

#[test]
fn test_selection_reports_local_index_and_payload() {
    let s = session();
    s.query.set("add");

    let page = s
        .provider
        .query_results(&SortSpec::ascending("CLASS_NAME"), 1, 2)
        .unwrap();
    assert_eq!(page.total(), 3);
    let picked = page.items()[1].clone();
    assert_eq!(picked.name, "addAll");

    let mut handler = MockHandler::new();
    handler
        .expect_on_select()
        .with(eq(1), eq(picked.clone()))
        .times(1)
        .return_const(());

    assert!(page.select(1, &handler));
    assert!(!page.select(5, &handler));
}

#[test]
fn test_class_filter_narrows_results() {
    let mut s = session();
    s.provider.set_match_mode(MatchMode::SubstringAnywhere);
    s.query.set("a");
    let sort = SortSpec::ascending("METHOD_NAME");

    // Blank filter: every method whose name contains "a"
    let all = s.provider.query_results(&sort, 0, 25).unwrap();
    assert_eq!(all.total(), 4);

    s.class_pattern.set("Foo");
    let foo_only = s.provider.query_results(&sort, 0, 25).unwrap();
    let names: Vec<&str> = foo_only.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["add", "addAll"]);
    assert!(foo_only.iter().all(|m| m.declaring_class.contains("Foo")));
}

#[test]
fn test_invalid_class_pattern_surfaces() {
    let s = session();
    s.query.set("add");
    s.class_pattern.set("Foo[");

    let err = s
        .provider
        .query_results(&SortSpec::ascending("METHOD_NAME"), 0, 25)
        .unwrap_err();
    assert!(matches!(
        err,
        ProviderError::Filter(FilterError::InvalidPattern { .. })
    ));

    // Fixing the pattern recovers without rebuilding anything
    s.class_pattern.set("Bar");
    let page = s
        .provider
        .query_results(&SortSpec::ascending("METHOD_NAME"), 0, 25)
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(
        *page.items()[0],
        MethodDescriptor::new("add", "com.example.Bar", ["int", "int"])
    );
}

#[test]
fn test_descending_by_name() {
    let mut s = session();
    s.provider.set_match_anywhere(true);
    s.query.set("s");

    let page = s
        .provider
        .query_results(&SortSpec::descending("METHOD_NAME"), 0, 25)
        .unwrap();
    let names: Vec<&str> = page.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["subtract", "size"]);
}
