//! Trie data provider.
//!
//! Turns the live query of one search session into a sorted, filtered,
//! paginated view of trie matches:
//!
//! query text → trie lookup (prefix or substring) → filter → sort → page.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::comparator::SortSpec;
use super::filter::{AcceptAll, TrieFilter};
use super::frequency::FrequencyReport;
use super::match_mode::MatchMode;
use super::page::ResultPage;
use super::query::QuerySource;
use super::sorter::ProviderSorter;
use crate::config::provider::ProviderConfig;
use crate::data_structures::niihau_trie::NiihauTrie;
use crate::error::ProviderError;

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Per-session search front end over a shared trie.
///
/// The trie is shared with every other session; the match mode and the query
/// source belong to this provider alone.
pub struct TrieDataProvider<V> {
    trie: Arc<NiihauTrie<V>>,
    filter: Box<dyn TrieFilter<V>>,
    query: Arc<dyn QuerySource>,
    sorter: Box<dyn ProviderSorter<V>>,
    match_mode: MatchMode,
    config: ProviderConfig,
}

impl<V> TrieDataProvider<V> {
    /// Creates a provider with default configuration and no filter.
    ///
    /// # Arguments
    ///
    /// * `trie` - Shared corpus index
    /// * `query` - Source of the live query text, re-read on every call
    /// * `sorter` - Resolves sort requests to comparators
    pub fn new<Q, S>(trie: Arc<NiihauTrie<V>>, query: Q, sorter: S) -> Self
    where
        Q: QuerySource + 'static,
        S: ProviderSorter<V> + 'static,
    {
        let config = ProviderConfig::default();
        Self {
            trie,
            filter: Box::new(AcceptAll),
            query: Arc::new(query),
            sorter: Box::new(sorter),
            match_mode: config.default_match_mode,
            config,
        }
    }

    /// Replaces the visibility filter.
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: TrieFilter<V> + 'static,
    {
        self.filter = Box::new(filter);
        self
    }

    /// Applies `config`, including its starting match mode.
    pub fn with_config(mut self, config: ProviderConfig) -> Self {
        self.match_mode = config.default_match_mode;
        self.config = config;
        self
    }

    /// Current match mode.
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Changes the match mode for all subsequent queries.
    pub fn set_match_mode(&mut self, mode: MatchMode) {
        debug!(from = %self.match_mode, to = %mode, "Match mode changed");
        self.match_mode = mode;
    }

    /// Whether queries match anywhere in a key.
    pub fn is_match_anywhere(&self) -> bool {
        self.match_mode.is_anywhere()
    }

    /// Switches between substring and prefix matching.
    pub fn set_match_anywhere(&mut self, anywhere: bool) {
        self.set_match_mode(if anywhere {
            MatchMode::SubstringAnywhere
        } else {
            MatchMode::Prefix
        });
    }

    /// The shared trie this provider reads from.
    pub fn trie(&self) -> &Arc<NiihauTrie<V>> {
        &self.trie
    }

    /// The provider's configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Per-character statistics over the shared trie.
    pub fn frequency_report(&self) -> FrequencyReport {
        FrequencyReport::from_trie(&self.trie)
    }
}

impl<V: Clone> TrieDataProvider<V> {
    /// Matches for the current query after filtering, in trie order.
    ///
    /// An absent or empty query matches nothing.
    fn candidates(&self) -> ProviderResult<Vec<V>> {
        let query = match self.query.current() {
            Some(q) if !q.is_empty() => q,
            _ => return Ok(Vec::new()),
        };

        let found = match self.match_mode {
            MatchMode::Prefix => self.trie.lookup_prefix(&query),
            MatchMode::SubstringAnywhere => self.trie.lookup_substring(&query),
        };
        let found_count = found.len();

        let mut visible = Vec::with_capacity(found_count);
        for value in found {
            if self.filter.is_visible(&value)? {
                visible.push(value);
            }
        }

        debug!(
            query = %query,
            mode = %self.match_mode,
            found = found_count,
            visible = visible.len(),
            "Candidates collected"
        );
        Ok(visible)
    }

    /// Returns the rows `[offset, offset + size)` of the sorted, filtered
    /// matches for the current query, plus the total match count.
    ///
    /// Windows past the end are clamped. `size` is honoured as given, so
    /// consecutive windows of any size tile the full result exactly.
    ///
    /// # Errors
    ///
    /// * [`ProviderError::UnknownSortKey`] if `sort.key` has no comparator,
    ///   whatever the query.
    /// * [`ProviderError::Filter`] if the filter is unusable, whatever the
    ///   query.
    pub fn query_results(
        &self,
        sort: &SortSpec,
        offset: usize,
        size: usize,
    ) -> ProviderResult<ResultPage<V>> {
        let comparator = self.sorter.comparator_for(sort)?;
        self.filter.validate()?;

        let mut matches = self.candidates()?;
        comparator.sort(&mut matches);

        Ok(ResultPage::window(matches, offset, size))
    }

    /// Returns page number `page_index` using the configured default page size.
    ///
    /// # Errors
    ///
    /// Same as [`TrieDataProvider::query_results`].
    pub fn query_default_page(
        &self,
        sort: &SortSpec,
        page_index: usize,
    ) -> ProviderResult<ResultPage<V>> {
        let size = self.config.default_page_size;
        self.query_results(sort, page_index.saturating_mul(size), size)
    }

    /// Number of filtered matches for the current query.
    ///
    /// # Errors
    ///
    /// [`ProviderError::Filter`] if the filter is unusable.
    pub fn match_count(&self) -> ProviderResult<usize> {
        self.filter.validate()?;
        Ok(self.candidates()?.len())
    }
}

impl<V> fmt::Debug for TrieDataProvider<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieDataProvider")
            .field("match_mode", &self.match_mode)
            .field("query", &self.query.current())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::comparator::SortDirection;
    use crate::search::filter::PatternFilter;
    use crate::search::query::QueryModel;
    use crate::search::sorter::KeyedSorter;

    type Word = (&'static str, usize);

    fn setup(words: &[&'static str]) -> (TrieDataProvider<Word>, QueryModel) {
        let trie = Arc::new(NiihauTrie::new());
        for (i, w) in words.iter().enumerate() {
            trie.insert(w, (*w, i));
        }
        let sorter = KeyedSorter::<Word>::new()
            .with_key("WORD", |a, b| a.0.cmp(b.0))
            .with_key("LEN", |a, b| a.0.len().cmp(&b.0.len()));
        let query = QueryModel::new();
        (TrieDataProvider::new(trie, query.clone(), sorter), query)
    }

    fn words(page: &ResultPage<Word>) -> Vec<&'static str> {
        page.iter().map(|w| w.0).collect()
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let (mut provider, query) = setup(&["add", "addAll"]);
        let sort = SortSpec::ascending("WORD");

        let page = provider.query_results(&sort, 0, 10).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total(), 0);

        query.set("");
        provider.set_match_anywhere(true);
        assert_eq!(provider.query_results(&sort, 0, 10).unwrap().total(), 0);
        assert_eq!(provider.match_count().unwrap(), 0);
    }

    #[test]
    fn test_prefix_and_substring_modes() {
        let (mut provider, query) = setup(&["subtract", "addAll", "add"]);
        let sort = SortSpec::ascending("WORD");

        query.set("add");
        assert_eq!(
            words(&provider.query_results(&sort, 0, 10).unwrap()),
            vec!["add", "addAll"]
        );

        query.set("dd");
        assert!(provider.query_results(&sort, 0, 10).unwrap().is_empty());

        provider.set_match_mode(MatchMode::SubstringAnywhere);
        assert!(provider.is_match_anywhere());
        assert_eq!(
            words(&provider.query_results(&sort, 0, 10).unwrap()),
            vec!["add", "addAll"]
        );

        query.set("bt");
        assert_eq!(
            words(&provider.query_results(&sort, 0, 10).unwrap()),
            vec!["subtract"]
        );
    }

    #[test]
    fn test_sort_direction_and_stability() {
        let (provider, query) = setup(&["abc", "ab", "abd", "abe"]);
        query.set("ab");

        // Trie order is ab, abc, abd, abe; equal lengths keep that order
        let asc = provider
            .query_results(&SortSpec::ascending("LEN"), 0, 10)
            .unwrap();
        assert_eq!(words(&asc), vec!["ab", "abc", "abd", "abe"]);

        let desc = provider
            .query_results(&SortSpec::new("LEN", SortDirection::Descending), 0, 10)
            .unwrap();
        assert_eq!(words(&desc), vec!["abc", "abd", "abe", "ab"]);
    }

    #[test]
    fn test_unknown_sort_key_fails_even_without_query() {
        let (provider, _query) = setup(&["add"]);
        let err = provider
            .query_results(&SortSpec::ascending("NAME"), 0, 10)
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownSortKey { ref key, .. } if key == "NAME"));
    }

    #[test]
    fn test_pagination_and_clamping() {
        let (provider, query) = setup(&["a1", "a2", "a3", "a4", "a5"]);
        let provider = provider.with_config(ProviderConfig {
            default_page_size: 2,
            max_page_size: 3,
            default_match_mode: MatchMode::Prefix,
        });
        query.set("a");
        let sort = SortSpec::ascending("WORD");

        let page = provider.query_results(&sort, 4, 2).unwrap();
        assert_eq!(words(&page), vec!["a5"]);
        assert_eq!(page.total(), 5);

        let page = provider.query_results(&sort, 7, 2).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total(), 5);

        // max_page_size does not shrink an explicit request
        let page = provider.query_results(&sort, 0, 4).unwrap();
        assert_eq!(page.len(), 4);
        let rest = provider.query_results(&sort, 4, 4).unwrap();
        assert_eq!(words(&rest), vec!["a5"]);

        let page = provider.query_default_page(&sort, 1).unwrap();
        assert_eq!(words(&page), vec!["a3", "a4"]);
        assert_eq!(page.offset(), 2);
    }

    #[test]
    fn test_filter_runs_after_lookup() {
        let (provider, query) = setup(&["add", "addAll", "adder"]);
        let provider = provider.with_filter(|w: &Word| w.0.len() > 3);
        query.set("add");

        let page = provider
            .query_results(&SortSpec::ascending("WORD"), 0, 10)
            .unwrap();
        assert_eq!(words(&page), vec!["addAll", "adder"]);
        assert_eq!(provider.match_count().unwrap(), 2);
    }

    #[test]
    fn test_bad_pattern_fails_without_matches() {
        let (provider, query) = setup(&["add"]);
        let pattern = QueryModel::with_text("(");
        let provider = provider.with_filter(PatternFilter::<Word>::new(pattern.clone(), |w| {
            w.0.to_string()
        }));
        let sort = SortSpec::ascending("WORD");

        // No query at all, yet the broken pattern is still reported
        let err = provider.query_results(&sort, 0, 10).unwrap_err();
        assert!(matches!(err, ProviderError::Filter(_)));

        query.set("zzz");
        assert!(provider.query_results(&sort, 0, 10).is_err());
        assert!(provider.match_count().is_err());

        pattern.set("a+");
        assert_eq!(provider.match_count().unwrap(), 0);
        query.set("a");
        assert_eq!(provider.match_count().unwrap(), 1);
    }

    #[test]
    fn test_config_sets_starting_mode() {
        let (provider, _query) = setup(&[]);
        let provider = provider.with_config(ProviderConfig {
            default_match_mode: MatchMode::SubstringAnywhere,
            ..Default::default()
        });
        assert_eq!(provider.match_mode(), MatchMode::SubstringAnywhere);
    }
}
