//! Autocomplete search core.
//!
//! Everything a search session needs on top of the shared
//! [`NiihauTrie`](crate::data_structures::niihau_trie::NiihauTrie):
//! match modes, visibility filters, sort-key resolution, pagination,
//! selection notifications and frequency statistics, tied together by
//! [`TrieDataProvider`].

pub mod comparator;
pub mod filter;
pub mod frequency;
pub mod match_mode;
pub mod page;
pub mod provider;
pub mod query;
pub mod selection;
pub mod sorter;

pub use comparator::{CompareFn, DirectionalComparator, SortDirection, SortSpec};
pub use filter::{AcceptAll, FilterResult, PatternFilter, TrieFilter};
pub use frequency::FrequencyReport;
pub use match_mode::MatchMode;
pub use page::ResultPage;
pub use provider::{ProviderResult, TrieDataProvider};
pub use query::{QueryModel, QuerySource};
pub use selection::SelectionHandler;
pub use sorter::{KeyedSorter, ProviderSorter};
