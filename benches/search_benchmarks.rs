//! Mauka Search Benchmarks
//!
//! Compares prefix lookups against full-scan substring lookups, and measures
//! a complete provider query, using the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::sync::Arc;
use std::time::Duration;

use mauka_search_lib::catalog::{build_trie, method_sorter, MethodDescriptor};
use mauka_search_lib::data_structures::NiihauTrieConfig;
use mauka_search_lib::search::{MatchMode, QueryModel, SortSpec, TrieDataProvider};

/// Synthetic method corpus with names like `get0042Value`.
fn corpus(size: usize) -> Vec<MethodDescriptor> {
    const VERBS: [&str; 6] = ["get", "set", "add", "remove", "find", "to"];
    (0..size)
        .map(|i| {
            MethodDescriptor::new(
                format!("{}{:04}Value", VERBS[i % VERBS.len()], i),
                format!("com.example.Class{}", i % 37),
                ["int"],
            )
        })
        .collect()
}

/// Benchmark prefix vs. substring trie lookups
fn bench_trie_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("niihau_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000].iter() {
        let trie = build_trie(corpus(*size), NiihauTrieConfig::default());
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("lookup_prefix", size), size, |b, _| {
            b.iter(|| black_box(trie.lookup_prefix(black_box("add"))))
        });
        group.bench_with_input(BenchmarkId::new("lookup_substring", size), size, |b, _| {
            b.iter(|| black_box(trie.lookup_substring(black_box("01"))))
        });
    }

    group.finish();
}

/// Benchmark a full provider query: lookup, filter, sort and page
fn bench_provider_query(c: &mut Criterion) {
    let trie = Arc::new(build_trie(corpus(10_000), NiihauTrieConfig::default()));
    let mut provider = TrieDataProvider::new(trie, QueryModel::with_text("Value"), method_sorter());
    provider.set_match_mode(MatchMode::SubstringAnywhere);
    let sort = SortSpec::descending("CLASS_NAME");

    c.bench_function("provider_query_substring_10k", |b| {
        b.iter(|| black_box(provider.query_results(&sort, 100, 25).unwrap()))
    });
}

criterion_group!(benches, bench_trie_lookups, bench_provider_query);
criterion_main!(benches);
