//! Mauka Search - Main entrypoint.
//!
//! Command-line front end to the search core. It loads configuration,
//! initializes logging, builds a trie from a method corpus and runs one
//! query or report against it.

use clap::{Parser, Subcommand};
use mauka_search_lib::catalog::{
    build_trie, class_name_filter, load_corpus, method_sorter, MethodColumn, MethodRef,
};
use mauka_search_lib::config::{self, ConfigLoader, LogConfig, SearchConfig};
use mauka_search_lib::data_structures::NiihauTrie;
use mauka_search_lib::error::config::ConfigError;
use mauka_search_lib::error::{
    ErrorContext, ErrorReporter, SearchError, SearchResult, TracingErrorReporter,
};
use mauka_search_lib::search::{
    FrequencyReport, MatchMode, QueryModel, ResultPage, SortDirection, SortSpec, TrieDataProvider,
};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Mauka Search.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Search", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run one query against a method corpus
    Query {
        /// JSON corpus of method descriptors
        #[clap(long, value_parser)]
        corpus: PathBuf,

        /// Query text
        #[clap(short, long)]
        query: String,

        /// Match mode: prefix or substring (defaults to the configured mode)
        #[clap(short, long)]
        mode: Option<MatchMode>,

        /// Column to sort by
        #[clap(short, long, default_value = "METHOD_NAME")]
        sort: MethodColumn,

        /// Sort descending
        #[clap(long)]
        descending: bool,

        /// Index of the first row to show
        #[clap(long, default_value_t = 0)]
        offset: usize,

        /// Number of rows to show (defaults to the configured page size)
        #[clap(short, long)]
        limit: Option<usize>,

        /// Regex the declaring class name must match
        #[clap(long)]
        class_filter: Option<String>,
    },

    /// Print how many methods start with each character
    Frequency {
        /// JSON corpus of method descriptors
        #[clap(long, value_parser)]
        corpus: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> SearchResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| SearchError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the corpus and indexes it.
fn load_trie(corpus: &Path, config: &SearchConfig) -> SearchResult<Arc<NiihauTrie<MethodRef>>> {
    let methods = load_corpus(corpus)?;
    let trie = build_trie(methods, config.trie.clone());
    info!(size = trie.size(), "Trie built");
    Ok(Arc::new(trie))
}

/// Prints a result page as a table.
fn print_page(page: &ResultPage<MethodRef>) {
    let titles: Vec<&str> = MethodColumn::ALL.iter().map(|c| c.title()).collect();
    println!("{}", titles.join("\t"));
    for method in page {
        let cells: Vec<String> = MethodColumn::ALL.iter().map(|c| c.cell(method)).collect();
        println!("{}", cells.join("\t"));
    }
    println!(
        "rows {}-{} of {}",
        page.offset() + usize::from(!page.is_empty()),
        page.offset() + page.len(),
        page.total()
    );
}

/// Runs the selected command.
fn run(command: Command, loader: &ConfigLoader, config: &SearchConfig) -> SearchResult<()> {
    match command {
        Command::Query {
            corpus,
            query,
            mode,
            sort,
            descending,
            offset,
            limit,
            class_filter,
        } => {
            let trie = load_trie(&corpus, config)?;
            let class_pattern = QueryModel::new();
            if let Some(pattern) = class_filter {
                class_pattern.set(pattern);
            }

            let mut provider =
                TrieDataProvider::new(trie, QueryModel::with_text(query), method_sorter())
                    .with_filter(class_name_filter(class_pattern))
                    .with_config(config.provider.clone());
            if let Some(mode) = mode {
                provider.set_match_mode(mode);
            }

            let sort = SortSpec::new(sort.key(), SortDirection::from_ascending(!descending));
            let limit = limit.unwrap_or(config.provider.default_page_size);
            if limit > config.provider.max_page_size {
                return Err(ConfigError::ValueOutOfRange {
                    key: "limit".to_string(),
                    message: format!(
                        "must be at most max_page_size ({})",
                        config.provider.max_page_size
                    ),
                }
                .into());
            }
            let page = provider.query_results(&sort, offset, limit)?;
            print_page(&page);
            Ok(())
        }
        Command::Frequency { corpus } => {
            let trie = load_trie(&corpus, config)?;
            println!("{}", FrequencyReport::from_trie(&trie));
            println!("methods = {}", trie.size());
            Ok(())
        }
        Command::Validate => {
            loader.load()?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = SearchConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| SearchError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(1);
    }

    if let Err(e) = run(args.command, &loader, &config) {
        TracingErrorReporter.report(ErrorContext::new(e, "cli"));
        process::exit(1);
    }
}
