//! Search configuration.
//!
//! A [`SearchConfig`] is assembled from three layers, later ones winning:
//!
//! 1. built-in defaults,
//! 2. an optional settings file (`.toml`, `.json`, `.yaml`/`.yml`),
//! 3. environment variables such as `MAUKA_SEARCH__PROVIDER__DEFAULT_PAGE_SIZE=50`.
//!
//! The merged result is validated before it is handed out.

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data_structures::niihau_trie::NiihauTrieConfig;
use crate::error::config::ConfigError;

pub mod provider;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "MAUKA_SEARCH";

/// Separator between nested keys in environment variable names.
const ENV_SEPARATOR: &str = "__";

/// Log levels accepted by [`LogConfig`].
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A configuration section that can check its own values.
pub trait Validate {
    /// Checks every value in the section.
    ///
    /// # Errors
    ///
    /// The first value found to be out of range.
    fn validate(&self) -> ConfigResult<()>;
}

/// Complete configuration of a search process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    /// Key normalisation for the shared trie
    pub trie: NiihauTrieConfig,

    /// Paging and match defaults for each search session
    pub provider: provider::ProviderConfig,

    /// Subscriber settings for the binary
    pub log: LogConfig,
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.provider.validate()?;
        self.log.validate()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default level when `RUST_LOG` is unset
    pub level: String,

    /// Emit JSON lines instead of human-readable text
    pub json: bool,

    /// Include file and line of each event
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        if LOG_LEVELS.contains(&self.level.as_str()) {
            return Ok(());
        }
        Err(ConfigError::ValidationError(format!(
            "Invalid log level '{}', expected one of {}",
            self.level,
            LOG_LEVELS.join(", ")
        )))
    }
}

/// Picks the file parser from the settings file's extension.
fn file_format(path: &Path) -> ConfigResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(FileFormat::Toml),
        Some("json") => Ok(FileFormat::Json),
        Some("yaml" | "yml") => Ok(FileFormat::Yaml),
        _ => Err(ConfigError::ParseError(format!(
            "Unsupported settings file '{}': expected .toml, .json or .yaml",
            path.display()
        ))),
    }
}

/// Builds a [`SearchConfig`] from defaults, an optional file and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings_file: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a loader reading `settings_file` (if any) and environment
    /// variables starting with `env_prefix`.
    pub fn new<P: AsRef<Path>>(settings_file: Option<P>, env_prefix: &str) -> Self {
        Self {
            settings_file: settings_file.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Stacks the three layers in precedence order.
    fn layers(&self) -> ConfigResult<ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Config::try_from(&SearchConfig::default())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = &self.settings_file {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
            let format = file_format(path)?;
            debug!(path = %path.display(), ?format, "Reading settings file");
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        Ok(builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        ))
    }

    /// Merges all layers and validates the result.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::FileNotFound`] when the settings file is missing
    /// * [`ConfigError::ParseError`] for unreadable or mistyped values
    /// * [`ConfigError::ValidationError`] / [`ConfigError::ValueOutOfRange`]
    ///   when a merged value is rejected
    pub fn load(&self) -> ConfigResult<SearchConfig> {
        let merged: SearchConfig = self
            .layers()?
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        merged.validate().map_err(|e| {
            warn!(error = %e, "Rejected configuration");
            e
        })?;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("search.toml", Some(FileFormat::Toml) ; "toml")]
    #[test_case("search.json", Some(FileFormat::Json) ; "json")]
    #[test_case("search.yml", Some(FileFormat::Yaml) ; "short yaml")]
    #[test_case("search.ini", None ; "unsupported")]
    #[test_case("search", None ; "no extension")]
    fn test_file_format(name: &str, expected: Option<FileFormat>) {
        assert_eq!(file_format(Path::new(name)).ok(), expected);
    }

    #[test]
    fn test_log_level_error_lists_choices() {
        let log = LogConfig {
            level: "loud".to_string(),
            ..LogConfig::default()
        };
        let err = log.validate().unwrap_err();
        assert!(err.to_string().contains("trace, debug, info, warn, error"));
    }
}
