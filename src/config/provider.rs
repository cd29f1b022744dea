//! Provider configuration module.
//!
//! This module defines how search sessions page and match their results.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use crate::search::MatchMode;
use serde::{Deserialize, Serialize};

/// Data provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Rows per page when the caller does not ask for a size
    pub default_page_size: usize,

    /// Largest page a front end may ask for; the provider itself never
    /// shrinks a request
    pub max_page_size: usize,

    /// Match mode a new provider starts in
    pub default_match_mode: MatchMode,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default_page_size: 25,
            max_page_size: 500,
            default_match_mode: MatchMode::Prefix,
        }
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_page_size == 0 {
            return Err(ConfigError::ValidationError(
                "default_page_size must be greater than 0".to_string(),
            ));
        }

        if self.max_page_size < self.default_page_size {
            return Err(ConfigError::ValueOutOfRange {
                key: "max_page_size".to_string(),
                message: format!(
                    "must be at least default_page_size ({})",
                    self.default_page_size
                ),
            });
        }

        Ok(())
    }
}
