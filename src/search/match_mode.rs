//! Match mode toggle for trie data providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// How a query string is matched against stored keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchMode {
    /// The key must start with the query.
    #[default]
    #[serde(alias = "PREFIX_MATCH")]
    Prefix,

    /// The query may occur anywhere in the key.
    #[serde(alias = "SUBSTRING_MATCH")]
    SubstringAnywhere,
}

impl MatchMode {
    /// Label used in settings forms and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "PREFIX_MATCH",
            Self::SubstringAnywhere => "SUBSTRING_MATCH",
        }
    }

    /// Whether this mode matches anywhere in the key.
    pub fn is_anywhere(self) -> bool {
        self == Self::SubstringAnywhere
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefix" | "prefix_match" => Ok(Self::Prefix),
            "substring" | "substring_match" | "substring_anywhere" | "anywhere" => {
                Ok(Self::SubstringAnywhere)
            }
            _ => Err(ParseError::UnknownMatchMode(s.to_string())),
        }
    }
}
