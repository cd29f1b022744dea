//! Method catalogue: the payload the search demo indexes.
//!
//! Each entry describes one callable method. Entries are keyed in the trie by
//! method name, so overloads share a trie node.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::search::{KeyedSorter, PatternFilter, QuerySource};

mod corpus;

pub use corpus::{build_trie, load_corpus, parse_corpus};

/// Shared handle to a method descriptor; this is the trie payload type.
pub type MethodRef = Arc<MethodDescriptor>;

/// Description of one callable method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Simple method name, the trie key
    pub name: String,

    /// Fully qualified name of the declaring class
    pub declaring_class: String,

    /// Parameter type names, in declaration order
    #[serde(default)]
    pub parameters: Vec<String>,
}

impl MethodDescriptor {
    /// Creates a descriptor.
    pub fn new<I, S>(name: impl Into<String>, declaring_class: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            declaring_class: declaring_class.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// Parameter list as shown in the parameters column.
    pub fn parameter_list(&self) -> String {
        self.parameters.join(", ")
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}({})",
            self.declaring_class,
            self.name,
            self.parameter_list()
        )
    }
}

/// Columns of the method result table, each usable as a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodColumn {
    /// Method name
    MethodName,
    /// Parameter list
    Parameters,
    /// Declaring class name
    ClassName,
}

impl MethodColumn {
    /// Every column, in display order.
    pub const ALL: [MethodColumn; 3] = [Self::MethodName, Self::Parameters, Self::ClassName];

    /// Sort key identifier for this column.
    pub fn key(self) -> &'static str {
        match self {
            Self::MethodName => "METHOD_NAME",
            Self::Parameters => "PARAMETERS",
            Self::ClassName => "CLASS_NAME",
        }
    }

    /// Column heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::MethodName => "Method Name",
            Self::Parameters => "Parameters",
            Self::ClassName => "Class Name",
        }
    }

    /// Text shown in this column for `method`.
    pub fn cell(self, method: &MethodDescriptor) -> String {
        match self {
            Self::MethodName => method.name.clone(),
            Self::Parameters => method.parameter_list(),
            Self::ClassName => method.declaring_class.clone(),
        }
    }
}

impl FromStr for MethodColumn {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownColumn {
                column: s.to_string(),
                known: Self::ALL.iter().map(|c| c.key().to_string()).collect(),
            })
    }
}

/// Sorter with one ascending comparison per [`MethodColumn`].
pub fn method_sorter() -> KeyedSorter<MethodRef> {
    KeyedSorter::<MethodRef>::new()
        .with_key(MethodColumn::MethodName.key(), |a, b| a.name.cmp(&b.name))
        .with_key(MethodColumn::Parameters.key(), |a, b| {
            a.parameters.cmp(&b.parameters)
        })
        .with_key(MethodColumn::ClassName.key(), |a, b| {
            a.declaring_class.cmp(&b.declaring_class)
        })
}

/// Filter showing only methods whose declaring class matches the regex read
/// from `pattern`. A blank pattern shows every method.
pub fn class_name_filter<Q>(pattern: Q) -> PatternFilter<MethodRef>
where
    Q: QuerySource + 'static,
{
    PatternFilter::<MethodRef>::new(pattern, |m| m.declaring_class.clone())
}
