//! Live query sources.
//!
//! A provider never stores the query text itself; it asks its source on every
//! call, so whatever the caller typed last is what gets matched.

use std::sync::Arc;

use parking_lot::RwLock;

/// Something that can report the current text of a search box.
pub trait QuerySource: Send + Sync {
    /// Returns the current text, or `None` when nothing has been entered.
    fn current(&self) -> Option<String>;
}

/// Shared, mutable text model.
///
/// Clones share the same underlying text: the UI side keeps one handle and
/// calls [`QueryModel::set`], the provider keeps another and reads it.
#[derive(Debug, Clone, Default)]
pub struct QueryModel {
    text: Arc<RwLock<Option<String>>>,
}

impl QueryModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model holding `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        let model = Self::new();
        model.set(text);
        model
    }

    /// Replaces the current text.
    pub fn set(&self, text: impl Into<String>) {
        *self.text.write() = Some(text.into());
    }

    /// Resets the model to "nothing entered".
    pub fn clear(&self) {
        *self.text.write() = None;
    }

    /// Returns a copy of the current text.
    pub fn get(&self) -> Option<String> {
        self.text.read().clone()
    }
}

impl QuerySource for QueryModel {
    fn current(&self) -> Option<String> {
        self.get()
    }
}

impl QuerySource for String {
    fn current(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl QuerySource for &'static str {
    fn current(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_text() {
        let ui = QueryModel::new();
        let provider_side = ui.clone();
        assert_eq!(provider_side.current(), None);

        ui.set("add");
        assert_eq!(provider_side.current().as_deref(), Some("add"));

        ui.clear();
        assert_eq!(provider_side.current(), None);
    }

    #[test]
    fn test_fixed_sources() {
        assert_eq!("sub".current().as_deref(), Some("sub"));
        assert_eq!(String::from("x").current().as_deref(), Some("x"));
        assert_eq!(QueryModel::with_text("y").get().as_deref(), Some("y"));
    }
}
