//! Paginated query results.

use serde::Serialize;

use super::selection::SelectionHandler;

/// One window of a sorted, filtered match set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPage<V> {
    /// Payloads in this window, in sorted order
    items: Vec<V>,
    /// Offset of the first item within the full match set
    offset: usize,
    /// Number of matches before slicing
    total: usize,
}

impl<V> ResultPage<V> {
    /// Creates a page.
    pub fn new(items: Vec<V>, offset: usize, total: usize) -> Self {
        Self {
            items,
            offset,
            total,
        }
    }

    /// A page with no rows and no matches.
    pub fn empty(offset: usize) -> Self {
        Self::new(Vec::new(), offset, 0)
    }

    /// Slices `[offset, offset + size)` out of `all`, clamped to its length.
    pub fn window(mut all: Vec<V>, offset: usize, size: usize) -> Self {
        let total = all.len();
        let start = offset.min(total);
        let end = offset.saturating_add(size).min(total);
        all.truncate(end);
        let items = all.split_off(start);
        Self::new(items, offset, total)
    }

    /// Rows on this page.
    pub fn items(&self) -> &[V] {
        &self.items
    }

    /// Consumes the page, returning its rows.
    pub fn into_items(self) -> Vec<V> {
        self.items
    }

    /// Offset of the first row in the full match set.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Match count before pagination.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of rows on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether rows exist past this page.
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.items.len()) < self.total
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.items.iter()
    }

    /// Reports the row at page-local `index` to `handler`.
    ///
    /// # Returns
    ///
    /// `false` without notifying when `index` is not a row on this page.
    pub fn select<H>(&self, index: usize, handler: &H) -> bool
    where
        H: SelectionHandler<V> + ?Sized,
    {
        match self.items.get(index) {
            Some(payload) => {
                handler.on_select(index, payload);
                true
            }
            None => false,
        }
    }
}

impl<'a, V> IntoIterator for &'a ResultPage<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use test_case::test_case;

    #[test_case(0, 2, &[0, 1] ; "first page")]
    #[test_case(4, 2, &[4] ; "short last page")]
    #[test_case(5, 2, &[] ; "offset at end")]
    #[test_case(9, 2, &[] ; "offset past end")]
    #[test_case(1, 0, &[] ; "zero size")]
    #[test_case(3, usize::MAX, &[3, 4] ; "size overflow clamps")]
    fn test_window(offset: usize, size: usize, expected: &[u8]) {
        let page = ResultPage::window(vec![0u8, 1, 2, 3, 4], offset, size);
        assert_eq!(page.items(), expected);
        assert_eq!(page.total(), 5);
        assert_eq!(page.offset(), offset);
    }

    #[test]
    fn test_has_more() {
        assert!(ResultPage::window(vec![1, 2, 3], 0, 2).has_more());
        assert!(!ResultPage::window(vec![1, 2, 3], 2, 2).has_more());
        assert!(!ResultPage::<u8>::empty(0).has_more());
    }

    #[test]
    fn test_select_uses_local_index() {
        let page = ResultPage::window(vec!["a", "b", "c", "d"], 2, 2);
        let picked = RefCell::new(Vec::new());
        let handler = |index: usize, payload: &&str| {
            picked.borrow_mut().push((index, payload.to_string()));
        };

        assert!(page.select(1, &handler));
        assert!(!page.select(2, &handler));
        assert_eq!(picked.into_inner(), vec![(1, "d".to_string())]);
    }
}
