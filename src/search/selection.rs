//! Row selection notifications.

/// Receives the payload a user picked from a rendered result page.
///
/// The index is the row position within the page that was rendered, not the
/// position in the overall result set.
pub trait SelectionHandler<V> {
    /// Called once per selection with the page-local row index and the payload
    /// that occupied that row.
    fn on_select(&self, index: usize, payload: &V);
}

impl<V, F> SelectionHandler<V> for F
where
    F: Fn(usize, &V),
{
    fn on_select(&self, index: usize, payload: &V) {
        self(index, payload)
    }
}
