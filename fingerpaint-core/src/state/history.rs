//! Committed strokes, in the order they were drawn.

use crate::stroke::Stroke;

/// Append-only (save for undo) list of committed strokes. Insertion order is paint order,
/// later strokes are drawn on top.
#[derive(Clone, Default, Debug)]
pub struct StrokeHistory {
    /// Invariant: none are empty, none are the in-progress stroke.
    strokes: Vec<Stroke>,
}
// Public methods for the client
impl StrokeHistory {
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
    #[must_use]
    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }
    /// Iterate in paint order, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Stroke> + ExactSizeIterator + '_ {
        self.strokes.iter()
    }
    /// Read-only snapshot of every committed stroke, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Stroke] {
        &self.strokes
    }
    /// Remove the most recently committed stroke. `None` if there were none, which is not an error.
    pub fn undo(&mut self) -> Option<Stroke> {
        let removed = self.strokes.pop();
        if removed.is_some() {
            log::debug!("undo, {} strokes remain", self.strokes.len());
        }
        removed
    }
}
// Only the stroke builder may commit.
impl StrokeHistory {
    pub(crate) fn push_back(&mut self, stroke: Stroke) {
        debug_assert!(!stroke.is_empty(), "committed an empty stroke");
        self.strokes.push(stroke);
    }
}
impl<'a> IntoIterator for &'a StrokeHistory {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;
    fn into_iter(self) -> Self::IntoIter {
        self.strokes.iter()
    }
}
