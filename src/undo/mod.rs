use crate::models::document::Document;
use std::collections::VecDeque;

/// Linear undo/redo history of full document snapshots
///
/// `past` holds the documents that preceded each commit (most recent last);
/// `future` holds documents displaced by undo. A commit always empties
/// `future`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    past: VecDeque<Document>,
    future: Vec<Document>,
    /// Maximum number of snapshots kept in `past`
    max_size: Option<usize>,
}

impl History {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `max_size` undo steps
    pub fn with_limit(max_size: Option<usize>) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    /// Record the document as it was before a user edit
    pub fn commit(&mut self, before: Document) {
        self.past.push_back(before);
        self.future.clear();

        // Enforce max size
        if let Some(max) = self.max_size {
            while self.past.len() > max {
                self.past.pop_front();
            }
        }
    }

    /// Step back one snapshot.
    ///
    /// Returns the restored document, or `None` (leaving `current` to stay as
    /// it is) when there is nothing to undo.
    pub fn undo(&mut self, current: Document) -> Option<Document> {
        let previous = self.past.pop_back()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward one snapshot; the mirror of [`History::undo`]
    pub fn redo(&mut self, current: Document) -> Option<Document> {
        let next = self.future.pop()?;
        self.past.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    pub fn redo_count(&self) -> usize {
        self.future.len()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
