//! Linear undo/redo history over whole-book snapshots.

use std::collections::VecDeque;

use thiserror::Error;

/// Default number of undoable steps kept before the oldest is evicted.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("No more commands to undo!")]
    NothingToUndo,

    #[error("No more commands to redo!")]
    NothingToRedo,
}

/// Two stacks of snapshots: states before each committed step (`undoable`)
/// and states undone since the last commit (`redoable`).
///
/// The history never looks inside a snapshot; the caller hands in the
/// current state and adopts whatever comes back. Committing clears the redo
/// chain (no branching). At most `limit` undoable snapshots are retained;
/// committing beyond that drops the oldest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<S> {
    undoable: VecDeque<S>,
    redoable: Vec<S>,
    limit: usize,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl<S> History<S> {
    /// Creates a history retaining at most `limit` undoable steps (minimum 1).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undoable: VecDeque::new(),
            redoable: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Records `previous`, the state right before a committed mutation.
    pub fn commit(&mut self, previous: S) {
        if self.undoable.len() == self.limit {
            self.undoable.pop_front();
            tracing::debug!(limit = self.limit, "history full; evicted oldest snapshot");
        }
        self.undoable.push_back(previous);
        self.redoable.clear();
    }

    /// Steps back: returns the state to adopt and remembers `current` for redo.
    pub fn undo(&mut self, current: S) -> Result<S, HistoryError> {
        let previous = self.undoable.pop_back().ok_or(HistoryError::NothingToUndo)?;
        self.redoable.push(current);
        Ok(previous)
    }

    /// Steps forward again after an undo.
    pub fn redo(&mut self, current: S) -> Result<S, HistoryError> {
        let next = self.redoable.pop().ok_or(HistoryError::NothingToRedo)?;
        self.undoable.push_back(current);
        Ok(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undoable.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redoable.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undoable.len()
    }
}
