// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Snapshot-based undo/redo history.
//!
//! Each undo group stores the state as it was *before* the group's first
//! edit. Paths are small, so whole snapshots are cheaper to reason about
//! than inverse operations.

use std::collections::VecDeque;

/// Undo/redo stacks of state snapshots
#[derive(Debug, Clone)]
pub struct UndoState<T> {
    undo_stack: VecDeque<T>,
    redo_stack: Vec<T>,
    max_depth: usize,
}

impl<T: Clone> UndoState<T> {
    pub fn new() -> Self {
        Self::with_depth(crate::settings::undo::DEPTH)
    }

    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Start a new undo group that restores `before`
    ///
    /// Any redo history is discarded, since it no longer follows from the
    /// current state.
    pub fn add_undo_group(&mut self, before: T) {
        if self.undo_stack.len() == self.max_depth {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(before);
        self.redo_stack.clear();
    }

    /// Step back, returning the state to restore
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward again, returning the state to restore
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

impl<T: Clone> Default for UndoState<T> {
    fn default() -> Self {
        Self::new()
    }
}
