// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit types for undo grouping

/// Type of edit being performed
///
/// Used to group consecutive edits of the same type into a single undo
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditType {
    /// Normal edit (creates new undo group)
    Normal,

    /// Drag operation in progress (joins the current undo group)
    Drag,

    /// Drag operation completed (the next drag starts a new group)
    DragUp,
}
