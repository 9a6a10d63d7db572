// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer and wheel handlers for EditorShell

use super::EditorShell;
use crate::editing::{EditType, MouseEvent};
use kurbo::Point;

impl EditorShell {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    pub(super) fn handle_pointer_down(&mut self, event: &MouseEvent) -> bool {
        tracing::debug!(
            "[EditorShell] Down at {:?}, button {:?}, clicks {}",
            event.pos,
            event.button,
            event.clicks
        );
        let before = self.doc.clone();
        let outcome = self.interaction.pointer_down(&mut self.doc.path, event);
        self.commit(before, outcome)
    }

    pub(super) fn handle_pointer_move(&mut self, event: &MouseEvent) -> bool {
        let before = self.doc.clone();
        let outcome = self.interaction.pointer_move(&mut self.doc.path, event);
        self.commit(before, outcome)
    }

    /// Pointer released or left the canvas. Ends any drag, so the next
    /// drag starts a fresh undo group.
    pub(super) fn handle_pointer_up(&mut self) -> bool {
        if self.last_edit_type == Some(EditType::Drag) {
            self.last_edit_type = Some(EditType::DragUp);
        }
        self.interaction.release().needs_redraw()
    }

    pub(super) fn handle_wheel(&mut self, pos: Point, delta: f64) -> bool {
        self.interaction.wheel(pos, delta).needs_redraw()
    }
}
