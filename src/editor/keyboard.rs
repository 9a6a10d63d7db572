// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard handling for EditorShell

use super::EditorShell;
use crate::editing::{Key, KeyEvent};

impl EditorShell {
    /// Shortcuts first, then editing keys
    pub(super) fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if let Some(redraw) = self.handle_undo_redo(event) {
            return redraw;
        }

        let before = self.doc.clone();
        let outcome = self.interaction.key(&mut self.doc.path, event);
        self.commit(before, outcome)
    }

    /// Cmd+Z undoes, Cmd+Shift+Z and Cmd+Y redo. `None` when the event is
    /// not an undo shortcut.
    fn handle_undo_redo(&mut self, event: &KeyEvent) -> Option<bool> {
        if !event.mods.cmd {
            return None;
        }
        let Key::Character(c) = event.key else {
            return None;
        };

        match c.to_ascii_lowercase() {
            'z' if event.mods.shift => Some(self.redo()),
            'z' => Some(self.undo()),
            'y' => Some(self.redo()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::open_default;
    use crate::editing::{InputEvent, Key, KeyEvent, Modifiers, MouseEvent};
    use kurbo::Point;

    #[test]
    fn escape_clears_selection() {
        let mut shell = open_default();
        shell.handle_event(InputEvent::PointerDown(MouseEvent::new(Point::new(400.0, 250.0))));
        shell.handle_event(InputEvent::PointerUp(MouseEvent::new(Point::new(400.0, 250.0))));
        assert_eq!(shell.path().selected_index(), Some(1));

        assert!(shell.handle_event(InputEvent::Key(KeyEvent::new(Key::Escape))));
        assert_eq!(shell.path().selected_index(), None);
        assert!(!shell.handle_event(InputEvent::Key(KeyEvent::new(Key::Escape))));
    }

    #[test]
    fn undo_with_empty_history_is_a_no_op() {
        let mut shell = open_default();
        let cmd = Modifiers {
            cmd: true,
            ..Modifiers::default()
        };
        let undo = KeyEvent::new(Key::Character('z')).with_mods(cmd);
        assert!(!shell.handle_event(InputEvent::Key(undo)));
        // plain 'z' is not a shortcut
        assert!(!shell.handle_event(InputEvent::Key(KeyEvent::new(Key::Character('z')))));
    }
}
