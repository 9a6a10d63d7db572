// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod edit_types;
pub mod hit_test;
pub mod interaction;
pub mod mouse;
pub mod undo;
pub mod viewport;

pub use edit_types::EditType;
pub use hit_test::{HitTestResult, hit_test_nodes};
pub use interaction::{DragState, Interaction, Outcome};
pub use mouse::{InputEvent, Key, KeyEvent, Modifiers, MouseButton, MouseEvent};
pub use undo::UndoState;
pub use viewport::ViewPort;
