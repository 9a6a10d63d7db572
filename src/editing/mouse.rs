// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Input events delivered to the editor.
//!
//! Positions are in screen space (canvas pixels). The host translates its
//! own pointer/keyboard events into these before handing them over. The
//! serde form is what the replay scripts of the `curvedit` binary use.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// Modifier key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    /// Cmd on macOS, Ctrl elsewhere
    pub cmd: bool,
}

/// A pointer event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseEvent {
    pub pos: Point,
    #[serde(default)]
    pub button: MouseButton,
    /// Consecutive click count, 2 for a double-click
    #[serde(default = "one")]
    pub clicks: u8,
    #[serde(default)]
    pub mods: Modifiers,
}

fn one() -> u8 {
    1
}

impl MouseEvent {
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            button: MouseButton::Left,
            clicks: 1,
            mods: Modifiers::default(),
        }
    }

    pub fn with_clicks(mut self, clicks: u8) -> Self {
        self.clicks = clicks;
        self
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }

    pub fn is_double_click(&self) -> bool {
        self.clicks >= 2
    }
}

/// Keys the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Character(char),
}

/// A key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    #[serde(default)]
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            mods: Modifiers::default(),
        }
    }

    pub fn with_mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }
}

/// Everything the editor shell consumes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown(MouseEvent),
    PointerMove(MouseEvent),
    PointerUp(MouseEvent),
    PointerLeave,
    /// Wheel at `pos`; negative `delta` scrolls up, which zooms in
    Wheel { pos: Point, delta: f64 },
    Key(KeyEvent),
}
