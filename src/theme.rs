// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants for the editor canvas
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors, a dark to light gradient by default
// ============================================================================
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);

// ============================================================================
// CANVAS
// ============================================================================
const CANVAS_BACKGROUND: Color = BASE_B;

// ============================================================================
// CURVE DEFAULTS
// ============================================================================
// Used when a shape carries no stroke, or an unparseable one
const DEFAULT_STROKE: Color = Color::from_rgb8(0xef, 0x9a, 0x9a);

// ============================================================================
// CONSTRUCTION LINES (anchor to handle)
// ============================================================================
const HANDLE_LINE: Color = BASE_I;

// ============================================================================
// POINT COLORS
// ============================================================================
const ANCHOR_POINT: Color = Color::from_rgb8(0x57, 0x9a, 0xff);
const SELECTED_ANCHOR_POINT: Color = Color::from_rgb8(0xff, 0xaa, 0x33);
const HANDLE_POINT: Color = Color::from_rgb8(0xcc, 0x99, 0xff);

// ============================================================================
// EXPORT BOUNDARY
// ============================================================================
const BOUNDARY_OUTLINE: Color = BASE_F;
const BOUNDARY_TICK: Color = BASE_L;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the editor canvas
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
}

/// Curve styling fallbacks
pub mod curve {
    use super::Color;
    pub const DEFAULT_STROKE: Color = super::DEFAULT_STROKE;
    /// Hex form of `DEFAULT_STROKE`, as stored on shapes
    pub const DEFAULT_STROKE_HEX: &str = "#ef9a9a";
}

/// Colors for construction lines (anchor to handle)
pub mod handle {
    use super::Color;
    pub const LINE: Color = super::HANDLE_LINE;
}

/// Colors for points
pub mod point {
    use super::Color;
    pub const ANCHOR: Color = super::ANCHOR_POINT;
    pub const SELECTED_ANCHOR: Color = super::SELECTED_ANCHOR_POINT;
    pub const HANDLE: Color = super::HANDLE_POINT;
}

/// Colors for the export boundary overlay
pub mod boundary {
    use super::Color;
    pub const OUTLINE: Color = super::BOUNDARY_OUTLINE;
    pub const TICK: Color = super::BOUNDARY_TICK;
}

/// Sizes for rendering, in screen pixels
pub mod size {
    /// Radius of anchor points
    pub const ANCHOR_RADIUS: f64 = 5.0;

    /// Radius of handle points (selected node only)
    pub const HANDLE_RADIUS: f64 = 4.0;

    /// Width of construction lines
    pub const HANDLE_LINE_WIDTH: f64 = 1.0;

    /// Dash pattern for construction lines [dash_length, gap_length]
    pub const HANDLE_LINE_DASH: [f64; 2] = [4.0, 4.0];

    /// Width of the export boundary outline
    pub const BOUNDARY_LINE_WIDTH: f64 = 1.0;

    /// Dash pattern for the export boundary outline
    pub const BOUNDARY_DASH: [f64; 2] = [6.0, 4.0];

    /// Length of each arm of a boundary corner tick
    pub const BOUNDARY_TICK_LENGTH: f64 = 12.0;

    /// Width of boundary corner ticks
    pub const BOUNDARY_TICK_WIDTH: f64 = 2.0;
}
