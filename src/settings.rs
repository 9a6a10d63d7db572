// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`, and
//! per-user values that can change between runs live in `config.rs`.

// ============================================================================
// VIEWPORT SETTINGS
// ============================================================================
/// Minimum zoom level (10% of original size)
const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level (5x original size)
const MAX_ZOOM: f64 = 5.0;

/// Zoom multiplier for one wheel tick towards the user
const WHEEL_ZOOM_IN: f64 = 1.1;

/// Zoom multiplier for one wheel tick away from the user
const WHEEL_ZOOM_OUT: f64 = 0.9;

// ============================================================================
// HIT TESTING SETTINGS
// ============================================================================
// All distances are in screen pixels. They are divided by the zoom factor
// before being compared against model-space distances.

/// Click radius for anchor points
const ANCHOR_HIT_RADIUS: f64 = 10.0;

/// Click radius for handles of the selected node
const HANDLE_HIT_RADIUS: f64 = 8.0;

/// Maximum distance from the curve for double-click insertion
const INSERT_HIT_DISTANCE: f64 = 20.0;

// ============================================================================
// GEOMETRY SETTINGS
// ============================================================================
/// Samples per segment for nearest-point search
const NEAREST_SAMPLE_STEPS: usize = 20;

/// Fraction of the split-point-to-handle vector kept by inserted nodes
const INSERT_HANDLE_DAMPING: f64 = 0.3;

// ============================================================================
// SAVE SETTINGS
// ============================================================================
/// Extra margin around the stroked curve when computing the shape frame
const SAVE_PADDING: f64 = 10.0;

/// Minimum stroke width accepted from input or property controls
const MIN_STROKE_WIDTH: f64 = 1.0;

// ============================================================================
// UNDO SETTINGS
// ============================================================================
/// Maximum number of undo groups kept in history
const UNDO_DEPTH: usize = 128;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Viewport settings (zoom limits and wheel behavior)
pub mod viewport {
    /// Minimum zoom level
    pub const MIN_ZOOM: f64 = super::MIN_ZOOM;

    /// Maximum zoom level
    pub const MAX_ZOOM: f64 = super::MAX_ZOOM;

    /// Multiplier applied per wheel tick when zooming in
    pub const WHEEL_ZOOM_IN: f64 = super::WHEEL_ZOOM_IN;

    /// Multiplier applied per wheel tick when zooming out
    pub const WHEEL_ZOOM_OUT: f64 = super::WHEEL_ZOOM_OUT;
}

/// Hit testing radii, in screen pixels
pub mod hit {
    pub const ANCHOR_RADIUS: f64 = super::ANCHOR_HIT_RADIUS;
    pub const HANDLE_RADIUS: f64 = super::HANDLE_HIT_RADIUS;
    pub const INSERT_DISTANCE: f64 = super::INSERT_HIT_DISTANCE;
}

/// Curve sampling and node insertion
pub mod geometry {
    /// Sample count per segment for `closest_point_on_path`
    pub const NEAREST_SAMPLE_STEPS: usize = super::NEAREST_SAMPLE_STEPS;

    /// Handle damping for newly inserted nodes
    pub const INSERT_HANDLE_DAMPING: f64 = super::INSERT_HANDLE_DAMPING;
}

/// Shape export settings
pub mod save {
    /// Margin added on top of the stroke width around saved bounds
    pub const PADDING: f64 = super::SAVE_PADDING;

    /// Stroke widths below this are clamped up
    pub const MIN_STROKE_WIDTH: f64 = super::MIN_STROKE_WIDTH;
}

/// Undo history settings
pub mod undo {
    /// Maximum number of undo groups
    pub const DEPTH: usize = super::UNDO_DEPTH;
}
