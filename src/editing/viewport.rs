// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! View transform between model space and screen space.
//!
//! `screen = model * zoom + offset`. The transform is presentation state
//! only and is never saved with a shape.

use crate::settings;
use kurbo::{Affine, Point, Vec2};

/// Zoom and pan for the editor canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    /// Scale factor, kept within the configured zoom limits
    pub zoom: f64,
    /// Screen-space position of the model origin
    pub offset: Vec2,
}

impl ViewPort {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Affine mapping model space to screen space
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    pub fn to_screen(&self, model: Point) -> Point {
        Point::new(
            model.x * self.zoom + self.offset.x,
            model.y * self.zoom + self.offset.y,
        )
    }

    pub fn screen_to_model(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.zoom,
            (screen.y - self.offset.y) / self.zoom,
        )
    }

    /// Convert a screen-space distance into model space
    pub fn screen_dist_to_model(&self, dist: f64) -> f64 {
        dist / self.zoom
    }

    /// Pan by a raw screen-space delta
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Multiply the zoom, keeping `cursor` over the same model point.
    ///
    /// The resulting zoom is clamped to the viewport limits, and the offset
    /// is corrected with the ratio actually applied.
    pub fn zoom_at(&mut self, cursor: Point, factor: f64) {
        let old_zoom = self.zoom;
        let new_zoom =
            (old_zoom * factor).clamp(settings::viewport::MIN_ZOOM, settings::viewport::MAX_ZOOM);
        let ratio = new_zoom / old_zoom;
        let cursor = cursor.to_vec2();
        self.offset = cursor - (cursor - self.offset) * ratio;
        self.zoom = new_zoom;
    }
}

impl Default for ViewPort {
    fn default() -> Self {
        Self::new()
    }
}
