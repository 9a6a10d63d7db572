// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Display list produced by the renderer.
//!
//! Items are in screen space and in paint order. A host draws them with
//! whatever 2D surface it has; `svg::scene_to_svg` is the built-in
//! backend.

use crate::model::LineCap;
use kurbo::BezPath;
use peniko::Color;

/// What a draw item depicts, so hosts and tests can pick layers apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    ExportBoundary,
    BoundaryTick,
    Curve,
    HandleLine,
    Handle,
    Anchor,
}

/// How an item's shape is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill,
    Stroke {
        width: f64,
        cap: LineCap,
        /// `[dash_length, gap_length]`, solid when `None`
        dash: Option<[f64; 2]>,
    },
}

/// One shape in the display list
#[derive(Debug, Clone)]
pub struct DrawItem {
    pub layer: Layer,
    pub shape: BezPath,
    pub brush: Color,
    pub paint: Paint,
}

/// Ordered list of draw items
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: Vec<DrawItem>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&mut self, layer: Layer, shape: BezPath, brush: Color) {
        self.items.push(DrawItem {
            layer,
            shape,
            brush,
            paint: Paint::Fill,
        });
    }

    pub fn stroke(
        &mut self,
        layer: Layer,
        shape: BezPath,
        brush: Color,
        width: f64,
        cap: LineCap,
        dash: Option<[f64; 2]>,
    ) {
        self.items.push(DrawItem {
            layer,
            shape,
            brush,
            paint: Paint::Stroke { width, cap, dash },
        });
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items belonging to one layer, in paint order
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &DrawItem> {
        self.items.iter().filter(move |item| item.layer == layer)
    }

    pub fn count(&self, layer: Layer) -> usize {
        self.layer(layer).count()
    }
}
