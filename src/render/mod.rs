// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas rendering and bitmap output.
//!
//! `Renderer::render` turns a path, its style, and the current view into a
//! screen-space `Scene`. Paint order is back to front: export boundary,
//! curve, construction lines, handles, anchors.

pub mod raster;
pub mod scene;
pub mod svg;

pub use raster::{Bitmap, RasterFormat, RasterRequest, Rasterizer, StrokeRasterizer};
pub use scene::{DrawItem, Layer, Paint, Scene};
pub use svg::scene_to_svg;

use crate::editing::ViewPort;
use crate::model::{CurveStyle, LineCap};
use crate::path::BezierPath;
use crate::theme;
use kurbo::{BezPath, Circle, Point, Rect, Shape as _, Vec2};

/// Per-frame render switches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Output bitmap size to outline, centered on the model origin
    pub export_boundary: Option<(u32, u32)>,
}

/// Stateless canvas renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn render(
        &self,
        path: &BezierPath,
        style: &CurveStyle,
        viewport: &ViewPort,
        options: &RenderOptions,
    ) -> Scene {
        let mut scene = Scene::new();

        if let Some((width, height)) = options.export_boundary {
            draw_export_boundary(&mut scene, viewport, width, height);
        }

        draw_curve(&mut scene, path, style, viewport);

        if let Some(index) = path.selected_index() {
            draw_handles(&mut scene, path, index, viewport);
        }

        draw_anchors(&mut scene, path, viewport);

        scene
    }
}

fn line(from: Point, to: Point) -> BezPath {
    let mut bez = BezPath::new();
    bez.move_to(from);
    bez.line_to(to);
    bez
}

fn draw_curve(scene: &mut Scene, path: &BezierPath, style: &CurveStyle, viewport: &ViewPort) {
    if path.segment_count() == 0 {
        return;
    }
    let screen_path = viewport.affine() * path.to_bezpath();
    scene.stroke(
        Layer::Curve,
        screen_path,
        style.color(),
        style.stroke_width * viewport.zoom,
        style.line_cap,
        None,
    );
}

fn draw_handles(scene: &mut Scene, path: &BezierPath, index: usize, viewport: &ViewPort) {
    let node = &path.nodes[index];
    let anchor = viewport.to_screen(node.point);
    let handles = [node.left_handle, node.right_handle];

    for handle in handles.iter().flatten() {
        scene.stroke(
            Layer::HandleLine,
            line(anchor, viewport.to_screen(*handle)),
            theme::handle::LINE,
            theme::size::HANDLE_LINE_WIDTH,
            LineCap::Butt,
            Some(theme::size::HANDLE_LINE_DASH),
        );
    }

    for handle in handles.iter().flatten() {
        let circle = Circle::new(viewport.to_screen(*handle), theme::size::HANDLE_RADIUS);
        scene.fill(Layer::Handle, circle.to_path(0.1), theme::point::HANDLE);
    }
}

fn draw_anchors(scene: &mut Scene, path: &BezierPath, viewport: &ViewPort) {
    for node in &path.nodes {
        let color = if node.selected {
            theme::point::SELECTED_ANCHOR
        } else {
            theme::point::ANCHOR
        };
        let circle = Circle::new(viewport.to_screen(node.point), theme::size::ANCHOR_RADIUS);
        scene.fill(Layer::Anchor, circle.to_path(0.1), color);
    }
}

fn draw_export_boundary(scene: &mut Scene, viewport: &ViewPort, width: u32, height: u32) {
    let half = Vec2::new(width as f64 / 2.0, height as f64 / 2.0);
    let top_left = viewport.to_screen(Point::ZERO - half);
    let bottom_right = viewport.to_screen(Point::ZERO + half);
    let rect = Rect::from_points(top_left, bottom_right);

    scene.stroke(
        Layer::ExportBoundary,
        rect.to_path(0.1),
        theme::boundary::OUTLINE,
        theme::size::BOUNDARY_LINE_WIDTH,
        LineCap::Butt,
        Some(theme::size::BOUNDARY_DASH),
    );

    // Each tick runs inward along both edges meeting at its corner
    let len = theme::size::BOUNDARY_TICK_LENGTH;
    let corners = [
        (Point::new(rect.x0, rect.y0), Vec2::new(len, 0.0), Vec2::new(0.0, len)),
        (Point::new(rect.x1, rect.y0), Vec2::new(-len, 0.0), Vec2::new(0.0, len)),
        (Point::new(rect.x1, rect.y1), Vec2::new(-len, 0.0), Vec2::new(0.0, -len)),
        (Point::new(rect.x0, rect.y1), Vec2::new(len, 0.0), Vec2::new(0.0, -len)),
    ];
    for (corner, along_x, along_y) in corners {
        let mut tick = BezPath::new();
        tick.move_to(corner + along_x);
        tick.line_to(corner);
        tick.line_to(corner + along_y);
        scene.stroke(
            Layer::BoundaryTick,
            tick,
            theme::boundary::TICK,
            theme::size::BOUNDARY_TICK_WIDTH,
            LineCap::Square,
            None,
        );
    }
}
