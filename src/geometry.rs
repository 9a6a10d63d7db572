// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry kernel: stateless curve math used by the path model, the
//! interaction layer, and the rasterizer.
//!
//! Paths here are small (tens of nodes), so nearest-point search is a
//! brute-force scan over fixed-resolution samples. It only runs on
//! double-click, never per frame.

use crate::path::{BezierNode, BezierPath};
use kurbo::{Point, Rect};

/// Evaluate a cubic Bezier at `t` using the Bernstein form
pub fn evaluate_cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Polyline approximation of the segment from `a` to `b`
///
/// Returns `steps + 1` points, the first at `t = 0` and the last at
/// `t = 1`. A `steps` of zero is treated as one.
pub fn sample_segment(a: &BezierNode, b: &BezierNode, steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    let (p0, p1, p2, p3) = (a.point, a.right_control(), b.left_control(), b.point);
    (0..=steps)
        .map(|i| evaluate_cubic_bezier(p0, p1, p2, p3, i as f64 / steps as f64))
        .collect()
}

/// Axis-aligned bounds of a point set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grow every side by `margin`
    pub fn expand(&self, margin: f64) -> Bounds {
        Bounds {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}

impl From<Bounds> for Rect {
    fn from(b: Bounds) -> Rect {
        Rect::new(b.min_x, b.min_y, b.max_x, b.max_y)
    }
}

/// Exact min/max reduction; `None` for an empty input
pub fn compute_bounds<I>(points: I) -> Option<Bounds>
where
    I: IntoIterator<Item = Point>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let init = Bounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    Some(iter.fold(init, |b, p| Bounds {
        min_x: b.min_x.min(p.x),
        min_y: b.min_y.min(p.y),
        max_x: b.max_x.max(p.x),
        max_y: b.max_y.max(p.y),
    }))
}

/// Result of a nearest-point search along a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    pub segment_index: usize,
    pub t: f64,
    pub distance: f64,
    pub point: Point,
}

/// Find the sampled point on `path` nearest to `target`
///
/// Each segment is sampled at `samples_per_segment` steps. Ties keep the
/// earliest sample. Returns `None` when the path has no segments.
pub fn closest_point_on_path(
    path: &BezierPath,
    target: Point,
    samples_per_segment: usize,
) -> Option<ClosestPoint> {
    let n = path.nodes.len();
    let mut best: Option<ClosestPoint> = None;

    for segment_index in 0..path.segment_count() {
        let a = &path.nodes[segment_index];
        let b = &path.nodes[(segment_index + 1) % n];
        let samples = sample_segment(a, b, samples_per_segment);
        let steps = samples.len() - 1;
        for (i, point) in samples.into_iter().enumerate() {
            let distance = point.distance(target);
            if best.is_none_or(|current| distance < current.distance) {
                best = Some(ClosestPoint {
                    segment_index,
                    t: i as f64 / steps as f64,
                    distance,
                    point,
                });
            }
        }
    }

    best
}
