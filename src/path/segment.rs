// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Segment view over a pair of consecutive nodes

use super::BezierNode;
use kurbo::{CubicBez, Point};

/// The cubic curve between two consecutive nodes
///
/// `index` is the index of the starting node; the closing segment of a
/// closed path has `index == nodes.len() - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Segment {
    /// Build the segment leaving `from` and arriving at `to`
    pub fn between(index: usize, from: &BezierNode, to: &BezierNode) -> Self {
        Self {
            index,
            p0: from.point,
            p1: from.right_control(),
            p2: to.left_control(),
            p3: to.point,
        }
    }

    /// Point on the segment at parameter `t`
    pub fn eval(&self, t: f64) -> Point {
        crate::geometry::evaluate_cubic_bezier(self.p0, self.p1, self.p2, self.p3, t)
    }
}

impl From<Segment> for CubicBez {
    fn from(s: Segment) -> CubicBez {
        CubicBez::new(s.p0, s.p1, s.p2, s.p3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::ParamCurve;

    #[test]
    fn cubic_matches_own_evaluation() {
        let mut from = BezierNode::new(Point::new(0.0, 0.0));
        from.right_handle = Some(Point::new(30.0, -40.0));
        let to = BezierNode::new(Point::new(100.0, 0.0));
        let segment = Segment::between(0, &from, &to);
        // absent left handle collapses onto the anchor
        assert_eq!(segment.p2, to.point);

        let cubic = CubicBez::from(segment);
        for t in [0.0, 0.25, 0.5, 0.9, 1.0] {
            let ours = segment.eval(t);
            let theirs = cubic.eval(t);
            assert!((ours - theirs).hypot() < 1e-9);
        }
    }
}
