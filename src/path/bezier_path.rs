// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! The editable multi-node Bezier path and its structural edits.
//!
//! Every edit takes `&self` and returns a new `BezierPath`, so callers can
//! keep the previous value around for undo without worrying about aliasing.
//! Nodes are identified by their index. There is no reorder operation:
//! the order nodes were inserted in is the curve's parametrization order.

use super::{BezierNode, HandleKind, NodeType, Segment};
use crate::settings;
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// An ordered sequence of nodes, optionally closed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BezierPath {
    pub nodes: Vec<BezierNode>,
    #[serde(default)]
    pub closed: bool,
}

impl BezierPath {
    pub fn new(nodes: Vec<BezierNode>, closed: bool) -> Self {
        Self { nodes, closed }
    }

    /// The canned S-curve used when a shape has no usable curve data
    pub fn default_s_curve() -> Self {
        Self::new(
            vec![
                BezierNode::new(Point::new(100.0, 250.0))
                    .with_right_handle(Point::new(200.0, 100.0))
                    .with_type(NodeType::Smooth),
                BezierNode::new(Point::new(400.0, 250.0))
                    .with_left_handle(Point::new(300.0, 400.0))
                    .with_type(NodeType::Smooth),
            ],
            false,
        )
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the implicit closing segment is drawn
    fn has_closing_segment(&self) -> bool {
        self.closed && self.nodes.len() > 2
    }

    /// Number of drawable segments
    pub fn segment_count(&self) -> usize {
        match self.nodes.len() {
            0 | 1 => 0,
            n if self.has_closing_segment() => n,
            n => n - 1,
        }
    }

    /// Iterate over the segments in draw order
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.nodes.len();
        (0..self.segment_count())
            .map(move |i| Segment::between(i, &self.nodes[i], &self.nodes[(i + 1) % n]))
    }

    pub fn segment(&self, index: usize) -> Option<Segment> {
        if index >= self.segment_count() {
            return None;
        }
        let next = (index + 1) % self.nodes.len();
        Some(Segment::between(index, &self.nodes[index], &self.nodes[next]))
    }

    /// Anchors and every present handle, in node order
    pub fn all_points(&self) -> Vec<Point> {
        self.nodes.iter().flat_map(|node| node.points()).collect()
    }

    // ===== STRUCTURAL EDITS =====

    /// Split a segment at `t` and insert a smooth node there.
    ///
    /// The new node's handles point back along the original inner control
    /// points, shortened by the insertion damping factor. Neighbouring
    /// nodes keep their handles. An out-of-range segment returns the path
    /// unchanged.
    pub fn insert_node(&self, segment_index: usize, t: f64) -> BezierPath {
        let Some(segment) = self.segment(segment_index) else {
            tracing::debug!("insert_node: no segment {}", segment_index);
            return self.clone();
        };

        let t = t.clamp(0.0, 1.0);
        let split = segment.eval(t);
        let damping = settings::geometry::INSERT_HANDLE_DAMPING;

        let node = BezierNode::new(split)
            .with_left_handle(split + (segment.p1 - split) * damping)
            .with_right_handle(split + (segment.p2 - split) * damping)
            .with_type(NodeType::Smooth);

        let mut next = self.clone();
        next.nodes.insert(segment_index + 1, node);
        tracing::debug!(
            "Inserted node at index {} ({:.1}, {:.1})",
            segment_index + 1,
            split.x,
            split.y
        );
        next
    }

    /// Remove a node. Paths never drop below two nodes.
    pub fn delete_node(&self, index: usize) -> BezierPath {
        if self.nodes.len() <= 2 || index >= self.nodes.len() {
            tracing::debug!(
                "delete_node: rejected index {} on {}-node path",
                index,
                self.nodes.len()
            );
            return self.clone();
        }

        let mut next = self.clone();
        next.nodes.remove(index);
        next
    }

    /// Replace exactly one coordinate on one node
    pub fn update_node_geometry(
        &self,
        index: usize,
        field: HandleKind,
        value: Point,
    ) -> BezierPath {
        let mut next = self.clone();
        if let Some(node) = next.nodes.get_mut(index) {
            node.set(field, value);
        }
        next
    }

    /// Apply the node-type handle coupling after `moved` changed
    pub fn with_handle_constraint(&self, index: usize, moved: HandleKind) -> BezierPath {
        let mut next = self.clone();
        if let Some(node) = next.nodes.get_mut(index) {
            node.constrain_handles(moved);
        }
        next
    }

    pub fn with_closed(&self, closed: bool) -> BezierPath {
        let mut next = self.clone();
        next.closed = closed;
        next
    }

    // ===== SELECTION =====

    /// Index of the selected node, if any
    pub fn selected_index(&self) -> Option<usize> {
        self.nodes.iter().position(|node| node.selected)
    }

    /// Select exactly one node
    pub fn select(&mut self, index: usize) {
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.selected = i == index;
        }
    }

    pub fn clear_selection(&mut self) {
        for node in &mut self.nodes {
            node.selected = false;
        }
    }

    // ===== CONVERSION =====

    /// Serialize to an SVG `d` attribute
    ///
    /// `M` for the first anchor, one `C` per segment, and for closed paths
    /// with more than two nodes a final closing `C` followed by `Z`.
    pub fn to_svg_path_data(&self) -> String {
        let Some(first) = self.nodes.first() else {
            return String::new();
        };

        let mut d = format!("M {} {}", first.point.x, first.point.y);
        for segment in self.segments() {
            let _ = write!(
                d,
                " C {} {} {} {} {} {}",
                segment.p1.x, segment.p1.y, segment.p2.x, segment.p2.y, segment.p3.x, segment.p3.y
            );
        }
        if self.has_closing_segment() {
            d.push_str(" Z");
        }
        d
    }

    /// Convert to a kurbo BezPath for rendering
    pub fn to_bezpath(&self) -> BezPath {
        let mut bez = BezPath::new();
        let Some(first) = self.nodes.first() else {
            return bez;
        };
        bez.move_to(first.point);
        for segment in self.segments() {
            bez.curve_to(segment.p1, segment.p2, segment.p3);
        }
        if self.has_closing_segment() {
            bez.close_path();
        }
        bez
    }
}
