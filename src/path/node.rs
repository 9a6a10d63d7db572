// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! A single node of a Bezier path: an anchor plus optional handles.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Node classification
///
/// Controls how the opposite handle reacts when one handle is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Handles move independently
    #[default]
    Corner,
    /// Handles stay collinear, each keeps its own length
    Smooth,
    /// Handles stay collinear and equally long
    Symmetric,
}

/// Which coordinate of a node an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleKind {
    /// The anchor point
    Point,
    /// The incoming handle
    LeftHandle,
    /// The outgoing handle
    RightHandle,
}

impl HandleKind {
    /// The handle on the other side of the anchor, if this is a handle
    pub fn opposite(self) -> Option<HandleKind> {
        match self {
            HandleKind::Point => None,
            HandleKind::LeftHandle => Some(HandleKind::RightHandle),
            HandleKind::RightHandle => Some(HandleKind::LeftHandle),
        }
    }
}

/// A point on the path plus up to two handles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BezierNode {
    /// The anchor the curve passes through
    pub point: Point,

    /// Shapes the segment arriving from the previous node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_handle: Option<Point>,

    /// Shapes the segment leaving towards the next node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_handle: Option<Point>,

    #[serde(rename = "type", default)]
    pub node_type: NodeType,

    /// Transient UI flag, never written to disk
    #[serde(skip)]
    pub selected: bool,
}

impl BezierNode {
    /// Create a node with no handles
    pub fn new(point: Point) -> Self {
        Self {
            point,
            left_handle: None,
            right_handle: None,
            node_type: NodeType::default(),
            selected: false,
        }
    }

    pub fn with_left_handle(mut self, handle: Point) -> Self {
        self.left_handle = Some(handle);
        self
    }

    pub fn with_right_handle(mut self, handle: Point) -> Self {
        self.right_handle = Some(handle);
        self
    }

    pub fn with_type(mut self, node_type: NodeType) -> Self {
        self.node_type = node_type;
        self
    }

    /// Incoming control point, falling back to the anchor
    pub fn left_control(&self) -> Point {
        self.left_handle.unwrap_or(self.point)
    }

    /// Outgoing control point, falling back to the anchor
    pub fn right_control(&self) -> Point {
        self.right_handle.unwrap_or(self.point)
    }

    /// Read one coordinate. Absent handles return `None`.
    pub fn get(&self, kind: HandleKind) -> Option<Point> {
        match kind {
            HandleKind::Point => Some(self.point),
            HandleKind::LeftHandle => self.left_handle,
            HandleKind::RightHandle => self.right_handle,
        }
    }

    /// Overwrite one coordinate, creating the handle if it was absent
    pub fn set(&mut self, kind: HandleKind, value: Point) {
        match kind {
            HandleKind::Point => self.point = value,
            HandleKind::LeftHandle => self.left_handle = Some(value),
            HandleKind::RightHandle => self.right_handle = Some(value),
        }
    }

    /// Anchor and present handles, anchor first
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.point)
            .chain(self.left_handle)
            .chain(self.right_handle)
    }

    /// Re-align the handle opposite `moved` according to the node type.
    ///
    /// Corner nodes, anchor moves, and nodes without an opposite handle
    /// are left unchanged.
    pub fn constrain_handles(&mut self, moved: HandleKind) {
        let Some(opposite) = moved.opposite() else {
            return;
        };
        let (Some(moved_pos), Some(opposite_pos)) = (self.get(moved), self.get(opposite)) else {
            return;
        };

        let dir = moved_pos - self.point;
        let len = dir.hypot();
        if len < 1e-9 {
            return;
        }

        let opposite_len = match self.node_type {
            NodeType::Corner => return,
            NodeType::Smooth => (opposite_pos - self.point).hypot(),
            NodeType::Symmetric => len,
        };

        self.set(opposite, self.point - dir * (opposite_len / len));
    }
}
