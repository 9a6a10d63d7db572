// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing for anchors and handles

use super::viewport::ViewPort;
use crate::path::{BezierPath, HandleKind};
use crate::settings;
use kurbo::Point;

/// A node coordinate under the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestResult {
    pub node: usize,
    pub handle: HandleKind,
    /// Model-space distance from the pointer
    pub distance: f64,
}

/// Find the node coordinate under `model_pos`
///
/// Anchors use `settings::hit::ANCHOR_RADIUS` and handles
/// `settings::hit::HANDLE_RADIUS`, both converted from screen pixels into
/// model units by the current zoom. Only the selected node's handles are
/// candidates. The first match wins, scanning nodes in index order and
/// testing the anchor before the left and right handles.
pub fn hit_test_nodes(
    path: &BezierPath,
    viewport: &ViewPort,
    model_pos: Point,
) -> Option<HitTestResult> {
    let anchor_radius = viewport.screen_dist_to_model(settings::hit::ANCHOR_RADIUS);
    let handle_radius = viewport.screen_dist_to_model(settings::hit::HANDLE_RADIUS);

    for (index, node) in path.nodes.iter().enumerate() {
        let mut candidates = vec![(HandleKind::Point, node.point, anchor_radius)];
        if node.selected {
            candidates.extend(
                [HandleKind::LeftHandle, HandleKind::RightHandle]
                    .into_iter()
                    .filter_map(|kind| node.get(kind).map(|p| (kind, p, handle_radius))),
            );
        }

        for (handle, pos, radius) in candidates {
            let distance = pos.distance(model_pos);
            if distance < radius {
                tracing::debug!(
                    "[hit_test_nodes] hit node {} {:?} at distance {:.2}",
                    index,
                    handle,
                    distance
                );
                return Some(HitTestResult {
                    node: index,
                    handle,
                    distance,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::BezierNode;
    use kurbo::Vec2;

    fn path() -> BezierPath {
        BezierPath::new(
            vec![
                BezierNode::new(Point::new(0.0, 0.0)).with_right_handle(Point::new(30.0, 0.0)),
                BezierNode::new(Point::new(100.0, 0.0)).with_left_handle(Point::new(70.0, 0.0)),
            ],
            false,
        )
    }

    #[test]
    fn threshold_scales_with_zoom() {
        let path = path();
        for zoom in [0.5, 1.0, 2.0, 4.0] {
            let vp = ViewPort {
                zoom,
                offset: Vec2::ZERO,
            };
            let limit = 10.0 / zoom;
            let inside = Point::new(limit * 0.99, 0.0);
            let outside = Point::new(limit * 1.01, 0.0);
            assert_eq!(hit_test_nodes(&path, &vp, inside).map(|h| h.node), Some(0));
            assert!(hit_test_nodes(&path, &vp, outside).is_none());
        }
    }

    #[test]
    fn exact_threshold_is_a_miss() {
        let vp = ViewPort::new();
        assert!(hit_test_nodes(&path(), &vp, Point::new(0.0, 10.0)).is_none());
    }

    #[test]
    fn handles_only_for_selected_node() {
        let mut path = path();
        let vp = ViewPort::new();
        let on_handle = Point::new(30.0, 1.0);
        assert!(hit_test_nodes(&path, &vp, on_handle).is_none());

        path.select(0);
        let hit = hit_test_nodes(&path, &vp, on_handle).unwrap();
        assert_eq!(hit.node, 0);
        assert_eq!(hit.handle, HandleKind::RightHandle);
    }

    #[test]
    fn first_match_wins() {
        let path = BezierPath::new(
            vec![
                BezierNode::new(Point::new(0.0, 0.0)),
                BezierNode::new(Point::new(4.0, 0.0)),
            ],
            false,
        );
        let hit = hit_test_nodes(&path, &ViewPort::new(), Point::new(3.5, 0.0)).unwrap();
        assert_eq!(hit.node, 0);
    }
}
