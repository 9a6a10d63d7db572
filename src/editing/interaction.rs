// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer and keyboard state machine for the path editor.
//!
//! `Interaction` owns the drag state and the view transform and applies
//! input to a `BezierPath` it borrows for the duration of each event.
//! Every transition completes synchronously inside the handler; there is
//! nothing to wait on between events.
//!
//! ```text
//!          down on node            move
//!   Idle ───────────────▶ DraggingPoint ──┐ (update geometry)
//!    ▲  ▲                     │    ◀──────┘
//!    │  └─────── up/leave ────┘
//!    │
//!    │  middle/alt down       move
//!    └──────────────▶ Panning ──┐ (offset += screen delta)
//!       up/leave  ◀──    ◀──────┘
//! ```
//!
//! Wheel zoom is instantaneous and leaves the drag state alone.

use super::edit_types::EditType;
use super::hit_test::hit_test_nodes;
use super::mouse::{Key, KeyEvent, MouseButton, MouseEvent};
use super::viewport::ViewPort;
use crate::geometry::closest_point_on_path;
use crate::path::{BezierPath, HandleKind};
use crate::settings;
use kurbo::Point;

/// What the pointer is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Moving one coordinate of one node
    DraggingPoint { node: usize, handle: HandleKind },
    /// Moving the view; `last` is the previous screen position
    Panning { last: Point },
}

/// Result of feeding one event to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing visible changed
    Unchanged,
    /// Selection or view changed; the path geometry did not
    Redraw,
    /// The path geometry or structure changed
    Edited(EditType),
}

impl Outcome {
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

/// Interaction state: drag mode plus view transform
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    pub viewport: ViewPort,
    state: DragState,
}

impl Interaction {
    pub fn new(viewport: ViewPort) -> Self {
        Self {
            viewport,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Pointer pressed on the canvas
    pub fn pointer_down(&mut self, path: &mut BezierPath, event: &MouseEvent) -> Outcome {
        if event.button == MouseButton::Middle || event.mods.alt {
            tracing::debug!("[Interaction] start panning at {:?}", event.pos);
            self.state = DragState::Panning { last: event.pos };
            return Outcome::Unchanged;
        }
        if event.button != MouseButton::Left {
            return Outcome::Unchanged;
        }

        let model_pos = self.viewport.screen_to_model(event.pos);

        if let Some(hit) = hit_test_nodes(path, &self.viewport, model_pos) {
            path.select(hit.node);
            self.state = DragState::DraggingPoint {
                node: hit.node,
                handle: hit.handle,
            };
            tracing::debug!("[Interaction] dragging node {} {:?}", hit.node, hit.handle);
            return Outcome::Redraw;
        }

        if event.is_double_click()
            && let Some(outcome) = self.try_insert(path, model_pos)
        {
            return outcome;
        }

        let had_selection = path.selected_index().is_some();
        path.clear_selection();
        self.state = DragState::Idle;
        if had_selection {
            Outcome::Redraw
        } else {
            Outcome::Unchanged
        }
    }

    /// Insert a node where a double-click landed close enough to the curve
    fn try_insert(&mut self, path: &mut BezierPath, model_pos: Point) -> Option<Outcome> {
        let closest =
            closest_point_on_path(path, model_pos, settings::geometry::NEAREST_SAMPLE_STEPS)?;
        let max_dist = self
            .viewport
            .screen_dist_to_model(settings::hit::INSERT_DISTANCE);
        if closest.distance >= max_dist {
            tracing::debug!(
                "[Interaction] double-click {:.1} from curve, limit {:.1}",
                closest.distance,
                max_dist
            );
            return None;
        }

        let new_index = closest.segment_index + 1;
        *path = path.insert_node(closest.segment_index, closest.t);
        path.select(new_index);
        self.state = DragState::Idle;
        Some(Outcome::Edited(EditType::Normal))
    }

    /// Pointer moved, pressed or not
    pub fn pointer_move(&mut self, path: &mut BezierPath, event: &MouseEvent) -> Outcome {
        match self.state {
            DragState::Idle => Outcome::Unchanged,
            DragState::DraggingPoint { node, handle } => {
                let model_pos = self.viewport.screen_to_model(event.pos);
                let mut next = path.update_node_geometry(node, handle, model_pos);
                if handle != HandleKind::Point {
                    next = next.with_handle_constraint(node, handle);
                }
                if next == *path {
                    return Outcome::Unchanged;
                }
                *path = next;
                Outcome::Edited(EditType::Drag)
            }
            DragState::Panning { last } => {
                self.viewport.pan_by(event.pos - last);
                self.state = DragState::Panning { last: event.pos };
                Outcome::Redraw
            }
        }
    }

    /// Pointer released or left the canvas; always returns to `Idle`
    pub fn release(&mut self) -> Outcome {
        let was = std::mem::take(&mut self.state);
        if was != DragState::Idle {
            tracing::debug!("[Interaction] release from {:?}", was);
        }
        Outcome::Unchanged
    }

    /// Wheel tick at `pos`; negative deltas zoom in
    pub fn wheel(&mut self, pos: Point, delta: f64) -> Outcome {
        let factor = if delta < 0.0 {
            settings::viewport::WHEEL_ZOOM_IN
        } else if delta > 0.0 {
            settings::viewport::WHEEL_ZOOM_OUT
        } else {
            return Outcome::Unchanged;
        };
        self.viewport.zoom_at(pos, factor);
        tracing::debug!("[Interaction] zoom {:.3}", self.viewport.zoom);
        Outcome::Redraw
    }

    /// Editing keys: Delete/Backspace removes the selected node, Escape
    /// deselects
    pub fn key(&mut self, path: &mut BezierPath, event: &KeyEvent) -> Outcome {
        match event.key {
            Key::Delete | Key::Backspace => {
                let Some(index) = path.selected_index() else {
                    return Outcome::Unchanged;
                };
                let next = path.delete_node(index);
                if next.len() == path.len() {
                    return Outcome::Unchanged;
                }
                *path = next;
                self.state = DragState::Idle;
                tracing::debug!("[Interaction] deleted node {}", index);
                Outcome::Edited(EditType::Normal)
            }
            Key::Escape => {
                let had_selection = path.selected_index().is_some();
                path.clear_selection();
                self.state = DragState::Idle;
                if had_selection {
                    Outcome::Redraw
                } else {
                    Outcome::Unchanged
                }
            }
            Key::Character(_) => Outcome::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::mouse::Modifiers;
    use crate::path::BezierNode;
    use kurbo::Vec2;

    fn down(x: f64, y: f64) -> MouseEvent {
        MouseEvent::new(Point::new(x, y))
    }

    #[test]
    fn drag_anchor_moves_it() {
        let mut path = BezierPath::default_s_curve();
        let mut ix = Interaction::default();

        assert_eq!(ix.pointer_down(&mut path, &down(100.0, 250.0)), Outcome::Redraw);
        assert_eq!(
            ix.state(),
            DragState::DraggingPoint {
                node: 0,
                handle: HandleKind::Point
            }
        );
        assert_eq!(
            ix.pointer_move(&mut path, &down(150.0, 200.0)),
            Outcome::Edited(EditType::Drag)
        );
        ix.release();

        assert_eq!(path.nodes[0].point, Point::new(150.0, 200.0));
        assert_eq!(path.nodes[0].right_handle, Some(Point::new(200.0, 100.0)));
        assert_eq!(ix.state(), DragState::Idle);
    }

    #[test]
    fn move_without_change_is_unchanged() {
        let mut path = BezierPath::default_s_curve();
        let mut ix = Interaction::default();
        ix.pointer_down(&mut path, &down(400.0, 250.0));
        let before = path.clone();
        assert_eq!(ix.pointer_move(&mut path, &down(400.0, 250.0)), Outcome::Unchanged);
        assert_eq!(path, before);

        // the dragged node went away underneath the drag
        let mut shorter = BezierPath::new(path.nodes[..1].to_vec(), false);
        let short_before = shorter.clone();
        assert_eq!(ix.pointer_move(&mut shorter, &down(10.0, 10.0)), Outcome::Unchanged);
        assert_eq!(shorter, short_before);
    }

    #[test]
    fn drag_uses_model_coordinates() {
        let mut path = BezierPath::default_s_curve();
        let mut ix = Interaction::new(ViewPort {
            zoom: 2.0,
            offset: Vec2::new(10.0, 20.0),
        });
        // node 0 at (100, 250) is at screen (210, 520)
        ix.pointer_down(&mut path, &down(210.0, 520.0));
        ix.pointer_move(&mut path, &down(310.0, 420.0));
        assert_eq!(path.nodes[0].point, Point::new(150.0, 200.0));
    }

    #[test]
    fn leave_mid_drag_returns_to_idle() {
        let mut path = BezierPath::default_s_curve();
        let mut ix = Interaction::default();
        ix.pointer_down(&mut path, &down(100.0, 250.0));
        ix.release();
        assert_eq!(ix.state(), DragState::Idle);
        let before = path.clone();
        assert_eq!(ix.pointer_move(&mut path, &down(0.0, 0.0)), Outcome::Unchanged);
        assert_eq!(path, before);
    }

    #[test]
    fn miss_deselects() {
        let mut path = BezierPath::default_s_curve();
        path.select(1);
        let mut ix = Interaction::default();
        assert_eq!(ix.pointer_down(&mut path, &down(700.0, 700.0)), Outcome::Redraw);
        assert_eq!(path.selected_index(), None);
        assert_eq!(ix.state(), DragState::Idle);
    }

    #[test]
    fn handle_drag_requires_selection() {
        let mut path = BezierPath::default_s_curve();
        let mut ix = Interaction::default();
        // right handle of node 0 at (200, 100), node not yet selected
        ix.pointer_down(&mut path, &down(200.0, 100.0));
        assert_eq!(ix.state(), DragState::Idle);

        path.select(0);
        ix.pointer_down(&mut path, &down(201.0, 101.0));
        assert_eq!(
            ix.state(),
            DragState::DraggingPoint {
                node: 0,
                handle: HandleKind::RightHandle
            }
        );
        ix.pointer_move(&mut path, &down(220.0, 90.0));
        assert_eq!(path.nodes[0].right_handle, Some(Point::new(220.0, 90.0)));
    }

    #[test]
    fn symmetric_handle_drag_mirrors() {
        let mut path = BezierPath::new(
            vec![
                BezierNode::new(Point::new(0.0, 0.0)),
                BezierNode::new(Point::new(100.0, 0.0))
                    .with_left_handle(Point::new(80.0, 0.0))
                    .with_right_handle(Point::new(120.0, 0.0))
                    .with_type(crate::path::NodeType::Symmetric),
                BezierNode::new(Point::new(200.0, 0.0)),
            ],
            false,
        );
        path.select(1);
        let mut ix = Interaction::default();
        ix.pointer_down(&mut path, &down(120.0, 0.0));
        ix.pointer_move(&mut path, &down(100.0, 30.0));
        let left = path.nodes[1].left_handle.unwrap();
        assert!(left.distance(Point::new(100.0, -30.0)) < 1e-9);
    }

    #[test]
    fn double_click_near_curve_inserts() {
        let mut path = BezierPath::default_s_curve();
        let mid = path.segment(0).unwrap().eval(0.5);
        let mut ix = Interaction::default();
        // 5px off the curve, perpendicular to its tangent at the midpoint
        let event = down(mid.x - 3.0, mid.y + 4.0).with_clicks(2);
        assert_eq!(
            ix.pointer_down(&mut path, &event),
            Outcome::Edited(EditType::Normal)
        );
        assert_eq!(path.len(), 3);
        assert_eq!(path.nodes[1].point, mid);
        assert_eq!(path.selected_index(), Some(1));
    }

    #[test]
    fn double_click_far_from_curve_is_noop() {
        let mut path = BezierPath::default_s_curve();
        let mut ix = Interaction::default();
        let event = down(700.0, 700.0).with_clicks(2);
        assert_eq!(ix.pointer_down(&mut path, &event), Outcome::Unchanged);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn insert_threshold_scales_with_zoom() {
        let mut path = BezierPath::default_s_curve();
        let mid = path.segment(0).unwrap().eval(0.5);
        // 15 model units away: inside 20px at zoom 1, outside at zoom 2
        let mut ix = Interaction::new(ViewPort {
            zoom: 2.0,
            offset: Vec2::ZERO,
        });
        let screen = ix.viewport.to_screen(Point::new(mid.x, mid.y + 15.0));
        ix.pointer_down(&mut path, &MouseEvent::new(screen).with_clicks(2));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn panning_uses_screen_delta() {
        let mut path = BezierPath::default_s_curve();
        let mut ix = Interaction::new(ViewPort {
            zoom: 2.0,
            offset: Vec2::ZERO,
        });
        let start = down(500.0, 500.0).with_button(MouseButton::Middle);
        ix.pointer_down(&mut path, &start);
        assert!(matches!(ix.state(), DragState::Panning { .. }));
        ix.pointer_move(&mut path, &down(510.0, 490.0));
        ix.pointer_move(&mut path, &down(520.0, 495.0));
        assert_eq!(ix.viewport.offset, Vec2::new(20.0, -5.0));
        ix.release();
        assert_eq!(ix.state(), DragState::Idle);
    }

    #[test]
    fn alt_drag_pans() {
        let mut path = BezierPath::default_s_curve();
        let mut ix = Interaction::default();
        let start = down(100.0, 250.0).with_mods(Modifiers {
            alt: true,
            ..Default::default()
        });
        ix.pointer_down(&mut path, &start);
        assert!(matches!(ix.state(), DragState::Panning { .. }));
    }

    #[test]
    fn wheel_zooms_to_cursor() {
        let mut ix = Interaction::default();
        let cursor = Point::new(250.0, 180.0);
        let model = ix.viewport.screen_to_model(cursor);
        ix.wheel(cursor, -1.0);
        assert!((ix.viewport.zoom - 1.1).abs() < 1e-12);
        assert!(ix.viewport.to_screen(model).distance(cursor) < 1e-9);
        ix.wheel(cursor, 1.0);
        assert!((ix.viewport.zoom - 0.99).abs() < 1e-12);
        assert!(ix.viewport.to_screen(model).distance(cursor) < 1e-9);
        assert_eq!(ix.wheel(cursor, 0.0), Outcome::Unchanged);
    }

    #[test]
    fn delete_selected_node() {
        let mut path = BezierPath::default_s_curve().insert_node(0, 0.5);
        path.select(1);
        let removed = path.nodes[1].point;
        let mut ix = Interaction::default();
        let outcome = ix.key(&mut path, &KeyEvent::new(Key::Delete));
        assert_eq!(outcome, Outcome::Edited(EditType::Normal));
        assert_eq!(path.len(), 2);
        assert!(path.nodes.iter().all(|n| n.point != removed));
        assert_eq!(path.selected_index(), None);
    }

    #[test]
    fn delete_on_two_nodes_keeps_selection() {
        let mut path = BezierPath::default_s_curve();
        path.select(0);
        let mut ix = Interaction::default();
        assert_eq!(
            ix.key(&mut path, &KeyEvent::new(Key::Backspace)),
            Outcome::Unchanged
        );
        assert_eq!(path.len(), 2);
        assert_eq!(path.selected_index(), Some(0));
    }

    #[test]
    fn escape_deselects_even_mid_drag() {
        let mut path = BezierPath::default_s_curve();
        let mut ix = Interaction::default();
        ix.pointer_down(&mut path, &down(100.0, 250.0));
        ix.key(&mut path, &KeyEvent::new(Key::Escape));
        assert_eq!(ix.state(), DragState::Idle);
        assert_eq!(path.selected_index(), None);
    }
}
