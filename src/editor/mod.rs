// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor shell: one open curve shape, its working copy, and its history.
//!
//! The shell holds a private copy of the shape's path and style. Input
//! events and property controls mutate that copy only; the owning shape is
//! written back through a `ShapeSink` on `save`, and `cancel` throws the
//! copy away.

mod keyboard;
mod paint;
mod pointer;
mod preview;
mod save;

pub use preview::PreviewStatus;

use crate::config::EditorConfig;
use crate::editing::{EditType, InputEvent, Interaction, Outcome, UndoState, ViewPort};
use crate::error::{EditorError, Result};
use crate::model::style::clamp_stroke_width;
use crate::model::{CurveStyle, LineCap, Shape};
use crate::path::{BezierPath, HandleKind, path_from_curve_data};
use crate::render::RasterFormat;
use kurbo::Point;

/// Everything an undo step restores
#[derive(Debug, Clone, PartialEq)]
pub struct CurveDocument {
    pub path: BezierPath,
    pub style: CurveStyle,
    /// Raster output size in pixels
    pub output_size: (u32, u32),
}

/// An open editor on one curve shape
#[derive(Debug)]
pub struct EditorShell {
    /// The shape as it was opened; only its id and frame are reused on save
    shape: Shape,
    doc: CurveDocument,
    interaction: Interaction,
    undo: UndoState<CurveDocument>,
    /// The last edit type, for grouping consecutive drag edits
    last_edit_type: Option<EditType>,
    preview: PreviewStatus,
    output_format: RasterFormat,
    show_export_boundary: bool,
    canvas_size: (f64, f64),
    last_saved: Option<String>,
}

impl EditorShell {
    /// Open a curve shape for editing.
    ///
    /// Current curve data is used as is, legacy data is migrated, and a
    /// missing or malformed value falls back to the default S-curve.
    pub fn open(shape: Shape, config: &EditorConfig) -> Result<Self> {
        let Some(curve) = shape.as_curve() else {
            return Err(EditorError::NotACurve(shape.type_name().to_string()));
        };

        let path = path_from_curve_data(curve.curve_data.as_ref());
        let style = curve.style();
        tracing::info!(
            "Opened shape '{}' with {} nodes{}",
            shape.id,
            path.len(),
            if path.closed { " (closed)" } else { "" }
        );

        let doc = CurveDocument {
            path,
            style,
            output_size: (config.output_width.max(1), config.output_height.max(1)),
        };

        Ok(Self {
            shape,
            doc,
            interaction: Interaction::new(config.initial_viewport()),
            undo: UndoState::new(),
            last_edit_type: None,
            preview: PreviewStatus::Idle,
            output_format: config.output_format,
            show_export_boundary: config.show_export_boundary,
            canvas_size: (config.canvas_width, config.canvas_height),
            last_saved: None,
        })
    }

    // ===== ACCESSORS =====

    pub fn path(&self) -> &BezierPath {
        &self.doc.path
    }

    pub fn style(&self) -> &CurveStyle {
        &self.doc.style
    }

    pub fn output_size(&self) -> (u32, u32) {
        self.doc.output_size
    }

    pub fn viewport(&self) -> &ViewPort {
        &self.interaction.viewport
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn shape_id(&self) -> &str {
        &self.shape.id
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }

    // ===== EVENTS =====

    /// Feed one input event. Returns whether the canvas needs a redraw.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(e) => self.handle_pointer_down(&e),
            InputEvent::PointerMove(e) => self.handle_pointer_move(&e),
            InputEvent::PointerUp(_) | InputEvent::PointerLeave => self.handle_pointer_up(),
            InputEvent::Wheel { pos, delta } => self.handle_wheel(pos, delta),
            InputEvent::Key(e) => self.handle_key(&e),
        }
    }

    // ===== UNDO =====

    /// Record an edit for undo, given the document as it was before it.
    ///
    /// Consecutive drag edits share one group; every other edit starts a
    /// new one.
    fn record_edit(&mut self, before: CurveDocument, edit_type: EditType) {
        match self.last_edit_type {
            Some(EditType::Drag) if edit_type == EditType::Drag => {}
            _ => self.undo.add_undo_group(before),
        }
        self.last_edit_type = Some(edit_type);
    }

    /// Record the undo step for an interaction outcome and report whether
    /// a redraw is needed
    fn commit(&mut self, before: CurveDocument, outcome: Outcome) -> bool {
        if let Outcome::Edited(edit_type) = outcome {
            self.record_edit(before, edit_type);
        }
        outcome.needs_redraw()
    }

    pub fn undo(&mut self) -> bool {
        match self.undo.undo(self.doc.clone()) {
            Some(previous) => {
                self.doc = previous;
                self.last_edit_type = None;
                tracing::debug!("Undo: restored previous state");
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.undo.redo(self.doc.clone()) {
            Some(next) => {
                self.doc = next;
                self.last_edit_type = None;
                tracing::debug!("Redo: restored next state");
                true
            }
            None => false,
        }
    }

    /// Apply a property change as one undo group, if it changes anything
    fn apply_property<F>(&mut self, what: &str, f: F) -> bool
    where
        F: FnOnce(&mut CurveDocument),
    {
        let before = self.doc.clone();
        f(&mut self.doc);
        if self.doc == before {
            return false;
        }
        tracing::debug!("[EditorShell] set {}", what);
        self.record_edit(before, EditType::Normal);
        true
    }

    // ===== PROPERTY CONTROLS =====

    /// Stroke color as a CSS hex string
    pub fn set_stroke(&mut self, stroke: impl Into<String>) -> bool {
        let stroke = stroke.into();
        self.apply_property("stroke", |doc| doc.style.stroke = stroke)
    }

    pub fn set_stroke_width(&mut self, width: f64) -> bool {
        let width = clamp_stroke_width(width);
        self.apply_property("stroke width", |doc| doc.style.stroke_width = width)
    }

    pub fn set_line_cap(&mut self, cap: LineCap) -> bool {
        self.apply_property("line cap", |doc| doc.style.line_cap = cap)
    }

    /// Raster output size; each side is at least one pixel
    pub fn set_output_size(&mut self, width: u32, height: u32) -> bool {
        let size = (width.max(1), height.max(1));
        self.apply_property("output size", |doc| doc.output_size = size)
    }

    pub fn set_closed(&mut self, closed: bool) -> bool {
        self.apply_property("closed", |doc| doc.path = doc.path.with_closed(closed))
    }

    /// Numeric entry of one node coordinate. Out-of-range nodes and
    /// absent handles are ignored.
    pub fn set_node_geometry(&mut self, index: usize, field: HandleKind, value: Point) -> bool {
        let present = self
            .doc
            .path
            .nodes
            .get(index)
            .is_some_and(|node| node.get(field).is_some());
        if !present || !value.is_finite() {
            return false;
        }
        self.apply_property("node geometry", |doc| {
            doc.path = doc.path.update_node_geometry(index, field, value)
        })
    }

    /// Close the editor without saving; every change is discarded
    pub fn cancel(self) {
        tracing::info!("Closed shape '{}' without saving", self.shape.id);
    }
}
