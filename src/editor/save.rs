// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Committing the working copy back to the document

use super::EditorShell;
use crate::error::{EditorError, Result};
use crate::geometry::compute_bounds;
use crate::model::{Shape, ShapeKind, ShapeSink};
use crate::settings;
use kurbo::Rect;

impl EditorShell {
    /// Write the path and style into the shape and hand it to `sink`.
    ///
    /// The shape's frame is the bounding box of every anchor and handle,
    /// padded by `stroke_width + settings::save::PADDING` on each side.
    pub fn save(&mut self, sink: &mut dyn ShapeSink) -> Result<Shape> {
        let bounds = compute_bounds(self.doc.path.all_points()).ok_or(EditorError::EmptyPath)?;
        let margin = self.doc.style.stroke_width + settings::save::PADDING;
        let frame = Rect::from(bounds.expand(margin));

        let mut shape = self.shape.clone();
        shape.x = frame.x0;
        shape.y = frame.y0;
        shape.width = frame.width();
        shape.height = frame.height();

        let curve_data = serde_json::to_value(&self.doc.path)?;
        match &mut shape.kind {
            ShapeKind::Curve(curve) => {
                curve.curve_data = Some(curve_data);
                curve.set_style(&self.doc.style);
            }
            _ => return Err(EditorError::NotACurve(shape.type_name().to_string())),
        }

        sink.insert_shape(shape.clone())?;

        self.shape = shape.clone();
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        tracing::info!(
            "Saved shape '{}' at ({:.1}, {:.1}) size {:.1}x{:.1}",
            shape.id,
            shape.x,
            shape.y,
            shape.width,
            shape.height
        );
        self.last_saved = Some(stamp);
        Ok(shape)
    }

    /// Local time of the last successful save, for display
    pub fn last_saved(&self) -> Option<&str> {
        self.last_saved.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::open_default;
    use super::*;
    use crate::editing::{InputEvent, MouseEvent};
    use crate::model::ShapeStore;
    use crate::path::BezierPath;
    use kurbo::Point;

    struct Rejecting;

    impl ShapeSink for Rejecting {
        fn insert_shape(&mut self, _shape: Shape) -> Result<()> {
            Err(EditorError::Sink("read-only document".to_string()))
        }
    }

    #[test]
    fn drag_then_save_writes_point_and_bounds() {
        let mut shell = open_default();
        for event in [
            InputEvent::PointerDown(MouseEvent::new(Point::new(100.0, 250.0))),
            InputEvent::PointerMove(MouseEvent::new(Point::new(150.0, 200.0))),
            InputEvent::PointerUp(MouseEvent::new(Point::new(150.0, 200.0))),
        ] {
            shell.handle_event(event);
        }

        let mut store = ShapeStore::new();
        let saved = shell.save(&mut store).unwrap();

        let curve = saved.as_curve().unwrap();
        let data = curve.curve_data.as_ref().unwrap();
        assert_eq!(data["nodes"][0]["point"]["x"], 150.0);
        assert_eq!(data["nodes"][0]["point"]["y"], 200.0);

        // points span x 150..400, y 100..400; padding is 3 + 10
        assert_eq!(saved.x, 137.0);
        assert_eq!(saved.y, 87.0);
        assert_eq!(saved.width, 276.0);
        assert_eq!(saved.height, 326.0);

        assert_eq!(store.get("s1"), Some(&saved));
        assert!(shell.last_saved().is_some());
    }

    #[test]
    fn saved_curve_data_reopens_as_same_path() {
        let mut shell = open_default();
        shell.set_closed(true);
        let mut store = ShapeStore::new();
        let saved = shell.save(&mut store).unwrap();
        let data = saved.as_curve().unwrap().curve_data.clone().unwrap();
        let path: BezierPath = serde_json::from_value(data).unwrap();
        assert_eq!(&path, shell.path());
        assert!(path.closed);
    }

    #[test]
    fn style_is_written_back() {
        let mut shell = open_default();
        shell.set_stroke("#123456");
        shell.set_stroke_width(5.0);
        let saved = shell.save(&mut ShapeStore::new()).unwrap();
        let curve = saved.as_curve().unwrap();
        assert_eq!(curve.stroke, "#123456");
        assert_eq!(curve.stroke_width, 5.0);
        // wider stroke, wider padding
        assert_eq!(saved.x, 100.0 - 15.0);
    }

    #[test]
    fn sink_failure_is_reported() {
        let mut shell = open_default();
        let err = shell.save(&mut Rejecting).unwrap_err();
        assert!(matches!(err, EditorError::Sink(_)));
        assert!(shell.last_saved().is_none());
    }
}
