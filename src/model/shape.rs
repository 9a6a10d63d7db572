// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Document shape records.
//!
//! A `Shape` is a shared frame (`id`, position, size) plus a per-type
//! payload selected by the `type` tag. On the wire it is one flat JSON
//! object with camelCase keys:
//!
//! ```json
//! {"id": "s1", "type": "curve", "x": 0, "y": 0, "width": 0, "height": 0,
//!  "curveData": {"nodes": [...], "closed": false},
//!  "stroke": "#ef9a9a", "strokeWidth": 3, "lineCap": "round"}
//! ```

use super::style::{CurveStyle, LineCap, clamp_stroke_width};
use crate::theme;
use serde::{Deserialize, Serialize};

/// A shape placed in the host document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(flatten)]
    pub kind: ShapeKind,
}

/// Type-specific payload of a shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    Rect {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
    },
    Circle {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
    },
    Polygon {
        #[serde(default = "default_sides")]
        sides: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
    },
    Curve(CurveShape),
    Image {
        src: String,
    },
}

fn default_sides() -> u32 {
    6
}

/// Payload of a curve shape
///
/// `curve_data` is kept as raw JSON so that unrecognised or legacy content
/// survives until the editor decides what to do with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveShape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve_data: Option<serde_json::Value>,
    #[serde(default = "default_stroke")]
    pub stroke: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub line_cap: LineCap,
}

fn default_stroke() -> String {
    theme::curve::DEFAULT_STROKE_HEX.to_string()
}

fn default_stroke_width() -> f64 {
    3.0
}

impl Default for CurveShape {
    fn default() -> Self {
        Self {
            curve_data: None,
            stroke: default_stroke(),
            stroke_width: default_stroke_width(),
            line_cap: LineCap::default(),
        }
    }
}

impl CurveShape {
    pub fn style(&self) -> CurveStyle {
        CurveStyle::new(self.stroke.clone(), self.stroke_width, self.line_cap)
    }

    pub fn set_style(&mut self, style: &CurveStyle) {
        self.stroke = style.stroke.clone();
        self.stroke_width = clamp_stroke_width(style.stroke_width);
        self.line_cap = style.line_cap;
    }
}

impl Shape {
    /// A fresh curve shape with no curve data yet
    pub fn new_curve(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            kind: ShapeKind::Curve(CurveShape::default()),
        }
    }

    /// The `type` tag of this shape
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Rect { .. } => "rect",
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Polygon { .. } => "polygon",
            ShapeKind::Curve(_) => "curve",
            ShapeKind::Image { .. } => "image",
        }
    }

    pub fn as_curve(&self) -> Option<&CurveShape> {
        match &self.kind {
            ShapeKind::Curve(curve) => Some(curve),
            _ => None,
        }
    }

    pub fn as_curve_mut(&mut self) -> Option<&mut CurveShape> {
        match &mut self.kind {
            ShapeKind::Curve(curve) => Some(curve),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn curve_shape_from_flat_json() {
        let value = json!({
            "id": "c1",
            "type": "curve",
            "x": 10,
            "y": 20,
            "width": 100,
            "height": 50,
            "curveData": {"start": {"x": 0, "y": 0}, "cp1": {"x": 1, "y": 1},
                          "cp2": {"x": 2, "y": 2}, "end": {"x": 3, "y": 3}},
            "strokeWidth": 5,
            "lineCap": "square"
        });
        let shape: Shape = serde_json::from_value(value).unwrap();
        assert_eq!(shape.id, "c1");
        assert_eq!(shape.x, 10.0);
        assert_eq!(shape.type_name(), "curve");
        let curve = shape.as_curve().unwrap();
        assert_eq!(curve.stroke, "#ef9a9a");
        assert_eq!(curve.stroke_width, 5.0);
        assert_eq!(curve.line_cap, LineCap::Square);
        assert!(curve.curve_data.is_some());
    }

    #[test]
    fn other_kinds_decode() {
        let rect: Shape = serde_json::from_value(json!({"id": "r", "type": "rect"})).unwrap();
        assert!(matches!(rect.kind, ShapeKind::Rect { fill: None }));
        assert!(rect.as_curve().is_none());

        let poly: Shape =
            serde_json::from_value(json!({"id": "p", "type": "polygon", "fill": "#fff"})).unwrap();
        assert_eq!(
            poly.kind,
            ShapeKind::Polygon {
                sides: 6,
                fill: Some("#fff".to_string())
            }
        );

        let image: Shape =
            serde_json::from_value(json!({"id": "i", "type": "image", "src": "a.png"})).unwrap();
        assert_eq!(image.type_name(), "image");
    }

    #[test]
    fn serializes_flat_with_camel_case() {
        let shape = Shape::new_curve("n");
        let value = serde_json::to_value(&shape).unwrap();
        assert_eq!(value["type"], "curve");
        assert_eq!(value["strokeWidth"], 3.0);
        assert_eq!(value["lineCap"], "round");
        assert!(value.get("curveData").is_none());
    }

    #[test]
    fn set_style_clamps_width() {
        let mut curve = CurveShape::default();
        curve.set_style(&CurveStyle {
            stroke: "#000000".into(),
            stroke_width: 0.0,
            line_cap: LineCap::Butt,
        });
        assert_eq!(curve.stroke_width, 1.0);
        assert_eq!(curve.style().line_cap, LineCap::Butt);
    }
}
