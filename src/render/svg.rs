// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! SVG backend for the display list

use super::scene::{Paint, Scene};
use crate::model::style::to_hex;
use peniko::Color;
use std::fmt::Write as _;

/// Write a scene as a standalone SVG document
///
/// `background` fills the whole canvas before any item is drawn.
pub fn scene_to_svg(scene: &Scene, width: f64, height: f64, background: Option<Color>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );

    if let Some(bg) = background {
        let _ = writeln!(
            out,
            r#"  <rect width="{}" height="{}" fill="{}"/>"#,
            width,
            height,
            to_hex(bg)
        );
    }

    for item in scene.items() {
        let d = item.shape.to_svg();
        let color = to_hex(item.brush);
        match item.paint {
            Paint::Fill => {
                let _ = writeln!(out, r#"  <path d="{}" fill="{}"/>"#, d, color);
            }
            Paint::Stroke { width, cap, dash } => {
                let _ = write!(
                    out,
                    r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="{}""#,
                    d,
                    color,
                    width,
                    cap.as_svg()
                );
                if let Some([on, off]) = dash {
                    let _ = write!(out, r#" stroke-dasharray="{} {}""#, on, off);
                }
                out.push_str("/>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineCap;
    use crate::render::scene::Layer;
    use kurbo::{BezPath, Point};

    #[test]
    fn writes_items_in_order() {
        let mut line = BezPath::new();
        line.move_to(Point::new(0.0, 0.0));
        line.line_to(Point::new(10.0, 10.0));

        let mut scene = Scene::new();
        scene.stroke(
            Layer::HandleLine,
            line.clone(),
            Color::from_rgb8(0x90, 0x90, 0x90),
            1.0,
            LineCap::Butt,
            Some([4.0, 4.0]),
        );
        scene.fill(Layer::Anchor, line, Color::from_rgb8(0xff, 0x00, 0x00));

        let svg = scene_to_svg(&scene, 100.0, 50.0, Some(Color::from_rgb8(0, 0, 0)));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r##"fill="#000000""##));
        let dashed = svg.find("stroke-dasharray=\"4 4\"").unwrap();
        let filled = svg.find(r##"fill="#ff0000""##).unwrap();
        assert!(dashed < filled);
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
