// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Bitmap output of a stroked path.
//!
//! The `Rasterizer` trait is the seam for whatever turns path data into an
//! encoded image. `StrokeRasterizer` is the built-in one: it flattens the
//! path, computes per-pixel stroke coverage from the distance to the
//! nearest flattened segment, and encodes the result with `image`.
//!
//! The model origin maps to the center of the bitmap, matching the export
//! boundary drawn on the canvas.

use crate::error::{EditorError, Result};
use crate::model::CurveStyle;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use kurbo::{Affine, BezPath, PathEl, Point, Vec2};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;

/// Flattening tolerance, in pixels
const FLATTEN_TOLERANCE: f64 = 0.25;

/// Encoded output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterFormat {
    #[default]
    Png,
    Jpeg,
}

impl RasterFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(RasterFormat::Png),
            "jpg" | "jpeg" => Some(RasterFormat::Jpeg),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            RasterFormat::Png => "image/png",
            RasterFormat::Jpeg => "image/jpeg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            RasterFormat::Png => ImageFormat::Png,
            RasterFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Everything a rasterizer needs to produce one bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct RasterRequest {
    /// SVG path data in model coordinates
    pub path_data: String,
    pub width: u32,
    pub height: u32,
    pub format: RasterFormat,
    pub style: CurveStyle,
}

/// An encoded image
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub format: RasterFormat,
    pub bytes: Vec<u8>,
}

impl Bitmap {
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), &self.bytes)?;
        tracing::info!(
            "Wrote {}x{} {} to {}",
            self.width,
            self.height,
            self.format.mime_type(),
            path.as_ref().display()
        );
        Ok(())
    }
}

/// Turns path data into an encoded bitmap
pub trait Rasterizer {
    fn rasterize(&self, request: &RasterRequest) -> Result<Bitmap>;
}

/// Built-in CPU stroke rasterizer.
///
/// Caps are always drawn round.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrokeRasterizer;

impl Rasterizer for StrokeRasterizer {
    fn rasterize(&self, request: &RasterRequest) -> Result<Bitmap> {
        let (width, height) = (request.width, request.height);
        if width == 0 || height == 0 {
            return Err(EditorError::Rasterize(format!(
                "invalid output size {}x{}",
                width, height
            )));
        }

        let mut path = BezPath::from_svg(&request.path_data)
            .map_err(|e| EditorError::InvalidPathData(e.to_string()))?;
        path.apply_affine(Affine::translate(Vec2::new(
            width as f64 / 2.0,
            height as f64 / 2.0,
        )));

        let lines = flatten_lines(&path);
        let coverage = stroke_coverage(&lines, width, height, request.style.stroke_width / 2.0);

        let rgba = request.style.color().to_rgba8();
        let mut img = RgbaImage::new(width, height);
        for (pixel, cov) in img.pixels_mut().zip(coverage.iter()) {
            let alpha = (cov * rgba.a as f32).round() as u8;
            *pixel = Rgba([rgba.r, rgba.g, rgba.b, alpha]);
        }

        let image = match request.format {
            RasterFormat::Png => DynamicImage::ImageRgba8(img),
            RasterFormat::Jpeg => DynamicImage::ImageRgb8(flatten_onto_white(&img)),
        };

        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), request.format.image_format())?;

        tracing::debug!(
            "[StrokeRasterizer] {} segments -> {}x{} {:?} ({} bytes)",
            lines.len(),
            width,
            height,
            request.format,
            bytes.len()
        );

        Ok(Bitmap {
            width,
            height,
            format: request.format,
            bytes,
        })
    }
}

/// Flatten a path into straight line segments
fn flatten_lines(path: &BezPath) -> Vec<(Point, Point)> {
    let mut lines = Vec::new();
    let mut start: Option<Point> = None;
    let mut last: Option<Point> = None;

    kurbo::flatten(path.iter(), FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            start = Some(p);
            last = Some(p);
        }
        PathEl::LineTo(p) => {
            if let Some(prev) = last {
                lines.push((prev, p));
            }
            last = Some(p);
        }
        PathEl::ClosePath => {
            if let (Some(prev), Some(first)) = (last, start)
                && prev != first
            {
                lines.push((prev, first));
            }
            last = start;
        }
        // flatten only emits the three above
        _ => {}
    });

    lines
}

/// Per-pixel coverage in `[0, 1]`, one entry per pixel in row-major order
fn stroke_coverage(lines: &[(Point, Point)], width: u32, height: u32, half_width: f64) -> Vec<f32> {
    let mut coverage = vec![0.0f32; (width as usize) * (height as usize)];
    // one pixel of antialiasing ramp
    let reach = half_width + 1.0;

    for &(a, b) in lines {
        let x0 = (a.x.min(b.x) - reach).floor().max(0.0) as i64;
        let y0 = (a.y.min(b.y) - reach).floor().max(0.0) as i64;
        let x1 = (a.x.max(b.x) + reach).ceil().min(width as f64 - 1.0) as i64;
        let y1 = (a.y.max(b.y) + reach).ceil().min(height as f64 - 1.0) as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let d = distance_to_segment(center, a, b);
                let cov = (half_width + 0.5 - d).clamp(0.0, 1.0) as f32;
                let idx = y as usize * width as usize + x as usize;
                if cov > coverage[idx] {
                    coverage[idx] = cov;
                }
            }
        }
    }

    coverage
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

fn flatten_onto_white(img: &RgbaImage) -> image::RgbImage {
    let mut out = image::RgbImage::new(img.width(), img.height());
    for (dst, src) in out.pixels_mut().zip(img.pixels()) {
        let a = src[3] as u32;
        let blend = |c: u8| ((c as u32 * a + 255 * (255 - a)) / 255) as u8;
        *dst = image::Rgb([blend(src[0]), blend(src[1]), blend(src[2])]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineCap;

    fn request(path_data: &str, format: RasterFormat) -> RasterRequest {
        RasterRequest {
            path_data: path_data.to_string(),
            width: 64,
            height: 64,
            format,
            style: CurveStyle::new("#ff0000", 4.0, LineCap::Round),
        }
    }

    #[test]
    fn png_has_stroke_through_center() {
        let bitmap = StrokeRasterizer
            .rasterize(&request("M -20 0 C -10 0 10 0 20 0", RasterFormat::Png))
            .unwrap();
        assert_eq!(bitmap.format, RasterFormat::Png);
        assert!(bitmap.bytes.starts_with(&[0x89, b'P', b'N', b'G']));

        let decoded = image::load_from_memory(&bitmap.bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (64, 64));
        // the origin sits at the center of the image
        assert_eq!(decoded.get_pixel(32, 31)[3], 255);
        assert_eq!(decoded.get_pixel(32, 31)[0], 255);
        assert_eq!(decoded.get_pixel(32, 5)[3], 0);
        assert_eq!(decoded.get_pixel(2, 31)[3], 0);
    }

    #[test]
    fn jpeg_is_opaque_on_white() {
        let bitmap = StrokeRasterizer
            .rasterize(&request("M -20 0 C -10 0 10 0 20 0", RasterFormat::Jpeg))
            .unwrap();
        assert!(bitmap.bytes.starts_with(&[0xff, 0xd8]));
        let decoded = image::load_from_memory(&bitmap.bytes).unwrap().to_rgb8();
        let corner = decoded.get_pixel(0, 0);
        assert!(corner.0.iter().all(|&c| c > 240));
    }

    #[test]
    fn bad_path_data_is_rejected() {
        let err = StrokeRasterizer
            .rasterize(&request("M 0 0 Q nonsense", RasterFormat::Png))
            .unwrap_err();
        assert!(matches!(err, EditorError::InvalidPathData(_)));
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut req = request("M 0 0 L 1 1", RasterFormat::Png);
        req.width = 0;
        assert!(matches!(
            StrokeRasterizer.rasterize(&req),
            Err(EditorError::Rasterize(_))
        ));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(RasterFormat::from_path(Path::new("a.PNG")), Some(RasterFormat::Png));
        assert_eq!(RasterFormat::from_path(Path::new("a.jpg")), Some(RasterFormat::Jpeg));
        assert_eq!(RasterFormat::from_path(Path::new("a.gif")), None);
    }

    #[test]
    fn flattened_curve_is_connected_and_closed() {
        let path = BezPath::from_svg("M 0 0 C 10 -20 30 -20 40 0 Z").unwrap();
        let lines = flatten_lines(&path);
        assert!(lines.len() > 2);
        for pair in lines.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
        assert_eq!(lines[0].0, Point::ZERO);
        assert_eq!(lines.last().unwrap().1, Point::ZERO);
    }

    #[test]
    fn distance_clamps_to_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(distance_to_segment(Point::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(distance_to_segment(Point::new(-4.0, 3.0), a, b), 5.0);
        assert_eq!(distance_to_segment(Point::new(1.0, 1.0), a, a), 2f64.sqrt());
    }
}
