// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve stroke styling, independent of geometry

use crate::settings;
use crate::theme;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Stroke end cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Round,
    Butt,
    Square,
}

impl LineCap {
    /// SVG `stroke-linecap` value
    pub fn as_svg(self) -> &'static str {
        match self {
            LineCap::Round => "round",
            LineCap::Butt => "butt",
            LineCap::Square => "square",
        }
    }
}

/// Stroke color, width, and cap of a curve
#[derive(Debug, Clone, PartialEq)]
pub struct CurveStyle {
    /// CSS hex color, `#rrggbb` or `#rgb`
    pub stroke: String,
    pub stroke_width: f64,
    pub line_cap: LineCap,
}

impl CurveStyle {
    pub fn new(stroke: impl Into<String>, stroke_width: f64, line_cap: LineCap) -> Self {
        Self {
            stroke: stroke.into(),
            stroke_width: clamp_stroke_width(stroke_width),
            line_cap,
        }
    }

    /// Parsed stroke color, falling back to the theme default
    pub fn color(&self) -> Color {
        parse_hex_color(&self.stroke).unwrap_or_else(|| {
            tracing::warn!("Unparseable stroke color '{}', using default", self.stroke);
            theme::curve::DEFAULT_STROKE
        })
    }
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self::new(theme::curve::DEFAULT_STROKE_HEX, 3.0, LineCap::Round)
    }
}

/// Stroke widths are at least `settings::save::MIN_STROKE_WIDTH`
pub fn clamp_stroke_width(width: f64) -> f64 {
    if width.is_finite() {
        width.max(settings::save::MIN_STROKE_WIDTH)
    } else {
        settings::save::MIN_STROKE_WIDTH
    }
}

/// Parse `#rrggbb` or `#rgb`
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some(Color::from_rgb8(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            let expand = |s: &str| channel(s).map(|v| v * 17);
            Some(Color::from_rgb8(
                expand(&digits[0..1])?,
                expand(&digits[1..2])?,
                expand(&digits[2..3])?,
            ))
        }
        _ => None,
    }
}

/// `#rrggbb` form of a color, alpha dropped
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}
