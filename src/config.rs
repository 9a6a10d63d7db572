// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime editor configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives
//! a working editor:
//!
//! ```toml
//! output_width = 512
//! output_height = 512
//! output_format = "png"
//! show_export_boundary = true
//! canvas_width = 800
//! canvas_height = 600
//! center_view = false
//! ```

use crate::editing::ViewPort;
use crate::error::Result;
use crate::render::RasterFormat;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-run editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Width of the rasterized output, in pixels
    pub output_width: u32,
    /// Height of the rasterized output, in pixels
    pub output_height: u32,
    pub output_format: RasterFormat,
    /// Draw the export boundary overlay on the canvas
    pub show_export_boundary: bool,
    /// Size of the drawing surface, used for SVG snapshots and by
    /// `center_view`
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Start with the model origin at the canvas center instead of the
    /// top-left corner. Screen and model coordinates coincide when false.
    pub center_view: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            output_width: 512,
            output_height: 512,
            output_format: RasterFormat::Png,
            show_export_boundary: true,
            canvas_width: 800.0,
            canvas_height: 600.0,
            center_view: false,
        }
    }
}

impl EditorConfig {
    /// View the editor starts with
    pub fn initial_viewport(&self) -> ViewPort {
        let mut viewport = ViewPort::new();
        if self.center_view {
            viewport.offset = Vec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0);
        }
        viewport
    }

    /// Parse a TOML document
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml(&text)?;
        tracing::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }
}
