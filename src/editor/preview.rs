// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Raster preview generation.
//!
//! Generation is split in two so the host can run the rasterizer wherever
//! it likes: `begin_preview` hands out a request and marks the editor busy,
//! `finish_preview` stores the result. Only one request may be in flight.

use super::EditorShell;
use crate::error::{EditorError, Result};
use crate::render::{Bitmap, RasterFormat, RasterRequest, Rasterizer};

/// State of the preview panel
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PreviewStatus {
    #[default]
    Idle,
    /// A request is out; new requests are refused until it finishes
    Generating,
    Ready(Bitmap),
    Failed(String),
}

impl PreviewStatus {
    /// Short label for a status line
    pub fn label(&self) -> &'static str {
        match self {
            PreviewStatus::Idle => "",
            PreviewStatus::Generating => "Generating...",
            PreviewStatus::Ready(_) => "Preview ready",
            PreviewStatus::Failed(_) => "Preview failed",
        }
    }
}

impl EditorShell {
    pub fn preview_status(&self) -> &PreviewStatus {
        &self.preview
    }

    pub fn output_format(&self) -> RasterFormat {
        self.output_format
    }

    /// Encoding used by the next preview. Not part of the undo history.
    pub fn set_output_format(&mut self, format: RasterFormat) {
        self.output_format = format;
    }

    /// Start a preview at the configured output size
    pub fn begin_preview(&mut self) -> Result<RasterRequest> {
        if self.preview == PreviewStatus::Generating {
            tracing::debug!("[EditorShell] preview already pending");
            return Err(EditorError::PreviewPending);
        }
        if self.doc.path.is_empty() {
            return Err(EditorError::EmptyPath);
        }

        let (width, height) = self.doc.output_size;
        let format = self.output_format;
        let request = RasterRequest {
            path_data: self.doc.path.to_svg_path_data(),
            width,
            height,
            format,
            style: self.doc.style.clone(),
        };
        self.preview = PreviewStatus::Generating;
        tracing::info!("Generating {}x{} {:?} preview", width, height, format);
        Ok(request)
    }

    /// Store the outcome of the pending request. Failures never touch the
    /// path.
    pub fn finish_preview(&mut self, result: Result<Bitmap>) {
        self.preview = match result {
            Ok(bitmap) => {
                tracing::info!("Preview ready ({} bytes)", bitmap.bytes.len());
                PreviewStatus::Ready(bitmap)
            }
            Err(e) => {
                tracing::warn!("Preview failed: {}", e);
                PreviewStatus::Failed(e.to_string())
            }
        };
    }

    /// Run a full preview round trip on the calling thread
    pub fn generate_preview(&mut self, rasterizer: &dyn Rasterizer) -> Result<&Bitmap> {
        let request = self.begin_preview()?;
        self.finish_preview(rasterizer.rasterize(&request));
        match &self.preview {
            PreviewStatus::Ready(bitmap) => Ok(bitmap),
            PreviewStatus::Failed(message) => Err(EditorError::Rasterize(message.clone())),
            PreviewStatus::Idle | PreviewStatus::Generating => Err(EditorError::Rasterize(
                "preview did not complete".to_string(),
            )),
        }
    }
}
