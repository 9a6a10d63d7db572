// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the editor core.
//!
//! Structural no-ops (deleting below two nodes, missing a hit test) are not
//! errors and never show up here. These variants cover the edges of the
//! core: loading config, decoding shapes, rasterizing previews, and handing
//! saved shapes to the document.

use thiserror::Error;

/// Errors produced by the editor core and its collaborators
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid SVG path data: {0}")]
    InvalidPathData(String),

    #[error("rasterization failed: {0}")]
    Rasterize(String),

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("a preview is already being generated")]
    PreviewPending,

    #[error("cannot edit a '{0}' shape as a curve")]
    NotACurve(String),

    #[error("document rejected shape: {0}")]
    Sink(String),

    #[error("path has no points to measure")]
    EmptyPath,
}

pub type Result<T, E = EditorError> = std::result::Result<T, E>;
