// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Curvedit: an interactive multi-node Bezier curve editor core.
//!
//! The crate is headless. A host feeds `InputEvent`s to an `EditorShell`,
//! draws the `Scene` it renders, and receives the edited shape through a
//! `ShapeSink` on save. The `curvedit` binary drives the same shell from
//! JSON event scripts.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

pub mod config;
pub mod editing;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod model;
pub mod path;
pub mod render;
pub mod settings;
pub mod theme;

pub use config::EditorConfig;
pub use editing::InputEvent;
pub use editor::{EditorShell, PreviewStatus};
pub use error::{EditorError, Result};
pub use model::{Shape, ShapeSink, ShapeStore};
pub use path::BezierPath;

use render::{RasterFormat, StrokeRasterizer};

/// Entry point for the curvedit binary
pub fn run() -> anyhow::Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("curvedit=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    let text = std::fs::read_to_string(&args.shape)
        .with_context(|| format!("reading shape {}", args.shape.display()))?;
    let shape: Shape = serde_json::from_str(&text)
        .with_context(|| format!("parsing shape {}", args.shape.display()))?;
    let mut shell = EditorShell::open(shape, &config)?;

    if let Some(path) = &args.events {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading events {}", path.display()))?;
        let events: Vec<InputEvent> = serde_json::from_str(&text)
            .with_context(|| format!("parsing events {}", path.display()))?;
        let redraws = events
            .into_iter()
            .filter(|event| shell.handle_event(*event))
            .count();
        tracing::info!("Replayed events, {} redraws", redraws);
    }

    if let Some(path) = &args.canvas {
        std::fs::write(path, shell.canvas_svg())
            .with_context(|| format!("writing canvas {}", path.display()))?;
    }

    if let Some(path) = &args.preview {
        if let Some(format) = RasterFormat::from_path(path) {
            shell.set_output_format(format);
        }
        let bitmap = shell
            .generate_preview(&StrokeRasterizer)
            .context("generating preview")?;
        bitmap
            .write_to(path)
            .with_context(|| format!("writing preview {}", path.display()))?;
    }

    match &args.out {
        Some(path) => {
            let mut store = if path.exists() {
                ShapeStore::load(path)
                    .with_context(|| format!("loading document {}", path.display()))?
            } else {
                ShapeStore::new()
            };
            shell.save(&mut store).context("saving shape")?;
            store
                .save(path)
                .with_context(|| format!("writing document {}", path.display()))?;
        }
        None => {
            let mut store = ShapeStore::new();
            let saved = shell.save(&mut store).context("saving shape")?;
            println!("{}", serde_json::to_string_pretty(&saved)?);
        }
    }

    Ok(())
}

/// Curvedit CLI arguments
///
/// Examples:
///   curvedit shape.json                           # Print the shape as saved
///   curvedit shape.json --events drag.json        # Replay input, then save
///   curvedit shape.json --preview out.png         # Rasterize the curve
///   curvedit shape.json --canvas view.svg         # Snapshot the editor canvas
///   curvedit shape.json --out doc.json            # Save into a document file
#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(
    name = "curvedit",
    version,
    about = "Replay editor input against a curve shape"
)]
struct CliArgs {
    /// Shape record (JSON) to open
    #[clap(value_name = "SHAPE")]
    shape: PathBuf,

    /// JSON array of input events to replay
    #[clap(long, value_name = "FILE")]
    events: Option<PathBuf>,

    /// Editor configuration (TOML)
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a raster preview; the extension picks PNG or JPEG
    #[clap(long, value_name = "FILE")]
    preview: Option<PathBuf>,

    /// Write an SVG snapshot of the canvas
    #[clap(long, value_name = "FILE")]
    canvas: Option<PathBuf>,

    /// Document to save into instead of printing the shape
    #[clap(
        long,
        value_name = "FILE",
        long_help = "Document (JSON) to save the shape into. The shape replaces any record with the same id; the file is created when missing."
    )]
    out: Option<PathBuf>,
}
