// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas output for EditorShell

use super::EditorShell;
use crate::render::{RenderOptions, Renderer, Scene, scene_to_svg};
use crate::theme;

impl EditorShell {
    /// Display list for the current path, selection, and view
    pub fn render(&self) -> Scene {
        let options = RenderOptions {
            export_boundary: self.show_export_boundary.then_some(self.doc.output_size),
        };
        Renderer.render(&self.doc.path, &self.doc.style, &self.interaction.viewport, &options)
    }

    /// SVG snapshot of the canvas at the configured canvas size
    pub fn canvas_svg(&self) -> String {
        let (width, height) = self.canvas_size;
        scene_to_svg(&self.render(), width, height, Some(theme::canvas::BACKGROUND))
    }
}
