// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyed shape storage and the seam the editor saves through.
//!
//! The editor never touches the store directly. On save it hands the
//! committed shape to a `ShapeSink`; `ShapeStore` is the in-process sink,
//! a plain map from shape id to record with explicit update functions.

use super::shape::Shape;
use crate::error::{EditorError, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Receiver for shapes committed by the editor (the host document)
pub trait ShapeSink {
    fn insert_shape(&mut self, shape: Shape) -> Result<()>;
}

/// Shapes keyed by id, iterated in id order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeStore {
    shapes: BTreeMap<String, Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON array of shapes
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let shapes: Vec<Shape> = serde_json::from_str(&text)?;
        tracing::info!(
            "Loaded {} shapes from {}",
            shapes.len(),
            path.as_ref().display()
        );
        Ok(shapes.into_iter().collect())
    }

    /// Write all shapes as a JSON array
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let shapes: Vec<&Shape> = self.shapes.values().collect();
        let text = serde_json::to_string_pretty(&shapes)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Insert or replace by id, returning the previous record
    pub fn upsert(&mut self, shape: Shape) -> Option<Shape> {
        self.shapes.insert(shape.id.clone(), shape)
    }

    /// Apply `f` to an existing shape. Returns false if the id is unknown.
    pub fn update<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut Shape),
    {
        match self.shapes.get_mut(id) {
            Some(shape) => {
                f(shape);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Shape> {
        self.shapes.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }
}

impl FromIterator<Shape> for ShapeStore {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }
}

impl ShapeSink for ShapeStore {
    fn insert_shape(&mut self, shape: Shape) -> Result<()> {
        if shape.id.is_empty() {
            return Err(EditorError::Sink("shape has no id".to_string()));
        }
        tracing::debug!("ShapeStore: storing '{}'", shape.id);
        self.upsert(shape);
        Ok(())
    }
}
