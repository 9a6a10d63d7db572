// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Document data model: shape records, curve styling, and shape storage

pub mod shape;
pub mod store;
pub mod style;

pub use shape::{CurveShape, Shape, ShapeKind};
pub use store::{ShapeSink, ShapeStore};
pub use style::{CurveStyle, LineCap};
