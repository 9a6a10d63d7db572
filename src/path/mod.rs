// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Path model: the editable node graph behind a curve shape.
//!
//! A `BezierPath` is an ordered list of `BezierNode`s, each an anchor with
//! optional left/right handles. Consecutive nodes form cubic `Segment`s.
//! Paths are created from a shape's `curveData` when the editor opens
//! (migrating the legacy single-curve form if needed) and written back on
//! save.

pub mod bezier_path;
pub mod legacy;
pub mod node;
pub mod segment;

pub use bezier_path::BezierPath;
pub use legacy::{CurveData, LegacyCurve, path_from_curve_data};
pub use node::{BezierNode, HandleKind, NodeType};
pub use segment::Segment;
