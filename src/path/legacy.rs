// Copyright 2025 the Curvedit Authors
// SPDX-License-Identifier: Apache-2.0

//! On-disk curve data, including the older single-curve form.
//!
//! Shapes written by earlier versions stored one cubic as four loose points
//! (`start`, `cp1`, `cp2`, `end`). Those are migrated into a 2-node
//! `BezierPath` on load and always written back in the node form.

use super::{BezierNode, BezierPath};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The older single-segment curve record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegacyCurve {
    pub start: Point,
    pub cp1: Point,
    pub cp2: Point,
    pub end: Point,
}

impl LegacyCurve {
    /// Convert to the node form: start carries cp1, end carries cp2
    pub fn migrate(&self) -> BezierPath {
        BezierPath::new(
            vec![
                BezierNode::new(self.start).with_right_handle(self.cp1),
                BezierNode::new(self.end).with_left_handle(self.cp2),
            ],
            false,
        )
    }

    /// SVG path data for the single curve, without going through nodes
    pub fn to_svg_path_data(&self) -> String {
        format!(
            "M {} {} C {} {} {} {} {} {}",
            self.start.x,
            self.start.y,
            self.cp1.x,
            self.cp1.y,
            self.cp2.x,
            self.cp2.y,
            self.end.x,
            self.end.y
        )
    }
}

/// The `curveData` field of a curve shape, in either format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurveData {
    Nodes(BezierPath),
    Legacy(LegacyCurve),
}

impl CurveData {
    /// Decode a raw JSON value, treating anything unrecognised as absent.
    ///
    /// A node list with fewer than two nodes counts as unrecognised, since
    /// it could never be edited back into a visible curve.
    pub fn from_value(value: &serde_json::Value) -> Option<CurveData> {
        match serde_json::from_value::<CurveData>(value.clone()) {
            Ok(CurveData::Nodes(path)) if path.len() < 2 => {
                tracing::warn!("curveData has {} node(s), ignoring", path.len());
                None
            }
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!("Unrecognised curveData, using default curve: {}", e);
                None
            }
        }
    }

    /// The editable path for this data, migrating legacy curves
    pub fn into_path(self) -> BezierPath {
        match self {
            CurveData::Nodes(path) => path,
            CurveData::Legacy(legacy) => {
                tracing::info!("Migrating legacy single-curve data");
                legacy.migrate()
            }
        }
    }
}

/// Resolve optional raw curve data into a path, defaulting when unusable
pub fn path_from_curve_data(value: Option<&serde_json::Value>) -> BezierPath {
    value
        .and_then(CurveData::from_value)
        .map(CurveData::into_path)
        .unwrap_or_else(BezierPath::default_s_curve)
}
