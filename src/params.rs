// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The stanag-clip Authors

//! User-facing parameters and their boundary validation.
//!
//! The builders downstream assume a validated parameter set and perform no
//! range checks of their own, so [`ClipParams::validate`] must run once at
//! the boundary (the library entry point and the CLI both do this).

use csgrs::float_types::Real;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dimensions::{HIGH_SEGMENT_WIDTH, LOW_SEGMENT_WIDTH};

/// Parameters of one clip evaluation.
///
/// Field names serialize in camelCase so parameter files are
/// interchangeable with JSCAD-style hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClipParams {
    /// Number of high segments along the rail.
    pub count_high_parts: u32,
    /// Whether the rail's last segment is a low segment.
    pub ends_with_low: bool,
    /// Diameter of the ring's inner bore, mm.
    pub ring_diameter: Real,
    /// Radial wall thickness of the ring, mm.
    pub ring_strength: Real,
    /// Angular width of the cutaway wedge removed from the ring, degrees.
    /// Zero means no cutaway.
    pub ring_hole_angle: Real,
}

impl Default for ClipParams {
    fn default() -> Self {
        Self {
            count_high_parts: 3,
            ends_with_low: false,
            ring_diameter: 19.8,
            ring_strength: 2.5,
            ring_hole_angle: 110.0,
        }
    }
}

/// A parameter outside its declared bounds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{name} is {value}, allowed range is {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: Real,
        min: Real,
        max: Real,
    },
}

fn check_range(name: &'static str, value: Real, min: Real, max: Real) -> Result<(), ParamError> {
    if value < min || value > max {
        return Err(ParamError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl ClipParams {
    /// Check every parameter against its inclusive bounds.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_range("countHighParts", self.count_high_parts as Real, 1.0, 500.0)?;
        check_range("ringDiameter", self.ring_diameter, 15.6, 100.0)?;
        check_range("ringStrength", self.ring_strength, 1.0, 10.0)?;
        check_range("ringHoleAngle", self.ring_hole_angle, 0.0, 270.0)?;
        Ok(())
    }

    /// Number of low segments. The rail alternates high/low starting and
    /// (unless `ends_with_low`) ending on a high segment.
    pub fn count_low_parts(&self) -> u32 {
        if self.ends_with_low {
            self.count_high_parts
        } else {
            self.count_high_parts - 1
        }
    }

    /// Axial length shared by rail, ring, and cutaway extrusions, mm.
    pub fn extrusion_height(&self) -> Real {
        HIGH_SEGMENT_WIDTH * self.count_high_parts as Real
            + LOW_SEGMENT_WIDTH * self.count_low_parts() as Real
    }
}

/// Value kind of a parameter, for host UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Number,
    Checkbox,
}

/// UI metadata for one parameter: caption, default, and bounds.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDef {
    pub name: &'static str,
    pub kind: ParamKind,
    pub caption: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<Real>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Real>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Real>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Real>,
}

/// The parameter table a host front-end needs to render a form for the
/// clip. Bounds here are the ones [`ClipParams::validate`] enforces.
pub fn parameter_definitions() -> Vec<ParamDef> {
    vec![
        ParamDef {
            name: "countHighParts",
            kind: ParamKind::Number,
            caption: "Number of high parts in rail:",
            initial: Some(3.0),
            checked: None,
            min: Some(1.0),
            max: Some(500.0),
            step: Some(1.0),
        },
        ParamDef {
            name: "endsWithLow",
            kind: ParamKind::Checkbox,
            caption: "Rail ends on low part:",
            initial: None,
            checked: Some(false),
            min: None,
            max: None,
            step: None,
        },
        ParamDef {
            name: "ringDiameter",
            kind: ParamKind::Number,
            caption: "Diameter of ring [mm]:",
            initial: Some(19.8),
            checked: None,
            min: Some(15.6),
            max: Some(100.0),
            step: Some(0.1),
        },
        ParamDef {
            name: "ringStrength",
            kind: ParamKind::Number,
            caption: "Strength of ring [mm]:",
            initial: Some(2.5),
            checked: None,
            min: Some(1.0),
            max: Some(10.0),
            step: Some(0.1),
        },
        ParamDef {
            name: "ringHoleAngle",
            kind: ParamKind::Number,
            caption: "Angle of cutaway in ring [deg]:",
            initial: Some(110.0),
            checked: None,
            min: Some(0.0),
            max: Some(270.0),
            step: Some(1.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_valid() {
        assert!(ClipParams::default().validate().is_ok());
    }

    #[test]
    fn bounds_are_enforced() {
        let mut p = ClipParams::default();
        p.ring_diameter = 15.5;
        assert!(matches!(
            p.validate(),
            Err(ParamError::OutOfRange { name: "ringDiameter", .. })
        ));

        let mut p = ClipParams::default();
        p.count_high_parts = 0;
        assert!(p.validate().is_err());

        let mut p = ClipParams::default();
        p.ring_hole_angle = 270.1;
        assert!(p.validate().is_err());

        let mut p = ClipParams::default();
        p.ring_hole_angle = 270.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn low_part_count_follows_parity() {
        let mut p = ClipParams {
            count_high_parts: 3,
            ends_with_low: false,
            ..ClipParams::default()
        };
        assert_eq!(p.count_low_parts(), 2);
        p.ends_with_low = true;
        assert_eq!(p.count_low_parts(), 3);

        p.count_high_parts = 1;
        p.ends_with_low = false;
        assert_eq!(p.count_low_parts(), 0);
    }

    #[test]
    fn extrusion_height_formula() {
        let p = ClipParams {
            count_high_parts: 3,
            ends_with_low: false,
            ..ClipParams::default()
        };
        // 4.75 * 3 + 5.25 * 2
        assert_relative_eq!(p.extrusion_height(), 24.75);

        let single = ClipParams {
            count_high_parts: 1,
            ends_with_low: false,
            ..ClipParams::default()
        };
        assert_relative_eq!(single.extrusion_height(), 4.75);
    }

    #[test]
    fn params_round_trip_as_camel_case_json() {
        let p = ClipParams::default();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("countHighParts"));
        assert!(json.contains("ringHoleAngle"));
        let back: ClipParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn partial_params_fall_back_to_defaults() {
        let p: ClipParams = serde_json::from_str(r#"{"ringDiameter": 30.0}"#).unwrap();
        assert_eq!(p.ring_diameter, 30.0);
        assert_eq!(p.count_high_parts, 3);
    }

    #[test]
    fn definitions_cover_every_parameter() {
        let defs = parameter_definitions();
        assert_eq!(defs.len(), 5);
        assert!(defs.iter().any(|d| d.name == "endsWithLow" && d.kind == ParamKind::Checkbox));
        let json = serde_json::to_string(&defs).unwrap();
        assert!(json.contains("\"caption\""));
    }
}
