// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The stanag-clip Authors

//! STANAG rail clip generator
//!
//! Builds a parametric two-part mounting clip: a segmented Picatinny-style
//! rail fused to a circular retaining ring with an optional angular
//! cutaway. Five user parameters drive the model; the fixed rail
//! cross-section lives in [`dimensions`]. Geometry is constructed through
//! the `csgrs` CSG kernel and handed back as two solids ready for
//! rendering or STL export.

pub mod dimensions;
pub mod io;
pub mod params;
pub mod profile;
pub mod solid;

pub use params::{parameter_definitions, ClipParams, ParamDef, ParamError, ParamKind};
pub use profile::{build_profiles, Profiles};
pub use solid::{build_solids, segment_cut_offsets, ClipSolids};

use csgrs::CSG;

/// Geometry value produced by the kernel: a 2D contour before extrusion,
/// a 3D solid after.
pub type Shape = CSG<()>;

/// Main entry point: validate the parameters, derive the cross-section
/// profiles, and assemble the rail and ring solids.
pub fn build(params: &ClipParams) -> Result<ClipSolids, ParamError> {
    params.validate()?;
    let profiles = build_profiles(params);
    Ok(build_solids(&profiles, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_clip() {
        let result = build(&ClipParams::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_out_of_range_parameters_rejected() {
        let params = ClipParams {
            ring_strength: 0.5,
            ..ClipParams::default()
        };
        assert!(build(&params).is_err());
    }
}
