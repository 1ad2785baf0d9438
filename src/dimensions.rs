// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The stanag-clip Authors

//! Fixed dimensions of the rail cross-section.
//!
//! These values encode the mechanical standard the rail conforms to
//! (MIL-STD-1913 / STANAG "Picatinny" accessory rail). They are invariant
//! across all parameter sets and deliberately not exposed as user
//! parameters: changing any of them produces a clip that no longer mates
//! with standard accessories.

use csgrs::float_types::Real;

/// Overall width across the top flats of the rail, mm.
pub const RAIL_TOP_WIDTH: Real = 21.2;

/// Width of the rail at the base of the 45° angled flanks, mm.
pub const RAIL_BASE_WIDTH: Real = 19.0;

/// Width of the web below the angled flanks, mm.
pub const RAIL_WEB_WIDTH: Real = 15.62;

/// Height of the angled ridge band above the flank datum, mm.
pub const RIDGE_HEIGHT: Real = 2.74;

/// Height of the rail's top surface above the flank datum, mm.
pub const CROWN_HEIGHT: Real = 4.17;

/// Overall height of the rail section, mm.
pub const RAIL_HEIGHT: Real = 9.4;

/// Height on the rail web at which the ring seats, measured like
/// [`CROWN_HEIGHT`] from the flank datum, mm.
pub const RING_SEAT_HEIGHT: Real = 4.7;

/// Width of the auxiliary border polygons that clip the rail's pointy
/// tips down to the standard flat, mm.
pub const TIP_CLIP_WIDTH: Real = 5.0;

/// Axial width of a low (recoil-groove) segment, mm.
pub const LOW_SEGMENT_WIDTH: Real = 5.25;

/// Axial width of a high segment, mm. High + low span one 10 mm pitch.
pub const HIGH_SEGMENT_WIDTH: Real = 10.0 - LOW_SEGMENT_WIDTH;

/// Horizontal run of the 45° tip slope between ridge and crown, mm.
pub const TIP_SLOPE_RUN: Real = CROWN_HEIGHT - RIDGE_HEIGHT;

/// Horizontal inset from the rail base to the web on each side, mm.
pub const FLANK_INSET: Real = (RAIL_BASE_WIDTH - RAIL_WEB_WIDTH) / 2.0;

/// Half the ridge height; the widest point of the angled band sits here.
pub const RIDGE_MID: Real = RIDGE_HEIGHT / 2.0;

/// Bottom of the segment-cut rectangle, mm. The notch only removes
/// material above the rail's functional locking ridge.
pub const CUT_FLOOR: Real = RIDGE_HEIGHT - (RAIL_TOP_WIDTH - RAIL_BASE_WIDTH) / 2.0;

/// Tessellation resolution for every circular contour and arc.
pub const CIRCLE_SEGMENTS: usize = 128;

/// Radial clearance added to the cutaway wedge so it strictly exceeds the
/// ring's outer boundary instead of coinciding with it, mm.
pub const CUTAWAY_CLEARANCE: Real = 0.01;

/// Cutaway angles within this many degrees of zero are treated as exactly
/// zero, so no wedge is constructed or subtracted.
pub const ZERO_ANGLE_TOLERANCE: Real = 0.001;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_widths_span_one_pitch() {
        assert_eq!(HIGH_SEGMENT_WIDTH + LOW_SEGMENT_WIDTH, 10.0);
        assert_eq!(HIGH_SEGMENT_WIDTH, 4.75);
    }

    #[test]
    fn cut_floor_sits_above_datum() {
        // 2.74 - (21.2 - 19)/2 = 1.64
        assert!((CUT_FLOOR - 1.64).abs() < 1e-12);
        assert!(CUT_FLOOR > 0.0 && CUT_FLOOR < RIDGE_HEIGHT);
    }
}
