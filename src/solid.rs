// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The stanag-clip Authors

//! 3D assembly: extrude the profiles and combine them into the two output
//! solids.
//!
//! All operations are deterministic constructions over closed polygons; a
//! degenerate profile from parameters outside the validated domain is a
//! precondition violation, not a recoverable error.

use csgrs::float_types::Real;

use crate::dimensions::{HIGH_SEGMENT_WIDTH, LOW_SEGMENT_WIDTH};
use crate::params::ClipParams;
use crate::profile::Profiles;
use crate::Shape;

/// The finished clip: rail first, ring second. Both share one coordinate
/// frame and axial extent and touch along the ring mount, so a consumer
/// can export them as a single connected assembly without alignment.
pub struct ClipSolids {
    pub rail: Shape,
    pub ring: Shape,
}

/// Axial positions of the low-segment cuts, strictly left to right.
///
/// The first cut starts after the first high segment; each further cut
/// advances by one full high/low pitch. An empty table means the rail is a
/// single high segment and stays uncut.
pub fn segment_cut_offsets(count_low_parts: u32) -> Vec<Real> {
    (0..count_low_parts)
        .map(|i| (i as Real + 1.0) * HIGH_SEGMENT_WIDTH + i as Real * LOW_SEGMENT_WIDTH)
        .collect()
}

/// Assemble the rail and ring solids from the derived profiles.
pub fn build_solids(profiles: &Profiles, params: &ClipParams) -> ClipSolids {
    let height = profiles.height;

    // Rail: extrude the outline, then carve one notch per low segment.
    // The cuts are translated copies of a single extrusion, reduced by
    // union so the subtraction below happens once.
    let rail_base = profiles.rail_outline.extrude(height);
    let cut = profiles.segment_cut.extrude(LOW_SEGMENT_WIDTH);
    let cuts = segment_cut_offsets(params.count_low_parts())
        .iter()
        .map(|&z| cut.translate(0.0, 0.0, z))
        .reduce(|merged, next| merged.union(&next));
    let rail = match cuts {
        Some(cuts) => rail_base.difference(&cuts),
        None => rail_base,
    };

    // Ring: outer minus inner bore, moved into rail-local position.
    let whole_ring = profiles
        .ring_outer
        .extrude(height)
        .difference(&profiles.ring_inner.extrude(height))
        .translate(profiles.ring_offset.x, profiles.ring_offset.y, 0.0);

    // A wedge profile only exists when the hole angle cleared the zero
    // tolerance, so a near-zero angle leaves the ring untouched.
    let ring = match &profiles.cutaway {
        Some(wedge) => whole_ring.difference(&wedge.extrude(height)),
        None => whole_ring,
    };

    ClipSolids { rail, ring }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn no_cuts_for_a_single_high_segment() {
        assert!(segment_cut_offsets(0).is_empty());
    }

    #[test]
    fn cuts_start_after_the_first_high_segment() {
        let offsets = segment_cut_offsets(2);
        assert_eq!(offsets.len(), 2);
        assert_relative_eq!(offsets[0], HIGH_SEGMENT_WIDTH);
        assert_relative_eq!(offsets[1], 2.0 * HIGH_SEGMENT_WIDTH + LOW_SEGMENT_WIDTH);
    }

    #[test]
    fn cuts_advance_by_one_pitch() {
        let offsets = segment_cut_offsets(6);
        for pair in offsets.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], HIGH_SEGMENT_WIDTH + LOW_SEGMENT_WIDTH);
        }
    }
}
