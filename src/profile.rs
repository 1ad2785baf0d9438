// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The stanag-clip Authors

//! 2D cross-section profiles derived from a parameter set.
//!
//! Everything here is pure: parameters and the fixed dimension table go in,
//! closed 2D contours come out. Arcs are sampled into point sequences at
//! [`CIRCLE_SEGMENTS`] resolution before any boolean operation, so every
//! contour handed to the kernel is a simple closed polygon.

use csgrs::float_types::Real;
use nalgebra::Vector2;

use crate::dimensions::{
    CIRCLE_SEGMENTS, CROWN_HEIGHT, CUTAWAY_CLEARANCE, CUT_FLOOR, FLANK_INSET, RAIL_BASE_WIDTH,
    RAIL_HEIGHT, RAIL_TOP_WIDTH, RIDGE_HEIGHT, RIDGE_MID, RING_SEAT_HEIGHT, TIP_CLIP_WIDTH,
    TIP_SLOPE_RUN, ZERO_ANGLE_TOLERANCE,
};
use crate::params::ClipParams;
use crate::Shape;

/// Top of the segment-cut rectangle, comfortably above the rail crown, mm.
const CUT_CEILING: Real = 10.0;

/// All cross-section profiles for one evaluation, plus the two derived
/// scalars that tie them together: the shared extrusion height and the
/// rail-local placement of the ring.
pub struct Profiles {
    /// Rail outline with tips clipped flat and the ring's outer contour
    /// already removed.
    pub rail_outline: Shape,
    /// Inner bore contour, aligned so its top touches the x axis.
    pub ring_inner: Shape,
    /// Inner contour offset outward by the ring strength.
    pub ring_outer: Shape,
    /// Cutaway wedge in rail-local coordinates; `None` when the hole angle
    /// is within [`ZERO_ANGLE_TOLERANCE`] of zero.
    pub cutaway: Option<Shape>,
    /// Rectangle that carves one low notch out of the rail top.
    pub segment_cut: Shape,
    /// Axial extent shared by rail, ring, and cutaway extrusions, mm.
    pub height: Real,
    /// Translation that moves the ring contours into rail-local position.
    pub ring_offset: Vector2<Real>,
}

/// Derive every profile from a validated parameter set.
pub fn build_profiles(params: &ClipParams) -> Profiles {
    let radius = params.ring_diameter / 2.0;
    let width = params.ring_strength;

    let (ring_inner, ring_outer) = ring_contours(radius, width);
    let ring_offset = Vector2::new(
        0.0,
        -width - (RAIL_HEIGHT - RING_SEAT_HEIGHT - FLANK_INSET),
    );

    let rail_outline = rail_outline(&ring_outer, &ring_offset, radius + width);

    let cutaway = (params.ring_hole_angle > ZERO_ANGLE_TOLERANCE).then(|| {
        cutaway_wedge(
            params.ring_hole_angle,
            radius + width + CUTAWAY_CLEARANCE,
            Vector2::new(0.0, -radius + ring_offset.y),
        )
    });

    Profiles {
        rail_outline,
        ring_inner,
        ring_outer,
        cutaway,
        segment_cut: segment_cut(),
        height: params.extrusion_height(),
        ring_offset,
    }
}

/// Inner and outer ring contours.
///
/// The inner bore is a tessellated circle aligned center-x / max-y, so its
/// topmost point sits on the x axis. The outer contour is a true contour
/// offset of the inner one: offsetting the polygon approximation keeps the
/// two boundaries parallel at the chosen tessellation resolution, which
/// plain radius arithmetic on a second circle would not.
fn ring_contours(radius: Real, width: Real) -> (Shape, Shape) {
    let inner = Shape::circle(radius, CIRCLE_SEGMENTS, None).translate(0.0, -radius, 0.0);
    let outer = inner.offset(width);
    (inner, outer)
}

/// The rail cross-section.
///
/// The eight-point base polygon carries the outer tips pointy, as the
/// intersection of the extended 45° slopes; the two border polygons then
/// clip them to the standard flat width. Building the tips pointy first
/// keeps the slope exact no matter how wide the border clip is, and avoids
/// a self-intersecting outline.
///
/// The web is extended downward past the ring mount by the ring's full
/// radius plus wall (`extra_bottom`) before the outer ring contour is
/// subtracted; rail and ring stay connected for every valid diameter and
/// strength combination only while this over-extension covers the whole
/// ring.
fn rail_outline(ring_outer: &Shape, ring_offset: &Vector2<Real>, extra_bottom: Real) -> Shape {
    let half_base = RAIL_BASE_WIDTH / 2.0;
    let bottom = CROWN_HEIGHT - RAIL_HEIGHT - extra_bottom;

    let base = Shape::polygon(
        &[
            [-half_base + TIP_SLOPE_RUN, RIDGE_HEIGHT + TIP_SLOPE_RUN],
            [-half_base - RIDGE_MID, RIDGE_MID],
            [-half_base + FLANK_INSET, -FLANK_INSET],
            [-half_base + FLANK_INSET, bottom],
            [half_base - FLANK_INSET, bottom],
            [half_base - FLANK_INSET, -FLANK_INSET],
            [half_base + RIDGE_MID, RIDGE_MID],
            [half_base - TIP_SLOPE_RUN, RIDGE_HEIGHT + TIP_SLOPE_RUN],
        ],
        None,
    );

    let half_top = RAIL_TOP_WIDTH / 2.0;
    let left_border = Shape::polygon(
        &[
            [-half_top, RIDGE_HEIGHT],
            [-half_top - TIP_CLIP_WIDTH, RIDGE_HEIGHT],
            [-(RAIL_TOP_WIDTH + TIP_CLIP_WIDTH / 2.0), 0.0],
            [-half_top, 0.0],
        ],
        None,
    );
    let right_border = Shape::polygon(
        &[
            [half_top, RIDGE_HEIGHT],
            [half_top, 0.0],
            [RAIL_TOP_WIDTH + TIP_CLIP_WIDTH / 2.0, 0.0],
            [half_top + TIP_CLIP_WIDTH, RIDGE_HEIGHT],
        ],
        None,
    );

    let ring_in_rail = ring_outer.translate(ring_offset.x, ring_offset.y, 0.0);

    base.difference(&left_border)
        .difference(&right_border)
        .difference(&ring_in_rail)
}

/// Cutaway wedge, centered on the bottom of the ring.
///
/// The arc is sampled at `reach` = outer radius + [`CUTAWAY_CLEARANCE`];
/// the clearance keeps the wedge strictly outside the ring boundary, so
/// the later subtraction never operates on coincident contours. Closing
/// the sampled arc through the ring center turns it into a simple polygon.
fn cutaway_wedge(angle: Real, reach: Real, ring_center: Vector2<Real>) -> Shape {
    let start = (270.0 - angle / 2.0).to_radians();
    let end = (270.0 + angle / 2.0).to_radians();

    let mut points = Vec::with_capacity(CIRCLE_SEGMENTS + 2);
    for i in 0..=CIRCLE_SEGMENTS {
        let a = start + (end - start) * i as Real / CIRCLE_SEGMENTS as Real;
        points.push([reach * a.cos(), reach * a.sin()]);
    }
    points.push([0.0, 0.0]);

    Shape::polygon(&points, None).translate(ring_center.x, ring_center.y, 0.0)
}

/// Rectangle that removes one low notch from the rail top, spanning the
/// full top width from [`CUT_FLOOR`] upward so only material above the
/// locking ridge is carved away.
fn segment_cut() -> Shape {
    let half_top = RAIL_TOP_WIDTH / 2.0;
    Shape::polygon(
        &[
            [-half_top, CUT_FLOOR],
            [half_top, CUT_FLOOR],
            [half_top, CUT_CEILING],
            [-half_top, CUT_CEILING],
        ],
        None,
    )
}
