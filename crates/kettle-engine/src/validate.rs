//! Manufacturability clamps.
//!
//! Two tiers: [`clamp_to_limits`] is the full table applied after every
//! morph, with absolute ranges plus cross-field couplings evaluated in
//! a fixed order so later rows see already-clamped values.
//! [`clamp_relations`] is the lighter relational set that keeps direct
//! edits and quick-shape nudges assemblable without pinning them to the
//! morph ranges.
//!
//! The clamp helper resolves inverted ranges to the lower bound, so a
//! coupling that squeezes a range shut still yields a usable value.

use kettle_types::DimensionSet;

use kettle_geom::scalar::clamp;

/// Clamp every dimension into its manufacturable range, in place.
/// Row order matters: couplings reference fields clamped earlier.
pub fn clamp_to_limits(dim: &mut DimensionSet) {
    dim.wall_thickness_mm = clamp(dim.wall_thickness_mm, 0.4, 2.2);
    dim.body_height_mm = clamp(dim.body_height_mm, 60.0, 280.0);
    dim.head_height_mm = clamp(dim.head_height_mm, 24.0, 130.0);
    dim.body_bottom_diameter_mm = clamp(dim.body_bottom_diameter_mm, 55.0, 180.0);
    dim.body_max_diameter_mm = clamp(dim.body_max_diameter_mm, 65.0, 210.0);
    dim.neck_diameter_mm = clamp(dim.neck_diameter_mm, 45.0, dim.body_max_diameter_mm * 0.92);
    dim.head_top_diameter_mm = clamp(
        dim.head_top_diameter_mm,
        (dim.neck_diameter_mm + 12.0).max(70.0),
        240.0,
    );
    dim.insert_outer_diameter_mm = clamp(
        dim.insert_outer_diameter_mm,
        26.0,
        dim.neck_diameter_mm - 6.0,
    );
    dim.insert_inner_diameter_mm = clamp(
        dim.insert_inner_diameter_mm,
        12.0,
        dim.insert_outer_diameter_mm - 6.0,
    );
    dim.base_cap_diameter_mm = clamp(
        dim.base_cap_diameter_mm,
        55.0,
        dim.body_bottom_diameter_mm + 18.0,
    );
    dim.handle_length_mm = clamp(dim.handle_length_mm, 45.0, 190.0);
    dim.handle_offset_mm = clamp(dim.handle_offset_mm, 8.0, 80.0);
    dim.handle_drop_mm = clamp(dim.handle_drop_mm, 28.0, 160.0);
    dim.handle_thickness_mm = clamp(dim.handle_thickness_mm, 8.0, 34.0);
    dim.head_neck_overlap_mm = clamp(
        dim.head_neck_overlap_mm,
        2.0,
        22.0_f64.min(dim.head_height_mm * 0.45),
    );
    dim.base_cap_height_mm = clamp(dim.base_cap_height_mm, 2.0, 20.0);
    dim.insert_height_mm = clamp(dim.insert_height_mm, 12.0, 60.0);
}

/// Re-establish the assembly couplings after a direct edit or a quick
/// shape: neck inside the belly, head rim past the neck, bottom no
/// wider than the belly, insert nested inside the neck with clearance.
pub fn clamp_relations(dim: &mut DimensionSet) {
    dim.neck_diameter_mm = clamp(dim.neck_diameter_mm, 40.0, dim.body_max_diameter_mm * 0.95);
    dim.head_top_diameter_mm = clamp(
        dim.head_top_diameter_mm,
        dim.neck_diameter_mm + 10.0,
        250.0,
    );
    dim.body_bottom_diameter_mm = clamp(
        dim.body_bottom_diameter_mm,
        55.0,
        dim.body_max_diameter_mm,
    );
    dim.insert_outer_diameter_mm = clamp(
        dim.insert_outer_diameter_mm,
        24.0,
        dim.neck_diameter_mm - 6.0,
    );
    dim.insert_inner_diameter_mm = clamp(
        dim.insert_inner_diameter_mm,
        10.0,
        dim.insert_outer_diameter_mm - 6.0,
    );
}
