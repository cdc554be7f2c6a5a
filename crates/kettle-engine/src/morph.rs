//! The slider morph: six shape axes mapped onto weighted multipliers.
//!
//! Morphs are stateless against a captured baseline. Every multiplier
//! reads the baseline value, so dragging a slider back to zero restores
//! the baseline exactly and repeated applications never compound.

use kettle_types::{DimensionSet, ShapeSliders};

use kettle_geom::scalar::clamp;

use crate::validate::clamp_to_limits;

fn axis(value: f64) -> f64 {
    clamp(value, -100.0, 100.0) / 100.0
}

/// Apply the six sliders to `base` and clamp the result into the
/// manufacturable envelope. Slider values outside [-100, 100] are
/// treated as the nearest extreme.
pub fn morph_dimensions(base: &DimensionSet, sliders: &ShapeSliders) -> DimensionSet {
    let curve = axis(sliders.body_curve);
    let flare = axis(sliders.head_flare);
    let height = axis(sliders.height);
    let neck = axis(sliders.neck);
    let handle = axis(sliders.handle);
    let stability = axis(sliders.base);

    let mut morphed = base.clone();

    morphed.body_max_diameter_mm = base.body_max_diameter_mm * (1.0 + 0.24 * curve);
    morphed.body_bottom_diameter_mm = base.body_bottom_diameter_mm * (1.0 + 0.12 * curve);
    morphed.neck_diameter_mm = base.neck_diameter_mm * (1.0 - 0.08 * curve);

    morphed.head_top_diameter_mm = base.head_top_diameter_mm * (1.0 + 0.30 * flare);
    morphed.head_height_mm = base.head_height_mm * (1.0 + 0.16 * flare);
    morphed.head_neck_overlap_mm = base.head_neck_overlap_mm * (1.0 + 0.08 * flare);

    morphed.body_height_mm = base.body_height_mm * (1.0 + 0.30 * height);
    morphed.head_height_mm *= 1.0 + 0.22 * height;
    morphed.handle_drop_mm = base.handle_drop_mm * (1.0 + 0.24 * height);

    morphed.neck_diameter_mm *= 1.0 - 0.30 * neck;
    morphed.insert_outer_diameter_mm = base.insert_outer_diameter_mm * (1.0 - 0.20 * neck);
    morphed.insert_inner_diameter_mm = base.insert_inner_diameter_mm * (1.0 - 0.14 * neck);

    morphed.handle_length_mm = base.handle_length_mm * (1.0 + 0.46 * handle);
    morphed.handle_offset_mm = base.handle_offset_mm * (1.0 + 0.34 * handle);
    morphed.handle_thickness_mm = base.handle_thickness_mm * (1.0 + 0.16 * handle);
    morphed.handle_drop_mm *= 1.0 + 0.16 * handle;

    morphed.body_bottom_diameter_mm *= 1.0 + 0.26 * stability;
    morphed.base_cap_diameter_mm = base.base_cap_diameter_mm * (1.0 + 0.30 * stability);
    morphed.base_cap_height_mm = base.base_cap_height_mm * (1.0 + 0.22 * stability);

    clamp_to_limits(&mut morphed);
    morphed
}
