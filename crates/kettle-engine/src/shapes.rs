//! One-tap shape adjustments plus the head flare and curvature
//! controls that drive the preview.

use serde::{Deserialize, Serialize};

use kettle_types::DimensionSet;

use kettle_geom::scalar::{clamp, round_to};

use crate::scale::create_default_dimensions;
use crate::validate::clamp_relations;

/// One-tap shape actions. The five nudges multiply a few related
/// dimensions; `Reset` rebuilds the defaults for the current cup
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickShape {
    Wider,
    Taller,
    Flare,
    Neck,
    Handle,
    Reset,
}

/// Apply a quick shape in place. Multiplier actions end with the
/// relational clamps so the nudged fields stay assemblable.
pub fn apply_quick_shape(dim: &mut DimensionSet, shape: QuickShape) {
    match shape {
        QuickShape::Wider => {
            dim.body_max_diameter_mm *= 1.08;
            dim.body_bottom_diameter_mm *= 1.05;
            dim.neck_diameter_mm *= 1.02;
        }
        QuickShape::Taller => {
            dim.body_height_mm *= 1.08;
            dim.head_height_mm *= 1.05;
            dim.handle_drop_mm *= 1.04;
        }
        QuickShape::Flare => {
            dim.head_top_diameter_mm *= 1.10;
            dim.head_height_mm *= 1.04;
        }
        QuickShape::Neck => {
            dim.neck_diameter_mm *= 0.92;
            dim.insert_outer_diameter_mm *= 0.95;
        }
        QuickShape::Handle => {
            dim.handle_length_mm *= 1.12;
            dim.handle_offset_mm *= 1.07;
            dim.handle_thickness_mm *= 1.03;
        }
        QuickShape::Reset => {
            let cups = if dim.cups_target.is_finite() && dim.cups_target != 0.0 {
                dim.cups_target
            } else {
                4.0
            };
            *dim = create_default_dimensions(cups);
            return;
        }
    }
    clamp_relations(dim);
}

/// Rescale the head flare by a step ratio from the preview slider.
/// Head height follows at 72% of the size change, the overlap is kept
/// under half the new head height, and the overall height is rebuilt.
/// Non-finite ratios are ignored.
pub fn apply_head_flare_ratio(dim: &mut DimensionSet, ratio: f64) {
    if !ratio.is_finite() {
        return;
    }
    dim.head_top_diameter_mm = clamp(
        dim.head_top_diameter_mm * ratio,
        dim.neck_diameter_mm + 8.0,
        260.0,
    );
    dim.head_height_mm = clamp(dim.head_height_mm * (1.0 + (ratio - 1.0) * 0.72), 20.0, 180.0);
    dim.head_neck_overlap_mm = clamp(dim.head_neck_overlap_mm, 2.0, dim.head_height_mm * 0.5);
    dim.overall_height_mm = round_to(dim.computed_overall_height(), 2);
}

/// Map the curvature slider percentage onto the profile exponent
/// scale, clamped to [0.4, 1.7].
pub fn curvature_scale_from_pct(pct: f64) -> f64 {
    clamp(pct / 100.0, 0.4, 1.7)
}
