//! Uniform dimension scaling and cup-count defaults.

use kettle_types::{DimensionSet, CAPACITY_SCALE_KEYS, LINEAR_KEYS};

use kettle_geom::scalar::round_to;

use crate::capacity::estimate_capacity_ml;

/// One US customary cup in milliliters.
pub const US_CUP_TO_ML: f64 = 236.588;

/// Target volume for a cup count.
pub fn cups_to_ml(cups: f64) -> f64 {
    cups * US_CUP_TO_ML
}

/// Scale every linear dimension by `factor`, rounding each to two
/// decimals, then recompute the overall height from the rounded parts.
/// Wall thickness scales with everything else; the cup target and the
/// capacity fields are left alone.
pub fn scale_dimensions(dim: &DimensionSet, factor: f64) -> DimensionSet {
    let mut scaled = dim.clone();
    for key in LINEAR_KEYS {
        let value = scaled.get(key).unwrap_or(0.0);
        scaled.set(key, round_to(value * factor, 2));
    }
    scaled.overall_height_mm = round_to(scaled.computed_overall_height(), 2);
    scaled
}

/// Multiply the capacity-coupled dimensions in place, without rounding.
/// Used by the capacity lock, which recomputes and rounds afterwards.
pub fn apply_capacity_scale(dim: &mut DimensionSet, factor: f64) {
    for key in CAPACITY_SCALE_KEYS {
        if let Some(value) = dim.get(key) {
            dim.set(key, value * factor);
        }
    }
}

/// Build the default dimension set for a cup count by scaling the
/// canonical baseline so its estimated capacity tracks the target.
///
/// Volume scales with the cube of a uniform linear factor, so the
/// factor is the cube root of the target/baseline volume ratio.
pub fn create_default_dimensions(cups: f64) -> DimensionSet {
    let base = DimensionSet::default();
    let base_ml = estimate_capacity_ml(&base);
    let target_ml = cups_to_ml(cups);
    let factor = (target_ml / base_ml).cbrt();

    let mut dim = scale_dimensions(&base, factor);
    dim.cups_target = round_to(cups, 2);
    dim.capacity_target_ml = round_to(target_ml, 1);
    dim.estimated_capacity_ml = round_to(estimate_capacity_ml(&dim), 1);
    dim
}
