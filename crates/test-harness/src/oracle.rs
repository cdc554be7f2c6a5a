//! Verification oracles — pure functions returning pass/fail verdicts.
//!
//! Each oracle checks one observable property of the modeling core and
//! returns an `OracleVerdict` with diagnostic detail, not panics. This
//! lets a suite collect all failures in one pass.

use kettle_engine::{
    create_default_dimensions, estimate_capacity_ml, morph_dimensions, scale_dimensions,
};
use kettle_types::{Blueprint, DimensionSet, PartKey, ShapeSliders};

use crate::helpers::{profile_height_monotonic, silhouette};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

// ── Dimension Oracles ───────────────────────────────────────────────────────

/// Overall height must equal body + head − overlap (to 2 decimals).
pub fn check_height_identity(dim: &DimensionSet) -> OracleVerdict {
    let expected = dim.body_height_mm + dim.head_height_mm - dim.head_neck_overlap_mm;
    let delta = (dim.overall_height_mm - expected).abs();
    if delta <= 0.01 {
        OracleVerdict::pass_val(
            "height_identity",
            format!(
                "overall {:.2} == {:.2} + {:.2} - {:.2}",
                dim.overall_height_mm, dim.body_height_mm, dim.head_height_mm,
                dim.head_neck_overlap_mm,
            ),
            dim.overall_height_mm,
        )
    } else {
        OracleVerdict::fail_val(
            "height_identity",
            format!(
                "overall {:.2} vs derived {:.2} (delta {:.4})",
                dim.overall_height_mm, expected, delta,
            ),
            delta,
        )
    }
}

/// Widening the belly while holding all else fixed must strictly
/// increase the capacity estimate.
pub fn check_capacity_monotonic(dim: &DimensionSet) -> OracleVerdict {
    let base = estimate_capacity_ml(dim);
    let mut wider = dim.clone();
    wider.body_max_diameter_mm += 10.0;
    let grown = estimate_capacity_ml(&wider);
    if grown > base {
        OracleVerdict::pass(
            "capacity_monotonic",
            format!("belly +10mm: {:.1} mL -> {:.1} mL", base, grown),
        )
    } else {
        OracleVerdict::fail(
            "capacity_monotonic",
            format!("belly +10mm did not grow capacity: {:.1} mL -> {:.1} mL", base, grown),
        )
    }
}

/// Uniform linear scaling by `s` must scale capacity by ~s³ (within 5%;
/// the piecewise frustum model is not perfectly homogeneous).
pub fn check_scale_cube_law(dim: &DimensionSet, factor: f64) -> OracleVerdict {
    let base = estimate_capacity_ml(dim);
    let scaled = estimate_capacity_ml(&scale_dimensions(dim, factor));
    let expected = base * factor.powi(3);
    let rel = (scaled - expected).abs() / expected;
    if rel <= 0.05 {
        OracleVerdict::pass_val(
            "scale_cube_law",
            format!(
                "s={:.2}: {:.1} mL vs s³ prediction {:.1} mL ({:.1}% off)",
                factor, scaled, expected, rel * 100.0,
            ),
            rel,
        )
    } else {
        OracleVerdict::fail_val(
            "scale_cube_law",
            format!(
                "s={:.2}: {:.1} mL vs s³ prediction {:.1} mL ({:.1}% off)",
                factor, scaled, expected, rel * 100.0,
            ),
            rel,
        )
    }
}

/// The default generator must hit the requested cup target within 5%,
/// and doubling the cups must roughly double the capacity.
pub fn check_default_round_trip() -> OracleVerdict {
    let four = create_default_dimensions(4.0);
    let eight = create_default_dimensions(8.0);
    let target = 4.0 * 236.588;
    let rel = (four.estimated_capacity_ml - target).abs() / target;
    if rel > 0.05 {
        return OracleVerdict::fail_val(
            "default_round_trip",
            format!(
                "4 cups: {:.1} mL vs target {:.1} mL ({:.1}% off)",
                four.estimated_capacity_ml, target, rel * 100.0,
            ),
            rel,
        );
    }
    let doubling = eight.estimated_capacity_ml / four.estimated_capacity_ml;
    if (doubling - 2.0).abs() / 2.0 > 0.05 {
        return OracleVerdict::fail_val(
            "default_round_trip",
            format!("8 cups / 4 cups capacity ratio {:.3}, expected ~2", doubling),
            doubling,
        );
    }
    OracleVerdict::pass(
        "default_round_trip",
        format!(
            "4 cups -> {:.1} mL, 8 cups -> {:.1} mL",
            four.estimated_capacity_ml, eight.estimated_capacity_ml,
        ),
    )
}

// ── Morph Oracles ───────────────────────────────────────────────────────────

/// Morphing with every slider at zero must reproduce the baseline
/// exactly, no drift from a no-op morph. The baseline is assumed to sit
/// inside the manufacturable envelope already (morph outputs and
/// defaults from roughly 2 to 12 cups do).
pub fn check_morph_identity(baseline: &DimensionSet) -> OracleVerdict {
    let morphed = morph_dimensions(baseline, &ShapeSliders::default());
    if morphed == *baseline {
        OracleVerdict::pass("morph_identity", "zero sliders reproduce the baseline".to_string())
    } else {
        OracleVerdict::fail(
            "morph_identity",
            format!("zero-slider morph drifted: {:?} vs {:?}", morphed, baseline),
        )
    }
}

/// After any morph, every dimension must sit inside its documented
/// manufacturability range and the neck must clear the head rim.
pub fn check_clamp_enforcement(baseline: &DimensionSet, sliders: &ShapeSliders) -> OracleVerdict {
    let d = morph_dimensions(baseline, sliders);
    const EPS: f64 = 1e-9;

    let absolute: [(&str, f64, f64, f64); 12] = [
        ("wall_thickness_mm", d.wall_thickness_mm, 0.4, 2.2),
        ("body_height_mm", d.body_height_mm, 60.0, 280.0),
        ("head_height_mm", d.head_height_mm, 24.0, 130.0),
        ("body_bottom_diameter_mm", d.body_bottom_diameter_mm, 55.0, 180.0),
        ("body_max_diameter_mm", d.body_max_diameter_mm, 65.0, 210.0),
        ("handle_length_mm", d.handle_length_mm, 45.0, 190.0),
        ("handle_offset_mm", d.handle_offset_mm, 8.0, 80.0),
        ("handle_drop_mm", d.handle_drop_mm, 28.0, 160.0),
        ("handle_thickness_mm", d.handle_thickness_mm, 8.0, 34.0),
        ("base_cap_height_mm", d.base_cap_height_mm, 2.0, 20.0),
        ("insert_height_mm", d.insert_height_mm, 12.0, 60.0),
        ("head_top_diameter_mm", d.head_top_diameter_mm, 70.0, 240.0),
    ];
    for (name, value, min, max) in absolute {
        if value < min - EPS || value > max + EPS {
            return OracleVerdict::fail_val(
                "clamp_enforcement",
                format!("{} = {:.3} outside [{}, {}]", name, value, min, max),
                value,
            );
        }
    }

    let couplings: [(&str, bool); 6] = [
        (
            "neck <= 0.92 * body_max",
            d.neck_diameter_mm <= d.body_max_diameter_mm * 0.92 + EPS,
        ),
        (
            "neck < head_top",
            d.neck_diameter_mm < d.head_top_diameter_mm,
        ),
        (
            "insert_outer <= neck - 6",
            d.insert_outer_diameter_mm <= d.neck_diameter_mm - 6.0 + EPS,
        ),
        (
            "insert_inner <= insert_outer - 6",
            d.insert_inner_diameter_mm <= d.insert_outer_diameter_mm - 6.0 + EPS,
        ),
        (
            "base_cap <= body_bottom + 18",
            d.base_cap_diameter_mm <= d.body_bottom_diameter_mm + 18.0 + EPS,
        ),
        (
            "overlap <= 0.45 * head_height",
            d.head_neck_overlap_mm <= (d.head_height_mm * 0.45).min(22.0) + EPS,
        ),
    ];
    for (name, ok) in couplings {
        if !ok {
            return OracleVerdict::fail(
                "clamp_enforcement",
                format!("coupling violated: {} ({:?})", name, sliders),
            );
        }
    }

    OracleVerdict::pass(
        "clamp_enforcement",
        "all dimensions within manufacturable ranges".to_string(),
    )
}

// ── Geometry Oracles ────────────────────────────────────────────────────────

/// Outer silhouette heights must never decrease from base to rim.
pub fn check_profile_monotonic(dim: &DimensionSet) -> OracleVerdict {
    let profile = silhouette(dim);
    if profile_height_monotonic(&profile) {
        OracleVerdict::pass_val(
            "profile_monotonic",
            format!("{} samples, heights non-decreasing", profile.len()),
            profile.len() as f64,
        )
    } else {
        let bad = profile
            .windows(2)
            .position(|pair| pair[1].height_mm < pair[0].height_mm)
            .unwrap_or(0);
        OracleVerdict::fail_val(
            "profile_monotonic",
            format!("height decreases at sample {}", bad + 1),
            (bad + 1) as f64,
        )
    }
}

/// The BOM must always contain exactly the six canonical parts, in
/// order, each with a non-negative mass estimate.
pub fn check_bom_completeness(blueprint: &Blueprint) -> OracleVerdict {
    let expected: Vec<&str> = PartKey::ALL.iter().map(|p| p.as_str()).collect();
    let actual: Vec<&str> = blueprint.bom.iter().map(|l| l.part_key.as_str()).collect();
    if actual != expected {
        return OracleVerdict::fail(
            "bom_completeness",
            format!("part keys {:?}, expected {:?}", actual, expected),
        );
    }
    for line in &blueprint.bom {
        if !(line.mass_estimate_g >= 0.0) {
            return OracleVerdict::fail_val(
                "bom_completeness",
                format!("{} has mass {:.2} g", line.part_key.as_str(), line.mass_estimate_g),
                line.mass_estimate_g,
            );
        }
    }
    OracleVerdict::pass(
        "bom_completeness",
        format!("6 parts, total {:.1} g", blueprint.bom.iter().map(|l| l.mass_estimate_g).sum::<f64>()),
    )
}

// ── Suite Runner ────────────────────────────────────────────────────────────

/// Run every oracle against one blueprint, using its own dimensions as
/// the morph baseline.
pub fn run_standard_checks(blueprint: &Blueprint) -> Vec<OracleVerdict> {
    let dim = &blueprint.dimensions;
    vec![
        check_height_identity(dim),
        check_capacity_monotonic(dim),
        check_scale_cube_law(dim, 1.5),
        check_default_round_trip(),
        check_morph_identity(dim),
        check_clamp_enforcement(
            dim,
            &ShapeSliders {
                body_curve: 100.0,
                head_flare: -100.0,
                height: 100.0,
                neck: -100.0,
                handle: 100.0,
                base: -100.0,
            },
        ),
        check_profile_monotonic(dim),
        check_bom_completeness(blueprint),
    ]
}
