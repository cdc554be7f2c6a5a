use kettle_types::ShapeSliders;
use test_harness::helpers::default_blueprint;
use test_harness::oracle::*;

#[test]
fn all_oracles_pass_on_the_default_design() {
    let bp = default_blueprint(4.0);
    for verdict in run_standard_checks(&bp) {
        assert!(
            verdict.passed,
            "{} failed: {}",
            verdict.oracle_name, verdict.detail
        );
    }
}

#[test]
fn oracles_pass_across_cup_sizes() {
    for cups in [1.0, 2.0, 6.0, 10.0] {
        let bp = default_blueprint(cups);
        let dim = &bp.dimensions;
        assert!(check_height_identity(dim).passed, "cups {}", cups);
        assert!(check_capacity_monotonic(dim).passed, "cups {}", cups);
        assert!(check_profile_monotonic(dim).passed, "cups {}", cups);
        assert!(check_bom_completeness(&bp).passed, "cups {}", cups);
    }
}

#[test]
fn height_identity_catches_a_stale_derived_field() {
    let mut bp = default_blueprint(4.0);
    bp.dimensions.overall_height_mm += 5.0;
    let verdict = check_height_identity(&bp.dimensions);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("delta"));
}

#[test]
fn cube_law_holds_across_the_documented_scale_range() {
    let bp = default_blueprint(4.0);
    for factor in [0.5, 0.75, 1.0, 1.25, 1.5, 2.0] {
        let verdict = check_scale_cube_law(&bp.dimensions, factor);
        assert!(verdict.passed, "s={}: {}", factor, verdict.detail);
    }
}

#[test]
fn morph_identity_flags_a_drifting_engine() {
    let bp = default_blueprint(4.0);
    assert!(check_morph_identity(&bp.dimensions).passed);

    // a baseline outside the envelope cannot be reproduced: the clamp
    // pass pulls it back in, which is exactly the drift this catches
    let mut wild = bp.dimensions.clone();
    wild.body_height_mm = 500.0;
    assert!(!check_morph_identity(&wild).passed);
}

#[test]
fn clamp_oracle_accepts_slider_extremes() {
    let bp = default_blueprint(4.0);
    let extremes = [-100.0, 0.0, 100.0];
    for &body_curve in &extremes {
        for &neck in &extremes {
            for &base in &extremes {
                let sliders = ShapeSliders {
                    body_curve,
                    head_flare: -body_curve,
                    height: neck,
                    neck,
                    handle: base,
                    base,
                };
                let verdict = check_clamp_enforcement(&bp.dimensions, &sliders);
                assert!(verdict.passed, "{:?}: {}", sliders, verdict.detail);
            }
        }
    }
}

#[test]
fn bom_oracle_rejects_missing_and_negative_lines() {
    let mut bp = default_blueprint(4.0);
    bp.bom.pop();
    assert!(!check_bom_completeness(&bp).passed);

    let mut bp = default_blueprint(4.0);
    bp.bom[2].mass_estimate_g = -1.0;
    assert!(!check_bom_completeness(&bp).passed);
}

#[test]
fn default_round_trip_oracle_passes() {
    let verdict = check_default_round_trip();
    assert!(verdict.passed, "{}", verdict.detail);
}
