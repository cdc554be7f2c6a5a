//! The owning session: one live blueprint, its shape playground, and
//! the most recent analysis report. Every mutation funnels through a
//! method here and leaves the blueprint fully recomputed, so callers
//! never observe half-derived state.

use kettle_types::{field_meta, AnalysisReport, Blueprint, PlaygroundState, ShapeSliders};

use kettle_geom::scalar::clamp;

use crate::analysis::default_analysis_report;
use crate::morph::morph_dimensions;
use crate::rebuild::{build_default_blueprint, rebuild_blueprint};
use crate::scale::apply_capacity_scale;
use crate::shapes::{apply_head_flare_ratio, apply_quick_shape, QuickShape};
use crate::validate::clamp_relations;

/// Cup counts accepted by the default loader.
const MIN_CUPS: f64 = 0.5;
const MAX_CUPS: f64 = 24.0;

fn sanitize_cups(cups: f64) -> f64 {
    if cups.is_finite() {
        clamp(cups, MIN_CUPS, MAX_CUPS)
    } else {
        4.0
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    blueprint: Blueprint,
    playground: PlaygroundState,
    analysis: Option<AnalysisReport>,
}

impl Session {
    /// A session for the canonical 4-cup design.
    pub fn new() -> Session {
        Session::for_cups(4.0)
    }

    /// A session sized for a cup count. Non-finite counts fall back to
    /// 4 cups; finite ones are clamped into [0.5, 24].
    pub fn for_cups(cups: f64) -> Session {
        let blueprint = build_default_blueprint(sanitize_cups(cups));
        let playground = PlaygroundState::from_baseline(blueprint.dimensions.clone());
        Session {
            blueprint,
            playground,
            analysis: Some(default_analysis_report()),
        }
    }

    /// Replace everything with a fresh default design.
    pub fn load_default(&mut self, cups: f64) {
        *self = Session::for_cups(cups);
    }

    /// Adopt a blueprint loaded from a file. The blueprint is fully
    /// recomputed and becomes the new playground baseline, with the
    /// sliders back at zero.
    pub fn adopt_blueprint(&mut self, blueprint: Blueprint) {
        self.blueprint = blueprint;
        self.recompute();
        self.playground = PlaygroundState::from_baseline(self.blueprint.dimensions.clone());
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn playground(&self) -> &PlaygroundState {
        &self.playground
    }

    pub fn analysis(&self) -> Option<&AnalysisReport> {
        self.analysis.as_ref()
    }

    /// Re-derive overall height, capacity estimate, materials, and BOM.
    pub fn recompute(&mut self) {
        rebuild_blueprint(&mut self.blueprint);
    }

    /// Direct edit of one dimension field. Rejected silently (returns
    /// false) for non-finite values, unknown keys, and derived fields.
    /// Accepted values are floored at the field minimum, pulled back
    /// into the relational envelope, and followed by a full recompute.
    pub fn edit_dimension(&mut self, key: &str, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let Some(field) = field_meta(key) else {
            return false;
        };
        if field.read_only {
            return false;
        }
        self.blueprint.dimensions.set(key, value.max(field.min));
        clamp_relations(&mut self.blueprint.dimensions);
        self.recompute();
        true
    }

    pub fn set_capacity_lock(&mut self, lock: bool) {
        self.playground.lock_capacity = lock;
    }

    /// Run the slider morph against the playground baseline.
    ///
    /// `maintain_capacity` marks a committed change (slider release):
    /// only then, and only with the lock on, is the result rescaled
    /// toward `capacity_target_ml`. The rescale is a single uniform
    /// pass with the cube-root of the volume ratio, gated so absurd
    /// ratios and sub-1.5% misses leave the geometry alone.
    pub fn apply_morph(&mut self, sliders: ShapeSliders, maintain_capacity: bool) {
        self.playground.sliders = sliders;
        self.blueprint.dimensions =
            morph_dimensions(&self.playground.baseline, &self.playground.sliders);
        self.recompute();

        if maintain_capacity && self.playground.lock_capacity {
            let target = self.blueprint.dimensions.capacity_target_ml;
            let estimated = self.blueprint.dimensions.estimated_capacity_ml;
            if target.is_finite() && estimated.is_finite() && estimated > 1.0 {
                let ratio = target / estimated;
                if ratio > 0.3 && ratio < 2.5 && (1.0 - ratio).abs() > 0.015 {
                    apply_capacity_scale(&mut self.blueprint.dimensions, ratio.cbrt());
                    self.recompute();
                }
            }
        }
    }

    /// Snap back to the playground baseline: sliders to zero, lock back
    /// on, dimensions restored.
    pub fn reset_morph(&mut self) {
        self.blueprint.dimensions = self.playground.baseline.clone();
        self.playground.sliders = ShapeSliders::default();
        self.playground.lock_capacity = true;
        self.recompute();
    }

    /// Adopt the current geometry as the new morph baseline.
    pub fn rebase_playground(&mut self) {
        self.playground.rebase(self.blueprint.dimensions.clone());
    }

    /// Apply a one-tap shape. Multiplier actions keep the slider
    /// positions and only re-capture the baseline; `Reset` rebuilds the
    /// defaults and re-initializes the playground wholesale.
    pub fn quick_shape(&mut self, shape: QuickShape) {
        apply_quick_shape(&mut self.blueprint.dimensions, shape);
        self.recompute();
        if shape == QuickShape::Reset {
            self.playground.rebase(self.blueprint.dimensions.clone());
        } else {
            self.playground.baseline = self.blueprint.dimensions.clone();
        }
    }

    /// Rescale the head flare by a preview step ratio. Leaves the
    /// derived blueprint stale on purpose; the caller schedules the
    /// recompute when the gesture commits.
    pub fn apply_flare_ratio(&mut self, ratio: f64) {
        apply_head_flare_ratio(&mut self.blueprint.dimensions, ratio);
    }

    /// Override the chosen material for one part. Returns false for
    /// unknown part keys and blank names; an accepted pick flows into
    /// the regenerated BOM.
    pub fn select_material(&mut self, part_key: &str, material: &str) -> bool {
        let name = material.trim();
        if name.is_empty() {
            return false;
        }
        let Some(assignment) = self
            .blueprint
            .materials
            .iter_mut()
            .find(|m| m.part_key == part_key)
        else {
            return false;
        };
        assignment.selected = Some(name.to_string());
        self.recompute();
        true
    }

    pub fn set_analysis(&mut self, report: AnalysisReport) {
        self.analysis = Some(report);
    }

    /// Push the stored analysis suggestions into the blueprint
    /// materials. Returns false when there is nothing to apply.
    pub fn apply_analysis(&mut self) -> bool {
        let Some(report) = &self.analysis else {
            return false;
        };
        if report.material_suggestions.is_empty() {
            return false;
        }
        self.blueprint.materials = report.material_suggestions.clone();
        self.recompute();
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::create_default_dimensions;

    #[test]
    fn cup_counts_are_sanitized() {
        assert_eq!(Session::for_cups(100.0).blueprint().dimensions.cups_target, 24.0);
        assert_eq!(Session::for_cups(0.1).blueprint().dimensions.cups_target, 0.5);
        assert_eq!(Session::for_cups(f64::NAN).blueprint().dimensions.cups_target, 4.0);
        assert_eq!(Session::for_cups(6.0).blueprint().dimensions.cups_target, 6.0);
    }

    #[test]
    fn fresh_session_carries_the_default_analysis() {
        let session = Session::new();
        let report = session.analysis().unwrap();
        assert_eq!(report.material_suggestions.len(), 6);
        assert_eq!(session.playground().baseline, session.blueprint().dimensions);
        assert!(session.playground().lock_capacity);
    }

    #[test]
    fn edits_reject_bad_targets_silently() {
        let mut session = Session::new();
        let before = session.blueprint().clone();
        assert!(!session.edit_dimension("overall_height_mm", 200.0));
        assert!(!session.edit_dimension("estimated_capacity_ml", 1.0));
        assert!(!session.edit_dimension("spout_angle_deg", 30.0));
        assert!(!session.edit_dimension("body_height_mm", f64::NAN));
        assert_eq!(session.blueprint().dimensions, before.dimensions);
        assert_eq!(session.blueprint().revision, before.revision);
    }

    #[test]
    fn accepted_edit_floors_clamps_and_recomputes() {
        let mut session = Session::new();
        let revision = session.blueprint().revision;
        assert!(session.edit_dimension("neck_diameter_mm", 5.0));
        let dim = &session.blueprint().dimensions;
        // the 20 mm field floor loses to the 40 mm relational floor
        assert_eq!(dim.neck_diameter_mm, 40.0);
        assert!(dim.insert_outer_diameter_mm <= 34.0);
        assert!(dim.insert_inner_diameter_mm <= dim.insert_outer_diameter_mm - 6.0);
        assert_ne!(session.blueprint().revision, revision);
    }

    #[test]
    fn edit_updates_the_capacity_estimate() {
        let mut session = Session::new();
        session.set_capacity_lock(false);
        let before = session.blueprint().dimensions.estimated_capacity_ml;
        assert!(session.edit_dimension("body_max_diameter_mm", 150.0));
        assert!(session.blueprint().dimensions.estimated_capacity_ml > before);
    }

    #[test]
    fn morph_reads_the_baseline_not_the_current_shape() {
        let mut first = Session::for_cups(4.0);
        first.set_capacity_lock(false);
        let sliders_a = ShapeSliders {
            body_curve: 80.0,
            ..ShapeSliders::default()
        };
        let sliders_b = ShapeSliders {
            height: -40.0,
            ..ShapeSliders::default()
        };
        first.apply_morph(sliders_a, true);
        first.apply_morph(sliders_b, true);

        let mut second = Session::for_cups(4.0);
        second.set_capacity_lock(false);
        second.apply_morph(sliders_b, true);

        assert_eq!(first.blueprint().dimensions, second.blueprint().dimensions);
    }

    #[test]
    fn capacity_lock_pulls_the_estimate_back_to_target() {
        let mut session = Session::new();
        let target = session.blueprint().dimensions.capacity_target_ml;
        let sliders = ShapeSliders {
            body_curve: 100.0,
            height: 60.0,
            ..ShapeSliders::default()
        };
        session.apply_morph(sliders, true);
        let estimated = session.blueprint().dimensions.estimated_capacity_ml;
        assert!(
            (estimated - target).abs() < 1.0,
            "estimated {} vs target {}",
            estimated,
            target
        );
    }

    #[test]
    fn drag_previews_skip_the_lock() {
        let mut session = Session::new();
        let target = session.blueprint().dimensions.capacity_target_ml;
        let sliders = ShapeSliders {
            body_curve: 100.0,
            height: 60.0,
            ..ShapeSliders::default()
        };
        session.apply_morph(sliders, false);
        let estimated = session.blueprint().dimensions.estimated_capacity_ml;
        assert!((estimated - target).abs() > 50.0);
    }

    #[test]
    fn disabled_lock_leaves_commits_unscaled() {
        let mut session = Session::new();
        session.set_capacity_lock(false);
        let target = session.blueprint().dimensions.capacity_target_ml;
        let sliders = ShapeSliders {
            body_curve: 100.0,
            height: 60.0,
            ..ShapeSliders::default()
        };
        session.apply_morph(sliders, true);
        let estimated = session.blueprint().dimensions.estimated_capacity_ml;
        assert!((estimated - target).abs() > 50.0);
    }

    #[test]
    fn reset_morph_restores_baseline_and_lock() {
        let mut session = Session::new();
        session.set_capacity_lock(false);
        let baseline = session.playground().baseline.clone();
        session.apply_morph(
            ShapeSliders {
                neck: 70.0,
                handle: -50.0,
                ..ShapeSliders::default()
            },
            true,
        );
        assert_ne!(session.blueprint().dimensions, baseline);

        session.reset_morph();
        assert_eq!(session.blueprint().dimensions, baseline);
        assert!(session.playground().sliders.is_zero());
        assert!(session.playground().lock_capacity);
    }

    #[test]
    fn quick_shapes_recapture_but_keep_slider_positions() {
        let mut session = Session::new();
        session.set_capacity_lock(false);
        let sliders = ShapeSliders {
            base: 30.0,
            ..ShapeSliders::default()
        };
        session.apply_morph(sliders, false);
        session.quick_shape(QuickShape::Taller);

        assert_eq!(session.playground().baseline, session.blueprint().dimensions);
        assert_eq!(session.playground().sliders, sliders);
    }

    #[test]
    fn quick_shape_reset_reinitializes_the_playground() {
        let mut session = Session::for_cups(6.0);
        session.set_capacity_lock(false);
        session.apply_morph(
            ShapeSliders {
                body_curve: 90.0,
                ..ShapeSliders::default()
            },
            true,
        );
        session.quick_shape(QuickShape::Reset);

        // the recompute after reset reproduces the generator's own
        // rounding, so the dimensions land exactly on the defaults
        assert_eq!(session.blueprint().dimensions, create_default_dimensions(6.0));
        assert!(session.playground().sliders.is_zero());
        assert!(session.playground().lock_capacity);
    }

    #[test]
    fn flare_ratio_leaves_derived_fields_for_the_commit() {
        let mut session = Session::new();
        let est_before = session.blueprint().dimensions.estimated_capacity_ml;
        session.apply_flare_ratio(1.3);
        // overall height is maintained inline, capacity waits for the
        // committed recompute
        let dim = &session.blueprint().dimensions;
        assert!((dim.overall_height_mm
            - (dim.body_height_mm + dim.head_height_mm - dim.head_neck_overlap_mm))
            .abs()
            < 0.01);
        assert_eq!(dim.estimated_capacity_ml, est_before);

        session.recompute();
        assert!(session.blueprint().dimensions.estimated_capacity_ml > est_before);
    }

    #[test]
    fn adopted_blueprint_becomes_the_new_baseline() {
        let mut session = Session::new();
        let mut loaded = crate::rebuild::build_default_blueprint(8.0);
        loaded.dimensions.estimated_capacity_ml = 0.0; // stale derived field
        session.apply_morph(
            ShapeSliders {
                head_flare: 60.0,
                ..ShapeSliders::default()
            },
            false,
        );

        session.adopt_blueprint(loaded);
        let dim = &session.blueprint().dimensions;
        assert_eq!(dim.cups_target, 8.0);
        assert!(dim.estimated_capacity_ml > 100.0);
        assert_eq!(session.playground().baseline, *dim);
        assert!(session.playground().sliders.is_zero());
    }

    #[test]
    fn applying_analysis_pushes_suggestions_into_materials() {
        let mut session = Session::new();
        let mut report = default_analysis_report();
        report.material_suggestions[0].selected = Some("Stainless Steel 316L (0.9 mm)".to_string());
        session.set_analysis(report);
        assert!(session.apply_analysis());
        let body = &session.blueprint().materials[0];
        assert_eq!(body.selected.as_deref(), Some("Stainless Steel 316L (0.9 mm)"));
        // BOM follows the new selection
        assert_eq!(session.blueprint().bom[0].material, "Stainless Steel 316L (0.9 mm)");
    }

    #[test]
    fn material_picks_update_the_bom() {
        let mut session = Session::new();
        assert!(session.select_material("handle", "Phenolic resin, matte black"));
        assert_eq!(session.blueprint().bom[3].material, "Phenolic resin, matte black");
        assert!(!session.select_material("spout", "anything"));
        assert!(!session.select_material("handle", "   "));
    }

    #[test]
    fn analysis_with_no_suggestions_is_a_no_op() {
        let mut session = Session::new();
        let mut report = default_analysis_report();
        report.material_suggestions.clear();
        session.set_analysis(report);
        let before = session.blueprint().clone();
        assert!(!session.apply_analysis());
        assert_eq!(session.blueprint().materials, before.materials);
    }
}
