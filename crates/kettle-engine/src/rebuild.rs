//! Blueprint construction and the derive-everything recompute.

use uuid::Uuid;

use kettle_types::Blueprint;

use kettle_geom::scalar::round_to;

use crate::analysis::default_analysis_report;
use crate::bom::generate_bom;
use crate::capacity::estimate_capacity_ml;
use crate::materials::merge_materials;
use crate::scale::create_default_dimensions;

/// Build a complete blueprint for a cup count: default dimensions, the
/// canned analysis materials merged over the stock ones, and a BOM.
pub fn build_default_blueprint(cups: f64) -> Blueprint {
    let analysis = default_analysis_report();
    let dimensions = create_default_dimensions(cups);
    let materials = merge_materials(&analysis.material_suggestions);
    let bom = generate_bom(&dimensions, &materials);
    Blueprint {
        revision: Uuid::new_v4(),
        title: Blueprint::TITLE.to_string(),
        design_version: Blueprint::DESIGN_VERSION.to_string(),
        units: Blueprint::UNITS.to_string(),
        dimensions,
        materials,
        bom,
        analysis_notes: analysis.notes,
    }
}

/// Re-derive everything that hangs off the dimensions, in place: the
/// overall height (two decimals), the capacity estimate (one decimal),
/// the merged material list, and the BOM. Stamps a fresh revision so
/// downstream caches can tell the result apart from its predecessor.
pub fn rebuild_blueprint(blueprint: &mut Blueprint) {
    let dim = &mut blueprint.dimensions;
    dim.overall_height_mm = round_to(dim.computed_overall_height(), 2);
    dim.estimated_capacity_ml = round_to(estimate_capacity_ml(dim), 1);
    blueprint.materials = merge_materials(&blueprint.materials);
    blueprint.bom = generate_bom(&blueprint.dimensions, &blueprint.materials);
    blueprint.revision = Uuid::new_v4();
}
