//! Minimal ASCII DXF writer for the 2D blueprint drawing.
//!
//! R12-flavored output: group code and value on alternating lines, an
//! empty HEADER, a TABLES section declaring the four drawing layers,
//! then LINE/CIRCLE/TEXT entities. Coordinates carry four decimals.

use kettle_geom::drafting::{
    elevation_entities, plan_entities, DraftEntity, DraftLayer, PLAN_VIEW_X, PLAN_VIEW_Y_FRACTION,
};
use kettle_geom::profile::{outer_profile, ProfileOptions};
use kettle_types::Blueprint;

/// Silhouette sample counts used for file exports, denser than the
/// interactive preview.
pub const EXPORT_BODY_SAMPLES: usize = 44;
pub const EXPORT_HEAD_SAMPLES: usize = 30;

const ANNOTATION_TEXT_HEIGHT: f64 = 3.2;
const ANNOTATION_X: f64 = -95.0;

const LAYERS: [DraftLayer; 4] = [
    DraftLayer::Side,
    DraftLayer::Center,
    DraftLayer::Top,
    DraftLayer::Annot,
];

fn push_pair(out: &mut Vec<String>, code: &str, value: impl Into<String>) {
    out.push(code.to_string());
    out.push(value.into());
}

fn push_entity(out: &mut Vec<String>, entity: &DraftEntity) {
    match entity {
        DraftEntity::Line { x1, y1, x2, y2, layer } => {
            push_pair(out, "0", "LINE");
            push_pair(out, "8", layer.as_str());
            push_pair(out, "10", format!("{x1:.4}"));
            push_pair(out, "20", format!("{y1:.4}"));
            push_pair(out, "30", "0.0");
            push_pair(out, "11", format!("{x2:.4}"));
            push_pair(out, "21", format!("{y2:.4}"));
            push_pair(out, "31", "0.0");
        }
        DraftEntity::Circle { cx, cy, radius, layer } => {
            push_pair(out, "0", "CIRCLE");
            push_pair(out, "8", layer.as_str());
            push_pair(out, "10", format!("{cx:.4}"));
            push_pair(out, "20", format!("{cy:.4}"));
            push_pair(out, "30", "0.0");
            push_pair(out, "40", format!("{radius:.4}"));
        }
        DraftEntity::Text { x, y, height, content, layer } => {
            push_pair(out, "0", "TEXT");
            push_pair(out, "8", layer.as_str());
            push_pair(out, "10", format!("{x:.4}"));
            push_pair(out, "20", format!("{y:.4}"));
            push_pair(out, "30", "0.0");
            push_pair(out, "40", format!("{height:.4}"));
            push_pair(out, "1", content.clone());
        }
    }
}

fn annotation(x: f64, y: f64, content: String) -> DraftEntity {
    DraftEntity::Text {
        x,
        y,
        height: ANNOTATION_TEXT_HEIGHT,
        content,
        layer: DraftLayer::Annot,
    }
}

/// Title, capacity, and key dimension callouts stacked above the
/// elevation, plus the plan-view caption.
fn annotation_entities(blueprint: &Blueprint) -> Vec<DraftEntity> {
    let dim = &blueprint.dimensions;
    let overall_h = dim.overall_height_mm;
    let plan_cx = PLAN_VIEW_X;
    let plan_cy = overall_h * PLAN_VIEW_Y_FRACTION;
    let r_head = dim.head_top_diameter_mm * 0.5;

    vec![
        annotation(ANNOTATION_X, overall_h + 24.0, blueprint.title.clone()),
        annotation(
            ANNOTATION_X,
            overall_h + 19.0,
            format!("Estimated Capacity: {:.1} ml", dim.estimated_capacity_ml),
        ),
        annotation(
            ANNOTATION_X,
            overall_h + 14.0,
            format!("Overall Height: {:.1} mm", overall_h),
        ),
        annotation(
            ANNOTATION_X,
            overall_h + 9.0,
            format!("Body Max Dia: {:.1} mm", dim.body_max_diameter_mm),
        ),
        annotation(
            ANNOTATION_X,
            overall_h + 4.0,
            format!("Head Top Dia: {:.1} mm", dim.head_top_diameter_mm),
        ),
        annotation(plan_cx - 50.0, plan_cy - r_head - 8.0, "Top View".to_string()),
    ]
}

fn layer_table(out: &mut Vec<String>) {
    push_pair(out, "0", "TABLE");
    push_pair(out, "2", "LAYER");
    push_pair(out, "70", format!("{}", LAYERS.len()));
    for layer in LAYERS {
        push_pair(out, "0", "LAYER");
        push_pair(out, "2", layer.as_str());
        push_pair(out, "70", "0");
        push_pair(out, "62", "7");
        push_pair(out, "6", "CONTINUOUS");
    }
    push_pair(out, "0", "ENDTAB");
}

/// Render the blueprint as a DXF drawing: mirrored side elevation,
/// concentric plan view, and text callouts.
pub fn export_dxf(blueprint: &Blueprint, options: &ProfileOptions) -> String {
    let dim = &blueprint.dimensions;
    let profile = outer_profile(dim, EXPORT_BODY_SAMPLES, EXPORT_HEAD_SAMPLES, options);

    let mut entities = elevation_entities(dim, &profile);
    entities.extend(plan_entities(dim));
    entities.extend(annotation_entities(blueprint));

    let mut out: Vec<String> = Vec::new();
    push_pair(&mut out, "0", "SECTION");
    push_pair(&mut out, "2", "HEADER");
    push_pair(&mut out, "0", "ENDSEC");

    push_pair(&mut out, "0", "SECTION");
    push_pair(&mut out, "2", "TABLES");
    layer_table(&mut out);
    push_pair(&mut out, "0", "ENDSEC");

    push_pair(&mut out, "0", "SECTION");
    push_pair(&mut out, "2", "ENTITIES");
    for entity in &entities {
        push_entity(&mut out, entity);
    }
    push_pair(&mut out, "0", "ENDSEC");
    push_pair(&mut out, "0", "EOF");

    format!("{}\n", out.join("\n"))
}
