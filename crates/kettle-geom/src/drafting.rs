//! Flat drawing primitives for the 2D blueprint views.
//!
//! The elevation view mirrors the outer silhouette about the revolution
//! axis; the plan view is a stack of concentric rim/neck/insert circles
//! drawn beside it. Consumers (DXF writer, SVG renderer) only see lines,
//! circles, and text anchors.

use serde::{Deserialize, Serialize};

use kettle_types::DimensionSet;

use crate::profile::ProfilePoint;

/// Drawing layer names, matching the layers CAD tools expect to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftLayer {
    Side,
    Center,
    Top,
    Annot,
}

impl DraftLayer {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftLayer::Side => "SIDE",
            DraftLayer::Center => "CENTER",
            DraftLayer::Top => "TOP",
            DraftLayer::Annot => "ANNOT",
        }
    }
}

/// A single drawable primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DraftEntity {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        layer: DraftLayer,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        layer: DraftLayer,
    },
    Text {
        x: f64,
        y: f64,
        height: f64,
        content: String,
        layer: DraftLayer,
    },
}

/// Horizontal placement of the plan view beside the elevation.
pub const PLAN_VIEW_X: f64 = 280.0;

/// Center height of the plan view as a fraction of overall height.
pub const PLAN_VIEW_Y_FRACTION: f64 = 0.6;

fn line(x1: f64, y1: f64, x2: f64, y2: f64, layer: DraftLayer) -> DraftEntity {
    DraftEntity::Line { x1, y1, x2, y2, layer }
}

fn circle(cx: f64, cy: f64, radius: f64, layer: DraftLayer) -> DraftEntity {
    DraftEntity::Circle { cx, cy, radius, layer }
}

/// Side elevation: the silhouette and its mirror, the revolution axis,
/// and base/rim ticks.
pub fn elevation_entities(dim: &DimensionSet, profile: &[ProfilePoint]) -> Vec<DraftEntity> {
    let overall_h = dim.overall_height_mm;
    let r_bottom = dim.body_bottom_diameter_mm * 0.5;
    let r_head = dim.head_top_diameter_mm * 0.5;

    let mut entities = Vec::with_capacity(profile.len().saturating_sub(1) * 2 + 3);
    for pair in profile.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        entities.push(line(
            a.radius_mm,
            a.height_mm,
            b.radius_mm,
            b.height_mm,
            DraftLayer::Side,
        ));
        entities.push(line(
            -a.radius_mm,
            a.height_mm,
            -b.radius_mm,
            b.height_mm,
            DraftLayer::Side,
        ));
    }

    entities.push(line(0.0, -8.0, 0.0, overall_h + 12.0, DraftLayer::Center));
    entities.push(line(-r_bottom, 0.0, r_bottom, 0.0, DraftLayer::Side));
    entities.push(line(-r_head, overall_h, r_head, overall_h, DraftLayer::Side));
    entities
}

/// Plan view: rim, neck, and insert circles about a shared center.
pub fn plan_entities(dim: &DimensionSet) -> Vec<DraftEntity> {
    let cx = PLAN_VIEW_X;
    let cy = dim.overall_height_mm * PLAN_VIEW_Y_FRACTION;
    vec![
        circle(cx, cy, dim.head_top_diameter_mm * 0.5, DraftLayer::Top),
        circle(cx, cy, dim.neck_diameter_mm * 0.5, DraftLayer::Top),
        circle(cx, cy, dim.insert_outer_diameter_mm * 0.5, DraftLayer::Top),
        circle(cx, cy, dim.insert_inner_diameter_mm * 0.5, DraftLayer::Top),
    ]
}
