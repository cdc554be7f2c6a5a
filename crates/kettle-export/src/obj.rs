//! Wavefront OBJ writer for the revolved outer shell.

use kettle_geom::profile::{outer_profile, ProfileOptions};
use kettle_geom::revolve::{revolve_profile, REVOLVE_SEGMENTS};
use kettle_types::Blueprint;

use crate::dxf::{EXPORT_BODY_SAMPLES, EXPORT_HEAD_SAMPLES};

/// Revolve the export-resolution silhouette and serialize it as ASCII
/// OBJ. Vertices carry six decimals; face indices are 1-based.
pub fn export_obj(blueprint: &Blueprint, options: &ProfileOptions) -> String {
    let profile = outer_profile(
        &blueprint.dimensions,
        EXPORT_BODY_SAMPLES,
        EXPORT_HEAD_SAMPLES,
        options,
    );
    let mesh = revolve_profile(&profile, REVOLVE_SEGMENTS);

    let mut lines = Vec::with_capacity(2 + mesh.vertex_count() + mesh.triangle_count());
    lines.push("# kettlewright export".to_string());
    lines.push("o kettle".to_string());

    for v in mesh.vertices.chunks_exact(3) {
        lines.push(format!("v {:.6} {:.6} {:.6}", v[0], v[1], v[2]));
    }
    for tri in mesh.indices.chunks_exact(3) {
        lines.push(format!("f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1));
    }

    format!("{}\n", lines.join("\n"))
}
