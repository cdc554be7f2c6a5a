//! Bill-of-materials derivation.
//!
//! Masses come from a sheet-metal shell model: exterior surface areas
//! times gauge thickness times family density. Exterior radii are
//! deliberate here; the capacity model is the one that works on the
//! interior cavity.

use kettle_types::{BomLine, DimensionSet, MaterialAssignment, PartKey};

use kettle_geom::frustum::{
    annulus_area, cylinder_lateral_area, disc_area, frustum_lateral_area, torus_volume,
};
use kettle_geom::scalar::round_to;

use crate::materials::MaterialFamily;

/// Mass of a shell from its area (mm²), gauge (mm), and material.
fn mass_from_shell(area_mm2: f64, thickness_mm: f64, material: &str) -> f64 {
    let density = MaterialFamily::classify(material).density_g_per_cm3();
    (area_mm2 * thickness_mm / 1000.0) * density
}

/// Mass of a solid from its volume (mm³) and material.
fn mass_from_volume(volume_mm3: f64, material: &str) -> f64 {
    let density = MaterialFamily::classify(material).density_g_per_cm3();
    (volume_mm3 / 1000.0) * density
}

fn material_for<'a>(
    materials: &'a [MaterialAssignment],
    part: PartKey,
    fallback: &'a str,
) -> &'a str {
    materials
        .iter()
        .find(|m| m.part_key == part.as_str())
        .map(|m| m.effective_material().trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(fallback)
}

/// Derive the six-line BOM for a dimension set and its material
/// assignments. Parts missing from `materials` fall back to the stock
/// stainless/nylon/silicone picks.
pub fn generate_bom(dim: &DimensionSet, materials: &[MaterialAssignment]) -> Vec<BomLine> {
    let t = dim.wall_thickness_mm;
    let r_bottom = dim.body_bottom_diameter_mm * 0.5;
    let r_max = dim.body_max_diameter_mm * 0.5;
    let r_neck = dim.neck_diameter_mm * 0.5;
    let r_head = dim.head_top_diameter_mm * 0.5;

    let body_area = frustum_lateral_area(r_bottom, r_max, dim.body_height_mm * 0.30)
        + frustum_lateral_area(r_max, r_max * 0.98, dim.body_height_mm * 0.38)
        + frustum_lateral_area(r_max * 0.98, r_neck, dim.body_height_mm * 0.32);

    let head_h = (dim.head_height_mm - dim.head_neck_overlap_mm).max(8.0);
    let head_area = frustum_lateral_area(r_neck, r_neck * 1.18, head_h * 0.45)
        + frustum_lateral_area(r_neck * 1.18, r_head, head_h * 0.55);

    let insert_area = annulus_area(dim.insert_outer_diameter_mm, dim.insert_inner_diameter_mm)
        + cylinder_lateral_area(dim.insert_outer_diameter_mm, dim.insert_height_mm);

    let base_area = disc_area(dim.base_cap_diameter_mm);
    let handle_area = cylinder_lateral_area(dim.handle_thickness_mm, dim.handle_length_mm * 1.25);
    let gasket_vol = torus_volume(
        dim.neck_diameter_mm * 0.5,
        (dim.gasket_cross_section_mm * 0.5).max(0.5),
    );

    let body_mat = material_for(materials, PartKey::BodyShell, "Stainless Steel 304 (0.9 mm)");
    let head_mat = material_for(materials, PartKey::CurvedHead, "Stainless Steel 304 (0.9 mm)");
    let handle_mat = material_for(materials, PartKey::Handle, "Glass-filled Nylon 66");
    let insert_mat = material_for(
        materials,
        PartKey::InsertFilter,
        "Stainless Steel 304 + 80 mesh screen",
    );
    let gasket_mat = material_for(materials, PartKey::Gasket, "Food-grade Silicone");
    let base_mat = material_for(materials, PartKey::BaseCap, "Stainless Steel 304 (1.0 mm)");

    let insert_t = (t * 0.8).max(0.6);
    let base_t = t.max(1.0);

    let line = |part: PartKey,
                material: &str,
                process: &str,
                thickness_mm: f64,
                mass_estimate_g: f64,
                notes: &str| BomLine {
        part_key: part,
        part_name: part.display_name().to_string(),
        material: material.to_string(),
        process: process.to_string(),
        thickness_mm: round_to(thickness_mm, 2),
        quantity: 1,
        mass_estimate_g: round_to(mass_estimate_g, 1),
        notes: notes.to_string(),
    };

    vec![
        line(
            PartKey::BodyShell,
            body_mat,
            "Deep draw + neck reduction + brushing",
            t,
            mass_from_shell(body_area, t, body_mat),
            "TIG seam only if split blank is used.",
        ),
        line(
            PartKey::CurvedHead,
            head_mat,
            "Spin forming + lip trim",
            t,
            mass_from_shell(head_area, t, head_mat),
            "Interference-fit at neck with gasket.",
        ),
        line(
            PartKey::InsertFilter,
            insert_mat,
            "Stamp + draw + mesh spot weld",
            insert_t,
            mass_from_shell(insert_area, insert_t, insert_mat),
            "Inner opening sized for pour stability.",
        ),
        line(
            PartKey::Handle,
            handle_mat,
            "Injection mold + fastener insert",
            dim.handle_thickness_mm,
            mass_from_shell(handle_area, dim.handle_thickness_mm * 0.35, handle_mat),
            "Thermal isolation target < 45C at grip.",
        ),
        line(
            PartKey::Gasket,
            gasket_mat,
            "Compression mold",
            dim.gasket_cross_section_mm,
            mass_from_volume(gasket_vol, gasket_mat),
            "Food-contact compliant elastomer required.",
        ),
        line(
            PartKey::BaseCap,
            base_mat,
            "Stamp + trim",
            base_t,
            mass_from_shell(base_area, base_t, base_mat),
            "Protective and structural base reinforcement.",
        ),
    ]
}
