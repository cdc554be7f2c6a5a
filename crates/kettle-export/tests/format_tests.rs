use kettle_engine::build_default_blueprint;
use kettle_export::{
    export_dxf, export_json, export_obj, load_blueprint, load_blueprint_from_path, save_blueprint,
    save_blueprint_to_path, FileMetadata, LoadError, FORMAT_VERSION,
};
use kettle_geom::profile::ProfileOptions;
use kettle_types::Blueprint;

// ── Helper Functions ─────────────────────────────────────────────────────

fn make_blueprint() -> Blueprint {
    build_default_blueprint(4.0)
}

/// Count DXF records of the given kind. The writer emits strict
/// code/value pairs, so even lines are group codes.
fn count_records(dxf: &str, kind: &str) -> usize {
    let lines: Vec<&str> = dxf.lines().collect();
    lines
        .chunks_exact(2)
        .filter(|pair| pair[0] == "0" && pair[1] == kind)
        .count()
}

fn group_values<'a>(dxf: &'a str, code: &str) -> Vec<&'a str> {
    let lines: Vec<&str> = dxf.lines().collect();
    lines
        .chunks_exact(2)
        .filter(|pair| pair[0] == code)
        .map(|pair| pair[1])
        .collect()
}

// ── Save Tests ──────────────────────────────────────────────────────────

#[test]
fn save_produces_valid_json() {
    let blueprint = make_blueprint();
    let meta = FileMetadata::new("Test Kettle");
    let json = save_blueprint(&blueprint, &meta);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed.is_object());
}

#[test]
fn save_includes_format_and_version() {
    let blueprint = make_blueprint();
    let meta = FileMetadata::new("Test Kettle");
    let json = save_blueprint(&blueprint, &meta);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["format"], "kettlewright");
    assert_eq!(parsed["version"], FORMAT_VERSION);
}

#[test]
fn save_includes_file_metadata() {
    let blueprint = make_blueprint();
    let meta = FileMetadata::new("Morning Brewer");
    let json = save_blueprint(&blueprint, &meta);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["metadata"]["title"], "Morning Brewer");
    assert!(parsed["metadata"]["app_version"].is_string());
    assert!(parsed["metadata"]["created"].is_string());
    assert!(parsed["metadata"]["modified"].is_string());
}

#[test]
fn save_embeds_the_full_blueprint() {
    let blueprint = make_blueprint();
    let meta = FileMetadata::new("Test");
    let json = save_blueprint(&blueprint, &meta);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed["blueprint"]["dimensions"]["body_max_diameter_mm"].is_number());
    assert_eq!(parsed["blueprint"]["materials"].as_array().unwrap().len(), 6);
    assert_eq!(parsed["blueprint"]["bom"].as_array().unwrap().len(), 6);
}

#[test]
fn export_json_is_a_bare_blueprint() {
    let blueprint = make_blueprint();
    let json = export_json(&blueprint);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed.get("format").is_none());
    assert!(parsed.get("version").is_none());
    assert!(parsed["dimensions"]["overall_height_mm"].is_number());
}

// ── Load Tests ──────────────────────────────────────────────────────────

#[test]
fn load_round_trip_preserves_dimensions() {
    let blueprint = make_blueprint();
    let meta = FileMetadata::new("Round Trip");
    let json = save_blueprint(&blueprint, &meta);

    let (loaded, loaded_meta) = load_blueprint(&json).unwrap();

    assert_eq!(loaded.dimensions, blueprint.dimensions);
    assert_eq!(loaded.title, blueprint.title);
    assert_eq!(loaded_meta.title, "Round Trip");
}

#[test]
fn load_issues_a_fresh_revision() {
    let blueprint = make_blueprint();
    let meta = FileMetadata::new("Test");
    let json = save_blueprint(&blueprint, &meta);

    let (loaded, _) = load_blueprint(&json).unwrap();
    assert_ne!(loaded.revision, blueprint.revision);
}

#[test]
fn load_recomputes_tampered_derived_fields() {
    let blueprint = make_blueprint();
    let meta = FileMetadata::new("Test");
    let json = save_blueprint(&blueprint, &meta);

    let mut parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    parsed["blueprint"]["dimensions"]["overall_height_mm"] = serde_json::json!(9999.0);
    let tampered = serde_json::to_string(&parsed).unwrap();

    let (loaded, _) = load_blueprint(&tampered).unwrap();
    let dim = &loaded.dimensions;
    let expected =
        ((dim.body_height_mm + dim.head_height_mm - dim.head_neck_overlap_mm) * 100.0).round()
            / 100.0;
    assert!((dim.overall_height_mm - expected).abs() < 1e-9);
    assert!(dim.overall_height_mm < 9999.0);
}

#[test]
fn load_regenerates_a_stripped_bom() {
    let blueprint = make_blueprint();
    let meta = FileMetadata::new("Test");
    let json = save_blueprint(&blueprint, &meta);

    let mut parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    parsed["blueprint"].as_object_mut().unwrap().remove("bom");
    let stripped = serde_json::to_string(&parsed).unwrap();

    let (loaded, _) = load_blueprint(&stripped).unwrap();
    assert_eq!(loaded.bom.len(), 6);
}

#[test]
fn load_rejects_unknown_format() {
    let json = r#"{
        "format": "not-kettlewright",
        "version": 1,
        "metadata": {"title": "x", "app_version": "0.1.0", "created": "2025-01-01T00:00:00Z", "modified": "2025-01-01T00:00:00Z"},
        "blueprint": {"title": "x", "design_version": "v1", "units": "mm", "dimensions": {}, "materials": []}
    }"#;
    let result = load_blueprint(json);
    assert!(matches!(result, Err(LoadError::WrongFormat(_))));
}

#[test]
fn load_rejects_future_version() {
    let json = format!(
        r#"{{
        "format": "kettlewright",
        "version": {},
        "metadata": {{"title": "x", "app_version": "0.1.0", "created": "2025-01-01T00:00:00Z", "modified": "2025-01-01T00:00:00Z"}},
        "blueprint": {{"title": "x", "design_version": "v1", "units": "mm", "dimensions": {{}}, "materials": []}}
    }}"#,
        FORMAT_VERSION + 1
    );
    let result = load_blueprint(&json);
    assert!(matches!(result, Err(LoadError::UnsupportedVersion { .. })));
}

#[test]
fn load_rejects_stale_version_without_migration_path() {
    let json = r#"{
        "format": "kettlewright",
        "version": 0,
        "metadata": {"title": "x", "app_version": "0.1.0", "created": "2025-01-01T00:00:00Z", "modified": "2025-01-01T00:00:00Z"},
        "blueprint": {"title": "x", "design_version": "v1", "units": "mm", "dimensions": {}, "materials": []}
    }"#;
    let result = load_blueprint(json);
    assert!(matches!(result, Err(LoadError::MigrationFailed { .. })));
}

#[test]
fn load_rejects_invalid_json() {
    let result = load_blueprint("this is not json");
    assert!(matches!(result, Err(LoadError::Parse(_))));
}

#[test]
fn save_and_load_through_the_filesystem() {
    let blueprint = make_blueprint();
    let meta = FileMetadata::new("Disk Trip");
    let path = std::env::temp_dir().join(format!("kettlewright-{}.json", blueprint.revision));

    save_blueprint_to_path(&path, &blueprint, &meta).unwrap();
    let (loaded, loaded_meta) = load_blueprint_from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.dimensions, blueprint.dimensions);
    assert_eq!(loaded_meta.title, "Disk Trip");
}

#[test]
fn load_from_missing_path_is_io_error() {
    let path = std::env::temp_dir().join("kettlewright-definitely-missing.json");
    let result = load_blueprint_from_path(&path);
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

// ── DXF Export Tests ────────────────────────────────────────────────────

#[test]
fn dxf_document_frames_its_sections() {
    let blueprint = make_blueprint();
    let dxf = export_dxf(&blueprint, &ProfileOptions::default());

    assert!(dxf.starts_with("0\nSECTION\n2\nHEADER\n"));
    let section_names = group_values(&dxf, "2");
    assert!(section_names.contains(&"HEADER"));
    assert!(section_names.contains(&"TABLES"));
    assert!(section_names.contains(&"ENTITIES"));
    assert!(dxf.ends_with("0\nEOF\n"));
}

#[test]
fn dxf_declares_the_four_drawing_layers() {
    let blueprint = make_blueprint();
    let dxf = export_dxf(&blueprint, &ProfileOptions::default());

    assert_eq!(count_records(&dxf, "LAYER"), 4);
    let names = group_values(&dxf, "2");
    for layer in ["SIDE", "CENTER", "TOP", "ANNOT"] {
        assert!(names.contains(&layer), "missing layer {}", layer);
    }
}

#[test]
fn dxf_entity_counts_follow_the_export_profile() {
    let blueprint = make_blueprint();
    let dxf = export_dxf(&blueprint, &ProfileOptions::default());

    // 75-point silhouette → 74 mirrored segment pairs plus axis, base, rim
    assert_eq!(count_records(&dxf, "LINE"), 151);
    // plan view: head rim, neck, insert outer, insert inner
    assert_eq!(count_records(&dxf, "CIRCLE"), 4);
    // title, capacity, three dimension callouts, plan caption
    assert_eq!(count_records(&dxf, "TEXT"), 6);
}

#[test]
fn dxf_annotations_cover_title_and_key_dimensions() {
    let blueprint = make_blueprint();
    let dxf = export_dxf(&blueprint, &ProfileOptions::default());
    let dim = &blueprint.dimensions;

    assert!(dxf.contains(&blueprint.title));
    assert!(dxf.contains(&format!(
        "Estimated Capacity: {:.1} ml",
        dim.estimated_capacity_ml
    )));
    assert!(dxf.contains(&format!("Overall Height: {:.1} mm", dim.overall_height_mm)));
    assert!(dxf.contains(&format!("Body Max Dia: {:.1} mm", dim.body_max_diameter_mm)));
    assert!(dxf.contains(&format!("Head Top Dia: {:.1} mm", dim.head_top_diameter_mm)));
    assert!(dxf.contains("Top View"));
}

#[test]
fn dxf_coordinates_carry_four_decimals() {
    let blueprint = make_blueprint();
    let dxf = export_dxf(&blueprint, &ProfileOptions::default());

    // the rim tick spans ±head radius at overall height
    let r_head = blueprint.dimensions.head_top_diameter_mm * 0.5;
    assert!(dxf.contains(&format!("{:.4}", r_head)));
    assert!(dxf.contains(&format!("{:.4}", -r_head)));
    assert!(dxf.contains(&format!("{:.4}", blueprint.dimensions.overall_height_mm)));
}

#[test]
fn dxf_curvature_option_reshapes_the_flare() {
    let blueprint = make_blueprint();
    let tame = export_dxf(
        &blueprint,
        &ProfileOptions {
            curvature_scale: 0.4,
        },
    );
    let bulbous = export_dxf(
        &blueprint,
        &ProfileOptions {
            curvature_scale: 1.7,
        },
    );
    assert_ne!(tame, bulbous);
    // entity structure is unchanged, only coordinates move
    assert_eq!(
        count_records(&tame, "LINE"),
        count_records(&bulbous, "LINE")
    );
}

// ── OBJ Export Tests ────────────────────────────────────────────────────

#[test]
fn obj_header_names_the_object() {
    let blueprint = make_blueprint();
    let obj = export_obj(&blueprint, &ProfileOptions::default());

    let mut lines = obj.lines();
    assert_eq!(lines.next(), Some("# kettlewright export"));
    assert_eq!(lines.next(), Some("o kettle"));
}

#[test]
fn obj_counts_match_the_revolved_shell() {
    let blueprint = make_blueprint();
    let obj = export_obj(&blueprint, &ProfileOptions::default());

    let v_count = obj.lines().filter(|l| l.starts_with("v ")).count();
    let f_count = obj.lines().filter(|l| l.starts_with("f ")).count();

    // 75 profile rings × 56 segments
    assert_eq!(v_count, 4200);
    // 74 bands × 56 quads × 2 triangles
    assert_eq!(f_count, 8288);
}

#[test]
fn obj_face_indices_are_one_based_and_in_range() {
    let blueprint = make_blueprint();
    let obj = export_obj(&blueprint, &ProfileOptions::default());

    let mut min_index = u32::MAX;
    let mut max_index = 0u32;
    for line in obj.lines().filter(|l| l.starts_with("f ")) {
        for token in line.split_whitespace().skip(1) {
            let index: u32 = token.parse().unwrap();
            min_index = min_index.min(index);
            max_index = max_index.max(index);
        }
    }
    assert_eq!(min_index, 1);
    assert_eq!(max_index, 4200);
}

#[test]
fn obj_first_ring_lies_on_the_base_plane() {
    let blueprint = make_blueprint();
    let obj = export_obj(&blueprint, &ProfileOptions::default());

    for line in obj.lines().filter(|l| l.starts_with("v ")).take(56) {
        let y: f64 = line.split_whitespace().nth(2).unwrap().parse().unwrap();
        assert_eq!(y, 0.0, "base ring vertex off the ground: {}", line);
    }
}

#[test]
fn obj_ends_with_a_newline() {
    let blueprint = make_blueprint();
    let obj = export_obj(&blueprint, &ProfileOptions::default());
    assert!(obj.ends_with('\n'));
    assert!(!obj.ends_with("\n\n"));
}
