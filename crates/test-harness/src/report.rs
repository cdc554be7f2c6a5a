//! Structured text blueprint reports.
//!
//! Reports are natural language, not JSON, because a reviewer scanning
//! test output reads structured text better than raw data.

use std::fmt;

use kettle_types::Blueprint;

use crate::oracle::{run_standard_checks, OracleVerdict};

/// A complete blueprint report with all sections.
pub struct BlueprintReport {
    pub title: String,
    pub revision: String,
    pub dimension_lines: Vec<(String, String)>,
    pub capacity_line: String,
    pub material_lines: Vec<String>,
    pub bom_lines: Vec<String>,
    pub oracle_results: Vec<OracleVerdict>,
}

impl BlueprintReport {
    /// Build a report from a blueprint, running the standard oracle
    /// suite against it.
    pub fn from_blueprint(blueprint: &Blueprint) -> Self {
        let dim = &blueprint.dimensions;
        let dimension_lines = vec![
            ("overall height".to_string(), format!("{:.1} mm", dim.overall_height_mm)),
            ("body height".to_string(), format!("{:.1} mm", dim.body_height_mm)),
            ("body max diameter".to_string(), format!("{:.1} mm", dim.body_max_diameter_mm)),
            ("neck diameter".to_string(), format!("{:.1} mm", dim.neck_diameter_mm)),
            ("head top diameter".to_string(), format!("{:.1} mm", dim.head_top_diameter_mm)),
            ("wall thickness".to_string(), format!("{:.2} mm", dim.wall_thickness_mm)),
        ];
        let capacity_line = format!(
            "{:.1} mL estimated (target {:.1} mL for {:.1} cups)",
            dim.estimated_capacity_ml, dim.capacity_target_ml, dim.cups_target,
        );
        let material_lines = blueprint
            .materials
            .iter()
            .map(|m| {
                let selected = m.selected.as_deref().unwrap_or(&m.recommended);
                format!(
                    "{}: {} (confidence {:.0}%)",
                    m.part_key,
                    selected,
                    m.confidence * 100.0,
                )
            })
            .collect();
        let bom_lines = blueprint
            .bom
            .iter()
            .map(|l| {
                format!(
                    "{} x{} — {} — {:.1} g ({})",
                    l.part_key.as_str(),
                    l.quantity,
                    l.material,
                    l.mass_estimate_g,
                    l.process,
                )
            })
            .collect();

        BlueprintReport {
            title: blueprint.title.clone(),
            revision: blueprint.revision.to_string(),
            dimension_lines,
            capacity_line,
            material_lines,
            bom_lines,
            oracle_results: run_standard_checks(blueprint),
        }
    }

    /// Whether every oracle check passed.
    pub fn all_passed(&self) -> bool {
        self.oracle_results.iter().all(|v| v.passed)
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Kettle Blueprint Report ===\n\n");
        out.push_str(&format!("Design: {} (revision {})\n", self.title, self.revision));

        out.push_str("\nKey Dimensions:\n");
        for (name, value) in &self.dimension_lines {
            out.push_str(&format!("  {}: {}\n", name, value));
        }

        out.push_str(&format!("\nCapacity: {}\n", self.capacity_line));

        out.push_str(&format!("\nMaterials ({} parts):\n", self.material_lines.len()));
        for line in &self.material_lines {
            out.push_str(&format!("  {}\n", line));
        }

        out.push_str(&format!("\nBill of Materials ({} lines):\n", self.bom_lines.len()));
        for line in &self.bom_lines {
            out.push_str(&format!("  {}\n", line));
        }

        let failures = self.oracle_results.iter().filter(|v| !v.passed).count();
        out.push_str(&format!(
            "\nOracle Results ({} checks, {} failed):\n",
            self.oracle_results.len(),
            failures,
        ));
        for v in &self.oracle_results {
            let status = if v.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("  [{}] {}: {}\n", status, v.oracle_name, v.detail));
        }

        out
    }
}

impl fmt::Display for BlueprintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
