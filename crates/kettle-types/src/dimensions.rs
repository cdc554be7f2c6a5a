use serde::{Deserialize, Serialize};

/// The canonical measurement record for a vessel design.
///
/// All fields are millimeters except `cups_target` (US cups) and the two
/// capacity fields (milliliters). `overall_height_mm` and
/// `estimated_capacity_ml` are derived: they are overwritten on every
/// recompute and never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionSet {
    /// Requested serving count the design was generated for.
    pub cups_target: f64,
    /// Liquid capacity the design is aimed at, in milliliters.
    pub capacity_target_ml: f64,
    /// Derived net capacity of the current geometry, in milliliters.
    pub estimated_capacity_ml: f64,
    pub wall_thickness_mm: f64,
    pub manufacturing_tolerance_mm: f64,
    pub body_height_mm: f64,
    pub body_max_diameter_mm: f64,
    pub body_bottom_diameter_mm: f64,
    pub neck_diameter_mm: f64,
    pub head_height_mm: f64,
    pub head_top_diameter_mm: f64,
    /// Vertical overlap where the head sleeve seats over the body neck.
    pub head_neck_overlap_mm: f64,
    pub handle_length_mm: f64,
    pub handle_drop_mm: f64,
    pub handle_offset_mm: f64,
    pub handle_thickness_mm: f64,
    pub insert_outer_diameter_mm: f64,
    pub insert_inner_diameter_mm: f64,
    pub insert_height_mm: f64,
    pub gasket_cross_section_mm: f64,
    pub base_cap_height_mm: f64,
    pub base_cap_diameter_mm: f64,
    /// Derived: `body_height_mm + head_height_mm - head_neck_overlap_mm`.
    pub overall_height_mm: f64,
}

impl Default for DimensionSet {
    /// The hand-tuned 4-cup baseline every scaled design starts from.
    fn default() -> Self {
        DimensionSet {
            cups_target: 4.0,
            capacity_target_ml: 946.0,
            estimated_capacity_ml: 980.0,
            wall_thickness_mm: 0.9,
            manufacturing_tolerance_mm: 0.25,
            body_height_mm: 125.0,
            body_max_diameter_mm: 116.0,
            body_bottom_diameter_mm: 90.0,
            neck_diameter_mm: 84.0,
            head_height_mm: 58.0,
            head_top_diameter_mm: 150.0,
            head_neck_overlap_mm: 10.0,
            handle_length_mm: 92.0,
            handle_drop_mm: 66.0,
            handle_offset_mm: 20.0,
            handle_thickness_mm: 14.0,
            insert_outer_diameter_mm: 56.0,
            insert_inner_diameter_mm: 36.0,
            insert_height_mm: 26.0,
            gasket_cross_section_mm: 3.0,
            base_cap_height_mm: 6.0,
            base_cap_diameter_mm: 88.0,
            overall_height_mm: 173.0,
        }
    }
}

impl DimensionSet {
    /// Read a field by its wire key. Returns `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<f64> {
        let value = match key {
            "cups_target" => self.cups_target,
            "capacity_target_ml" => self.capacity_target_ml,
            "estimated_capacity_ml" => self.estimated_capacity_ml,
            "wall_thickness_mm" => self.wall_thickness_mm,
            "manufacturing_tolerance_mm" => self.manufacturing_tolerance_mm,
            "body_height_mm" => self.body_height_mm,
            "body_max_diameter_mm" => self.body_max_diameter_mm,
            "body_bottom_diameter_mm" => self.body_bottom_diameter_mm,
            "neck_diameter_mm" => self.neck_diameter_mm,
            "head_height_mm" => self.head_height_mm,
            "head_top_diameter_mm" => self.head_top_diameter_mm,
            "head_neck_overlap_mm" => self.head_neck_overlap_mm,
            "handle_length_mm" => self.handle_length_mm,
            "handle_drop_mm" => self.handle_drop_mm,
            "handle_offset_mm" => self.handle_offset_mm,
            "handle_thickness_mm" => self.handle_thickness_mm,
            "insert_outer_diameter_mm" => self.insert_outer_diameter_mm,
            "insert_inner_diameter_mm" => self.insert_inner_diameter_mm,
            "insert_height_mm" => self.insert_height_mm,
            "gasket_cross_section_mm" => self.gasket_cross_section_mm,
            "base_cap_height_mm" => self.base_cap_height_mm,
            "base_cap_diameter_mm" => self.base_cap_diameter_mm,
            "overall_height_mm" => self.overall_height_mm,
            _ => return None,
        };
        Some(value)
    }

    /// Write a field by its wire key. Returns false for unknown keys.
    pub fn set(&mut self, key: &str, value: f64) -> bool {
        let slot = match key {
            "cups_target" => &mut self.cups_target,
            "capacity_target_ml" => &mut self.capacity_target_ml,
            "estimated_capacity_ml" => &mut self.estimated_capacity_ml,
            "wall_thickness_mm" => &mut self.wall_thickness_mm,
            "manufacturing_tolerance_mm" => &mut self.manufacturing_tolerance_mm,
            "body_height_mm" => &mut self.body_height_mm,
            "body_max_diameter_mm" => &mut self.body_max_diameter_mm,
            "body_bottom_diameter_mm" => &mut self.body_bottom_diameter_mm,
            "neck_diameter_mm" => &mut self.neck_diameter_mm,
            "head_height_mm" => &mut self.head_height_mm,
            "head_top_diameter_mm" => &mut self.head_top_diameter_mm,
            "head_neck_overlap_mm" => &mut self.head_neck_overlap_mm,
            "handle_length_mm" => &mut self.handle_length_mm,
            "handle_drop_mm" => &mut self.handle_drop_mm,
            "handle_offset_mm" => &mut self.handle_offset_mm,
            "handle_thickness_mm" => &mut self.handle_thickness_mm,
            "insert_outer_diameter_mm" => &mut self.insert_outer_diameter_mm,
            "insert_inner_diameter_mm" => &mut self.insert_inner_diameter_mm,
            "insert_height_mm" => &mut self.insert_height_mm,
            "gasket_cross_section_mm" => &mut self.gasket_cross_section_mm,
            "base_cap_height_mm" => &mut self.base_cap_height_mm,
            "base_cap_diameter_mm" => &mut self.base_cap_diameter_mm,
            "overall_height_mm" => &mut self.overall_height_mm,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// The height identity the rest of the model assumes.
    pub fn computed_overall_height(&self) -> f64 {
        self.body_height_mm + self.head_height_mm - self.head_neck_overlap_mm
    }
}

/// UI-facing metadata for one dimension field.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DimensionField {
    /// Wire key, identical to the struct field name.
    pub key: &'static str,
    /// Human-readable label for control panels.
    pub label: &'static str,
    /// Suggested edit increment.
    pub step: f64,
    /// Soft lower bound applied to direct edits.
    pub min: f64,
    /// Derived fields are displayed but never directly editable.
    pub read_only: bool,
}

const fn editable(key: &'static str, label: &'static str, step: f64, min: f64) -> DimensionField {
    DimensionField {
        key,
        label,
        step,
        min,
        read_only: false,
    }
}

const fn computed(key: &'static str, label: &'static str) -> DimensionField {
    DimensionField {
        key,
        label,
        step: 0.1,
        min: 0.0,
        read_only: true,
    }
}

/// Every field surfaced in the dimension editor, in display order.
/// `cups_target` is absent: it is set through the default generator only.
pub const DIMENSION_FIELDS: [DimensionField; 22] = [
    editable("body_height_mm", "Body Height", 0.1, 20.0),
    editable("body_max_diameter_mm", "Body Max Diameter", 0.1, 20.0),
    editable("body_bottom_diameter_mm", "Body Bottom Diameter", 0.1, 20.0),
    editable("neck_diameter_mm", "Neck Diameter", 0.1, 20.0),
    editable("head_height_mm", "Curved Head Height", 0.1, 10.0),
    editable("head_top_diameter_mm", "Head Top Diameter", 0.1, 20.0),
    editable("head_neck_overlap_mm", "Head/Body Overlap", 0.1, 0.0),
    editable("handle_length_mm", "Handle Length", 0.1, 20.0),
    editable("handle_drop_mm", "Handle Drop", 0.1, 10.0),
    editable("handle_offset_mm", "Handle Offset", 0.1, 1.0),
    editable("handle_thickness_mm", "Handle Thickness", 0.1, 2.0),
    editable("insert_outer_diameter_mm", "Insert Outer Diameter", 0.1, 10.0),
    editable("insert_inner_diameter_mm", "Insert Inner Diameter", 0.1, 8.0),
    editable("insert_height_mm", "Insert Height", 0.1, 5.0),
    editable("gasket_cross_section_mm", "Gasket Cross Section", 0.1, 1.0),
    editable("wall_thickness_mm", "Wall Thickness", 0.05, 0.2),
    editable("manufacturing_tolerance_mm", "Tolerance", 0.01, 0.01),
    editable("base_cap_height_mm", "Base Cap Height", 0.1, 1.0),
    editable("base_cap_diameter_mm", "Base Cap Diameter", 0.1, 10.0),
    computed("overall_height_mm", "Overall Height (Computed)"),
    computed("estimated_capacity_ml", "Estimated Capacity (Computed)"),
    computed("capacity_target_ml", "Target Capacity (Computed)"),
];

/// All length-valued keys, scaled together by the default generator.
pub const LINEAR_KEYS: [&str; 19] = [
    "wall_thickness_mm",
    "body_height_mm",
    "body_max_diameter_mm",
    "body_bottom_diameter_mm",
    "neck_diameter_mm",
    "head_height_mm",
    "head_top_diameter_mm",
    "head_neck_overlap_mm",
    "handle_length_mm",
    "handle_drop_mm",
    "handle_offset_mm",
    "handle_thickness_mm",
    "insert_outer_diameter_mm",
    "insert_inner_diameter_mm",
    "insert_height_mm",
    "gasket_cross_section_mm",
    "base_cap_height_mm",
    "base_cap_diameter_mm",
    "manufacturing_tolerance_mm",
];

/// Keys rescaled by the capacity lock. Tolerance stays put: it tracks
/// the process, not the part.
pub const CAPACITY_SCALE_KEYS: [&str; 18] = [
    "wall_thickness_mm",
    "body_height_mm",
    "body_max_diameter_mm",
    "body_bottom_diameter_mm",
    "neck_diameter_mm",
    "head_height_mm",
    "head_top_diameter_mm",
    "head_neck_overlap_mm",
    "handle_length_mm",
    "handle_drop_mm",
    "handle_offset_mm",
    "handle_thickness_mm",
    "insert_outer_diameter_mm",
    "insert_inner_diameter_mm",
    "insert_height_mm",
    "gasket_cross_section_mm",
    "base_cap_height_mm",
    "base_cap_diameter_mm",
];

/// Look up editor metadata for a key.
pub fn field_meta(key: &str) -> Option<&'static DimensionField> {
    DIMENSION_FIELDS.iter().find(|f| f.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_cover_every_field() {
        let mut dim = DimensionSet::default();
        for field in DIMENSION_FIELDS.iter() {
            assert!(dim.get(field.key).is_some(), "missing get for {}", field.key);
            assert!(dim.set(field.key, 1.0), "missing set for {}", field.key);
        }
        assert!(dim.get("cups_target").is_some());
        assert!(dim.get("spout_angle_deg").is_none());
        assert!(!dim.set("spout_angle_deg", 1.0));
    }

    #[test]
    fn linear_keys_are_known_and_unique() {
        let dim = DimensionSet::default();
        for key in LINEAR_KEYS.iter() {
            assert!(dim.get(key).is_some(), "unknown linear key {}", key);
        }
        let mut seen: Vec<&str> = Vec::new();
        for key in LINEAR_KEYS.iter() {
            assert!(!seen.contains(key), "duplicate linear key {}", key);
            seen.push(key);
        }
    }

    #[test]
    fn capacity_scale_keys_exclude_tolerance() {
        assert_eq!(CAPACITY_SCALE_KEYS.len(), LINEAR_KEYS.len() - 1);
        assert!(!CAPACITY_SCALE_KEYS.contains(&"manufacturing_tolerance_mm"));
        for key in CAPACITY_SCALE_KEYS.iter() {
            assert!(LINEAR_KEYS.contains(key));
        }
    }

    #[test]
    fn default_satisfies_height_identity() {
        let dim = DimensionSet::default();
        assert!((dim.overall_height_mm - dim.computed_overall_height()).abs() < 1e-9);
    }

    #[test]
    fn serde_round_trip_keeps_wire_keys() {
        let dim = DimensionSet::default();
        let json = serde_json::to_value(&dim).unwrap();
        assert_eq!(json["body_max_diameter_mm"], 116.0);
        assert_eq!(json["cups_target"], 4.0);
        let back: DimensionSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, dim);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let partial: DimensionSet =
            serde_json::from_str(r#"{"body_height_mm": 140.0}"#).unwrap();
        assert_eq!(partial.body_height_mm, 140.0);
        assert_eq!(partial.neck_diameter_mm, 84.0);
    }
}
