use serde::{Deserialize, Serialize};

use crate::materials::MaterialAssignment;

/// Aggregate statistics over the reference image set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMetrics {
    pub image_count: u32,
    pub metallic_ratio: f64,
    pub dark_ratio: f64,
    pub green_ratio: f64,
    pub specular_ratio: f64,
}

/// A part the analysis claims to have recognized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedPart {
    pub part_key: String,
    pub part_name: String,
    pub confidence: f64,
    pub evidence: String,
}

/// The full result of an image analysis pass. The engine treats this as
/// an opaque oracle: it only ever merges `material_suggestions` into the
/// blueprint and copies `notes` through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metrics: ImageMetrics,
    pub detected_parts: Vec<DetectedPart>,
    pub material_suggestions: Vec<MaterialAssignment>,
    pub notes: Vec<String>,
}
