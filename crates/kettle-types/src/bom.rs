use serde::{Deserialize, Serialize};

use crate::materials::PartKey;

/// One derived manufacturing line item. Rebuilt from the dimensions and
/// material assignments on every recompute, never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    pub part_key: PartKey,
    pub part_name: String,
    pub material: String,
    /// Fabrication route label, e.g. "Spin forming + lip trim".
    pub process: String,
    pub thickness_mm: f64,
    pub quantity: u32,
    pub mass_estimate_g: f64,
    pub notes: String,
}
