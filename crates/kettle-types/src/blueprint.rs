use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bom::BomLine;
use crate::dimensions::DimensionSet;
use crate::materials::MaterialAssignment;

/// The aggregate design document: one dimension set, the material
/// choices, and everything derived from them.
///
/// A session owns exactly one live Blueprint. Mutating operations
/// replace it wholesale (with a fresh `revision`) rather than editing
/// fields in place, so readers never observe a half-recomputed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Identity of this particular recompute result.
    #[serde(default = "Uuid::new_v4")]
    pub revision: Uuid,
    pub title: String,
    pub design_version: String,
    pub units: String,
    pub dimensions: DimensionSet,
    pub materials: Vec<MaterialAssignment>,
    #[serde(default)]
    pub bom: Vec<BomLine>,
    #[serde(default)]
    pub analysis_notes: Vec<String>,
}

impl Blueprint {
    pub const TITLE: &'static str = "Curved-Head Teapot Blueprint";
    pub const DESIGN_VERSION: &'static str = "v1";
    pub const UNITS: &'static str = "mm";
}
