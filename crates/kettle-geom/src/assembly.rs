//! Exploded-view offsets for the detachable parts.
//!
//! The renderer shows the assembly pulled apart along fixed directions;
//! the distances here scale with the vessel so small and large designs
//! explode proportionally.

use serde::{Deserialize, Serialize};

use kettle_types::DimensionSet;

use crate::scalar::clamp;

/// Parts that can be pulled out of the assembled view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblyPart {
    Bottom,
    Flare,
    Gasket,
    Strainer,
}

/// Which parts are detached, and how far apart the view is pulled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetachState {
    /// Explode slider position in [0, 100].
    pub distance_pct: f64,
    pub bottom: bool,
    pub flare: bool,
    pub gasket: bool,
    pub strainer: bool,
}

impl Default for DetachState {
    fn default() -> Self {
        DetachState {
            distance_pct: 38.0,
            bottom: false,
            flare: false,
            gasket: false,
            strainer: false,
        }
    }
}

impl DetachState {
    pub fn is_detached(&self, part: AssemblyPart) -> bool {
        match part {
            AssemblyPart::Bottom => self.bottom,
            AssemblyPart::Flare => self.flare,
            AssemblyPart::Gasket => self.gasket,
            AssemblyPart::Strainer => self.strainer,
        }
    }

    pub fn set_detached(&mut self, part: AssemblyPart, detached: bool) {
        match part {
            AssemblyPart::Bottom => self.bottom = detached,
            AssemblyPart::Flare => self.flare = detached,
            AssemblyPart::Gasket => self.gasket = detached,
            AssemblyPart::Strainer => self.strainer = detached,
        }
    }
}

/// Full explode distance in mm for a slider position, scaled by the
/// larger of the vessel's height and rim diameter (floored at 80 mm so
/// tiny vessels still separate visibly).
pub fn explode_distance_mm(dim: &DimensionSet, distance_pct: f64) -> f64 {
    let pct = clamp(distance_pct, 0.0, 100.0);
    let reference = dim
        .overall_height_mm
        .max(dim.head_top_diameter_mm)
        .max(80.0);
    (pct / 100.0) * reference * 0.55
}

/// Scene-space offset for one part, zero when that part is attached.
pub fn part_offset_mm(dim: &DimensionSet, detach: &DetachState, part: AssemblyPart) -> [f64; 3] {
    let distance = explode_distance_mm(dim, detach.distance_pct);
    if distance <= 0.0 || !detach.is_detached(part) {
        return [0.0, 0.0, 0.0];
    }
    match part {
        AssemblyPart::Bottom => [0.0, -distance * 0.68, 0.0],
        AssemblyPart::Flare => [0.0, distance * 0.58, 0.0],
        AssemblyPart::Gasket => [distance * 0.22, distance * 0.74, 0.0],
        AssemblyPart::Strainer => [-distance * 0.18, distance * 0.82, 0.0],
    }
}
