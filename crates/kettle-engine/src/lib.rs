//! The modeling core: capacity estimation, uniform scaling, material and
//! BOM derivation, the shape playground, and the session object that
//! ties one live blueprint to them.
//!
//! Everything here is total: given finite inputs these functions never
//! fail, they clamp. Fallible concerns (parsing, persistence) live in
//! the boundary crates.

pub mod analysis;
pub mod bom;
pub mod capacity;
pub mod materials;
pub mod morph;
pub mod rebuild;
pub mod scale;
pub mod session;
pub mod shapes;
pub mod validate;

pub use analysis::default_analysis_report;
pub use bom::generate_bom;
pub use capacity::{capacity_breakdown, estimate_capacity_ml, CapacityBreakdown, CAPACITY_FLOOR_ML};
pub use materials::{default_materials, merge_materials, MaterialFamily};
pub use morph::morph_dimensions;
pub use rebuild::{build_default_blueprint, rebuild_blueprint};
pub use scale::{
    apply_capacity_scale, create_default_dimensions, cups_to_ml, scale_dimensions, US_CUP_TO_ML,
};
pub use session::Session;
pub use shapes::{apply_head_flare_ratio, apply_quick_shape, curvature_scale_from_pct, QuickShape};
pub use validate::{clamp_relations, clamp_to_limits};
