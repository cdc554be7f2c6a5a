//! Closed-form geometry for the vessel model: scalar easing helpers,
//! frustum/torus formulas, silhouette profile builders, and the thin
//! mesh/drafting primitives the exporters and renderer consume.

pub mod assembly;
pub mod drafting;
pub mod frustum;
pub mod profile;
pub mod revolve;
pub mod scalar;

pub use assembly::*;
pub use drafting::*;
pub use frustum::*;
pub use profile::*;
pub use revolve::*;
pub use scalar::*;
