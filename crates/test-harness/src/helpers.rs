//! Helper functions: error type, scenario constructors, profile and
//! mesh math shared by the oracles and the integration suites.

use kettle_engine::{build_default_blueprint, Session};
use kettle_geom::{outer_profile, ProfilePoint, ProfileOptions, SurfaceMesh, BODY_SAMPLES, HEAD_SAMPLES};
use kettle_types::{Blueprint, DimensionSet, ShapeSliders};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("dispatch error: {message}")]
    DispatchError { message: String },

    #[error("unexpected response to {action}: {response}")]
    UnexpectedResponse { action: String, response: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("payload error: {reason}")]
    Payload { reason: String },
}

// ── Scenario Constructors ───────────────────────────────────────────────────

/// A fully recomputed default blueprint for a cup count.
pub fn default_blueprint(cups: f64) -> Blueprint {
    build_default_blueprint(cups)
}

/// A session morphed once from its default baseline with the lock off,
/// so the slider effect is visible unrescaled.
pub fn morphed_session(cups: f64, sliders: ShapeSliders) -> Session {
    let mut session = Session::for_cups(cups);
    session.set_capacity_lock(false);
    session.apply_morph(sliders, true);
    session
}

/// The default-resolution outer silhouette for a dimension set.
pub fn silhouette(dim: &DimensionSet) -> Vec<ProfilePoint> {
    outer_profile(dim, BODY_SAMPLES, HEAD_SAMPLES, &ProfileOptions::default())
}

// ── Profile Math ────────────────────────────────────────────────────────────

/// Whether heights never decrease along a profile.
pub fn profile_height_monotonic(profile: &[ProfilePoint]) -> bool {
    profile
        .windows(2)
        .all(|pair| pair[1].height_mm >= pair[0].height_mm)
}

/// Largest radius in a profile, 0 for an empty one.
pub fn profile_max_radius(profile: &[ProfilePoint]) -> f64 {
    profile
        .iter()
        .map(|p| p.radius_mm)
        .fold(0.0, f64::max)
}

// ── Mesh Math ───────────────────────────────────────────────────────────────

/// Axis-aligned bounding box of a mesh: (min, max).
pub fn mesh_bounding_box(mesh: &SurfaceMesh) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for v in mesh.vertices.chunks_exact(3) {
        for i in 0..3 {
            min[i] = min[i].min(v[i]);
            max[i] = max[i].max(v[i]);
        }
    }
    if mesh.vertices.is_empty() {
        return ([0.0; 3], [0.0; 3]);
    }
    (min, max)
}
