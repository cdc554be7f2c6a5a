//! Closed-form volume and area formulas for the revolution primitives
//! the model is decomposed into. Radii and heights in mm, results in
//! mm³ / mm².

use std::f64::consts::PI;

/// Volume of a conical frustum with end radii `r1`, `r2` and height `h`:
/// `π·h·(r1² + r1·r2 + r2²)/3`.
pub fn frustum_volume(r1: f64, r2: f64, h: f64) -> f64 {
    PI * h * (r1 * r1 + r1 * r2 + r2 * r2) / 3.0
}

/// Lateral (slant) surface of a conical frustum: `π·(r1+r2)·slant`.
pub fn frustum_lateral_area(r1: f64, r2: f64, h: f64) -> f64 {
    let slant = ((r1 - r2) * (r1 - r2) + h * h).sqrt();
    PI * (r1 + r2) * slant
}

pub fn cylinder_volume(radius: f64, h: f64) -> f64 {
    PI * radius * radius * h
}

/// Lateral surface of a cylinder given its diameter.
pub fn cylinder_lateral_area(diameter: f64, h: f64) -> f64 {
    PI * diameter * h
}

/// Volume of a torus with center-circle radius `major` and cross-section
/// radius `minor`: `2π²·R·r²`.
pub fn torus_volume(major: f64, minor: f64) -> f64 {
    2.0 * PI * PI * major * minor * minor
}

/// Area of a flat ring between two diameters.
pub fn annulus_area(outer_diameter: f64, inner_diameter: f64) -> f64 {
    PI * (outer_diameter * outer_diameter - inner_diameter * inner_diameter) / 4.0
}

/// Area of a full disc given its diameter.
pub fn disc_area(diameter: f64) -> f64 {
    PI * diameter * diameter / 4.0
}
