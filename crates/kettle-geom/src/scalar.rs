//! Small numeric helpers shared across the workspace.

/// Clamp `value` into `[min, max]`. The upper bound is applied first,
/// so an inverted range resolves to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cubic ease `3t² - 2t³` on the unit interval; input is clamped.
pub fn smoothstep01(t: f64) -> f64 {
    let x = clamp01(t);
    x * x * (3.0 - 2.0 * x)
}

pub fn mm_to_in(mm: f64) -> f64 {
    mm / 25.4
}

/// Round to `places` decimal digits, half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
