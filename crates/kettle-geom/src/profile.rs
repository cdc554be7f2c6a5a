//! Silhouette profile builders.
//!
//! A profile is an ordered sequence of (radius, height) samples from the
//! vessel base upward, suitable for revolution into a solid or for 2D
//! projection. These functions are pure and deterministic; radii never
//! drop below [`MIN_PROFILE_RADIUS_MM`] so downstream revolution and
//! drafting never see degenerate geometry.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use kettle_types::DimensionSet;

use crate::scalar::{clamp, lerp, smoothstep01};

/// Radius floor for every profile sample.
pub const MIN_PROFILE_RADIUS_MM: f64 = 4.0;

/// Default sample counts for interactive rendering.
pub const BODY_SAMPLES: usize = 34;
pub const HEAD_SAMPLES: usize = 24;

/// Fraction of body height where the belly bulge peaks.
const BULGE_FRACTION: f64 = 0.42;

/// One silhouette sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub radius_mm: f64,
    pub height_mm: f64,
}

/// Shaping knobs for the head profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOptions {
    /// Warp exponent control for the head flare, held to [0.4, 1.7].
    /// Low values straighten the flare, high values bulge the rim.
    pub curvature_scale: f64,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        ProfileOptions {
            curvature_scale: 1.0,
        }
    }
}

/// Body silhouette from the base plane (height 0) to the neck.
///
/// Below the bulge point the radius eases bottom→max with a soft
/// sinusoidal belly; above it, max→neck with a fading shoulder bump.
pub fn body_profile(dim: &DimensionSet, samples: usize) -> Vec<ProfilePoint> {
    let samples = samples.max(1);
    let body_h = dim.body_height_mm;
    let r_bottom = dim.body_bottom_diameter_mm * 0.5;
    let r_max = dim.body_max_diameter_mm * 0.5;
    let r_neck = dim.neck_diameter_mm * 0.5;
    let bulge_y = body_h * BULGE_FRACTION;

    let mut points = Vec::with_capacity(samples + 1);
    for i in 0..=samples {
        let y = body_h * i as f64 / samples as f64;
        let r = if y <= bulge_y {
            let t = smoothstep01(y / bulge_y.max(1.0));
            let soft_bulge = (PI * t).sin() * (r_max - r_bottom) * 0.06;
            lerp(r_bottom, r_max, t) + soft_bulge
        } else {
            let t = smoothstep01((y - bulge_y) / (body_h - bulge_y).max(1.0));
            let shoulder = (PI * t).sin() * (r_max - r_neck) * 0.05;
            lerp(r_max, r_neck, t) + shoulder * (1.0 - t * 0.5)
        };
        points.push(ProfilePoint {
            radius_mm: r.max(MIN_PROFILE_RADIUS_MM),
            height_mm: y,
        });
    }
    points
}

/// Head silhouette from `start_height` (default: where the head seats
/// over the neck) up to the rim at `overall_height_mm`.
///
/// The ease parameter is warped by `t^(1/curvature)` before driving both
/// the radius blend and the flare bump, so one knob moves the whole
/// character of the flare.
pub fn head_profile(
    dim: &DimensionSet,
    samples: usize,
    start_height: Option<f64>,
    options: &ProfileOptions,
) -> Vec<ProfilePoint> {
    let samples = samples.max(1);
    let body_h = dim.body_height_mm;
    let overall_h = dim.overall_height_mm;
    let r_neck = dim.neck_diameter_mm * 0.5;
    let r_head = dim.head_top_diameter_mm * 0.5;
    let curvature = clamp(options.curvature_scale, 0.4, 1.7);

    let default_start = body_h - dim.head_neck_overlap_mm;
    let start = clamp(start_height.unwrap_or(default_start), 0.0, overall_h - 1.0);
    let span = (overall_h - start).max(1.0);

    let mut points = Vec::with_capacity(samples + 1);
    for i in 0..=samples {
        let t = smoothstep01(i as f64 / samples as f64);
        let curved_t = clamp(t.powf(1.0 / curvature), 0.0, 1.0);
        let y = start + span * t;
        let flare = (PI * curved_t).sin() * (r_head - r_neck) * (0.1 * curvature);
        let r = lerp(r_neck, r_head, curved_t) + flare * (1.0 - curved_t * 0.35);
        points.push(ProfilePoint {
            radius_mm: r.max(MIN_PROFILE_RADIUS_MM),
            height_mm: y,
        });
    }
    points
}

/// Full outer silhouette: body then head, started at the body top so the
/// two runs share the junction sample (the head's duplicate is dropped).
pub fn outer_profile(
    dim: &DimensionSet,
    body_samples: usize,
    head_samples: usize,
    options: &ProfileOptions,
) -> Vec<ProfilePoint> {
    let mut points = body_profile(dim, body_samples);
    let head = head_profile(dim, head_samples, Some(dim.body_height_mm), options);
    points.extend(head.into_iter().skip(1));
    points
}
