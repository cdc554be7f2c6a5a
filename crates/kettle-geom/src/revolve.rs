//! Revolution of a silhouette profile into a triangle mesh.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::profile::ProfilePoint;

/// Default angular resolution for revolved surfaces.
pub const REVOLVE_SEGMENTS: usize = 56;

/// A triangle mesh in renderer-ready flat buffers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMesh {
    /// Flat array of vertex positions [x0, y0, z0, x1, y1, z1, ...].
    pub vertices: Vec<f32>,
    /// Triangle indices into the vertex array.
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Sweep a profile 360° about the vertical axis.
///
/// Each profile sample becomes a ring of `segments` vertices at
/// `(r·cosθ, y, r·sinθ)`; adjacent rings are stitched with two triangles
/// per quad, wrapping at the seam. A profile with fewer than two samples
/// yields an empty mesh.
pub fn revolve_profile(profile: &[ProfilePoint], segments: usize) -> SurfaceMesh {
    let segments = segments.max(3);
    if profile.len() < 2 {
        return SurfaceMesh::default();
    }

    let mut mesh = SurfaceMesh {
        vertices: Vec::with_capacity(profile.len() * segments * 3),
        indices: Vec::with_capacity((profile.len() - 1) * segments * 6),
    };

    for point in profile {
        for i in 0..segments {
            let theta = TAU * i as f64 / segments as f64;
            mesh.vertices.push((point.radius_mm * theta.cos()) as f32);
            mesh.vertices.push(point.height_mm as f32);
            mesh.vertices.push((point.radius_mm * theta.sin()) as f32);
        }
    }

    for ring in 0..profile.len() - 1 {
        let cur = (ring * segments) as u32;
        let next = ((ring + 1) * segments) as u32;
        for i in 0..segments as u32 {
            let i2 = (i + 1) % segments as u32;
            mesh.indices.push(cur + i);
            mesh.indices.push(next + i);
            mesh.indices.push(next + i2);
            mesh.indices.push(cur + i);
            mesh.indices.push(next + i2);
            mesh.indices.push(cur + i2);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_profile() -> Vec<ProfilePoint> {
        vec![
            ProfilePoint {
                radius_mm: 10.0,
                height_mm: 0.0,
            },
            ProfilePoint {
                radius_mm: 10.0,
                height_mm: 20.0,
            },
            ProfilePoint {
                radius_mm: 8.0,
                height_mm: 30.0,
            },
        ]
    }

    #[test]
    fn ring_and_triangle_counts_follow_profile() {
        let mesh = revolve_profile(&straight_profile(), 16);
        assert_eq!(mesh.vertex_count(), 3 * 16);
        assert_eq!(mesh.triangle_count(), 2 * 16 * 2);
    }

    #[test]
    fn indices_stay_in_bounds_and_wrap_the_seam() {
        let mesh = revolve_profile(&straight_profile(), 8);
        let max = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < max));
        // the seam quad references both column 7 and column 0
        let first_ring_last_quad = &mesh.indices[(7 * 6) as usize..(8 * 6) as usize];
        assert!(first_ring_last_quad.contains(&7));
        assert!(first_ring_last_quad.contains(&8));
        assert!(first_ring_last_quad.contains(&0));
    }

    #[test]
    fn short_profiles_yield_empty_meshes() {
        let single = vec![ProfilePoint {
            radius_mm: 5.0,
            height_mm: 0.0,
        }];
        assert!(revolve_profile(&single, 16).is_empty());
        assert!(revolve_profile(&[], 16).is_empty());
    }

    #[test]
    fn first_ring_lies_on_the_base_circle() {
        let mesh = revolve_profile(&straight_profile(), 4);
        // theta = 0 vertex
        assert!((mesh.vertices[0] - 10.0).abs() < 1e-6);
        assert_eq!(mesh.vertices[1], 0.0);
        assert!(mesh.vertices[2].abs() < 1e-6);
        // theta = 90° vertex lands on +z
        assert!(mesh.vertices[3].abs() < 1e-5);
        assert!((mesh.vertices[5] - 10.0).abs() < 1e-5);
    }
}
