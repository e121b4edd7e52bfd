//! Test support library
//! Provides various helper functions & utilities for tests.

#![allow(dead_code)]

use frog_cad::config::Resolution;
use frog_cad::float_types::Real;
use frog_cad::mesh::Mesh;
use frog_cad::traits::CSGOps;

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]` of a mesh.
pub fn bounding_box(mesh: &Mesh) -> [Real; 6] {
    let bb = mesh.bounding_box();
    [
        bb.mins.x, bb.mins.y, bb.mins.z, bb.maxs.x, bb.maxs.y, bb.maxs.z,
    ]
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Largest distance of any vertex from the Z axis.
pub fn max_radius(mesh: &Mesh) -> Real {
    mesh.vertices()
        .iter()
        .map(|v| v.pos.x.hypot(v.pos.y))
        .fold(0.0, Real::max)
}

/// Volume shared by two solids; zero when a clearance cut keeps them apart.
pub fn overlap(a: &Mesh, b: &Mesh) -> Real {
    a.intersection(b).volume().abs()
}

/// Coarse tessellation so the heavier assemblies stay quick.
pub fn coarse() -> Resolution {
    Resolution::with_segments(24)
}
