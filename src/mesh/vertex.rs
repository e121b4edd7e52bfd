//! Polygon corner: position plus shading normal.

use crate::float_types::Real;
use nalgebra::{Matrix4, Point3, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Point on the segment `self → other` at parameter `t`; the normal is blended linearly.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        Vertex::new(
            self.pos + (other.pos - self.pos) * t,
            self.normal + (other.normal - self.normal) * t,
        )
    }

    /// Apply `mat` to the position and `normal_mat` (the inverse transpose) to the normal.
    pub fn transformed(&self, mat: &Matrix4<Real>, normal_mat: &Matrix4<Real>) -> Vertex {
        let normal = normal_mat.transform_vector(&self.normal);
        let norm = normal.norm();
        Vertex::new(
            mat.transform_point(&self.pos),
            if norm > 0.0 { normal / norm } else { normal },
        )
    }
}
