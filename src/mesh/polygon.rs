//! Convex planar polygons, the unit the BSP tree works on.

use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::mesh::plane::Plane;
use crate::mesh::vertex::Vertex;
use nalgebra::Matrix4;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub plane: Plane,
    bounding_box: OnceLock<Aabb>,
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.plane == other.plane
    }
}

impl Polygon {
    /// Create a polygon, deriving its plane from the vertex winding.
    ///
    /// Vertices must be coplanar and form a convex loop; every constructor in this crate
    /// feeds either triangles, quads from extrusion walls, or BSP split fragments of those.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        let plane = Plane::from_vertices(&vertices);
        Self::with_plane(vertices, plane)
    }

    pub fn with_plane(vertices: Vec<Vertex>, plane: Plane) -> Self {
        Polygon {
            vertices,
            plane,
            bounding_box: OnceLock::new(),
        }
    }

    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.vertices.iter_mut().for_each(Vertex::flip);
        self.plane.flip();
        // reversing keeps the same point set, so the cached box stays valid
    }

    pub fn bounding_box(&self) -> Aabb {
        *self
            .bounding_box
            .get_or_init(|| Aabb::from_points(self.vertices.iter().map(|v| &v.pos)))
    }

    /// Fan triangulation from the first vertex.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        if self.vertices.len() < 3 {
            return Vec::new();
        }
        let anchor = self.vertices[0];
        self.vertices
            .windows(2)
            .skip(1)
            .map(|pair| [anchor, pair[0], pair[1]])
            .collect()
    }

    pub fn transformed(&self, mat: &Matrix4<Real>, normal_mat: &Matrix4<Real>) -> Polygon {
        let mut vertices: Vec<Vertex> = self
            .vertices
            .iter()
            .map(|v| v.transformed(mat, normal_mat))
            .collect();
        let mut plane = Plane::from_vertices(&vertices);
        // mirror transforms reverse the winding; keep the face pointing outward
        let mapped = normal_mat.transform_vector(&self.plane.normal);
        if plane.normal.dot(&mapped) < 0.0 {
            vertices.reverse();
            plane.flip();
        }
        Polygon::with_plane(vertices, plane)
    }

    /// Signed volume contribution of this face (divergence theorem, origin apex).
    pub fn signed_volume(&self) -> Real {
        self.triangulate()
            .iter()
            .map(|[a, b, c]| a.pos.coords.dot(&b.pos.coords.cross(&c.pos.coords)) / 6.0)
            .sum()
    }

    /// Area of the polygon.
    pub fn area(&self) -> Real {
        self.triangulate()
            .iter()
            .map(|[a, b, c]| (b.pos - a.pos).cross(&(c.pos - a.pos)).norm() * 0.5)
            .sum()
    }
}
