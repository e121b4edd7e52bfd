//! A trait for any shape which can be represented by triangles

use crate::assembly::Assembly;
use crate::mesh::Mesh;
use crate::mesh::vertex::Vertex;

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` with positions+normals.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);
}

impl Triangulated3D for Mesh {
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        Mesh::visit_triangles(self, f)
    }
}

/// Every part in order, as one triangle soup.
impl Triangulated3D for Assembly {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for part in &self.parts {
            Mesh::visit_triangles(&part.mesh, &mut f);
        }
    }
}
