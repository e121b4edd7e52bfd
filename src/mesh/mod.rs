//! `Mesh` struct and implementations of the `CSGOps` trait for `Mesh`

use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::mesh::{bsp::Node, polygon::Polygon, vertex::Vertex};
use crate::traits::CSGOps;
use nalgebra::{Matrix4, Point3};
use std::sync::OnceLock;

pub mod bsp;
pub mod manifold;
pub mod plane;
pub mod polygon;
pub mod shapes;
pub mod vertex;

/// A closed polygonal solid (or a compound of several closed solids).
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub polygons: Vec<Polygon>,

    /// Lazily calculated AABB that spans `polygons`.
    bounding_box: OnceLock<Aabb>,
}

impl Mesh {
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Mesh {
            polygons,
            bounding_box: OnceLock::new(),
        }
    }

    /// Concatenate solids without a boolean, the way an assembly compound is built.
    pub fn merge<'a>(meshes: impl IntoIterator<Item = &'a Mesh>) -> Mesh {
        Mesh::from_polygons(
            meshes
                .into_iter()
                .flat_map(|m| m.polygons.iter().cloned())
                .collect(),
        )
    }

    /// Split polygons into (may_touch, cannot_touch) using bounding‑box tests
    fn partition_polys(polys: &[Polygon], other_bb: &Aabb) -> (Vec<Polygon>, Vec<Polygon>) {
        polys
            .iter()
            .cloned()
            .partition(|p| p.bounding_box().intersects(other_bb))
    }

    /// Bounding-box partition of both operands: `(a_clip, a_passthru, b_clip, b_passthru)`.
    ///
    /// When only one side has candidates, one solid may sit wholly inside the other
    /// without touching a face; an empty BSP tree cannot express that, so both sides
    /// fall back to their full polygon sets.
    fn partition_pair(
        &self,
        other: &Mesh,
    ) -> (Vec<Polygon>, Vec<Polygon>, Vec<Polygon>, Vec<Polygon>) {
        let (a_clip, a_passthru) = Self::partition_polys(&self.polygons, &other.bounding_box());
        let (b_clip, b_passthru) = Self::partition_polys(&other.polygons, &self.bounding_box());
        if a_clip.is_empty() != b_clip.is_empty() {
            return (self.polygons.clone(), Vec::new(), other.polygons.clone(), Vec::new());
        }
        (a_clip, a_passthru, b_clip, b_passthru)
    }

    pub fn vertices(&self) -> Vec<Vertex> {
        self.polygons
            .iter()
            .flat_map(|p| p.vertices.iter().copied())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.polygons
            .iter()
            .map(|p| p.vertices.len().saturating_sub(2))
            .sum()
    }

    /// Enclosed volume by the divergence theorem. Only meaningful for closed, outward-facing shells.
    pub fn volume(&self) -> Real {
        self.polygons.iter().map(Polygon::signed_volume).sum()
    }

    /// Total surface area.
    pub fn surface_area(&self) -> Real {
        self.polygons.iter().map(Polygon::area).sum()
    }

    /// Cut at the plane `z = z` and return `(below, above)`, each closed.
    pub fn split_at_z(&self, z: Real) -> (Mesh, Mesh) {
        let bb = self.bounding_box();
        if bb.is_empty() {
            return (Mesh::new(), Mesh::new());
        }
        let margin = 1.0;
        let ext = bb.extents();
        let (sx, sy) = (ext.x + 2.0 * margin, ext.y + 2.0 * margin);
        let (x0, y0) = (bb.mins.x - margin, bb.mins.y - margin);

        let below_h = (z - bb.mins.z).max(0.0) + margin;
        let above_h = (bb.maxs.z - z).max(0.0) + margin;
        let below = Mesh::cuboid(sx, sy, below_h).translate(x0, y0, z - below_h);
        let above = Mesh::cuboid(sx, sy, above_h).translate(x0, y0, z);

        (self.intersection(&below), self.intersection(&above))
    }

    /// Iterate over the triangles of every polygon, with the face normal on each corner.
    pub fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for poly in &self.polygons {
            let normal = poly.plane.normal;
            for tri in poly.triangulate() {
                f(tri.map(|v| Vertex::new(v.pos, normal)));
            }
        }
    }
}

impl CSGOps for Mesh {
    fn new() -> Self {
        Mesh::default()
    }

    /// Return a new Mesh representing union of the two Meshes.
    ///
    /// ```text
    /// let c = a.union(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |       +----+
    ///     +----+--+    |       +----+       |
    ///          |   b   |            |   c   |
    ///          |       |            |       |
    ///          +-------+            +-------+
    /// ```
    fn union(&self, other: &Mesh) -> Mesh {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        // avoid splitting obvious non‑intersecting faces
        let (a_clip, a_passthru, b_clip, b_passthru) = self.partition_pair(other);
        if a_clip.is_empty() {
            return Mesh::merge([self, other]);
        }

        let mut a = Node::from_polygons(&a_clip);
        let mut b = Node::from_polygons(&b_clip);

        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());

        let mut final_polys = a.all_polygons();
        final_polys.extend(a_passthru);
        final_polys.extend(b_passthru);
        Mesh::from_polygons(final_polys)
    }

    /// Return a new Mesh representing difference of the two Meshes.
    ///
    /// ```text
    /// let c = a.difference(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |    +--+
    ///     +----+--+    |       +----+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    fn difference(&self, other: &Mesh) -> Mesh {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        let (a_clip, a_passthru, b_clip, _b_passthru) = self.partition_pair(other);
        if b_clip.is_empty() {
            return self.clone();
        }

        let mut a = Node::from_polygons(&a_clip);
        let mut b = Node::from_polygons(&b_clip);

        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());
        a.invert();

        let mut final_polys = a.all_polygons();
        final_polys.extend(a_passthru);
        Mesh::from_polygons(final_polys)
    }

    /// Return a new Mesh representing the intersection of the two Meshes.
    fn intersection(&self, other: &Mesh) -> Mesh {
        if self.is_empty() || other.is_empty() {
            return Mesh::new();
        }
        let mut a = Node::from_polygons(&self.polygons);
        let mut b = Node::from_polygons(&other.polygons);

        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(&b.all_polygons());
        a.invert();

        Mesh::from_polygons(a.all_polygons())
    }

    /// Apply an arbitrary invertible 3D transform (as a 4x4 matrix) to the mesh.
    ///
    /// A singular matrix collapses the solid, so the mesh is returned empty.
    fn transform(&self, mat: &Matrix4<Real>) -> Mesh {
        let Some(inverse) = mat.try_inverse() else {
            tracing::warn!("ignoring singular transform, result is empty");
            return Mesh::new();
        };
        let normal_mat = inverse.transpose();
        Mesh::from_polygons(
            self.polygons
                .iter()
                .map(|p| p.transformed(mat, &normal_mat))
                .collect(),
        )
    }

    fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let bb = self
                .polygons
                .iter()
                .fold(Aabb::empty(), |acc, p| acc.merged(&p.bounding_box()));
            if bb.is_empty() {
                Aabb::new(Point3::origin(), Point3::origin())
            } else {
                bb
            }
        })
    }

    /// Invert this Mesh (flip inside vs. outside)
    fn inverse(&self) -> Mesh {
        let mut mesh = self.clone();
        mesh.polygons.iter_mut().for_each(Polygon::flip);
        mesh
    }
}
