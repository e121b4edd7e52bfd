//! Linear extrusion of sketches into closed meshes.

use crate::float_types::{EPSILON, Real};
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::shapes::flat_polygon;
use crate::sketch::Sketch;
use geo::orient::Direction;
use geo::{Coord, LineString, Orient, TriangulateEarcut};
use nalgebra::Point3;

impl Sketch {
    /// Extrude along +Z by `height`; a negative height extrudes downward from z = 0.
    pub fn extrude(&self, height: Real) -> Mesh {
        if height < 0.0 {
            self.extrude_between(height, 0.0)
        } else {
            self.extrude_between(0.0, height)
        }
    }

    /// Prism spanning `z0..z1` (the two values may be given in either order).
    ///
    /// Caps are earcut-triangulated so holes need no boolean; each ring contributes
    /// one wall quad per edge.
    pub fn extrude_between(&self, z0: Real, z1: Real) -> Mesh {
        let (lo, hi) = if z0 <= z1 { (z0, z1) } else { (z1, z0) };
        if hi - lo < EPSILON || self.is_empty() {
            return Mesh::from_polygons(Vec::new());
        }

        let oriented = self.geometry.orient(Direction::Default);
        let mut polygons = Vec::new();

        for poly in &oriented {
            let tris = poly.earcut_triangles_raw();
            let at = |i: usize| (tris.vertices[2 * i], tris.vertices[2 * i + 1]);
            for t in tris.triangle_indices.chunks_exact(3) {
                let (mut a, b, mut c) = (at(t[0]), at(t[1]), at(t[2]));
                let cross = (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0);
                if cross.abs() < EPSILON * EPSILON {
                    continue;
                }
                if cross < 0.0 {
                    std::mem::swap(&mut a, &mut c);
                }
                polygons.push(flat_polygon(vec![
                    Point3::new(a.0, a.1, hi),
                    Point3::new(b.0, b.1, hi),
                    Point3::new(c.0, c.1, hi),
                ]));
                polygons.push(flat_polygon(vec![
                    Point3::new(c.0, c.1, lo),
                    Point3::new(b.0, b.1, lo),
                    Point3::new(a.0, a.1, lo),
                ]));
            }

            walls(poly.exterior(), lo, hi, &mut polygons);
            for hole in poly.interiors() {
                walls(hole, lo, hi, &mut polygons);
            }
        }

        Mesh::from_polygons(polygons)
    }
}

/// One outward quad per ring edge. Exterior rings run CCW and holes CW, so the
/// same winding faces away from the material in both cases.
fn walls(ring: &LineString<Real>, lo: Real, hi: Real, out: &mut Vec<Polygon>) {
    for edge in ring.0.windows(2) {
        let (p, q): (Coord<Real>, Coord<Real>) = (edge[0], edge[1]);
        if (q.x - p.x).hypot(q.y - p.y) < EPSILON {
            continue;
        }
        out.push(flat_polygon(vec![
            Point3::new(p.x, p.y, lo),
            Point3::new(q.x, q.y, lo),
            Point3::new(q.x, q.y, hi),
            Point3::new(p.x, p.y, hi),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use crate::float_types::PI;
    use crate::sketch::Sketch;
    use crate::traits::CSGOps;

    #[test]
    fn extruded_square_is_a_closed_box() {
        let block = Sketch::rectangle(2.0, 4.0).extrude(3.0);
        assert!((block.volume() - 24.0).abs() < 1e-9);
        assert!(block.is_manifold());
        let bb = block.bounding_box();
        assert!((bb.mins.z).abs() < 1e-12 && (bb.maxs.z - 3.0).abs() < 1e-12);
    }

    #[test]
    fn negative_height_extrudes_downward() {
        let plate = Sketch::circle(5.0, 64).extrude(-3.0);
        let bb = plate.bounding_box();
        assert!((bb.mins.z + 3.0).abs() < 1e-12);
        assert!(bb.maxs.z.abs() < 1e-12);
        assert!(plate.volume() > 0.0);
    }

    #[test]
    fn holes_are_carried_into_the_solid() {
        let washer = Sketch::ring(10.0, 4.0, 256).extrude(2.0);
        let exact = PI * (100.0 - 16.0) * 2.0;
        assert!((washer.volume() - exact).abs() / exact < 1e-3);
        assert!(washer.is_manifold());
    }

    #[test]
    fn extrude_between_accepts_any_order() {
        let a = Sketch::rectangle(1.0, 1.0).extrude_between(5.0, 2.0);
        assert!((a.volume() - 3.0).abs() < 1e-9);
        assert!((a.bounding_box().mins.z - 2.0).abs() < 1e-12);
    }
}
