//! 3D Shapes as `Mesh`s

use crate::float_types::{EPSILON, Real, TAU};
use crate::mesh::Mesh;
use crate::mesh::plane::Plane;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

impl Mesh {
    /// Create a right prism (a box) that spans from (0, 0, 0)
    /// to (width, length, height). All dimensions must be >= 0.
    ///
    /// ```text
    ///     4-------5
    ///    /|      /|
    ///   0-------1 |
    ///   | |     | |
    ///   | 7-----|-6
    ///   |/      |/
    ///   3-------2
    /// ```
    pub fn cuboid(width: Real, length: Real, height: Real) -> Mesh {
        let p = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(width, 0.0, 0.0),
            Point3::new(width, length, 0.0),
            Point3::new(0.0, length, 0.0),
            Point3::new(0.0, 0.0, height),
            Point3::new(width, 0.0, height),
            Point3::new(width, length, height),
            Point3::new(0.0, length, height),
        ];

        // (indices, outward normal), counter-clockwise seen from outside
        let faces = [
            ([0, 3, 2, 1], -Vector3::z()),
            ([4, 5, 6, 7], Vector3::z()),
            ([0, 1, 5, 4], -Vector3::y()),
            ([3, 7, 6, 2], Vector3::y()),
            ([0, 4, 7, 3], -Vector3::x()),
            ([1, 2, 6, 5], Vector3::x()),
        ];

        let polygons = faces
            .iter()
            .map(|(indices, normal)| {
                let plane = Plane::from_normal(*normal, normal.dot(&p[indices[0]].coords));
                let vertices = indices.iter().map(|&i| Vertex::new(p[i], *normal)).collect();
                Polygon::with_plane(vertices, plane)
            })
            .collect();

        Mesh::from_polygons(polygons)
    }

    pub fn cube(width: Real) -> Mesh {
        Self::cuboid(width, width, width)
    }

    /// Cylinder along +Z, base centred on the origin.
    pub fn cylinder(radius: Real, height: Real, segments: usize) -> Mesh {
        Self::frustum(radius, radius, height, segments)
    }

    /// Truncated cone along +Z with `radius1` at z = 0 and `radius2` at z = `height`.
    /// A zero `radius2` gives a cone.
    pub fn frustum(radius1: Real, radius2: Real, height: Real, segments: usize) -> Mesh {
        let segments = segments.max(3);
        let bottom = ring_points(radius1, 0.0, segments);
        let top = ring_points(radius2, height, segments);
        let apex = radius2 < EPSILON;

        let mut polygons = Vec::with_capacity(segments + 2);
        for i in 0..segments {
            let j = (i + 1) % segments;
            let side = if apex {
                vec![bottom[i], bottom[j], Point3::new(0.0, 0.0, height)]
            } else {
                vec![bottom[i], bottom[j], top[j], top[i]]
            };
            polygons.push(flat_polygon(side));
        }

        polygons.push(flat_polygon(bottom.iter().rev().copied().collect()));
        if !apex {
            polygons.push(flat_polygon(top));
        }
        Mesh::from_polygons(polygons)
    }

    /// Hollow cylinder along +Z between `inner_radius` and `outer_radius`, base on z = 0.
    pub fn tube(outer_radius: Real, inner_radius: Real, height: Real, segments: usize) -> Mesh {
        if inner_radius <= EPSILON {
            return Self::cylinder(outer_radius, height, segments);
        }
        let segments = segments.max(3);
        let ob = ring_points(outer_radius, 0.0, segments);
        let ot = ring_points(outer_radius, height, segments);
        let ib = ring_points(inner_radius, 0.0, segments);
        let it = ring_points(inner_radius, height, segments);

        let mut polygons = Vec::with_capacity(segments * 4);
        for i in 0..segments {
            let j = (i + 1) % segments;
            polygons.push(flat_polygon(vec![ob[i], ob[j], ot[j], ot[i]]));
            polygons.push(flat_polygon(vec![ib[j], ib[i], it[i], it[j]]));
            polygons.push(flat_polygon(vec![ot[i], ot[j], it[j], it[i]]));
            polygons.push(flat_polygon(vec![ob[j], ob[i], ib[i], ib[j]]));
        }
        Mesh::from_polygons(polygons)
    }
}

fn ring_points(radius: Real, z: Real, segments: usize) -> Vec<Point3<Real>> {
    (0..segments)
        .map(|i| {
            let theta = TAU * i as Real / segments as Real;
            Point3::new(radius * theta.cos(), radius * theta.sin(), z)
        })
        .collect()
}

/// Polygon with every vertex carrying the face normal.
pub(crate) fn flat_polygon(points: Vec<Point3<Real>>) -> Polygon {
    let plane = Plane::from_vertices(
        &points
            .iter()
            .map(|p| Vertex::new(*p, Vector3::zeros()))
            .collect::<Vec<_>>(),
    );
    let vertices = points
        .into_iter()
        .map(|p| Vertex::new(p, plane.normal))
        .collect();
    Polygon::with_plane(vertices, plane)
}
