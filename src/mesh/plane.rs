//! Oriented planes and the polygon split that drives the BSP booleans.

use crate::float_types::{EPSILON, Real};
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// Plane `normal · p = w`, `normal` of unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3<Real>,
    pub w: Real,
}

/// Result of [`Plane::split_polygon`]: `(coplanar_front, coplanar_back, front, back)`.
pub type Split = (Vec<Polygon>, Vec<Polygon>, Vec<Polygon>, Vec<Polygon>);

impl Plane {
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        let len = normal.norm();
        Plane {
            normal: normal / len,
            w: w / len,
        }
    }

    /// Plane through the polygon described by `vertices` (counter-clockwise seen from the front).
    ///
    /// Uses Newell's method so long, nearly collinear runs of vertices (sampled arcs)
    /// still give a stable normal. Degenerate input falls back to +Z through the first vertex.
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let mut n: Vector3<Real> = Vector3::zeros();
        let mut centroid: Vector3<Real> = Vector3::zeros();
        for (i, v) in vertices.iter().enumerate() {
            let next = &vertices[(i + 1) % vertices.len()];
            n.x += (v.pos.y - next.pos.y) * (v.pos.z + next.pos.z);
            n.y += (v.pos.z - next.pos.z) * (v.pos.x + next.pos.x);
            n.z += (v.pos.x - next.pos.x) * (v.pos.y + next.pos.y);
            centroid += v.pos.coords;
        }
        let len = n.norm();
        if vertices.is_empty() || len < EPSILON * EPSILON {
            let w = vertices.first().map_or(0.0, |v| v.pos.z);
            return Plane {
                normal: Vector3::z(),
                w,
            };
        }
        let normal = n / len;
        let centroid = centroid / vertices.len() as Real;
        Plane {
            normal,
            w: normal.dot(&centroid),
        }
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    pub const fn offset(&self) -> Real {
        self.w
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    pub fn orient_point(&self, point: &Point3<Real>) -> i8 {
        let d = self.signed_distance(point);
        if d < -EPSILON {
            BACK
        } else if d > EPSILON {
            FRONT
        } else {
            COPLANAR
        }
    }

    /// Bitwise OR of the classification of every vertex.
    pub fn classify_polygon(&self, polygon: &Polygon) -> i8 {
        polygon
            .vertices
            .iter()
            .fold(COPLANAR, |acc, v| acc | self.orient_point(&v.pos))
    }

    /// Split `polygon` by this plane into four buckets.
    ///
    /// Coplanar polygons go to the front or back bucket depending on whether their
    /// own normal agrees with this plane's normal.
    pub fn split_polygon(&self, polygon: &Polygon) -> Split {
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();

        let types: Vec<i8> = polygon
            .vertices
            .iter()
            .map(|v| self.orient_point(&v.pos))
            .collect();
        let polygon_type = types.iter().fold(COPLANAR, |acc, &t| acc | t);

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(&polygon.plane.normal) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            },
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                let count = polygon.vertices.len();
                let mut split_front = Vec::with_capacity(count + 1);
                let mut split_back = Vec::with_capacity(count + 1);

                for i in 0..count {
                    let j = (i + 1) % count;
                    let (ti, tj) = (types[i], types[j]);
                    let vi = &polygon.vertices[i];
                    let vj = &polygon.vertices[j];

                    if ti != BACK {
                        split_front.push(*vi);
                    }
                    if ti != FRONT {
                        split_back.push(*vi);
                    }
                    if (ti | tj) == SPANNING {
                        let denom = self.normal.dot(&(vj.pos - vi.pos));
                        if denom.abs() > Real::EPSILON {
                            let t = (self.w - self.normal.dot(&vi.pos.coords)) / denom;
                            let v = vi.interpolate(vj, t);
                            split_front.push(v);
                            split_back.push(v);
                        }
                    }
                }

                // Keep the parent's plane: recomputing it from split points drifts.
                if split_front.len() >= 3 {
                    front.push(Polygon::with_plane(split_front, polygon.plane));
                }
                if split_back.len() >= 3 {
                    back.push(Polygon::with_plane(split_back, polygon.plane));
                }
            },
        }

        (coplanar_front, coplanar_back, front, back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_at(z: Real) -> Polygon {
        Polygon::new(
            [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]]
                .iter()
                .map(|&[x, y]| Vertex::new(Point3::new(x, y, z), Vector3::z()))
                .collect(),
        )
    }

    #[test]
    fn newell_normal_follows_winding() {
        let plane = Plane::from_vertices(&square_at(2.0).vertices);
        assert!((plane.normal - Vector3::z()).norm() < 1e-12);
        assert!((plane.w - 2.0).abs() < 1e-12);
    }

    #[test]
    fn spanning_square_splits_in_two() {
        let cut = Plane::from_normal(Vector3::x(), 0.0);
        let square = square_at(0.0);
        let (cf, cb, front, back) = cut.split_polygon(&square);
        assert!(cf.is_empty() && cb.is_empty());
        assert_eq!(front.len(), 1);
        assert_eq!(back.len(), 1);
        assert!(front[0].vertices.iter().all(|v| v.pos.x >= -EPSILON));
        assert!(back[0].vertices.iter().all(|v| v.pos.x <= EPSILON));
    }

    #[test]
    fn coplanar_polygon_sorted_by_facing() {
        let up = Plane::from_normal(Vector3::z(), 0.0);
        let mut down = up;
        down.flip();
        let square = square_at(0.0);
        assert_eq!(up.split_polygon(&square).0.len(), 1);
        assert_eq!(down.split_polygon(&square).1.len(), 1);
    }
}
