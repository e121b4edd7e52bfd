//! `Sketch`: planar regions in the XY plane, built with `geo` and turned into solids by extrusion.

use crate::float_types::Real;
use geo::{
    AffineOps, AffineTransform, Area, BooleanOps, BoundingRect, MultiPolygon, Polygon as GeoPolygon,
    Rect,
};

pub mod extrude;
pub mod layers;
pub mod shapes;

/// A set of (possibly holed) polygons in the XY plane.
#[derive(Clone, Debug)]
pub struct Sketch {
    pub geometry: MultiPolygon<Real>,
}

impl Default for Sketch {
    fn default() -> Self {
        Sketch {
            geometry: MultiPolygon(Vec::new()),
        }
    }
}

impl Sketch {
    pub fn new() -> Self {
        Sketch::default()
    }

    pub fn from_polygon(polygon: GeoPolygon<Real>) -> Self {
        Sketch {
            geometry: MultiPolygon(vec![polygon]),
        }
    }

    pub const fn from_multipolygon(geometry: MultiPolygon<Real>) -> Self {
        Sketch { geometry }
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.0.is_empty()
    }

    pub fn union(&self, other: &Sketch) -> Sketch {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        Sketch::from_multipolygon(BooleanOps::union(&self.geometry, &other.geometry))
    }

    pub fn difference(&self, other: &Sketch) -> Sketch {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        Sketch::from_multipolygon(BooleanOps::difference(&self.geometry, &other.geometry))
    }

    pub fn intersection(&self, other: &Sketch) -> Sketch {
        if self.is_empty() || other.is_empty() {
            return Sketch::new();
        }
        Sketch::from_multipolygon(BooleanOps::intersection(&self.geometry, &other.geometry))
    }

    /// Union of every sketch in `parts`.
    pub fn union_all<'a>(parts: impl IntoIterator<Item = &'a Sketch>) -> Sketch {
        parts
            .into_iter()
            .fold(Sketch::new(), |acc, part| acc.union(part))
    }

    pub fn translate(&self, dx: Real, dy: Real) -> Sketch {
        Sketch::from_multipolygon(
            self.geometry
                .affine_transform(&AffineTransform::translate(dx, dy)),
        )
    }

    /// Rotate counter-clockwise about the origin.
    pub fn rotate(&self, degrees: Real) -> Sketch {
        Sketch::from_multipolygon(
            self.geometry
                .affine_transform(&AffineTransform::rotate(degrees, (0.0, 0.0))),
        )
    }

    /// `count` copies of this sketch moved out to `radius` along +X, then spread evenly
    /// about the origin starting at `start_angle_deg`.
    pub fn polar_pattern(&self, count: usize, radius: Real, start_angle_deg: Real) -> Sketch {
        if count == 0 {
            return Sketch::new();
        }
        let step = 360.0 / count as Real;
        let placed = self.translate(radius, 0.0);
        let copies: Vec<Sketch> = (0..count)
            .map(|i| placed.rotate(start_angle_deg + step * i as Real))
            .collect();
        Sketch::union_all(&copies)
    }

    pub fn area(&self) -> Real {
        self.geometry.unsigned_area()
    }

    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.geometry.bounding_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::PI;

    #[test]
    fn difference_cuts_area() {
        let plate = Sketch::rectangle(10.0, 10.0);
        let hole = Sketch::rectangle(2.0, 2.0);
        assert!((plate.difference(&hole).area() - 96.0).abs() < 1e-4);
    }

    #[test]
    fn polar_pattern_places_copies_on_circle() {
        let pins = Sketch::circle(1.0, 64).polar_pattern(4, 10.0, 0.0);
        assert_eq!(pins.geometry.0.len(), 4);
        let rect = pins.bounding_rect().expect("pattern is not empty");
        assert!((rect.max().x - 11.0).abs() < 1e-4);
        assert!((rect.min().y + 11.0).abs() < 1e-4);
        assert!((pins.area() - 4.0 * PI).abs() < 0.1);
    }

    #[test]
    fn rotate_is_about_origin() {
        let r = Sketch::rectangle(2.0, 2.0).translate(5.0, 0.0).rotate(90.0);
        let rect = r.bounding_rect().expect("not empty");
        assert!((rect.center().x).abs() < 1e-9);
        assert!((rect.center().y - 5.0).abs() < 1e-9);
    }
}
