//! 2D Shapes as `Sketch`s

use crate::float_types::{EPSILON, FRAC_PI_2, PI, Real};
use crate::profiles;
use crate::sketch::Sketch;
use geo::{LineString, Polygon as GeoPolygon};

fn ring_of(points: &[[Real; 2]]) -> LineString<Real> {
    LineString::from(points.iter().map(|&[x, y]| (x, y)).collect::<Vec<_>>())
}

impl Sketch {
    /// Creates a 2D rectangle centred on the origin.
    ///
    /// # Example
    /// ```
    /// use frog_cad::sketch::Sketch;
    /// let slot = Sketch::rectangle(6.5, 8.0);
    /// assert!((slot.area() - 52.0).abs() < 1e-9);
    /// ```
    pub fn rectangle(width: Real, length: Real) -> Self {
        let (hx, hy) = (width * 0.5, length * 0.5);
        Sketch::polygon(&[[-hx, -hy], [hx, -hy], [hx, hy], [-hx, hy]])
    }

    /// Circle centred on the origin, sampled at `segments` points starting on +X.
    pub fn circle(radius: Real, segments: usize) -> Self {
        if segments < 3 || radius <= 0.0 {
            return Sketch::new();
        }
        Sketch::polygon(&profiles::ellipse_points(2.0 * radius, 2.0 * radius, segments))
    }

    /// Annulus between `inner_radius` and `outer_radius`.
    pub fn ring(outer_radius: Real, inner_radius: Real, segments: usize) -> Self {
        if inner_radius <= EPSILON {
            return Sketch::circle(outer_radius, segments);
        }
        if inner_radius >= outer_radius || segments < 3 {
            return Sketch::new();
        }
        Sketch::with_holes(
            &profiles::ellipse_points(2.0 * outer_radius, 2.0 * outer_radius, segments),
            &[profiles::ellipse_points(
                2.0 * inner_radius,
                2.0 * inner_radius,
                segments,
            )],
        )
    }

    /// Closed polygon through `points`; the closing edge is implicit.
    pub fn polygon(points: &[[Real; 2]]) -> Self {
        if points.len() < 3 {
            return Sketch::new();
        }
        Sketch::from_polygon(GeoPolygon::new(ring_of(points), vec![]))
    }

    /// Outline with interior holes. Holes must lie inside `outer` and not touch each other.
    pub fn with_holes(outer: &[[Real; 2]], holes: &[Vec<[Real; 2]>]) -> Self {
        if outer.len() < 3 {
            return Sketch::new();
        }
        let interiors = holes
            .iter()
            .filter(|h| h.len() >= 3)
            .map(|h| ring_of(h))
            .collect();
        Sketch::from_polygon(GeoPolygon::new(ring_of(outer), interiors))
    }

    /// Rounded rectangle centred on the origin. `corner_segments` controls the smoothness of each corner.
    pub fn rounded_rectangle(
        width: Real,
        height: Real,
        corner_radius: Real,
        corner_segments: usize,
    ) -> Self {
        let r = corner_radius.min(width * 0.5).min(height * 0.5);
        if r <= EPSILON {
            return Sketch::rectangle(width, height);
        }
        let corner_segments = corner_segments.max(1);
        let step = FRAC_PI_2 / corner_segments as Real;
        let (hx, hy) = (width * 0.5 - r, height * 0.5 - r);

        let corner = |cx: Real, cy: Real, start_angle: Real| {
            (0..=corner_segments).map(move |i| {
                let angle = start_angle + i as Real * step;
                [cx + r * angle.cos(), cy + r * angle.sin()]
            })
        };

        let points: Vec<[Real; 2]> = corner(-hx, -hy, PI)
            .chain(corner(hx, -hy, 1.5 * PI))
            .chain(corner(hx, hy, 0.0))
            .chain(corner(-hx, hy, 0.5 * PI))
            .collect();
        Sketch::polygon(&points)
    }

    /// Regular hexagon with flats `across_flats` apart, facing ±X.
    pub fn regular_hexagon(across_flats: Real) -> Self {
        Sketch::polygon(&profiles::hexagon_points(across_flats))
    }

    /// Ellipse centred on the origin with the given full width (X) and height (Y).
    pub fn ellipse(width: Real, height: Real, segments: usize) -> Self {
        if segments < 3 {
            return Sketch::new();
        }
        Sketch::polygon(&profiles::ellipse_points(width, height, segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Orient;
    use geo::orient::Direction;

    #[test]
    fn ring_area_is_annulus() {
        let ring = Sketch::ring(10.0, 5.0, 720);
        assert!((ring.area() - PI * 75.0).abs() < 0.1);
    }

    #[test]
    fn hexagon_spans_across_flats() {
        let hex = Sketch::regular_hexagon(6.35);
        let rect = hex.bounding_rect().expect("hexagon is not empty");
        // vertices on 30° + k·60° put the flats on ±X
        assert!((rect.width() - 6.35).abs() < 1e-9);
        assert!(rect.height() > rect.width());
    }

    #[test]
    fn rounded_rectangle_is_smaller_than_sharp_one() {
        let sharp = Sketch::rectangle(20.0, 10.0).area();
        let rounded = Sketch::rounded_rectangle(20.0, 10.0, 2.0, 32).area();
        let corner_loss = (4.0 - PI) * 4.0;
        assert!((sharp - rounded - corner_loss).abs() < 0.05);
    }

    #[test]
    fn with_holes_keeps_interiors() {
        let outer = [[-5.0, -5.0], [5.0, -5.0], [5.0, 5.0], [-5.0, 5.0]];
        let hole = vec![[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];
        let s = Sketch::with_holes(&outer, &[hole]);
        let oriented = s.geometry.orient(Direction::Default);
        assert_eq!(oriented.0[0].interiors().len(), 1);
        assert!((s.area() - 96.0).abs() < 1e-9);
    }
}
