//! Closed-form outline generators shared by the part builders.
//!
//! Every function here is a pure map from numbers to a point list in the XY plane.
//! Point lists are open: the closing edge back to the first point is implicit.
//! Angles are radians unless the name says degrees.

use crate::float_types::{PI, Real, TAU};

/// Point at `r` along the ray `angle_deg` degrees counter-clockwise from +X.
pub fn polar_point(r: Real, angle_deg: Real) -> [Real; 2] {
    let a = angle_deg.to_radians();
    [r * a.cos(), r * a.sin()]
}

fn polar(r: Real, angle: Real) -> [Real; 2] {
    [r * angle.cos(), r * angle.sin()]
}

/// Sampled cycloidal disc outline.
///
/// ```text
/// θᵢ = 2π·i / steps,  i ∈ 0..steps
/// r(θ) = base_radius + eccentricity · cos(lobes·θ + phase)
/// ```
pub fn cycloid_disc_profile(
    lobes: usize,
    base_radius: Real,
    eccentricity: Real,
    phase: Real,
    steps: usize,
) -> Vec<[Real; 2]> {
    let n = lobes as Real;
    (0..steps)
        .map(|i| {
            let theta = TAU * i as Real / steps as Real;
            polar(base_radius + eccentricity * (n * theta + phase).cos(), theta)
        })
        .collect()
}

/// Derived dimensions of a cycloid disc running inside a pin circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycloidDiscGeometry {
    pub lobes: usize,
    pub pin_circle_dia: Real,
    /// 3 mm radial clearance to the pin circle on each side.
    pub disc_od: Real,
    pub eccentricity: Real,
    pub base_radius: Real,
}

impl CycloidDiscGeometry {
    /// Angular resolution of the disc outline (0.5°).
    pub const STEPS: usize = 720;

    /// `eccentricity = None` selects `(pin_circle_dia − disc_od) / (2·lobes)`.
    pub fn new(lobes: usize, pin_circle_dia: Real, eccentricity: Option<Real>) -> Self {
        let disc_od = pin_circle_dia - 6.0;
        let eccentricity =
            eccentricity.unwrap_or((pin_circle_dia - disc_od) / (2.0 * lobes.max(1) as Real));
        CycloidDiscGeometry {
            lobes,
            pin_circle_dia,
            disc_od,
            eccentricity,
            base_radius: disc_od / 2.0,
        }
    }

    pub fn profile(&self, phase: Real, steps: usize) -> Vec<[Real; 2]> {
        cycloid_disc_profile(
            self.lobes,
            self.base_radius,
            self.eccentricity,
            phase,
            steps,
        )
    }
}

/// `segments + 1` points on the arc of `radius` from angle `start` to `end`, both included.
pub fn tooth_shoe_arc(radius: Real, start: Real, end: Real, segments: usize) -> Vec<[Real; 2]> {
    let segments = segments.max(1);
    let step = (end - start) / segments as Real;
    (0..=segments)
        .map(|i| polar(radius, start + step * i as Real))
        .collect()
}

/// Angular layout of the pole shoes around a stator bore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatorToothSpan {
    pub teeth: usize,
    /// Angle between neighbouring tooth centres.
    pub pitch: Real,
    /// Half the angle subtended at the bore by one slot opening.
    pub half_opening: Real,
    /// Half the angle covered by one shoe.
    pub half_span: Real,
}

impl StatorToothSpan {
    /// Tooth `i` is centred on `i·pitch` and its shoe spans `centre ± (pitch/2 − half_opening)`.
    ///
    /// An opening wider than the bore diameter saturates at a half-turn instead of failing.
    pub fn from_slot_opening(teeth: usize, bore_radius: Real, slot_opening: Real) -> Self {
        let pitch = TAU / teeth.max(1) as Real;
        let ratio = (slot_opening / (2.0 * bore_radius)).clamp(0.0, 1.0);
        let half_opening = ratio.asin();
        StatorToothSpan {
            teeth,
            pitch,
            half_opening,
            half_span: (pitch / 2.0 - half_opening).max(0.0),
        }
    }

    pub fn centre(&self, i: usize) -> Real {
        self.pitch * i as Real
    }

    /// `(start, end)` tangent angles of shoe `i`.
    pub fn shoe_angles(&self, i: usize) -> (Real, Real) {
        let c = self.centre(i);
        (c - self.half_span, c + self.half_span)
    }
}

/// 4-point trapezoid tooth outline centred on +X, in the order
/// root-left, root-right, tip-right, tip-left.
///
/// The widths are total angular widths at the root and tip radii. For an internal
/// tooth pass the larger radius as `root_r`.
pub fn trapezoid_tooth(
    root_r: Real,
    tip_r: Real,
    base_ang_width: Real,
    tip_ang_width: Real,
) -> [[Real; 2]; 4] {
    let root_half = base_ang_width / 2.0;
    let tip_half = tip_ang_width / 2.0;
    [
        polar(root_r, -root_half),
        polar(root_r, root_half),
        polar(tip_r, tip_half),
        polar(tip_r, -tip_half),
    ]
}

fn rotate_point([x, y]: [Real; 2], angle: Real) -> [Real; 2] {
    let (s, c) = angle.sin_cos();
    [x * c - y * s, x * s + y * c]
}

/// Angle subtended by a chord of `width` on a circle of `radius`.
fn chord_angle(width: Real, radius: Real) -> Real {
    2.0 * (width / (2.0 * radius)).clamp(-1.0, 1.0).asin()
}

/// Dimensions of an inward-toothed radial stator lamination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatorLamination {
    pub teeth: usize,
    pub bore_radius: Real,
    /// Radial distance from the bore to the back iron.
    pub tooth_length: Real,
    /// Radial thickness of each pole shoe.
    pub shoe_depth: Real,
    /// Tangential tooth width where the tooth meets the back iron.
    pub tooth_width: Real,
    /// Tangential tooth width just behind the shoe.
    pub tooth_tip_width: Real,
    pub slot_opening: Real,
}

impl StatorLamination {
    pub fn span(&self) -> StatorToothSpan {
        StatorToothSpan::from_slot_opening(self.teeth, self.bore_radius, self.slot_opening)
    }

    pub fn yoke_radius(&self) -> Real {
        self.bore_radius + self.tooth_length
    }

    pub fn shoe_back_radius(&self) -> Real {
        self.bore_radius + self.shoe_depth
    }
}

/// Closed inner outline of a stator lamination, counter-clockwise.
///
/// Walking around the bore each tooth contributes its shoe arc, the shoe flank,
/// the tapered tooth body up to the back iron, and the yoke arc across the slot
/// to the next tooth. The stator is the outer disc minus this outline.
pub fn stator_bore_outline(lamination: &StatorLamination, arc_segments: usize) -> Vec<[Real; 2]> {
    let span = lamination.span();
    let r_bore = lamination.bore_radius;
    let r_shoe = lamination.shoe_back_radius();
    let r_yoke = lamination.yoke_radius();
    let tip_half = chord_angle(lamination.tooth_tip_width, r_shoe) / 2.0;
    let root_half = chord_angle(lamination.tooth_width, r_yoke) / 2.0;
    let body = trapezoid_tooth(r_yoke, r_shoe, 2.0 * root_half, 2.0 * tip_half);

    let mut outline = Vec::new();
    for i in 0..span.teeth {
        let c = span.centre(i);
        let (start, end) = span.shoe_angles(i);

        outline.extend(tooth_shoe_arc(r_bore, start, end, arc_segments));
        outline.push(polar(r_shoe, end));
        outline.push(rotate_point(body[2], c));
        outline.push(rotate_point(body[1], c));

        let next = c + span.pitch;
        let slot = tooth_shoe_arc(
            r_yoke,
            c + root_half,
            next - root_half,
            arc_segments,
        );
        outline.extend(slot.into_iter().skip(1).take(arc_segments.saturating_sub(1)));

        outline.push(rotate_point(body[0], next));
        outline.push(rotate_point(body[3], next));
        let (next_start, _) = span.shoe_angles(i + 1);
        outline.push(polar(r_shoe, next_start));
    }
    outline
}

/// Full outline of a spur gear with straight (trapezoidal) flanks.
///
/// Addendum `m`, dedendum `1.25·m`, 20° flanks. An internal gear keeps its roots
/// outside the pitch circle and its tips inside, and the outline is then the hole
/// of the ring.
pub fn gear_outline(teeth: usize, pitch_radius: Real, module: Real, internal: bool) -> Vec<[Real; 2]> {
    let pressure_angle: Real = 20.0_f64.to_radians();
    let (addendum, dedendum) = (module, 1.25 * module);
    let (root_r, tip_r) = if internal {
        (pitch_radius + dedendum, pitch_radius - addendum)
    } else {
        (pitch_radius - dedendum, pitch_radius + addendum)
    };

    let thickness = PI * module / 2.0;
    let tip_w = (thickness - 2.0 * addendum * pressure_angle.tan()).max(0.0);
    let root_w = thickness + 2.0 * dedendum * pressure_angle.tan();
    let pitch = TAU / teeth.max(1) as Real;
    let tooth = trapezoid_tooth(
        root_r,
        tip_r,
        chord_angle(root_w, root_r).min(pitch * 0.95),
        chord_angle(tip_w, tip_r),
    );

    (0..teeth)
        .flat_map(|k| {
            let a = pitch * k as Real;
            [tooth[0], tooth[3], tooth[2], tooth[1]].map(|p| rotate_point(p, a))
        })
        .collect()
}

/// Regular hexagon with flats `across_flats` apart; vertices at 30° + k·60°.
pub fn hexagon_points(across_flats: Real) -> Vec<[Real; 2]> {
    let out_radius = (across_flats / 2.0) / (PI / 6.0).cos();
    (0..6)
        .map(|k| polar_point(out_radius, 60.0 * k as Real + 30.0))
        .collect()
}

/// Ellipse of full width `major` along X and `minor` along Y.
pub fn ellipse_points(major: Real, minor: Real, segments: usize) -> Vec<[Real; 2]> {
    let (a, b) = (major / 2.0, minor / 2.0);
    (0..segments)
        .map(|i| {
            let t = TAU * i as Real / segments as Real;
            [a * t.cos(), b * t.sin()]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radius([x, y]: [Real; 2]) -> Real {
        x.hypot(y)
    }

    fn signed_area(points: &[[Real; 2]]) -> Real {
        let n = points.len();
        (0..n)
            .map(|i| {
                let [x0, y0] = points[i];
                let [x1, y1] = points[(i + 1) % n];
                x0 * y1 - x1 * y0
            })
            .sum::<Real>()
            / 2.0
    }

    #[test]
    fn polar_point_quadrants() {
        let [x, y] = polar_point(2.0, 90.0);
        assert!(x.abs() < 1e-12 && (y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn cycloid_profile_radius_oscillates_around_base() {
        let pts = cycloid_disc_profile(27, 33.0, 0.111, 0.0, 720);
        assert_eq!(pts.len(), 720);
        assert!((radius(pts[0]) - 33.111).abs() < 1e-9);
        let (min, max) = pts
            .iter()
            .map(|&p| radius(p))
            .fold((Real::MAX, Real::MIN), |(lo, hi), r| (lo.min(r), hi.max(r)));
        assert!(min >= 33.0 - 0.111 - 1e-9 && max <= 33.0 + 0.111 + 1e-9);
    }

    #[test]
    fn cycloid_phase_shifts_the_lobes() {
        let geom = CycloidDiscGeometry::new(27, 72.0, None);
        let a = geom.profile(0.0, 720);
        let b = geom.profile(PI, 720);
        // half a lobe turns a crest into a trough
        assert!((radius(a[0]) - (geom.base_radius + geom.eccentricity)).abs() < 1e-9);
        assert!((radius(b[0]) - (geom.base_radius - geom.eccentricity)).abs() < 1e-9);
    }

    #[test]
    fn default_cycloid_geometry() {
        let geom = CycloidDiscGeometry::new(27, 72.0, None);
        assert!((geom.disc_od - 66.0).abs() < 1e-12);
        assert!((geom.base_radius - 33.0).abs() < 1e-12);
        assert!((geom.eccentricity - 6.0 / 54.0).abs() < 1e-12);

        let fixed = CycloidDiscGeometry::new(27, 72.0, Some(2.7));
        assert!((fixed.eccentricity - 2.7).abs() < 1e-12);
        assert!((fixed.disc_od - 66.0).abs() < 1e-12);
    }

    #[test]
    fn shoe_arc_includes_both_ends() {
        let arc = tooth_shoe_arc(10.0, 0.0, PI / 2.0, 8);
        assert_eq!(arc.len(), 9);
        assert!((arc[0][0] - 10.0).abs() < 1e-12);
        assert!((arc[8][1] - 10.0).abs() < 1e-12);
        assert!(arc.iter().all(|&p| (radius(p) - 10.0).abs() < 1e-9));
    }

    #[test]
    fn tooth_span_leaves_the_slot_opening() {
        let span = StatorToothSpan::from_slot_opening(12, 20.0, 2.0);
        assert!((span.pitch - TAU / 12.0).abs() < 1e-12);
        assert!((span.half_opening - (0.05 as Real).asin()).abs() < 1e-12);
        let (_, end) = span.shoe_angles(0);
        let (next_start, _) = span.shoe_angles(1);
        let gap = 2.0 * 20.0 * ((next_start - end) / 2.0).sin();
        assert!((gap - 2.0).abs() < 1e-9);
    }

    #[test]
    fn oversize_slot_opening_saturates() {
        let span = StatorToothSpan::from_slot_opening(6, 1.0, 10.0);
        assert!((span.half_opening - PI / 2.0).abs() < 1e-12);
        assert_eq!(span.half_span, 0.0);
    }

    #[test]
    fn trapezoid_tooth_order() {
        let t = trapezoid_tooth(10.0, 12.0, 0.2, 0.1);
        assert!(t[0][1] < 0.0 && t[1][1] > 0.0);
        assert!(t[2][1] > 0.0 && t[3][1] < 0.0);
        assert!((radius(t[2]) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn stator_outline_is_ccw_between_bore_and_yoke() {
        let lam = StatorLamination {
            teeth: 12,
            bore_radius: 20.0,
            tooth_length: 10.0,
            shoe_depth: 1.5,
            tooth_width: 5.0,
            tooth_tip_width: 4.0,
            slot_opening: 2.0,
        };
        let outline = stator_bore_outline(&lam, 4);
        assert!(signed_area(&outline) > 0.0);
        assert!(outline.iter().all(|&p| {
            let r = radius(p);
            r > 20.0 - 1e-9 && r < 30.0 + 1e-9
        }));
        // the first point is the start of shoe 0, on the bore
        let (start, _) = lam.span().shoe_angles(0);
        let first = outline[0];
        assert!((radius(first) - 20.0).abs() < 1e-9);
        assert!((first[1].atan2(first[0]) - start).abs() < 1e-9);
    }

    #[test]
    fn gear_outline_radii() {
        let ext = gear_outline(100, 20.0, 0.4, false);
        assert_eq!(ext.len(), 400);
        let max = ext.iter().map(|&p| radius(p)).fold(0.0, Real::max);
        let min = ext.iter().map(|&p| radius(p)).fold(Real::MAX, Real::min);
        assert!((max - 20.4).abs() < 1e-9 && (min - 19.5).abs() < 1e-9);

        let int = gear_outline(102, 20.4, 0.4, true);
        let max = int.iter().map(|&p| radius(p)).fold(0.0, Real::max);
        assert!((max - 20.9).abs() < 1e-9);
        assert!(signed_area(&int) > 0.0);
    }

    #[test]
    fn hexagon_across_flats() {
        let hex = hexagon_points(6.35);
        assert_eq!(hex.len(), 6);
        assert!((hex[0][0] - 6.35 / 2.0).abs() < 1e-12);
    }
}
