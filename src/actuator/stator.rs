//! Stators: a toothed radial lamination stack, or the coreless axial-flux coil former.

use crate::actuator::params::ActuatorParams;
use crate::config::Resolution;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::profiles::{self, polar_point};
use crate::sketch::Sketch;
use crate::sketch::layers::Layered;

/// Round coils, ABCABC sequence.
pub const COIL_COUNT: usize = 6;
const INSERT_COUNT: usize = 3;
/// Pilot hole radius for the M2.5 inserts holding the hall-sensor board.
const INSERT_RADIUS: Real = 2.0;

pub const FORMER_THICKNESS: Real = 8.0;
pub const FORMER_OUTER_RADIUS: Real = 45.0;
const FORMER_CLEAR_RADIUS: Real = 25.0;
const COIL_OD: Real = 26.0;
/// ¼" hex driver.
pub const HEX_ACROSS_FLATS: Real = 6.35;
const HEX_PLATE_THICKNESS: Real = 3.0;

/// Radius of the coil window centres on the former.
pub const fn coil_radius() -> Real {
    FORMER_OUTER_RADIUS - COIL_OD / 2.0 - 3.0
}

/// Stator for these parameters: the toothed core when `stator_teeth > 0`, else the coil former.
pub fn build_stator(p: &ActuatorParams, res: &Resolution) -> Mesh {
    if p.stator_teeth > 0 {
        build_stator_core(p, res)
    } else {
        build_coil_former(res)
    }
}

/// Inward-toothed radial stator filling the housing cavity, `magnet_length` tall.
///
/// Shoe arcs get `segments / stator_teeth` samples each, at least two.
pub fn build_stator_core(p: &ActuatorParams, res: &Resolution) -> Mesh {
    let lamination = p.lamination();
    let arc_segments = (res.segments / p.stator_teeth.max(1)).max(2);
    let bore = profiles::stator_bore_outline(&lamination, arc_segments);
    let outer = profiles::ellipse_points(2.0 * p.inner_radius(), 2.0 * p.inner_radius(), res.segments);
    Sketch::with_holes(&outer, &[bore]).extrude(p.magnet_length)
}

/// Printable coreless stator former with six round coil windows.
///
/// An 8 mm disc (Ø90, Ø50 clearance) with six Ø26 windows, wire notches between
/// them, three pilot holes for the sensor board inserts, and a ¼" hex stem on each
/// window axis that stands proud of both faces for winding in a drill chuck.
pub fn build_coil_former(res: &Resolution) -> Mesh {
    let window_r = coil_radius();

    let notches = Sketch::union_all(
        &(0..COIL_COUNT)
            .map(|i| {
                let ang = i as Real * 360.0 / COIL_COUNT as Real + 30.0;
                let [x, y] = polar_point(FORMER_OUTER_RADIUS - 2.0, ang);
                Sketch::rectangle(3.0, 2.0).rotate(ang).translate(x, y)
            })
            .collect::<Vec<_>>(),
    );

    let stem_reach = FORMER_THICKNESS + HEX_PLATE_THICKNESS;
    Layered::new()
        .add(
            Sketch::ring(FORMER_OUTER_RADIUS, FORMER_CLEAR_RADIUS, res.segments),
            0.0,
            FORMER_THICKNESS,
        )
        .cut(
            Sketch::circle(COIL_OD / 2.0, res.segments).polar_pattern(COIL_COUNT, window_r, 0.0),
            0.0,
            FORMER_THICKNESS,
        )
        .cut(notches, 0.0, FORMER_THICKNESS)
        .cut(
            Sketch::circle(INSERT_RADIUS, res.hole_segments).polar_pattern(
                INSERT_COUNT,
                FORMER_CLEAR_RADIUS + 4.0,
                0.0,
            ),
            0.0,
            FORMER_THICKNESS,
        )
        .add(
            Sketch::regular_hexagon(HEX_ACROSS_FLATS).polar_pattern(COIL_COUNT, window_r, 0.0),
            -stem_reach,
            stem_reach,
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CSGOps;

    #[test]
    fn former_envelope() {
        let former = build_coil_former(&Resolution::default());
        let bb = former.bounding_box();
        assert!((bb.maxs.x - FORMER_OUTER_RADIUS).abs() < 1e-3);
        assert!((bb.mins.z + 11.0).abs() < 1e-9);
        assert!((bb.maxs.z - 11.0).abs() < 1e-9);
    }

    #[test]
    fn medium_uses_the_former() {
        let p = ActuatorParams::medium();
        let stator = build_stator(&p, &Resolution::default());
        assert!((stator.bounding_box().maxs.z - 11.0).abs() < 1e-9);
    }

    #[test]
    fn radial_core_fills_the_cavity() {
        let p = ActuatorParams::strain_wave();
        let core = build_stator_core(&p, &Resolution::default());
        let bb = core.bounding_box();
        assert!((bb.maxs.x - p.inner_radius()).abs() < 1e-6);
        assert!((bb.maxs.z - p.magnet_length).abs() < 1e-9);

        // the rotor envelope (magnet faces) stays clear of the teeth
        let rotor_r = p.magnet_radius + p.magnet_thickness / 2.0;
        let rotor = Mesh::cylinder(rotor_r, p.magnet_length, 64);
        assert!(core.intersection(&rotor).volume().abs() < 1e-6);
    }
}
