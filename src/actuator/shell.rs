//! Printable outer housing.

use crate::actuator::params::ActuatorParams;
use crate::config::Resolution;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::sketch::Sketch;
use crate::sketch::layers::Layered;
use crate::traits::CSGOps;

/// Cycloidal pins cast into the housing ceiling.
pub const PIN_COUNT: usize = 29;
pub const PIN_DIAMETER: Real = 6.1;
pub const PIN_CIRCLE_DIA: Real = 72.0;
/// Reaches down far enough to engage both discs.
pub const PIN_LENGTH: Real = 15.0;

pub const TAB_COUNT: usize = 8;
const TAB_THICKNESS: Real = 5.0;
pub const BOSS_HEIGHT: Real = 5.0;
const BEARING_CLEARANCE: Real = 0.3;
const WIRE_HOLE_RADIUS: Real = 4.0;

/// Radius of the bolt circle shared by the shell tabs and the back plate.
pub fn tab_circle_radius(p: &ActuatorParams) -> Real {
    p.outer_diameter / 2.0 + p.flange_offset
}

/// The eight flange tab discs.
pub(crate) fn flange_tabs(p: &ActuatorParams, res: &Resolution) -> Sketch {
    Sketch::circle(p.flange_radius, res.hole_segments).polar_pattern(
        TAB_COUNT,
        tab_circle_radius(p),
        0.0,
    )
}

/// Mount holes through the tabs, opened up by `clearance` on the radius.
pub(crate) fn tab_holes(p: &ActuatorParams, res: &Resolution, clearance: Real) -> Sketch {
    Sketch::circle(p.mount_hole_radius + clearance, res.hole_segments).polar_pattern(
        TAB_COUNT,
        tab_circle_radius(p),
        0.0,
    )
}

/// Return the printable outer housing (shell).
///
/// Open at the bottom (closed by the back plate), bearing pocket and a
/// full-width boss on top, flange tabs around the base, a radial wire exit
/// and the cycloid pin ring hanging from the ceiling.
pub fn build_shell(p: &ActuatorParams, res: &Resolution) -> Mesh {
    let outer_r = p.outer_diameter / 2.0;
    let h = p.housing_height;
    let ceiling = h - p.wall_thickness;
    let pocket_depth = p.bearing_thickness + 2.0;

    let body = Layered::new()
        .add(Sketch::circle(outer_r, res.segments), 0.0, h)
        .cut(Sketch::circle(p.inner_radius(), res.segments), 0.0, ceiling)
        .cut(
            Sketch::circle(p.bearing_od / 2.0 + BEARING_CLEARANCE / 2.0, res.segments),
            h - pocket_depth,
            h,
        )
        .cut(
            Sketch::circle(p.bearing_id / 2.0, res.segments),
            0.0,
            h + p.shaft_housing_height,
        )
        .add(
            Sketch::ring(outer_r, p.bearing_id / 2.0, res.segments),
            h,
            h + BOSS_HEIGHT,
        )
        .add(flange_tabs(p, res), 0.0, TAB_THICKNESS)
        .cut(tab_holes(p, res, 0.0), 0.0, TAB_THICKNESS)
        .add(
            Sketch::circle((PIN_DIAMETER - 0.1) / 2.0, res.hole_segments).polar_pattern(
                PIN_COUNT,
                PIN_CIRCLE_DIA / 2.0,
                0.0,
            ),
            ceiling - PIN_LENGTH,
            ceiling,
        )
        .build();

    // radial wire exit, Ø8 through the wall at mid-height
    let hole_len = p.wall_thickness + 4.0;
    let wire = Mesh::cylinder(WIRE_HOLE_RADIUS, 2.0 * hole_len, res.hole_segments)
        .rotate(0.0, 90.0, 0.0)
        .translate(outer_r - WIRE_HOLE_RADIUS - hole_len, 0.0, h / 2.0);
    body.difference(&wire)
}
