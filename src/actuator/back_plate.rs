//! Removable back plate closing the open end of the shell.

use crate::actuator::params::ActuatorParams;
use crate::actuator::shell::{flange_tabs, tab_holes};
use crate::actuator::stator::HEX_ACROSS_FLATS;
use crate::config::Resolution;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::sketch::Sketch;
use crate::sketch::layers::Layered;

pub const PLATE_THICKNESS: Real = 3.0;
const LIP_HEIGHT: Real = 1.0;
const LIP_WALL: Real = 1.0;
const HEX_COUNT: usize = 6;
const SHAFT_CLEARANCE: Real = 0.3;
const HEX_CLEARANCE: Real = 0.3;
const SCREW_CLEARANCE: Real = 0.2;

/// Radius of the hex clearance holes: the coil window circle pulled in 7 mm for the driver.
pub fn hex_hole_radius(p: &ActuatorParams) -> Real {
    p.outer_diameter / 2.0 - 26.0 / 2.0 - 3.0 - 7.0
}

/// Plate below z = 0 with the mating face on the XY plane.
///
/// Shares the shell's bolt circle, clears the bearing ID and the six winding
/// stems, and carries a 1 mm lip that locates inside the shell wall.
pub fn build_back_plate(p: &ActuatorParams, res: &Resolution) -> Mesh {
    let lip_outer = p.inner_radius();
    Layered::new()
        .add(
            Sketch::circle(p.outer_diameter / 2.0, res.segments),
            -PLATE_THICKNESS,
            0.0,
        )
        .cut(
            Sketch::circle(p.bearing_id / 2.0 + SHAFT_CLEARANCE, res.segments),
            -PLATE_THICKNESS,
            0.0,
        )
        .cut(
            Sketch::regular_hexagon(HEX_ACROSS_FLATS + HEX_CLEARANCE).polar_pattern(
                HEX_COUNT,
                hex_hole_radius(p),
                0.0,
            ),
            -PLATE_THICKNESS,
            0.0,
        )
        .add(flange_tabs(p, res), -PLATE_THICKNESS, 0.0)
        .cut(tab_holes(p, res, SCREW_CLEARANCE), -PLATE_THICKNESS, 0.0)
        .add(
            Sketch::ring(lip_outer, lip_outer - LIP_WALL, res.segments),
            0.0,
            LIP_HEIGHT,
        )
        .build()
}
