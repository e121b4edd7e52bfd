//! Strain-wave (harmonic drive) reduction: flexspline cup, circular spline ring
//! and elliptical wave generator.
//!
//! The flexspline prints in a flexible material (`flexspline_material`) and
//! meshes with the circular spline over its toothed rim. Teeth use straight
//! flanks from [`profiles::gear_outline`].

use crate::actuator::params::ActuatorParams;
use crate::config::Resolution;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::profiles;
use crate::sketch::Sketch;
use crate::sketch::layers::Layered;

/// Radial wall outside the circular spline tooth roots.
const CIRCULAR_SPLINE_WALL: Real = 6.0;
const CIRCULAR_SPLINE_HOLES: usize = 6;
const M3_CLEARANCE_DIA: Real = 3.4;

fn dedendum(p: &ActuatorParams) -> Real {
    1.25 * p.gear_module
}

/// Root radius of the flexspline teeth, which is also the outside of the cup wall.
pub fn flexspline_root_radius(p: &ActuatorParams) -> Real {
    p.flexspline_pitch_diameter() / 2.0 - dedendum(p)
}

/// Outer radius of the circular spline ring.
pub fn circular_spline_outer_radius(p: &ActuatorParams) -> Real {
    p.circular_spline_pitch_diameter() / 2.0 + dedendum(p) + CIRCULAR_SPLINE_WALL
}

/// Thin-walled cup: closed diaphragm at z = 0 with an output bore, plain wall, and
/// the external teeth over the top `flexspline_rim_width`.
pub fn build_flexspline(p: &ActuatorParams, res: &Resolution) -> Mesh {
    let pitch_r = p.flexspline_pitch_diameter() / 2.0;
    let root_r = flexspline_root_radius(p);
    let inner_r = root_r - p.flexspline_thickness;
    let rim_start = (p.flexspline_length - p.flexspline_rim_width).max(p.flexspline_thickness);

    let teeth = Sketch::polygon(&profiles::gear_outline(
        p.flexspline_teeth,
        pitch_r,
        p.gear_module,
        false,
    ));

    Layered::new()
        .add(Sketch::circle(root_r, res.segments), 0.0, p.flexspline_thickness)
        .cut(
            Sketch::circle(pitch_r / 2.0, res.segments),
            0.0,
            p.flexspline_thickness,
        )
        .add(
            Sketch::ring(root_r, inner_r, res.segments),
            p.flexspline_thickness,
            rim_start,
        )
        .add(teeth, rim_start, p.flexspline_length)
        .cut(
            Sketch::circle(inner_r, res.segments),
            rim_start,
            p.flexspline_length,
        )
        .build()
}

/// Rigid ring with internal teeth, `flexspline_rim_width` tall, bolted down through six M3 holes.
pub fn build_circular_spline(p: &ActuatorParams, res: &Resolution) -> Mesh {
    let pitch_r = p.circular_spline_pitch_diameter() / 2.0;
    let outer_r = circular_spline_outer_radius(p);
    let bore = profiles::gear_outline(p.circular_spline_teeth, pitch_r, p.gear_module, true);
    let ring = Sketch::with_holes(
        &profiles::ellipse_points(2.0 * outer_r, 2.0 * outer_r, res.segments),
        &[bore],
    );
    let holes = Sketch::circle(M3_CLEARANCE_DIA / 2.0, res.hole_segments).polar_pattern(
        CIRCULAR_SPLINE_HOLES,
        outer_r - CIRCULAR_SPLINE_WALL / 2.0,
        0.0,
    );
    ring.difference(&holes).extrude(p.flexspline_rim_width)
}

/// Elliptical cam, major axis along X, with a central bore half the minor diameter.
pub fn build_wave_generator(p: &ActuatorParams, res: &Resolution) -> Mesh {
    let major = p.wave_generator_major_diameter();
    let minor = p.wave_generator_minor_diameter();
    Sketch::with_holes(
        &profiles::ellipse_points(major, minor, res.segments),
        &[profiles::ellipse_points(minor / 2.0, minor / 2.0, res.segments)],
    )
    .extrude(p.flexspline_rim_width)
}
