//! Rotor drum carrying the axial magnet rings.
//!
//! Prints as one cylinder with magnets on one or both faces and a central cavity
//! for the stator disc:
//!
//! 1. 3 mm outer shell.
//! 2. Magnet pockets plus a 1.8 mm back-iron washer recess per face.
//! 3. 1 mm air gap on each side of an 8 mm stator.
//! 4. Bearing bore with a 4 × 3 mm keyway for driving the rotor on the bench.
//! 5. A small ▲ orientation mark on the top face at +X.

use crate::actuator::params::ActuatorParams;
use crate::config::Resolution;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::profiles::polar_point;
use crate::sketch::Sketch;
use crate::sketch::layers::Layered;

const WASHER_DEPTH: Real = 1.8;
/// Bars sit proud for adhesive and are sanded flush afterwards.
const MAGNET_CLEARANCE: Real = 0.2;
pub const STATOR_THICKNESS: Real = 8.0;
const AIR_GAP: Real = 1.0;
/// Solid wall behind the magnets.
const SAFE_LAND: Real = 3.0;
const MAGNET_SKEW_DEG: Real = 3.0;
const BORE_CLEARANCE: Real = 0.25;
const MARK_SIZE: Real = 2.0;
const MARK_HEIGHT: Real = 0.4;
const PIN_COUNT: usize = 8;
/// Snug fit for a Ø3 mm pin.
const PIN_DIA: Real = 3.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotorOptions {
    /// Cut the drum at mid-height into two printable halves.
    pub split: bool,
    /// One magnet ring and one air gap instead of two.
    pub single_sided: bool,
}

/// Axial stack of the drum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorStack {
    pub magnet_pocket_depth: Real,
    /// Washer recess plus magnet pocket.
    pub pocket_depth: Real,
    pub drum_height: Real,
    pub bore_radius: Real,
}

impl RotorStack {
    pub fn new(p: &ActuatorParams, single_sided: bool) -> Self {
        let magnet_pocket_depth = p.magnet_thickness + MAGNET_CLEARANCE;
        let pocket_depth = WASHER_DEPTH + magnet_pocket_depth;
        let drum_height = if single_sided {
            pocket_depth + AIR_GAP + STATOR_THICKNESS
        } else {
            2.0 * pocket_depth + 2.0 * AIR_GAP + STATOR_THICKNESS
        };
        RotorStack {
            magnet_pocket_depth,
            pocket_depth,
            drum_height,
            bore_radius: p.bearing_od / 2.0 + BORE_CLEARANCE,
        }
    }
}

/// The drum as a single solid, or as `[lower, upper]` halves when split.
pub fn build_rotor_hub(p: &ActuatorParams, res: &Resolution, options: RotorOptions) -> Vec<Mesh> {
    let drum = build_rotor_drum(p, res, options.single_sided);
    if !options.split {
        return vec![drum];
    }
    let stack = RotorStack::new(p, options.single_sided);
    let (lower, upper) = drum.split_at_z(stack.drum_height / 2.0);
    vec![lower, upper]
}

fn build_rotor_drum(p: &ActuatorParams, res: &Resolution, single_sided: bool) -> Mesh {
    let outer_r = p.outer_diameter / 2.0;
    let stack = RotorStack::new(p, single_sided);
    let h = stack.drum_height;

    // keyway cut 3 mm into the bore wall along +Y
    let bore = Sketch::circle(stack.bore_radius, res.segments)
        .union(&Sketch::rectangle(4.0, 3.0).translate(0.0, stack.bore_radius + 1.5));

    let mut part = Layered::new()
        .add(Sketch::circle(outer_r, res.segments), 0.0, h)
        .cut(bore, 0.0, h);

    let recess_r = outer_r - SAFE_LAND - p.magnet_width / 2.0;
    let magnet_r = recess_r - p.magnet_width / 2.0;
    let pockets = Sketch::union_all(
        &(0..p.magnets_count)
            .map(|i| {
                let ang = i as Real * 360.0 / p.magnets_count as Real + MAGNET_SKEW_DEG;
                let [x, y] = polar_point(magnet_r, ang);
                Sketch::rectangle(p.magnet_length + 0.3, p.magnet_width + 0.2)
                    .rotate(ang)
                    .translate(x, y)
            })
            .collect::<Vec<_>>(),
    );

    let faces: &[Real] = if single_sided {
        &[0.0]
    } else {
        &[0.0, h - stack.pocket_depth]
    };
    for &face in faces {
        part = part
            .cut(Sketch::circle(recess_r, res.segments), face, face + WASHER_DEPTH)
            .cut(
                pockets.clone(),
                face + WASHER_DEPTH,
                face + WASHER_DEPTH + stack.magnet_pocket_depth,
            );
    }

    let stator_bottom = stack.pocket_depth + AIR_GAP;
    let mark = Sketch::polygon(&[
        [0.0, 0.0],
        [MARK_SIZE, 0.0],
        [MARK_SIZE / 2.0, MARK_SIZE * 0.866],
    ])
    .translate(outer_r - 6.0, 0.0);

    part.add(mark, h, h + MARK_HEIGHT)
        .cut(
            Sketch::ring(outer_r - 3.0, stack.bore_radius, res.segments),
            stator_bottom,
            stator_bottom + STATOR_THICKNESS,
        )
        .cut(
            Sketch::circle(PIN_DIA / 2.0, res.hole_segments).polar_pattern(
                PIN_COUNT,
                outer_r - PIN_DIA,
                90.0,
            ),
            0.0,
            h,
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CSGOps;

    #[test]
    fn stack_heights() {
        let p = ActuatorParams::medium();
        let single = RotorStack::new(&p, true);
        assert!((single.pocket_depth - 7.0).abs() < 1e-12);
        assert!((single.drum_height - 16.0).abs() < 1e-12);
        let double = RotorStack::new(&p, false);
        assert!((double.drum_height - 24.0).abs() < 1e-12);
        assert!((double.bore_radius - 31.25).abs() < 1e-12);
    }

    #[test]
    fn single_sided_drum_envelope() {
        let p = ActuatorParams::medium();
        let parts = build_rotor_hub(
            &p,
            &Resolution::default(),
            RotorOptions {
                single_sided: true,
                ..Default::default()
            },
        );
        assert_eq!(parts.len(), 1);
        let bb = parts[0].bounding_box();
        assert!(bb.mins.z.abs() < 1e-9);
        assert!((bb.maxs.z - (16.0 + MARK_HEIGHT)).abs() < 1e-9);
        assert!((bb.maxs.x - p.outer_diameter / 2.0).abs() < 1e-3);
    }

    #[test]
    fn keyway_cuts_into_the_bore_wall() {
        let p = ActuatorParams::medium();
        let res = Resolution::with_segments(32);
        let stack = RotorStack::new(&p, false);
        let drum = build_rotor_drum(&p, &res, false);
        let box_at = |y: Real| {
            Mesh::cuboid(2.0, 2.0, stack.drum_height + 2.0).translate(-1.0, y, -1.0)
        };

        let key = box_at(stack.bore_radius + 0.5);
        assert!(drum.intersection(&key).volume().abs() < 1e-6);
        let wall = box_at(-(stack.bore_radius + 2.5));
        assert!(drum.intersection(&wall).volume() > 1.0);
    }

    #[test]
    fn split_gives_two_halves_at_mid_height() {
        let p = ActuatorParams::medium();
        let res = Resolution::with_segments(32);
        let halves = build_rotor_hub(
            &p,
            &res,
            RotorOptions {
                split: true,
                single_sided: false,
            },
        );
        assert_eq!(halves.len(), 2);
        assert!((halves[0].bounding_box().maxs.z - 12.0).abs() < 1e-6);
        assert!((halves[1].bounding_box().mins.z - 12.0).abs() < 1e-6);

        let whole = build_rotor_drum(&p, &res, false).volume();
        let parts = halves[0].volume() + halves[1].volume();
        assert!((whole - parts).abs() / whole < 1e-6);
    }
}
