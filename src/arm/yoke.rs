//! J2 and J3 yokes.
//!
//! Both yokes are built around their pivot: the local origin sits on the joint
//! axis and local Y is the rotation axis. Plates are made flat in XY, centred on
//! z = 0 through their thickness, then stood up.

use crate::actuator::nema23::build_nema23_actuator;
use crate::arm::params::ArmParams;
use crate::assembly::Assembly;
use crate::config::Resolution;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::sketch::Sketch;
use crate::traits::CSGOps;

const CORNER_SEGMENTS: usize = 8;

/// Four holes at `(±x, ±y)`.
fn hole_square(x: Real, y: Real, radius: Real, segments: usize) -> Sketch {
    let hole = Sketch::circle(radius, segments);
    Sketch::union_all(&[
        hole.translate(x, y),
        hole.translate(-x, y),
        hole.translate(x, -y),
        hole.translate(-x, -y),
    ])
}

fn slab(sketch: &Sketch, thickness: Real) -> Mesh {
    sketch.extrude_between(-thickness / 2.0, thickness / 2.0)
}

/// Rounded side plate with a central bore and fasteners inset from each corner.
fn side_plate(
    depth: Real,
    height: Real,
    fillet: Real,
    bore_radius: Real,
    fastener_offset: Real,
    p: &ArmParams,
    res: &Resolution,
) -> Mesh {
    let outline = Sketch::rounded_rectangle(depth, height, fillet, CORNER_SEGMENTS)
        .difference(&Sketch::circle(bore_radius, res.segments))
        .difference(&hole_square(
            depth / 2.0 - fastener_offset,
            height / 2.0 - fastener_offset,
            p.fastener_hole_radius,
            res.hole_segments,
        ));
    slab(&outline, p.yoke_plate_thickness)
}

/// J2 side plate: `j2_yoke_depth` × `j2_yoke_height` with a bore for the upper-arm tube.
pub fn build_j2_side_plate(p: &ArmParams, res: &Resolution) -> Mesh {
    side_plate(
        p.j2_yoke_depth,
        p.j2_yoke_height,
        p.j2_yoke_fillet,
        p.upper_arm_od / 2.0,
        p.j2_fastener_offset,
        p,
        res,
    )
}

/// Plate carrying the J2 actuator: NEMA-23 centre bore and hole square, plus four fasteners.
pub fn build_j2_motor_plate(p: &ArmParams, res: &Resolution) -> Mesh {
    let (w, h) = (p.j2_yoke_depth, p.j2_yoke_width());
    let nema = p.nema23_hole_spacing / 2.0;
    let outline = Sketch::rectangle(w, h)
        .difference(&Sketch::circle(p.nema23_center_bore_radius, res.segments))
        .difference(&hole_square(
            nema,
            nema,
            p.nema23_mount_hole_radius,
            res.hole_segments,
        ))
        .difference(&hole_square(
            w / 2.0 - p.j2_fastener_offset,
            h / 2.0 - p.j2_fastener_offset,
            p.fastener_hole_radius,
            res.hole_segments,
        ));
    slab(&outline, p.yoke_plate_thickness)
}

/// J3 side plate, clamping the forearm tube.
pub fn build_j3_side_plate(p: &ArmParams, res: &Resolution) -> Mesh {
    side_plate(
        p.j3_plate_depth(),
        p.j3_plate_height(),
        p.j3_yoke_fillet,
        p.forearm_od / 2.0,
        p.j3_fastener_offset,
        p,
        res,
    )
}

/// Stand a flat plate up so its face normal is ±Y, then centre it on `y`.
fn plate_at_y(plate: &Mesh, y: Real) -> Mesh {
    plate.rotate(90.0, 0.0, 0.0).translate(0.0, y, 0.0)
}

/// Actuator on the Y axis with its output flange face on the plane `y = face_y`.
fn actuator_onto(p: &ArmParams, res: &Resolution, face_y: Real) -> Mesh {
    build_nema23_actuator(p, res)
        .rotate(0.0, 0.0, 90.0)
        .translate(0.0, face_y - p.actuator_reach(), 0.0)
}

/// Two side plates straddling the upper arm, the motor plate outboard of the
/// left one and the J2 actuator bolted to it, coaxial with the pivot.
pub fn j2_yoke_assembly(p: &ArmParams, res: &Resolution) -> Assembly {
    let t = p.yoke_plate_thickness;
    let side_y = p.j2_yoke_width() / 2.0 + t / 2.0;
    let motor_plate_y = side_y + t;
    let side = build_j2_side_plate(p, res);

    Assembly::new("j2_yoke")
        .with(
            "j2_motor_plate",
            plate_at_y(&build_j2_motor_plate(p, res), -motor_plate_y),
        )
        .with("j2_side_plate_left", plate_at_y(&side, -side_y))
        .with("j2_side_plate_right", plate_at_y(&side, side_y))
        .with(
            "j2_actuator",
            actuator_onto(p, res, -(motor_plate_y + t / 2.0)),
        )
}

/// Side plates either side of the forearm and the J3 actuator outboard on −Y.
pub fn j3_yoke_assembly(p: &ArmParams, res: &Resolution) -> Assembly {
    let t = p.yoke_plate_thickness;
    let side_y = p.forearm_od / 2.0 + t / 2.0;
    let side = build_j3_side_plate(p, res);

    Assembly::new("j3_yoke")
        .with("j3_side_plate_left", plate_at_y(&side, -side_y))
        .with("j3_side_plate_right", plate_at_y(&side, side_y))
        .with("j3_actuator", actuator_onto(p, res, -(side_y + t / 2.0)))
}
