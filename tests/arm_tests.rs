mod support;

use frog_cad::arm::assembly::{ArmFrames, arm_assembly};
use frog_cad::arm::links::build_column_tube;
use frog_cad::arm::params::{ArmParams, MIN_BORE_WALL};
use frog_cad::arm::yoke::{build_j2_side_plate, j2_yoke_assembly};
use frog_cad::mesh::Mesh;
use frog_cad::traits::CSGOps;
use support::{approx_eq, bounding_box, coarse, overlap};

#[test]
fn column_matches_declared_diameter() {
    let p = ArmParams::default();
    let [min_x, _, min_z, max_x, _, max_z] = bounding_box(&build_column_tube(&p, &coarse()));
    assert!(approx_eq(max_x, p.column_od / 2.0, 1e-9));
    assert!(approx_eq(min_x, -p.column_od / 2.0, 1e-9));
    assert!(approx_eq(min_z, 0.0, 1e-9));
    assert!(approx_eq(max_z, p.column_render_height, 1e-9));
}

#[test]
fn j2_plate_bore_clears_the_upper_arm() {
    let p = ArmParams::default();
    let res = coarse();
    let plate = build_j2_side_plate(&p, &res);
    let tube =
        Mesh::cylinder(p.upper_arm_or() - 0.5, 20.0, res.segments).translate(0.0, 0.0, -10.0);
    assert!(overlap(&plate, &tube) < 1e-6);
}

#[test]
fn j2_plate_keeps_a_wall_beside_the_bore() {
    let p = ArmParams::default();
    let plate = build_j2_side_plate(&p, &coarse());
    let strip = Mesh::cuboid(MIN_BORE_WALL - 1.0, 2.0, 20.0).translate(
        p.upper_arm_or() + 0.5,
        -1.0,
        -10.0,
    );
    let expected = (MIN_BORE_WALL - 1.0) * 2.0 * p.yoke_plate_thickness;
    assert!(approx_eq(overlap(&plate, &strip), expected, 1e-6));
}

#[test]
fn j2_yoke_parts_do_not_collide() {
    let p = ArmParams::default();
    let yoke = j2_yoke_assembly(&p, &coarse());
    let plates: Vec<_> = yoke
        .parts
        .iter()
        .filter(|part| part.label.contains("plate"))
        .collect();
    assert_eq!(plates.len(), 3);
    for (i, a) in plates.iter().enumerate() {
        for b in &plates[i + 1..] {
            let (ba, bb) = (a.mesh.bounding_box(), b.mesh.bounding_box());
            // stacked along Y: boxes may share a face but never overlap
            let shared = ba.maxs.y.min(bb.maxs.y) - ba.mins.y.max(bb.mins.y);
            assert!(shared <= 1e-9, "{} / {}", a.label, b.label);
        }
    }
}

#[test]
fn arm_reaches_along_x() {
    let p = ArmParams::default();
    let arm = arm_assembly(&p, &coarse());
    let frames = ArmFrames::new(&p);
    let [_, _, min_z, max_x, _, _] = bounding_box(&arm.merged());
    let j5 = ArmFrames::origin(&frames.j5);
    assert!(max_x > j5.x);
    // J1 actuator hangs below the column base
    assert!(min_z < 0.0);
    assert!(arm.part("tool_flange").is_some());
    assert!(arm.part("j1_actuator").is_some());
}
