//! Joint frames and the placed FROG arm.
//!
//! World frame: J1 on the origin with its axis along +Z, the column standing on
//! z = 0. At zero pose every link runs along +X.

use crate::actuator::nema23::build_nema23_actuator;
use crate::arm::links::{build_column_tube, build_forearm_tube, build_upper_arm_tube};
use crate::arm::params::ArmParams;
use crate::arm::wrist::wrist_assembly;
use crate::arm::yoke::{j2_yoke_assembly, j3_yoke_assembly};
use crate::assembly::Assembly;
use crate::config::Resolution;
use crate::float_types::Real;
use crate::traits::CSGOps;
use nalgebra::{Isometry3, Translation3, Vector3};

/// Pivot of every joint at zero pose.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmFrames {
    pub j1: Isometry3<Real>,
    pub j2: Isometry3<Real>,
    pub j3: Isometry3<Real>,
    pub j4: Isometry3<Real>,
    pub j5: Isometry3<Real>,
    pub j6: Isometry3<Real>,
}

fn at(x: Real, y: Real, z: Real) -> Isometry3<Real> {
    Isometry3::from(Translation3::new(x, y, z))
}

impl ArmFrames {
    pub fn new(p: &ArmParams) -> Self {
        let j1 = Isometry3::identity();
        let j2 = at(0.0, 0.0, p.column_render_height + p.j2_yoke_height / 2.0);
        let j3 = j2 * at(p.upper_arm_length, 0.0, 0.0);
        // J4 rolls about the forearm axis through J3; J6 rolls about the J5 pivot
        let j4 = j3;
        let j5 = j4 * at(p.forearm_length, 0.0, 0.0);
        let j6 = j5;
        ArmFrames {
            j1,
            j2,
            j3,
            j4,
            j5,
            j6,
        }
    }

    pub fn origin(frame: &Isometry3<Real>) -> Vector3<Real> {
        frame.translation.vector
    }
}

/// Column with the J1 actuator inside it, origin on the column top.
///
/// The actuator points up with its output flange face on z = 0.
pub fn base_column_assembly(p: &ArmParams, res: &Resolution) -> Assembly {
    let h = p.column_render_height;
    Assembly::new("base_column")
        .with(
            "column_tube",
            build_column_tube(p, res).translate(0.0, 0.0, -h),
        )
        .with(
            "j1_actuator",
            build_nema23_actuator(p, res)
                .rotate(0.0, -90.0, 0.0)
                .translate(0.0, 0.0, -p.actuator_reach()),
        )
}

/// Upper-arm tube, origin on the J2 pivot.
pub fn upper_arm_assembly(p: &ArmParams, res: &Resolution) -> Assembly {
    Assembly::new("upper_arm").with("upper_arm_tube", build_upper_arm_tube(p, res))
}

/// Forearm tube and the J4 actuator, origin on the J3 pivot.
pub fn forearm_assembly(p: &ArmParams, res: &Resolution) -> Assembly {
    Assembly::new("forearm")
        .with("forearm_tube", build_forearm_tube(p, res))
        .with(
            "j4_actuator",
            build_nema23_actuator(p, res)
                .rotate(0.0, 0.0, 90.0)
                .translate(0.0, -(p.nema23_length + p.gearbox_length), 0.0),
        )
}

/// Every sub-assembly placed on its joint frame.
pub fn arm_assembly(p: &ArmParams, res: &Resolution) -> Assembly {
    let frames = ArmFrames::new(p);
    tracing::debug!(
        j2 = ?ArmFrames::origin(&frames.j2),
        j5 = ?ArmFrames::origin(&frames.j5),
        "placing arm"
    );

    let column_top = frames.j1 * at(0.0, 0.0, p.column_render_height);
    let mut arm = Assembly::new("arm_assembly");
    arm.attach(&base_column_assembly(p, res), &column_top);
    arm.attach(&j2_yoke_assembly(p, res), &frames.j2);
    arm.attach(&upper_arm_assembly(p, res), &frames.j2);
    arm.attach(&j3_yoke_assembly(p, res), &frames.j3);
    arm.attach(&forearm_assembly(p, res), &frames.j4);
    arm.attach(&wrist_assembly(p, res), &frames.j5);
    arm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_follow_the_links() {
        let p = ArmParams::default();
        let f = ArmFrames::new(&p);
        assert_eq!(ArmFrames::origin(&f.j2), Vector3::new(0.0, 0.0, 150.0));
        assert_eq!(ArmFrames::origin(&f.j3), Vector3::new(300.0, 0.0, 150.0));
        assert_eq!(f.j4, f.j3);
        assert_eq!(ArmFrames::origin(&f.j5), Vector3::new(550.0, 0.0, 150.0));
        assert_eq!(f.j6, f.j5);
    }

    #[test]
    fn j1_actuator_sits_in_the_column() {
        let p = ArmParams::default();
        let base = base_column_assembly(&p, &Resolution::with_segments(32));
        let act = base.part("j1_actuator").expect("j1").mesh.bounding_box();
        assert!(act.maxs.z.abs() < 1e-6);
        assert!((act.mins.z + 161.0).abs() < 1e-6);
        // the motor's corners stay inside the column bore
        let half_diagonal = p.nema23_face_size / 2.0 * Real::sqrt(2.0);
        assert!(half_diagonal < p.column_ir());
    }

    #[test]
    fn arm_has_every_part() {
        let p = ArmParams::default();
        let arm = arm_assembly(&p, &Resolution::with_segments(16));
        assert_eq!(arm.len(), 2 + 4 + 1 + 3 + 2 + 3);

        let flange = arm.part("tool_flange").expect("tool flange").mesh.bounding_box();
        assert!((flange.maxs.x - (550.0 + 178.0)).abs() < 1e-6);

        let column = arm.part("column_tube").expect("column").mesh.bounding_box();
        assert!(column.mins.z.abs() < 1e-9);
        let yoke = arm.part("j2_side_plate_left").expect("yoke").mesh.bounding_box();
        assert!((yoke.mins.z - column.maxs.z).abs() < 1e-3);
    }
}
