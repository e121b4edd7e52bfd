//! Link tubes of the arm.

use crate::arm::params::ArmParams;
use crate::config::Resolution;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::traits::CSGOps;

/// Tube on the X axis from x = 0 to x = `length`.
fn tube_along_x(outer_r: Real, inner_r: Real, length: Real, segments: usize) -> Mesh {
    Mesh::tube(outer_r, inner_r, length, segments).rotate(0.0, 90.0, 0.0)
}

/// Short visual section of the column, standing on z = 0.
pub fn build_column_tube(p: &ArmParams, res: &Resolution) -> Mesh {
    Mesh::tube(p.column_or(), p.column_ir(), p.column_render_height, res.segments)
}

/// Upper arm from the J2 pivot along +X.
pub fn build_upper_arm_tube(p: &ArmParams, res: &Resolution) -> Mesh {
    tube_along_x(p.upper_arm_or(), p.upper_arm_ir(), p.upper_arm_length, res.segments)
}

/// Forearm from the J3 pivot along +X.
pub fn build_forearm_tube(p: &ArmParams, res: &Resolution) -> Mesh {
    tube_along_x(p.forearm_or(), p.forearm_ir(), p.forearm_length, res.segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_tubes_run_along_x() {
        let p = ArmParams::default();
        let res = Resolution::default();
        let upper = build_upper_arm_tube(&p, &res).bounding_box();
        assert!(upper.mins.x.abs() < 1e-9);
        assert!((upper.maxs.x - 300.0).abs() < 1e-9);
        assert!((upper.maxs.y - 40.0).abs() < 1e-6);

        let fore = build_forearm_tube(&p, &res).bounding_box();
        assert!((fore.maxs.x - 250.0).abs() < 1e-9);
    }

    #[test]
    fn column_is_hollow() {
        let p = ArmParams::default();
        let column = build_column_tube(&p, &Resolution::default());
        let bb = column.bounding_box();
        assert!((bb.maxs.z - p.column_render_height).abs() < 1e-9);
        // hollow tube volume sits between the inscribed polygon areas
        let solid = Mesh::cylinder(p.column_or(), p.column_render_height, 64).volume();
        assert!(column.volume() < solid * 0.3);
    }
}
