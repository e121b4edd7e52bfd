//! Simplified NEMA-23 closed-loop motor with its 20:1 planetary gearbox.

use crate::arm::params::ArmParams;
use crate::config::Resolution;
use crate::mesh::Mesh;
use crate::sketch::Sketch;
use crate::sketch::layers::Layered;
use crate::traits::CSGOps;

/// Motor and gearbox as one solid.
///
/// The origin is the centre of the gearbox back face. The gearbox and its output
/// flange extend along +X, the square motor body along −X.
pub fn build_nema23_actuator(p: &ArmParams, res: &Resolution) -> Mesh {
    let face = p.nema23_face_size;
    Layered::new()
        .add(
            Sketch::circle(p.gearbox_face_diam / 2.0, res.segments),
            0.0,
            p.gearbox_length,
        )
        .add(
            Sketch::circle(p.gearbox_output_flange_diam / 2.0, res.segments),
            p.gearbox_length,
            p.actuator_reach(),
        )
        .add(Sketch::rectangle(face, face), -p.nema23_length, 0.0)
        .build()
        .rotate(0.0, 90.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actuator_runs_along_x() {
        let p = ArmParams::default();
        let act = build_nema23_actuator(&p, &Resolution::default());
        let bb = act.bounding_box();
        assert!((bb.mins.x + 76.0).abs() < 1e-6);
        assert!((bb.maxs.x - 85.0).abs() < 1e-6);
        assert!((bb.maxs.y - 28.5).abs() < 1e-6);
        assert!((bb.mins.z + 28.5).abs() < 1e-6);
        assert!(act.volume() > 0.0);
    }
}
