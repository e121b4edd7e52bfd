//! Direct-drive wrist, origin on the J5/J6 pivot.

use crate::actuator::nema23::build_nema23_actuator;
use crate::arm::params::ArmParams;
use crate::assembly::Assembly;
use crate::config::Resolution;
use crate::mesh::Mesh;
use crate::sketch::Sketch;
use crate::traits::CSGOps;

/// ISO 9409-1-50-4-M6 flange: four bolt holes on the pitch circle, one dowel
/// hole between two of them. Centred through its thickness on z = 0.
pub fn build_tool_flange(p: &ArmParams, res: &Resolution) -> Mesh {
    let r = p.tool_flange_pcd / 2.0;
    let bolts = Sketch::circle(p.tool_flange_hole_radius, res.hole_segments).polar_pattern(4, r, 0.0);
    let dowel = Sketch::circle(p.tool_flange_pin_diam / 2.0, res.hole_segments)
        .translate(r, 0.0)
        .rotate(45.0);
    let t = p.tool_flange_thickness;
    Sketch::circle(p.tool_flange_diam / 2.0, res.segments)
        .difference(&bolts)
        .difference(&dowel)
        .extrude_between(-t / 2.0, t / 2.0)
}

/// J5 pitch actuator on −Y, J6 roll actuator on +X and the tool flange on the J6 output.
pub fn wrist_assembly(p: &ArmParams, res: &Resolution) -> Assembly {
    let actuator = build_nema23_actuator(p, res);
    let reach = p.actuator_reach();
    let j5 = actuator
        .rotate(0.0, 0.0, 90.0)
        .translate(0.0, -(p.nema23_length + p.gearbox_length), 0.0);
    let j6 = actuator.translate(reach, 0.0, 0.0);
    // flange face sits on the J6 output flange, its axis along X
    let flange = build_tool_flange(p, res)
        .rotate(0.0, 90.0, 0.0)
        .translate(2.0 * reach + p.tool_flange_thickness / 2.0, 0.0, 0.0);

    Assembly::new("wrist")
        .with("j5_actuator", j5)
        .with("j6_actuator", j6)
        .with("tool_flange", flange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_flange_is_drilled() {
        let p = ArmParams::default();
        let res = Resolution::default();
        let flange = build_tool_flange(&p, &res);
        let bb = flange.bounding_box();
        assert!((bb.maxs.x - 25.0).abs() < 1e-3);
        assert!((bb.maxs.z - 4.0).abs() < 1e-9);

        let blank = Sketch::circle(25.0, res.segments).area();
        let bolt = Sketch::circle(p.tool_flange_hole_radius, res.hole_segments).area();
        let dowel = Sketch::circle(3.0, res.hole_segments).area();
        let expected = (blank - 4.0 * bolt - dowel) * 8.0;
        assert!((flange.volume() - expected).abs() / expected < 1e-4);
    }

    #[test]
    fn flange_clears_the_roll_actuator() {
        let p = ArmParams::default();
        let wrist = wrist_assembly(&p, &Resolution::with_segments(32));
        let j6 = wrist.part("j6_actuator").expect("j6").mesh.bounding_box();
        let flange = wrist.part("tool_flange").expect("flange").mesh.bounding_box();
        assert!((j6.maxs.x - 170.0).abs() < 1e-6);
        assert!((flange.mins.x - j6.maxs.x).abs() < 1e-6);
        assert!((flange.maxs.x - 178.0).abs() < 1e-6);

        let j5 = wrist.part("j5_actuator").expect("j5").mesh.bounding_box();
        assert!(j5.maxs.y < j6.mins.y);
    }
}
