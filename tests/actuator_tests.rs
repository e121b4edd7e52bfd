mod support;

use frog_cad::actuator::back_plate::build_back_plate;
use frog_cad::actuator::params::ActuatorParams;
use frog_cad::actuator::rotor::{RotorOptions, RotorStack, build_rotor_hub};
use frog_cad::actuator::shell::{BOSS_HEIGHT, build_shell};
use frog_cad::actuator::stator::build_stator;
use frog_cad::actuator::{MediumActuator, StrainWaveActuator};
use frog_cad::mesh::Mesh;
use frog_cad::traits::CSGOps;
use support::{approx_eq, bounding_box, coarse, max_radius, overlap};

#[test]
fn shell_matches_declared_envelope() {
    let p = ActuatorParams::medium();
    let shell = build_shell(&p, &coarse());
    let [_, _, min_z, max_x, _, max_z] = bounding_box(&shell);
    assert!(approx_eq(min_z, 0.0, 1e-9));
    assert!(approx_eq(max_z, p.housing_height + BOSS_HEIGHT, 1e-9));
    // the body radius is od/2; only the tabs reach further
    let tab_reach = p.outer_diameter / 2.0 + p.flange_offset + p.flange_radius;
    assert!(approx_eq(max_x, tab_reach, 1e-3));
}

#[test]
fn back_plate_bore_clears_the_bearing_bore() {
    let p = ActuatorParams::medium();
    let res = coarse();
    let plate = build_back_plate(&p, &res);
    let shaft =
        Mesh::cylinder(p.bearing_id / 2.0, 20.0, res.segments).translate(0.0, 0.0, -10.0);
    assert!(overlap(&plate, &shaft) < 1e-6);
}

#[test]
fn rotor_bore_clears_the_shaft() {
    let p = ActuatorParams::medium();
    let res = coarse();
    let stack = RotorStack::new(&p, false);
    let drum = Mesh::merge(&build_rotor_hub(&p, &res, RotorOptions::default()));
    let shaft = Mesh::cylinder(stack.bore_radius - 0.5, stack.drum_height + 10.0, res.segments)
        .translate(0.0, 0.0, -5.0);
    assert!(overlap(&drum, &shaft) < 1e-6);
}

#[test]
fn stators_fit_the_housing_cavity() {
    for p in [ActuatorParams::medium(), ActuatorParams::strain_wave()] {
        let stator = build_stator(&p, &coarse());
        assert!(max_radius(&stator) <= p.inner_radius() + 1e-6, "{}", p.name);
    }
}

#[test]
fn medium_actuator_parts_stay_inside_the_housing() {
    let p = ActuatorParams::medium();
    let parts = MediumActuator::new(p.clone())
        .expect("valid preset")
        .parts(&coarse());
    for label in ["stator", "disc_a", "disc_b", "eccentric", "output_flange"] {
        let part = parts.part(label).expect(label);
        assert!(
            max_radius(&part.mesh) <= p.inner_radius() + 1e-6,
            "{label} pokes through the housing wall"
        );
    }
}

#[test]
fn strain_wave_gearing_sits_above_the_stator() {
    let p = ActuatorParams::strain_wave();
    let actuator = StrainWaveActuator::new(p.clone()).expect("valid preset");
    let parts = actuator.parts(&coarse());
    let stator_top = bounding_box(&parts.part("stator").expect("stator").mesh)[5];
    let spline_bottom = bounding_box(&parts.part("circular_spline").expect("spline").mesh)[2];
    assert!(spline_bottom > stator_top);
    for label in ["wave_generator", "flexspline", "circular_spline"] {
        let part = parts.part(label).expect(label);
        assert!(max_radius(&part.mesh) < p.inner_radius(), "{label}");
    }
}

#[test]
fn derived_gearing_values() {
    let p = ActuatorParams::strain_wave();
    assert!(approx_eq(p.reduction_ratio(), 80.0, 1e-12));
    assert!(approx_eq(p.flexspline_pitch_diameter(), 64.0, 1e-9));
    assert!(approx_eq(p.circular_spline_pitch_diameter(), 64.8, 1e-9));
}
