//! Complete actuators: every printable part placed in the housing frame.
//!
//! The frame has its origin on the motor axis at the open end of the shell, +Z up
//! towards the output. The back plate mates on z = 0 from below.

use crate::actuator::back_plate::build_back_plate;
use crate::actuator::cycloidal::{
    CycloidDisc, EccentricSleeve, OutputFlange, build_cycloid_disc, build_eccentric_sleeve,
    build_output_flange,
};
use crate::actuator::params::ActuatorParams;
use crate::actuator::rotor::{RotorOptions, build_rotor_hub};
use crate::actuator::shell::build_shell;
use crate::actuator::stator::build_stator;
use crate::actuator::strain_wave::{build_circular_spline, build_flexspline, build_wave_generator};
use crate::assembly::{Assembly, Part};
use crate::config::Resolution;
use crate::errors::ValidationError;
use crate::float_types::{PI, Real};
use crate::mesh::Mesh;
use crate::traits::CSGOps;

/// Pitch between parts in the exploded views.
pub const EXPLODE_STEP: Real = 20.0;

/// Axial positions of the cycloidal stage inside the medium housing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycloidStack {
    /// Bottom of the pin-ring plane.
    pub ring_z: Real,
    pub disc_a_z: Real,
    pub disc_b_z: Real,
    pub eccentric_z: Real,
    pub flange_z: Real,
}

const DISC_THICKNESS: Real = 6.0;
const DISC_GAP: Real = 1.0;
const DISC_BORE: Real = 17.4;
const RING_THICKNESS: Real = 8.0;
const TRANSITION_HEIGHT: Real = 5.0;
const WAVE_GEN_HEIGHT: Real = 12.0;
const AXIAL_CLEARANCE: Real = 0.5;

impl CycloidStack {
    pub fn new(p: &ActuatorParams) -> Self {
        let rotor_magnetic_height = p.housing_height - 2.0 * (p.bearing_thickness + 1.0);
        let mid = rotor_magnetic_height + TRANSITION_HEIGHT + WAVE_GEN_HEIGHT / 2.0;
        let ring_z = mid - RING_THICKNESS / 2.0;
        let disc_a_z = ring_z + RING_THICKNESS + AXIAL_CLEARANCE;
        let disc_b_z = disc_a_z + DISC_THICKNESS + DISC_GAP;
        CycloidStack {
            ring_z,
            disc_a_z,
            disc_b_z,
            eccentric_z: ring_z - 1.0,
            flange_z: disc_b_z + DISC_THICKNESS + AXIAL_CLEARANCE,
        }
    }
}

/// Axial-flux motor with a two-disc cycloidal reducer.
#[derive(Debug, Clone)]
pub struct MediumActuator {
    params: ActuatorParams,
    sleeve: EccentricSleeve,
}

impl MediumActuator {
    pub fn new(params: ActuatorParams) -> Result<Self, ValidationError> {
        params.validate()?;
        Ok(Self {
            params,
            sleeve: EccentricSleeve::default(),
        })
    }

    pub const fn params(&self) -> &ActuatorParams {
        &self.params
    }

    pub fn stack(&self) -> CycloidStack {
        CycloidStack::new(&self.params)
    }

    fn disc(&self, phase: Real) -> CycloidDisc {
        CycloidDisc {
            thickness: DISC_THICKNESS,
            bore_dia: DISC_BORE,
            eccentricity: None,
            phase,
            ..CycloidDisc::default()
        }
    }

    /// Every printable part in its assembled position, back plate last.
    pub fn parts(&self, res: &Resolution) -> Assembly {
        let p = &self.params;
        let stack = self.stack();
        let e = self.sleeve.eccentricity;
        let rotor = Mesh::merge(&build_rotor_hub(
            p,
            res,
            RotorOptions {
                split: false,
                single_sided: true,
            },
        ));

        tracing::debug!(name = %p.name, ?stack, "placing cycloidal stage");
        Assembly::new(format!("{}_actuator", p.name))
            .with("shell", build_shell(p, res))
            .with("stator", build_stator(p, res))
            .with("rotor", rotor)
            .with(
                "disc_a",
                build_cycloid_disc(&self.disc(0.0), res).translate(e, 0.0, stack.disc_a_z),
            )
            .with(
                "disc_b",
                build_cycloid_disc(&self.disc(PI / 27.0), res).translate(e, 0.0, stack.disc_b_z),
            )
            .with(
                "eccentric",
                build_eccentric_sleeve(&self.sleeve, res).translate(0.0, 0.0, stack.eccentric_z),
            )
            .with(
                "output_flange",
                build_output_flange(&OutputFlange::default(), res)
                    .translate(0.0, 0.0, stack.flange_z),
            )
            .with("back_plate", build_back_plate(p, res))
    }

    /// Reference assembly; the back plate is left off so the inside stays visible.
    pub fn combined(parts: &Assembly) -> Assembly {
        Assembly {
            label: format!("{}_cycloidal_asm", parts.label),
            parts: parts
                .parts
                .iter()
                .filter(|part| part.label != "back_plate")
                .cloned()
                .collect(),
        }
    }

    /// Parts stacked in build order, back plate first and shell last.
    pub fn exploded(parts: &Assembly) -> Assembly {
        stacked(
            parts,
            &[
                "back_plate",
                "stator",
                "rotor",
                "disc_a",
                "disc_b",
                "eccentric",
                "output_flange",
                "shell",
            ],
        )
    }
}

/// Radial-flux inrunner with a strain-wave reduction above the stator.
#[derive(Debug, Clone)]
pub struct StrainWaveActuator {
    params: ActuatorParams,
}

/// Axial gap between the stator and the circular spline.
const GEAR_CLEARANCE: Real = 1.0;

impl StrainWaveActuator {
    pub fn new(params: ActuatorParams) -> Result<Self, ValidationError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub const fn params(&self) -> &ActuatorParams {
        &self.params
    }

    /// Height of the circular spline's lower face.
    pub fn spline_z(&self) -> Real {
        self.params.magnet_length + GEAR_CLEARANCE
    }

    pub fn parts(&self, res: &Resolution) -> Assembly {
        let p = &self.params;
        let spline_z = self.spline_z();
        // the cup's toothed rim lines up with the circular spline
        let cup_z = spline_z + p.flexspline_rim_width - p.flexspline_length;

        Assembly::new(format!("{}_strain_wave", p.name))
            .with("shell", build_shell(p, res))
            .with("stator", build_stator(p, res))
            .with(
                "wave_generator",
                build_wave_generator(p, res).translate(0.0, 0.0, spline_z),
            )
            .with("flexspline", build_flexspline(p, res).translate(0.0, 0.0, cup_z))
            .with(
                "circular_spline",
                build_circular_spline(p, res).translate(0.0, 0.0, spline_z),
            )
            .with("back_plate", build_back_plate(p, res))
    }

    pub fn exploded(parts: &Assembly) -> Assembly {
        stacked(
            parts,
            &[
                "back_plate",
                "stator",
                "wave_generator",
                "flexspline",
                "circular_spline",
                "shell",
            ],
        )
    }
}

/// Reorder `parts` by `order` (unknown labels are skipped) and explode along Z.
fn stacked(parts: &Assembly, order: &[&str]) -> Assembly {
    let ordered = Assembly {
        label: parts.label.clone(),
        parts: order
            .iter()
            .filter_map(|label| parts.part(label))
            .cloned()
            .collect::<Vec<Part>>(),
    };
    ordered.exploded(EXPLODE_STEP)
}
