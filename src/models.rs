//! Named models the generator can build.
//!
//! Every entry turns a [`ModelContext`] into a [`ModelOutput`]: the main assembly
//! (written as STEP and STL) plus extra parts written only as STL, each under
//! the main file name with a `_<label>` suffix.

use crate::actuator::assembly::{MediumActuator, StrainWaveActuator};
use crate::actuator::back_plate::build_back_plate;
use crate::actuator::cycloidal::{
    CycloidDisc, EccentricSleeve, OutputFlange, PinRing, build_cycloid_disc,
    build_eccentric_sleeve, build_output_flange, build_pin_ring,
};
use crate::actuator::nema23::build_nema23_actuator;
use crate::actuator::params::ActuatorParams;
use crate::actuator::rotor::{RotorOptions, build_rotor_hub};
use crate::actuator::shell::build_shell;
use crate::actuator::stator::build_stator;
use crate::actuator::strain_wave::{build_circular_spline, build_flexspline, build_wave_generator};
use crate::arm::assembly::{
    arm_assembly, base_column_assembly, forearm_assembly, upper_arm_assembly,
};
use crate::arm::params::ArmParams;
use crate::arm::wrist::{build_tool_flange, wrist_assembly};
use crate::arm::yoke::{j2_yoke_assembly, j3_yoke_assembly};
use crate::assembly::{Assembly, Part};
use crate::config::Resolution;
use crate::errors::CadError;
use crate::mesh::Mesh;
use crate::traits::CSGOps;

/// Parameters every model is built from.
#[derive(Debug, Clone)]
pub struct ModelContext {
    /// Cycloidal actuator and its individual parts.
    pub actuator: ActuatorParams,
    /// Strain-wave actuator and its gearing parts.
    pub strain_wave: ActuatorParams,
    pub arm: ArmParams,
    pub resolution: Resolution,
}

impl Default for ModelContext {
    fn default() -> Self {
        Self {
            actuator: ActuatorParams::medium(),
            strain_wave: ActuatorParams::strain_wave(),
            arm: ArmParams::default(),
            resolution: Resolution::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModelOutput {
    pub main: Assembly,
    pub extra_parts: Vec<Part>,
}

impl ModelOutput {
    fn single(label: &str, mesh: Mesh) -> Self {
        Self {
            main: Assembly::new(label).with(label, mesh),
            extra_parts: Vec::new(),
        }
    }

    fn assembly(main: Assembly) -> Self {
        Self {
            main,
            extra_parts: Vec::new(),
        }
    }
}

type Builder = fn(&ModelContext) -> Result<ModelOutput, CadError>;

/// One entry of the registry.
pub struct Model {
    pub name: &'static str,
    pub description: &'static str,
    build: Builder,
}

impl Model {
    pub fn build(&self, ctx: &ModelContext) -> Result<ModelOutput, CadError> {
        ctx.resolution.validate()?;
        (self.build)(ctx)
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").field("name", &self.name).finish()
    }
}

macro_rules! model {
    ($name:literal, $description:literal, $build:expr) => {
        Model {
            name: $name,
            description: $description,
            build: $build,
        }
    };
}

pub static MODELS: &[Model] = &[
    model!("test_cube", "10 mm cube centred on the origin", |_| {
        Ok(ModelOutput::single(
            "test_cube",
            Mesh::cube(10.0).translate(-5.0, -5.0, -5.0),
        ))
    }),
    model!("j2_yoke", "J2 yoke plates with the J2 actuator", |ctx| {
        ctx.arm.validate()?;
        Ok(ModelOutput::assembly(j2_yoke_assembly(&ctx.arm, &ctx.resolution)))
    }),
    model!("j3_yoke", "J3 yoke plates with the J3 actuator", |ctx| {
        ctx.arm.validate()?;
        Ok(ModelOutput::assembly(j3_yoke_assembly(&ctx.arm, &ctx.resolution)))
    }),
    model!("base_column", "column section with the J1 actuator", |ctx| {
        ctx.arm.validate()?;
        Ok(ModelOutput::assembly(base_column_assembly(&ctx.arm, &ctx.resolution)))
    }),
    model!("upper_arm", "upper-arm tube", |ctx| {
        ctx.arm.validate()?;
        Ok(ModelOutput::assembly(upper_arm_assembly(&ctx.arm, &ctx.resolution)))
    }),
    model!("forearm", "forearm tube with the J4 actuator", |ctx| {
        ctx.arm.validate()?;
        Ok(ModelOutput::assembly(forearm_assembly(&ctx.arm, &ctx.resolution)))
    }),
    model!("wrist", "J5 and J6 actuators with the tool flange", |ctx| {
        ctx.arm.validate()?;
        Ok(ModelOutput::assembly(wrist_assembly(&ctx.arm, &ctx.resolution)))
    }),
    model!("tool_flange", "ISO 9409-1-50-4-M6 tool flange", |ctx| {
        ctx.arm.validate()?;
        Ok(ModelOutput::single(
            "tool_flange",
            build_tool_flange(&ctx.arm, &ctx.resolution),
        ))
    }),
    model!("nema23_actuator", "NEMA-23 motor with planetary gearbox", |ctx| {
        ctx.arm.validate()?;
        Ok(ModelOutput::single(
            "nema23_actuator",
            build_nema23_actuator(&ctx.arm, &ctx.resolution),
        ))
    }),
    model!("arm_assembly", "complete FROG arm at zero pose", |ctx| {
        ctx.arm.validate()?;
        Ok(ModelOutput::assembly(arm_assembly(&ctx.arm, &ctx.resolution)))
    }),
    model!(
        "medium_actuator",
        "cycloidal actuator: reference assembly, printable parts and exploded view",
        |ctx| {
            let actuator = MediumActuator::new(ctx.actuator.clone())?;
            let parts = actuator.parts(&ctx.resolution);
            let exploded = MediumActuator::exploded(&parts);
            let mut extra_parts = parts.parts.clone();
            extra_parts.push(Part::new("exploded", exploded.merged()));
            Ok(ModelOutput {
                main: MediumActuator::combined(&parts),
                extra_parts,
            })
        }
    ),
    model!(
        "strain_wave_actuator",
        "strain-wave actuator: assembly, printable parts and exploded view",
        |ctx| {
            let actuator = StrainWaveActuator::new(ctx.strain_wave.clone())?;
            let parts = actuator.parts(&ctx.resolution);
            let exploded = StrainWaveActuator::exploded(&parts);
            let mut extra_parts = parts.parts.clone();
            extra_parts.push(Part::new("exploded", exploded.merged()));
            Ok(ModelOutput {
                main: parts,
                extra_parts,
            })
        }
    ),
    model!("shell", "actuator housing with integrated pin ring", |ctx| {
        ctx.actuator.validate()?;
        Ok(ModelOutput::single("shell", build_shell(&ctx.actuator, &ctx.resolution)))
    }),
    model!("stator", "stator core or coil former", |ctx| {
        ctx.actuator.validate()?;
        Ok(ModelOutput::single("stator", build_stator(&ctx.actuator, &ctx.resolution)))
    }),
    model!(
        "rotor_hub",
        "double-sided rotor drum, with split halves as extra parts",
        |ctx| {
            ctx.actuator.validate()?;
            let p = &ctx.actuator;
            let drum = build_rotor_hub(p, &ctx.resolution, RotorOptions::default());
            let halves = build_rotor_hub(
                p,
                &ctx.resolution,
                RotorOptions {
                    split: true,
                    single_sided: false,
                },
            );
            let extra_parts = ["lower", "upper"]
                .into_iter()
                .zip(halves)
                .map(|(label, mesh)| Part::new(label, mesh))
                .collect();
            Ok(ModelOutput {
                main: Assembly::new("rotor_hub").with("rotor_hub", Mesh::merge(&drum)),
                extra_parts,
            })
        }
    ),
    model!("back_plate", "actuator back plate", |ctx| {
        ctx.actuator.validate()?;
        Ok(ModelOutput::single(
            "back_plate",
            build_back_plate(&ctx.actuator, &ctx.resolution),
        ))
    }),
    model!("cycloid_disc", "27-lobe cycloidal disc", |ctx| {
        Ok(ModelOutput::single(
            "cycloid_disc",
            build_cycloid_disc(&CycloidDisc::default(), &ctx.resolution),
        ))
    }),
    model!("pin_ring", "stand-alone 29-pin ring", |ctx| {
        Ok(ModelOutput::single(
            "pin_ring",
            build_pin_ring(&PinRing::default(), &ctx.resolution),
        ))
    }),
    model!("eccentric_sleeve", "eccentric input sleeve", |ctx| {
        Ok(ModelOutput::single(
            "eccentric_sleeve",
            build_eccentric_sleeve(&EccentricSleeve::default(), &ctx.resolution),
        ))
    }),
    model!("output_flange", "cycloidal output flange", |ctx| {
        Ok(ModelOutput::single(
            "output_flange",
            build_output_flange(&OutputFlange::default(), &ctx.resolution),
        ))
    }),
    model!("flexspline", "strain-wave flexspline cup", |ctx| {
        ctx.strain_wave.validate()?;
        Ok(ModelOutput::single(
            "flexspline",
            build_flexspline(&ctx.strain_wave, &ctx.resolution),
        ))
    }),
    model!("circular_spline", "strain-wave circular spline", |ctx| {
        ctx.strain_wave.validate()?;
        Ok(ModelOutput::single(
            "circular_spline",
            build_circular_spline(&ctx.strain_wave, &ctx.resolution),
        ))
    }),
    model!("wave_generator", "strain-wave elliptical cam", |ctx| {
        ctx.strain_wave.validate()?;
        Ok(ModelOutput::single(
            "wave_generator",
            build_wave_generator(&ctx.strain_wave, &ctx.resolution),
        ))
    }),
];

pub fn model_names() -> impl Iterator<Item = &'static str> {
    MODELS.iter().map(|m| m.name)
}

/// Names to export: every model when `requested` is empty, otherwise `requested` as given.
///
/// Unknown names are kept so the exporter reports them as failures after the
/// known models have been written.
pub fn select_models(requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        return model_names().map(str::to_string).collect();
    }
    for name in requested {
        if find_model(name).is_err() {
            tracing::warn!(model = %name, "unknown model, see --list");
        }
    }
    requested.to_vec()
}

pub fn find_model(name: &str) -> Result<&'static Model, CadError> {
    MODELS
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| CadError::UnknownModel(name.to_string()))
}
