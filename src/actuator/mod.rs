//! Parametric generators for the 3D-printed BLDC actuator.
//!
//! Each `build_*` function is a pure function of its parameters returning a solid
//! in the part's own frame. [`assembly`] places them inside the housing.

pub mod assembly;
pub mod back_plate;
pub mod cycloidal;
pub mod nema23;
pub mod params;
pub mod rotor;
pub mod shell;
pub mod stator;
pub mod strain_wave;

pub use assembly::{MediumActuator, StrainWaveActuator};
pub use params::ActuatorParams;
