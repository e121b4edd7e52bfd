//! The FROG arm: link tubes, joint yokes, wrist and the placed assembly.
//!
//! Every sub-assembly is built about its own joint pivot and placed on the
//! matching frame from [`assembly::ArmFrames`].

pub mod assembly;
pub mod links;
pub mod params;
pub mod wrist;
pub mod yoke;

pub use assembly::{ArmFrames, arm_assembly};
pub use params::ArmParams;
