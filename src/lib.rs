//! Parametric CAD generators for a 3D-printable brushless actuator and the FROG
//! robot arm, on top of a small **Constructive Solid Geometry (CSG)** kernel.
//!
//! Every generator is a pure function of a parameter record returning a closed
//! [`Mesh`](mesh::Mesh), or an [`Assembly`](assembly::Assembly) of labelled parts.
//! [`models`] names the buildable models and [`export`] writes them as STEP and STL.
//!
//! # Features
//! #### Default
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): binary and ASCII `.stl` export
//! - [**step-io**](https://en.wikipedia.org/wiki/ISO_10303-21): faceted AP214 `.step` export
//!
//! #### Optional
//! - **parallel**: build and export models concurrently with rayon

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod actuator;
pub mod arm;
pub mod assembly;
pub mod config;
pub mod errors;
pub mod export;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod models;
pub mod profiles;
pub mod sketch;
pub mod traits;
pub mod triangulated;

pub use assembly::{Assembly, Part};
pub use errors::{CadError, ValidationError};
pub use mesh::Mesh;
pub use sketch::Sketch;
pub use traits::CSGOps;
