//! File formats for exported solids.
//!
//! Both writers work from triangles: STL through [`Triangulated3D`], STEP as a
//! faceted boundary representation with one closed shell per part.
//!
//! [`Triangulated3D`]: crate::triangulated::Triangulated3D

#[cfg(feature = "stl-io")]
pub mod stl;

#[cfg(feature = "step-io")]
pub mod step;

/// Output formats understood by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Stl,
    Step,
    Both,
}

impl Format {
    pub const fn wants_stl(self) -> bool {
        matches!(self, Format::Stl | Format::Both)
    }

    pub const fn wants_step(self) -> bool {
        matches!(self, Format::Step | Format::Both)
    }
}
