//! RON parameter files and tessellation settings.

use crate::actuator::params::ActuatorParams;
use crate::arm::params::ArmParams;
use crate::errors::{CadError, ValidationError};
use crate::float_types::DEFAULT_SEGMENTS;
use crate::profiles::CycloidDiscGeometry;
use serde::{Deserialize, Serialize};
use std::path::Path;

const fn default_segments() -> usize {
    DEFAULT_SEGMENTS
}
const fn default_hole_segments() -> usize {
    24
}
const fn default_cycloid_steps() -> usize {
    CycloidDiscGeometry::STEPS
}

/// How finely curved outlines are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Segments on a full circle for body outlines (housings, discs, tubes).
    #[serde(default = "default_segments")]
    pub segments: usize,
    /// Segments on a full circle for small holes, pins and bosses.
    #[serde(default = "default_hole_segments")]
    pub hole_segments: usize,
    /// Samples around a cycloid disc outline.
    #[serde(default = "default_cycloid_steps")]
    pub cycloid_steps: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            segments: default_segments(),
            hole_segments: default_hole_segments(),
            cycloid_steps: default_cycloid_steps(),
        }
    }
}

impl Resolution {
    /// Fewest samples that still close a polygon.
    pub const MIN_STEPS: usize = 3;

    /// Body segments set to `segments`, the other counts scaled along with it.
    pub fn with_segments(segments: usize) -> Self {
        let segments = segments.max(8);
        let base = Self::default();
        Self {
            segments,
            hole_segments: (segments * base.hole_segments / base.segments).max(8),
            cycloid_steps: base.cycloid_steps,
        }
    }

    /// Cycloid samples, never fewer than [`Self::MIN_STEPS`].
    pub fn cycloid_samples(&self) -> usize {
        self.cycloid_steps.max(Self::MIN_STEPS)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::at_least("segments", Self::MIN_STEPS, self.segments)?;
        ValidationError::at_least("hole_segments", Self::MIN_STEPS, self.hole_segments)?;
        ValidationError::at_least("cycloid_steps", Self::MIN_STEPS, self.cycloid_steps)
    }
}

/// Load and validate an actuator parameter file.
pub fn load_actuator_params(path: impl AsRef<Path>) -> Result<ActuatorParams, CadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading actuator parameters");
    let content = std::fs::read_to_string(path)?;
    let params: ActuatorParams = ron::from_str(&content)?;
    params.validate()?;
    Ok(params)
}

/// Load and validate an arm parameter file.
pub fn load_arm_params(path: impl AsRef<Path>) -> Result<ArmParams, CadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading arm parameters");
    let content = std::fs::read_to_string(path)?;
    let params: ArmParams = ron::from_str(&content)?;
    params.validate()?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_and_validates_actuator_file() {
        let medium = ActuatorParams::medium();
        let text = ron::ser::to_string_pretty(&medium, ron::ser::PrettyConfig::default())
            .expect("serializable");
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write");

        let loaded = load_actuator_params(file.path()).expect("loads");
        assert_eq!(loaded, medium);
    }

    #[test]
    fn invalid_file_reports_validation_error() {
        let bad = ActuatorParams {
            bearing_id: 70.0,
            ..ActuatorParams::medium()
        };
        let text = ron::to_string(&bad).expect("serializable");
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write");

        assert!(matches!(
            load_actuator_params(file.path()),
            Err(CadError::Validation(_))
        ));
    }

    #[test]
    fn syntax_error_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"(name: ").expect("write");
        assert!(matches!(
            load_arm_params(file.path()),
            Err(CadError::Config(_))
        ));
    }

    #[test]
    fn resolution_needs_a_closed_outline() {
        assert_eq!(Resolution::default().validate(), Ok(()));
        let res = Resolution {
            cycloid_steps: 0,
            ..Resolution::default()
        };
        assert!(matches!(
            res.validate(),
            Err(ValidationError::TooFewFeatures {
                field: "cycloid_steps",
                ..
            })
        ));
        assert_eq!(res.cycloid_samples(), Resolution::MIN_STEPS);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_arm_params("/definitely/not/here.ron"),
            Err(CadError::Io(_))
        ));
    }

    #[test]
    fn resolution_scales_hole_segments() {
        let r = Resolution::with_segments(128);
        assert_eq!(r.segments, 128);
        assert_eq!(r.hole_segments, 48);
        assert_eq!(Resolution::default().cycloid_steps, 720);
    }
}
