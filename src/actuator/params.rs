//! The actuator parameter record and its derived dimensions.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::profiles::{StatorLamination, StatorToothSpan};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_flange_offset() -> Real {
    3.0
}
const fn default_flange_radius() -> Real {
    6.0
}
const fn default_mount_hole_radius() -> Real {
    1.5
}
const fn default_slot_opening() -> Real {
    2.0
}
const fn default_flexspline_teeth() -> usize {
    200
}
const fn default_circular_spline_teeth() -> usize {
    202
}
const fn default_gear_module() -> Real {
    0.3
}
const fn default_flexspline_thickness() -> Real {
    1.2
}
const fn default_flexspline_length() -> Real {
    25.0
}
const fn default_flexspline_rim_width() -> Real {
    8.0
}
const fn default_wave_amplitude() -> Real {
    0.5
}
const fn default_ellipse_ratio() -> Real {
    1.02
}
fn default_flexspline_material() -> String {
    "TPU 95A".into()
}
const fn default_air_gap() -> Real {
    1.0
}
const fn default_shoe_depth() -> Real {
    1.5
}

/// Dimensions of a 3D-printed BLDC actuator, all in millimetres.
///
/// The stack from the axis outward is shaft, rotor (magnets facing out), air gap,
/// stator teeth pointing inward, back iron and the printed housing. A reduction
/// (strain wave or cycloidal) sits above the motor under the top bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorParams {
    pub name: String,
    /// Overall OD of the housing.
    pub outer_diameter: Real,
    pub housing_height: Real,
    pub wall_thickness: Real,

    pub bearing_id: Real,
    pub bearing_od: Real,
    pub bearing_thickness: Real,

    /// Height of the raised shaft boss.
    pub shaft_housing_height: Real,

    /// Number of stator teeth; zero selects the coreless axial-flux former.
    pub stator_teeth: usize,
    /// Radial tooth length from the bore to the back iron.
    pub tooth_length: Real,
    /// Tangential tooth width at the root.
    pub tooth_width: Real,

    pub magnets_count: usize,
    /// Magnet dimension along the motor axis.
    pub magnet_length: Real,
    /// Magnet tangential width.
    pub magnet_width: Real,
    /// Magnet radial thickness.
    pub magnet_thickness: Real,
    /// Radial position of the magnet centre.
    pub magnet_radius: Real,

    /// Tooth width after the taper; `None` keeps the teeth parallel.
    #[serde(default)]
    pub tooth_tip_width: Option<Real>,

    /// How far the flange tab centres sit outside the housing.
    #[serde(default = "default_flange_offset")]
    pub flange_offset: Real,
    #[serde(default = "default_flange_radius")]
    pub flange_radius: Real,
    #[serde(default = "default_mount_hole_radius")]
    pub mount_hole_radius: Real,

    /// Width of the slot mouth at the bore.
    #[serde(default = "default_slot_opening")]
    pub slot_opening: Real,

    #[serde(default = "default_flexspline_teeth")]
    pub flexspline_teeth: usize,
    #[serde(default = "default_circular_spline_teeth")]
    pub circular_spline_teeth: usize,
    #[serde(default = "default_gear_module")]
    pub gear_module: Real,
    #[serde(default = "default_flexspline_thickness")]
    pub flexspline_thickness: Real,
    /// Flexspline cup depth.
    #[serde(default = "default_flexspline_length")]
    pub flexspline_length: Real,
    /// Axial width of the toothed rim.
    #[serde(default = "default_flexspline_rim_width")]
    pub flexspline_rim_width: Real,
    /// Radial deformation of the flexspline.
    #[serde(default = "default_wave_amplitude")]
    pub wave_amplitude: Real,
    /// Major / minor axis ratio of the wave generator.
    #[serde(default = "default_ellipse_ratio")]
    pub wave_generator_ellipse_ratio: Real,
    #[serde(default = "default_flexspline_material")]
    pub flexspline_material: String,

    #[serde(default = "default_air_gap")]
    pub air_gap: Real,
    /// Radial thickness of the pole shoes.
    #[serde(default = "default_shoe_depth")]
    pub shoe_depth: Real,
}

impl ActuatorParams {
    /// Medium actuator: 6908 bearing, 105 mm OD, axial-flux motor with cycloidal reduction.
    pub fn medium() -> Self {
        ActuatorParams {
            name: "medium".into(),
            outer_diameter: 105.0,
            housing_height: 30.0,
            wall_thickness: 3.0,
            bearing_id: 40.0,
            bearing_od: 62.0,
            bearing_thickness: 12.0,
            shaft_housing_height: 15.0,
            stator_teeth: 0,
            tooth_length: 0.0,
            tooth_width: 0.0,
            magnets_count: 14,
            magnet_length: 20.0,
            magnet_width: 10.0,
            magnet_thickness: 5.0,
            magnet_radius: 0.0,
            tooth_tip_width: Some(0.0),
            flange_offset: default_flange_offset(),
            flange_radius: default_flange_radius(),
            mount_hole_radius: default_mount_hole_radius(),
            slot_opening: default_slot_opening(),
            flexspline_teeth: 100,
            circular_spline_teeth: 102,
            gear_module: 0.4,
            flexspline_thickness: default_flexspline_thickness(),
            flexspline_length: default_flexspline_length(),
            flexspline_rim_width: default_flexspline_rim_width(),
            wave_amplitude: default_wave_amplitude(),
            wave_generator_ellipse_ratio: default_ellipse_ratio(),
            flexspline_material: default_flexspline_material(),
            air_gap: default_air_gap(),
            shoe_depth: default_shoe_depth(),
        }
    }

    /// Radial-flux inrunner with twelve inward teeth and an 80:1 strain-wave reduction.
    pub fn strain_wave() -> Self {
        ActuatorParams {
            name: "strain_wave".into(),
            housing_height: 40.0,
            stator_teeth: 12,
            tooth_length: 10.0,
            tooth_width: 6.0,
            tooth_tip_width: Some(5.0),
            magnet_length: 20.0,
            magnet_width: 8.0,
            magnet_thickness: 3.0,
            magnet_radius: 33.0,
            flexspline_teeth: 160,
            circular_spline_teeth: 162,
            ..Self::medium()
        }
    }

    /// Flexspline teeth per tooth of difference.
    pub fn reduction_ratio(&self) -> Real {
        self.flexspline_teeth as Real
            / (self.circular_spline_teeth as Real - self.flexspline_teeth as Real)
    }

    pub fn flexspline_pitch_diameter(&self) -> Real {
        self.gear_module * self.flexspline_teeth as Real
    }

    pub fn circular_spline_pitch_diameter(&self) -> Real {
        self.gear_module * self.circular_spline_teeth as Real
    }

    /// Fits inside the flexspline wall with 1 mm left for the deformation.
    pub fn wave_generator_major_diameter(&self) -> Real {
        self.flexspline_pitch_diameter() - 2.0 * self.flexspline_thickness - 1.0
    }

    pub fn wave_generator_minor_diameter(&self) -> Real {
        self.wave_generator_major_diameter() / self.wave_generator_ellipse_ratio
    }

    /// Radius of the housing cavity.
    pub fn inner_radius(&self) -> Real {
        self.outer_diameter / 2.0 - self.wall_thickness
    }

    pub fn tip_width(&self) -> Real {
        match self.tooth_tip_width {
            Some(w) if w > 0.0 => w,
            _ => self.tooth_width,
        }
    }

    /// Stator bore: outside the magnet faces by the air gap.
    pub fn stator_bore_radius(&self) -> Real {
        self.magnet_radius + self.magnet_thickness / 2.0 + self.air_gap
    }

    pub fn lamination(&self) -> StatorLamination {
        StatorLamination {
            teeth: self.stator_teeth,
            bore_radius: self.stator_bore_radius(),
            tooth_length: self.tooth_length,
            shoe_depth: self.shoe_depth,
            tooth_width: self.tooth_width,
            tooth_tip_width: self.tip_width(),
            slot_opening: self.slot_opening,
        }
    }

    pub fn tooth_span(&self) -> StatorToothSpan {
        self.lamination().span()
    }

    /// Check that every dimension is usable and that the features clear each other.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("outer_diameter", self.outer_diameter),
            ("housing_height", self.housing_height),
            ("wall_thickness", self.wall_thickness),
            ("bearing_id", self.bearing_id),
            ("bearing_od", self.bearing_od),
            ("bearing_thickness", self.bearing_thickness),
            ("magnet_length", self.magnet_length),
            ("magnet_width", self.magnet_width),
            ("magnet_thickness", self.magnet_thickness),
            ("flange_radius", self.flange_radius),
            ("mount_hole_radius", self.mount_hole_radius),
            ("gear_module", self.gear_module),
            ("flexspline_thickness", self.flexspline_thickness),
            ("flexspline_length", self.flexspline_length),
            ("flexspline_rim_width", self.flexspline_rim_width),
            ("wave_generator_ellipse_ratio", self.wave_generator_ellipse_ratio),
        ] {
            ValidationError::positive(field, value)?;
        }
        for (field, value) in [
            ("shaft_housing_height", self.shaft_housing_height),
            ("flange_offset", self.flange_offset),
            ("slot_opening", self.slot_opening),
            ("wave_amplitude", self.wave_amplitude),
            ("air_gap", self.air_gap),
            ("shoe_depth", self.shoe_depth),
            ("tooth_length", self.tooth_length),
            ("tooth_width", self.tooth_width),
            ("magnet_radius", self.magnet_radius),
        ] {
            ValidationError::non_negative(field, value)?;
        }
        ValidationError::at_least("magnets_count", 2, self.magnets_count)?;
        ValidationError::at_least("flexspline_teeth", 3, self.flexspline_teeth)?;

        if self.circular_spline_teeth <= self.flexspline_teeth {
            return Err(ValidationError::GearMismatch {
                flex: self.flexspline_teeth,
                circular: self.circular_spline_teeth,
            });
        }
        if self.bearing_id >= self.bearing_od {
            return Err(ValidationError::Interference(format!(
                "bearing bore {} is not smaller than its outer diameter {}",
                self.bearing_id, self.bearing_od
            )));
        }
        if self.bearing_od / 2.0 >= self.inner_radius() {
            return Err(ValidationError::Interference(format!(
                "bearing OD {} does not fit inside the housing cavity (radius {})",
                self.bearing_od,
                self.inner_radius()
            )));
        }
        if self.wall_thickness >= self.housing_height {
            return Err(ValidationError::Interference(
                "wall is thicker than the housing is tall".into(),
            ));
        }
        if self.mount_hole_radius >= self.flange_radius {
            return Err(ValidationError::Interference(format!(
                "mount hole radius {} leaves no material in a flange of radius {}",
                self.mount_hole_radius, self.flange_radius
            )));
        }
        if self.wave_generator_minor_diameter() <= 0.0 {
            return Err(ValidationError::Interference(format!(
                "wave generator envelope is not positive (major {:.3} mm)",
                self.wave_generator_major_diameter()
            )));
        }
        if self.stator_teeth > 0 {
            self.validate_radial_stator()?;
        }
        Ok(())
    }

    fn validate_radial_stator(&self) -> Result<(), ValidationError> {
        ValidationError::at_least("stator_teeth", 3, self.stator_teeth)?;
        ValidationError::positive("tooth_length", self.tooth_length)?;
        ValidationError::positive("tooth_width", self.tooth_width)?;

        let lam = self.lamination();
        if self.magnet_radius - self.magnet_thickness / 2.0 <= self.bearing_id / 2.0 {
            return Err(ValidationError::Interference(
                "magnets sit inside the shaft bore".into(),
            ));
        }
        if lam.shoe_depth >= lam.tooth_length {
            return Err(ValidationError::Interference(format!(
                "shoe depth {} leaves no tooth body in a tooth {} long",
                lam.shoe_depth, lam.tooth_length
            )));
        }
        if lam.yoke_radius() >= self.inner_radius() {
            return Err(ValidationError::Interference(format!(
                "stator teeth reach radius {:.2}, past the housing cavity {:.2}",
                lam.yoke_radius(),
                self.inner_radius()
            )));
        }
        let span = lam.span();
        let tip_half = (lam.tooth_tip_width / (2.0 * lam.shoe_back_radius())).asin();
        if span.half_span <= tip_half {
            return Err(ValidationError::Interference(format!(
                "slot opening {} leaves shoes narrower than the tooth tips",
                self.slot_opening
            )));
        }
        let root_half = (lam.tooth_width / (2.0 * lam.yoke_radius())).asin();
        if root_half >= span.pitch / 2.0 {
            return Err(ValidationError::Interference(format!(
                "{} teeth of width {} overlap at the back iron",
                self.stator_teeth, self.tooth_width
            )));
        }
        Ok(())
    }
}
