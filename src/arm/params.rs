//! Shared dimensions of the FROG arm.

use crate::errors::ValidationError;
use crate::float_types::Real;
use serde::{Deserialize, Serialize};

/// Material left between a joint bore and the edge of its side plate.
pub const MIN_BORE_WALL: Real = 2.0;

/// Link tubes, NEMA-23 actuators with their 20:1 gearboxes, the ISO-9409-1-50-4-M6
/// tool flange and the joint yokes. Every length is in millimetres.
///
/// Missing fields in a RON file take the value of [`ArmParams::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmParams {
    pub column_od: Real,
    pub column_thickness: Real,
    /// Length of column modelled; the real column is 500 mm.
    pub column_render_height: Real,

    pub upper_arm_od: Real,
    pub upper_arm_thickness: Real,
    pub upper_arm_length: Real,

    pub forearm_od: Real,
    pub forearm_thickness: Real,
    pub forearm_length: Real,

    pub nema23_face_size: Real,
    pub nema23_length: Real,
    pub nema23_hole_spacing: Real,
    /// M5 clearance.
    pub nema23_mount_hole_radius: Real,
    pub nema23_center_bore_radius: Real,
    pub gearbox_face_diam: Real,
    pub gearbox_length: Real,
    pub gearbox_output_flange_diam: Real,
    pub gearbox_output_flange_thickness: Real,

    pub tool_flange_diam: Real,
    pub tool_flange_thickness: Real,
    pub tool_flange_pcd: Real,
    /// M6 clearance.
    pub tool_flange_hole_radius: Real,
    /// Ø6 H7 dowel.
    pub tool_flange_pin_diam: Real,

    pub yoke_plate_thickness: Real,
    pub j2_yoke_height: Real,
    pub j2_yoke_depth: Real,
    pub j2_yoke_fillet: Real,
    pub j2_fastener_offset: Real,
    pub j3_yoke_fillet: Real,
    pub j3_fastener_offset: Real,
    /// M5 clearance, used by every yoke.
    pub fastener_hole_radius: Real,
}

impl Default for ArmParams {
    fn default() -> Self {
        ArmParams {
            column_od: 100.0,
            column_thickness: 6.0,
            column_render_height: 100.0,
            upper_arm_od: 80.0,
            upper_arm_thickness: 4.0,
            upper_arm_length: 300.0,
            forearm_od: 60.0,
            forearm_thickness: 4.0,
            forearm_length: 250.0,
            nema23_face_size: 57.0,
            nema23_length: 76.0,
            nema23_hole_spacing: 47.14,
            nema23_mount_hole_radius: 5.5 / 2.0,
            nema23_center_bore_radius: 38.0 / 2.0,
            gearbox_face_diam: 57.0,
            gearbox_length: 80.0,
            gearbox_output_flange_diam: 40.0,
            gearbox_output_flange_thickness: 5.0,
            tool_flange_diam: 50.0,
            tool_flange_thickness: 8.0,
            tool_flange_pcd: 31.5,
            tool_flange_hole_radius: 6.5 / 2.0,
            tool_flange_pin_diam: 6.0,
            yoke_plate_thickness: 6.0,
            j2_yoke_height: 100.0,
            j2_yoke_depth: 90.0,
            j2_yoke_fillet: 5.0,
            j2_fastener_offset: 10.0,
            j3_yoke_fillet: 4.0,
            j3_fastener_offset: 8.0,
            fastener_hole_radius: 5.5 / 2.0,
        }
    }
}

impl ArmParams {
    pub fn column_or(&self) -> Real {
        self.column_od / 2.0
    }

    pub fn column_ir(&self) -> Real {
        self.column_od / 2.0 - self.column_thickness
    }

    pub fn upper_arm_or(&self) -> Real {
        self.upper_arm_od / 2.0
    }

    pub fn upper_arm_ir(&self) -> Real {
        self.upper_arm_od / 2.0 - self.upper_arm_thickness
    }

    pub fn forearm_or(&self) -> Real {
        self.forearm_od / 2.0
    }

    pub fn forearm_ir(&self) -> Real {
        self.forearm_od / 2.0 - self.forearm_thickness
    }

    /// The J2 yoke spans the upper-arm tube.
    pub fn j2_yoke_width(&self) -> Real {
        self.upper_arm_od
    }

    pub fn j3_plate_depth(&self) -> Real {
        self.upper_arm_od
    }

    pub fn j3_plate_height(&self) -> Real {
        self.forearm_od * 1.5
    }

    /// Gearbox body plus its output flange, measured from the motor face.
    pub fn actuator_reach(&self) -> Real {
        self.gearbox_length + self.gearbox_output_flange_thickness
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("column_od", self.column_od),
            ("column_thickness", self.column_thickness),
            ("column_render_height", self.column_render_height),
            ("upper_arm_od", self.upper_arm_od),
            ("upper_arm_thickness", self.upper_arm_thickness),
            ("upper_arm_length", self.upper_arm_length),
            ("forearm_od", self.forearm_od),
            ("forearm_thickness", self.forearm_thickness),
            ("forearm_length", self.forearm_length),
            ("nema23_face_size", self.nema23_face_size),
            ("nema23_length", self.nema23_length),
            ("nema23_hole_spacing", self.nema23_hole_spacing),
            ("nema23_mount_hole_radius", self.nema23_mount_hole_radius),
            ("nema23_center_bore_radius", self.nema23_center_bore_radius),
            ("gearbox_face_diam", self.gearbox_face_diam),
            ("gearbox_length", self.gearbox_length),
            ("gearbox_output_flange_diam", self.gearbox_output_flange_diam),
            ("gearbox_output_flange_thickness", self.gearbox_output_flange_thickness),
            ("tool_flange_diam", self.tool_flange_diam),
            ("tool_flange_thickness", self.tool_flange_thickness),
            ("tool_flange_pcd", self.tool_flange_pcd),
            ("tool_flange_hole_radius", self.tool_flange_hole_radius),
            ("tool_flange_pin_diam", self.tool_flange_pin_diam),
            ("yoke_plate_thickness", self.yoke_plate_thickness),
            ("j2_yoke_height", self.j2_yoke_height),
            ("j2_yoke_depth", self.j2_yoke_depth),
            ("fastener_hole_radius", self.fastener_hole_radius),
        ] {
            ValidationError::positive(field, value)?;
        }
        for (field, value) in [
            ("j2_yoke_fillet", self.j2_yoke_fillet),
            ("j3_yoke_fillet", self.j3_yoke_fillet),
            ("j2_fastener_offset", self.j2_fastener_offset),
            ("j3_fastener_offset", self.j3_fastener_offset),
        ] {
            ValidationError::non_negative(field, value)?;
        }

        for (name, od, thickness) in [
            ("column", self.column_od, self.column_thickness),
            ("upper arm", self.upper_arm_od, self.upper_arm_thickness),
            ("forearm", self.forearm_od, self.forearm_thickness),
        ] {
            if 2.0 * thickness >= od {
                return Err(ValidationError::Interference(format!(
                    "{name} wall {thickness} closes a tube of OD {od}"
                )));
            }
        }
        if self.nema23_hole_spacing / 2.0 + self.nema23_mount_hole_radius
            >= self.nema23_face_size / 2.0
        {
            return Err(ValidationError::Interference(format!(
                "NEMA-23 hole square {} does not fit the {} mm face",
                self.nema23_hole_spacing, self.nema23_face_size
            )));
        }
        if self.nema23_center_bore_radius >= self.nema23_hole_spacing / 2.0 {
            return Err(ValidationError::Interference(
                "NEMA-23 centre bore swallows the mount holes".into(),
            ));
        }
        if self.tool_flange_pcd / 2.0 + self.tool_flange_hole_radius >= self.tool_flange_diam / 2.0
        {
            return Err(ValidationError::Interference(format!(
                "tool flange bolt circle {} breaks out of the Ø{} flange",
                self.tool_flange_pcd, self.tool_flange_diam
            )));
        }
        let j2_span = self.j2_yoke_depth.min(self.j2_yoke_height);
        if self.upper_arm_od + 2.0 * MIN_BORE_WALL > j2_span {
            return Err(ValidationError::Interference(format!(
                "upper arm bore Ø{} leaves less than {MIN_BORE_WALL} mm of J2 side plate",
                self.upper_arm_od
            )));
        }
        let j3_span = self.j3_plate_depth().min(self.j3_plate_height());
        if self.forearm_od + 2.0 * MIN_BORE_WALL > j3_span {
            return Err(ValidationError::Interference(format!(
                "forearm bore Ø{} leaves less than {MIN_BORE_WALL} mm of J3 side plate",
                self.forearm_od
            )));
        }
        if self.j2_fastener_offset <= self.fastener_hole_radius
            || self.j3_fastener_offset <= self.fastener_hole_radius
        {
            return Err(ValidationError::Interference(
                "yoke fastener holes break out of the plate edge".into(),
            ));
        }
        Ok(())
    }
}
