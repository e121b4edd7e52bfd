use crate::aabb::Aabb;
use crate::float_types::Real;
use nalgebra::{Isometry3, Matrix4, Rotation3, Translation3, Vector3};

/// Boolean operations + transformations
pub trait CSGOps: Sized + Clone {
    fn new() -> Self;
    fn union(&self, other: &Self) -> Self;
    fn difference(&self, other: &Self) -> Self;
    fn intersection(&self, other: &Self) -> Self;
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;
    fn bounding_box(&self) -> Aabb;
    fn inverse(&self) -> Self;

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        self.transform(&Translation3::from(vector).to_homogeneous())
    }

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Returns a new Self placed by a rigid transform.
    fn located(&self, placement: &Isometry3<Real>) -> Self {
        self.transform(&placement.to_homogeneous())
    }

    /// Translated so that its bounding-box center is at the origin.
    fn center(&self) -> Self {
        let c = self.bounding_box().center();
        self.translate(-c.x, -c.y, -c.z)
    }

    /// Translated so that its lowest point sits at z=0.
    fn float(&self) -> Self {
        let min_z = self.bounding_box().mins.z;
        self.translate(0.0, 0.0, -min_z)
    }

    /// Rotates by x_deg, y_deg, z_deg (applied about X first, then Y, then Z).
    fn rotate(&self, x_deg: Real, y_deg: Real, z_deg: Real) -> Self {
        self.transform(&rotation_xyz(x_deg, y_deg, z_deg).to_homogeneous())
    }

    fn scale(&self, sx: Real, sy: Real, sz: Real) -> Self {
        self.transform(&Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)))
    }

    /// Reflect through the plane through the origin with the given normal.
    fn mirror(&self, normal: Vector3<Real>) -> Self {
        let n = normal.normalize();
        let mut reflect = Matrix4::identity();
        reflect
            .fixed_view_mut::<3, 3>(0, 0)
            .copy_from(&(nalgebra::Matrix3::identity() - 2.0 * n * n.transpose()));
        self.transform(&reflect)
    }

    /// Union of `count` copies spread evenly around the Z axis, the first copy at
    /// `start_angle_deg`. `self` is rotated about the origin, so place it at its radius first.
    fn distribute_arc(&self, count: usize, start_angle_deg: Real) -> Self {
        if count < 1 {
            return self.clone();
        }
        let step = 360.0 / count as Real;
        let mut all = Self::new();
        for i in 0..count {
            let copy = self.rotate(0.0, 0.0, start_angle_deg + step * i as Real);
            all = all.union(&copy);
        }
        all
    }
}

/// Rotation matching [`CSGOps::rotate`]: X first, then Y, then Z, angles in degrees.
pub fn rotation_xyz(x_deg: Real, y_deg: Real, z_deg: Real) -> Rotation3<Real> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x_deg.to_radians());
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y_deg.to_radians());
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians());
    rz * ry * rx
}
