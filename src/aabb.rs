use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// An inverted box that any `grow` call will replace.
    pub fn empty() -> Self {
        Self {
            mins: Point3::new(Real::MAX, Real::MAX, Real::MAX),
            maxs: Point3::new(-Real::MAX, -Real::MAX, -Real::MAX),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3<Real>>) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.grow(p);
        }
        bb
    }

    #[inline]
    pub fn grow(&mut self, p: &Point3<Real>) {
        self.mins = self.mins.inf(p);
        self.maxs = self.maxs.sup(p);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mins.x > self.maxs.x
    }

    pub fn merged(&self, other: &Self) -> Self {
        Self {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.maxs.x >= other.mins.x
            && self.mins.x <= other.maxs.x
            && self.maxs.y >= other.mins.y
            && self.mins.y <= other.maxs.y
            && self.maxs.z >= other.mins.z
            && self.mins.z <= other.maxs.z
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }
}
