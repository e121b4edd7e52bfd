//! Sequential add / cut extrusions resolved band by band.
//!
//! A part described as "extrude this outline from z0 to z1, then cut that one from
//! z2 to z3, ..." is evaluated in 2D for every horizontal band between consecutive
//! feature heights. Each band becomes one prism and only the stacked prisms meet
//! in a 3D boolean.

use crate::float_types::{EPSILON, Real};
use crate::mesh::Mesh;
use crate::sketch::Sketch;
use crate::traits::CSGOps;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Add,
    Subtract,
}

#[derive(Debug, Clone)]
struct Feature {
    mode: Mode,
    sketch: Sketch,
    z0: Real,
    z1: Real,
}

impl Feature {
    fn covers(&self, lo: Real, hi: Real) -> bool {
        self.z0 <= lo + EPSILON && self.z1 >= hi - EPSILON
    }
}

/// Ordered list of planar features, each active over a z range.
#[derive(Debug, Clone, Default)]
pub struct Layered {
    features: Vec<Feature>,
}

impl Layered {
    pub fn new() -> Self {
        Layered::default()
    }

    fn push(mut self, mode: Mode, sketch: Sketch, z0: Real, z1: Real) -> Self {
        let (z0, z1) = if z0 <= z1 { (z0, z1) } else { (z1, z0) };
        if z1 - z0 > EPSILON && !sketch.is_empty() {
            self.features.push(Feature {
                mode,
                sketch,
                z0,
                z1,
            });
        }
        self
    }

    /// Add material over `z0..z1` (the bounds may be given in either order).
    pub fn add(self, sketch: Sketch, z0: Real, z1: Real) -> Self {
        self.push(Mode::Add, sketch, z0, z1)
    }

    /// Remove material over `z0..z1`.
    pub fn cut(self, sketch: Sketch, z0: Real, z1: Real) -> Self {
        self.push(Mode::Subtract, sketch, z0, z1)
    }

    /// Heights at which the cross-section may change, ascending.
    fn breakpoints(&self) -> Vec<Real> {
        let mut zs: Vec<Real> = self
            .features
            .iter()
            .flat_map(|f| [f.z0, f.z1])
            .collect();
        zs.sort_by(Real::total_cmp);
        zs.dedup_by(|a, b| (*a - *b).abs() < EPSILON);
        zs
    }

    /// Cross-section of the part between `lo` and `hi`.
    pub fn section(&self, lo: Real, hi: Real) -> Sketch {
        self.features
            .iter()
            .filter(|f| f.covers(lo, hi))
            .fold(Sketch::new(), |region, f| match f.mode {
                Mode::Add => region.union(&f.sketch),
                Mode::Subtract => region.difference(&f.sketch),
            })
    }

    pub fn build(&self) -> Mesh {
        let zs = self.breakpoints();
        let bands: Vec<Mesh> = zs
            .windows(2)
            .map(|w| self.section(w[0], w[1]).extrude_between(w[0], w[1]))
            .filter(|m| !m.is_empty())
            .collect();
        tracing::trace!(
            features = self.features.len(),
            bands = bands.len(),
            "layered part resolved"
        );
        bands
            .iter()
            .fold(Mesh::new(), |acc, band| acc.union(band))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_only_applies_inside_its_range() {
        let part = Layered::new()
            .add(Sketch::rectangle(10.0, 10.0), 0.0, 10.0)
            .cut(Sketch::rectangle(4.0, 4.0), 5.0, 10.0);
        let mesh = part.build();
        assert!((mesh.volume() - (1000.0 - 16.0 * 5.0)).abs() < 1e-3);
        assert!((part.section(0.0, 5.0).area() - 100.0).abs() < 1e-4);
        assert!((part.section(5.0, 10.0).area() - 84.0).abs() < 1e-4);
    }

    #[test]
    fn later_features_win() {
        // material added after a cut fills it again
        let part = Layered::new()
            .add(Sketch::rectangle(10.0, 10.0), 0.0, 2.0)
            .cut(Sketch::rectangle(4.0, 4.0), 0.0, 2.0)
            .add(Sketch::rectangle(2.0, 2.0), -1.0, 2.0);
        assert!((part.section(0.0, 2.0).area() - 88.0).abs() < 1e-4);
        assert!((part.section(-1.0, 0.0).area() - 4.0).abs() < 1e-4);
        assert!((part.build().bounding_box().mins.z + 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_bands_are_skipped() {
        let part = Layered::new()
            .add(Sketch::rectangle(1.0, 1.0), 0.0, 1.0)
            .add(Sketch::rectangle(1.0, 1.0), 5.0, 6.0);
        let mesh = part.build();
        assert!((mesh.volume() - 2.0).abs() < 1e-6);
        assert!((mesh.bounding_box().maxs.z - 6.0).abs() < 1e-9);
    }
}
