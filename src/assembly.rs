//! Labelled parts grouped into assemblies.
//!
//! An assembly is a compound: parts are placed rigidly and kept apart, never
//! fused with a boolean. Exporters walk the parts to write one shell each.

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::traits::CSGOps;
use nalgebra::{Isometry3, Vector3};

/// One solid with the label it is exported under.
#[derive(Debug, Clone)]
pub struct Part {
    pub label: String,
    pub mesh: Mesh,
}

impl Part {
    pub fn new(label: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            label: label.into(),
            mesh,
        }
    }

    pub fn located(&self, placement: &Isometry3<Real>) -> Self {
        Self {
            label: self.label.clone(),
            mesh: self.mesh.located(placement),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Assembly {
    pub label: String,
    pub parts: Vec<Part>,
}

impl Assembly {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            parts: Vec::new(),
        }
    }

    /// Add a part and return `self`, for building assemblies in one expression.
    pub fn with(mut self, label: impl Into<String>, mesh: Mesh) -> Self {
        self.push(Part::new(label, mesh));
        self
    }

    pub fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Append every part of a sub-assembly, placed by `placement`.
    pub fn attach(&mut self, sub: &Assembly, placement: &Isometry3<Real>) {
        self.parts
            .extend(sub.parts.iter().map(|part| part.located(placement)));
    }

    /// The whole assembly moved rigidly.
    pub fn located(&self, placement: &Isometry3<Real>) -> Self {
        Self {
            label: self.label.clone(),
            parts: self.parts.iter().map(|p| p.located(placement)).collect(),
        }
    }

    pub fn part(&self, label: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.label == label)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// All parts as one compound mesh.
    pub fn merged(&self) -> Mesh {
        Mesh::merge(self.parts.iter().map(|p| &p.mesh))
    }

    /// Parts stacked `step` apart along +Z in assembly order.
    pub fn exploded(&self, step: Real) -> Self {
        Self {
            label: format!("{}_exploded", self.label),
            parts: self
                .parts
                .iter()
                .enumerate()
                .map(|(i, p)| Part {
                    label: p.label.clone(),
                    mesh: p
                        .mesh
                        .translate_vector(Vector3::new(0.0, 0.0, step * i as Real)),
                })
                .collect(),
        }
    }

    pub fn polygon_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.polygons.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Translation3;

    fn two_cubes() -> Assembly {
        Assembly::new("pair")
            .with("a", Mesh::cube(1.0))
            .with("b", Mesh::cube(1.0).translate(3.0, 0.0, 0.0))
    }

    #[test]
    fn merged_keeps_every_polygon() {
        let asm = two_cubes();
        assert_eq!(asm.merged().polygons.len(), asm.polygon_count());
        assert!((asm.merged().volume() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn exploded_stacks_parts() {
        let exploded = two_cubes().exploded(20.0);
        let b = exploded.part("b").expect("part b");
        assert!((b.mesh.bounding_box().mins.z - 20.0).abs() < 1e-9);
        assert_eq!(exploded.label, "pair_exploded");
    }

    #[test]
    fn attach_places_sub_assembly() {
        let mut top = Assembly::new("top");
        top.attach(&two_cubes(), &Isometry3::from(Translation3::new(0.0, 0.0, 5.0)));
        assert_eq!(top.len(), 2);
        assert!((top.merged().bounding_box().mins.z - 5.0).abs() < 1e-9);
    }
}
