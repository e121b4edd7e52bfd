//! STEP (ISO 10303-21, AP214) export as faceted boundary representation.
//!
//! The kernel only has planar convex polygons, so every part becomes one
//! `FACETED_BREP` whose `CLOSED_SHELL` has one planar `FACE_SURFACE` per polygon,
//! bounded by a `POLY_LOOP`. Lengths are millimetres.

use crate::assembly::{Assembly, Part};
use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;
use std::fmt::Write;

/// Values written into the file header.
#[derive(Debug, Clone)]
pub struct StepHeader {
    pub description: String,
    pub author: String,
    pub organization: String,
    /// ISO 8601 timestamp; left empty unless the caller supplies one so output stays reproducible.
    pub timestamp: String,
}

impl Default for StepHeader {
    fn default() -> Self {
        Self {
            description: "frog-cad faceted model".to_string(),
            author: String::new(),
            organization: String::new(),
            timestamp: String::new(),
        }
    }
}

/// Points closer than this share one `CARTESIAN_POINT` inside a shell.
const WELD: Real = 1e-6;

/// STEP strings double their quotes.
fn quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// STEP reals always carry a decimal point.
fn real(v: Real) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v:.6}")
}

fn triple(x: Real, y: Real, z: Real) -> String {
    format!("({},{},{})", real(x), real(y), real(z))
}

/// Entity numbering and the DATA section under construction.
struct DataSection {
    body: String,
    next: usize,
}

impl DataSection {
    const fn new() -> Self {
        Self {
            body: String::new(),
            next: 1,
        }
    }

    fn push(&mut self, entity: impl AsRef<str>) -> usize {
        let id = self.next;
        self.next += 1;
        let _ = writeln!(self.body, "#{id}={};", entity.as_ref());
        id
    }

    fn point(&mut self, p: &Point3<Real>) -> usize {
        self.push(format!("CARTESIAN_POINT('',{})", triple(p.x, p.y, p.z)))
    }

    fn direction(&mut self, d: &Vector3<Real>) -> usize {
        self.push(format!("DIRECTION('',{})", triple(d.x, d.y, d.z)))
    }

    /// One shell: deduplicated points, then a face per polygon. Returns the `FACETED_BREP` id,
    /// or `None` when every polygon of the part is degenerate.
    fn faceted_brep(&mut self, part: &Part) -> Option<usize> {
        let mut welded: HashMap<(i64, i64, i64), usize> = HashMap::new();
        let mut faces = Vec::with_capacity(part.mesh.polygons.len());

        for poly in &part.mesh.polygons {
            if poly.vertices.len() < 3 {
                continue;
            }
            let normal = poly.plane.normal;
            let first_edge = poly.vertices[1].pos - poly.vertices[0].pos;
            let ref_dir = (first_edge - normal * normal.dot(&first_edge)).normalize();
            if !ref_dir.iter().all(|c| c.is_finite()) || normal.norm() < 0.5 {
                continue;
            }

            let mut loop_ids = Vec::with_capacity(poly.vertices.len());
            for v in &poly.vertices {
                let key = (
                    (v.pos.x / WELD).round() as i64,
                    (v.pos.y / WELD).round() as i64,
                    (v.pos.z / WELD).round() as i64,
                );
                let id = match welded.get(&key) {
                    Some(&id) => id,
                    None => {
                        let id = self.point(&v.pos);
                        welded.insert(key, id);
                        id
                    },
                };
                if loop_ids.last() != Some(&id) {
                    loop_ids.push(id);
                }
            }
            if loop_ids.len() > 1 && loop_ids.first() == loop_ids.last() {
                loop_ids.pop();
            }
            if loop_ids.len() < 3 {
                continue;
            }

            let axis = self.direction(&normal);
            let reference = self.direction(&ref_dir);
            let placement = self.push(format!(
                "AXIS2_PLACEMENT_3D('',#{},#{axis},#{reference})",
                loop_ids[0]
            ));
            let plane = self.push(format!("PLANE('',#{placement})"));
            let poly_loop = self.push(format!("POLY_LOOP('',({}))", id_list(&loop_ids)));
            let bound = self.push(format!("FACE_OUTER_BOUND('',#{poly_loop},.T.)"));
            faces.push(self.push(format!("FACE_SURFACE('',(#{bound}),#{plane},.T.)")));
        }

        if faces.is_empty() {
            return None;
        }
        let shell = self.push(format!("CLOSED_SHELL('',({}))", id_list(&faces)));
        Some(self.push(format!("FACETED_BREP({},#{shell})", quoted(&part.label))))
    }
}

fn id_list(ids: &[usize]) -> String {
    ids.iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Write every part of `assembly` as its own closed shell in one product named `name`.
pub fn to_step(assembly: &Assembly, name: &str, header: &StepHeader) -> String {
    let mut data = DataSection::new();

    let app = data.push(
        "APPLICATION_CONTEXT('core data for automotive mechanical design processes')",
    );
    data.push(format!(
        "APPLICATION_PROTOCOL_DEFINITION('international standard','automotive_design',2000,#{app})"
    ));
    let product_ctx = data.push(format!("PRODUCT_CONTEXT('',#{app},'mechanical')"));
    let product = data.push(format!(
        "PRODUCT({0},{0},'',(#{product_ctx}))",
        quoted(name)
    ));
    data.push(format!(
        "PRODUCT_RELATED_PRODUCT_CATEGORY('part',$,(#{product}))"
    ));
    let formation = data.push(format!("PRODUCT_DEFINITION_FORMATION('','',#{product})"));
    let def_ctx = data.push(format!(
        "PRODUCT_DEFINITION_CONTEXT('part definition',#{app},'design')"
    ));
    let definition = data.push(format!(
        "PRODUCT_DEFINITION('design','',#{formation},#{def_ctx})"
    ));
    let shape = data.push(format!("PRODUCT_DEFINITION_SHAPE('','',#{definition})"));

    let length = data.push("( LENGTH_UNIT() NAMED_UNIT(*) SI_UNIT(.MILLI.,.METRE.) )");
    let angle = data.push("( NAMED_UNIT(*) PLANE_ANGLE_UNIT() SI_UNIT($,.RADIAN.) )");
    let solid_angle = data.push("( NAMED_UNIT(*) SI_UNIT($,.STERADIAN.) SOLID_ANGLE_UNIT() )");
    let uncertainty = data.push(format!(
        "UNCERTAINTY_MEASURE_WITH_UNIT(LENGTH_MEASURE(1.E-05),#{length},'distance_accuracy_value','confusion accuracy')"
    ));
    let context = data.push(format!(
        "( GEOMETRIC_REPRESENTATION_CONTEXT(3) GLOBAL_UNCERTAINTY_ASSIGNED_CONTEXT((#{uncertainty})) \
         GLOBAL_UNIT_ASSIGNED_CONTEXT((#{length},#{angle},#{solid_angle})) \
         REPRESENTATION_CONTEXT('Context #1','3D Context with UNIT and UNCERTAINTY') )"
    ));

    let origin = data.point(&Point3::origin());
    let z = data.direction(&Vector3::z());
    let x = data.direction(&Vector3::x());
    let world = data.push(format!("AXIS2_PLACEMENT_3D('',#{origin},#{z},#{x})"));

    let mut items = vec![world];
    items.extend(assembly.parts.iter().filter_map(|part| data.faceted_brep(part)));

    let rep = data.push(format!(
        "FACETED_BREP_SHAPE_REPRESENTATION({},({}),#{context})",
        quoted(name),
        id_list(&items)
    ));
    data.push(format!("SHAPE_DEFINITION_REPRESENTATION(#{shape},#{rep})"));

    let mut out = String::new();
    out.push_str("ISO-10303-21;\nHEADER;\n");
    let _ = writeln!(
        out,
        "FILE_DESCRIPTION(({}),'2;1');",
        quoted(&header.description)
    );
    let _ = writeln!(
        out,
        "FILE_NAME({},{},({}),({}),'frog-cad','frog-cad','');",
        quoted(&format!("{name}.step")),
        quoted(&header.timestamp),
        quoted(&header.author),
        quoted(&header.organization)
    );
    out.push_str("FILE_SCHEMA(('AUTOMOTIVE_DESIGN { 1 0 10303 214 1 1 1 1 }'));\nENDSEC;\n");
    out.push_str("DATA;\n");
    out.push_str(&data.body);
    out.push_str("ENDSEC;\nEND-ISO-10303-21;\n");
    out
}

impl Mesh {
    /// A single-part STEP file.
    pub fn to_step(&self, name: &str) -> String {
        let asm = Assembly::new(name).with(name, self.clone());
        to_step(&asm, name, &StepHeader::default())
    }
}

impl Assembly {
    pub fn to_step(&self) -> String {
        to_step(self, &self.label, &StepHeader::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CSGOps;

    #[test]
    fn cube_is_one_closed_shell() {
        let text = Mesh::cube(10.0).to_step("test_cube");
        assert!(text.starts_with("ISO-10303-21;"));
        assert!(text.trim_end().ends_with("END-ISO-10303-21;"));
        assert!(text.contains("AUTOMOTIVE_DESIGN"));
        assert!(text.contains("SI_UNIT(.MILLI.,.METRE.)"));
        assert_eq!(text.matches("CLOSED_SHELL").count(), 1);
        assert_eq!(text.matches("FACE_SURFACE").count(), 6);
        // eight corners plus the world origin
        assert_eq!(text.matches("CARTESIAN_POINT").count(), 9);
    }

    #[test]
    fn one_shell_per_part() {
        let asm = Assembly::new("pair")
            .with("a", Mesh::cube(1.0))
            .with("b", Mesh::cube(1.0).translate(5.0, 0.0, 0.0));
        let text = asm.to_step();
        assert_eq!(text.matches("CLOSED_SHELL").count(), 2);
        assert!(text.contains("FACETED_BREP('a'"));
        assert!(text.contains("FACETED_BREP('b'"));
        assert!(text.contains("FILE_NAME('pair.step'"));
    }

    #[test]
    fn entity_ids_are_sequential() {
        let text = Mesh::cube(1.0).to_step("c");
        let ids: Vec<usize> = text
            .lines()
            .filter_map(|l| l.strip_prefix('#'))
            .filter_map(|l| l.split('=').next())
            .filter_map(|id| id.parse().ok())
            .collect();
        assert!(!ids.is_empty());
        assert!(ids.iter().enumerate().all(|(i, id)| *id == i + 1));
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quoted("o'ring"), "'o''ring'");
        assert_eq!(real(-0.0), "0.000000");
    }
}
