use crate::assembly::Assembly;
use crate::mesh::Mesh;
use crate::triangulated::Triangulated3D;
use std::fmt::Write;
use std::io::Cursor;

/// Export to ASCII STL
/// Convert a triangulated shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use frog_cad::mesh::Mesh;
/// let mesh = Mesh::cube(1.0);
/// let text = mesh.to_stl_ascii("my_solid");
/// assert!(text.starts_with("solid my_solid"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "solid {name}");

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        let _ = writeln!(out, "  facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z);
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.pos;
            let _ = writeln!(out, "      vertex {:.6} {:.6} {:.6}", p.x, p.y, p.z);
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    let _ = writeln!(out, "endsolid {name}");
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The 80-byte header is left blank; STL has no room for a solid name in binary form.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        triangles.push(Triangle {
            normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: tri.map(|v| {
                let p = v.pos;
                Vertex::new([p.x as f32, p.y as f32, p.z as f32])
            }),
        });
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl Mesh {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self)
    }
}

impl Assembly {
    pub fn to_stl_ascii(&self) -> String {
        self::to_stl_ascii(self, &self.label)
    }
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CSGOps;

    #[test]
    fn ascii_has_one_facet_per_triangle() {
        let cube = Mesh::cube(2.0);
        let text = cube.to_stl_ascii("cube");
        assert!(text.starts_with("solid cube\n"));
        assert!(text.trim_end().ends_with("endsolid cube"));
        assert_eq!(text.matches("facet normal").count(), 12);
        assert_eq!(text.matches("vertex").count(), 36);
    }

    #[test]
    fn binary_reads_back() {
        let asm = Assembly::new("pair")
            .with("a", Mesh::cube(1.0))
            .with("b", Mesh::cube(1.0).translate(2.0, 0.0, 0.0));
        let bytes = asm.to_stl_binary().expect("write stl");
        assert_eq!(bytes.len(), 84 + 50 * 24);

        let mut cursor = Cursor::new(bytes);
        let read = stl_io::read_stl(&mut cursor).expect("read stl");
        assert_eq!(read.faces.len(), 24);
        let max_x = read
            .vertices
            .iter()
            .map(|v| v[0])
            .fold(f32::MIN, f32::max);
        assert!((max_x - 3.0).abs() < 1e-6);
    }
}
