use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::Point3;
use std::collections::HashMap;

impl Mesh {
    /// Checks if the Mesh object is manifold
    ///
    /// ### Returns
    /// Returns `true` if every edge appears exactly 2 times, once in each direction
    ///
    /// ### Notes:
    /// - Counting directed edges also catches neighbours with flipped winding.
    /// - BSP booleans leave T-junctions on split faces, so results of `union` /
    ///   `difference` usually report `false` even when they are watertight.
    /// - Uses a `QUANTIZATION_FACTOR` for `Real` coordinates
    pub fn is_manifold(&self) -> bool {
        const QUANTIZATION_FACTOR: Real = 1e7;

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        struct QuantizedPoint(i64, i64, i64);

        fn quantize_point(p: &Point3<Real>) -> QuantizedPoint {
            QuantizedPoint(
                (p.x * QUANTIZATION_FACTOR).round() as i64,
                (p.y * QUANTIZATION_FACTOR).round() as i64,
                (p.z * QUANTIZATION_FACTOR).round() as i64,
            )
        }

        // (forward, backward) use count per undirected edge
        let mut edge_counts: HashMap<(QuantizedPoint, QuantizedPoint), (u32, u32)> =
            HashMap::new();

        for poly in &self.polygons {
            let n = poly.vertices.len();
            for i in 0..n {
                let p0 = quantize_point(&poly.vertices[i].pos);
                let p1 = quantize_point(&poly.vertices[(i + 1) % n].pos);
                if p0 == p1 {
                    continue;
                }
                let entry = edge_counts.entry((p0.min(p1), p0.max(p1))).or_insert((0, 0));
                if p0 < p1 {
                    entry.0 += 1;
                } else {
                    entry.1 += 1;
                }
            }
        }

        !edge_counts.is_empty() && edge_counts.values().all(|&count| count == (1, 1))
    }
}
