//! [BSP](https://en.wikipedia.org/wiki/Binary_space_partitioning) tree node structure and operations

use crate::float_types::Real;
use crate::mesh::plane::{BACK, COPLANAR, FRONT, Plane};
use crate::mesh::polygon::Polygon;

/// A BSP tree node, containing polygons plus optional front/back subtrees
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Splitting plane for this node *or* **None** for an empty node.
    pub plane: Option<Plane>,

    /// Polygons in *front* half‑spaces.
    pub front: Option<Box<Node>>,

    /// Polygons in *back* half‑spaces.
    pub back: Option<Box<Node>>,

    /// Polygons that lie *exactly* on `plane`.
    pub polygons: Vec<Polygon>,
}

impl Node {
    pub const fn new() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }

    pub fn from_polygons(polygons: &[Polygon]) -> Self {
        let mut node = Self::new();
        if !polygons.is_empty() {
            node.build(polygons);
        }
        node
    }

    /// Convert solid space to empty space and empty space to solid space.
    pub fn invert(&mut self) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            node.polygons.iter_mut().for_each(Polygon::flip);
            if let Some(plane) = node.plane.as_mut() {
                plane.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);
            if let Some(front) = node.front.as_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_mut() {
                stack.push(back);
            }
        }
    }

    /// Pick the candidate plane that spans the fewest polygons while keeping the tree balanced.
    fn pick_splitting_plane(polygons: &[Polygon]) -> Plane {
        const K_SPANS: Real = 8.0;
        const K_BALANCE: Real = 1.0;

        let mut best_plane = polygons[0].plane;
        let mut best_score = Real::MAX;

        for candidate in polygons.iter().take(20) {
            let plane = &candidate.plane;
            let (mut num_front, mut num_back, mut num_spanning) = (0i64, 0i64, 0i64);
            for poly in polygons {
                match plane.classify_polygon(poly) {
                    COPLANAR => {},
                    FRONT => num_front += 1,
                    BACK => num_back += 1,
                    _ => num_spanning += 1,
                }
            }
            let score =
                K_SPANS * num_spanning as Real + K_BALANCE * ((num_front - num_back) as Real).abs();
            if score < best_score {
                best_score = score;
                best_plane = *plane;
            }
        }
        best_plane
    }

    /// Remove all parts of `polygons` that are inside this BSP tree.
    pub fn clip_polygons(&self, polygons: &[Polygon]) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack = vec![(self, polygons.to_vec())];

        while let Some((node, polys)) = stack.pop() {
            let Some(plane) = node.plane.as_ref() else {
                result.extend(polys);
                continue;
            };

            let mut front_polys = Vec::with_capacity(polys.len());
            let mut back_polys = Vec::with_capacity(polys.len());

            for polygon in &polys {
                let (coplanar_front, coplanar_back, front_parts, back_parts) =
                    plane.split_polygon(polygon);
                front_polys.extend(coplanar_front);
                front_polys.extend(front_parts);
                back_polys.extend(coplanar_back);
                back_polys.extend(back_parts);
            }

            match &node.front {
                Some(front) if !front_polys.is_empty() => stack.push((&**front, front_polys)),
                Some(_) => {},
                None => result.extend(front_polys),
            }
            // no back child means back space is solid: those fragments are dropped
            if let Some(back) = &node.back {
                if !back_polys.is_empty() {
                    stack.push((&**back, back_polys));
                }
            }
        }
        result
    }

    /// Remove all polygons in this BSP tree that are inside the other BSP tree.
    pub fn clip_to(&mut self, bsp: &Node) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            node.polygons = bsp.clip_polygons(&node.polygons);
            if let Some(front) = node.front.as_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_mut() {
                stack.push(back);
            }
        }
    }

    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            result.extend_from_slice(&node.polygons);
            stack.extend(
                [&node.front, &node.back]
                    .into_iter()
                    .filter_map(|child| child.as_deref()),
            );
        }
        result
    }

    /// Insert `polygons` into the tree, splitting them as they descend.
    pub fn build(&mut self, polygons: &[Polygon]) {
        if polygons.is_empty() {
            return;
        }
        let mut stack = vec![(self, polygons.to_vec())];

        while let Some((node, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }
            let plane = *node
                .plane
                .get_or_insert_with(|| Self::pick_splitting_plane(&polys));

            let mut front = Vec::with_capacity(polys.len() / 2);
            let mut back = Vec::with_capacity(polys.len() / 2);
            for polygon in &polys {
                let (coplanar_front, coplanar_back, front_parts, back_parts) =
                    plane.split_polygon(polygon);
                node.polygons.extend(coplanar_front);
                node.polygons.extend(coplanar_back);
                front.extend(front_parts);
                back.extend(back_parts);
            }

            if !front.is_empty() {
                let child = node.front.get_or_insert_with(|| Box::new(Node::new()));
                stack.push((&mut **child, front));
            }
            if !back.is_empty() {
                let child = node.back.get_or_insert_with(|| Box::new(Node::new()));
                stack.push((&mut **child, back));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Node;
    use crate::mesh::Mesh;
    use crate::traits::CSGOps;

    #[test]
    fn build_keeps_every_face() {
        let cube = Mesh::cube(2.0);
        let node = Node::from_polygons(&cube.polygons);
        assert_eq!(node.all_polygons().len(), cube.polygons.len());
    }

    #[test]
    fn polygons_inside_are_clipped() {
        let outer = Node::from_polygons(&Mesh::cube(4.0).translate(-2.0, -2.0, -2.0).polygons);
        let inner = Mesh::cube(1.0).translate(-0.5, -0.5, -0.5);
        assert!(outer.clip_polygons(&inner.polygons).is_empty());
    }

    #[test]
    fn invert_twice_is_identity() {
        let cube = Mesh::cube(1.0);
        let mut node = Node::from_polygons(&cube.polygons);
        let before = node.all_polygons();
        node.invert();
        node.invert();
        assert_eq!(node.all_polygons(), before);
    }
}
