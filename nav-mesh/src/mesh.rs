use std::collections::BTreeSet;

use nav_geom::{centroid, point_in_triangle, Point, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable triangulated walkable region.
///
/// Triangles are index triples into `vertices`. Winding may be inconsistent
/// between triangles and nothing in this crate depends on it. `obstacles`
/// lists triangle ids excluded from the adjacency graph; an empty set means
/// the whole mesh is walkable.
///
/// With the `serde` feature, a mesh round-trips through the shared interop
/// format: `Vertices` (objects with `X`, `Y` and an optional, ignored `Z`),
/// `Triangles` (3-element arrays of 0-based vertex indices) and an optional
/// `ObstacleTriangles` list.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavMesh {
    #[cfg_attr(feature = "serde", serde(rename = "Vertices"))]
    vertices: Vec<Point>,
    #[cfg_attr(feature = "serde", serde(rename = "Triangles"))]
    triangles: Vec<[u32; 3]>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "ObstacleTriangles",
            default,
            skip_serializing_if = "BTreeSet::is_empty"
        )
    )]
    obstacles: BTreeSet<u32>,
}

impl NavMesh {
    /// Bundle vertices and triangle index triples into a mesh.
    ///
    /// Index validity is the caller's contract; a malformed triple degrades
    /// graph construction (the triangle is isolated) rather than faulting.
    pub fn new(vertices: Vec<Point>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            obstacles: BTreeSet::new(),
        }
    }

    /// Mark a set of triangle ids as non-walkable.
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = u32>) -> Self {
        self.obstacles = obstacles.into_iter().collect();
        self
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn obstacles(&self) -> &BTreeSet<u32> {
        &self.obstacles
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_blocked(&self, tri: u32) -> bool {
        self.obstacles.contains(&tri)
    }

    /// Index triple of a triangle.
    pub fn triangle(&self, tri: u32) -> [u32; 3] {
        self.triangles[tri as usize]
    }

    /// Positions of a triangle's three corners.
    pub fn corners(&self, tri: u32) -> [Vec2; 3] {
        let [a, b, c] = self.triangle(tri);
        [
            self.vertices[a as usize].pos(),
            self.vertices[b as usize].pos(),
            self.vertices[c as usize].pos(),
        ]
    }

    /// Average of a triangle's corner positions.
    pub fn centroid(&self, tri: u32) -> Vec2 {
        centroid(self.corners(tri))
    }

    /// Linear point-in-triangle scan; the first hit wins, boundary points
    /// included. `None` when `p` lies outside every triangle.
    pub fn find_triangle(&self, p: Vec2) -> Option<u32> {
        (0..self.triangles.len() as u32).find(|&tri| point_in_triangle(p, self.corners(tri)))
    }
}
