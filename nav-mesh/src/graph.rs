use tracing::debug;

use crate::mesh::NavMesh;

/// Outgoing edge of the triangle dual graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEdge {
    pub to: u32,
    /// Centroid distance truncated toward zero. Graph weights only rank
    /// corridors; the funnel pass owns the final geometry.
    pub weight: u32,
}

/// Dual graph of the triangulation: one node per triangle, an edge wherever
/// two walkable triangles share exactly two vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    edges: Vec<Vec<WeightedEdge>>,
}

impl AdjacencyGraph {
    /// Enumerate every unordered triangle pair and connect the ones sharing
    /// an edge.
    ///
    /// O(T²) over the triangle count, which is fine for the meshes this
    /// crate targets (hundreds of triangles). Obstacle triangles and
    /// malformed triples (out-of-range or duplicated indices) end up
    /// isolated; nothing here faults.
    pub fn from_mesh(mesh: &NavMesh) -> Self {
        let tris = mesh.triangles();
        let mut edges = vec![Vec::new(); tris.len()];

        for i in 0..tris.len() {
            if mesh.is_blocked(i as u32) || !well_formed(mesh, &tris[i]) {
                continue;
            }
            for j in (i + 1)..tris.len() {
                if mesh.is_blocked(j as u32) || !well_formed(mesh, &tris[j]) {
                    continue;
                }
                if shared_vertices(&tris[i], &tris[j]) != 2 {
                    continue;
                }
                let weight = mesh.centroid(i as u32).distance(mesh.centroid(j as u32)) as u32;
                edges[i].push(WeightedEdge { to: j as u32, weight });
                edges[j].push(WeightedEdge { to: i as u32, weight });
            }
        }

        let edge_count: usize = edges.iter().map(Vec::len).sum();
        debug!(
            triangles = tris.len(),
            edges = edge_count / 2,
            "built adjacency graph"
        );

        Self { edges }
    }

    /// Number of nodes (equals the mesh's triangle count).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Neighbors of a triangle, in discovery order.
    pub fn neighbors(&self, tri: u32) -> &[WeightedEdge] {
        self.edges
            .get(tri as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn shared_vertices(a: &[u32; 3], b: &[u32; 3]) -> usize {
    a.iter().filter(|i| b.contains(i)).count()
}

fn well_formed(mesh: &NavMesh, tri: &[u32; 3]) -> bool {
    tri.iter().all(|&i| (i as usize) < mesh.vertex_count())
        && tri[0] != tri[1]
        && tri[1] != tri[2]
        && tri[0] != tri[2]
}
