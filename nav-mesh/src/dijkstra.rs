use tracing::debug;

use crate::error::RouteError;
use crate::graph::AdjacencyGraph;
use crate::heap::TriangleHeap;

/// Predecessor and distance tables from one single-source run.
#[derive(Debug, Clone, Default)]
pub struct ShortestPaths {
    source: u32,
    prev: Vec<Option<u32>>,
    dist: Vec<u32>,
}

impl ShortestPaths {
    pub fn source(&self) -> u32 {
        self.source
    }

    /// Triangle immediately preceding `tri` on the shortest path from the
    /// source. `None` for the source itself and for unreachable triangles.
    pub fn predecessor(&self, tri: u32) -> Option<u32> {
        self.prev.get(tri as usize).copied().flatten()
    }

    /// Total corridor weight to `tri`, when reachable.
    pub fn distance(&self, tri: u32) -> Option<u32> {
        match self.dist.get(tri as usize) {
            Some(&d) if d != u32::MAX => Some(d),
            _ => None,
        }
    }

    /// Reconstruct the ordered triangle corridor `[source, .., dst]`.
    pub fn corridor_to(&self, dst: u32) -> Result<Vec<u32>, RouteError> {
        let mut corridor = Vec::new();
        self.corridor_to_into(dst, &mut corridor)?;
        Ok(corridor)
    }

    /// Allocation-reusing variant of [`ShortestPaths::corridor_to`].
    pub fn corridor_to_into(&self, dst: u32, out: &mut Vec<u32>) -> Result<(), RouteError> {
        out.clear();
        out.push(dst);
        if dst == self.source {
            return Ok(());
        }
        let mut cur = dst;
        while let Some(prev) = self.predecessor(cur) {
            out.push(prev);
            if prev == self.source {
                out.reverse();
                return Ok(());
            }
            cur = prev;
        }
        Err(RouteError::Unreachable)
    }
}

/// Classic Dijkstra over the triangle dual graph.
///
/// Every triangle is seeded into the indexed heap up front (the source at
/// distance zero, everything else at the `u32::MAX` sentinel); relaxations
/// go through `decrease_key`, and the visited test on pop filters anything
/// stale. Unreachable triangles keep the sentinel and no predecessor.
pub fn shortest_paths(graph: &AdjacencyGraph, src: u32) -> ShortestPaths {
    let mut heap = TriangleHeap::with_capacity(graph.len());
    let mut visited = Vec::new();
    let mut out = ShortestPaths::default();
    shortest_paths_into(graph, src, &mut heap, &mut visited, &mut out);
    out
}

pub(crate) fn shortest_paths_into(
    graph: &AdjacencyGraph,
    src: u32,
    heap: &mut TriangleHeap,
    visited: &mut Vec<bool>,
    out: &mut ShortestPaths,
) {
    let n = graph.len();
    out.source = src;
    out.prev.clear();
    out.prev.resize(n, None);
    out.dist.clear();
    out.dist.resize(n, u32::MAX);
    visited.clear();
    visited.resize(n, false);
    heap.clear();

    if (src as usize) < n {
        out.dist[src as usize] = 0;
    }

    for tri in 0..n as u32 {
        let pushed = heap.push(tri, out.dist[tri as usize]);
        debug_assert!(pushed.is_ok(), "heap was cleared above");
    }

    let mut settled = 0usize;
    while let Some((tri, _)) = heap.pop_min() {
        let u = tri as usize;
        if visited[u] {
            continue;
        }
        visited[u] = true;
        let base = out.dist[u];
        if base != u32::MAX {
            settled += 1;
        }

        for edge in graph.neighbors(tri) {
            let v = edge.to as usize;
            if visited[v] {
                continue;
            }
            // Saturating: relaxing from an unreached node must not wrap the
            // sentinel into a tiny distance.
            let alt = base.saturating_add(edge.weight);
            if alt < out.dist[v] {
                out.dist[v] = alt;
                out.prev[v] = Some(tri);
                heap.decrease_key(edge.to, alt);
            }
        }
    }

    debug!(source = src, reached = settled, "shortest-path pass");
}
