use nav_geom::Vec2;
use tracing::debug;

use crate::corridor::{portals_into, Portal};
use crate::dijkstra::{shortest_paths_into, ShortestPaths};
use crate::error::RouteError;
use crate::funnel;
use crate::graph::AdjacencyGraph;
use crate::heap::TriangleHeap;
use crate::mesh::NavMesh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smoothed polyline through the mesh. The first point is the requested
/// start and the last the requested end; everything between is a funnel
/// apex sitting on a mesh vertex.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavPath {
    pub points: Vec<Vec2>,
}

impl NavPath {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }
}

/// Reusable scratch buffers for route queries.
///
/// Avoids per-query allocation in hot paths; use one value per thread.
#[derive(Debug, Default)]
pub struct RouteQuery {
    heap: TriangleHeap,
    visited: Vec<bool>,
    paths: ShortestPaths,
    corridor: Vec<u32>,
    portals: Vec<Portal>,
}

/// Plan a smoothed path from `start` to `end`.
///
/// Locates both endpoints with a linear point-in-triangle scan, runs
/// Dijkstra over the dual graph, resolves the triangle corridor and pulls
/// it taut with the funnel pass.
pub fn route(
    mesh: &NavMesh,
    graph: &AdjacencyGraph,
    start: Vec2,
    end: Vec2,
) -> Result<NavPath, RouteError> {
    let mut query = RouteQuery::default();
    let mut out = NavPath::default();
    route_into(mesh, graph, start, end, &mut query, &mut out)?;
    Ok(out)
}

/// Allocation-reusing variant of [`route`].
pub fn route_into(
    mesh: &NavMesh,
    graph: &AdjacencyGraph,
    start: Vec2,
    end: Vec2,
    query: &mut RouteQuery,
    out: &mut NavPath,
) -> Result<(), RouteError> {
    out.points.clear();

    let src = mesh.find_triangle(start).ok_or(RouteError::StartNotInMesh)?;
    let dst = mesh.find_triangle(end).ok_or(RouteError::EndNotInMesh)?;
    if mesh.is_blocked(src) {
        return Err(RouteError::StartBlocked);
    }
    if mesh.is_blocked(dst) {
        return Err(RouteError::EndBlocked);
    }

    shortest_paths_into(
        graph,
        src,
        &mut query.heap,
        &mut query.visited,
        &mut query.paths,
    );
    query.paths.corridor_to_into(dst, &mut query.corridor)?;
    portals_into(mesh, &query.corridor, end, &mut query.portals)?;

    out.points.push(start);
    funnel::smooth_into(&query.portals, start, &mut out.points);
    out.points.push(end);

    debug!(
        src_tri = src,
        dst_tri = dst,
        corridor = query.corridor.len(),
        corners = out.points.len(),
        "route resolved"
    );

    Ok(())
}
