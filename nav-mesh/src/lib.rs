//! Triangulated navigation-mesh path planning.
//!
//! A [`NavMesh`] (vertices, triangle index triples, optional blocked set) is
//! compiled once into an [`AdjacencyGraph`] over triangle centroids. Per
//! query, Dijkstra produces a predecessor map, the triangle corridor is
//! resolved and collapsed into its shared-edge portals, and the funnel pass
//! pulls the corridor taut into a polyline.
//!
//! The crate is a pure library: no I/O, no threads, no interior mutability.
//! Independent queries against one mesh/graph pair may run on parallel
//! threads as long as each owns its scratch state.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod corridor;
pub mod dijkstra;
pub mod error;
pub mod funnel;
pub mod graph;
pub mod heap;
pub mod mesh;
pub mod route;

pub use corridor::{portals, Portal, PortalVertex};
pub use dijkstra::{shortest_paths, ShortestPaths};
pub use error::{HeapError, RouteError};
pub use graph::{AdjacencyGraph, WeightedEdge};
pub use heap::TriangleHeap;
pub use mesh::NavMesh;
pub use nav_geom::{Point, Vec2};
pub use route::{route, route_into, NavPath, RouteQuery};
