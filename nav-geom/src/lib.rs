//! Planar geometry primitives for navigation queries.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod point;
pub mod tri;

pub use point::{Point, Vec2};
pub use tri::{centroid, cross, point_in_triangle, tri_area2};
