use thiserror::Error;

/// Failures surfaced by route resolution.
///
/// None of these are retried; the caller decides what a miss means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("start point is outside the mesh")]
    StartNotInMesh,
    #[error("end point is outside the mesh")]
    EndNotInMesh,
    #[error("start point is inside a blocked triangle")]
    StartBlocked,
    #[error("end point is inside a blocked triangle")]
    EndBlocked,
    #[error("no corridor connects the source and destination triangles")]
    Unreachable,
    /// Consecutive corridor triangles that do not share an edge. This is a
    /// caller error; nothing upstream attempts recovery.
    #[error("corridor triangles {a} and {b} do not share an edge")]
    IllegalTriangleList { a: u32, b: u32 },
}

/// Failures surfaced by the indexed heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("triangle {0} is already queued")]
    DuplicateKey(u32),
}
