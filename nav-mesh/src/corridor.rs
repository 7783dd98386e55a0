use nav_geom::Vec2;

use crate::error::RouteError;
use crate::mesh::NavMesh;

/// One endpoint of a portal: a vertex id plus its resolved position.
///
/// The id is what the funnel's restart rule compares; the goal endpoint sits
/// at the synthetic one-past-the-end id so it can never collide with a mesh
/// vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalVertex {
    pub index: u32,
    pub point: Vec2,
}

/// Shared edge between two consecutive corridor triangles, endpoints in
/// extraction order.
///
/// Which endpoint is "left" and which is "right" is decided per portal by
/// the funnel pass, so extraction does not depend on triangle winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portal {
    pub a: PortalVertex,
    pub b: PortalVertex,
}

/// Collapse a corridor into its shared-edge sequence, terminated by the
/// degenerate portal at `end`.
pub fn portals(mesh: &NavMesh, corridor: &[u32], end: Vec2) -> Result<Vec<Portal>, RouteError> {
    let mut out = Vec::new();
    portals_into(mesh, corridor, end, &mut out)?;
    Ok(out)
}

pub(crate) fn portals_into(
    mesh: &NavMesh,
    corridor: &[u32],
    end: Vec2,
    out: &mut Vec<Portal>,
) -> Result<(), RouteError> {
    out.clear();
    out.reserve(corridor.len());

    for w in corridor.windows(2) {
        let (ta, tb) = (w[0], w[1]);
        let next = mesh.triangle(tb);
        let mut shared = [0u32; 2];
        let mut found = 0usize;
        for &i in &mesh.triangle(ta) {
            if next.contains(&i) {
                if found < 2 {
                    shared[found] = i;
                }
                found += 1;
            }
        }
        if found != 2 {
            return Err(RouteError::IllegalTriangleList { a: ta, b: tb });
        }
        out.push(Portal {
            a: portal_vertex(mesh, shared[0]),
            b: portal_vertex(mesh, shared[1]),
        });
    }

    let end_vertex = PortalVertex {
        index: mesh.vertex_count() as u32,
        point: end,
    };
    out.push(Portal {
        a: end_vertex,
        b: end_vertex,
    });
    Ok(())
}

fn portal_vertex(mesh: &NavMesh, index: u32) -> PortalVertex {
    PortalVertex {
        index,
        point: mesh.vertices()[index as usize].pos(),
    }
}
