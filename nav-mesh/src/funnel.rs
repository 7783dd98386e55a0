use nav_geom::{cross, Vec2};

use crate::corridor::{Portal, PortalVertex};

/// Funnel / apex pass: collapse a portal sequence into the minimum-bend
/// polyline through it, returning interior apex points only (the caller owns
/// the start and end).
///
/// Portal endpoints are classified left/right per portal against the current
/// apex, so triangle winding never matters. All sign tests are strict: a
/// zero cross product (collinear edges, grazing contact) neither tightens
/// nor advances the funnel, so ties cannot emit spurious apexes.
///
/// The pass cannot fail. A malformed portal sequence (consecutive portals
/// not sharing a vertex) produces a geometrically wrong polyline, not an
/// error; corridor construction upstream owns well-formedness.
pub fn smooth(portals: &[Portal], start: Vec2) -> Vec<Vec2> {
    let mut out = Vec::new();
    smooth_into(portals, start, &mut out);
    out
}

/// Append the interior apex points to `out`.
pub(crate) fn smooth_into(portals: &[Portal], start: Vec2, out: &mut Vec<Vec2>) {
    if portals.is_empty() {
        return;
    }

    let mut apex = start;
    let (mut left, mut right) = classify(apex, &portals[0]);
    let (mut left_pos, mut right_pos) = (0usize, 0usize);

    let mut k = 1;
    while k < portals.len() {
        let (new_left, new_right) = classify(apex, &portals[k]);

        // The new right endpoint crossed the left funnel edge: the left
        // vertex is the next apex.
        if cross(left.point - apex, new_right.point - apex) > 0.0 {
            out.push(left.point);
            apex = left.point;
            match reseed(portals, apex, left.index, left_pos + 1) {
                Some((l, r, pos)) => {
                    left = l;
                    right = r;
                    left_pos = pos;
                    right_pos = pos;
                    k = pos + 1;
                }
                None => return,
            }
            continue;
        }

        // Mirror image: the new left endpoint crossed the right funnel edge.
        if cross(right.point - apex, new_left.point - apex) < 0.0 {
            out.push(right.point);
            apex = right.point;
            match reseed(portals, apex, right.index, right_pos + 1) {
                Some((l, r, pos)) => {
                    left = l;
                    right = r;
                    left_pos = pos;
                    right_pos = pos;
                    k = pos + 1;
                }
                None => return,
            }
            continue;
        }

        // No crossover: tighten whichever edges narrow.
        if cross(left.point - apex, new_left.point - apex) < 0.0 {
            left = new_left;
            left_pos = k;
        }
        if cross(right.point - apex, new_right.point - apex) > 0.0 {
            right = new_right;
            right_pos = k;
        }

        k += 1;
    }
}

/// Order a portal's endpoints as (left, right) as seen from `origin`.
///
/// Post-condition: `cross(left - origin, right - origin) <= 0`.
fn classify(origin: Vec2, portal: &Portal) -> (PortalVertex, PortalVertex) {
    let va = portal.a.point - origin;
    let vb = portal.b.point - origin;
    if cross(va, vb) > 0.0 {
        (portal.b, portal.a)
    } else {
        (portal.a, portal.b)
    }
}

/// After an apex advance, find the first portal past `from` whose endpoints
/// are both distinct from the apex vertex (portals sharing the apex are
/// trivially visible from it) and re-seed the funnel from it.
///
/// Each advance moves the funnel seed strictly past the portal that supplied
/// the apex, so the number of advances is bounded by the portal count and
/// the pass terminates.
fn reseed(
    portals: &[Portal],
    apex: Vec2,
    apex_index: u32,
    from: usize,
) -> Option<(PortalVertex, PortalVertex, usize)> {
    let mut i = from;
    while i < portals.len() {
        let p = &portals[i];
        if p.a.index != apex_index && p.b.index != apex_index {
            let (l, r) = classify(apex, p);
            return Some((l, r, i));
        }
        i += 1;
    }
    None
}
