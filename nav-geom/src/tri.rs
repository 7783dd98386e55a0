use crate::Vec2;

/// z-component of the 3D cross product of two planar vectors.
///
/// Positive when `b` lies counter-clockwise of `a` under a Y-up convention;
/// mirrored under Y-down. Callers only compare signs within one mesh, so
/// either convention works as long as it is not mixed.
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Twice the signed area of triangle `abc`.
pub fn tri_area2(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    cross(b - a, c - a)
}

/// Average of the three corners.
pub fn centroid(tri: [Vec2; 3]) -> Vec2 {
    (tri[0] + tri[1] + tri[2]) / 3.0
}

/// Same-side containment test.
///
/// Tolerant of either winding; boundary points count as inside.
pub fn point_in_triangle(p: Vec2, tri: [Vec2; 3]) -> bool {
    let eps = 1e-6;
    let ab = tri_area2(tri[0], tri[1], p);
    let bc = tri_area2(tri[1], tri[2], p);
    let ca = tri_area2(tri[2], tri[0], p);
    let has_neg = ab < -eps || bc < -eps || ca < -eps;
    let has_pos = ab > eps || bc > eps || ca > eps;
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_sign_flips_with_order() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert!(cross(a, b) > 0.0);
        assert!(cross(b, a) < 0.0);
        assert_eq!(cross(a, a * 2.0), 0.0);
    }

    #[test]
    fn containment_ignores_winding() {
        let ccw = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let cw = [ccw[0], ccw[2], ccw[1]];
        let p = Vec2::new(0.25, 0.25);
        assert!(point_in_triangle(p, ccw));
        assert!(point_in_triangle(p, cw));
    }

    #[test]
    fn boundary_counts_as_inside() {
        let tri = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        assert!(point_in_triangle(Vec2::new(0.5, 0.5), tri));
        assert!(point_in_triangle(Vec2::new(0.0, 0.0), tri));
        assert!(!point_in_triangle(Vec2::new(0.6, 0.6), tri));
        assert!(!point_in_triangle(Vec2::new(-0.1, 0.5), tri));
    }

    #[test]
    fn centroid_averages_corners() {
        let tri = [Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(0.0, 3.0)];
        assert_eq!(centroid(tri), Vec2::new(1.0, 1.0));
    }
}
