//! Geometric predicates for rasterization.
//!
//! The inside/outside test exists in two independent implementations:
//!
//! - [`is_in_triangle`]: sign agreement of the three edge cross products,
//!   computed in integer arithmetic (exact). Points exactly on an edge count
//!   as inside, so triangles sharing an edge rasterize without gaps.
//! - [`is_in_triangle_vector`]: barycentric coordinates solved from dot
//!   products in floating point, with a small boundary tolerance.
//!
//! Both must agree on non-degenerate, non-boundary inputs; keeping both lets
//! them cross-check each other's edge cases in tests.

use crate::math::box2::Box2;
use crate::math::vec2::Vec2;

/// Tolerance for the floating-point barycentric inside test.
const EPSILON: f32 = 1e-6;

/// Edge function: the 2D cross product (b - a) x (p - a).
///
/// - Positive: `p` is to the left of edge a->b (counter-clockwise)
/// - Negative: `p` is to the right (clockwise)
/// - Zero: `p` lies exactly on the line through a and b
///
/// Evaluated at the three triangle vertices in order, it also gives twice the
/// triangle's signed area. Widened to i64 so coordinate products cannot
/// overflow.
#[inline]
pub fn edge_function(a: Vec2<i32>, b: Vec2<i32>, p: Vec2<i32>) -> i64 {
    let abx = (b.x - a.x) as i64;
    let aby = (b.y - a.y) as i64;
    let apx = (p.x - a.x) as i64;
    let apy = (p.y - a.y) as i64;
    apx * aby - apy * abx
}

/// Point-in-triangle test via edge cross-product signs.
///
/// Inside iff the three edge functions carry no opposing signs; zeros count
/// as inside. Works for both windings. For a degenerate (collinear) triangle
/// every cross product is zero, so points on the shared line report inside --
/// the fill routines reject zero-area triangles before ever calling this.
#[inline]
pub fn is_in_triangle(p: Vec2<i32>, a: Vec2<i32>, b: Vec2<i32>, c: Vec2<i32>) -> bool {
    let d0 = edge_function(a, b, p);
    let d1 = edge_function(b, c, p);
    let d2 = edge_function(c, a, p);

    let has_neg = d0 < 0 || d1 < 0 || d2 < 0;
    let has_pos = d0 > 0 || d1 > 0 || d2 > 0;
    !(has_neg && has_pos)
}

/// Point-in-triangle test via barycentric coordinates (vector method).
///
/// Solves for (u, v) in `p - a = u * (c - a) + v * (b - a)` using dot
/// products; inside iff `u >= 0`, `v >= 0` and `u + v <= 1`, all within a
/// small tolerance. Degenerate triangles report outside.
pub fn is_in_triangle_vector(p: Vec2<i32>, a: Vec2<i32>, b: Vec2<i32>, c: Vec2<i32>) -> bool {
    let (v0x, v0y) = ((c.x - a.x) as f32, (c.y - a.y) as f32);
    let (v1x, v1y) = ((b.x - a.x) as f32, (b.y - a.y) as f32);
    let (v2x, v2y) = ((p.x - a.x) as f32, (p.y - a.y) as f32);

    let dot00 = v0x * v0x + v0y * v0y;
    let dot01 = v0x * v1x + v0y * v1y;
    let dot02 = v0x * v2x + v0y * v2y;
    let dot11 = v1x * v1x + v1y * v1y;
    let dot12 = v1x * v2x + v1y * v2y;

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() < EPSILON {
        return false;
    }
    let inv_denom = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    u >= -EPSILON && v >= -EPSILON && u + v <= 1.0 + EPSILON
}

/// Area-ratio barycentric weights of `p` with respect to triangle (a, b, c),
/// in vertex order. Consistent with the sign-based inside test: each weight
/// is the edge function opposite a vertex divided by the full signed area.
/// Returns `None` for a zero-area triangle.
pub fn barycentric_weights(
    p: Vec2<i32>,
    a: Vec2<i32>,
    b: Vec2<i32>,
    c: Vec2<i32>,
) -> Option<[f32; 3]> {
    let area = edge_function(a, b, c);
    if area == 0 {
        return None;
    }
    let inv_area = 1.0 / area as f32;
    Some([
        edge_function(b, c, p) as f32 * inv_area,
        edge_function(c, a, p) as f32 * inv_area,
        edge_function(a, b, p) as f32 * inv_area,
    ])
}

fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Tight axis-aligned bounding box of a point set, or `None` when empty.
/// Single scan tracking the four running extrema.
pub fn bounding_box<T: Copy + PartialOrd>(points: &[Vec2<T>]) -> Option<Box2<T>> {
    let first = *points.first()?;
    let mut top_left = first;
    let mut bottom_right = first;
    for &p in &points[1..] {
        top_left.x = min(top_left.x, p.x);
        top_left.y = min(top_left.y, p.y);
        bottom_right.x = max(bottom_right.x, p.x);
        bottom_right.y = max(bottom_right.y, p.y);
    }
    Some(Box2::new(top_left, bottom_right))
}

/// Bounding box of exactly three points. The triangle fill uses this instead
/// of the generic point-set path to keep its setup allocation-free.
pub fn triangle_bounding_box<T: Copy + PartialOrd>(
    p0: Vec2<T>,
    p1: Vec2<T>,
    p2: Vec2<T>,
) -> Box2<T> {
    Box2::new(
        Vec2::new(min(min(p0.x, p1.x), p2.x), min(min(p0.y, p1.y), p2.y)),
        Vec2::new(max(max(p0.x, p1.x), p2.x), max(max(p0.y, p1.y), p2.y)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const A: Vec2<i32> = Vec2::new(0, 0);
    const B: Vec2<i32> = Vec2::new(10, 0);
    const C: Vec2<i32> = Vec2::new(0, 10);

    #[test]
    fn interior_point_is_inside_for_both_methods() {
        let p = Vec2::new(1, 1);
        assert!(is_in_triangle(p, A, B, C));
        assert!(is_in_triangle_vector(p, A, B, C));
    }

    #[test]
    fn exterior_point_is_outside_for_both_methods() {
        let p = Vec2::new(20, 20);
        assert!(!is_in_triangle(p, A, B, C));
        assert!(!is_in_triangle_vector(p, A, B, C));
    }

    #[test]
    fn edge_point_counts_as_inside() {
        // Midpoint of the a->b edge
        assert!(is_in_triangle(Vec2::new(5, 0), A, B, C));
        // Vertex itself
        assert!(is_in_triangle(A, A, B, C));
    }

    #[test]
    fn winding_does_not_matter() {
        let p = Vec2::new(2, 3);
        assert!(is_in_triangle(p, A, B, C));
        assert!(is_in_triangle(p, A, C, B));
        assert!(is_in_triangle_vector(p, A, C, B));
    }

    #[test]
    fn methods_agree_away_from_the_boundary() {
        let (a, b, c) = (Vec2::new(3, 2), Vec2::new(27, 9), Vec2::new(11, 24));
        for y in -5..30 {
            for x in -5..35 {
                let p = Vec2::new(x, y);
                // Skip exact-boundary points; bit-for-bit agreement there is
                // not required.
                let on_edge = edge_function(a, b, p) == 0
                    || edge_function(b, c, p) == 0
                    || edge_function(c, a, p) == 0;
                if on_edge {
                    continue;
                }
                assert_eq!(
                    is_in_triangle(p, a, b, c),
                    is_in_triangle_vector(p, a, b, c),
                    "disagreement at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn vector_method_rejects_degenerate_triangle() {
        let p = Vec2::new(5, 5);
        assert!(!is_in_triangle_vector(
            p,
            Vec2::new(0, 0),
            Vec2::new(5, 5),
            Vec2::new(10, 10)
        ));
    }

    #[test]
    fn weights_sum_to_one_and_select_vertices() {
        let w = barycentric_weights(Vec2::new(2, 3), A, B, C).unwrap();
        assert_relative_eq!(w[0] + w[1] + w[2], 1.0, epsilon = 1e-6);

        let at_b = barycentric_weights(B, A, B, C).unwrap();
        assert_relative_eq!(at_b[1], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn weights_are_none_for_zero_area() {
        assert!(barycentric_weights(A, A, A, B).is_none());
    }

    #[test]
    fn triangle_bounding_box_is_tight() {
        let bounds = triangle_bounding_box(A, B, C);
        assert_eq!(bounds.top_left, Vec2::new(0, 0));
        assert_eq!(bounds.bottom_right, Vec2::new(10, 10));
    }

    #[test]
    fn point_set_bounding_box() {
        let points = [
            Vec2::new(4, -2),
            Vec2::new(-1, 7),
            Vec2::new(3, 3),
            Vec2::new(9, 0),
        ];
        let bounds = bounding_box(&points).unwrap();
        assert_eq!(bounds.top_left, Vec2::new(-1, -2));
        assert_eq!(bounds.bottom_right, Vec2::new(9, 7));

        assert!(bounding_box::<i32>(&[]).is_none());
    }

    #[test]
    fn bounding_box_works_for_floats() {
        let points = [Vec2::new(0.5, 1.5), Vec2::new(-0.5, 2.5)];
        let bounds = bounding_box(&points).unwrap();
        assert_eq!(bounds.top_left, Vec2::new(-0.5, 1.5));
        assert_eq!(bounds.bottom_right, Vec2::new(0.5, 2.5));
    }
}
