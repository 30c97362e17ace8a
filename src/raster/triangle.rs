//! Triangle and rectangle filling.
//!
//! Triangles are filled by scanning their tight bounding box, clipped to the
//! surface extent, and classifying each pixel with the sign-based inside test
//! from [`crate::geometry`]. The interpolated variant derives area-ratio
//! barycentric weights from the same integer edge functions as the inside
//! test, so its coverage is pixel-identical to the flat fill.
//!
//! A zero-area (collinear) triangle fills nothing: a degenerate shape has no
//! interior.

use crate::colors::{Color, ColorF};
use crate::geometry::{edge_function, is_in_triangle, triangle_bounding_box};
use crate::math::box2::Box2;
use crate::math::vec2::Vec2;
use crate::surface::Surface;

/// Intersect an inclusive pixel box with the surface extent.
/// Returns `(min_x, min_y, max_x, max_y)`, or `None` if nothing remains.
fn clip_to_surface(surface: &Surface, bounds: Box2<i32>) -> Option<(i32, i32, i32, i32)> {
    let min_x = bounds.top_left.x.max(0);
    let min_y = bounds.top_left.y.max(0);
    let max_x = bounds.bottom_right.x.min(surface.width() as i32 - 1);
    let max_y = bounds.bottom_right.y.min(surface.height() as i32 - 1);
    (min_x <= max_x && min_y <= max_y).then_some((min_x, min_y, max_x, max_y))
}

/// Fill a triangle with a single color.
pub fn fill_triangle(
    surface: &mut Surface,
    p0: Vec2<i32>,
    p1: Vec2<i32>,
    p2: Vec2<i32>,
    color: Color,
) {
    if edge_function(p0, p1, p2) == 0 {
        return;
    }
    let Some((min_x, min_y, max_x, max_y)) =
        clip_to_surface(surface, triangle_bounding_box(p0, p1, p2))
    else {
        return;
    };

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if is_in_triangle(Vec2::new(x, y), p0, p1, p2) {
                surface.set_pixel_unchecked(x, y, color);
            }
        }
    }
}

/// Fill a triangle, blending the three vertex colors across its interior by
/// barycentric weight. Pixels exactly on an edge or vertex receive the
/// boundary blend (a vertex pixel gets that vertex's color).
pub fn fill_triangle_interpolated(
    surface: &mut Surface,
    p0: Vec2<i32>,
    p1: Vec2<i32>,
    p2: Vec2<i32>,
    col0: ColorF,
    col1: ColorF,
    col2: ColorF,
) {
    let area = edge_function(p0, p1, p2);
    if area == 0 {
        return;
    }
    let Some((min_x, min_y, max_x, max_y)) =
        clip_to_surface(surface, triangle_bounding_box(p0, p1, p2))
    else {
        return;
    };
    let inv_area = 1.0 / area as f32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x, y);
            let w0 = edge_function(p1, p2, p);
            let w1 = edge_function(p2, p0, p);
            let w2 = edge_function(p0, p1, p);

            // Same classification as the sign test, for either winding
            let inside = if area > 0 {
                w0 >= 0 && w1 >= 0 && w2 >= 0
            } else {
                w0 <= 0 && w1 <= 0 && w2 <= 0
            };

            if inside {
                let l0 = w0 as f32 * inv_area;
                let l1 = w1 as f32 * inv_area;
                let l2 = w2 as f32 * inv_area;
                let color = (col0 * l0 + col1 * l1 + col2 * l2).to_color();
                surface.set_pixel_unchecked(x, y, color);
            }
        }
    }
}

/// Fill an inclusive rectangle, clipped to the surface.
pub fn fill_rect(surface: &mut Surface, rect: Box2<i32>, color: Color) {
    let Some((min_x, min_y, max_x, max_y)) = clip_to_surface(surface, rect) else {
        return;
    };
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            surface.set_pixel_unchecked(x, y, color);
        }
    }
}
