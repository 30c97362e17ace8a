//! Line rasterization.
//!
//! Lines are stepped incrementally along their major axis with integer
//! rounding for the minor axis, so every octant is handled uniformly and no
//! per-pixel float round-trip is needed. Iteration is canonicalized along the
//! major axis, which makes the plotted pixel set independent of endpoint
//! order.
//!
//! Each drawing function takes a `checked` flag selecting the silent-drop
//! bounds guard ([`Surface::set_pixel`]) or the raw write
//! ([`Surface::set_pixel_unchecked`]) for every plotted point. The `_safe`
//! variants validate both endpoints up front and draw nothing if either lies
//! outside the surface, so they can use raw writes throughout.

use crate::colors::{Color, ColorF};
use crate::math::vec2::Vec2;
use crate::surface::Surface;

/// Division rounding half away from zero. `d` must be positive.
#[inline]
fn div_round(n: i64, d: i64) -> i64 {
    if n >= 0 {
        (n + d / 2) / d
    } else {
        -((d / 2 - n) / d)
    }
}

/// Walk every pixel of the segment p0->p1, invoking `visit(x, y, t)` where
/// `t` is the interpolation parameter relative to p0 (0.0 at p0, 1.0 at p1).
///
/// A zero-length segment visits its single point once with `t = 0`.
fn walk_line<F: FnMut(i32, i32, f32)>(p0: Vec2<i32>, p1: Vec2<i32>, mut visit: F) {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;

    if dx == 0 && dy == 0 {
        visit(p0.x, p0.y, 0.0);
        return;
    }

    if dx.abs() >= dy.abs() {
        // X-major: canonicalize to left-to-right so both endpoint orders
        // produce the identical pixel set, then undo the flip in t.
        let (start, end, flipped) = if dx >= 0 {
            (p0, p1, false)
        } else {
            (p1, p0, true)
        };
        let steps = end.x - start.x;
        let delta = end.y - start.y;
        for i in 0..=steps {
            let y = start.y + div_round(i as i64 * delta as i64, steps as i64) as i32;
            let t = i as f32 / steps as f32;
            visit(start.x + i, y, if flipped { 1.0 - t } else { t });
        }
    } else {
        // Y-major: canonicalize top-to-bottom.
        let (start, end, flipped) = if dy >= 0 {
            (p0, p1, false)
        } else {
            (p1, p0, true)
        };
        let steps = end.y - start.y;
        let delta = end.x - start.x;
        for i in 0..=steps {
            let x = start.x + div_round(i as i64 * delta as i64, steps as i64) as i32;
            let t = i as f32 / steps as f32;
            visit(x, start.y + i, if flipped { 1.0 - t } else { t });
        }
    }
}

/// Draw a flat-colored segment between two pixel coordinates, inclusive.
pub fn draw_line(surface: &mut Surface, p0: Vec2<i32>, p1: Vec2<i32>, color: Color, checked: bool) {
    if checked {
        walk_line(p0, p1, |x, y, _| surface.set_pixel(x, y, color));
    } else {
        walk_line(p0, p1, |x, y, _| surface.set_pixel_unchecked(x, y, color));
    }
}

/// Draw a segment whose color blends linearly from `color_start` at p0 to
/// `color_end` at p1. The endpoint pixels receive the endpoint colors
/// exactly.
pub fn draw_line_interpolated(
    surface: &mut Surface,
    p0: Vec2<i32>,
    p1: Vec2<i32>,
    color_start: ColorF,
    color_end: ColorF,
    checked: bool,
) {
    if checked {
        walk_line(p0, p1, |x, y, t| {
            surface.set_pixel(x, y, color_start.lerp(color_end, t).to_color());
        });
    } else {
        walk_line(p0, p1, |x, y, t| {
            surface.set_pixel_unchecked(x, y, color_start.lerp(color_end, t).to_color());
        });
    }
}

/// Draw a flat-colored segment only if both endpoints lie on the surface;
/// otherwise the whole call is a no-op. Rejecting the call outright avoids
/// partial lines at the frame edge.
///
/// Endpoint containment implies every stepped pixel is in bounds (the minor
/// coordinate never leaves the endpoint interval), so the raw write path is
/// used for the walk.
pub fn draw_line_safe(surface: &mut Surface, p0: Vec2<i32>, p1: Vec2<i32>, color: Color) {
    if !surface.in_bounds(p0.x, p0.y) || !surface.in_bounds(p1.x, p1.y) {
        return;
    }
    draw_line(surface, p0, p1, color, false);
}

/// Interpolated-color counterpart of [`draw_line_safe`].
pub fn draw_line_safe_interpolated(
    surface: &mut Surface,
    p0: Vec2<i32>,
    p1: Vec2<i32>,
    color_start: ColorF,
    color_end: ColorF,
) {
    if !surface.in_bounds(p0.x, p0.y) || !surface.in_bounds(p1.x, p1.y) {
        return;
    }
    draw_line_interpolated(surface, p0, p1, color_start, color_end, false);
}
