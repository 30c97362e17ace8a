//! Rasterization primitives: everything that turns geometry into pixel
//! writes on a [`crate::surface::Surface`].

pub mod line;
pub mod triangle;

pub use line::{draw_line, draw_line_interpolated, draw_line_safe, draw_line_safe_interpolated};
pub use triangle::{fill_rect, fill_triangle, fill_triangle_interpolated};
