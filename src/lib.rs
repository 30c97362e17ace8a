//! A minimal CPU software rasterizer.
//!
//! Converts 3D polygonal meshes into a 2D pixel buffer using only CPU-side
//! geometry math and pixel plotting - line drawing, triangle filling (flat
//! and color-interpolated), bounding boxes and point-in-triangle tests over
//! a raw row-major buffer. SDL2 is used solely to put the finished buffer on
//! screen.
//!
//! # Quick Start
//!
//! ```ignore
//! use wirerast::prelude::*;
//!
//! let mesh = Mesh::from_obj("models/cube.obj")?;
//! let mut renderer = Renderer::new(800, 600, mesh);
//! renderer.render();
//! renderer.surface().save_png("frame.png")?;
//! ```

pub mod colors;
pub mod geometry;
pub mod math;
pub mod mesh;
pub mod present;
pub mod raster;
pub mod renderer;
pub mod surface;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use mesh::{Face, LoadError, Mesh};
pub use renderer::{RenderMode, Renderer};
pub use surface::Surface;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wirerast::prelude::*;
/// ```
pub mod prelude {
    // Colors
    pub use crate::colors::{Color, ColorF};

    // Geometry
    pub use crate::geometry::{
        bounding_box, is_in_triangle, is_in_triangle_vector, triangle_bounding_box,
    };

    // Math
    pub use crate::math::box2::Box2;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Mesh
    pub use crate::mesh::{Face, LoadError, Mesh};

    // Rasterization
    pub use crate::raster::{
        draw_line, draw_line_interpolated, draw_line_safe, draw_line_safe_interpolated, fill_rect,
        fill_triangle, fill_triangle_interpolated,
    };
    pub use crate::surface::Surface;

    // Rendering & presentation
    pub use crate::present::{present_frame, PresentationSink};
    pub use crate::renderer::{RenderMode, Renderer};
    pub use crate::window::{Window, WindowEvent, WINDOW_HEIGHT, WINDOW_WIDTH};
}
