//! Frame rendering: owns the pixel surface and the mesh and redraws whole
//! frames from them, one draw mode at a time. No globals; everything the
//! render loop needs lives in the [`Renderer`].

use crate::colors::{self, Color, ColorF};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::raster;
use crate::surface::Surface;

/// What gets drawn for each face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Face edges only (key: 1)
    #[default]
    Wireframe,
    /// Solid single-color fill (key: 2)
    Filled,
    /// Per-vertex colors blended across each face (key: 3)
    Shaded,
}

pub struct Renderer {
    surface: Surface,
    mesh: Mesh,
    mode: RenderMode,
}

/// Map a model-space vertex in [-1, 1] to pixel coordinates.
///
/// Fixed axis-drop projection: X and Y scale to the surface, Y is inverted
/// (rows grow downward), Z is dropped. No perspective.
fn project(width: u32, height: u32, v: Vec3<f32>) -> Vec2<i32> {
    Vec2::new(
        ((v.x + 1.0) * (width as f32 / 2.0)) as i32,
        ((-v.y + 1.0) * (height as f32 / 2.0)) as i32,
    )
}

/// Derive a vertex color from a position in [-1, 1] space, one axis per
/// channel.
fn vertex_color(v: Vec3<f32>) -> ColorF {
    ColorF::rgb(
        (v.x + 1.0) / 2.0,
        (v.y + 1.0) / 2.0,
        (v.z + 1.0) / 2.0,
    )
}

impl Renderer {
    pub fn new(width: u32, height: u32, mesh: Mesh) -> Self {
        Self {
            surface: Surface::new(width, height),
            mesh,
            mode: RenderMode::default(),
        }
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Recreate the surface at new dimensions. The next [`Self::render`]
    /// call repaints it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = Surface::new(width, height);
    }

    /// Clear and redraw the whole frame in the current mode.
    pub fn render(&mut self) {
        let Self {
            surface,
            mesh,
            mode,
        } = self;
        surface.clear(colors::BACKGROUND);
        match mode {
            RenderMode::Wireframe => draw_wireframe(surface, mesh, colors::WIREFRAME),
            RenderMode::Filled => draw_filled(surface, mesh, colors::FILL),
            RenderMode::Shaded => draw_shaded(surface, mesh),
        }
    }
}

fn projected_face(surface: &Surface, mesh: &Mesh, face_index: usize) -> [Vec2<i32>; 3] {
    let face = mesh.faces()[face_index];
    let vertices = mesh.vertices();
    let (w, h) = (surface.width(), surface.height());
    [
        project(w, h, vertices[face.a]),
        project(w, h, vertices[face.b]),
        project(w, h, vertices[face.c]),
    ]
}

/// Draw each face's three edges. Edges touching the frame boundary are
/// dropped whole by the safe line variant rather than drawn partially.
fn draw_wireframe(surface: &mut Surface, mesh: &Mesh, color: Color) {
    for i in 0..mesh.faces().len() {
        let [p0, p1, p2] = projected_face(surface, mesh, i);
        raster::draw_line_safe(surface, p0, p1, color);
        raster::draw_line_safe(surface, p1, p2, color);
        raster::draw_line_safe(surface, p2, p0, color);
    }
}

fn draw_filled(surface: &mut Surface, mesh: &Mesh, color: Color) {
    for i in 0..mesh.faces().len() {
        let [p0, p1, p2] = projected_face(surface, mesh, i);
        raster::fill_triangle(surface, p0, p1, p2, color);
    }
}

fn draw_shaded(surface: &mut Surface, mesh: &Mesh) {
    for i in 0..mesh.faces().len() {
        let face = mesh.faces()[i];
        let [p0, p1, p2] = projected_face(surface, mesh, i);
        let vertices = mesh.vertices();
        raster::fill_triangle_interpolated(
            surface,
            p0,
            p1,
            p2,
            vertex_color(vertices[face.a]),
            vertex_color(vertices[face.b]),
            vertex_color(vertices[face.c]),
        );
    }
}
