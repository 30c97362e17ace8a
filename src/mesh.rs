//! Mesh storage and OBJ loading.
//!
//! A [`Mesh`] is an ordered list of 3D vertex positions plus an ordered list
//! of triangular faces indexing into it. Face indices are validated once at
//! construction, so the drawing code can index vertices directly without
//! per-face checks.

use std::fmt;
use std::path::Path;

use crate::math::vec3::Vec3;

/// A triangular face: three 0-based indices into the vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }
}

#[derive(Debug)]
pub enum LoadError {
    /// The OBJ parser rejected the file (missing, malformed, etc.).
    Obj(tobj::LoadError),
    /// A face references a vertex index outside the vertex list.
    InvalidFaceIndex {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "failed to parse OBJ file: {e}"),
            LoadError::InvalidFaceIndex {
                face,
                index,
                vertex_count,
            } => write!(
                f,
                "face {face} references vertex index {index}, but the mesh has {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
            LoadError::InvalidFaceIndex { .. } => None,
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

#[derive(Debug)]
pub struct Mesh {
    vertices: Vec<Vec3<f32>>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh from vertices and faces, rejecting any face whose index
    /// falls outside the vertex list.
    pub fn new(vertices: Vec<Vec3<f32>>, faces: Vec<Face>) -> Result<Self, LoadError> {
        let vertex_count = vertices.len();
        for (i, face) in faces.iter().enumerate() {
            for index in [face.a, face.b, face.c] {
                if index >= vertex_count {
                    return Err(LoadError::InvalidFaceIndex {
                        face: i,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Load a mesh from an OBJ file.
    ///
    /// All objects in the file are merged into a single mesh; faces are
    /// triangulated by the parser. The on-disk 1-based indices arrive
    /// already rebased to 0.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj(
            path.as_ref(),
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for model in &models {
            let base = vertices.len();
            for pos in model.mesh.positions.chunks_exact(3) {
                vertices.push(Vec3::new(pos[0], pos[1], pos[2]));
            }
            for idx in model.mesh.indices.chunks_exact(3) {
                faces.push(Face::new(
                    base + idx[0] as usize,
                    base + idx[1] as usize,
                    base + idx[2] as usize,
                ));
            }
        }

        Self::new(vertices, faces)
    }

    pub fn vertices(&self) -> &[Vec3<f32>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}
