use glam::{Vec2, Vec3};

/// Triangular face as index triples into the model arrays. Indices are
/// 0-based; loaders convert from the 1-based source format. A face without
/// texcoord indices is shaded flat even when a texture is bound.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Face {
    pub vertices: [usize; 3],
    pub texcoords: Option<[usize; 3]>,
}

/// In-memory mesh, immutable after construction and consumed read-only by
/// the renderer. Index validity is checked per face at render time.
#[derive(Debug, Clone)]
pub struct Model {
    vertices: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    faces: Vec<Face>,
}

impl Model {
    pub fn new(vertices: Vec<Vec3>, texcoords: Vec<Vec2>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            texcoords,
            faces,
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn texcoords(&self) -> &[Vec2] {
        &self.texcoords
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).copied()
    }

    pub fn texcoord(&self, index: usize) -> Option<Vec2> {
        self.texcoords.get(index).copied()
    }
}
