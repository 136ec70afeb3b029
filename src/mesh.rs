//! Triangle meshes and their loaders.
//!
//! Two on-disk formats are understood:
//!
//! - `.tri`: a bare array of little-endian `f32`, nine per triangle
//!   (three vertices, xyz each), no header.
//! - `.obj`: Wavefront OBJ, read with `tobj` and triangulated.

use std::fs;
use std::path::Path;

use log::trace;
use thiserror::Error;

use crate::math::vec3::Vec3;

const FLOATS_PER_TRIANGLE: usize = 9;
const BYTES_PER_TRIANGLE: usize = FLOATS_PER_TRIANGLE * std::mem::size_of::<f32>();

/// Error loading a mesh from disk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read mesh: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse OBJ: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("mesh data is {0} bytes, not a whole number of 36-byte triangles")]
    Truncated(usize),
    #[error("vertex index {0} is out of range")]
    BadIndex(u32),
    #[error("mesh contains no triangles")]
    Empty,
    #[error("unsupported mesh format {0:?} (expected .tri or .obj)")]
    UnsupportedFormat(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<[Vec3; 3]>,
}

impl Mesh {
    pub fn new(triangles: Vec<[Vec3; 3]>) -> Self {
        Self { triangles }
    }

    pub fn triangles(&self) -> &[[Vec3; 3]] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Loads a mesh, choosing the parser from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "tri" => Self::from_tri_file(path),
            "obj" => Self::from_obj(path),
            _ => Err(LoadError::UnsupportedFormat(ext)),
        }
    }

    pub fn from_tri_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let bytes = fs::read(path.as_ref())?;
        trace!("read {} bytes from {}", bytes.len(), path.as_ref().display());
        Self::from_tri_bytes(&bytes)
    }

    /// Parses the `.tri` layout from memory.
    pub fn from_tri_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        if bytes.len() % BYTES_PER_TRIANGLE != 0 {
            return Err(LoadError::Truncated(bytes.len()));
        }
        let floats: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        let triangles: Vec<[Vec3; 3]> = floats
            .chunks_exact(FLOATS_PER_TRIANGLE)
            .map(|t| {
                [
                    Vec3::from_slice(&t[0..3]),
                    Vec3::from_slice(&t[3..6]),
                    Vec3::from_slice(&t[6..9]),
                ]
            })
            .collect();
        if triangles.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self::new(triangles))
    }

    /// Serialises to the `.tri` layout.
    pub fn to_tri_bytes(&self) -> Vec<u8> {
        self.triangles
            .iter()
            .flatten()
            .flat_map(|v| [v.x, v.y, v.z])
            .flat_map(f32::to_le_bytes)
            .collect()
    }

    /// Loads every model in an OBJ file into one mesh.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj(path.as_ref(), &tobj::GPU_LOAD_OPTIONS)?;
        let mut triangles = Vec::new();
        for model in &models {
            let positions = &model.mesh.positions;
            let vertex = |i: u32| -> Result<Vec3, LoadError> {
                let base = i as usize * 3;
                positions
                    .get(base..base + 3)
                    .map(Vec3::from_slice)
                    .ok_or(LoadError::BadIndex(i))
            };
            for face in model.mesh.indices.chunks_exact(3) {
                triangles.push([vertex(face[0])?, vertex(face[1])?, vertex(face[2])?]);
            }
            trace!("obj model {:?}: {} indices", model.name, model.mesh.indices.len());
        }
        if triangles.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self::new(triangles))
    }

    /// A 2x2x2 cube centred on the origin.
    ///
    /// Each face is wound clockwise when looked at from outside, which after
    /// projection is the order the rasterizer fills; faces turned away from
    /// the viewer come out reversed and get culled.
    pub fn cube() -> Self {
        const V: [Vec3; 8] = [
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
        ];
        const FACES: [[usize; 3]; 12] = [
            // front (+z)
            [4, 5, 6],
            [4, 6, 7],
            // back (-z)
            [3, 2, 1],
            [3, 1, 0],
            // right (+x)
            [7, 6, 2],
            [7, 2, 3],
            // left (-x)
            [0, 1, 5],
            [0, 5, 4],
            // top (+y)
            [5, 1, 2],
            [5, 2, 6],
            // bottom (-y)
            [4, 7, 3],
            [4, 3, 0],
        ];
        Self::new(FACES.iter().map(|f| f.map(|i| V[i])).collect())
    }
}
