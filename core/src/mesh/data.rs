//! Flat triangle-mesh storage.

/// A raw triangle mesh: flat vertex positions and triangle indices.
///
/// Positions are stored as `[x0, y0, z0, x1, y1, z1, ...]`, one triple
/// per vertex; indices as flat triples into the position array, one
/// triple per triangle (counter-clockwise winding from the source).
/// This is the PLY reader's output and the geometry processor's working
/// set: positions are normalized in place, and all derived data
/// (normals, draw streams) is computed from these two arrays.
#[derive(Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions, three floats per vertex.
    pub positions: Vec<f32>,
    /// Triangle indices, three per face.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create a mesh from flat position and index arrays.
    pub fn new(positions: Vec<f32>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [
            self.indices[base],
            self.indices[base + 1],
            self.indices[base + 2],
        ]
    }

    /// Validate mesh shape invariants.
    ///
    /// Checks that the mesh is non-empty, that both arrays hold whole
    /// triples, and that every index references an existing vertex.
    pub fn validate(&self) -> Result<(), String> {
        if self.positions.is_empty() {
            return Err("mesh has no vertices".to_string());
        }
        if self.positions.len() % 3 != 0 {
            return Err(format!(
                "position array length {} is not a multiple of 3",
                self.positions.len()
            ));
        }
        if self.indices.is_empty() {
            return Err("mesh has no faces".to_string());
        }
        if self.indices.len() % 3 != 0 {
            return Err(format!(
                "index array length {} is not a multiple of 3",
                self.indices.len()
            ));
        }

        let vertex_count = self.vertex_count();
        for (i, &index) in self.indices.iter().enumerate() {
            if index as usize >= vertex_count {
                return Err(format!(
                    "index {index} at position {i} is out of range (vertex count: {vertex_count})"
                ));
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for MeshData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshData")
            .field("vertex_count", &self.vertex_count())
            .field("triangle_count", &self.triangle_count())
            .finish()
    }
}
