//! Non-indexed draw-stream expansion.
//!
//! The fill and wireframe streams trade memory for draw-call simplicity:
//! every face re-emits its corner data, so the consumer draws the flat
//! stream without an index buffer.

use crate::math;

/// Corner pairs forming the three edges of a triangle.
const TRIANGLE_EDGES: [(usize, usize); 3] = [(0, 1), (1, 2), (2, 0)];

/// Build the interleaved fill stream with smooth (per-vertex) normals.
///
/// For each face, for each of its three corners in order: position xyz
/// followed by that corner's vertex normal xyz. Vertices shared between
/// faces are duplicated into the stream. Output length is
/// `indices.len() * 6` (faces x 3 corners x 6 floats).
pub fn expand_fill_smooth(positions: &[f32], indices: &[u32], normals: &[f32]) -> Vec<f32> {
    let mut stream = Vec::with_capacity(indices.len() * 6);

    for &index in indices {
        let v = index as usize * 3;
        stream.extend_from_slice(&positions[v..v + 3]);
        stream.extend_from_slice(&normals[v..v + 3]);
    }

    stream
}

/// Build the interleaved fill stream with flat (per-face) normals.
///
/// The face normal is repeated at all three corners, giving faceted
/// shading. Same record layout and length as [`expand_fill_smooth`].
pub fn expand_fill_flat(positions: &[f32], indices: &[u32]) -> Vec<f32> {
    let mut stream = Vec::with_capacity(indices.len() * 6);

    for tri in indices.chunks_exact(3) {
        let normal = math::face_normal(
            math::position(positions, tri[0] as usize),
            math::position(positions, tri[1] as usize),
            math::position(positions, tri[2] as usize),
        );

        for &index in tri {
            let v = index as usize * 3;
            stream.extend_from_slice(&positions[v..v + 3]);
            stream.extend_from_slice(&[normal.x, normal.y, normal.z]);
        }
    }

    stream
}

/// Build the wireframe edge stream.
///
/// Each face emits its three edges (corner pairs 0-1, 1-2, 2-0) as
/// consecutive endpoint pairs of raw positions, no normals. Edges shared
/// by adjacent faces appear once per incident face; line draws are cheap
/// enough that deduplication is not worth the adjacency bookkeeping.
/// Output length is `indices.len() * 6` (faces x 3 edges x 2 endpoints
/// x 3 floats).
pub fn expand_wireframe(positions: &[f32], indices: &[u32]) -> Vec<f32> {
    let mut stream = Vec::with_capacity(indices.len() * 6);

    for tri in indices.chunks_exact(3) {
        for (start, end) in TRIANGLE_EDGES {
            for corner in [tri[start], tri[end]] {
                let v = corner as usize * 3;
                stream.extend_from_slice(&positions[v..v + 3]);
            }
        }
    }

    stream
}
