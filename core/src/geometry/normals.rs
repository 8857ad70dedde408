//! Area-weighted vertex normal computation.

use crate::math::{self, Vec3};

/// Compute smooth per-vertex normals from triangle geometry.
///
/// Each triangle contributes its unnormalized face normal (the cross
/// product of the two edges leaving its first corner, whose magnitude is
/// twice the triangle area) to all three of its vertices, so larger
/// triangles weigh more in the average. The accumulated vectors are
/// normalized at the end; a vertex whose accumulation is negligible
/// (isolated vertex, or faces that cancel exactly) receives the fixed
/// +Z fallback from [`crate::math::DEGENERATE_NORMAL`].
///
/// Returns a flat `[nx, ny, nz, ...]` array parallel to `positions`.
pub fn compute_vertex_normals(positions: &[f32], indices: &[u32]) -> Vec<f32> {
    let mut normals = vec![0.0f32; positions.len()];

    for tri in indices.chunks_exact(3) {
        let corners = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let p0 = math::position(positions, corners[0]);
        let p1 = math::position(positions, corners[1]);
        let p2 = math::position(positions, corners[2]);

        // Magnitude 2x the triangle area: the area weighting.
        let face = (p1 - p0).cross(&(p2 - p0));

        for corner in corners {
            normals[corner * 3] += face.x;
            normals[corner * 3 + 1] += face.y;
            normals[corner * 3 + 2] += face.z;
        }
    }

    let mut degenerate = 0usize;
    for normal in normals.chunks_exact_mut(3) {
        let accumulated = Vec3::new(normal[0], normal[1], normal[2]);
        if accumulated.norm() <= math::NORMAL_EPSILON {
            degenerate += 1;
        }
        let n = math::normalize_or_fallback(accumulated);
        normal[0] = n.x;
        normal[1] = n.y;
        normal[2] = n.z;
    }
    if degenerate > 0 {
        log::debug!("{degenerate} vertices received the fallback normal");
    }

    normals
}
