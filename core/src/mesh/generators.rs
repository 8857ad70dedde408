//! Generators for small reference meshes.
//!
//! These produce [`MeshData`] values with the same flat layout the PLY
//! reader emits. They are used by tests and benchmarks as known-geometry
//! inputs to the processing passes.

use super::MeshData;

/// Generate a unit square on the XY plane, split into two triangles.
///
/// Vertices run counter-clockwise from the origin: (0,0,0), (1,0,0),
/// (1,1,0), (0,1,0); faces are (0,1,2) and (0,2,3), both facing +Z.
pub fn unit_square() -> MeshData {
    MeshData::new(
        vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            1.0, 1.0, 0.0, //
            0.0, 1.0, 0.0,
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
}

/// Generate a regular tetrahedron centered at the origin.
///
/// Vertices sit on alternating corners of the cube [-1, 1]^3; all four
/// faces wind counter-clockwise seen from outside.
pub fn tetrahedron() -> MeshData {
    MeshData::new(
        vec![
            1.0, 1.0, 1.0, //
            1.0, -1.0, -1.0, //
            -1.0, 1.0, -1.0, //
            -1.0, -1.0, 1.0,
        ],
        vec![
            0, 1, 2, //
            0, 3, 1, //
            0, 2, 3, //
            1, 3, 2,
        ],
    )
}

/// Generate an `n` x `n` cell grid on the XY plane with a gentle saddle
/// in Z, triangulated into `2 * n * n` faces.
///
/// The saddle keeps vertex normals non-trivial, which makes the grid a
/// useful benchmark input for the normal-computation pass.
pub fn grid(n: u32) -> MeshData {
    let mut positions = Vec::with_capacity(((n + 1) * (n + 1) * 3) as usize);
    let mut indices = Vec::with_capacity((n * n * 6) as usize);

    for row in 0..=n {
        for col in 0..=n {
            let x = col as f32 / n as f32;
            let y = row as f32 / n as f32;
            positions.push(x);
            positions.push(y);
            positions.push((x * x - y * y) * 0.25);
        }
    }

    for row in 0..n {
        for col in 0..n {
            let current = row * (n + 1) + col;
            let next = current + n + 1;

            indices.push(current);
            indices.push(current + 1);
            indices.push(next + 1);

            indices.push(current);
            indices.push(next + 1);
            indices.push(next);
        }
    }

    MeshData::new(positions, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square() {
        let mesh = unit_square();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_tetrahedron() {
        let mesh = tetrahedron();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 4);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_grid() {
        let mesh = grid(4);
        // (4+1)^2 = 25 vertices, 4 * 4 * 2 = 32 triangles
        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(mesh.triangle_count(), 32);
        assert!(mesh.validate().is_ok());
    }
}
