//! Math type aliases and vector primitives shared by the geometry passes.
//!
//! Both normal-computation paths (smooth per-vertex accumulation and flat
//! per-face normals) go through [`normalize_or_fallback`], so degenerate
//! geometry resolves to the same deterministic direction everywhere.

pub use nalgebra;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Length below which a vector is treated as non-normalizable.
pub const NORMAL_EPSILON: f32 = 1e-6;

/// Fixed unit vector substituted for degenerate normals (+Z).
pub const DEGENERATE_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

/// Read vertex `i` from a flat `[x, y, z, ...]` position slice.
#[inline]
pub fn position(positions: &[f32], i: usize) -> Vec3 {
    Vec3::new(positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2])
}

/// Normalize `v`, substituting [`DEGENERATE_NORMAL`] when the length
/// falls below [`NORMAL_EPSILON`].
#[inline]
pub fn normalize_or_fallback(v: Vec3) -> Vec3 {
    let len = v.norm();
    if len > NORMAL_EPSILON {
        v / len
    } else {
        Vec3::from(DEGENERATE_NORMAL)
    }
}

/// Unit normal of the triangle `(p0, p1, p2)`.
///
/// Cross product of the two edges leaving `p0`, so counter-clockwise
/// winding yields the outward direction. Degenerate (zero-area)
/// triangles yield [`DEGENERATE_NORMAL`].
pub fn face_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    normalize_or_fallback((p1 - p0).cross(&(p2 - p0)))
}
