//! Scale-and-center normalization.

/// Translate the vertex set so its centroid sits at the origin, then
/// scale uniformly so the largest absolute coordinate becomes 0.5,
/// placing the axis-aligned bounding box inside a unit cube centered at
/// the origin.
///
/// The centroid is accumulated in f64 so large meshes don't lose the
/// translation to rounding. A mesh that collapses to a single point
/// (max coordinate 0 after centering) is centered but left unscaled.
/// Reapplying to an already-normalized mesh is a no-op up to
/// floating-point rounding.
pub fn scale_and_center(positions: &mut [f32]) {
    let count = positions.len() / 3;
    if count == 0 {
        return;
    }

    let mut sum = [0.0f64; 3];
    for vertex in positions.chunks_exact(3) {
        sum[0] += vertex[0] as f64;
        sum[1] += vertex[1] as f64;
        sum[2] += vertex[2] as f64;
    }
    let centroid = [
        (sum[0] / count as f64) as f32,
        (sum[1] / count as f64) as f32,
        (sum[2] / count as f64) as f32,
    ];

    let mut max_abs = 0.0f32;
    for vertex in positions.chunks_exact_mut(3) {
        for axis in 0..3 {
            vertex[axis] -= centroid[axis];
            max_abs = max_abs.max(vertex[axis].abs());
        }
    }

    if max_abs > 0.0 {
        let scale = 0.5 / max_abs;
        for coord in positions.iter_mut() {
            *coord *= scale;
        }
    }
}
