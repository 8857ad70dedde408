//! PLY reader tests.


/// A unit square split into two triangles, the smallest mesh that
/// exercises shared vertices between faces.
pub(crate) const UNIT_SQUARE_PLY: &str = "\
ply
format ascii 1.0
comment a unit square in the XY plane
element vertex 4
property float x
property float y
property float z
element face 2
property list uchar uint vertex_indices
end_header
0 0 0
1 0 0
1 1 0
0 1 0
3 0 1 2
3 0 2 3
";

/// A single triangle.
pub(crate) const TRIANGLE_PLY: &str = "\
ply
format ascii 1.0
element vertex 3
element face 1
end_header
0 0 0
1 0 0
0 1 0
3 0 1 2
";
