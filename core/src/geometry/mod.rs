//! Geometry passes over flat mesh arrays.
//!
//! All operations here are pure transformations over the flat
//! position/index arrays produced by the PLY reader:
//!
//! - [`scale_and_center`] - fit the mesh into the unit cube at the origin
//! - [`compute_vertex_normals`] - area-weighted smooth vertex normals
//! - [`expand_fill_smooth`] / [`expand_fill_flat`] - interleaved
//!   position+normal streams for non-indexed fill drawing
//! - [`expand_wireframe`] - line-segment endpoint stream for edge drawing
//!
//! Vector primitives (cross product, normalize-with-fallback) live in
//! [`crate::math`] and are shared by both normal-computation paths.

mod expand;
mod normalize;
mod normals;

pub use expand::{expand_fill_flat, expand_fill_smooth, expand_wireframe};
pub use normalize::scale_and_center;
pub use normals::compute_vertex_normals;
