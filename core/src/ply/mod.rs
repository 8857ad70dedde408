//! ASCII PLY mesh reader.
//!
//! Reads the triangle-only ASCII PLY subset into flat mesh arrays. The
//! header is scanned for `element vertex <n>` and `element face <n>`
//! declarations up to the `end_header` terminator, then exactly `n`
//! vertex rows (first three tokens are x/y/z) and `m` face rows
//! (`3 i j k`) are consumed. Anything else is a [`PlyError`] and no
//! partial mesh is returned.
//!
//! # Example
//!
//! ```ignore
//! use plyview_core::ply::parse_ply;
//!
//! let text = std::fs::read_to_string("model.ply").unwrap();
//! let mesh = parse_ply(&text).unwrap();
//! println!("{} vertices, {} faces", mesh.vertex_count(), mesh.triangle_count());
//! ```

mod error;
mod parser;
#[cfg(test)]
mod tests;

pub use error::PlyError;

use crate::mesh::MeshData;

/// Parse an ASCII PLY document into flat mesh arrays.
///
/// The parser is stateless; independent inputs may be parsed
/// concurrently.
pub fn parse_ply(text: &str) -> Result<MeshData, PlyError> {
    parser::parse(text)
}
