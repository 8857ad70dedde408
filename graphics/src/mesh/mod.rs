//! Mesh lifecycle and vertex layout description.
//!
//! [`MeshEntity`] owns a mesh's raw arrays, derived draw streams, and GPU
//! buffer handles; [`VertexLayout`] describes how the uploaded bytes are
//! interpreted by a rendering adapter.

mod entity;
mod layout;

pub use entity::{AttributeBinder, MeshEntity, MeshError, MeshState, ShadingMode};
pub use layout::{
    VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexBufferLayout,
    VertexLayout,
};
