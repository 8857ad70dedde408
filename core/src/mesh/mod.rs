//! CPU-side mesh data.
//!
//! This module provides the flat-array mesh representation shared by the
//! PLY reader and the geometry passes, plus generators for small
//! reference shapes used in tests and benchmarks.

mod data;
pub mod generators;

pub use data::MeshData;
