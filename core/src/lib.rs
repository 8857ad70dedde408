//! # Plyview Core
//!
//! Core crate for Plyview: PLY parsing, mesh data, and geometry processing.

pub mod geometry;
pub mod math;
pub mod mesh;
pub mod ply;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core version on startup.
pub fn init() {
    log::info!("Plyview Core v{} initialized", VERSION);
}
