//! # Plyview Graphics
//!
//! GPU buffer abstraction and mesh lifecycle for Plyview.
//!
//! ## Overview
//!
//! The crate splits into two halves:
//! - the buffer stack - [`GraphicsInstance`] selects a
//!   [`backend::GpuBackend`], [`GraphicsDevice`] allocates [`Buffer`]
//!   resources on it; an in-memory dummy backend serves tests and
//!   development
//! - the mesh half - [`MeshEntity`] drives parsed mesh data through
//!   processing and upload, and describes the resulting fill and
//!   wireframe streams to a rendering adapter via [`AttributeBinder`]
//!
//! ## Example
//!
//! ```ignore
//! use plyview_core::ply::parse_ply;
//! use plyview_graphics::{GraphicsInstance, MeshEntity};
//!
//! let instance = GraphicsInstance::new()?;
//! let device = instance.create_device()?;
//!
//! let mut entity = MeshEntity::new();
//! entity.load(parse_ply(&text)?)?;
//! entity.process()?;
//! entity.create_gpu_buffers(&device)?;
//! entity.bind_for_fill(&mut binder)?;
//! ```

pub mod backend;
pub mod device;
pub mod error;
pub mod instance;
pub mod mesh;
pub mod resources;
pub mod types;

// Re-export main types for convenience
pub use backend::{AdapterInfo, AdapterType, DummyBackend, GpuBackend, GpuBuffer};
pub use device::{DeviceCapabilities, GraphicsDevice};
pub use error::GraphicsError;
pub use instance::GraphicsInstance;
pub use mesh::{
    AttributeBinder, MeshEntity, MeshError, MeshState, ShadingMode, VertexAttribute,
    VertexAttributeFormat, VertexAttributeSemantic, VertexBufferLayout, VertexLayout,
};
pub use resources::Buffer;
pub use types::{BufferDescriptor, BufferUsage};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem logging.
pub fn init() {
    log::info!("Plyview Graphics v{} initialized", VERSION);
}
