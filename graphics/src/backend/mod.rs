//! GPU backend abstraction layer.
//!
//! The mesh pipeline reaches the GPU exclusively through [`GpuBackend`]:
//! allocate a buffer, upload bytes, read them back. Keeping the trait
//! this narrow lets the geometry passes stay pure and the lifecycle
//! manager run without hardware - the in-memory
//! [`DummyBackend`](dummy::DummyBackend) implements the same contract a
//! real graphics API would.

pub mod dummy;

use std::sync::{Arc, Mutex};

use crate::error::GraphicsError;
use crate::types::BufferDescriptor;

pub use dummy::DummyBackend;

/// Description of the adapter a backend runs on.
#[derive(Debug, Clone)]
pub struct AdapterInfo {
    /// Adapter name.
    pub name: String,
    /// Adapter vendor.
    pub vendor: String,
    /// Kind of adapter.
    pub device_type: AdapterType,
}

/// Kind of graphics adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterType {
    /// Discrete GPU.
    Discrete,
    /// GPU integrated with the CPU.
    Integrated,
    /// Software implementation, no GPU involved.
    Software,
    /// Unknown adapter type.
    Unknown,
}

/// Handle to a GPU buffer resource.
pub enum GpuBuffer {
    /// Dummy backend: the buffer's bytes live in host memory.
    Dummy { data: Mutex<Vec<u8>> },
}

impl std::fmt::Debug for GpuBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dummy { data } => {
                let len = data.lock().map(|d| d.len()).unwrap_or(0);
                f.debug_struct("GpuBuffer::Dummy").field("len", &len).finish()
            }
        }
    }
}

/// A graphics backend the buffer pipeline can upload through.
pub trait GpuBackend: Send + Sync + 'static {
    /// Get the backend name.
    fn name(&self) -> &'static str;

    /// Describe the adapter this backend runs on.
    fn adapter(&self) -> AdapterInfo;

    /// Allocate a buffer.
    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<GpuBuffer, GraphicsError>;

    /// Write bytes into a buffer at a byte offset.
    fn write_buffer(&self, buffer: &GpuBuffer, offset: u64, data: &[u8]);

    /// Read bytes back out of a buffer.
    ///
    /// Blocking on real backends; exists so tests and tools can verify
    /// uploads.
    fn read_buffer(&self, buffer: &GpuBuffer, offset: u64, size: u64) -> Vec<u8>;
}

/// Select and create the backend for a new instance.
pub fn create_backend() -> Result<Arc<dyn GpuBackend>, GraphicsError> {
    log::info!("Using dummy backend");
    Ok(Arc::new(dummy::DummyBackend::new()))
}
