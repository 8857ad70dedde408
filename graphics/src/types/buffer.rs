//! Buffer descriptors.

use bitflags::bitflags;

bitflags! {
    /// How a buffer may be used once created.
    ///
    /// The mesh pipeline only ever uploads non-indexed vertex streams,
    /// so there is no index-buffer usage here: both draw streams are
    /// `VERTEX | COPY_DST`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferUsage: u32 {
        /// Readable as a vertex stream by draw calls.
        const VERTEX = 1 << 0;
        /// Source of transfer and readback operations.
        const COPY_SRC = 1 << 1;
        /// Destination of upload operations.
        const COPY_DST = 1 << 2;
    }
}

impl Default for BufferUsage {
    fn default() -> Self {
        Self::empty()
    }
}

/// Descriptor for creating a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BufferDescriptor {
    /// Debug label for the buffer.
    pub label: Option<String>,
    /// Size in bytes.
    pub size: u64,
    /// Usage flags.
    pub usage: BufferUsage,
}

impl BufferDescriptor {
    /// Create a new buffer descriptor.
    pub fn new(size: u64, usage: BufferUsage) -> Self {
        Self {
            label: None,
            size,
            usage,
        }
    }

    /// Create a descriptor for a static vertex stream of `size` bytes.
    ///
    /// This is the shape both mesh draw streams upload as: vertex data,
    /// written once.
    pub fn vertex_stream(size: u64) -> Self {
        Self::new(size, BufferUsage::VERTEX | BufferUsage::COPY_DST)
    }

    /// Set the debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
