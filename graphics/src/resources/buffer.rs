//! GPU buffer resource.

use std::sync::{Arc, Weak};

use crate::backend::GpuBuffer;
use crate::device::GraphicsDevice;
use crate::types::{BufferDescriptor, BufferUsage};

/// A GPU buffer owning its backend handle.
///
/// Created by [`GraphicsDevice::create_buffer`] and shared as an `Arc`;
/// when the last owner drops it, the backend handle goes with it, which
/// is how the mesh lifecycle releases GPU memory on dispose and
/// re-load. The buffer holds only a weak reference to its device, so a
/// forgotten buffer never keeps a device alive.
///
/// # Example
///
/// ```ignore
/// let buffer = device.create_buffer_init(
///     &BufferDescriptor::vertex_stream(bytes.len() as u64),
///     bytes,
/// )?;
/// ```
pub struct Buffer {
    device: Weak<GraphicsDevice>,
    descriptor: BufferDescriptor,
    gpu: GpuBuffer,
}

impl Buffer {
    /// Create a new buffer (called by GraphicsDevice).
    pub(crate) fn new(
        device: Weak<GraphicsDevice>,
        descriptor: BufferDescriptor,
        gpu: GpuBuffer,
    ) -> Self {
        Self {
            device,
            descriptor,
            gpu,
        }
    }

    /// Get the parent device, if it still exists.
    pub fn device(&self) -> Option<Arc<GraphicsDevice>> {
        self.device.upgrade()
    }

    /// Get the buffer descriptor.
    pub fn descriptor(&self) -> &BufferDescriptor {
        &self.descriptor
    }

    /// Get the buffer size in bytes.
    pub fn size(&self) -> u64 {
        self.descriptor.size
    }

    /// Get the usage flags the buffer was created with.
    pub fn usage(&self) -> BufferUsage {
        self.descriptor.usage
    }

    /// Get the buffer label, if set.
    pub fn label(&self) -> Option<&str> {
        self.descriptor.label.as_deref()
    }

    /// Write bytes into the buffer through the owning device's backend.
    ///
    /// A no-op if the device has been dropped.
    pub fn write(&self, offset: u64, data: &[u8]) {
        if let Some(device) = self.device.upgrade() {
            device.backend().write_buffer(&self.gpu, offset, data);
        }
    }

    /// Read bytes back from the buffer.
    ///
    /// Returns an empty vector if the device has been dropped.
    pub fn read(&self, offset: u64, size: u64) -> Vec<u8> {
        match self.device.upgrade() {
            Some(device) => device.backend().read_buffer(&self.gpu, offset, size),
            None => Vec::new(),
        }
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("size", &self.descriptor.size)
            .field("usage", &self.descriptor.usage)
            .field("label", &self.descriptor.label)
            .finish()
    }
}

// Ensure Buffer is Send + Sync
static_assertions::assert_impl_all!(Buffer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn detached_buffer(size: u64) -> Buffer {
        Buffer::new(
            Weak::new(),
            BufferDescriptor::vertex_stream(size),
            GpuBuffer::Dummy {
                data: Mutex::new(vec![0u8; size as usize]),
            },
        )
    }

    #[test]
    fn test_buffer_debug() {
        let buffer = detached_buffer(1024);
        let debug = format!("{:?}", buffer);
        assert!(debug.contains("Buffer"));
        assert!(debug.contains("1024"));
    }

    #[test]
    fn test_buffer_accessors() {
        let buffer = detached_buffer(2048);
        assert_eq!(buffer.size(), 2048);
        assert!(buffer.usage().contains(BufferUsage::VERTEX));
        assert!(buffer.label().is_none());
    }

    #[test]
    fn test_detached_buffer_io_is_inert() {
        // Without a live device there is no backend to route through.
        let buffer = detached_buffer(16);
        buffer.write(0, &[1, 2, 3]);
        assert!(buffer.read(0, 16).is_empty());
    }
}
