//! Graphics device.
//!
//! A [`GraphicsDevice`] allocates [`Buffer`] resources and uploads the
//! mesh draw streams into them. Devices are created by
//! [`GraphicsInstance::create_device`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

use crate::backend::GpuBackend;
use crate::error::GraphicsError;
use crate::instance::GraphicsInstance;
use crate::resources::Buffer;
use crate::types::BufferDescriptor;

/// Limits a device enforces on buffer creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceCapabilities {
    /// Largest buffer the device will allocate, in bytes.
    pub max_buffer_size: u64,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self {
            max_buffer_size: 1 << 30, // 1 GB
        }
    }
}

/// Allocates and tracks GPU buffers on one adapter.
///
/// Descriptors are validated against [`DeviceCapabilities`] before they
/// reach the backend. The device keeps only weak references to the
/// buffers it creates: a buffer is released when its last owner drops
/// it, not when the device goes away. [`buffer_count`] and
/// [`uploaded_bytes`] exist for status reporting and leak checks.
///
/// # Thread Safety
///
/// `GraphicsDevice` is `Send + Sync`. Uploads themselves must happen on
/// whatever execution context owns the underlying graphics API.
///
/// [`buffer_count`]: GraphicsDevice::buffer_count
/// [`uploaded_bytes`]: GraphicsDevice::uploaded_bytes
pub struct GraphicsDevice {
    instance: Arc<GraphicsInstance>,
    name: String,
    capabilities: DeviceCapabilities,
    /// Weak handles to every buffer created here.
    live_buffers: RwLock<Vec<Weak<Buffer>>>,
    /// Total bytes uploaded through [`GraphicsDevice::create_buffer_init`].
    uploaded_bytes: AtomicU64,
}

impl GraphicsDevice {
    /// Create a new graphics device (called by GraphicsInstance).
    pub(crate) fn new(instance: Arc<GraphicsInstance>, name: String) -> Self {
        Self {
            instance,
            name,
            capabilities: DeviceCapabilities::default(),
            live_buffers: RwLock::new(Vec::new()),
            uploaded_bytes: AtomicU64::new(0),
        }
    }

    /// Get the parent instance.
    pub fn instance(&self) -> &Arc<GraphicsInstance> {
        &self.instance
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the device capabilities.
    pub fn capabilities(&self) -> &DeviceCapabilities {
        &self.capabilities
    }

    /// Get the backend serving this device.
    pub(crate) fn backend(&self) -> &Arc<dyn GpuBackend> {
        self.instance.backend()
    }

    /// Create an empty GPU buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::InvalidDescriptor`] if the size is zero
    /// or over the device limit, or a backend error if allocation fails.
    pub fn create_buffer(
        self: &Arc<Self>,
        descriptor: &BufferDescriptor,
    ) -> Result<Arc<Buffer>, GraphicsError> {
        if descriptor.size == 0 {
            return Err(GraphicsError::InvalidDescriptor(
                "buffer size cannot be zero".to_string(),
            ));
        }
        if descriptor.size > self.capabilities.max_buffer_size {
            return Err(GraphicsError::InvalidDescriptor(format!(
                "buffer size {} exceeds device maximum {}",
                descriptor.size, self.capabilities.max_buffer_size
            )));
        }

        let gpu = self.backend().create_buffer(descriptor)?;
        let buffer = Arc::new(Buffer::new(
            Arc::downgrade(self),
            descriptor.clone(),
            gpu,
        ));

        if let Ok(mut live) = self.live_buffers.write() {
            live.push(Arc::downgrade(&buffer));
        }

        log::trace!(
            "GraphicsDevice: created buffer {:?} ({} bytes)",
            descriptor.label,
            descriptor.size
        );

        Ok(buffer)
    }

    /// Create a GPU buffer and upload `data` as its static contents.
    ///
    /// The descriptor size must match the data length exactly; static
    /// streams are uploaded once and never resized.
    ///
    /// # Errors
    ///
    /// Returns an error if the sizes disagree or buffer creation fails.
    pub fn create_buffer_init(
        self: &Arc<Self>,
        descriptor: &BufferDescriptor,
        data: &[u8],
    ) -> Result<Arc<Buffer>, GraphicsError> {
        if descriptor.size != data.len() as u64 {
            return Err(GraphicsError::InvalidDescriptor(format!(
                "descriptor size {} does not match data length {}",
                descriptor.size,
                data.len()
            )));
        }

        let buffer = self.create_buffer(descriptor)?;
        buffer.write(0, data);
        self.uploaded_bytes
            .fetch_add(data.len() as u64, Ordering::Relaxed);
        Ok(buffer)
    }

    /// Get the number of live buffers created by this device.
    pub fn buffer_count(&self) -> usize {
        self.live_buffers
            .read()
            .map(|live| live.iter().filter(|weak| weak.strong_count() > 0).count())
            .unwrap_or(0)
    }

    /// Get the total bytes uploaded as static buffer contents.
    pub fn uploaded_bytes(&self) -> u64 {
        self.uploaded_bytes.load(Ordering::Relaxed)
    }

    /// Drop tracking entries for buffers that have been released.
    pub fn cleanup_dead_resources(&self) {
        if let Ok(mut live) = self.live_buffers.write() {
            live.retain(|weak| weak.strong_count() > 0);
        }
    }
}

impl std::fmt::Debug for GraphicsDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsDevice")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities)
            .field("buffer_count", &self.buffer_count())
            .finish()
    }
}

// Ensure GraphicsDevice is Send + Sync
static_assertions::assert_impl_all!(GraphicsDevice: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BufferUsage;

    fn create_test_device() -> Arc<GraphicsDevice> {
        let instance = GraphicsInstance::new().unwrap();
        instance.create_device().unwrap()
    }

    #[test]
    fn test_device_name() {
        let device = create_test_device();
        assert_eq!(device.name(), "Dummy Adapter");
    }

    #[test]
    fn test_create_buffer() {
        let device = create_test_device();
        let buffer = device
            .create_buffer(&BufferDescriptor::new(1024, BufferUsage::VERTEX))
            .unwrap();
        assert_eq!(buffer.size(), 1024);
        assert_eq!(device.buffer_count(), 1);
        assert_eq!(device.uploaded_bytes(), 0);
    }

    #[test]
    fn test_create_buffer_zero_size() {
        let device = create_test_device();
        let result = device.create_buffer(&BufferDescriptor::new(0, BufferUsage::VERTEX));
        assert!(matches!(result, Err(GraphicsError::InvalidDescriptor(_))));
    }

    #[test]
    fn test_create_buffer_exceeds_limit() {
        let device = create_test_device();
        let too_big = device.capabilities().max_buffer_size + 1;
        let result = device.create_buffer(&BufferDescriptor::new(too_big, BufferUsage::VERTEX));
        assert!(matches!(result, Err(GraphicsError::InvalidDescriptor(_))));
    }

    #[test]
    fn test_create_buffer_init_roundtrip() {
        let device = create_test_device();
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let buffer = device
            .create_buffer_init(&BufferDescriptor::vertex_stream(8), &data)
            .unwrap();
        assert_eq!(buffer.read(0, 8), data);
        assert_eq!(device.uploaded_bytes(), 8);
    }

    #[test]
    fn test_create_buffer_init_size_mismatch() {
        let device = create_test_device();
        let result = device.create_buffer_init(&BufferDescriptor::vertex_stream(16), &[0u8; 8]);
        assert!(result.is_err());
        assert_eq!(device.uploaded_bytes(), 0);
    }

    #[test]
    fn test_resource_cleanup() {
        let device = create_test_device();
        {
            let _buffer = device
                .create_buffer(&BufferDescriptor::new(1024, BufferUsage::VERTEX))
                .unwrap();
            assert_eq!(device.buffer_count(), 1);
        }
        // Buffer dropped
        device.cleanup_dead_resources();
        assert_eq!(device.buffer_count(), 0);
    }
}
