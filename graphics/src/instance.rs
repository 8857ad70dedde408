//! Graphics instance.
//!
//! The [`GraphicsInstance`] owns the backend the mesh pipeline uploads
//! through and hands out [`GraphicsDevice`]s bound to it.

use std::sync::{Arc, RwLock, Weak};

use crate::backend::{self, AdapterInfo, GpuBackend};
use crate::device::GraphicsDevice;
use crate::error::GraphicsError;

/// Entry point of the graphics layer.
///
/// An instance selects a [`GpuBackend`] on creation and tracks every
/// device made from it. Devices hold a strong reference back to their
/// instance, so the backend outlives every resource created on it; the
/// instance itself only hands out weak self-references.
///
/// # Thread Safety
///
/// `GraphicsInstance` is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// let instance = GraphicsInstance::new()?;
/// let device = instance.create_device()?;
/// ```
pub struct GraphicsInstance {
    /// Weak self-reference handed to new devices.
    self_ref: RwLock<Weak<GraphicsInstance>>,
    /// Every device created from this instance.
    devices: RwLock<Vec<Arc<GraphicsDevice>>>,
    /// The backend all uploads go through.
    backend: Arc<dyn GpuBackend>,
}

impl GraphicsInstance {
    /// Create an instance on the selected backend.
    ///
    /// # Errors
    ///
    /// Returns an error if no backend can be initialized.
    pub fn new() -> Result<Arc<Self>, GraphicsError> {
        let backend = backend::create_backend()?;
        log::info!("Created graphics instance on backend: {}", backend.name());

        let instance = Arc::new(Self {
            self_ref: RwLock::new(Weak::new()),
            devices: RwLock::new(Vec::new()),
            backend,
        });

        if let Ok(mut self_ref) = instance.self_ref.write() {
            *self_ref = Arc::downgrade(&instance);
        }

        Ok(instance)
    }

    /// Get the GPU backend (internal use only).
    pub(crate) fn backend(&self) -> &Arc<dyn GpuBackend> {
        &self.backend
    }

    /// Upgrade the weak self-reference.
    fn strong_self(&self) -> Option<Arc<GraphicsInstance>> {
        self.self_ref.read().ok().and_then(|weak| weak.upgrade())
    }

    /// Describe the adapter the backend selected.
    pub fn adapter(&self) -> AdapterInfo {
        self.backend.adapter()
    }

    /// Create a device for buffer allocation and upload.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance is being torn down or the
    /// backend refuses the device.
    pub fn create_device(&self) -> Result<Arc<GraphicsDevice>, GraphicsError> {
        let adapter = self.backend.adapter();
        log::info!("Creating device on adapter: {}", adapter.name);

        let instance = self.strong_self().ok_or_else(|| {
            GraphicsError::DeviceCreationFailed("instance has been dropped".to_string())
        })?;
        let device = Arc::new(GraphicsDevice::new(instance, adapter.name));

        if let Ok(mut devices) = self.devices.write() {
            devices.push(device.clone());
        }

        Ok(device)
    }

    /// Get every device created from this instance.
    pub fn devices(&self) -> Vec<Arc<GraphicsDevice>> {
        self.devices
            .read()
            .map(|devices| devices.clone())
            .unwrap_or_default()
    }

    /// Get the number of devices created from this instance.
    pub fn device_count(&self) -> usize {
        self.devices.read().map(|devices| devices.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for GraphicsInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsInstance")
            .field("backend", &self.backend.name())
            .field("device_count", &self.device_count())
            .finish()
    }
}

// Ensure GraphicsInstance is Send + Sync
static_assertions::assert_impl_all!(GraphicsInstance: Send, Sync);
