//! Graphics error types.

use std::fmt;

/// Errors raised by the graphics layer.
///
/// Every variant corresponds to a failure the buffer pipeline can
/// actually hit: backend startup, device creation, descriptor
/// validation, or the backend refusing an allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// No backend could be initialized.
    InitializationFailed(String),
    /// A device could not be created on the selected adapter.
    DeviceCreationFailed(String),
    /// A buffer descriptor failed device validation.
    InvalidDescriptor(String),
    /// The backend failed to allocate a buffer.
    BufferCreationFailed(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitializationFailed(msg) => write!(f, "graphics initialization failed: {msg}"),
            Self::DeviceCreationFailed(msg) => write!(f, "device creation failed: {msg}"),
            Self::InvalidDescriptor(msg) => write!(f, "invalid buffer descriptor: {msg}"),
            Self::BufferCreationFailed(msg) => write!(f, "buffer creation failed: {msg}"),
        }
    }
}

impl std::error::Error for GraphicsError {}
