//! Dummy GPU backend for testing and development.
//!
//! Buffers on this backend are plain host allocations, so everything the
//! pipeline uploads can be read back and checked without GPU hardware.
//! Out-of-range writes and reads are clamped to the buffer, the way a
//! real API would reject them at validation time.

use std::sync::Mutex;

use crate::error::GraphicsError;
use crate::types::BufferDescriptor;

use super::{AdapterInfo, AdapterType, GpuBackend, GpuBuffer};

/// Dummy GPU backend.
#[derive(Debug, Default)]
pub struct DummyBackend;

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self
    }
}

impl GpuBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy Backend"
    }

    fn adapter(&self) -> AdapterInfo {
        AdapterInfo {
            name: "Dummy Adapter".to_string(),
            vendor: "Plyview".to_string(),
            device_type: AdapterType::Software,
        }
    }

    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<GpuBuffer, GraphicsError> {
        log::trace!(
            "DummyBackend: creating buffer {:?} (size: {})",
            descriptor.label,
            descriptor.size
        );
        Ok(GpuBuffer::Dummy {
            data: Mutex::new(vec![0u8; descriptor.size as usize]),
        })
    }

    fn write_buffer(&self, buffer: &GpuBuffer, offset: u64, data: &[u8]) {
        match buffer {
            GpuBuffer::Dummy { data: store } => {
                if let Ok(mut store) = store.lock() {
                    let start = (offset as usize).min(store.len());
                    let end = (start + data.len()).min(store.len());
                    if end - start < data.len() {
                        log::warn!(
                            "DummyBackend: write of {} bytes at offset {} truncated to buffer size {}",
                            data.len(),
                            offset,
                            store.len()
                        );
                    }
                    store[start..end].copy_from_slice(&data[..end - start]);
                }
            }
        }
    }

    fn read_buffer(&self, buffer: &GpuBuffer, offset: u64, size: u64) -> Vec<u8> {
        match buffer {
            GpuBuffer::Dummy { data: store } => match store.lock() {
                Ok(store) => {
                    let start = (offset as usize).min(store.len());
                    let end = (start + size as usize).min(store.len());
                    store[start..end].to_vec()
                }
                Err(_) => Vec::new(),
            },
        }
    }
}
