//! Common utilities for mesh pipeline integration tests.

use std::sync::Arc;

use plyview_graphics::{
    AttributeBinder, Buffer, GraphicsDevice, GraphicsInstance, VertexAttributeFormat,
    VertexAttributeSemantic,
};

/// A unit square split into two triangles, as PLY text.
pub const UNIT_SQUARE_PLY: &str = "\
ply
format ascii 1.0
element vertex 4
property float x
property float y
property float z
element face 2
property list uchar uint vertex_indices
end_header
0 0 0
1 0 0
1 1 0
0 1 0
3 0 1 2
3 0 2 3
";

/// Create a device on the dummy backend.
pub fn create_test_device() -> Arc<GraphicsDevice> {
    let _ = env_logger::builder().is_test(true).try_init();
    let instance = GraphicsInstance::new().expect("failed to create instance");
    instance.create_device().expect("failed to create device")
}

/// One recorded `enable_attribute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedAttribute {
    pub semantic: VertexAttributeSemantic,
    pub format: VertexAttributeFormat,
    pub stride: u32,
    pub offset: u32,
}

/// An [`AttributeBinder`] that records the bind contract it receives,
/// standing in for a rendering adapter.
#[derive(Default)]
pub struct RecordingBinder {
    pub bound_buffers: Vec<Arc<Buffer>>,
    pub attributes: Vec<RecordedAttribute>,
}

impl RecordingBinder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttributeBinder for RecordingBinder {
    fn bind_vertex_buffer(&mut self, buffer: &Arc<Buffer>) {
        self.bound_buffers.push(Arc::clone(buffer));
    }

    fn enable_attribute(
        &mut self,
        semantic: VertexAttributeSemantic,
        format: VertexAttributeFormat,
        stride: u32,
        offset: u32,
    ) {
        self.attributes.push(RecordedAttribute {
            semantic,
            format,
            stride,
            offset,
        });
    }
}
