//! Mesh lifecycle manager.
//!
//! A [`MeshEntity`] owns a mesh's raw arrays, its derived draw streams,
//! and the GPU buffers they upload into, and sequences the
//! load → process → buffer → bind lifecycle. All GPU side effects go
//! through the device it is handed; the geometry passes themselves are
//! the pure functions in `plyview_core::geometry`.

use std::fmt;
use std::sync::Arc;

use plyview_core::geometry;
use plyview_core::mesh::MeshData;

use crate::device::GraphicsDevice;
use crate::error::GraphicsError;
use crate::resources::Buffer;
use crate::types::BufferDescriptor;

use super::layout::{VertexAttributeFormat, VertexAttributeSemantic, VertexLayout};

/// Lifecycle states of a [`MeshEntity`].
///
/// States advance strictly through [`MeshEntity::load`],
/// [`MeshEntity::process`], and [`MeshEntity::create_gpu_buffers`];
/// [`MeshEntity::dispose`] is reachable from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeshState {
    /// No data loaded.
    #[default]
    Empty,
    /// Raw vertex/index arrays are set.
    Loaded,
    /// Geometry passes have run; draw streams are ready to upload.
    Processed,
    /// GPU buffers are allocated and populated; safe to bind.
    Ready,
    /// GPU buffers released; the entity must be re-loaded before use.
    Disposed,
}

/// Normal source for the fill stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShadingMode {
    /// Area-weighted per-vertex normals (smooth shading).
    #[default]
    Smooth,
    /// Per-face normals repeated at each corner (faceted shading).
    Flat,
}

/// Errors from mesh lifecycle operations.
#[derive(Debug)]
pub enum MeshError {
    /// An operation was invoked in the wrong lifecycle state.
    State {
        /// The operation that was attempted.
        operation: &'static str,
        /// The state the entity was in.
        state: MeshState,
    },
    /// Mesh data failed validation on load.
    InvalidData(String),
    /// A GPU resource operation failed.
    Graphics(GraphicsError),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State { operation, state } => {
                write!(f, "{operation} invoked in state {state:?}")
            }
            Self::InvalidData(msg) => write!(f, "invalid mesh data: {msg}"),
            Self::Graphics(e) => write!(f, "graphics error: {e}"),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graphics(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphicsError> for MeshError {
    fn from(e: GraphicsError) -> Self {
        Self::Graphics(e)
    }
}

/// Receives the bind contract for a draw stream.
///
/// Implemented by the rendering adapter. The entity describes its
/// buffers through this trait instead of calling a graphics API, so the
/// bind step stays a pure description. Strides and offsets are in bytes;
/// a stride of zero means tightly packed.
pub trait AttributeBinder {
    /// Select the buffer that subsequent attributes read from.
    fn bind_vertex_buffer(&mut self, buffer: &Arc<Buffer>);

    /// Describe one vertex attribute within the bound buffer.
    fn enable_attribute(
        &mut self,
        semantic: VertexAttributeSemantic,
        format: VertexAttributeFormat,
        stride: u32,
        offset: u32,
    );
}

/// Owns a mesh's raw data, derived draw streams, and GPU buffers, and
/// sequences processing and upload.
///
/// ```ignore
/// let mut entity = MeshEntity::new().with_label("bunny");
/// entity.load(parse_ply(&text)?)?;
/// entity.process()?;
/// entity.create_gpu_buffers(&device)?;
/// assert!(entity.is_ready());
/// ```
pub struct MeshEntity {
    positions: Vec<f32>,
    indices: Vec<u32>,
    normals: Vec<f32>,
    fill_stream: Vec<f32>,
    edge_stream: Vec<f32>,
    fill_buffer: Option<Arc<Buffer>>,
    edge_buffer: Option<Arc<Buffer>>,
    shading: ShadingMode,
    state: MeshState,
    label: Option<String>,
}

impl MeshEntity {
    /// Create an empty entity.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
            fill_stream: Vec::new(),
            edge_stream: Vec::new(),
            fill_buffer: None,
            edge_buffer: None,
            shading: ShadingMode::default(),
            state: MeshState::Empty,
            label: None,
        }
    }

    /// Set the shading mode used by the fill stream.
    pub fn with_shading(mut self, shading: ShadingMode) -> Self {
        self.shading = shading;
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Load raw mesh arrays, replacing any previous content.
    ///
    /// Prior GPU buffers are released before anything else, so re-loading
    /// a buffered entity cannot leak. The data is validated (whole
    /// triples, indices in range); on failure the entity is left empty
    /// rather than partially loaded.
    pub fn load(&mut self, mesh: MeshData) -> Result<(), MeshError> {
        self.release_buffers();
        self.positions.clear();
        self.indices.clear();
        self.clear_derived();

        if let Err(msg) = mesh.validate() {
            self.state = MeshState::Empty;
            return Err(MeshError::InvalidData(msg));
        }

        self.positions = mesh.positions;
        self.indices = mesh.indices;
        self.state = MeshState::Loaded;
        Ok(())
    }

    /// Run the geometry passes and build both draw streams.
    ///
    /// Normalizes positions in place (scale-and-center), computes vertex
    /// normals, then expands the fill stream (per the shading mode) and
    /// the wireframe stream.
    pub fn process(&mut self) -> Result<(), MeshError> {
        if self.state != MeshState::Loaded {
            return Err(MeshError::State {
                operation: "process",
                state: self.state,
            });
        }

        geometry::scale_and_center(&mut self.positions);
        self.normals = geometry::compute_vertex_normals(&self.positions, &self.indices);
        self.fill_stream = match self.shading {
            ShadingMode::Smooth => {
                geometry::expand_fill_smooth(&self.positions, &self.indices, &self.normals)
            }
            ShadingMode::Flat => geometry::expand_fill_flat(&self.positions, &self.indices),
        };
        self.edge_stream = geometry::expand_wireframe(&self.positions, &self.indices);

        self.state = MeshState::Processed;
        Ok(())
    }

    /// Create the two GPU vertex buffers and upload the draw streams as
    /// static data.
    ///
    /// Safe to call again while `Ready`: prior buffers are dropped, and
    /// thereby released, before the new ones are created.
    pub fn create_gpu_buffers(&mut self, device: &Arc<GraphicsDevice>) -> Result<(), MeshError> {
        if !matches!(self.state, MeshState::Processed | MeshState::Ready) {
            return Err(MeshError::State {
                operation: "create_gpu_buffers",
                state: self.state,
            });
        }

        self.release_buffers();

        let fill_bytes: &[u8] = bytemuck::cast_slice(&self.fill_stream);
        let fill = device.create_buffer_init(
            &BufferDescriptor::vertex_stream(fill_bytes.len() as u64)
                .with_label(self.buffer_label("fill")),
            fill_bytes,
        )?;

        let edge_bytes: &[u8] = bytemuck::cast_slice(&self.edge_stream);
        let edge = device.create_buffer_init(
            &BufferDescriptor::vertex_stream(edge_bytes.len() as u64)
                .with_label(self.buffer_label("edges")),
            edge_bytes,
        )?;

        self.fill_buffer = Some(fill);
        self.edge_buffer = Some(edge);
        self.state = MeshState::Ready;
        Ok(())
    }

    /// Describe the fill stream to a rendering adapter.
    ///
    /// Binds the fill buffer, then the [`VertexLayout::interleaved_fill`]
    /// contract: position (Float3, stride 24, offset 0) and normal
    /// (Float3, stride 24, offset 12). Pure description; no computation.
    pub fn bind_for_fill(&self, binder: &mut dyn AttributeBinder) -> Result<(), MeshError> {
        let buffer = self.ready_buffer(&self.fill_buffer, "bind_for_fill")?;
        binder.bind_vertex_buffer(buffer);
        Self::describe_layout(binder, &VertexLayout::interleaved_fill());
        Ok(())
    }

    /// Describe the wireframe stream to a rendering adapter.
    ///
    /// Binds the edge buffer, then the [`VertexLayout::wireframe`]
    /// contract: a single position attribute (Float3, stride 0 meaning
    /// tightly packed, offset 0).
    pub fn bind_for_wireframe(&self, binder: &mut dyn AttributeBinder) -> Result<(), MeshError> {
        let buffer = self.ready_buffer(&self.edge_buffer, "bind_for_wireframe")?;
        binder.bind_vertex_buffer(buffer);
        Self::describe_layout(binder, &VertexLayout::wireframe());
        Ok(())
    }

    /// Release the GPU buffers and leave the entity disposed.
    ///
    /// Idempotent. Dropping the handles releases the backend resources;
    /// the entity must be re-loaded before it can be drawn again.
    pub fn dispose(&mut self) {
        self.release_buffers();
        self.state = MeshState::Disposed;
    }

    // --- Queries ------------------------------------------------------

    /// Get the current lifecycle state.
    pub fn state(&self) -> MeshState {
        self.state
    }

    /// Get the shading mode used by the fill stream.
    pub fn shading(&self) -> ShadingMode {
        self.shading
    }

    /// Check if the entity is safe to bind and draw.
    pub fn is_ready(&self) -> bool {
        self.state == MeshState::Ready
    }

    /// Get the number of mesh vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of corners in the fill stream (triangles x 3).
    pub fn fill_vertex_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of line endpoints in the wireframe stream.
    pub fn edge_vertex_count(&self) -> usize {
        self.edge_stream.len() / 3
    }

    /// Get the normalized positions (empty until processed).
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Get the vertex normals (empty until processed).
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Get the interleaved fill stream (empty until processed).
    pub fn fill_stream(&self) -> &[f32] {
        &self.fill_stream
    }

    /// Get the wireframe edge stream (empty until processed).
    pub fn edge_stream(&self) -> &[f32] {
        &self.edge_stream
    }

    /// Get the fill buffer, if buffered.
    pub fn fill_buffer(&self) -> Option<&Arc<Buffer>> {
        self.fill_buffer.as_ref()
    }

    /// Get the edge buffer, if buffered.
    pub fn edge_buffer(&self) -> Option<&Arc<Buffer>> {
        self.edge_buffer.as_ref()
    }

    // --- Internals ----------------------------------------------------

    fn describe_layout(binder: &mut dyn AttributeBinder, layout: &VertexLayout) {
        for attr in &layout.attributes {
            binder.enable_attribute(attr.semantic, attr.format, layout.stride(), attr.offset);
        }
    }

    fn ready_buffer<'a>(
        &'a self,
        slot: &'a Option<Arc<Buffer>>,
        operation: &'static str,
    ) -> Result<&'a Arc<Buffer>, MeshError> {
        if self.state != MeshState::Ready {
            return Err(MeshError::State {
                operation,
                state: self.state,
            });
        }
        slot.as_ref().ok_or(MeshError::State {
            operation,
            state: self.state,
        })
    }

    fn release_buffers(&mut self) {
        self.fill_buffer = None;
        self.edge_buffer = None;
    }

    fn clear_derived(&mut self) {
        self.normals.clear();
        self.fill_stream.clear();
        self.edge_stream.clear();
    }

    fn buffer_label(&self, stream: &str) -> String {
        match &self.label {
            Some(label) => format!("{label}/{stream}"),
            None => stream.to_string(),
        }
    }
}

impl Default for MeshEntity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MeshEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeshEntity")
            .field("label", &self.label)
            .field("state", &self.state)
            .field("shading", &self.shading)
            .field("vertex_count", &self.vertex_count())
            .field("triangle_count", &self.triangle_count())
            .finish()
    }
}

// Ensure MeshEntity is Send + Sync
static_assertions::assert_impl_all!(MeshEntity: Send, Sync);
