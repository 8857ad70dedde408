//! Vertex layout descriptions.
//!
//! A [`VertexLayout`] is the contract between an uploaded draw stream
//! and the rendering adapter that consumes it: the buffer's stride plus
//! the attributes read out of each vertex. The pipeline only ever binds
//! two layouts - [`VertexLayout::interleaved_fill`] for the shaded
//! stream and [`VertexLayout::wireframe`] for the edge stream - and they
//! are shared as `Arc`s since every mesh uses the same pair. An adapter
//! must honor the strides and offsets exactly to interpret the buffer
//! bytes correctly.

use std::sync::Arc;

/// What a vertex attribute means to the consuming shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position in mesh space.
    Position,
    /// Unit surface normal.
    Normal,
}

/// Scalar layout of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// One 32-bit float.
    Float,
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
    /// Four 32-bit floats.
    Float4,
}

impl VertexAttributeFormat {
    /// Bytes one attribute of this format occupies.
    pub fn byte_size(&self) -> u32 {
        match self {
            Self::Float => 4,
            Self::Float2 => 8,
            Self::Float3 => 12,
            Self::Float4 => 16,
        }
    }
}

/// Stride description of one vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexBufferLayout {
    /// Bytes between consecutive vertices. Zero means the attributes
    /// are tightly packed with no per-vertex padding.
    pub stride: u32,
}

impl VertexBufferLayout {
    /// Create a layout with the given stride.
    pub fn new(stride: u32) -> Self {
        Self { stride }
    }

    /// Create a tightly packed layout (stride zero).
    pub fn tightly_packed() -> Self {
        Self { stride: 0 }
    }
}

/// One attribute read from a vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// What the attribute means.
    pub semantic: VertexAttributeSemantic,
    /// How its scalars are laid out.
    pub format: VertexAttributeFormat,
    /// Byte offset within each vertex.
    pub offset: u32,
}

impl VertexAttribute {
    /// Create an attribute description.
    pub fn new(semantic: VertexAttributeSemantic, format: VertexAttributeFormat, offset: u32) -> Self {
        Self {
            semantic,
            format,
            offset,
        }
    }

    /// A float3 position attribute at `offset`.
    pub fn position(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Position,
            VertexAttributeFormat::Float3,
            offset,
        )
    }

    /// A float3 normal attribute at `offset`.
    pub fn normal(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Normal,
            VertexAttributeFormat::Float3,
            offset,
        )
    }
}

/// Layout of one vertex buffer and the attributes read from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    /// The buffer stride description.
    pub buffer: VertexBufferLayout,
    /// Attributes read out of each vertex.
    pub attributes: Vec<VertexAttribute>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl VertexLayout {
    /// Create an empty layout over a buffer.
    pub fn new(buffer: VertexBufferLayout) -> Self {
        Self {
            buffer,
            attributes: Vec::new(),
            label: None,
        }
    }

    /// Append a vertex attribute.
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The buffer stride in bytes (zero means tightly packed).
    pub fn stride(&self) -> u32 {
        self.buffer.stride
    }

    /// Whether any attribute carries the given semantic.
    pub fn has_semantic(&self, semantic: VertexAttributeSemantic) -> bool {
        self.attributes.iter().any(|attr| attr.semantic == semantic)
    }

    /// Look up an attribute by semantic.
    pub fn get_attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.semantic == semantic)
    }

    /// Check that every attribute fits inside one vertex.
    ///
    /// Tightly packed layouts (stride zero) have nothing to overrun.
    pub fn validate(&self) -> Result<(), String> {
        if self.buffer.stride == 0 {
            return Ok(());
        }
        for attr in &self.attributes {
            if attr.offset + attr.format.byte_size() > self.buffer.stride {
                return Err(format!(
                    "attribute {:?} at offset {} (size {}) overruns stride {}",
                    attr.semantic,
                    attr.offset,
                    attr.format.byte_size(),
                    self.buffer.stride
                ));
            }
        }
        Ok(())
    }

    /// Layout of the interleaved fill stream: position at offset 0 and
    /// normal at offset 12, 24 bytes per vertex.
    pub fn interleaved_fill() -> Arc<Self> {
        Arc::new(
            Self::new(VertexBufferLayout::new(24))
                .with_attribute(VertexAttribute::position(0))
                .with_attribute(VertexAttribute::normal(12))
                .with_label("interleaved_fill"),
        )
    }

    /// Layout of the wireframe edge stream: a single tightly packed
    /// position attribute.
    pub fn wireframe() -> Arc<Self> {
        Arc::new(
            Self::new(VertexBufferLayout::tightly_packed())
                .with_attribute(VertexAttribute::position(0))
                .with_label("wireframe"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_byte_size() {
        assert_eq!(VertexAttributeFormat::Float.byte_size(), 4);
        assert_eq!(VertexAttributeFormat::Float3.byte_size(), 12);
        assert_eq!(VertexAttributeFormat::Float4.byte_size(), 16);
    }

    #[test]
    fn test_interleaved_fill_layout() {
        let layout = VertexLayout::interleaved_fill();
        assert_eq!(layout.stride(), 24);
        assert!(layout.has_semantic(VertexAttributeSemantic::Position));
        assert!(layout.has_semantic(VertexAttributeSemantic::Normal));
        assert!(layout.validate().is_ok());

        let normal = layout
            .get_attribute(VertexAttributeSemantic::Normal)
            .unwrap();
        assert_eq!(normal.offset, 12);
        assert_eq!(normal.format, VertexAttributeFormat::Float3);
    }

    #[test]
    fn test_wireframe_layout() {
        let layout = VertexLayout::wireframe();
        assert_eq!(layout.stride(), 0);
        assert_eq!(layout.attributes.len(), 1);
        assert!(!layout.has_semantic(VertexAttributeSemantic::Normal));
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_validation_catches_overrun() {
        let layout = VertexLayout::new(VertexBufferLayout::new(12))
            .with_attribute(VertexAttribute::position(0))
            .with_attribute(VertexAttribute::normal(12)); // overruns stride

        assert!(layout.validate().is_err());
    }
}
