//! Error types for PLY parsing.

/// Errors that can occur while parsing a PLY document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlyError {
    /// The header ended without positive vertex and face counts.
    MissingCounts,
    /// The header was never terminated by `end_header`.
    UnterminatedHeader,
    /// A vertex row is absent or blank.
    MissingVertex {
        /// Zero-based vertex row within the vertex section.
        row: usize,
    },
    /// A vertex row has fewer than three numeric coordinates.
    InvalidVertex {
        /// Zero-based vertex row within the vertex section.
        row: usize,
    },
    /// A face row is absent or blank.
    MissingFace {
        /// Zero-based face row within the face section.
        face: usize,
    },
    /// A face row does not declare a triangle.
    NotATriangle {
        /// Zero-based face row within the face section.
        face: usize,
    },
    /// A face references a vertex outside the declared range.
    IndexOutOfRange {
        /// Zero-based face row within the face section.
        face: usize,
        /// The offending vertex index.
        index: u32,
        /// The declared vertex count.
        vertex_count: usize,
    },
}

impl std::fmt::Display for PlyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCounts => write!(f, "invalid PLY: missing vertex/face counts"),
            Self::UnterminatedHeader => write!(f, "invalid PLY: header has no end_header"),
            Self::MissingVertex { row } => write!(f, "missing vertex data at line {row}"),
            Self::InvalidVertex { row } => write!(f, "invalid vertex data at line {row}"),
            Self::MissingFace { face } => write!(f, "missing face data at line {face}"),
            Self::NotATriangle { face } => write!(f, "face {face} is not a triangle"),
            Self::IndexOutOfRange {
                face,
                index,
                vertex_count,
            } => {
                write!(
                    f,
                    "face {face} references vertex {index} (vertex count: {vertex_count})"
                )
            }
        }
    }
}

impl std::error::Error for PlyError {}
