//! Internal PLY parsing logic.

use crate::mesh::MeshData;

use super::error::PlyError;

/// Token that terminates the PLY header.
const END_HEADER: &str = "end_header";

pub(crate) fn parse(text: &str) -> Result<MeshData, PlyError> {
    let mut lines = text.lines();

    let (vertex_count, face_count) = parse_header(&mut lines)?;

    let mut positions = Vec::with_capacity(vertex_count * 3);
    for row in 0..vertex_count {
        let line = lines.next().ok_or(PlyError::MissingVertex { row })?;
        parse_vertex(line, row, &mut positions)?;
    }

    let mut indices = Vec::with_capacity(face_count * 3);
    for face in 0..face_count {
        let line = lines.next().ok_or(PlyError::MissingFace { face })?;
        parse_face(line, face, vertex_count, &mut indices)?;
    }

    log::debug!("parsed PLY mesh: {vertex_count} vertices, {face_count} faces");

    Ok(MeshData::new(positions, indices))
}

/// Scan header lines up to `end_header`, extracting the vertex and face
/// counts from `element` declarations.
fn parse_header<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
) -> Result<(usize, usize), PlyError> {
    let mut vertex_count: i64 = 0;
    let mut face_count: i64 = 0;

    for line in lines {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("element") => {
                let kind = tokens.next();
                let count = tokens
                    .next()
                    .and_then(|t| t.parse::<i64>().ok())
                    .unwrap_or(0);
                match kind {
                    Some("vertex") => vertex_count = count,
                    Some("face") => face_count = count,
                    _ => {}
                }
            }
            Some(END_HEADER) => {
                if vertex_count <= 0 || face_count <= 0 {
                    return Err(PlyError::MissingCounts);
                }
                return Ok((vertex_count as usize, face_count as usize));
            }
            _ => {}
        }
    }

    Err(PlyError::UnterminatedHeader)
}

/// Parse one vertex row: at least three numeric tokens, the first three
/// becoming x/y/z. Extra per-vertex properties are ignored.
fn parse_vertex(line: &str, row: usize, positions: &mut Vec<f32>) -> Result<(), PlyError> {
    let mut tokens = line.split_whitespace();

    let mut coords = [0.0f32; 3];
    for (axis, coord) in coords.iter_mut().enumerate() {
        let token = tokens.next().ok_or(if axis == 0 {
            PlyError::MissingVertex { row }
        } else {
            PlyError::InvalidVertex { row }
        })?;
        *coord = fast_float::parse(token).map_err(|_| PlyError::InvalidVertex { row })?;
    }

    positions.extend_from_slice(&coords);
    Ok(())
}

/// Parse one face row: the literal `3` followed by three vertex indices
/// within the declared range. Trailing tokens are ignored, matching
/// common per-face property lists.
fn parse_face(
    line: &str,
    face: usize,
    vertex_count: usize,
    indices: &mut Vec<u32>,
) -> Result<(), PlyError> {
    let mut tokens = line.split_whitespace();

    let arity = tokens
        .next()
        .ok_or(PlyError::MissingFace { face })?
        .parse::<u32>()
        .map_err(|_| PlyError::NotATriangle { face })?;
    if arity != 3 {
        return Err(PlyError::NotATriangle { face });
    }

    for _ in 0..3 {
        let index = tokens
            .next()
            .ok_or(PlyError::NotATriangle { face })?
            .parse::<u32>()
            .map_err(|_| PlyError::NotATriangle { face })?;
        if index as usize >= vertex_count {
            return Err(PlyError::IndexOutOfRange {
                face,
                index,
                vertex_count,
            });
        }
        indices.push(index);
    }

    Ok(())
}
