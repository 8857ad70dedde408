//! Integration tests for the full mesh pipeline.
//!
//! These run the parse → load → process → buffer → bind → dispose
//! sequence against the dummy backend and verify the uploaded bytes and
//! bind contracts a rendering adapter would observe.

mod common;

use std::sync::Arc;

use rstest::rstest;

use plyview_core::ply::parse_ply;
use plyview_graphics::{
    MeshEntity, MeshError, MeshState, ShadingMode, VertexAttributeFormat, VertexAttributeSemantic,
};

use common::{create_test_device, RecordingBinder, UNIT_SQUARE_PLY};

// ============================================================================
// End-to-End Pipeline
// ============================================================================

/// A unit square through the whole pipeline.
#[test]
fn test_unit_square_end_to_end() {
    let device = create_test_device();

    let mesh = parse_ply(UNIT_SQUARE_PLY).expect("failed to parse square");
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);

    let mut entity = MeshEntity::new().with_label("square");
    entity.load(mesh).unwrap();
    entity.process().unwrap();
    entity.create_gpu_buffers(&device).unwrap();

    assert!(entity.is_ready());
    assert_eq!(entity.fill_vertex_count(), 6);
    assert_eq!(entity.edge_vertex_count(), 12);
    assert_eq!(entity.fill_stream().len(), 36);
    assert_eq!(entity.edge_stream().len(), 36);

    // Normalization centered the square on the origin at ±0.5.
    for position in entity.positions().chunks_exact(3) {
        assert_eq!(position[0].abs(), 0.5);
        assert_eq!(position[1].abs(), 0.5);
        assert_eq!(position[2], 0.0);
    }

    // Planar CCW mesh: every vertex normal is exactly +Z.
    for normal in entity.normals().chunks_exact(3) {
        assert_eq!(normal, &[0.0, 0.0, 1.0]);
    }
}

/// Uploaded buffer bytes must match the CPU-side streams exactly.
#[test]
fn test_buffer_upload_readback() {
    let device = create_test_device();

    let mut entity = MeshEntity::new();
    entity.load(parse_ply(UNIT_SQUARE_PLY).unwrap()).unwrap();
    entity.process().unwrap();
    entity.create_gpu_buffers(&device).unwrap();

    let fill = entity.fill_buffer().unwrap();
    let expected_fill: &[u8] = bytemuck::cast_slice(entity.fill_stream());
    assert_eq!(fill.size(), expected_fill.len() as u64);
    assert_eq!(fill.read(0, fill.size()), expected_fill);
    assert_eq!(fill.label(), Some("fill"));

    let edges = entity.edge_buffer().unwrap();
    let expected_edges: &[u8] = bytemuck::cast_slice(entity.edge_stream());
    assert_eq!(edges.read(0, edges.size()), expected_edges);
}

/// On a planar mesh the smooth and flat shading paths agree, so both
/// modes upload identical fill bytes.
#[rstest]
#[case::smooth(ShadingMode::Smooth)]
#[case::flat(ShadingMode::Flat)]
fn test_shading_modes_on_planar_mesh(#[case] shading: ShadingMode) {
    let device = create_test_device();

    let mut entity = MeshEntity::new().with_shading(shading);
    entity.load(parse_ply(UNIT_SQUARE_PLY).unwrap()).unwrap();
    entity.process().unwrap();
    entity.create_gpu_buffers(&device).unwrap();

    assert_eq!(entity.shading(), shading);
    assert_eq!(entity.fill_stream().len(), 36);
    for record in entity.fill_stream().chunks_exact(6) {
        assert_eq!(&record[3..6], &[0.0, 0.0, 1.0]);
    }
}

// ============================================================================
// Bind Contracts
// ============================================================================

#[test]
fn test_fill_bind_contract() {
    let device = create_test_device();

    let mut entity = MeshEntity::new();
    entity.load(parse_ply(UNIT_SQUARE_PLY).unwrap()).unwrap();
    entity.process().unwrap();
    entity.create_gpu_buffers(&device).unwrap();

    let mut binder = RecordingBinder::new();
    entity.bind_for_fill(&mut binder).unwrap();

    assert_eq!(binder.bound_buffers.len(), 1);
    assert!(Arc::ptr_eq(
        &binder.bound_buffers[0],
        entity.fill_buffer().unwrap()
    ));

    // Position at offset 0, normal at offset 12, both Float3, stride 24.
    assert_eq!(binder.attributes.len(), 2);
    let position = binder.attributes[0];
    assert_eq!(position.semantic, VertexAttributeSemantic::Position);
    assert_eq!(position.format, VertexAttributeFormat::Float3);
    assert_eq!(position.stride, 24);
    assert_eq!(position.offset, 0);

    let normal = binder.attributes[1];
    assert_eq!(normal.semantic, VertexAttributeSemantic::Normal);
    assert_eq!(normal.format, VertexAttributeFormat::Float3);
    assert_eq!(normal.stride, 24);
    assert_eq!(normal.offset, 12);
}

#[test]
fn test_wireframe_bind_contract() {
    let device = create_test_device();

    let mut entity = MeshEntity::new();
    entity.load(parse_ply(UNIT_SQUARE_PLY).unwrap()).unwrap();
    entity.process().unwrap();
    entity.create_gpu_buffers(&device).unwrap();

    let mut binder = RecordingBinder::new();
    entity.bind_for_wireframe(&mut binder).unwrap();

    assert_eq!(binder.bound_buffers.len(), 1);
    assert!(Arc::ptr_eq(
        &binder.bound_buffers[0],
        entity.edge_buffer().unwrap()
    ));

    // A single tightly packed position attribute.
    assert_eq!(binder.attributes.len(), 1);
    let position = binder.attributes[0];
    assert_eq!(position.semantic, VertexAttributeSemantic::Position);
    assert_eq!(position.format, VertexAttributeFormat::Float3);
    assert_eq!(position.stride, 0);
    assert_eq!(position.offset, 0);
}

#[test]
fn test_bind_requires_ready() {
    let mut entity = MeshEntity::new();
    entity.load(parse_ply(UNIT_SQUARE_PLY).unwrap()).unwrap();
    entity.process().unwrap();

    let mut binder = RecordingBinder::new();
    let err = entity.bind_for_fill(&mut binder).unwrap_err();
    assert!(matches!(
        err,
        MeshError::State {
            state: MeshState::Processed,
            ..
        }
    ));
    assert!(binder.bound_buffers.is_empty());
}

// ============================================================================
// Resource Lifecycle
// ============================================================================

/// Re-buffering an entity must release its previous buffers.
#[test]
fn test_rebuffer_releases_prior_buffers() {
    let device = create_test_device();

    let mut entity = MeshEntity::new();
    entity.load(parse_ply(UNIT_SQUARE_PLY).unwrap()).unwrap();
    entity.process().unwrap();
    entity.create_gpu_buffers(&device).unwrap();
    assert_eq!(device.buffer_count(), 2);

    entity.create_gpu_buffers(&device).unwrap();
    device.cleanup_dead_resources();
    assert_eq!(device.buffer_count(), 2);
}

/// Re-loading a buffered entity must release its buffers before
/// anything else.
#[test]
fn test_reload_releases_buffers() {
    let device = create_test_device();

    let mut entity = MeshEntity::new();
    entity.load(parse_ply(UNIT_SQUARE_PLY).unwrap()).unwrap();
    entity.process().unwrap();
    entity.create_gpu_buffers(&device).unwrap();
    assert_eq!(device.buffer_count(), 2);

    entity.load(parse_ply(UNIT_SQUARE_PLY).unwrap()).unwrap();
    assert_eq!(entity.state(), MeshState::Loaded);
    device.cleanup_dead_resources();
    assert_eq!(device.buffer_count(), 0);
}

#[test]
fn test_dispose_releases_buffers() {
    let device = create_test_device();

    let mut entity = MeshEntity::new();
    entity.load(parse_ply(UNIT_SQUARE_PLY).unwrap()).unwrap();
    entity.process().unwrap();
    entity.create_gpu_buffers(&device).unwrap();

    entity.dispose();
    device.cleanup_dead_resources();
    assert_eq!(device.buffer_count(), 0);

    // Disposed entities refuse to bind.
    let mut binder = RecordingBinder::new();
    assert!(entity.bind_for_fill(&mut binder).is_err());
}

/// Two entities own independent buffers; disposing one leaves the
/// other untouched.
#[test]
fn test_entities_own_independent_buffers() {
    let device = create_test_device();

    let mut first = MeshEntity::new();
    first.load(parse_ply(UNIT_SQUARE_PLY).unwrap()).unwrap();
    first.process().unwrap();
    first.create_gpu_buffers(&device).unwrap();

    let mut second = MeshEntity::new();
    second.load(parse_ply(UNIT_SQUARE_PLY).unwrap()).unwrap();
    second.process().unwrap();
    second.create_gpu_buffers(&device).unwrap();

    assert_eq!(device.buffer_count(), 4);

    first.dispose();
    device.cleanup_dead_resources();
    assert_eq!(device.buffer_count(), 2);
    assert!(second.is_ready());

    let mut binder = RecordingBinder::new();
    second.bind_for_fill(&mut binder).unwrap();
}
