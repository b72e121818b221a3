// Host-side tests for camera matrices and field vertex packing.

use glam::Vec4;
use ridges_core::*;

fn field_with(count: usize) -> RidgeField {
    let mut factory = RidgeFactory::new(8);
    let mut field = RidgeField::new();
    for _ in 0..count {
        field.advance(2.0);
        field.insert(factory.create(&FrequencySnapshot::from_bins(&[90u8; SNAPSHOT_BINS])));
    }
    field
}

#[test]
fn mesh_sizes_scale_with_ridge_count() {
    let mut mesh = RidgeMesh::default();
    mesh.rebuild(&field_with(3));
    assert_eq!(mesh.lines.len(), 3 * LINE_VERTICES_PER_RIDGE);
    assert_eq!(mesh.fills.len(), 3 * FILL_VERTICES_PER_RIDGE);
    assert_eq!(mesh.line_bytes().len(), mesh.lines.len() * std::mem::size_of::<RidgeVertex>());

    mesh.rebuild(&RidgeField::new());
    assert!(mesh.lines.is_empty());
    assert!(mesh.fills.is_empty());
}

#[test]
fn line_segments_follow_ridge_points() {
    let field = field_with(2);
    let mut mesh = RidgeMesh::default();
    mesh.rebuild(&field);
    let oldest = field.current().next().unwrap();
    let world: Vec<_> = oldest.world_points().collect();
    assert_eq!(mesh.lines[0].position, world[0].to_array());
    assert_eq!(mesh.lines[1].position, world[1].to_array());
    assert_eq!(mesh.lines[2].position, world[1].to_array());
    assert_eq!(mesh.lines[0].color, oldest.color.to_rgba());
    assert!(mesh.lines[..LINE_VERTICES_PER_RIDGE]
        .iter()
        .all(|v| v.position[2] == oldest.depth()));
}

#[test]
fn fills_are_opaque_black() {
    let mut mesh = RidgeMesh::default();
    mesh.rebuild(&field_with(1));
    assert!(mesh.fills.iter().all(|v| v.color == FILL_COLOR));
    assert!(mesh.fills.iter().any(|v| v.position[1] == FILL_BASE_Y));
}

#[test]
fn camera_target_projects_inside_clip_volume() {
    let camera = OrthoCamera::default();
    let vp = camera.view_proj();
    let eye_to_target = (camera.target - camera.eye).length();
    assert!(eye_to_target > camera.znear && eye_to_target < camera.zfar);
    let clip = vp * Vec4::new(camera.target.x, camera.target.y, camera.target.z, 1.0);
    assert!(clip.z >= 0.0 && clip.z <= 1.0, "depth {}", clip.z);
    assert!((clip.w - 1.0).abs() < 1e-6);
}
