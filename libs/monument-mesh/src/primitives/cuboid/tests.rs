use super::*;
use approx::assert_relative_eq;

fn sample() -> Geometry {
    create_box(&BoxSpec {
        width: 1.2,
        height: 0.8,
        depth: 1.0,
        y_offset: -0.1,
    })
    .expect("box succeeds")
}

#[test]
fn test_box_counts() {
    let mesh = sample();
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.index_count(), 36);
    mesh.validate().expect("valid topology");
}

#[test]
fn test_faces_share_flat_normal() {
    let mesh = sample();
    for face in mesh.normals().chunks(4) {
        assert!(face.iter().all(|n| *n == face[0]));
        assert_eq!(face[0].length(), 1.0);
    }
}

#[test]
fn test_triangles_agree_with_face_normal() {
    let mesh = sample();
    for (i, tri) in mesh.triangle_positions().enumerate() {
        let winding = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
        let face_normal = mesh.normals()[(i / 2) * 4];
        assert!(winding.dot(face_normal) > 0.0);
    }
}

#[test]
fn test_box_extent() {
    let (min, max) = sample().bounding_box().unwrap();
    assert_relative_eq!(min.x, -0.6);
    assert_relative_eq!(min.y, -0.5);
    assert_relative_eq!(min.z, -0.5);
    assert_relative_eq!(max.x, 0.6);
    assert_relative_eq!(max.y, 0.3, epsilon = 1e-12);
    assert_relative_eq!(max.z, 0.5);
}

#[test]
fn test_box_rejects_zero_extent() {
    assert!(create_box(&BoxSpec { width: 0.0, ..BoxSpec::cube(1.0) }).is_err());
    assert!(create_box(&BoxSpec { depth: f64::NAN, ..BoxSpec::cube(1.0) }).is_err());
}
