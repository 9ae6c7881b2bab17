use super::*;
use approx::assert_relative_eq;

#[test]
fn test_dome_counts() {
    let mesh = create_dome(&DomeSpec::default()).expect("dome succeeds");
    assert_eq!(mesh.vertex_count(), 13 * 24);
    assert_eq!(mesh.triangle_count(), 2 * 12 * 24);
    mesh.validate().expect("valid topology");
}

#[test]
fn test_pole_ring_collapses() {
    let mesh = create_dome(&DomeSpec {
        radius: 2.0,
        segments: 8,
        rings: 4,
        y_offset: 0.5,
    })
    .unwrap();
    for p in &mesh.positions()[..8] {
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 2.5);
        assert_relative_eq!(p.z, 0.0);
    }
}

#[test]
fn test_equator_sits_on_offset() {
    let mesh = create_dome(&DomeSpec {
        radius: 1.0,
        segments: 6,
        rings: 3,
        y_offset: -0.25,
    })
    .unwrap();
    for p in &mesh.positions()[18..] {
        assert_relative_eq!(p.y, -0.25, epsilon = 1e-12);
        assert_relative_eq!((p.x * p.x + p.z * p.z).sqrt(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_normals_point_away_from_base_centre() {
    let spec = DomeSpec {
        radius: 0.85,
        segments: 24,
        rings: 14,
        y_offset: 0.8,
    };
    let mesh = create_dome(&spec).unwrap();
    let centre = DVec3::new(0.0, spec.y_offset, 0.0);
    for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
        assert!((n.length() - 1.0).abs() < config::constants::NORMAL_TOLERANCE);
        assert!((*p - centre).normalize().dot(*n) > 1.0 - 1e-9);
    }
}

#[test]
fn test_dome_rejects_few_rings() {
    assert!(create_dome(&DomeSpec { rings: 2, ..DomeSpec::default() }).is_err());
    assert!(create_dome(&DomeSpec { segments: 0, ..DomeSpec::default() }).is_err());
    assert!(create_dome(&DomeSpec { radius: 0.0, ..DomeSpec::default() }).is_err());
}
