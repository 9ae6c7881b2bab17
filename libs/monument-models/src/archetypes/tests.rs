use super::*;
use config::constants::{MAX_INDEX_VALUE, NORMAL_TOLERANCE};

#[test]
fn test_every_archetype_builds_valid_geometry() {
    for archetype in Archetype::ALL {
        let geometry = archetype.build().expect("recipe succeeds");
        geometry.validate().expect("valid topology");
        assert_eq!(geometry.colors().map(<[_]>::len), Some(geometry.vertex_count()));
        assert!(geometry.vertex_count() <= MAX_INDEX_VALUE as usize + 1);
    }
}

#[test]
fn test_colosseum_counts() {
    let geometry = Archetype::Colosseum.build().unwrap();
    // 6 tiers of 32 segments, arch rings of 18 and 16 columns
    let tiers = 6 * (4 * 32 + 2);
    let lower_ring = 18 * 24 + (4 * 36 + 2);
    let upper_ring = 16 * 24 + (4 * 32 + 2);
    assert_eq!(geometry.vertex_count(), tiers + lower_ring + upper_ring);

    let tier_triangles = 6 * 4 * 32;
    let ring_triangles = 18 * 12 + 4 * 36 + 16 * 12 + 4 * 32;
    assert_eq!(geometry.triangle_count(), tier_triangles + ring_triangles);
}

#[test]
fn test_duomo_counts() {
    let geometry = Archetype::Duomo.build().unwrap();
    let boxes = 9 * 24;
    let cylinders = (4 * 24 + 2) + (4 * 18 + 2) + 2 * (4 * 12 + 2);
    let dome = 15 * 24;
    assert_eq!(geometry.vertex_count(), boxes + cylinders + dome);
}

#[test]
fn test_tower_leans_toward_positive_x() {
    let geometry = Archetype::Tower.build().unwrap();
    let (min, max) = geometry.bounding_box().unwrap();
    // Unleaned the tower is symmetric about the Y axis
    assert!(max.x + min.x > 0.0);
    for n in geometry.normals() {
        assert!((n.length() - 1.0).abs() < NORMAL_TOLERANCE);
    }
}

#[test]
fn test_builds_are_deterministic() {
    for archetype in Archetype::ALL {
        assert_eq!(archetype.build().unwrap(), archetype.build().unwrap());
    }
}

#[test]
fn test_slug_round_trip() {
    for archetype in Archetype::ALL {
        assert_eq!(archetype.slug().parse::<Archetype>().unwrap(), archetype);
        assert_eq!(archetype.to_string(), archetype.slug());
    }
    assert!("pantheon".parse::<Archetype>().is_err());
}
