//! Writer → reader round trips over composed geometry.

use glam::DVec3;
use monument_glb::{encode_glb, write_glb, GlbFile};
use monument_mesh::{
    create_box, create_cylinder, create_dome, mix_color, BoxSpec, CylinderSpec, DomeSpec, Geometry,
};

fn composed() -> Geometry {
    let base = create_box(&BoxSpec {
        width: 2.0,
        height: 0.4,
        depth: 1.2,
        y_offset: 0.2,
    })
    .unwrap()
    .with_color(mix_color("#d9c7a1", 0.0).unwrap());
    let drum = create_cylinder(&CylinderSpec {
        segments: 16,
        radius_top: 0.5,
        radius_bottom: 0.6,
        height: 0.8,
        y_offset: 0.8,
    })
    .unwrap()
    .with_color(mix_color("#b27a46", -0.2).unwrap());
    let dome = create_dome(&DomeSpec {
        radius: 0.5,
        segments: 16,
        rings: 6,
        y_offset: 1.2,
    })
    .unwrap()
    .rotated_y(0.3)
    .translated(DVec3::new(0.1, 0.0, -0.1));

    Geometry::merge([&base, &drum, &dome])
}

fn to_f32(values: &[DVec3]) -> Vec<[f32; 3]> {
    values
        .iter()
        .map(|v| [v.x as f32, v.y as f32, v.z as f32])
        .collect()
}

#[test]
fn test_attributes_round_trip_bit_for_bit() {
    let geometry = composed();
    let file = GlbFile::parse(&encode_glb(&geometry).unwrap()).unwrap();

    let same_bits = |a: &[[f32; 3]], b: &[[f32; 3]]| {
        a.len() == b.len()
            && a.iter()
                .zip(b)
                .all(|(x, y)| x.iter().zip(y).all(|(p, q)| p.to_bits() == q.to_bits()))
    };

    assert!(same_bits(&file.positions().unwrap(), &to_f32(geometry.positions())));
    assert!(same_bits(&file.normals().unwrap().unwrap(), &to_f32(geometry.normals())));

    let colors: Vec<[f32; 3]> = geometry
        .resolved_colors()
        .iter()
        .map(|c| [c.r as f32, c.g as f32, c.b as f32])
        .collect();
    assert!(same_bits(&file.colors().unwrap().unwrap(), &colors));
    assert_eq!(file.indices().unwrap(), geometry.indices());
}

#[test]
fn test_buffer_length_matches_padded_sections() {
    let geometry = composed();
    let file = GlbFile::parse(&encode_glb(&geometry).unwrap()).unwrap();
    let document = file.document();

    let padded: usize = document
        .buffer_views
        .iter()
        .map(|view| view.byte_length.div_ceil(4) * 4)
        .sum();
    assert_eq!(document.buffers[0].byte_length, padded);
    assert_eq!(file.binary().len(), padded);

    for pair in document.buffer_views.windows(2) {
        assert_eq!(pair[1].byte_offset, pair[0].byte_offset + pair[0].byte_length.div_ceil(4) * 4);
    }
}

#[test]
fn test_encoding_is_deterministic() {
    assert_eq!(encode_glb(&composed()).unwrap(), encode_glb(&composed()).unwrap());
}

#[test]
fn test_read_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("composed.glb");
    let geometry = composed();
    write_glb(&path, &geometry).unwrap();

    let summary = GlbFile::read(&path).unwrap().summary().unwrap();
    assert_eq!(summary.vertex_count, geometry.vertex_count());
    assert_eq!(summary.index_count, geometry.index_count());
    assert!(summary.has_normals && summary.has_colors);
}

#[test]
fn test_read_missing_file_reports_path() {
    let err = GlbFile::read(std::path::Path::new("/nonexistent/model.glb")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/model.glb"));
}
