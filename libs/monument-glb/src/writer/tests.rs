use super::*;
use approx::assert_relative_eq;
use layout::*;
use monument_mesh::{create_box, create_dome, BoxSpec, DomeSpec, Rgb};

/// Raw chunk access without going through the reader.
mod layout {
    pub fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    pub fn json_chunk(bytes: &[u8]) -> &[u8] {
        let len = u32_at(bytes, 12) as usize;
        &bytes[20..20 + len]
    }

    pub fn bin_chunk(bytes: &[u8]) -> &[u8] {
        let json_len = u32_at(bytes, 12) as usize;
        let start = 20 + json_len;
        let len = u32_at(bytes, start) as usize;
        &bytes[start + 8..start + 8 + len]
    }
}

fn single_triangle() -> Geometry {
    let mut geometry = Geometry::new();
    geometry.push_vertex(glam::DVec3::ZERO, glam::DVec3::Y);
    geometry.push_vertex(glam::DVec3::X, glam::DVec3::Y);
    geometry.push_vertex(glam::DVec3::Z, glam::DVec3::Y);
    geometry.push_triangle(0, 2, 1);
    geometry
}

#[test]
fn test_header_fields() {
    let bytes = encode_glb(&create_box(&BoxSpec::cube(1.0)).unwrap()).unwrap();
    assert_eq!(&bytes[0..4], b"glTF");
    assert_eq!(u32_at(&bytes, 4), 2);
    assert_eq!(u32_at(&bytes, 8) as usize, bytes.len());
    assert_eq!(&bytes[16..20], b"JSON");
}

#[test]
fn test_chunks_are_aligned() {
    let bytes = encode_glb(&single_triangle()).unwrap();
    let json = json_chunk(&bytes);
    assert_eq!(json.len() % 4, 0);
    let bin_header = 20 + json.len();
    assert_eq!(bin_header % 4, 0);
    assert_eq!(&bytes[bin_header + 4..bin_header + 8], b"BIN\0");
    assert_eq!(bin_chunk(&bytes).len() % 4, 0);
    assert_eq!(bytes.len(), 12 + 8 + json.len() + 8 + bin_chunk(&bytes).len());
}

#[test]
fn test_json_padded_with_spaces() {
    let bytes = encode_glb(&single_triangle()).unwrap();
    let json = json_chunk(&bytes);
    let trimmed = json.iter().rposition(|&b| b == b'}').unwrap() + 1;
    assert!(json[trimmed..].iter().all(|&b| b == b' '));
    assert!(json.len() - trimmed < 4);
    let document: GltfDocument = serde_json::from_slice(json).unwrap();
    assert_eq!(document.asset.version, "2.0");
}

#[test]
fn test_buffer_views_use_unpadded_lengths() {
    let bytes = encode_glb(&single_triangle()).unwrap();
    let document: GltfDocument = serde_json::from_slice(json_chunk(&bytes)).unwrap();
    let views = &document.buffer_views;

    assert_eq!(views.len(), 4);
    assert_eq!((views[0].byte_offset, views[0].byte_length), (0, 36));
    assert_eq!((views[1].byte_offset, views[1].byte_length), (36, 36));
    assert_eq!((views[2].byte_offset, views[2].byte_length), (72, 36));
    // Three u16 indices take 6 bytes, padded to 8
    assert_eq!((views[3].byte_offset, views[3].byte_length), (108, 6));
    assert_eq!(document.buffers[0].byte_length, 116);
    assert_eq!(bin_chunk(&bytes).len(), 116);
    assert_eq!(&bin_chunk(&bytes)[114..], &[0, 0]);

    assert_eq!(views[0].target, Some(34962));
    assert_eq!(views[3].target, Some(34963));
}

#[test]
fn test_accessors_describe_geometry() {
    let dome = create_dome(&DomeSpec::default()).unwrap().with_color(Rgb::new(0.5, 0.5, 0.5));
    let bytes = encode_glb(&dome).unwrap();
    let document: GltfDocument = serde_json::from_slice(json_chunk(&bytes)).unwrap();

    assert_eq!(document.accessors[0].count, dome.vertex_count());
    assert_eq!(document.accessors[2].count, dome.vertex_count());
    assert_eq!(document.accessors[3].count, dome.index_count());
    assert_eq!(document.accessors[3].component_type, 5123);
    assert_eq!(document.accessors[3].kind, "SCALAR");

    let (min, max) = dome.bounding_box().unwrap();
    let bounds = |values: &Option<Vec<crate::document::JsNumber>>| {
        values.as_ref().unwrap().iter().map(|n| n.0).collect::<Vec<_>>()
    };
    for (written, expected) in bounds(&document.accessors[0].min).iter().zip(min.to_array()) {
        assert_relative_eq!(*written, expected, epsilon = 1e-12);
    }
    for (written, expected) in bounds(&document.accessors[0].max).iter().zip(max.to_array()) {
        assert_relative_eq!(*written, expected, epsilon = 1e-12);
    }
    assert!(document.accessors[1].min.is_none());
}

#[test]
fn test_position_bytes_are_little_endian_f32() {
    let bytes = encode_glb(&single_triangle()).unwrap();
    let bin = bin_chunk(&bytes);
    // Second vertex is (1, 0, 0)
    assert_eq!(&bin[12..16], &1.0f32.to_le_bytes());
    // Index list is 0, 2, 1
    assert_eq!(&bin[108..114], &[0, 0, 2, 0, 1, 0]);
}

#[test]
fn test_missing_colors_export_white() {
    let bytes = encode_glb(&single_triangle()).unwrap();
    let colors = &bin_chunk(&bytes)[72..108];
    for chunk in colors.chunks_exact(4) {
        assert_eq!(chunk, &1.0f32.to_le_bytes());
    }
}

#[test]
fn test_rejects_empty_geometry() {
    let err = encode_glb(&Geometry::new()).unwrap_err();
    assert!(matches!(err, GlbError::InvalidGeometry { .. }));
}

#[test]
fn test_rejects_out_of_range_index() {
    let mut geometry = single_triangle();
    geometry.push_triangle(0, 1, 7);
    assert!(matches!(
        encode_glb(&geometry),
        Err(GlbError::InvalidGeometry { .. })
    ));
}

#[test]
fn test_rejects_index_overflow() {
    let mut geometry = Geometry::with_capacity(70_000, 1);
    for i in 0..70_000 {
        geometry.push_vertex(glam::DVec3::new(i as f64, 0.0, 0.0), glam::DVec3::Y);
    }
    geometry.push_triangle(0, 1, 69_999);
    match encode_glb(&geometry) {
        Err(GlbError::IndexOverflow { index, max }) => {
            assert_eq!(index, 69_999);
            assert_eq!(max, 65_535);
        }
        other => panic!("expected index overflow, got {other:?}"),
    }
}

#[test]
fn test_write_creates_directories_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/models/box.glb");
    let cube = create_box(&BoxSpec::cube(2.0)).unwrap();

    let written = write_glb(&path, &cube).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len() as usize, written);

    let again = write_glb(&path, &cube).unwrap();
    assert_eq!(written, again);
    assert_eq!(std::fs::read(&path).unwrap(), encode_glb(&cube).unwrap());
}
