//! # GLB Writer
//!
//! Serializes a [`Geometry`] into a binary glTF 2.0 container.
//!
//! ## Layout
//!
//! ```text
//! header (12)  │ "glTF" │ version 2 │ total length │
//! JSON chunk   │ length │ "JSON"    │ document, space padded │
//! BIN chunk    │ length │ "BIN\0"   │ positions │ normals │ colors │ indices │
//! ```
//!
//! Each binary section is zero padded to 4 bytes; the buffer views record
//! the unpadded length.

use std::fs;
use std::path::Path;

use config::constants::{
    padding_for, BIN_PAD_BYTE, CHUNK_TYPE_BIN, CHUNK_TYPE_JSON, GLB_CHUNK_HEADER_LENGTH,
    GLB_HEADER_LENGTH, GLB_MAGIC, GLB_VERSION, JSON_PAD_BYTE, MAX_INDEX_VALUE,
    TARGET_ARRAY_BUFFER, TARGET_ELEMENT_ARRAY_BUFFER,
};
use monument_mesh::Geometry;
use tracing::debug;

use crate::document::{Accessor, BufferView, GltfDocument};
use crate::error::{GlbError, GlbResult};

/// Encodes `geometry` into GLB bytes.
///
/// Fails on empty geometry, inconsistent attribute arrays, or an index that
/// does not fit in 16 bits.
///
/// # Example
///
/// ```rust
/// use monument_glb::encode_glb;
/// use monument_mesh::{create_box, BoxSpec};
///
/// let cube = create_box(&BoxSpec::cube(1.0)).unwrap();
/// let bytes = encode_glb(&cube).unwrap();
/// assert_eq!(&bytes[..4], b"glTF");
/// assert_eq!(bytes.len() % 4, 0);
/// ```
pub fn encode_glb(geometry: &Geometry) -> GlbResult<Vec<u8>> {
    geometry
        .validate()
        .map_err(|e| GlbError::invalid_geometry(e.to_string()))?;
    let (min, max) = geometry
        .bounding_box()
        .ok_or_else(|| GlbError::invalid_geometry("geometry has no vertices"))?;

    let indices = geometry
        .indices()
        .into_iter()
        .map(|index| {
            u16::try_from(index).map_err(|_| GlbError::IndexOverflow {
                index,
                max: MAX_INDEX_VALUE,
            })
        })
        .collect::<GlbResult<Vec<u16>>>()?;

    let mut bin = Vec::new();
    let mut views = Vec::with_capacity(4);
    for attribute in [
        geometry.positions_f32(),
        geometry.normals_f32(),
        geometry.colors_f32(),
    ] {
        let bytes = attribute.iter().flat_map(|v| v.to_le_bytes());
        views.push(append_section(&mut bin, bytes, TARGET_ARRAY_BUFFER));
    }
    let index_bytes = indices.iter().flat_map(|i| i.to_le_bytes());
    views.push(append_section(&mut bin, index_bytes, TARGET_ELEMENT_ARRAY_BUFFER));

    let vertex_count = geometry.vertex_count();
    let accessors = vec![
        Accessor::vec3(0, vertex_count).with_bounds(min.to_array(), max.to_array()),
        Accessor::vec3(1, vertex_count),
        Accessor::vec3(2, vertex_count),
        Accessor::indices(3, indices.len()),
    ];
    let document = GltfDocument::single_mesh(bin.len(), views, accessors);

    let mut json = serde_json::to_vec(&document)?;
    json.resize(json.len() + padding_for(json.len()), JSON_PAD_BYTE);

    let total_length = GLB_HEADER_LENGTH + 2 * GLB_CHUNK_HEADER_LENGTH + json.len() + bin.len();
    let mut out = Vec::with_capacity(total_length);
    out.extend_from_slice(&GLB_MAGIC);
    out.extend_from_slice(&GLB_VERSION.to_le_bytes());
    out.extend_from_slice(&length_u32(total_length)?.to_le_bytes());

    out.extend_from_slice(&length_u32(json.len())?.to_le_bytes());
    out.extend_from_slice(&CHUNK_TYPE_JSON);
    out.extend_from_slice(&json);

    out.extend_from_slice(&length_u32(bin.len())?.to_le_bytes());
    out.extend_from_slice(&CHUNK_TYPE_BIN);
    out.extend_from_slice(&bin);

    Ok(out)
}

/// Encodes `geometry` and writes it to `path`, creating parent directories
/// and replacing any existing file. Returns the number of bytes written.
pub fn write_glb(path: &Path, geometry: &Geometry) -> GlbResult<usize> {
    let bytes = encode_glb(geometry)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GlbError::io(parent, e))?;
    }
    fs::write(path, &bytes).map_err(|e| GlbError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote glb");
    Ok(bytes.len())
}

/// Appends `bytes` to `bin` as one zero-padded section and describes it.
fn append_section(
    bin: &mut Vec<u8>,
    bytes: impl IntoIterator<Item = u8>,
    target: u32,
) -> BufferView {
    let byte_offset = bin.len();
    bin.extend(bytes);
    let byte_length = bin.len() - byte_offset;
    bin.resize(bin.len() + padding_for(byte_length), BIN_PAD_BYTE);
    BufferView {
        buffer: 0,
        byte_offset,
        byte_length,
        byte_stride: None,
        target: Some(target),
    }
}

fn length_u32(len: usize) -> GlbResult<u32> {
    u32::try_from(len).map_err(|_| GlbError::malformed(format!("length {len} exceeds 4 GiB")))
}

#[cfg(test)]
mod tests;
