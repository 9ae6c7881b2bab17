//! # GLB Reader
//!
//! Parses a binary glTF container back into its document and binary chunk,
//! and decodes attribute arrays through the declared accessors.

use std::fs;
use std::path::Path;

use config::constants::{
    CHUNK_TYPE_BIN, CHUNK_TYPE_JSON, COMPONENT_FLOAT, COMPONENT_UNSIGNED_SHORT,
    GLB_CHUNK_HEADER_LENGTH, GLB_HEADER_LENGTH, GLB_MAGIC, GLB_VERSION,
};

use crate::document::{Accessor, GltfDocument, TYPE_SCALAR, TYPE_VEC3};
use crate::error::{GlbError, GlbResult};

/// `accessor.componentType` for 32-bit unsigned integers.
const COMPONENT_UNSIGNED_INT: u32 = 5125;

/// A parsed container.
#[derive(Debug, Clone, PartialEq)]
pub struct GlbFile {
    document: GltfDocument,
    binary: Vec<u8>,
}

/// Counts and bounds of the primary mesh, as printed by `inspect`.
#[derive(Debug, Clone, PartialEq)]
pub struct GlbSummary {
    pub generator: Option<String>,
    pub vertex_count: usize,
    pub index_count: usize,
    pub has_normals: bool,
    pub has_colors: bool,
    pub min: Option<[f64; 3]>,
    pub max: Option<[f64; 3]>,
    pub binary_length: usize,
}

impl GlbFile {
    /// Parses container bytes.
    ///
    /// Checks the magic, version and declared length, requires the first
    /// chunk to be JSON, and bounds-checks every chunk. The BIN chunk is
    /// optional.
    pub fn parse(bytes: &[u8]) -> GlbResult<Self> {
        if bytes.len() < GLB_HEADER_LENGTH {
            return Err(GlbError::malformed("file shorter than header"));
        }
        if bytes[..4] != GLB_MAGIC {
            return Err(GlbError::malformed("missing glTF magic"));
        }
        let version = read_u32(bytes, 4)?;
        if version != GLB_VERSION {
            return Err(GlbError::malformed(format!("unsupported version {version}")));
        }
        let declared = read_u32(bytes, 8)? as usize;
        if declared != bytes.len() {
            return Err(GlbError::malformed(format!(
                "declared length {declared} but file has {} bytes",
                bytes.len()
            )));
        }

        let (json_type, json, next) = read_chunk(bytes, GLB_HEADER_LENGTH)?;
        if json_type != CHUNK_TYPE_JSON {
            return Err(GlbError::malformed("first chunk is not JSON"));
        }
        let document: GltfDocument = serde_json::from_slice(json)?;

        let binary = if next < bytes.len() {
            let (bin_type, bin, _) = read_chunk(bytes, next)?;
            if bin_type != CHUNK_TYPE_BIN {
                return Err(GlbError::malformed("second chunk is not BIN"));
            }
            bin.to_vec()
        } else {
            Vec::new()
        };

        Ok(Self { document, binary })
    }

    /// Reads and parses the file at `path`.
    pub fn read(path: &Path) -> GlbResult<Self> {
        let bytes = fs::read(path).map_err(|e| GlbError::io(path, e))?;
        Self::parse(&bytes)
    }

    pub fn document(&self) -> &GltfDocument {
        &self.document
    }

    /// Raw BIN chunk payload, including section padding.
    pub fn binary(&self) -> &[u8] {
        &self.binary
    }

    /// Decoded positions of the primary mesh.
    pub fn positions(&self) -> GlbResult<Vec<[f32; 3]>> {
        let primitive = self.primitive()?;
        self.read_vec3(primitive.attributes.position)
    }

    /// Decoded normals, `None` when the mesh has none.
    pub fn normals(&self) -> GlbResult<Option<Vec<[f32; 3]>>> {
        self.primitive()?
            .attributes
            .normal
            .map(|accessor| self.read_vec3(accessor))
            .transpose()
    }

    /// Decoded `COLOR_0` values, `None` when the mesh has none.
    pub fn colors(&self) -> GlbResult<Option<Vec<[f32; 3]>>> {
        self.primitive()?
            .attributes
            .color
            .map(|accessor| self.read_vec3(accessor))
            .transpose()
    }

    /// Decoded index list, empty for non-indexed meshes.
    pub fn indices(&self) -> GlbResult<Vec<u32>> {
        let Some(index) = self.primitive()?.indices else {
            return Ok(Vec::new());
        };
        let accessor = self.accessor(index)?;
        if accessor.kind != TYPE_SCALAR {
            return Err(GlbError::malformed(format!(
                "index accessor has type {}",
                accessor.kind
            )));
        }
        match accessor.component_type {
            COMPONENT_UNSIGNED_SHORT => Ok(self
                .accessor_bytes(accessor, 2)?
                .chunks_exact(2)
                .map(|c| u32::from(u16::from_le_bytes([c[0], c[1]])))
                .collect()),
            COMPONENT_UNSIGNED_INT => Ok(self
                .accessor_bytes(accessor, 4)?
                .chunks_exact(4)
                .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect()),
            other => Err(GlbError::malformed(format!(
                "unsupported index component type {other}"
            ))),
        }
    }

    /// Counts and bounds of the primary mesh.
    pub fn summary(&self) -> GlbResult<GlbSummary> {
        let primitive = self.primitive()?;
        let position = self.accessor(primitive.attributes.position)?;
        let bounds = |values: &Option<Vec<crate::document::JsNumber>>| {
            values
                .as_deref()
                .and_then(|v| <[_; 3]>::try_from(v).ok())
                .map(|v| v.map(|n| n.0))
        };
        let index_count = match primitive.indices {
            Some(index) => self.accessor(index)?.count,
            None => 0,
        };

        Ok(GlbSummary {
            generator: self.document.asset.generator.clone(),
            vertex_count: position.count,
            index_count,
            has_normals: primitive.attributes.normal.is_some(),
            has_colors: primitive.attributes.color.is_some(),
            min: bounds(&position.min),
            max: bounds(&position.max),
            binary_length: self.binary.len(),
        })
    }

    fn primitive(&self) -> GlbResult<&crate::document::Primitive> {
        self.document
            .primary_primitive()
            .ok_or_else(|| GlbError::malformed("document has no mesh primitive"))
    }

    fn accessor(&self, index: usize) -> GlbResult<&Accessor> {
        self.document
            .accessors
            .get(index)
            .ok_or_else(|| GlbError::malformed(format!("accessor {index} does not exist")))
    }

    fn read_vec3(&self, index: usize) -> GlbResult<Vec<[f32; 3]>> {
        let accessor = self.accessor(index)?;
        if accessor.component_type != COMPONENT_FLOAT || accessor.kind != TYPE_VEC3 {
            return Err(GlbError::malformed(format!(
                "accessor {index} is not a float VEC3"
            )));
        }
        Ok(self
            .accessor_bytes(accessor, 12)?
            .chunks_exact(12)
            .map(|c| {
                let f = |o: usize| f32::from_le_bytes([c[o], c[o + 1], c[o + 2], c[o + 3]]);
                [f(0), f(4), f(8)]
            })
            .collect())
    }

    /// The tightly packed bytes an accessor covers.
    fn accessor_bytes(&self, accessor: &Accessor, element_size: usize) -> GlbResult<&[u8]> {
        let view = self
            .document
            .buffer_views
            .get(accessor.buffer_view)
            .ok_or_else(|| {
                GlbError::malformed(format!("buffer view {} does not exist", accessor.buffer_view))
            })?;
        if view.buffer != 0 {
            return Err(GlbError::malformed("only the embedded buffer is supported"));
        }
        if view.byte_stride.is_some_and(|stride| stride != element_size) {
            return Err(GlbError::malformed("interleaved buffer views are not supported"));
        }

        let out_of_bounds = || {
            GlbError::malformed(format!(
                "accessor over buffer view {} is out of bounds",
                accessor.buffer_view
            ))
        };
        let start = view
            .byte_offset
            .checked_add(accessor.byte_offset.unwrap_or(0))
            .ok_or_else(out_of_bounds)?;
        let end = accessor
            .count
            .checked_mul(element_size)
            .and_then(|length| start.checked_add(length))
            .ok_or_else(out_of_bounds)?;
        let view_end = view
            .byte_offset
            .checked_add(view.byte_length)
            .ok_or_else(out_of_bounds)?;
        if end > view_end || view_end > self.binary.len() {
            return Err(out_of_bounds());
        }
        Ok(&self.binary[start..end])
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> GlbResult<u32> {
    bytes
        .get(offset..offset + 4)
        .and_then(|s| <[u8; 4]>::try_from(s).ok())
        .map(u32::from_le_bytes)
        .ok_or_else(|| GlbError::malformed(format!("truncated at byte {offset}")))
}

/// Reads the chunk at `offset`, returning its type, payload and the offset of
/// the next chunk.
fn read_chunk(bytes: &[u8], offset: usize) -> GlbResult<([u8; 4], &[u8], usize)> {
    let length = read_u32(bytes, offset)? as usize;
    let kind = read_u32(bytes, offset + 4)?.to_le_bytes();
    let start = offset + GLB_CHUNK_HEADER_LENGTH;
    let overrun = || GlbError::malformed(format!("chunk at byte {offset} overruns the file"));
    let end = start.checked_add(length).ok_or_else(overrun)?;
    let payload = bytes.get(start..end).ok_or_else(overrun)?;
    Ok((kind, payload, end))
}
