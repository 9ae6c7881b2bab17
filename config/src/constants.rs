//! # Configuration Constants
//!
//! Centralized constants for the monument model pipeline. Binary container
//! layout, material parameters, tessellation defaults and external service
//! endpoints are defined here.
//!
//! ## Categories
//!
//! - **Container**: GLB header, chunk and accessor constants
//! - **Material**: Fixed shading parameters written into every model
//! - **Tessellation**: Default primitive resolution and shape literals
//! - **Paths**: Default output locations
//! - **Services**: Endpoints of the enrichment and geocoding sources

// =============================================================================
// CONTAINER CONSTANTS
// =============================================================================

/// Magic bytes opening every binary glTF file.
///
/// # Example
///
/// ```rust
/// use config::constants::GLB_MAGIC;
///
/// let header = [b'g', b'l', b'T', b'F', 2, 0, 0, 0];
/// assert_eq!(&header[..4], &GLB_MAGIC);
/// ```
pub const GLB_MAGIC: [u8; 4] = *b"glTF";

/// Container version written into the header.
pub const GLB_VERSION: u32 = 2;

/// Size of the fixed file header (magic, version, total length).
pub const GLB_HEADER_LENGTH: usize = 12;

/// Size of each chunk header (length, type tag).
pub const GLB_CHUNK_HEADER_LENGTH: usize = 8;

/// Chunk type tag of the JSON metadata chunk.
pub const CHUNK_TYPE_JSON: [u8; 4] = *b"JSON";

/// Chunk type tag of the binary payload chunk.
pub const CHUNK_TYPE_BIN: [u8; 4] = *b"BIN\0";

/// Alignment every chunk payload and buffer view is padded to.
///
/// # Example
///
/// ```rust
/// use config::constants::GLB_ALIGNMENT;
///
/// let len = 13;
/// let padded = len + (GLB_ALIGNMENT - len % GLB_ALIGNMENT) % GLB_ALIGNMENT;
/// assert_eq!(padded, 16);
/// ```
pub const GLB_ALIGNMENT: usize = 4;

/// Pad byte for the JSON chunk (ASCII space).
pub const JSON_PAD_BYTE: u8 = 0x20;

/// Pad byte for binary buffers.
pub const BIN_PAD_BYTE: u8 = 0x00;

/// `bufferView.target` for vertex attribute data.
pub const TARGET_ARRAY_BUFFER: u32 = 34962;

/// `bufferView.target` for index data.
pub const TARGET_ELEMENT_ARRAY_BUFFER: u32 = 34963;

/// `accessor.componentType` for 32-bit floats.
pub const COMPONENT_FLOAT: u32 = 5126;

/// `accessor.componentType` for 16-bit unsigned integers.
pub const COMPONENT_UNSIGNED_SHORT: u32 = 5123;

/// glTF asset version string.
pub const ASSET_VERSION: &str = "2.0";

/// Generator name recorded in the asset block.
pub const ASSET_GENERATOR: &str = "ItalySpot Model Generator";

// =============================================================================
// MATERIAL CONSTANTS
// =============================================================================

/// Name of the single material shared by all generated models.
pub const MATERIAL_NAME: &str = "LowPolyMaterial";

/// Metallic factor of the shared material.
pub const MATERIAL_METALLIC: f64 = 0.05;

/// Roughness factor of the shared material.
pub const MATERIAL_ROUGHNESS: f64 = 0.75;

/// Base color factor of the shared material; vertex colors carry the tint.
pub const MATERIAL_BASE_COLOR: [u8; 4] = [1, 1, 1, 1];

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Smallest segment or ring count a primitive builder accepts.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SEGMENTS;
///
/// let requested = 2u32;
/// assert!(requested < MIN_SEGMENTS);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

/// Default longitude steps of a dome.
pub const DEFAULT_DOME_SEGMENTS: u32 = 24;

/// Default latitude bands of a dome.
pub const DEFAULT_DOME_RINGS: u32 = 12;

/// Height of the platform band capping an arch ring.
pub const ARCH_BAND_HEIGHT: f64 = 0.08;

/// Scale applied to the lean factor before it is added to normal X.
pub const LEAN_NORMAL_FACTOR: f64 = 0.4;

/// Largest index value representable in the index buffer.
pub const MAX_INDEX_VALUE: u32 = u16::MAX as u32;

/// Tolerance for unit-length checks on normals.
pub const NORMAL_TOLERANCE: f64 = 1e-5;

// =============================================================================
// PATH CONSTANTS
// =============================================================================

/// Default directory generated models are written to.
pub const DEFAULT_MODELS_DIR: &str = "public/models";

/// Default directory downloaded original models are written to.
pub const DEFAULT_ORIGINALS_DIR: &str = "public/models/original";

/// File extension of generated models.
pub const MODEL_EXTENSION: &str = "glb";

/// Public URL prefix under which generated models are served.
pub const MODEL_URL_PREFIX: &str = "/models";

// =============================================================================
// SERVICE CONSTANTS
// =============================================================================

/// Wikidata action API endpoint.
pub const WIKIDATA_ENDPOINT: &str = "https://www.wikidata.org/w/api.php";

/// Overpass API interpreter endpoint.
pub const OVERPASS_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Sketchfab model API base.
pub const SKETCHFAB_API_BASE: &str = "https://api.sketchfab.com/v3/models";

/// Language requested from Wikidata.
pub const WIKIDATA_LANGUAGE: &str = "it";

/// Fallback language for Wikidata descriptions.
pub const WIKIDATA_FALLBACK_LANGUAGE: &str = "en";

/// Wikidata property holding the inception date.
pub const WIKIDATA_INCEPTION_PROPERTY: &str = "P571";

/// Default timeout applied to every outbound HTTP call, in milliseconds.
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 15_000;

/// User agent sent to public APIs.
pub const HTTP_USER_AGENT: &str = "monuments-import/0.1";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of pad bytes needed to bring `len` up to [`GLB_ALIGNMENT`].
///
/// # Example
///
/// ```rust
/// use config::constants::padding_for;
///
/// assert_eq!(padding_for(0), 0);
/// assert_eq!(padding_for(6), 2);
/// assert_eq!(padding_for(8), 0);
/// ```
#[inline]
pub const fn padding_for(len: usize) -> usize {
    (GLB_ALIGNMENT - len % GLB_ALIGNMENT) % GLB_ALIGNMENT
}

/// Public URL of the generated model for `slug`.
///
/// # Example
///
/// ```rust
/// use config::constants::model_url;
///
/// assert_eq!(model_url("duomo"), "/models/duomo.glb");
/// ```
pub fn model_url(slug: &str) -> String {
    format!("{MODEL_URL_PREFIX}/{slug}.{MODEL_EXTENSION}")
}
