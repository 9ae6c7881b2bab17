//! # Monument GLB
//!
//! Binary glTF 2.0 (`.glb`) container for monument geometry.
//!
//! The writer emits one indexed mesh with `POSITION`, `NORMAL` and `COLOR_0`
//! attributes, 16-bit indices and a single shared material. Output depends
//! only on the input geometry, so rebuilding a model yields identical bytes.
//!
//! ## Usage
//!
//! ```rust
//! use monument_glb::{encode_glb, GlbFile};
//! use monument_mesh::{create_box, BoxSpec};
//!
//! let cube = create_box(&BoxSpec::cube(1.0)).unwrap();
//! let file = GlbFile::parse(&encode_glb(&cube).unwrap()).unwrap();
//! assert_eq!(file.positions().unwrap().len(), cube.vertex_count());
//! ```

pub mod document;
pub mod error;
pub mod reader;
pub mod writer;

pub use document::GltfDocument;
pub use error::{GlbError, GlbResult};
pub use reader::{GlbFile, GlbSummary};
pub use writer::{encode_glb, write_glb};
