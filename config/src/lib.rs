//! # Config Crate
//!
//! Centralized configuration for the monument model pipeline. Every literal
//! shared between crates (GLB format constants, tessellation defaults,
//! external endpoints, default paths) lives here, together with the
//! validated settings structs the binaries construct at startup.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GLB_MAGIC, GLB_VERSION, CHUNK_TYPE_JSON};
//!
//! assert_eq!(&GLB_MAGIC, b"glTF");
//! assert_eq!(GLB_VERSION, 2);
//! assert_eq!(&CHUNK_TYPE_JSON, b"JSON");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Bit-stable**: Format and material literals match already shipped files
//! - **Validated settings**: Runtime settings are checked once at construction

pub mod constants;
pub mod settings;
