//! # Monument Models
//!
//! Fixed recipes assembling primitive geometry into monument meshes, and the
//! generator that writes them as binary glTF files.
//!
//! ## Architecture
//!
//! ```text
//! Archetype::build (primitives + transforms) → Geometry → monument-glb → <slug>.glb
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use config::settings::GeneratorConfig;
//! use monument_models::generate_all;
//!
//! let models = generate_all(&GeneratorConfig::default(), &[]).unwrap();
//! for model in models {
//!     println!("{} → {}", model.archetype, model.path.display());
//! }
//! ```

pub mod arch_ring;
pub mod archetypes;
pub mod error;
pub mod generate;

pub use arch_ring::{create_arch_ring, ArchRingSpec};
pub use archetypes::Archetype;
pub use error::ModelError;
pub use generate::{generate, generate_all, model_path, GeneratedModel};
