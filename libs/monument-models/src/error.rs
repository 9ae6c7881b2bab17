//! # Model Errors
//!
//! Errors raised while assembling or writing monument models.

use monument_glb::GlbError;
use monument_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur during model generation.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A recipe produced invalid geometry parameters
    #[error("Geometry error: {0}")]
    Mesh(#[from] MeshError),

    /// The model could not be serialized or written
    #[error("Export error: {0}")]
    Export(#[from] GlbError),

    /// No recipe exists for the requested slug
    #[error("Unknown archetype: {0:?}")]
    UnknownArchetype(String),
}
