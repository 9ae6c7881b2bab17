//! # Mesh Errors
//!
//! Error types for geometry construction. Malformed builder parameters are
//! reported as explicit errors instead of producing degenerate meshes.

use thiserror::Error;

/// Errors that can occur while building or transforming geometry.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// A builder received a parameter outside its domain
    #[error("Invalid parameter for {primitive}: {message}")]
    InvalidParameter {
        primitive: &'static str,
        message: String,
    },

    /// A color literal could not be parsed
    #[error("Invalid color literal: {value:?}")]
    InvalidColor { value: String },

    /// Geometry violates its structural invariants
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(primitive: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            primitive,
            message: message.into(),
        }
    }

    /// Creates an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

/// Result type alias for geometry operations.
pub type MeshResult<T> = Result<T, MeshError>;
