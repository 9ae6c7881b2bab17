//! # GLB Errors
//!
//! Error types for writing and reading binary glTF containers.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while encoding, writing or parsing a container.
#[derive(Debug, Error)]
pub enum GlbError {
    /// Filesystem failure
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON chunk could not be serialized or parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Index value does not fit the 16-bit index buffer
    #[error("Index {index} exceeds the 16-bit index range (max: {max})")]
    IndexOverflow { index: u32, max: u32 },

    /// Geometry is empty or its attribute arrays disagree
    #[error("Invalid geometry: {message}")]
    InvalidGeometry { message: String },

    /// Container bytes do not form a valid GLB
    #[error("Malformed container: {message}")]
    Malformed { message: String },
}

impl GlbError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Creates a malformed container error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Result type for container operations.
pub type GlbResult<T> = Result<T, GlbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = GlbError::io(
            Path::new("out/colosseum.glb"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("out/colosseum.glb"));
    }

    #[test]
    fn test_index_overflow_display() {
        let err = GlbError::IndexOverflow {
            index: 70_000,
            max: 65_535,
        };
        assert_eq!(
            err.to_string(),
            "Index 70000 exceeds the 16-bit index range (max: 65535)"
        );
    }
}
