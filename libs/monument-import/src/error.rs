//! # Import Errors
//!
//! Error types for the record store and the import pipeline.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Writes need a persistent store
    #[error("No record store configured; cannot save monuments in demo mode")]
    NotConfigured,

    /// The backing file could not be read or written
    #[error("Store I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file is not a valid record list
    #[error("Store file {} is not a valid record list: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record violates a field constraint
    #[error("Invalid record: {message}")]
    InvalidRecord { message: String },

    /// The store could not be opened and is serving no data
    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The store handle was closed
    #[error("Store is closed")]
    Closed,
}

impl StoreError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }
}

/// Errors raised while importing or downloading monuments.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The request never reached the service or the body could not be read
    #[error("{service} request failed: {source}")]
    Http {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("{service} request failed ({status})")]
    Upstream { service: &'static str, status: u16 },

    /// The service answered with an unexpected payload
    #[error("Invalid {service} payload: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },

    /// Neither the geocoder nor the stored record has coordinates
    #[error("Missing coordinates for {name}; add lat/lon manually before importing")]
    MissingCoordinates { name: String },

    /// The import request is malformed
    #[error("Invalid import request: {message}")]
    InvalidRequest { message: String },

    /// No Sketchfab API token was provided
    #[error("Missing SKETCHFAB_TOKEN; create a Sketchfab API token and export it first")]
    MissingToken,

    /// Sketchfab exposed neither a GLB nor a glTF download
    #[error("Sketchfab model {uid} has no downloadable GLB/glTF")]
    NoDownload { uid: String },

    /// A downloaded file could not be written
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing the record store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ImportError {
    pub fn http(service: &'static str, source: reqwest::Error) -> Self {
        Self::Http { service, source }
    }

    pub fn decode(service: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            service,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_coordinates_message() {
        let err = ImportError::MissingCoordinates {
            name: "Arco di Tito".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing coordinates for Arco di Tito; add lat/lon manually before importing"
        );
    }

    #[test]
    fn test_upstream_message() {
        let err = ImportError::Upstream {
            service: "overpass",
            status: 504,
        };
        assert_eq!(err.to_string(), "overpass request failed (504)");
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err = ImportError::from(StoreError::NotConfigured);
        assert_eq!(err.to_string(), StoreError::NotConfigured.to_string());
    }
}
