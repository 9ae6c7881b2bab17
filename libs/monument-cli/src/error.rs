use std::io;
use std::path::PathBuf;

use config::settings::ConfigError;
use monument_glb::GlbError;
use monument_import::{ImportError, StoreError};
use monument_models::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Glb(#[from] GlbError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write output: {0}")]
    Output(#[from] serde_json::Error),
    #[error("a Sketchfab token is required (--token or SKETCHFAB_TOKEN)")]
    MissingToken,
    #[error("{failed} of {total} operations failed")]
    Partial { failed: usize, total: usize },
}

pub(crate) type CliResult<T> = Result<T, CliError>;
