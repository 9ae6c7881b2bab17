use std::path::PathBuf;

use clap::{Args, Subcommand};
use config::constants::{
    DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_MODELS_DIR, DEFAULT_ORIGINALS_DIR, OVERPASS_ENDPOINT,
    SKETCHFAB_API_BASE, WIKIDATA_ENDPOINT,
};
use config::settings::{ConfigError, ImportConfig};
use monument_models::Archetype;

/// Outbound HTTP settings shared by the networked subcommands.
#[derive(Debug, Clone, Args)]
pub(crate) struct HttpArgs {
    /// Timeout of each outbound request
    #[arg(long, env = "MONUMENTS_HTTP_TIMEOUT_MS", default_value_t = DEFAULT_HTTP_TIMEOUT_MS)]
    pub http_timeout_ms: u64,
    #[arg(long, env = "MONUMENTS_WIKIDATA_ENDPOINT", default_value = WIKIDATA_ENDPOINT)]
    pub wikidata_endpoint: String,
    #[arg(long, env = "MONUMENTS_OVERPASS_ENDPOINT", default_value = OVERPASS_ENDPOINT)]
    pub overpass_endpoint: String,
}

impl HttpArgs {
    pub(crate) fn import_config(&self) -> Result<ImportConfig, ConfigError> {
        ImportConfig::new(
            self.http_timeout_ms,
            &self.wikidata_endpoint,
            &self.overpass_endpoint,
        )
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Build the procedural models and write them as .glb files
    Generate {
        #[arg(long, env = "MONUMENTS_MODELS_DIR", default_value = DEFAULT_MODELS_DIR)]
        out: PathBuf,
        /// Generate only these monuments (repeatable)
        #[arg(long = "only", value_name = "SLUG")]
        only: Vec<Archetype>,
        /// Build one model at a time
        #[arg(long, default_value_t = false)]
        sequential: bool,
    },
    /// Print counts and bounds of a .glb file
    Inspect { file: PathBuf },
    /// Enrich and upsert monuments listed in a request file
    Import {
        #[arg(long)]
        request: PathBuf,
        #[arg(long, env = "MONUMENTS_STORE")]
        store: Option<PathBuf>,
        #[command(flatten)]
        http: HttpArgs,
    },
    /// Print all records as JSON
    List {
        #[arg(long, env = "MONUMENTS_STORE")]
        store: Option<PathBuf>,
    },
    /// Replace the seed monuments in the store
    Seed {
        #[arg(long, env = "MONUMENTS_STORE")]
        store: PathBuf,
    },
    /// Download original Sketchfab models of records with a Sketchfab uid
    FetchOriginals {
        #[arg(long, default_value = DEFAULT_ORIGINALS_DIR)]
        out: PathBuf,
        #[arg(long, env = "MONUMENTS_STORE")]
        store: Option<PathBuf>,
        #[arg(long, env = "SKETCHFAB_TOKEN", hide_env_values = true)]
        token: Option<String>,
        #[arg(long, env = "SKETCHFAB_API_BASE", default_value = SKETCHFAB_API_BASE)]
        sketchfab_api: String,
        #[command(flatten)]
        http: HttpArgs,
    },
}
