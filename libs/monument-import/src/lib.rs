//! # Monument Import
//!
//! Monument records and the pipeline that keeps them up to date.
//!
//! ## Architecture
//!
//! ```text
//! ImportRequest ─► Importer ─┬─► Catalog ─► MonumentStore (memory / JSON file)
//!                            │      └─► seed data when the store is unavailable
//!                            ├─► EnrichmentSource (Wikidata)
//!                            └─► GeocodingSource (Overpass)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use config::settings::ImportConfig;
//! use monument_import::sources::{http_client, OverpassClient, WikidataClient};
//! use monument_import::{Catalog, ImportRequest, Importer, JsonFileStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ImportConfig::default();
//! let client = http_client(&config)?;
//! let catalog = Catalog::new(Arc::new(JsonFileStore::open("monuments.json").await));
//! let importer = Importer::new(
//!     catalog.clone(),
//!     Arc::new(WikidataClient::new(client.clone(), &config.wikidata_endpoint)),
//!     Arc::new(OverpassClient::new(client, &config.overpass_endpoint)),
//! );
//!
//! let request = ImportRequest::from_json(br#"{"monuments":[{"name":"Pantheon","slug":"pantheon","city":"Roma"}]}"#)?;
//! let response = importer.import(&request).await;
//! println!("{}", serde_json::to_string(&response)?);
//! catalog.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod import;
pub mod merge;
pub mod record;
pub mod seed;
pub mod sketchfab;
pub mod sources;
pub mod store;

pub use catalog::Catalog;
pub use error::{ImportError, ImportResult, StoreError, StoreResult};
pub use import::{ImportOutcome, ImportRequest, ImportResponse, Importer};
pub use merge::merge_record;
pub use record::{Coordinates, MonumentDescriptor, MonumentDraft, MonumentRecord, Slug};
pub use seed::{seed_drafts, seed_records};
pub use sketchfab::{fetch_originals, DownloadOutcome, SketchfabClient};
pub use store::{JsonFileStore, MemoryStore, MonumentStore, StoreRead};
