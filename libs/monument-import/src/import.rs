//! # Import Pipeline
//!
//! For each requested monument: read the stored record, query enrichment
//! and geocoding concurrently, merge, and upsert. Items run concurrently and
//! fail independently; results keep request order.

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::catalog::Catalog;
use crate::error::{ImportError, ImportResult};
use crate::merge::merge_record;
use crate::record::{MonumentDescriptor, MonumentRecord, Slug};
use crate::sources::{EnrichmentSource, GeocodingSource};

/// Body of an import request: `{ "monuments": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRequest {
    pub monuments: Vec<MonumentDescriptor>,
}

impl ImportRequest {
    /// Parses and validates a request body.
    ///
    /// Slugs are validated while parsing; names must be non-blank.
    pub fn from_json(bytes: &[u8]) -> ImportResult<Self> {
        let request: Self = serde_json::from_slice(bytes)
            .map_err(|e| ImportError::invalid_request(e.to_string()))?;
        if let Some(monument) = request.monuments.iter().find(|m| m.name.trim().is_empty()) {
            return Err(ImportError::invalid_request(format!(
                "monument {} has an empty name",
                monument.slug
            )));
        }
        Ok(request)
    }
}

/// Result of one requested monument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub slug: Slug,
    pub imported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImportOutcome {
    fn from_result(slug: Slug, result: ImportResult<MonumentRecord>) -> Self {
        match result {
            Ok(record) => Self {
                slug: record.slug,
                imported: true,
                error: None,
            },
            Err(err) => Self {
                slug,
                imported: false,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Response body: `{ "ok": true, "results": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResponse {
    pub ok: bool,
    pub results: Vec<ImportOutcome>,
}

impl ImportResponse {
    pub fn failed(&self) -> impl Iterator<Item = &ImportOutcome> {
        self.results.iter().filter(|r| !r.imported)
    }
}

/// Runs imports against a catalog with the given sources.
#[derive(Clone)]
pub struct Importer {
    catalog: Catalog,
    enrichment: Arc<dyn EnrichmentSource>,
    geocoding: Arc<dyn GeocodingSource>,
}

impl Importer {
    pub fn new(
        catalog: Catalog,
        enrichment: Arc<dyn EnrichmentSource>,
        geocoding: Arc<dyn GeocodingSource>,
    ) -> Self {
        Self {
            catalog,
            enrichment,
            geocoding,
        }
    }

    /// Imports one monument and returns the stored record.
    #[instrument(name = "import_monument", skip_all, fields(slug = %monument.slug))]
    pub async fn import_one(&self, monument: &MonumentDescriptor) -> ImportResult<MonumentRecord> {
        let existing = self.catalog.get(&monument.slug).await;

        let (enrichment, location) = tokio::join!(
            self.enrichment.enrich(monument),
            self.geocoding.locate(monument)
        );
        let (enrichment, location) = (enrichment?, location?);

        let draft = merge_record(monument, existing.as_ref(), enrichment.as_ref(), location)?;
        let record = self.catalog.upsert(draft).await?;
        info!(id = %record.id, created = existing.is_none(), "imported monument");
        Ok(record)
    }

    /// Imports every monument of `request` concurrently.
    ///
    /// A failing item is reported in its result entry and does not affect
    /// the others.
    pub async fn import(&self, request: &ImportRequest) -> ImportResponse {
        let results = join_all(request.monuments.iter().map(|monument| async move {
            let result = self.import_one(monument).await;
            if let Err(err) = &result {
                warn!(slug = %monument.slug, error = %err, "import failed");
            }
            ImportOutcome::from_result(monument.slug.clone(), result)
        }))
        .await;

        ImportResponse { ok: true, results }
    }
}
