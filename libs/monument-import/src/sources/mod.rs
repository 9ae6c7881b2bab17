//! # External Sources
//!
//! Enrichment (description, era, provenance) and geocoding (coordinates)
//! behind async traits, with Wikidata and Overpass implementations.
//! Each call is made at most once; the shared client carries the timeout.

pub mod overpass;
pub mod wikidata;

pub use overpass::OverpassClient;
pub use wikidata::WikidataClient;

use async_trait::async_trait;
use config::constants::HTTP_USER_AGENT;
use config::settings::ImportConfig;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ImportError, ImportResult};
use crate::record::{Coordinates, MonumentDescriptor};

/// Optional fields contributed by an enrichment source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Enrichment {
    pub description: Option<String>,
    pub era: Option<String>,
    /// Provenance URL of the matched entity
    pub source: Option<String>,
    pub wikipedia_url: Option<String>,
}

/// Looks up descriptive fields for a monument.
#[async_trait]
pub trait EnrichmentSource: Send + Sync {
    /// `Ok(None)` when nothing matches.
    async fn enrich(&self, monument: &MonumentDescriptor) -> ImportResult<Option<Enrichment>>;
}

/// Looks up the position of a monument.
#[async_trait]
pub trait GeocodingSource: Send + Sync {
    /// `Ok(None)` when nothing matches.
    async fn locate(&self, monument: &MonumentDescriptor) -> ImportResult<Option<Coordinates>>;
}

/// HTTP client shared by every source.
pub fn http_client(config: &ImportConfig) -> ImportResult<Client> {
    Client::builder()
        .timeout(config.http_timeout)
        .user_agent(HTTP_USER_AGENT)
        .build()
        .map_err(|e| ImportError::http("client", e))
}

/// Sends `request` and decodes a JSON body. Non-success statuses become
/// [`ImportError::Upstream`].
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
) -> ImportResult<T> {
    let bytes = fetch_bytes(service, request).await?;
    serde_json::from_slice(&bytes).map_err(|e| ImportError::decode(service, e.to_string()))
}

/// Sends `request` and returns the raw body.
pub(crate) async fn fetch_bytes(
    service: &'static str,
    request: RequestBuilder,
) -> ImportResult<Vec<u8>> {
    let response = request
        .send()
        .await
        .map_err(|e| ImportError::http(service, e))?;
    let status = response.status();
    debug!(service, status = status.as_u16(), url = %response.url(), "upstream response");
    if !status.is_success() {
        return Err(ImportError::Upstream {
            service,
            status: status.as_u16(),
        });
    }
    let body = response
        .bytes()
        .await
        .map_err(|e| ImportError::http(service, e))?;
    Ok(body.to_vec())
}
