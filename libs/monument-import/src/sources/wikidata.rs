//! Wikidata entity search and detail lookup.

use std::collections::HashMap;

use async_trait::async_trait;
use config::constants::{
    WIKIDATA_FALLBACK_LANGUAGE, WIKIDATA_INCEPTION_PROPERTY, WIKIDATA_LANGUAGE,
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::{fetch_json, Enrichment, EnrichmentSource};
use crate::error::ImportResult;
use crate::record::MonumentDescriptor;

const SERVICE: &str = "wikidata";

/// Enrichment from the Wikidata action API: `wbsearchentities` for the best
/// match, then `wbgetentities` for its details.
#[derive(Debug, Clone)]
pub struct WikidataClient {
    client: Client,
    endpoint: String,
}

impl WikidataClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn search(&self, monument: &MonumentDescriptor) -> ImportResult<Option<SearchHit>> {
        let mut params = vec![
            ("action", "wbsearchentities"),
            ("search", monument.name.as_str()),
            ("language", WIKIDATA_LANGUAGE),
            ("format", "json"),
            ("limit", "1"),
            ("origin", "*"),
        ];
        if let Some(locality) = monument.locality() {
            params.push(("description", locality));
        }
        let response: SearchResponse =
            fetch_json(SERVICE, self.client.get(&self.endpoint).query(&params)).await?;
        Ok(response.search.into_iter().next())
    }

    async fn entity(&self, id: &str) -> ImportResult<Option<Entity>> {
        let params = [
            ("action", "wbgetentities"),
            ("ids", id),
            ("format", "json"),
            ("languages", WIKIDATA_LANGUAGE),
            ("origin", "*"),
        ];
        let mut response: EntitiesResponse =
            fetch_json(SERVICE, self.client.get(&self.endpoint).query(&params)).await?;
        Ok(response.entities.remove(id))
    }
}

#[async_trait]
impl EnrichmentSource for WikidataClient {
    #[instrument(name = "wikidata_enrich", skip_all, fields(name = %monument.name))]
    async fn enrich(&self, monument: &MonumentDescriptor) -> ImportResult<Option<Enrichment>> {
        let Some(hit) = self.search(monument).await? else {
            return Ok(None);
        };
        let entity = self.entity(&hit.id).await?;
        Ok(Some(enrichment_from(hit, entity.as_ref())))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: String,
    #[serde(default)]
    description: Option<String>,
    concepturi: String,
}

#[derive(Debug, Deserialize)]
struct EntitiesResponse {
    #[serde(default)]
    entities: HashMap<String, Entity>,
}

#[derive(Debug, Default, Deserialize)]
struct Entity {
    #[serde(default)]
    descriptions: HashMap<String, LanguageValue>,
    #[serde(default)]
    claims: HashMap<String, Vec<Claim>>,
}

#[derive(Debug, Deserialize)]
struct LanguageValue {
    value: String,
}

#[derive(Debug, Deserialize)]
struct Claim {
    #[serde(default)]
    mainsnak: Option<Snak>,
}

#[derive(Debug, Deserialize)]
struct Snak {
    #[serde(default)]
    datatype: Option<String>,
    #[serde(default)]
    datavalue: Option<Value>,
}

/// Description: entity in the primary language, then the fallback language,
/// then the search hit. Era: year of the first inception claim.
fn enrichment_from(hit: SearchHit, entity: Option<&Entity>) -> Enrichment {
    let description = entity
        .and_then(|e| {
            e.descriptions
                .get(WIKIDATA_LANGUAGE)
                .or_else(|| e.descriptions.get(WIKIDATA_FALLBACK_LANGUAGE))
        })
        .map(|d| d.value.clone())
        .or(hit.description);

    let era = entity
        .and_then(|e| e.claims.get(WIKIDATA_INCEPTION_PROPERTY)?.first()?.mainsnak.as_ref())
        .filter(|snak| snak.datatype.as_deref() == Some("time"))
        .and_then(|snak| snak.datavalue.as_ref()?.get("value")?.get("time")?.as_str())
        .and_then(year_from_time);

    Enrichment {
        description,
        era,
        wikipedia_url: Some(wikipedia_url(&hit.concepturi)),
        source: Some(hit.concepturi),
    }
}

/// Year of a Wikidata time value such as `+1173-08-09T00:00:00Z` or
/// `-0070-00-00T00:00:00Z`. Unknown month/day parts are accepted.
pub fn year_from_time(time: &str) -> Option<String> {
    let (negative, rest) = match time.as_bytes().first()? {
        b'-' => (true, &time[1..]),
        b'+' => (false, &time[1..]),
        _ => (false, time),
    };
    let digits = rest.split('-').next()?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i64 = digits.parse().ok()?;
    let year = if negative { -year } else { year };
    Some(year.to_string())
}

/// Italian Wikipedia counterpart of a Wikidata concept URI.
pub fn wikipedia_url(concept_uri: &str) -> String {
    concept_uri.replacen("www.wikidata.org/wiki", "it.wikipedia.org/wiki", 1)
}
