//! OpenStreetMap geocoding through the Overpass API.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use super::{fetch_json, GeocodingSource};
use crate::error::ImportResult;
use crate::record::{Coordinates, MonumentDescriptor};

const SERVICE: &str = "overpass";

/// Geocoder matching OSM elements by `name` and, when known, `addr:city`.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    endpoint: String,
}

impl OverpassClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl GeocodingSource for OverpassClient {
    #[instrument(name = "overpass_locate", skip_all, fields(name = %monument.name))]
    async fn locate(&self, monument: &MonumentDescriptor) -> ImportResult<Option<Coordinates>> {
        let query = overpass_query(&monument.name, monument.city.as_deref());
        let request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(query);
        let response: OverpassResponse = fetch_json(SERVICE, request).await?;
        Ok(first_location(&response))
    }
}

/// Overpass QL selecting nodes, ways and relations by tag, returning the
/// first match with a center point for areas.
///
/// # Example
///
/// ```rust
/// use monument_import::sources::overpass::overpass_query;
///
/// let query = overpass_query("Torre di Pisa", Some("Pisa"));
/// assert!(query.contains(r#"node["name"="Torre di Pisa"]["addr:city"="Pisa"];"#));
/// assert!(query.trim_end().ends_with("out center 1;"));
/// ```
pub fn overpass_query(name: &str, city: Option<&str>) -> String {
    let mut filters = format!(r#"["name"="{}"]"#, escape(name));
    if let Some(city) = city {
        filters.push_str(&format!(r#"["addr:city"="{}"]"#, escape(city)));
    }
    format!(
        "[out:json];\n(\n  node{filters};\n  way{filters};\n  relation{filters};\n);\nout center 1;\n"
    )
}

/// Escapes a value for a double-quoted Overpass QL string.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    center: Option<Center>,
}

#[derive(Debug, Deserialize)]
struct Center {
    lat: f64,
    lon: f64,
}

/// Own position of the first element, else its center. Out-of-range values
/// count as no match.
fn first_location(response: &OverpassResponse) -> Option<Coordinates> {
    let first = response.elements.first()?;
    let (lat, lon) = match (first.lat, first.lon, &first.center) {
        (Some(lat), Some(lon), _) => (lat, lon),
        (_, _, Some(center)) => (center.lat, center.lon),
        _ => return None,
    };
    Coordinates::new(lat, lon).ok()
}
