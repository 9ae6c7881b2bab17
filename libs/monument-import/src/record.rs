//! # Monument Records
//!
//! The persisted monument entity, its upsert payload, and the descriptor an
//! import request carries. Records serialize to the flat JSON shape
//! consumed by the web front end:
//!
//! ```text
//! { id, name, slug, city, region, lat, lon, modelUrl, sketchfabUid,
//!   description, era, source, createdAt }
//! ```

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::StoreError;

/// Unique, URL-safe record key. Immutable once a record exists.
///
/// # Example
///
/// ```rust
/// use monument_import::Slug;
///
/// assert!(Slug::new("arco-di-tito").is_ok());
/// assert!(Slug::new("").is_err());
/// assert!(Slug::new("arco di tito").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Accepts non-empty strings of URL-unreserved characters.
    pub fn new(value: impl Into<String>) -> Result<Self, StoreError> {
        let value = value.into();
        if value.is_empty() {
            return Err(StoreError::invalid_record("slug is empty"));
        }
        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')))
        {
            return Err(StoreError::invalid_record(format!(
                "slug {value:?} contains {c:?}"
            )));
        }
        Ok(Self(value))
    }

    /// Wraps a literal known to be valid.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self, StoreError> {
        if !(lat.is_finite() && (-90.0..=90.0).contains(&lat)) {
            return Err(StoreError::invalid_record(format!("latitude {lat} out of range")));
        }
        if !(lon.is_finite() && (-180.0..=180.0).contains(&lon)) {
            return Err(StoreError::invalid_record(format!("longitude {lon} out of range")));
        }
        Ok(Self { lat, lon })
    }

    /// Pairs separate columns; both must be present or both absent.
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Result<Option<Self>, StoreError> {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Self::new(lat, lon).map(Some),
            (None, None) => Ok(None),
            _ => Err(StoreError::invalid_record(
                "lat and lon must both be set or both be null",
            )),
        }
    }
}

/// A persisted monument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordWire", into = "RecordWire")]
pub struct MonumentRecord {
    pub id: String,
    pub name: String,
    pub slug: Slug,
    pub city: Option<String>,
    pub region: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub model_url: Option<String>,
    pub sketchfab_uid: Option<String>,
    pub description: Option<String>,
    pub era: Option<String>,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MonumentRecord {
    /// The writable fields of this record.
    pub fn to_draft(&self) -> MonumentDraft {
        MonumentDraft {
            name: self.name.clone(),
            slug: self.slug.clone(),
            city: self.city.clone(),
            region: self.region.clone(),
            coordinates: self.coordinates,
            model_url: self.model_url.clone(),
            sketchfab_uid: self.sketchfab_uid.clone(),
            description: self.description.clone(),
            era: self.era.clone(),
            source: self.source.clone(),
        }
    }
}

/// Upsert payload: every record field except the store-assigned `id` and
/// `createdAt`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonumentDraft {
    pub name: String,
    pub slug: Slug,
    pub city: Option<String>,
    pub region: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub model_url: Option<String>,
    pub sketchfab_uid: Option<String>,
    pub description: Option<String>,
    pub era: Option<String>,
    pub source: Option<String>,
}

impl MonumentDraft {
    /// Materializes the draft with store-assigned identity.
    pub fn into_record(self, id: String, created_at: DateTime<Utc>) -> MonumentRecord {
        MonumentRecord {
            id,
            name: self.name,
            slug: self.slug,
            city: self.city,
            region: self.region,
            coordinates: self.coordinates,
            model_url: self.model_url,
            sketchfab_uid: self.sketchfab_uid,
            description: self.description,
            era: self.era,
            source: self.source,
            created_at,
        }
    }
}

/// One monument in an import request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonumentDescriptor {
    pub name: String,
    pub slug: Slug,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sketchfab_uid: Option<String>,
}

impl MonumentDescriptor {
    /// Descriptor with only the required fields.
    pub fn new(name: impl Into<String>, slug: Slug) -> Self {
        Self {
            name: name.into(),
            slug,
            city: None,
            region: None,
            model_url: None,
            sketchfab_uid: None,
        }
    }

    /// City, else region: the locality used to narrow entity search.
    pub fn locality(&self) -> Option<&str> {
        self.city.as_deref().or(self.region.as_deref())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordWire {
    id: String,
    name: String,
    slug: Slug,
    city: Option<String>,
    region: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    model_url: Option<String>,
    sketchfab_uid: Option<String>,
    description: Option<String>,
    era: Option<String>,
    source: Option<String>,
    #[serde(serialize_with = "serialize_timestamp")]
    created_at: DateTime<Utc>,
}

/// Millisecond precision with a `Z` suffix, e.g. `2024-01-01T00:00:00.000Z`.
fn serialize_timestamp<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl TryFrom<RecordWire> for MonumentRecord {
    type Error = StoreError;

    fn try_from(wire: RecordWire) -> Result<Self, Self::Error> {
        Ok(Self {
            coordinates: Coordinates::from_parts(wire.lat, wire.lon)?,
            id: wire.id,
            name: wire.name,
            slug: wire.slug,
            city: wire.city,
            region: wire.region,
            model_url: wire.model_url,
            sketchfab_uid: wire.sketchfab_uid,
            description: wire.description,
            era: wire.era,
            source: wire.source,
            created_at: wire.created_at,
        })
    }
}

impl From<MonumentRecord> for RecordWire {
    fn from(record: MonumentRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            slug: record.slug,
            city: record.city,
            region: record.region,
            lat: record.coordinates.map(|c| c.lat),
            lon: record.coordinates.map(|c| c.lon),
            model_url: record.model_url,
            sketchfab_uid: record.sketchfab_uid,
            description: record.description,
            era: record.era,
            source: record.source,
            created_at: record.created_at,
        }
    }
}
