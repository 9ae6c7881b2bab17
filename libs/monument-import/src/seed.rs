//! Static seed dataset: the monuments with a generated model.
//!
//! Served by the catalog whenever the store cannot answer a read, and
//! written by the `seed` command.

use chrono::{DateTime, Utc};
use config::constants::model_url;

use crate::record::{Coordinates, MonumentDraft, MonumentRecord, Slug};

/// `2024-01-01T00:00:00Z`; seed record `i` is created `i` days later.
const SEED_EPOCH_SECONDS: i64 = 1_704_067_200;
const SECONDS_PER_DAY: i64 = 86_400;

struct SeedEntry {
    slug: &'static str,
    name: &'static str,
    city: &'static str,
    region: &'static str,
    lat: f64,
    lon: f64,
    description: &'static str,
    era: &'static str,
}

const SEED: [SeedEntry; 3] = [
    SeedEntry {
        slug: "colosseum",
        name: "Colosseo",
        city: "Roma",
        region: "Lazio",
        lat: 41.8902,
        lon: 12.4922,
        description: "Anfiteatro flavio nel centro di Roma",
        era: "80",
    },
    SeedEntry {
        slug: "duomo",
        name: "Cattedrale di Santa Maria del Fiore",
        city: "Firenze",
        region: "Toscana",
        lat: 43.7731,
        lon: 11.2560,
        description: "Cattedrale di Firenze con la cupola del Brunelleschi",
        era: "1436",
    },
    SeedEntry {
        slug: "tower",
        name: "Torre di Pisa",
        city: "Pisa",
        region: "Toscana",
        lat: 43.7230,
        lon: 10.3966,
        description: "Campanile pendente della cattedrale di Pisa",
        era: "1372",
    },
];

impl SeedEntry {
    fn draft(&self) -> MonumentDraft {
        MonumentDraft {
            name: self.name.to_string(),
            slug: Slug::from_static(self.slug),
            city: Some(self.city.to_string()),
            region: Some(self.region.to_string()),
            coordinates: Some(Coordinates {
                lat: self.lat,
                lon: self.lon,
            }),
            model_url: Some(model_url(self.slug)),
            sketchfab_uid: None,
            description: Some(self.description.to_string()),
            era: Some(self.era.to_string()),
            source: None,
        }
    }
}

/// Seed records with fixed ids and creation dates (2024-01-01, -02, -03 UTC).
pub fn seed_records() -> Vec<MonumentRecord> {
    SEED.iter()
        .zip(0i64..)
        .map(|(entry, index)| {
            let created_at =
                DateTime::<Utc>::from_timestamp(SEED_EPOCH_SECONDS + index * SECONDS_PER_DAY, 0)
                    .unwrap_or_default();
            entry
                .draft()
                .into_record(format!("seed-{}", entry.slug), created_at)
        })
        .collect()
}

/// Seed content as upsert payloads, for reseeding a store.
pub fn seed_drafts() -> Vec<MonumentDraft> {
    SEED.iter().map(SeedEntry::draft).collect()
}

/// The seed record for `slug`, if any.
pub fn seed_record(slug: &Slug) -> Option<MonumentRecord> {
    seed_records().into_iter().find(|record| &record.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_created_at() {
        let dates: Vec<String> = seed_records()
            .iter()
            .map(|r| r.created_at.format("%Y-%m-%d").to_string())
            .collect();
        assert_eq!(dates, ["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn test_seed_slugs_are_valid_and_unique() {
        let records = seed_records();
        for record in &records {
            assert!(Slug::new(record.slug.as_str()).is_ok());
            assert!(Coordinates::new(
                record.coordinates.unwrap().lat,
                record.coordinates.unwrap().lon
            )
            .is_ok());
        }
        let mut slugs: Vec<_> = records.iter().map(|r| r.slug.clone()).collect();
        slugs.dedup();
        assert_eq!(slugs.len(), 3);
    }

    #[test]
    fn test_seed_model_urls() {
        let tower = seed_record(&Slug::new("tower").unwrap()).unwrap();
        assert_eq!(tower.model_url.as_deref(), Some("/models/tower.glb"));
        assert!(seed_record(&Slug::new("pantheon").unwrap()).is_none());
    }

    #[test]
    fn test_drafts_match_records() {
        let drafts = seed_drafts();
        for (draft, record) in drafts.iter().zip(seed_records()) {
            assert_eq!(*draft, record.to_draft());
        }
    }
}
