//! Field precedence when combining a request, the stored record and freshly
//! fetched data.
//!
//! | field                                | first      | then   | else         |
//! |--------------------------------------|------------|--------|--------------|
//! | coordinates                          | fetched    | stored | error        |
//! | description, era, source             | fetched    | stored | absent       |
//! | city, region, modelUrl               | request    | stored | empty string |
//! | sketchfabUid                         | request    | stored | absent       |
//! | name, slug                           | request    |        |              |

use crate::error::{ImportError, ImportResult};
use crate::record::{Coordinates, MonumentDescriptor, MonumentDraft, MonumentRecord};
use crate::sources::Enrichment;

/// Builds the upsert payload for one imported monument.
///
/// Fails with [`ImportError::MissingCoordinates`] rather than defaulting to
/// `0, 0` when no position is known.
pub fn merge_record(
    request: &MonumentDescriptor,
    existing: Option<&MonumentRecord>,
    enrichment: Option<&Enrichment>,
    location: Option<Coordinates>,
) -> ImportResult<MonumentDraft> {
    let coordinates = location
        .or_else(|| existing.and_then(|e| e.coordinates))
        .ok_or_else(|| ImportError::MissingCoordinates {
            name: request.name.clone(),
        })?;

    let fetched = |field: fn(&Enrichment) -> &Option<String>,
                   stored: fn(&MonumentRecord) -> &Option<String>| {
        enrichment
            .and_then(|e| field(e).clone())
            .or_else(|| existing.and_then(|e| stored(e).clone()))
    };
    let requested = |field: &Option<String>, stored: fn(&MonumentRecord) -> &Option<String>| {
        field
            .clone()
            .or_else(|| existing.and_then(|e| stored(e).clone()))
    };

    Ok(MonumentDraft {
        name: request.name.clone(),
        slug: request.slug.clone(),
        city: Some(requested(&request.city, |e| &e.city).unwrap_or_default()),
        region: Some(requested(&request.region, |e| &e.region).unwrap_or_default()),
        coordinates: Some(coordinates),
        model_url: Some(requested(&request.model_url, |e| &e.model_url).unwrap_or_default()),
        sketchfab_uid: requested(&request.sketchfab_uid, |e| &e.sketchfab_uid),
        description: fetched(|e| &e.description, |e| &e.description),
        era: fetched(|e| &e.era, |e| &e.era),
        source: fetched(|e| &e.source, |e| &e.source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Slug;
    use crate::seed::seed_records;

    fn request() -> MonumentDescriptor {
        MonumentDescriptor::new("Colosseo", Slug::new("colosseum").unwrap())
    }

    fn stored() -> MonumentRecord {
        let mut record = seed_records().remove(0);
        record.coordinates = Some(Coordinates::new(41.0, 12.0).unwrap());
        record.sketchfab_uid = Some("stored-uid".to_string());
        record.source = Some("https://www.wikidata.org/wiki/Q1".to_string());
        record
    }

    #[test]
    fn test_fetched_coordinates_win() {
        let draft = merge_record(
            &request(),
            Some(&stored()),
            None,
            Some(Coordinates::new(41.9, 12.5).unwrap()),
        )
        .unwrap();
        assert_eq!(draft.coordinates, Some(Coordinates { lat: 41.9, lon: 12.5 }));
    }

    #[test]
    fn test_stored_coordinates_used_without_fetch() {
        let draft = merge_record(&request(), Some(&stored()), None, None).unwrap();
        assert_eq!(draft.coordinates, Some(Coordinates { lat: 41.0, lon: 12.0 }));
    }

    #[test]
    fn test_missing_coordinates_fail() {
        let err = merge_record(&request(), None, None, None).unwrap_err();
        assert!(matches!(err, ImportError::MissingCoordinates { ref name } if name == "Colosseo"));
    }

    #[test]
    fn test_request_fields_override_stored() {
        let mut req = request();
        req.city = Some("Rome".to_string());
        req.model_url = Some("/models/custom.glb".to_string());
        let draft = merge_record(&req, Some(&stored()), None, None).unwrap();

        assert_eq!(draft.city.as_deref(), Some("Rome"));
        assert_eq!(draft.region.as_deref(), Some("Lazio"));
        assert_eq!(draft.model_url.as_deref(), Some("/models/custom.glb"));
        assert_eq!(draft.sketchfab_uid.as_deref(), Some("stored-uid"));
    }

    #[test]
    fn test_empty_string_defaults() {
        let draft = merge_record(
            &request(),
            None,
            None,
            Some(Coordinates::new(41.9, 12.5).unwrap()),
        )
        .unwrap();
        assert_eq!(draft.city.as_deref(), Some(""));
        assert_eq!(draft.region.as_deref(), Some(""));
        assert_eq!(draft.model_url.as_deref(), Some(""));
        assert_eq!(draft.sketchfab_uid, None);
        assert_eq!(draft.description, None);
        assert_eq!(draft.era, None);
        assert_eq!(draft.source, None);
    }

    #[test]
    fn test_fetched_enrichment_overrides_stored() {
        let enrichment = Enrichment {
            description: Some("anfiteatro".to_string()),
            era: None,
            source: Some("http://www.wikidata.org/entity/Q10285".to_string()),
            wikipedia_url: None,
        };
        let draft = merge_record(&request(), Some(&stored()), Some(&enrichment), None).unwrap();
        assert_eq!(draft.description.as_deref(), Some("anfiteatro"));
        // Era was not fetched, so the stored one survives
        assert_eq!(draft.era.as_deref(), Some("80"));
        assert_eq!(
            draft.source.as_deref(),
            Some("http://www.wikidata.org/entity/Q10285")
        );
    }

    #[test]
    fn test_name_and_slug_from_request() {
        let mut req = request();
        req.name = "Anfiteatro Flavio".to_string();
        let draft = merge_record(&req, Some(&stored()), None, None).unwrap();
        assert_eq!(draft.name, "Anfiteatro Flavio");
        assert_eq!(draft.slug.as_str(), "colosseum");
    }
}
