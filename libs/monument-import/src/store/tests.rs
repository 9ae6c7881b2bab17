use super::*;
use crate::record::Coordinates;
use crate::seed::{seed_drafts, seed_records};

fn draft(slug: &str, name: &str) -> MonumentDraft {
    MonumentDraft {
        name: name.to_string(),
        slug: Slug::new(slug).unwrap(),
        city: None,
        region: None,
        coordinates: Some(Coordinates::new(41.0, 12.0).unwrap()),
        model_url: None,
        sketchfab_uid: None,
        description: None,
        era: None,
        source: None,
    }
}

fn available<T>(read: StoreRead<T>) -> T {
    match read {
        StoreRead::Available(value) => value,
        StoreRead::Unavailable(reason) => panic!("store unavailable: {reason}"),
    }
}

#[tokio::test]
async fn test_upsert_creates_then_replaces() {
    let store = MemoryStore::new();
    let created = store.upsert(draft("pantheon", "Pantheon")).await.unwrap();
    assert_eq!(created.id, "m000001");

    let mut update = draft("pantheon", "Pantheon di Roma");
    update.era = Some("125".to_string());
    let updated = store.upsert(update).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "Pantheon di Roma");
    assert_eq!(updated.era.as_deref(), Some("125"));
    assert_eq!(available(store.list().await).len(), 1);
}

#[tokio::test]
async fn test_created_at_survives_wire_round_trip() {
    let store = MemoryStore::new();
    let created = store.upsert(draft("pantheon", "Pantheon")).await.unwrap();
    assert_eq!(created.created_at.timestamp_subsec_nanos() % 1_000_000, 0);

    let json = serde_json::to_string(&created).unwrap();
    let decoded: MonumentRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.created_at, created.created_at);
    assert_eq!(decoded, created);
}

#[tokio::test]
async fn test_list_orders_by_name() {
    let store = MemoryStore::new();
    store.upsert(draft("b", "Zisa")).await.unwrap();
    store.upsert(draft("a", "Arena di Verona")).await.unwrap();
    store.upsert(draft("c", "Mole Antonelliana")).await.unwrap();

    let names: Vec<String> = available(store.list().await)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["Arena di Verona", "Mole Antonelliana", "Zisa"]);
}

#[tokio::test]
async fn test_get_by_slug() {
    let store = MemoryStore::with_records(seed_records());
    let tower = available(store.get_by_slug(&Slug::new("tower").unwrap()).await);
    assert_eq!(tower.unwrap().name, "Torre di Pisa");
    let missing = available(store.get_by_slug(&Slug::new("pantheon").unwrap()).await);
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_replace_all_recreates_slug_set() {
    let store = MemoryStore::with_records(seed_records());
    store.upsert(draft("pantheon", "Pantheon")).await.unwrap();

    let created = store.replace_all_by_slug(seed_drafts()).await.unwrap();
    assert_eq!(created, 3);

    let records = available(store.list().await);
    assert_eq!(records.len(), 4);
    let colosseum = records.iter().find(|r| r.slug.as_str() == "colosseum").unwrap();
    // Recreated records get fresh ids
    assert_ne!(colosseum.id, "seed-colosseum");
    assert!(records.iter().any(|r| r.slug.as_str() == "pantheon"));
}

#[tokio::test]
async fn test_replace_all_skips_duplicate_slugs() {
    let store = MemoryStore::new();
    let created = store
        .replace_all_by_slug(vec![draft("a", "First"), draft("a", "Second")])
        .await
        .unwrap();
    assert_eq!(created, 1);
    let record = available(store.get_by_slug(&Slug::new("a").unwrap()).await).unwrap();
    assert_eq!(record.name, "First");
}

#[tokio::test]
async fn test_closed_store() {
    let store = MemoryStore::new();
    store.close().await.unwrap();
    assert!(!store.list().await.is_available());
    assert!(matches!(
        store.upsert(draft("a", "A")).await,
        Err(StoreError::Closed)
    ));
}

#[tokio::test]
async fn test_json_store_persists_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data/monuments.json");

    let store = JsonFileStore::open(&path).await;
    assert!(available(store.list().await).is_empty());
    let created = store.upsert(draft("pantheon", "Pantheon")).await.unwrap();
    store.close().await.unwrap();

    let reopened = JsonFileStore::open(&path).await;
    let record = available(reopened.get_by_slug(&created.slug).await).unwrap();
    assert_eq!(record, created);

    // Ids keep counting from the persisted maximum
    let next = reopened.upsert(draft("arena", "Arena")).await.unwrap();
    assert_eq!(next.id, "m000002");
}

#[tokio::test]
async fn test_json_store_file_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("monuments.json");
    let store = JsonFileStore::open(&path).await;
    store.upsert(draft("pantheon", "Pantheon")).await.unwrap();

    let value: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["slug"], "pantheon");
    assert_eq!(first["lat"], 41.0);
    assert!(first["createdAt"].is_string());
    assert!(!dir.path().join("monuments.json.tmp").exists());
}

#[tokio::test]
async fn test_corrupt_json_store_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("monuments.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let store = JsonFileStore::open(&path).await;
    assert!(matches!(store.list().await, StoreRead::Unavailable(_)));
    assert!(matches!(
        store.upsert(draft("a", "A")).await,
        Err(StoreError::Unavailable { .. })
    ));
    // The broken file is left untouched
    assert_eq!(std::fs::read(&path).unwrap(), b"{ not json");
}

#[test]
fn test_store_read_helpers() {
    let read: StoreRead<u32> = StoreRead::Unavailable("down".to_string());
    assert_eq!(read.clone().map(|v| v + 1), StoreRead::Unavailable("down".to_string()));
    assert_eq!(read.unwrap_or_else(|reason| reason.len() as u32), 4);
    assert_eq!(StoreRead::Available(2).unwrap_or_else(|_| 0), 2);
}
