//! # Catalog
//!
//! Read/write policy over an optional store handle:
//!
//! | store        | reads                      | writes          |
//! |--------------|----------------------------|-----------------|
//! | none         | seed data                  | `NotConfigured` |
//! | unavailable  | seed data (logged)         | store error     |
//! | available    | store data                 | store result    |
//!
//! The fallback applies only when the store reports a read as unavailable,
//! never to an empty result.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::record::{MonumentDraft, MonumentRecord, Slug};
use crate::seed::{seed_drafts, seed_record, seed_records};
use crate::store::MonumentStore;

#[derive(Clone)]
pub struct Catalog {
    store: Option<Arc<dyn MonumentStore>>,
}

impl Catalog {
    pub fn new(store: Arc<dyn MonumentStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Catalog without persistence: reads serve seed data, writes fail.
    pub fn seed_only() -> Self {
        Self { store: None }
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    pub async fn list(&self) -> Vec<MonumentRecord> {
        let Some(store) = &self.store else {
            return seed_records();
        };
        store.list().await.unwrap_or_else(|reason| {
            warn!(backend = store.backend_tag(), reason, "store unavailable, serving seed data");
            seed_records()
        })
    }

    pub async fn get(&self, slug: &Slug) -> Option<MonumentRecord> {
        let Some(store) = &self.store else {
            return seed_record(slug);
        };
        store.get_by_slug(slug).await.unwrap_or_else(|reason| {
            warn!(backend = store.backend_tag(), %slug, reason, "store unavailable, serving seed record");
            seed_record(slug)
        })
    }

    pub async fn upsert(&self, draft: MonumentDraft) -> StoreResult<MonumentRecord> {
        self.require_store()?.upsert(draft).await
    }

    /// Replaces the seed slugs in the store with the seed dataset.
    pub async fn reseed(&self) -> StoreResult<usize> {
        let created = self.require_store()?.replace_all_by_slug(seed_drafts()).await?;
        info!(created, "reseeded record store");
        Ok(created)
    }

    /// Closes the underlying store, if any.
    pub async fn close(&self) -> StoreResult<()> {
        match &self.store {
            Some(store) => store.close().await,
            None => Ok(()),
        }
    }

    fn require_store(&self) -> StoreResult<&Arc<dyn MonumentStore>> {
        self.store.as_ref().ok_or(StoreError::NotConfigured)
    }
}
