//! # Record Store
//!
//! Slug-keyed persistence for monument records.
//!
//! Reads report failure as [`StoreRead::Unavailable`] instead of an error so
//! the caller decides on a fallback; writes fail with [`StoreError`]. A store
//! handle is opened once, passed explicitly to whoever needs it and closed at
//! shutdown.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};

use crate::error::{StoreError, StoreResult};
use crate::record::{MonumentDraft, MonumentRecord, Slug};

/// Creation timestamp for new records, at the millisecond precision the
/// record wire format keeps.
pub(crate) fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Outcome of a store read.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreRead<T> {
    /// The store answered
    Available(T),
    /// The store could not answer; carries the reason
    Unavailable(String),
}

impl<T> StoreRead<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, StoreRead::Available(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StoreRead<U> {
        match self {
            StoreRead::Available(value) => StoreRead::Available(f(value)),
            StoreRead::Unavailable(reason) => StoreRead::Unavailable(reason),
        }
    }

    /// The available value, or `fallback(reason)`.
    pub fn unwrap_or_else(self, fallback: impl FnOnce(&str) -> T) -> T {
        match self {
            StoreRead::Available(value) => value,
            StoreRead::Unavailable(reason) => fallback(&reason),
        }
    }
}

/// A slug-keyed monument store.
#[async_trait]
pub trait MonumentStore: Send + Sync {
    /// Short backend name for logs.
    fn backend_tag(&self) -> &'static str;

    /// All records ordered by name.
    async fn list(&self) -> StoreRead<Vec<MonumentRecord>>;

    async fn get_by_slug(&self, slug: &Slug) -> StoreRead<Option<MonumentRecord>>;

    /// Creates the record or replaces every field except `id` and
    /// `createdAt`.
    async fn upsert(&self, draft: MonumentDraft) -> StoreResult<MonumentRecord>;

    /// Deletes every record whose slug appears in `drafts`, then creates the
    /// drafts anew. Duplicate slugs after the first are skipped. Returns the
    /// number of records created.
    async fn replace_all_by_slug(&self, drafts: Vec<MonumentDraft>) -> StoreResult<usize>;

    /// Flushes and releases the store. Later reads are unavailable and later
    /// writes fail.
    async fn close(&self) -> StoreResult<()>;
}

/// In-memory record table shared by the backends.
#[derive(Debug, Clone, Default)]
struct RecordTable {
    records: BTreeMap<Slug, MonumentRecord>,
    last_id: u64,
}

impl RecordTable {
    fn from_records(records: Vec<MonumentRecord>) -> Self {
        let last_id = records
            .iter()
            .filter_map(|r| r.id.strip_prefix('m')?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            records: records.into_iter().map(|r| (r.slug.clone(), r)).collect(),
            last_id,
        }
    }

    fn list(&self) -> Vec<MonumentRecord> {
        let mut records: Vec<MonumentRecord> = self.records.values().cloned().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.slug.cmp(&b.slug)));
        records
    }

    fn get(&self, slug: &Slug) -> Option<MonumentRecord> {
        self.records.get(slug).cloned()
    }

    fn next_id(&mut self) -> String {
        self.last_id += 1;
        format!("m{:06}", self.last_id)
    }

    fn upsert(&mut self, draft: MonumentDraft, now: DateTime<Utc>) -> MonumentRecord {
        let (id, created_at) = match self.records.get(&draft.slug) {
            Some(existing) => (existing.id.clone(), existing.created_at),
            None => (self.next_id(), now),
        };
        let record = draft.into_record(id, created_at);
        self.records.insert(record.slug.clone(), record.clone());
        record
    }

    fn replace_all(&mut self, drafts: Vec<MonumentDraft>, now: DateTime<Utc>) -> usize {
        for draft in &drafts {
            self.records.remove(&draft.slug);
        }
        let mut created = 0;
        for draft in drafts {
            if self.records.contains_key(&draft.slug) {
                continue;
            }
            let id = self.next_id();
            self.records
                .insert(draft.slug.clone(), draft.into_record(id, now));
            created += 1;
        }
        created
    }

    /// Records in slug order, as persisted.
    fn to_vec(&self) -> Vec<MonumentRecord> {
        self.records.values().cloned().collect()
    }
}

/// Lifecycle of a store handle.
#[derive(Debug)]
enum StoreState {
    Open(RecordTable),
    Failed(String),
    Closed,
}

impl StoreState {
    fn read<T>(&self, f: impl FnOnce(&RecordTable) -> T) -> StoreRead<T> {
        match self {
            StoreState::Open(table) => StoreRead::Available(f(table)),
            StoreState::Failed(reason) => StoreRead::Unavailable(reason.clone()),
            StoreState::Closed => StoreRead::Unavailable(StoreError::Closed.to_string()),
        }
    }

    fn table(&self) -> StoreResult<&RecordTable> {
        match self {
            StoreState::Open(table) => Ok(table),
            StoreState::Failed(reason) => Err(StoreError::Unavailable {
                reason: reason.clone(),
            }),
            StoreState::Closed => Err(StoreError::Closed),
        }
    }
}

#[cfg(test)]
mod tests;
