use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{timestamp_now, MonumentStore, RecordTable, StoreRead, StoreState};
use crate::error::StoreResult;
use crate::record::{MonumentDraft, MonumentRecord, Slug};

/// Process-local store; contents are lost on close.
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// A store pre-filled with `records`.
    pub fn with_records(records: Vec<MonumentRecord>) -> Self {
        Self {
            state: RwLock::new(StoreState::Open(RecordTable::from_records(records))),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MonumentStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> StoreRead<Vec<MonumentRecord>> {
        self.state.read().await.read(RecordTable::list)
    }

    async fn get_by_slug(&self, slug: &Slug) -> StoreRead<Option<MonumentRecord>> {
        self.state.read().await.read(|table| table.get(slug))
    }

    async fn upsert(&self, draft: MonumentDraft) -> StoreResult<MonumentRecord> {
        let mut state = self.state.write().await;
        let mut table = state.table()?.clone();
        let record = table.upsert(draft, timestamp_now());
        *state = StoreState::Open(table);
        Ok(record)
    }

    async fn replace_all_by_slug(&self, drafts: Vec<MonumentDraft>) -> StoreResult<usize> {
        let mut state = self.state.write().await;
        let mut table = state.table()?.clone();
        let created = table.replace_all(drafts, timestamp_now());
        *state = StoreState::Open(table);
        Ok(created)
    }

    async fn close(&self) -> StoreResult<()> {
        *self.state.write().await = StoreState::Closed;
        Ok(())
    }
}
