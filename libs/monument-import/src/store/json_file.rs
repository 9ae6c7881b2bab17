use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{timestamp_now, MonumentStore, RecordTable, StoreRead, StoreState};
use crate::error::{StoreError, StoreResult};
use crate::record::{MonumentDraft, MonumentRecord, Slug};

/// Store persisted as a JSON array of records.
///
/// The file is loaded at open and rewritten after every successful write. A
/// missing file opens as an empty store; an unreadable or invalid file opens
/// the store in a failed state where reads are unavailable and writes fail.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl JsonFileStore {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match load(&path).await {
            Ok(records) => {
                debug!(path = %path.display(), records = records.len(), "opened record store");
                StoreState::Open(RecordTable::from_records(records))
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "record store unavailable");
                StoreState::Failed(err.to_string())
            }
        };
        Self {
            path,
            state: RwLock::new(state),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn load(path: &Path) -> StoreResult<Vec<MonumentRecord>> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(StoreError::io(path, err)),
    };
    serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes through a sibling temp file so readers never see a partial file.
async fn flush(path: &Path, table: &RecordTable) -> StoreResult<()> {
    let json = serde_json::to_vec_pretty(&table.to_vec()).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::io(parent, e))?;
    }
    let temp = path.with_extension("json.tmp");
    fs::write(&temp, json)
        .await
        .map_err(|e| StoreError::io(&temp, e))?;
    fs::rename(&temp, path)
        .await
        .map_err(|e| StoreError::io(path, e))
}

#[async_trait]
impl MonumentStore for JsonFileStore {
    fn backend_tag(&self) -> &'static str {
        "json-file"
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
        flush(&self.path, &table).await?;
        *state = StoreState::Open(table);
        Ok(record)
    }

    async fn replace_all_by_slug(&self, drafts: Vec<MonumentDraft>) -> StoreResult<usize> {
        let mut state = self.state.write().await;
        let mut table = state.table()?.clone();
        let created = table.replace_all(drafts, timestamp_now());
        flush(&self.path, &table).await?;
        *state = StoreState::Open(table);
        Ok(created)
    }

    async fn close(&self) -> StoreResult<()> {
        // Every write is already on disk
        *self.state.write().await = StoreState::Closed;
        debug!(path = %self.path.display(), "closed record store");
        Ok(())
    }
}
