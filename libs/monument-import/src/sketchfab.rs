//! # Original Model Downloader
//!
//! Fetches the original Sketchfab model of each record that has a
//! `sketchfabUid` and stores it as `<dir>/<slug>.glb`.

use std::path::{Path, PathBuf};

use config::constants::{MODEL_EXTENSION, SKETCHFAB_API_BASE};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use crate::error::{ImportError, ImportResult};
use crate::record::{MonumentRecord, Slug};
use crate::sources::{fetch_bytes, fetch_json};

const SERVICE: &str = "sketchfab";

/// Authenticated Sketchfab download API client.
#[derive(Debug, Clone)]
pub struct SketchfabClient {
    client: Client,
    api_base: String,
    token: String,
}

impl SketchfabClient {
    /// Fails with [`ImportError::MissingToken`] on an empty token.
    pub fn new(client: Client, token: impl Into<String>) -> ImportResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ImportError::MissingToken);
        }
        Ok(Self {
            client,
            api_base: SKETCHFAB_API_BASE.to_string(),
            token,
        })
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Temporary download URL for model `uid`, preferring GLB over glTF.
    pub async fn download_url(&self, uid: &str) -> ImportResult<String> {
        let request = self
            .client
            .get(format!("{}/{uid}/download", self.api_base))
            .header(AUTHORIZATION, format!("Token {}", self.token));
        let links: DownloadLinks = fetch_json(SERVICE, request).await?;
        links.preferred_url().ok_or_else(|| ImportError::NoDownload {
            uid: uid.to_string(),
        })
    }

    /// Downloads the bytes behind a download URL.
    pub async fn download(&self, url: &str) -> ImportResult<Vec<u8>> {
        fetch_bytes(SERVICE, self.client.get(url)).await
    }
}

#[derive(Debug, Default, Deserialize)]
struct DownloadLinks {
    #[serde(default)]
    glb: Option<DownloadLink>,
    #[serde(default)]
    gltf: Option<DownloadLink>,
}

#[derive(Debug, Deserialize)]
struct DownloadLink {
    #[serde(default)]
    url: Option<String>,
}

impl DownloadLinks {
    fn preferred_url(self) -> Option<String> {
        self.glb
            .and_then(|link| link.url)
            .or_else(|| self.gltf.and_then(|link| link.url))
    }
}

/// Result of one download.
#[derive(Debug)]
pub struct DownloadOutcome {
    pub slug: Slug,
    pub result: ImportResult<PathBuf>,
}

/// Downloads the original model of every record with a Sketchfab uid into
/// `out_dir`, one at a time. Per-record failures are logged and reported;
/// only failing to create `out_dir` aborts.
pub async fn fetch_originals(
    client: &SketchfabClient,
    records: &[MonumentRecord],
    out_dir: &Path,
) -> ImportResult<Vec<DownloadOutcome>> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|e| ImportError::io(out_dir, e))?;

    let mut outcomes = Vec::new();
    for record in records {
        let Some(uid) = record.sketchfab_uid.as_deref().filter(|uid| !uid.is_empty()) else {
            continue;
        };
        info!(name = %record.name, uid, "downloading original model");
        let result = download_one(client, uid, &original_path(out_dir, &record.slug)).await;
        match &result {
            Ok(path) => info!(path = %path.display(), "saved original model"),
            Err(err) => error!(name = %record.name, error = %err, "failed to download original model"),
        }
        outcomes.push(DownloadOutcome {
            slug: record.slug.clone(),
            result,
        });
    }
    Ok(outcomes)
}

/// `<out_dir>/<slug>.glb`
pub fn original_path(out_dir: &Path, slug: &Slug) -> PathBuf {
    out_dir.join(format!("{slug}.{MODEL_EXTENSION}"))
}

async fn download_one(client: &SketchfabClient, uid: &str, path: &Path) -> ImportResult<PathBuf> {
    let url = client.download_url(uid).await?;
    let bytes = client.download(&url).await?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| ImportError::io(path, e))?;
    Ok(path.to_path_buf())
}
