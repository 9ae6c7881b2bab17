//! Subcommand bodies. Each prints its result as JSON on stdout; logs go to
//! stderr.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::settings::GeneratorConfig;
use monument_glb::GlbFile;
use monument_import::sources::overpass::OverpassClient;
use monument_import::sources::wikidata::WikidataClient;
use monument_import::sources::http_client;
use monument_import::{
    fetch_originals, Catalog, ImportRequest, Importer, JsonFileStore, SketchfabClient,
};
use monument_models::{generate_all, Archetype};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::commands::HttpArgs;
use crate::error::{CliError, CliResult};

pub(crate) fn generate(out: PathBuf, only: &[Archetype], sequential: bool) -> CliResult<()> {
    let config = GeneratorConfig::new(out, !sequential)?;
    let models = generate_all(&config, only)?;
    let summary: Vec<_> = models
        .iter()
        .map(|model| {
            json!({
                "slug": model.archetype.slug(),
                "path": model.path.display().to_string(),
                "vertices": model.vertex_count,
                "indices": model.index_count,
                "bytes": model.byte_length,
            })
        })
        .collect();
    print_json(&summary)
}

pub(crate) fn inspect(file: &Path) -> CliResult<()> {
    let summary = GlbFile::read(file)?.summary()?;
    print_json(&json!({
        "file": file.display().to_string(),
        "generator": summary.generator,
        "vertices": summary.vertex_count,
        "indices": summary.index_count,
        "normals": summary.has_normals,
        "colors": summary.has_colors,
        "min": summary.min,
        "max": summary.max,
        "binaryLength": summary.binary_length,
    }))
}

pub(crate) async fn import(
    request: &Path,
    store: Option<&Path>,
    http: &HttpArgs,
) -> CliResult<()> {
    let bytes = tokio::fs::read(request)
        .await
        .map_err(|source| CliError::Read {
            path: request.to_path_buf(),
            source,
        })?;
    let request = ImportRequest::from_json(&bytes)?;

    let config = http.import_config()?;
    let client = http_client(&config)?;
    let catalog = open_catalog(store).await;
    let importer = Importer::new(
        catalog.clone(),
        Arc::new(WikidataClient::new(client.clone(), &config.wikidata_endpoint)),
        Arc::new(OverpassClient::new(client, &config.overpass_endpoint)),
    );

    let response = importer.import(&request).await;
    catalog.close().await?;
    print_json(&response)?;

    let failed = response.failed().count();
    if failed > 0 {
        return Err(CliError::Partial {
            failed,
            total: response.results.len(),
        });
    }
    Ok(())
}

pub(crate) async fn list(store: Option<&Path>) -> CliResult<()> {
    let catalog = open_catalog(store).await;
    let records = catalog.list().await;
    catalog.close().await?;
    print_json(&records)
}

pub(crate) async fn seed(store: &Path) -> CliResult<()> {
    let catalog = open_catalog(Some(store)).await;
    let count = catalog.reseed().await;
    catalog.close().await?;
    let count = count?;
    info!(count, store = %store.display(), "seeded monuments");
    print_json(&json!({ "seeded": count }))
}

pub(crate) async fn fetch(
    out: &Path,
    store: Option<&Path>,
    token: Option<String>,
    sketchfab_api: &str,
    http: &HttpArgs,
) -> CliResult<()> {
    let token = token
        .filter(|token| !token.trim().is_empty())
        .ok_or(CliError::MissingToken)?;
    let config = http.import_config()?;
    let client =
        SketchfabClient::new(http_client(&config)?, token)?.with_api_base(sketchfab_api);

    let catalog = open_catalog(store).await;
    let records = catalog.list().await;
    catalog.close().await?;

    let outcomes = fetch_originals(&client, &records, out).await?;
    let summary: Vec<_> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(path) => json!({ "slug": outcome.slug, "path": path.display().to_string() }),
            Err(err) => json!({ "slug": outcome.slug, "error": err.to_string() }),
        })
        .collect();
    print_json(&summary)?;

    let failed = outcomes.iter().filter(|outcome| outcome.result.is_err()).count();
    if failed > 0 {
        return Err(CliError::Partial {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

/// Store-backed catalog when a path is given, seed data otherwise.
async fn open_catalog(store: Option<&Path>) -> Catalog {
    match store {
        Some(path) => Catalog::new(Arc::new(JsonFileStore::open(path).await)),
        None => Catalog::seed_only(),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout).map_err(serde_json::Error::io)?;
    Ok(())
}
