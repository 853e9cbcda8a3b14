#![cfg(feature = "server")]
//! Server-side access to the aggregated statistics document. The document
//! lives behind an edge key-value endpoint; a local JSON file can stand in
//! during development. Fetched copies are cached in-process for a TTL so the
//! upstream sees at most one request per window.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tokio::sync::RwLock;

use crate::shared::types::StatisticsDocument;

#[derive(Debug, Clone)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

/// FLIGHT_DATA_URL wins; otherwise fall back to a JSON file under the
/// project's data/ directory (FLIGHT_DATA_FILE overrides the path).
pub fn resolve_source() -> DataSource {
    use std::env;
    if let Ok(url) = env::var("FLIGHT_DATA_URL") {
        return DataSource::Url(url);
    }
    if let Ok(file) = env::var("FLIGHT_DATA_FILE") {
        return DataSource::File(PathBuf::from(file));
    }
    let root = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(root);
    path.push("data");
    path.push("airport_data.json");
    DataSource::File(path)
}

fn cache_ttl() -> Duration {
    let minutes = std::env::var("FLIGHT_DATA_TTL_MINUTES")
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(30);
    Duration::minutes(minutes.max(1))
}

#[derive(Debug, Clone)]
struct CachedDocument {
    fetched_at: DateTime<Utc>,
    document: StatisticsDocument,
}

static CACHE: OnceCell<RwLock<Option<CachedDocument>>> = OnceCell::new();
static HTTP: OnceCell<reqwest::Client> = OnceCell::new();

fn cache() -> &'static RwLock<Option<CachedDocument>> {
    CACHE.get_or_init(|| RwLock::new(None))
}

fn http() -> &'static reqwest::Client {
    HTTP.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    })
}

/// One upstream read. `Ok(None)` means the source answered with an
/// empty/null document, which the UI reports as "no data" rather than
/// a fetch failure.
async fn fetch_document(source: &DataSource) -> Result<Option<StatisticsDocument>> {
    let value: serde_json::Value = match source {
        DataSource::Url(url) => {
            let resp = http()
                .get(url)
                .send()
                .await
                .with_context(|| format!("GET {url}"))?
                .error_for_status()
                .with_context(|| format!("GET {url}"))?;
            resp.json().await.context("decode upstream body")?
        }
        DataSource::File(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("read {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?
        }
    };
    if value.is_null() {
        return Ok(None);
    }
    let document: StatisticsDocument =
        serde_json::from_value(value).context("decode statistics document")?;
    Ok(Some(document))
}

/// Cached view of the upstream document. Returns the fetch instant alongside
/// the document so the UI can show data freshness.
pub async fn cached_document() -> Result<Option<(DateTime<Utc>, StatisticsDocument)>> {
    let ttl = cache_ttl();
    {
        let guard = cache().read().await;
        if let Some(cached) = guard.as_ref() {
            if Utc::now() - cached.fetched_at < ttl {
                return Ok(Some((cached.fetched_at, cached.document.clone())));
            }
        }
    }

    let mut guard = cache().write().await;
    // another task may have refreshed while we waited for the write lock
    if let Some(cached) = guard.as_ref() {
        if Utc::now() - cached.fetched_at < ttl {
            return Ok(Some((cached.fetched_at, cached.document.clone())));
        }
    }

    let source = resolve_source();
    match fetch_document(&source).await {
        Ok(Some(document)) => {
            let fetched_at = Utc::now();
            eprintln!("[kv] refreshed statistics document from {source:?}");
            *guard = Some(CachedDocument {
                fetched_at,
                document: document.clone(),
            });
            Ok(Some((fetched_at, document)))
        }
        Ok(None) => {
            eprintln!("[kv] upstream returned no document ({source:?})");
            Ok(None)
        }
        Err(e) => {
            // keep serving a stale copy if we have one
            if let Some(cached) = guard.as_ref() {
                eprintln!("[kv] refresh failed, serving stale copy: {e:#}");
                return Ok(Some((cached.fetched_at, cached.document.clone())));
            }
            Err(e)
        }
    }
}
