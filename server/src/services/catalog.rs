//! The in-memory component catalog and its refresh loop.
//!
//! DESIGN
//! ======
//! The catalog is a plain `Vec` of summaries replaced wholesale: readers
//! clone ranked copies out from under a short read lock, and the refresh
//! task swaps a freshly-ingested vector in under a write lock. A failed
//! refresh logs and keeps serving the previous catalog.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::path::Path;
use std::time::Instant;

use registry::{ComponentSummary, CrawlerFeed};
use tracing::{info, warn};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog feed request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("catalog feed returned status {0}")]
    Status(u16),
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse catalog feed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no catalog source configured; set CRAWLER_URL or CATALOG_PATH")]
    NoSource,
}

/// The components the directory currently serves.
#[derive(Debug, Default)]
pub struct Catalog {
    components: Vec<ComponentSummary>,
    refreshed_at: Option<Instant>,
}

impl Catalog {
    #[must_use]
    pub fn new(components: Vec<ComponentSummary>) -> Self {
        Self {
            components,
            refreshed_at: Some(Instant::now()),
        }
    }

    /// Replace the catalog contents after a successful refresh.
    pub fn replace(&mut self, components: Vec<ComponentSummary>) {
        self.components = components;
        self.refreshed_at = Some(Instant::now());
    }

    /// Star-ranked full listing.
    #[must_use]
    pub fn all(&self) -> Vec<ComponentSummary> {
        registry::rank_all(&self.components)
    }

    /// Ranked search results for `query`.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<ComponentSummary> {
        registry::search(&self.components, query)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    #[must_use]
    pub fn refreshed_at(&self) -> Option<Instant> {
        self.refreshed_at
    }
}

/// Parse a crawler feed document into component summaries.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] when the document is not valid feed JSON.
pub fn parse_feed(json: &str) -> Result<Vec<ComponentSummary>, CatalogError> {
    let feed: CrawlerFeed = serde_json::from_str(json)?;
    Ok(feed.into_components())
}

/// Read and parse a local feed file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the file cannot be read, or
/// [`CatalogError::Parse`] when its contents are not valid feed JSON.
pub fn load_from_path(path: &Path) -> Result<Vec<ComponentSummary>, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_feed(&json)
}

/// Fetch and parse the upstream crawler feed.
///
/// # Errors
///
/// Returns [`CatalogError`] for request failures, non-success statuses, and
/// unparseable documents.
pub async fn fetch_feed(
    http: &reqwest::Client,
    url: &str,
) -> Result<Vec<ComponentSummary>, CatalogError> {
    let resp = http.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(CatalogError::Status(resp.status().as_u16()));
    }
    let body = resp.text().await?;
    parse_feed(&body)
}

/// Load the catalog from whichever source is configured. The local file wins
/// over the remote feed so development never depends on the network.
///
/// # Errors
///
/// Returns [`CatalogError::NoSource`] when neither source is configured, or
/// the underlying load/fetch error.
pub async fn load_initial(
    http: &reqwest::Client,
    config: &crate::state::ServerConfig,
) -> Result<Vec<ComponentSummary>, CatalogError> {
    if let Some(path) = &config.catalog_path {
        return load_from_path(path);
    }
    if let Some(url) = &config.crawler_url {
        return fetch_feed(http, url).await;
    }
    Err(CatalogError::NoSource)
}

/// Spawn the periodic catalog refresh task. Only a remote feed refreshes;
/// a file-backed catalog stays as loaded.
pub fn spawn_refresh_task(state: AppState, http: reqwest::Client) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let Some(url) = state.config.crawler_url.clone() else {
            return;
        };
        let mut interval = tokio::time::interval(state.config.refresh_interval);
        // The first tick fires immediately; skip it, the catalog was just loaded.
        interval.tick().await;

        loop {
            interval.tick().await;
            match fetch_feed(&http, &url).await {
                Ok(components) => {
                    let count = components.len();
                    state.catalog.write().await.replace(components);
                    info!(count, "catalog refreshed");
                }
                Err(error) => {
                    warn!(%error, "catalog refresh failed; serving previous catalog");
                }
            }
        }
    })
}
