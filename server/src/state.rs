//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the in-memory catalog behind an `RwLock` (replaced wholesale on
//! refresh, so request handlers never wait on an upstream fetch) and the
//! GitHub passthrough client.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::services::catalog::Catalog;
use crate::services::github::GithubClient;

const DEFAULT_REFRESH_SECS: u64 = 900;

/// Environment-driven server configuration.
#[derive(Clone, Debug, Default)]
pub struct ServerConfig {
    /// Upstream crawler feed URL (`CRAWLER_URL`).
    pub crawler_url: Option<String>,
    /// Local feed file for development (`CATALOG_PATH`).
    pub catalog_path: Option<PathBuf>,
    /// Catalog refresh interval (`CATALOG_REFRESH_SECS`).
    pub refresh_interval: Duration,
    /// Optional GitHub API token (`GITHUB_TOKEN`).
    pub github_token: Option<String>,
}

impl ServerConfig {
    /// Read configuration from the environment, with defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            crawler_url: env_string("CRAWLER_URL"),
            catalog_path: env_string("CATALOG_PATH").map(PathBuf::from),
            refresh_interval: Duration::from_secs(env_parse(
                "CATALOG_REFRESH_SECS",
                DEFAULT_REFRESH_SECS,
            )),
            github_token: env_string("GITHUB_TOKEN"),
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<Catalog>>,
    pub github: GithubClient,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, github: GithubClient, config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            github,
            config: Arc::new(config),
        }
    }
}
