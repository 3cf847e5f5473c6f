//! GitHub passthrough client.
//!
//! `readme` requests resolve through the GitHub API with the raw media type
//! so the default branch and readme filename never need guessing; any other
//! file goes through the raw-content host at `HEAD`. There is deliberately
//! no cache here: the passthrough stays a thin fetch.

#[cfg(test)]
#[path = "github_test.rs"]
mod github_test;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION};

const API_BASE: &str = "https://api.github.com";
const RAW_BASE: &str = "https://raw.githubusercontent.com";
const README_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("file not found upstream")]
    NotFound,
    #[error("github request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("github returned status {0}")]
    Status(u16),
}

/// Thin client over the two GitHub content endpoints the directory uses.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    raw_base: String,
    token: Option<String>,
}

impl GithubClient {
    #[must_use]
    pub fn new(http: reqwest::Client, token: Option<String>) -> Self {
        Self::with_bases(http, token, API_BASE, RAW_BASE)
    }

    /// Build a client against alternate hosts (used by tests).
    #[must_use]
    pub fn with_bases(
        http: reqwest::Client,
        token: Option<String>,
        api_base: &str,
        raw_base: &str,
    ) -> Self {
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_owned(),
            raw_base: raw_base.trim_end_matches('/').to_owned(),
            token,
        }
    }

    fn readme_url(&self, user: &str, repo: &str) -> String {
        format!("{}/repos/{user}/{repo}/readme", self.api_base)
    }

    fn raw_file_url(&self, user: &str, repo: &str, file: &str) -> String {
        format!("{}/{user}/{repo}/HEAD/{file}", self.raw_base)
    }

    /// Fetch `file` from `user/repo` as text.
    ///
    /// # Errors
    ///
    /// [`GithubError::NotFound`] when upstream reports 404,
    /// [`GithubError::Status`] for other non-success statuses, and
    /// [`GithubError::Request`] for transport failures.
    pub async fn fetch_repo_file(
        &self,
        user: &str,
        repo: &str,
        file: &str,
    ) -> Result<String, GithubError> {
        let is_readme = file.eq_ignore_ascii_case("readme");
        let url = if is_readme {
            self.readme_url(user, repo)
        } else {
            self.raw_file_url(user, repo, file)
        };

        let mut request = self.http.get(&url);
        if is_readme {
            request = request.header(ACCEPT, README_MEDIA_TYPE);
        }
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let resp = request.send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(GithubError::NotFound),
            status if !status.is_success() => Err(GithubError::Status(status.as_u16())),
            _ => Ok(resp.text().await?),
        }
    }
}
