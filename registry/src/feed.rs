//! Crawler feed ingest.
//!
//! ERROR HANDLING
//! ==============
//! The upstream feed is ragged: component rows can be `null`, lack a repo
//! slug, or nest their star count under a `github` object. Ingest normalizes
//! what it can and silently drops rows that cannot name a repository, so one
//! bad row never fails a whole refresh.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use serde::Deserialize;

use crate::model::ComponentSummary;

/// The upstream crawler document: registered users plus component rows.
#[derive(Debug, Default, Deserialize)]
pub struct CrawlerFeed {
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    components: Vec<Option<FeedComponent>>,
}

/// One raw component row as the crawler emits it.
#[derive(Debug, Deserialize)]
struct FeedComponent {
    repo: Option<String>,
    description: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
    license: Option<String>,
    stars: Option<u32>,
    github: Option<FeedGithub>,
}

#[derive(Debug, Deserialize)]
struct FeedGithub {
    full_name: Option<String>,
    #[serde(default)]
    stargazers_count: u32,
}

impl CrawlerFeed {
    /// Normalize the feed into component summaries, dropping unusable rows.
    #[must_use]
    pub fn into_components(self) -> Vec<ComponentSummary> {
        self.components
            .into_iter()
            .flatten()
            .filter_map(FeedComponent::normalize)
            .collect()
    }
}

impl FeedComponent {
    fn normalize(self) -> Option<ComponentSummary> {
        let repo = self
            .repo
            .or_else(|| self.github.as_ref().and_then(|gh| gh.full_name.clone()))?;
        let repo = repo.trim().trim_matches('/').to_owned();
        if !repo.contains('/') {
            return None;
        }

        let stars = self
            .stars
            .or_else(|| self.github.map(|gh| gh.stargazers_count))
            .unwrap_or(0);

        Some(ComponentSummary {
            repo,
            description: self.description,
            keywords: self.keywords,
            license: self.license,
            stars,
        })
    }
}
