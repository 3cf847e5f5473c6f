//! Package summary model.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// A package listed in the directory.
///
/// `repo` is the `"user/name"` slug; everything else is optional because the
/// upstream feed is ragged. Display fallbacks live here so every view renders
/// the same text for missing fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub repo: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub stars: u32,
}

impl ComponentSummary {
    /// The GitHub user/org half of the repo slug.
    #[must_use]
    pub fn user(&self) -> &str {
        self.repo.split('/').next().unwrap_or(&self.repo)
    }

    /// The repository-name half of the repo slug.
    #[must_use]
    pub fn name(&self) -> &str {
        match self.repo.split_once('/') {
            Some((_, name)) => name,
            None => &self.repo,
        }
    }

    /// Absolute GitHub URL for the repository.
    #[must_use]
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.repo)
    }

    /// Site-internal path of the component page.
    #[must_use]
    pub fn page_path(&self) -> String {
        format!("/{}", self.repo)
    }

    /// Description with the display fallback applied.
    #[must_use]
    pub fn description_text(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => "No description.",
        }
    }

    /// License with the display fallback applied.
    #[must_use]
    pub fn license_text(&self) -> &str {
        match self.license.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => "None",
        }
    }
}
