//! Directory search and ranking.
//!
//! DESIGN
//! ======
//! Scoring is deliberately coarse: a hit on the repo name outranks a keyword
//! hit, which outranks a description hit. Ties break on stars, then on the
//! repo slug so result order is stable across refreshes.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::cmp::Reverse;

use crate::model::ComponentSummary;

const SCORE_NAME: u32 = 3;
const SCORE_KEYWORD: u32 = 2;
const SCORE_DESCRIPTION: u32 = 1;

/// Rank every component by star count (the `/components/all` listing).
#[must_use]
pub fn rank_all(components: &[ComponentSummary]) -> Vec<ComponentSummary> {
    let mut ranked = components.to_vec();
    ranked.sort_by(|a, b| {
        Reverse(a.stars)
            .cmp(&Reverse(b.stars))
            .then_with(|| a.repo.cmp(&b.repo))
    });
    ranked
}

/// Rank components matching `query`; an empty query behaves like [`rank_all`].
#[must_use]
pub fn search(components: &[ComponentSummary], query: &str) -> Vec<ComponentSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rank_all(components);
    }

    let mut scored: Vec<(u32, ComponentSummary)> = components
        .iter()
        .filter_map(|component| {
            let score = score(component, &query);
            (score > 0).then(|| (score, component.clone()))
        })
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        Reverse(*score_a)
            .cmp(&Reverse(*score_b))
            .then_with(|| Reverse(a.stars).cmp(&Reverse(b.stars)))
            .then_with(|| a.repo.cmp(&b.repo))
    });

    scored.into_iter().map(|(_, component)| component).collect()
}

fn score(component: &ComponentSummary, query: &str) -> u32 {
    let mut score = 0;

    if component.repo.to_lowercase().contains(query) {
        score += SCORE_NAME;
    }
    if component
        .keywords
        .iter()
        .any(|keyword| keyword.to_lowercase().contains(query))
    {
        score += SCORE_KEYWORD;
    }
    if component
        .description
        .as_deref()
        .is_some_and(|text| text.to_lowercase().contains(query))
    {
        score += SCORE_DESCRIPTION;
    }

    score
}
