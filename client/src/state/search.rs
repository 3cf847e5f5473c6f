//! Search state: input classification, in-flight bookkeeping, results.
//!
//! DESIGN
//! ======
//! Debouncing is the only temporal control on input, but responses carry a
//! sequence number so an overlapping request that resolves late cannot
//! clobber newer results. `finish_request` is the single place results,
//! empty sets, and failures converge.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use registry::ComponentSummary;

/// Trailing-edge debounce applied to search keystrokes.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Queries shorter than this never trigger a fetch.
pub const MIN_QUERY_LEN: usize = 2;

/// What a keystroke in the search box should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Input emptied: return to the full listing.
    Clear,
    /// Too short to search; do nothing.
    Ignore,
    /// Debounce, then navigate to the search route for this query.
    Search(String),
}

/// Classify raw search-box input.
#[must_use]
pub fn classify_input(raw: &str) -> InputAction {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        InputAction::Clear
    } else if trimmed.chars().count() < MIN_QUERY_LEN {
        InputAction::Ignore
    } else {
        InputAction::Search(trimmed.to_owned())
    }
}

/// The generic error card shown in place of results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorNotice {
    pub title: String,
    pub message: String,
}

impl ErrorNotice {
    fn no_results() -> Self {
        Self {
            title: "No results".to_owned(),
            message: "Sorry, no results for that query! Try again!".to_owned(),
        }
    }

    fn fetch_failed() -> Self {
        Self {
            title: "Something went wrong".to_owned(),
            message: "The directory could not be reached. Try again in a moment.".to_owned(),
        }
    }
}

/// Shared search state backing the search box and the result listings.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// Current text in the search box.
    pub input: String,
    pub results: Vec<ComponentSummary>,
    pub loading: bool,
    pub error: Option<ErrorNotice>,
    /// Whether the search chrome is expanded (Escape collapses it).
    pub expanded: bool,
    seq: u64,
}

impl SearchState {
    /// Start a request: bumps and returns the sequence number responses must
    /// present to be applied.
    pub fn begin_request(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    /// Apply a finished request. Returns `false` when the response is stale
    /// (a newer request began after it) and was dropped.
    pub fn finish_request(
        &mut self,
        seq: u64,
        outcome: Result<Vec<ComponentSummary>, String>,
    ) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;

        match outcome {
            Ok(results) if results.is_empty() => {
                self.results = Vec::new();
                self.error = Some(ErrorNotice::no_results());
            }
            Ok(results) => {
                self.results = results;
                self.error = None;
            }
            Err(reason) => {
                log_fetch_failure(&reason);
                self.results = Vec::new();
                self.error = Some(ErrorNotice::fetch_failed());
            }
        }
        true
    }
}

/// Kick off a directory fetch for `query` (everything when empty) and apply
/// the response to `search`. On the server this only marks the state loading;
/// hydration performs the real fetch.
pub fn load_results(search: RwSignal<SearchState>, query: String) {
    let mut seq = 0;
    search.update(|state| seq = state.begin_request());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = if query.is_empty() {
            crate::net::api::fetch_all().await
        } else {
            crate::net::api::fetch_search(&query).await
        };
        search.update(|state| {
            state.finish_request(seq, outcome);
        });
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (seq, query);
    }
}

#[cfg(feature = "hydrate")]
fn log_fetch_failure(reason: &str) {
    log::warn!("directory fetch failed: {reason}");
}

#[cfg(not(feature = "hydrate"))]
fn log_fetch_failure(_reason: &str) {}
