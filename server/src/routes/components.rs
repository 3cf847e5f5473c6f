//! Directory API handlers.

#[cfg(test)]
#[path = "components_test.rs"]
mod components_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use registry::ComponentSummary;

use crate::services::github::GithubError;
use crate::state::AppState;

/// `GET /components/all` — the full star-ranked listing.
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<ComponentSummary>> {
    Json(state.catalog.read().await.all())
}

/// `GET /components/search/:query` — ranked matches for the query.
pub async fn search_components(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Json<Vec<ComponentSummary>> {
    Json(state.catalog.read().await.search(&query))
}

/// `GET /:user/:repo/:file` — GitHub passthrough, used by component pages
/// for `readme`.
pub async fn repo_file(
    State(state): State<AppState>,
    Path((user, repo, file)): Path<(String, String, String)>,
) -> Result<Response, StatusCode> {
    let text = state
        .github
        .fetch_repo_file(&user, &repo, &file)
        .await
        .map_err(github_error_to_status)?;

    Ok(([(CONTENT_TYPE, content_type_for(&file))], text).into_response())
}

pub(crate) fn github_error_to_status(err: GithubError) -> StatusCode {
    match err {
        GithubError::NotFound => StatusCode::NOT_FOUND,
        GithubError::Request(_) | GithubError::Status(_) => StatusCode::BAD_GATEWAY,
    }
}

pub(crate) fn content_type_for(file: &str) -> &'static str {
    if file.eq_ignore_ascii_case("readme") || file.to_ascii_lowercase().ends_with(".md") {
        "text/markdown; charset=utf-8"
    } else if file.to_ascii_lowercase().ends_with(".json") {
        "application/json"
    } else {
        "text/plain; charset=utf-8"
    }
}
