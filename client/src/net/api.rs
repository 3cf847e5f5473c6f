//! REST API helpers for the directory server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since data loading is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so a failed fetch degrades to the error
//! view without crashing hydration. A network failure and an upstream error
//! status collapse into the same shape on purpose.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use registry::ComponentSummary;

#[cfg(any(test, feature = "hydrate"))]
fn components_all_endpoint() -> String {
    "/components/all".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn components_search_endpoint(query: &str) -> String {
    format!("/components/search/{}", urlencoding::encode(query))
}

#[cfg(any(test, feature = "hydrate"))]
fn repo_file_endpoint(user: &str, repo: &str, file: &str) -> String {
    format!(
        "/{}/{}/{}",
        urlencoding::encode(user),
        urlencoding::encode(repo),
        urlencoding::encode(file)
    )
}

/// Fetch the full directory listing from `/components/all`.
///
/// # Errors
///
/// Returns an error string when the request fails or the server responds
/// with a non-OK status.
pub async fn fetch_all() -> Result<Vec<ComponentSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_components(&components_all_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch search results from `/components/search/:query`.
///
/// # Errors
///
/// Same conditions as [`fetch_all`].
pub async fn fetch_search(query: &str) -> Result<Vec<ComponentSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_components(&components_search_endpoint(query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Fetch a raw repository file (usually `readme`) through the server's
/// GitHub passthrough.
///
/// # Errors
///
/// Returns an error string when the request fails or the file is missing.
pub async fn fetch_repo_file(user: &str, repo: &str, file: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = repo_file_endpoint(user, repo, file);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("file request failed: {}", resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user, repo, file);
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_components(url: &str) -> Result<Vec<ComponentSummary>, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("directory request failed: {}", resp.status()));
    }

    // Older directory feeds padded listings with trailing nulls; tolerate
    // them here the same way the server-side ingest does.
    let rows: Vec<Option<ComponentSummary>> = resp.json().await.map_err(|e| e.to_string())?;
    Ok(rows.into_iter().flatten().collect())
}
