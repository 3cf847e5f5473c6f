//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the directory API with Leptos SSR rendering under a
//! single Axum router. The API owns `/components/*`, `/healthz`, and the
//! three-segment GitHub passthrough; every other path falls through to the
//! Leptos app, whose single wildcard route serves the client-side URLs
//! (`/`, `/search/:query`, `/:user/:repo`).

pub mod components;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes consumed by the WASM client (and anything else that speaks
/// plain HTTP).
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/components/all", get(components::list_all))
        .route("/components/search/{query}", get(components::search_components))
        .route("/{user}/{repo}/{file}", get(components::repo_file))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes + Leptos SSR + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
