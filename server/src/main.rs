mod routes;
mod services;
mod state;

use services::catalog::{self, Catalog};
use services::github::GithubClient;
use state::{AppState, ServerConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let config = ServerConfig::from_env();
    let http = reqwest::Client::builder()
        .user_agent("component-directory")
        .build()
        .expect("failed to build http client");

    // Initial catalog load (non-fatal: an unreachable feed serves empty
    // until the refresh task succeeds).
    let catalog = match catalog::load_initial(&http, &config).await {
        Ok(components) => {
            tracing::info!(count = components.len(), "catalog loaded");
            Catalog::new(components)
        }
        Err(e) => {
            tracing::warn!(error = %e, "catalog not loaded — serving empty directory");
            Catalog::default()
        }
    };

    let github = GithubClient::new(http.clone(), config.github_token.clone());
    let state = AppState::new(catalog, github, config);

    // Background refresh keeps the directory current without blocking requests.
    let _refresh = catalog::spawn_refresh_task(state.clone(), http);

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "component directory listening");
    axum::serve(listener, app).await.expect("server failed");
}
