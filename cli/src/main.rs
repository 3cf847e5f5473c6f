//! Terminal client for the component directory API.

use clap::{Parser, Subcommand};
use registry::ComponentSummary;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned status {status} for {path}")]
    Status { status: u16, path: String },
}

#[derive(Parser, Debug)]
#[command(name = "compdir", about = "Component directory API client")]
struct Cli {
    #[arg(long, env = "COMPDIR_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the full directory, ranked by stars.
    All {
        /// Show at most this many components.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search the directory.
    Search { query: String },
    /// Print a component's readme.
    Readme { user: String, repo: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let http = reqwest::Client::new();
    let base = cli.base_url.trim_end_matches('/');

    match cli.command {
        Command::All { limit } => {
            let components = fetch_components(&http, base, "/components/all").await?;
            let shown = limit.unwrap_or(components.len());
            for component in components.iter().take(shown) {
                print_component(component);
            }
        }
        Command::Search { query } => {
            let path = format!("/components/search/{query}");
            let components = fetch_components(&http, base, &path).await?;
            for component in &components {
                print_component(component);
            }
        }
        Command::Readme { user, repo } => {
            let path = format!("/{user}/{repo}/readme");
            let text = fetch_text(&http, base, &path).await?;
            println!("{text}");
        }
    }
    Ok(())
}

async fn fetch_components(
    http: &reqwest::Client,
    base: &str,
    path: &str,
) -> Result<Vec<ComponentSummary>, CliError> {
    let resp = http.get(format!("{base}{path}")).send().await?;
    if !resp.status().is_success() {
        return Err(CliError::Status {
            status: resp.status().as_u16(),
            path: path.to_owned(),
        });
    }
    Ok(resp.json().await?)
}

async fn fetch_text(http: &reqwest::Client, base: &str, path: &str) -> Result<String, CliError> {
    let resp = http.get(format!("{base}{path}")).send().await?;
    if !resp.status().is_success() {
        return Err(CliError::Status {
            status: resp.status().as_u16(),
            path: path.to_owned(),
        });
    }
    Ok(resp.text().await?)
}

fn print_component(component: &ComponentSummary) {
    println!(
        "{:>6}  {:<40}  {}",
        component.stars,
        component.repo,
        component.description_text()
    );
}
