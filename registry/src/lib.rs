//! Shared component-directory model.
//!
//! This crate owns the package summary shape used on the wire between the
//! directory server and the WASM client, the lenient ingest of the upstream
//! crawler feed, and the search ranking the directory endpoints serve.

mod feed;
mod model;
mod search;

pub use feed::CrawlerFeed;
pub use model::ComponentSummary;
pub use search::{rank_all, search};
