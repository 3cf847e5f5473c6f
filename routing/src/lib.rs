//! Path-pattern routing shared by the directory client.
//!
//! This crate owns the URL surface of the site: templates such as
//! `/search/:query` and `/:user/:repo` compile to anchored regexes, and an
//! ordered middleware chain dispatches a [`RouteContext`] against them.
//! It intentionally knows nothing about rendering; handlers write into a
//! caller-supplied state value so dispatch stays pure and testable.

mod pattern;
mod router;

pub use pattern::{Params, Pattern, PatternError};
pub use router::{Flow, Handler, RouteContext, Router, middleware};
