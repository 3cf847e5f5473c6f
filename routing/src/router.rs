//! Middleware-chain dispatch.
//!
//! DESIGN
//! ======
//! Registration order is dispatch order. Dispatch walks the flat entry list
//! with a single index: each entry whose pattern matches the context path has
//! its params bound and its handler invoked; a handler that returns
//! [`Flow::Next`] declines, and the walk resumes at the following entry.
//! [`Flow::Halt`] ends the walk. Handlers never observe params captured by a
//! pattern other than their own.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::sync::Arc;

use crate::pattern::{Params, Pattern, PatternError};

/// What a handler tells the dispatcher to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Stop the chain; the route is handled.
    Halt,
    /// Decline; continue with the next matching entry.
    Next,
}

/// The per-navigation context threaded through handlers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteContext {
    /// Path portion of the URL, always starting with `/`.
    pub path: String,
    /// Raw query string without the leading `?`.
    pub querystring: String,
    /// Params captured by the pattern of the handler currently running.
    pub params: Params,
}

impl RouteContext {
    /// Build a context from a full URL path such as `/search/dom?page=2`.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let (path, querystring) = match url.split_once('?') {
            Some((path, query)) => (path, query),
            None => (url, ""),
        };
        Self::new(path, querystring)
    }

    /// Build a context from an already-split path and query string.
    #[must_use]
    pub fn new(path: &str, querystring: &str) -> Self {
        let path = if path.is_empty() { "/" } else { path };
        Self {
            path: path.to_owned(),
            querystring: querystring.trim_start_matches('?').to_owned(),
            params: Params::default(),
        }
    }
}

/// A boxed middleware function.
pub type Handler<T> = Box<dyn Fn(&RouteContext, &mut T) -> Flow + Send + Sync>;

/// Convenience wrapper so registration sites read as a handler list.
pub fn middleware<T>(
    f: impl Fn(&RouteContext, &mut T) -> Flow + Send + Sync + 'static,
) -> Handler<T> {
    Box::new(f)
}

struct Entry<T> {
    pattern: Arc<Pattern>,
    handler: Handler<T>,
}

/// An ordered collection of pattern/middleware entries.
pub struct Router<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `handlers` for `template`, preserving their order.
    ///
    /// The template is compiled once and shared by every handler in the
    /// group, so a chain like `[clear, show]` re-binds the same params for
    /// each of its steps.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the template does not compile.
    pub fn on<I>(mut self, template: &str, handlers: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = Handler<T>>,
    {
        let pattern = Arc::new(Pattern::compile(template)?);
        for handler in handlers {
            self.entries.push(Entry {
                pattern: Arc::clone(&pattern),
                handler,
            });
        }
        Ok(self)
    }

    /// Number of registered entries (one per handler, not per template).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dispatch `ctx` through the chain, mutating `state` via handlers.
    ///
    /// Returns `true` when at least one entry matched, regardless of whether
    /// the final handler halted or declined. An unmatched dispatch leaves
    /// both `ctx.params` and `state` untouched.
    pub fn dispatch(&self, ctx: &mut RouteContext, state: &mut T) -> bool {
        let mut matched = false;

        for entry in &self.entries {
            let Some(params) = entry.pattern.match_path(&ctx.path) else {
                continue;
            };
            ctx.params = params;
            matched = true;

            match (entry.handler)(ctx, state) {
                Flow::Halt => break,
                Flow::Next => {}
            }
        }

        matched
    }
}
