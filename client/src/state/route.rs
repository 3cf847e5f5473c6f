//! URL dispatch: route templates, middleware, and the navigation outcome.
//!
//! DESIGN
//! ======
//! The site's URL surface is registered once against the `routing` crate's
//! middleware chain. Handlers write into a [`NavOutcome`] value, so dispatch
//! is a pure function of the URL; applying the outcome to signals happens in
//! the app shell. `clear` declines so it can prefix every chain; terminal
//! handlers halt, which keeps `/search/:query` from falling through into the
//! `/:user/:repo` template behind it.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::sync::OnceLock;

use routing::{Flow, PatternError, RouteContext, Router, middleware};

/// Which page the current URL resolves to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Home,
    Search {
        query: String,
    },
    Component {
        user: String,
        repo: String,
    },
    NotFound,
}

/// Everything a navigation event tells the shell to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavOutcome {
    pub view: ActiveView,
    /// Collapse the search chrome before showing the new page.
    pub collapse_search: bool,
    /// Deep-linked query to reflect into the search box.
    pub query: Option<String>,
    /// CSS class applied to the content container.
    pub content_class: &'static str,
}

impl Default for NavOutcome {
    fn default() -> Self {
        Self {
            view: ActiveView::default(),
            collapse_search: false,
            query: None,
            content_class: "index",
        }
    }
}

/// Resolve a URL into its navigation outcome.
#[must_use]
pub fn dispatch_url(path: &str, querystring: &str) -> NavOutcome {
    let mut ctx = RouteContext::new(path, querystring);
    let mut outcome = NavOutcome::default();

    if !nav_router().dispatch(&mut ctx, &mut outcome) {
        outcome.view = ActiveView::NotFound;
        outcome.content_class = "not-found";
    }
    outcome
}

fn nav_router() -> &'static Router<NavOutcome> {
    static ROUTER: OnceLock<Router<NavOutcome>> = OnceLock::new();
    // The templates are literals; a compile failure would leave an empty
    // router and every URL resolving to NotFound.
    ROUTER.get_or_init(|| build_nav_router().unwrap_or_default())
}

fn build_nav_router() -> Result<Router<NavOutcome>, PatternError> {
    Router::new()
        .on("/", vec![middleware(clear), middleware(home)])?
        .on(
            "/search/:query",
            vec![middleware(clear), middleware(query)],
        )?
        .on(
            "/:user/:repo",
            vec![middleware(clear), middleware(component)],
        )
}

fn clear(_ctx: &RouteContext, outcome: &mut NavOutcome) -> Flow {
    outcome.collapse_search = true;
    Flow::Next
}

fn home(_ctx: &RouteContext, outcome: &mut NavOutcome) -> Flow {
    outcome.view = ActiveView::Home;
    outcome.content_class = "index";
    Flow::Halt
}

fn query(ctx: &RouteContext, outcome: &mut NavOutcome) -> Flow {
    let Some(query) = ctx.params.get("query") else {
        return Flow::Next;
    };
    outcome.view = ActiveView::Search {
        query: query.to_owned(),
    };
    outcome.query = Some(query.to_owned());
    outcome.content_class = "index";
    Flow::Halt
}

fn component(ctx: &RouteContext, outcome: &mut NavOutcome) -> Flow {
    let (Some(user), Some(repo)) = (ctx.params.get("user"), ctx.params.get("repo")) else {
        return Flow::Next;
    };
    outcome.view = ActiveView::Component {
        user: user.to_owned(),
        repo: repo.to_owned(),
    };
    outcome.content_class = "component-page";
    Flow::Halt
}
