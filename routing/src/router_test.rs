use super::*;

/// Collects which handlers ran, in order.
#[derive(Default)]
struct Trace {
    ran: Vec<&'static str>,
    query: Option<String>,
}

fn record(name: &'static str, flow: Flow) -> Handler<Trace> {
    middleware(move |_ctx: &RouteContext, state: &mut Trace| {
        state.ran.push(name);
        flow
    })
}

// =============================================================
// RouteContext
// =============================================================

#[test]
fn from_url_splits_path_and_query() {
    let ctx = RouteContext::from_url("/search/dom?page=2&sort=stars");
    assert_eq!(ctx.path, "/search/dom");
    assert_eq!(ctx.querystring, "page=2&sort=stars");
    assert!(ctx.params.is_empty());
}

#[test]
fn from_url_without_query_leaves_querystring_empty() {
    let ctx = RouteContext::from_url("/component/dialog");
    assert_eq!(ctx.path, "/component/dialog");
    assert_eq!(ctx.querystring, "");
}

#[test]
fn empty_path_normalizes_to_root() {
    let ctx = RouteContext::new("", "");
    assert_eq!(ctx.path, "/");
}

// =============================================================
// Dispatch ordering
// =============================================================

#[test]
fn handlers_run_in_registration_order() {
    let router = Router::new()
        .on("/", vec![record("first", Flow::Next), record("second", Flow::Halt)])
        .unwrap();

    let mut ctx = RouteContext::from_url("/");
    let mut trace = Trace::default();
    assert!(router.dispatch(&mut ctx, &mut trace));
    assert_eq!(trace.ran, vec!["first", "second"]);
}

#[test]
fn halt_stops_the_chain() {
    let router = Router::new()
        .on("/", vec![record("first", Flow::Halt), record("second", Flow::Halt)])
        .unwrap();

    let mut ctx = RouteContext::from_url("/");
    let mut trace = Trace::default();
    router.dispatch(&mut ctx, &mut trace);
    assert_eq!(trace.ran, vec!["first"]);
}

#[test]
fn decline_falls_through_to_later_matching_template() {
    let router = Router::new()
        .on("/search/:query", vec![record("search", Flow::Next)])
        .unwrap()
        .on("/:user/:repo", vec![record("component", Flow::Halt)])
        .unwrap();

    let mut ctx = RouteContext::from_url("/search/dom");
    let mut trace = Trace::default();
    router.dispatch(&mut ctx, &mut trace);
    assert_eq!(trace.ran, vec!["search", "component"]);
}

#[test]
fn halting_template_shadows_later_matching_template() {
    let router = Router::new()
        .on("/search/:query", vec![record("search", Flow::Halt)])
        .unwrap()
        .on("/:user/:repo", vec![record("component", Flow::Halt)])
        .unwrap();

    let mut ctx = RouteContext::from_url("/search/dom");
    let mut trace = Trace::default();
    router.dispatch(&mut ctx, &mut trace);
    assert_eq!(trace.ran, vec!["search"]);
}

#[test]
fn non_matching_entries_are_skipped() {
    let router = Router::new()
        .on("/", vec![record("home", Flow::Halt)])
        .unwrap()
        .on("/:user/:repo", vec![record("component", Flow::Halt)])
        .unwrap();

    let mut ctx = RouteContext::from_url("/component/dialog");
    let mut trace = Trace::default();
    assert!(router.dispatch(&mut ctx, &mut trace));
    assert_eq!(trace.ran, vec!["component"]);
}

// =============================================================
// Params binding
// =============================================================

#[test]
fn params_rebind_per_matching_entry() {
    let router = Router::new()
        .on(
            "/search/:query",
            vec![middleware(|ctx: &RouteContext, state: &mut Trace| {
                state.query = ctx.params.get("query").map(str::to_owned);
                Flow::Next
            })],
        )
        .unwrap()
        .on(
            "/:user/:repo",
            vec![middleware(|ctx: &RouteContext, state: &mut Trace| {
                // This entry's own pattern captured different names.
                assert_eq!(ctx.params.get("query"), None);
                assert_eq!(ctx.params.get("user"), Some("search"));
                state.ran.push("component");
                Flow::Halt
            })],
        )
        .unwrap();

    let mut ctx = RouteContext::from_url("/search/dom");
    let mut trace = Trace::default();
    router.dispatch(&mut ctx, &mut trace);
    assert_eq!(trace.query.as_deref(), Some("dom"));
    assert_eq!(trace.ran, vec!["component"]);
}

#[test]
fn unmatched_dispatch_touches_nothing() {
    let router = Router::new()
        .on("/", vec![record("home", Flow::Halt)])
        .unwrap();

    let mut ctx = RouteContext::from_url("/a/b/c");
    let mut trace = Trace::default();
    assert!(!router.dispatch(&mut ctx, &mut trace));
    assert!(trace.ran.is_empty());
    assert!(ctx.params.is_empty());
}

// =============================================================
// Registration
// =============================================================

#[test]
fn on_rejects_bad_template() {
    let result = Router::<Trace>::new().on("/:", vec![record("never", Flow::Halt)]);
    assert!(result.is_err());
}

#[test]
fn len_counts_handlers_not_templates() {
    let router = Router::<Trace>::new()
        .on("/", vec![record("a", Flow::Next), record("b", Flow::Halt)])
        .unwrap();
    assert_eq!(router.len(), 2);
    assert!(!router.is_empty());
}
