//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos router contributes history and link plumbing only: a single
//! wildcard route funnels every URL into [`RoutedContent`], which resolves it
//! through the `routing` crate's middleware chain and renders the matching
//! page. Route side effects (collapsing the search chrome, reflecting a
//! deep-linked query) are applied in one effect so dispatch itself stays
//! pure.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::WildcardSegment;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;

use crate::components::error_view::ErrorView;
use crate::components::search_box::SearchBox;
use crate::pages::component::ComponentPage;
use crate::pages::home::HomePage;
use crate::pages::search::SearchPage;
use crate::state::route::{ActiveView, dispatch_url};
use crate::state::search::SearchState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared search state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let search = RwSignal::new(SearchState::default());
    provide_context(search);

    view! {
        <Stylesheet id="leptos" href="/pkg/directory.css"/>
        <Title text="Component Directory"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=WildcardSegment("any") view=RoutedContent/>
            </Routes>
        </Router>
    }
}

/// Resolves the current URL through the middleware chain and renders the
/// matching page inside the site chrome.
#[component]
fn RoutedContent() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let location = use_location();

    let outcome = Memo::new(move |_| {
        dispatch_url(&location.pathname.get(), &location.search.get())
    });

    // Apply navigation side effects outside of dispatch.
    Effect::new(move || {
        let nav = outcome.get();
        if nav.collapse_search {
            search.update(|state| state.expanded = false);
        }
        if let Some(query) = nav.query {
            if search.with_untracked(|state| state.input != query) {
                search.update(|state| state.input = query.clone());
            }
        }
    });

    crate::util::shortcuts::install(search);

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Components"
            </a>
            <SearchBox/>
        </header>
        <main id="content" class=move || outcome.get().content_class>
            {move || match outcome.get().view {
                ActiveView::Home => view! { <HomePage/> }.into_any(),
                ActiveView::Search { query } => view! { <SearchPage query=query/> }.into_any(),
                ActiveView::Component { user, repo } => {
                    view! { <ComponentPage user=user repo=repo/> }.into_any()
                }
                ActiveView::NotFound => {
                    view! {
                        <ErrorView
                            title="Not found"
                            message="That page does not exist. Try a search instead."
                        />
                    }
                        .into_any()
                }
            }}
        </main>
    }
}
