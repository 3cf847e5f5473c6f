//! Search results page for `/search/:query`.

use leptos::prelude::*;

use crate::components::component_list::ComponentList;
use crate::state::search::{SearchState, load_results};

#[component]
pub fn SearchPage(query: String) -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    // One fetch per mount; typing re-navigates and remounts with the new
    // query, and the response sequence guard drops whatever turns stale.
    let requested = RwSignal::new(false);
    let fetch_query = query.clone();
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_results(search, fetch_query.clone());
    });

    view! {
        <section class="directory directory--search">
            <h1 class="directory__heading">"Results for \"" {query} "\""</h1>
            <ComponentList/>
        </section>
    }
}
