//! Home page: the full star-ranked directory listing.

use leptos::prelude::*;

use crate::components::component_list::ComponentList;
use crate::state::search::{SearchState, load_results};

#[component]
pub fn HomePage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    // Request the full listing once per visit.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_results(search, String::new());
    });

    view! {
        <section class="directory">
            <h1 class="directory__heading">"Components"</h1>
            <p class="directory__tagline">"Reusable front-end packages, ranked by stars."</p>
            <ComponentList/>
        </section>
    }
}
