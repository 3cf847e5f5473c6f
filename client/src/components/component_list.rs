//! Result listing fed by the shared search state.

use leptos::prelude::*;

use crate::components::component_card::ComponentCard;
use crate::components::error_view::ErrorView;
use crate::components::spinner::Spinner;
use crate::state::search::SearchState;

/// The components listing: spinner while loading, the error view for empty
/// or failed fetches, cards otherwise.
#[component]
pub fn ComponentList() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    view! {
        <div class="components">
            <Show when=move || search.get().loading>
                <Spinner/>
            </Show>
            <Show when=move || !search.get().loading>
                {move || {
                    search
                        .get()
                        .error
                        .map(|notice| {
                            view! { <ErrorView title=notice.title message=notice.message/> }
                        })
                }}
                {move || {
                    search
                        .get()
                        .results
                        .into_iter()
                        .map(|component| view! { <ComponentCard component=component/> })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </div>
    }
}
