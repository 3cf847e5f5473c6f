//! The generic error card rendered in place of results.

use leptos::prelude::*;

/// One error shape for everything: empty result sets, unreachable server,
/// missing readmes.
#[component]
pub fn ErrorView(#[prop(into)] title: String, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-view">
            <h2 class="error-view__title">{title}</h2>
            <p class="error-view__message">{message}</p>
        </div>
    }
}
