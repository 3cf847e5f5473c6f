//! Loading spinner.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <span class="spinner__dot"></span>
            <span class="spinner__dot"></span>
            <span class="spinner__dot"></span>
        </div>
    }
}
