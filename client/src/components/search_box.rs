//! The global search box.
//!
//! DESIGN
//! ======
//! Keystrokes are classified (clear / ignore / search) and searches navigate
//! with `replace` so rapid typing rewrites the current history entry instead
//! of stacking one per keystroke. The trailing-edge debounce is a sequence
//! counter plus a sleep: whichever keystroke was last when the timer fires
//! wins, every earlier timer sees a newer sequence and gives up.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::search::{InputAction, SearchState, classify_input};
use crate::util::shortcuts::SEARCH_INPUT_ID;

#[component]
pub fn SearchBox() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let navigate = use_navigate();
    let debounce_seq = StoredValue::new(0u64);

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        search.update(|state| state.input = value.clone());

        match classify_input(&value) {
            InputAction::Clear => {
                debounce_seq.update_value(|seq| *seq += 1);
                navigate("/", replace_options());
            }
            InputAction::Ignore => {}
            InputAction::Search(query) => {
                let seq = debounce_seq.with_value(|seq| seq + 1);
                debounce_seq.set_value(seq);

                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            crate::state::search::SEARCH_DEBOUNCE_MS,
                        ))
                        .await;
                        if debounce_seq.get_value() != seq {
                            return;
                        }
                        let path = format!("/search/{}", urlencoding::encode(&query));
                        navigate(&path, replace_options());
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (seq, query);
                }
            }
        }
    };

    view! {
        <div class="search" class:search--expanded=move || search.get().expanded>
            <input
                id=SEARCH_INPUT_ID
                class="search__input"
                type="search"
                placeholder="Search components..."
                autocomplete="off"
                prop:value=move || search.get().input
                on:input=on_input
                on:focus=move |_| search.update(|state| state.expanded = true)
            />
        </div>
    }
}

fn replace_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}
