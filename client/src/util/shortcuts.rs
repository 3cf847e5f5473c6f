//! Global keyboard shortcuts.
//!
//! `s` focuses the search box when nothing else has focus; `Escape`
//! collapses and blurs it. Requires a browser environment; the SSR build
//! compiles this module to a no-op.

use leptos::prelude::*;

use crate::state::search::SearchState;

/// DOM id of the search input the shortcuts drive.
pub const SEARCH_INPUT_ID: &str = "search-input";

/// Install the document-level keydown listener. Safe to call on every mount;
/// only the first call binds.
pub fn install(search: RwSignal<SearchState>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        static INSTALLED: std::sync::OnceLock<()> = std::sync::OnceLock::new();
        if INSTALLED.set(()).is_err() {
            return;
        }

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |ev: web_sys::KeyboardEvent| {
                if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
                    return;
                }
                match ev.key().as_str() {
                    "s" => {
                        if !target_is_body(&ev) {
                            return;
                        }
                        ev.prevent_default();
                        focus_search_input();
                    }
                    "Escape" => {
                        ev.prevent_default();
                        search.update(|state| state.expanded = false);
                        blur_search_input();
                    }
                    _ => {}
                }
            },
        );

        let _ = document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        // The listener lives for the whole page; leak the closure to keep it.
        on_keydown.forget();
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = search;
    }
}

#[cfg(feature = "hydrate")]
fn target_is_body(ev: &web_sys::KeyboardEvent) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .as_ref()
        .and_then(|target| target.dyn_ref::<web_sys::Element>())
        .map_or(false, |el| el.tag_name().eq_ignore_ascii_case("body"))
}

#[cfg(feature = "hydrate")]
fn focus_search_input() {
    with_search_input(|input| {
        let _ = input.focus();
    });
}

#[cfg(feature = "hydrate")]
fn blur_search_input() {
    with_search_input(|input| {
        let _ = input.blur();
    });
}

#[cfg(feature = "hydrate")]
fn with_search_input(f: impl FnOnce(&web_sys::HtmlElement)) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(SEARCH_INPUT_ID) {
        if let Some(input) = element.dyn_ref::<web_sys::HtmlElement>() {
            f(input);
        }
    }
}
