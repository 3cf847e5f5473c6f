//! Component page for `/:user/:repo`: readme plus a TOC menu.

use leptos::prelude::*;

use crate::components::error_view::ErrorView;
use crate::components::spinner::Spinner;
use crate::components::toc_menu::TocMenu;
use crate::util::markdown::RenderedMarkdown;

#[component]
pub fn ComponentPage(user: String, repo: String) -> impl IntoView {
    let readme = RwSignal::new(None::<Result<RenderedMarkdown, String>>);
    let github_url = format!("https://github.com/{user}/{repo}");
    let heading = format!("{user}/{repo}");

    let requested = RwSignal::new(false);
    let fetch_user = user.clone();
    let fetch_repo = repo.clone();
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            let user = fetch_user.clone();
            let repo = fetch_repo.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_repo_file(&user, &repo, "readme")
                    .await
                    .map(|markdown| crate::util::markdown::render(&markdown));
                readme.set(Some(outcome));
                // The fragment was set before the headings existed; re-apply
                // it now that they carry ids.
                restore_hash();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&fetch_user, &fetch_repo);
        }
    });

    view! {
        <section class="component-page">
            <header class="component-page__header">
                <h1 class="component-page__name">{heading}</h1>
            </header>
            {move || match readme.get() {
                None => view! { <Spinner/> }.into_any(),
                Some(Err(_)) => {
                    view! {
                        <ErrorView
                            title="Readme unavailable"
                            message="This component's readme could not be loaded."
                        />
                    }
                        .into_any()
                }
                Some(Ok(rendered)) => {
                    let github_url = github_url.clone();
                    view! {
                        <div class="component-page__body">
                            <aside class="component-page__menu">
                                <TocMenu entries=rendered.toc github_url=github_url/>
                            </aside>
                            <article class="component-page__readme" inner_html=rendered.html></article>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// Re-assign `location.hash` so the browser scrolls to the (now existing)
/// anchor. No-op outside the browser.
#[cfg(feature = "hydrate")]
fn restore_hash() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    if let Ok(hash) = location.hash() {
        if !hash.is_empty() {
            let _ = location.set_hash(&hash);
        }
    }
}
