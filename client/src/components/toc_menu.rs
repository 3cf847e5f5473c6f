//! Table-of-contents menu for a component page.

use leptos::prelude::*;

use crate::util::markdown::{TocEntry, collapse_signature};

/// Sidebar menu: the GitHub repo link first, then one anchor per h2/h3
/// heading of the rendered readme. Function-signature headings show with
/// their parameter lists collapsed.
#[component]
pub fn TocMenu(entries: Vec<TocEntry>, github_url: String) -> impl IntoView {
    view! {
        <ul id="toc" class="menu">
            <li class="menu__repo">
                <a href=github_url>"GitHub Repo"</a>
            </li>
            {entries
                .into_iter()
                .map(|entry| {
                    let label = collapse_signature(&entry.text);
                    let href = format!("#{}", entry.slug);
                    view! {
                        <li class=entry.level.css_class()>
                            <a href=href>{label}</a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
