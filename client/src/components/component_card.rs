//! Card for one package in a result listing.

use leptos::prelude::*;
use registry::ComponentSummary;

/// A directory entry: name linking to the component page, description and
/// license with their display fallbacks, stars, and the GitHub link.
#[component]
pub fn ComponentCard(component: ComponentSummary) -> impl IntoView {
    let page_path = component.page_path();
    let github_url = component.github_url();
    let description = component.description_text().to_owned();
    let license = component.license_text().to_owned();
    let stars = component.stars;
    let repo = component.repo.clone();

    view! {
        <div class="component">
            <h2 class="component__name">
                <a href=page_path>{repo}</a>
            </h2>
            <p class="component__description">{description}</p>
            <ul class="component__meta">
                <li class="component__stars">{stars} " stars"</li>
                <li class="component__license">"License: " {license}</li>
                <li class="component__github">
                    <a href=github_url target="_blank" rel="noopener">
                        "GitHub"
                    </a>
                </li>
            </ul>
        </div>
    }
}
