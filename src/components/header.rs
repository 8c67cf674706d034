use leptos::prelude::*;

/// Static branding bar; no data dependency.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header__brand">
                <h1 class="header__title">"GitHub Trending"</h1>
                <p class="header__tagline">"Discover today's most popular repositories"</p>
            </div>
            <div class="header__meta">
                <p>"Updated every 5 minutes"</p>
                <p class="header__source">"Data from GitHub API"</p>
            </div>
        </header>
    }
}
