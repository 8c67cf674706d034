use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::{
    ErrorToast, FilterBar, Header, ProjectGrid, ProjectGridEmpty, ProjectsPlaceholder,
};
use crate::github::{GitHubSearch, Period, TrendingRepo, ALL_LANGUAGES};

/// How often the dashboard refetches with the current selection.
const REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

const FETCH_FAILED_MESSAGE: &str = "Failed to fetch trending projects. Please try again later.";

/// Observable states of one fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Loaded(Vec<TrendingRepo>),
    Failed,
}

/// Decides what a resolved fetch does to the page. A response started
/// under a generation that is no longer current is discarded; otherwise
/// it yields the next fetch state and toast message, so exactly one
/// response lands per selection, the one belonging to the latest fetch.
fn settle_fetch<E>(
    current_generation: u64,
    resolved_generation: u64,
    result: Result<Vec<TrendingRepo>, E>,
) -> Option<(FetchState, Option<String>)> {
    if resolved_generation != current_generation {
        return None;
    }

    Some(match result {
        Ok(repos) => (FetchState::Loaded(repos), None),
        Err(_) => (FetchState::Failed, Some(FETCH_FAILED_MESSAGE.to_string())),
    })
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text="GitHub Trending"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Owns the page's only mutable state: the filter selection, the fetch
/// state, and the error toast. Everything below it just renders.
#[component]
fn HomePage() -> impl IntoView {
    let (language, set_language) = signal(ALL_LANGUAGES.to_string());
    let (period, set_period) = signal(Period::default());
    let (state, set_state) = signal(FetchState::Loading);
    let (toast, set_toast) = signal(None::<String>);

    let client = StoredValue::new_local(GitHubSearch::new());

    // Monotonic request generation. A response only lands if its
    // generation is still current, so a fetch superseded by a filter
    // change (or a later timer tick) is discarded instead of
    // overwriting state for a selection that is no longer current.
    let generation = StoredValue::new(0u64);

    let start_fetch = move |show_loading: bool| {
        generation.update_value(|g| *g += 1);
        let gen = generation.get_value();

        if show_loading {
            set_state.set(FetchState::Loading);
        }

        let search = client.get_value();
        let lang = language.get_untracked();
        let per = period.get_untracked();

        spawn_local(async move {
            let result = search.fetch_trending(&lang, per).await;

            if let Err(error) = &result {
                tracing::error!(%error, language = %lang, "trending fetch failed");
            }

            // The page may have been torn down while the request was in
            // flight; the try_* variants make that a no-op.
            let Some(current) = generation.try_get_value() else {
                return;
            };

            match settle_fetch(current, gen, result) {
                Some((state, toast)) => {
                    set_state.try_set(state);
                    set_toast.try_set(toast);
                }
                None => {
                    tracing::debug!(generation = gen, "discarding superseded response");
                }
            }
        });
    };

    // Initial fetch, and one fetch per filter change, each re-entering
    // Loading from the user's perspective.
    Effect::new(move |_| {
        language.track();
        period.track();
        start_fetch(true);
    });

    // Periodic refresh keeps already-rendered cards visible instead of
    // blanking back to the placeholder.
    match set_interval_with_handle(move || start_fetch(false), REFRESH_INTERVAL) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(error) => tracing::warn!(?error, "could not start refresh interval"),
    }

    view! {
        <Header/>

        <div class="container">
            <div class="page-intro">
                <h2>"Trending GitHub Projects"</h2>
                <p>"Discover the most popular projects on GitHub today"</p>
            </div>

            <FilterBar
                language=language
                period=period
                on_language_change=move |code| set_language.set(code)
                on_period_change=move |period| set_period.set(period)
            />

            <ErrorToast message=toast on_dismiss=move |()| set_toast.set(None)/>

            {move || match state.get() {
                FetchState::Loading => view! { <ProjectsPlaceholder/> }.into_any(),
                FetchState::Loaded(repos) if repos.is_empty() => {
                    view! { <ProjectGridEmpty/> }.into_any()
                }
                FetchState::Loaded(repos) => view! { <ProjectGrid repos=repos/> }.into_any(),
                // A failed fetch clears any previously rendered cards;
                // the toast above carries the message.
                FetchState::Failed => ().into_any(),
            }}
        </div>
    }
}
