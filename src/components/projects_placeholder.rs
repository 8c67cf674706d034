use leptos::prelude::*;

/// Skeleton tiles shown while the first fetch for a selection is in
/// flight.
#[component]
pub fn ProjectsPlaceholder() -> impl IntoView {
    view! {
        <div class="project-grid" aria-busy="true">
            {(0..9)
                .map(|_| {
                    view! {
                        <div class="project-card project-card--skeleton">
                            <div class="skeleton skeleton--title"></div>
                            <div class="skeleton skeleton--line"></div>
                            <div class="skeleton skeleton--line skeleton--short"></div>
                            <div class="skeleton-meta">
                                <div class="skeleton skeleton--chip"></div>
                                <div class="skeleton skeleton--chip"></div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
