use leptos::prelude::*;

use super::ProjectCard;
use crate::github::TrendingRepo;

#[component]
pub fn ProjectGrid(repos: Vec<TrendingRepo>) -> impl IntoView {
    view! {
        <div class="project-grid">
            {repos
                .into_iter()
                .map(|repo| view! { <ProjectCard repo=repo/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn ProjectGridEmpty() -> impl IntoView {
    view! {
        <div class="project-empty">
            <p class="project-empty-text">"No trending projects found"</p>
        </div>
    }
}
