use chrono::Local;
use leptos::prelude::*;

use crate::github::TrendingRepo;

const FALLBACK_LANGUAGE_COLOR: &str = "#8b949e";

#[allow(clippy::cast_precision_loss)]
fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// GitHub linguist colors for the languages the filter offers;
/// anything else gets the neutral fallback.
fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#3178c6",
        "Python" => "#3572a5",
        "Java" => "#b07219",
        "C++" => "#f34b7d",
        "C" => "#555555",
        "C#" => "#178600",
        "PHP" => "#4f5d95",
        "Ruby" => "#701516",
        "Go" => "#00add8",
        "Rust" => "#dea584",
        "Swift" => "#f05138",
        "Kotlin" => "#a97bff",
        _ => FALLBACK_LANGUAGE_COLOR,
    }
}

/// One repository rendered as a summary tile.
#[component]
pub fn ProjectCard(repo: TrendingRepo) -> impl IntoView {
    let description = repo
        .description
        .unwrap_or_else(|| "No description available".to_string());
    let created = repo
        .created_at
        .with_timezone(&Local)
        .format("%b %-d, %Y")
        .to_string();
    let language = repo.language.map(|l| {
        let color = language_color(&l);
        (l, color)
    });

    view! {
        <article class="project-card">
            <div class="project-header">
                <img class="project-avatar" src=repo.owner.avatar_url alt=repo.owner.login.clone()/>
                <div class="project-title">
                    <h3>
                        <a href=repo.html_url target="_blank" rel="noopener">
                            {repo.name}
                        </a>
                    </h3>
                    <p class="project-owner">{repo.owner.login}</p>
                </div>
            </div>
            <p class="project-description">{description}</p>
            <div class="project-meta">
                <span class="project-metric project-metric--stars">
                    {format_number(repo.stargazers_count)} " stars"
                </span>
                <span class="project-metric project-metric--forks">
                    {format_number(repo.forks_count)} " forks"
                </span>
                {language
                    .map(|(label, color)| {
                        view! {
                            <span class="project-language">
                                <span class="language-dot" style:background-color=color></span>
                                {label}
                            </span>
                        }
                    })}
            </div>
            <p class="project-created">"Created " {created}</p>
        </article>
    }
}
