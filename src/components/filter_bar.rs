use leptos::prelude::*;

use crate::github::{Period, LANGUAGES};

/// The two filter controls. Holds no state of its own; selections are
/// reported upward through the callbacks.
#[component]
pub fn FilterBar(
    language: ReadSignal<String>,
    period: ReadSignal<Period>,
    #[prop(into)] on_language_change: Callback<String>,
    #[prop(into)] on_period_change: Callback<Period>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <div class="filter-group">
                <label class="filter-label" for="language-filter">"Language:"</label>
                <select
                    id="language-filter"
                    class="filter-select"
                    prop:value=move || language.get()
                    on:change=move |ev| on_language_change.run(event_target_value(&ev))
                >
                    {LANGUAGES
                        .iter()
                        .copied()
                        .map(|(code, label)| {
                            view! {
                                <option value=code selected=move || language.get() == code>
                                    {label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <div class="filter-group">
                <label class="filter-label" for="period-filter">"Period:"</label>
                <select
                    id="period-filter"
                    class="filter-select"
                    prop:value=move || period.get().code()
                    on:change=move |ev| {
                        on_period_change
                            .run(Period::from_code(&event_target_value(&ev)).unwrap_or_default());
                    }
                >
                    {Period::ALL
                        .into_iter()
                        .map(|p| {
                            view! {
                                <option value=p.code() selected=move || period.get() == p>
                                    {p.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
        </div>
    }
}
