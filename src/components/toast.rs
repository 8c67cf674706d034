use leptos::prelude::*;

/// Dismissible error notification. Rendered only while a message is
/// set; a later successful fetch clears it from above.
#[component]
pub fn ErrorToast(
    message: ReadSignal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="toast toast--error" role="alert">
                    <span class="toast__text">{text}</span>
                    <button
                        class="toast__dismiss"
                        aria-label="Dismiss"
                        on:click=move |_| on_dismiss.run(())
                    >
                        "\u{d7}"
                    </button>
                </div>
            }
        })
    }
}
