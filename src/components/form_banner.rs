//! Dismissable form-level error banner.

use leptos::prelude::*;

#[component]
pub fn FormBanner(message: Signal<Option<String>>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="form-banner" role="alert">
                <span class="form-banner__message">{move || message.get().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="form-banner__dismiss"
                    aria-label="Dismiss"
                    on:click=move |_| on_dismiss.run(())
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
