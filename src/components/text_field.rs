//! Labelled input with helper text that turns into the field's error message.

use leptos::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: Signal<String>,
    error: Signal<Option<String>>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="text-field" class:invalid=move || error.get().is_some()>
            <span class="text-field__label">{label}</span>
            <input
                class="text-field__input"
                type=input_type
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            <Show when=move || error.get().is_some()>
                <span class="text-field__helper">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
