//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each form page owns one `FormController` signal and wires it to inputs with
//! the helpers below; the submit handler sends the gated request and feeds the
//! result back into the controller.

pub mod home;
pub mod login;
pub mod register;

use leptos::prelude::*;

use crate::components::text_field::TextField;
use crate::form::{AuthForm, Field, FormController, SubmitOutcome};
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::state::auth::AuthState;

/// Input bound to one controller field.
pub(crate) fn form_field<F, V>(
    form: RwSignal<FormController<F>>,
    field: Field,
    input_type: &'static str,
    value: V,
) -> impl IntoView
where
    F: AuthForm + Send + Sync + 'static,
    V: Fn(&F) -> String + Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(|f| value(f.values())));
    let error = Signal::derive(move || form.with(|f| f.error_text(field).map(str::to_owned)));
    let on_input = Callback::new(move |raw: String| {
        form.update(|f| {
            if let Err(err) = f.set_field(field, raw) {
                log::warn!("{} input rejected: {err}", F::NAME);
            }
        });
    });
    let on_blur = Callback::new(move |()| form.update(|f| f.blur(field)));

    view! {
        <TextField
            label=field.label()
            input_type=input_type
            value=value
            error=error
            on_input=on_input
            on_blur=on_blur
        />
    }
}

pub(crate) fn banner_message<F>(form: RwSignal<FormController<F>>) -> Signal<Option<String>>
where
    F: AuthForm + Send + Sync + 'static,
{
    Signal::derive(move || form.with(|f| f.banner().map(str::to_owned)))
}

pub(crate) fn dismiss_banner<F>(form: RwSignal<FormController<F>>) -> Callback<()>
where
    F: AuthForm + Send + Sync + 'static,
{
    Callback::new(move |()| form.update(FormController::dismiss_banner))
}

/// Submit handler: gate locally, then send and resolve without blocking the UI.
pub(crate) fn submit_handler<F>(
    form: RwSignal<FormController<F>>,
    api: HttpAuthApi,
    auth: RwSignal<AuthState>,
) -> impl Fn(leptos::ev::SubmitEvent) + 'static
where
    F: AuthForm + Send + Sync + 'static,
{
    move |ev| {
        ev.prevent_default();
        let Some(SubmitOutcome::Dispatch(request)) = form.try_update(FormController::submit) else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.send(&request).await;
            form.update(|f| {
                f.resolve(result, &auth);
            });
        });
    }
}
