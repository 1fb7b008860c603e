//! Login page: email + password.

use leptos::prelude::*;
use leptos_router::components::A;

use super::{banner_message, dismiss_banner, form_field, submit_handler};
use crate::components::form_banner::FormBanner;
use crate::config::ClientConfig;
use crate::form::{Field, FormController, LoginForm};
use crate::net::api::HttpAuthApi;
use crate::state::auth::AuthState;
use crate::util::auth::REGISTER_ROUTE;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(FormController::<LoginForm>::new(config.server_error_policy));
    let on_submit = submit_handler(form, HttpAuthApi::from_config(&config), auth);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {form_field(form, Field::Email, "email", |v: &LoginForm| v.email.clone())}
                    {form_field(form, Field::Password, "password", |v: &LoginForm| v.password.clone())}
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || form.with(FormController::is_pending)
                    >
                        "Login"
                    </button>
                </form>
                <FormBanner message=banner_message(form) on_dismiss=dismiss_banner(form)/>
                <A href=REGISTER_ROUTE>"Don't have an account? Register Now."</A>
            </div>
        </div>
    }
}
