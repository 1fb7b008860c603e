//! Register page: names, date of birth, email, and a confirmed password.

use leptos::prelude::*;
use leptos_router::components::A;

use super::{banner_message, dismiss_banner, form_field, submit_handler};
use crate::components::form_banner::FormBanner;
use crate::config::ClientConfig;
use crate::form::date::format_optional_date;
use crate::form::{Field, FormController, RegisterForm};
use crate::net::api::HttpAuthApi;
use crate::state::auth::AuthState;
use crate::util::auth::LOGIN_ROUTE;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(FormController::<RegisterForm>::new(config.server_error_policy));
    let on_submit = submit_handler(form, HttpAuthApi::from_config(&config), auth);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {form_field(form, Field::FirstName, "text", |v: &RegisterForm| v.first_name.clone())}
                    {form_field(form, Field::LastName, "text", |v: &RegisterForm| v.last_name.clone())}
                    {form_field(form, Field::DateOfBirth, "date", |v: &RegisterForm| {
                        format_optional_date(v.date_of_birth)
                    })}
                    {form_field(form, Field::Email, "email", |v: &RegisterForm| v.email.clone())}
                    {form_field(form, Field::Password, "password", |v: &RegisterForm| v.password.clone())}
                    {form_field(form, Field::ConfirmPassword, "password", |v: &RegisterForm| {
                        v.confirm_password.clone()
                    })}
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || form.with(FormController::is_pending)
                    >
                        "Register"
                    </button>
                </form>
                <FormBanner message=banner_message(form) on_dismiss=dismiss_banner(form)/>
                <A href=LOGIN_ROUTE>"Already have an account? Click to Login."</A>
            </div>
        </div>
    }
}
