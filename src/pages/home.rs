//! Landing page for signed-in users.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome"</h1>
                <p>"You are signed in."</p>
            </div>
        </div>
    }
}
