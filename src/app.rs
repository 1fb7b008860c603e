//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::config::ClientConfig;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;
use crate::util::auth::install_auth_redirect;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the client config and the process-wide token store, then routes
/// between the login, register, and home screens.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|err| {
        log::warn!("invalid build config, using defaults: {err}");
        ClientConfig::default()
    });
    provide_context(config);
    provide_context(RwSignal::new(AuthState::restore()));

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-forms.css"/>
        <Title text="Auth"/>

        <Router>
            <AuthRedirect/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("homepage") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Sends the user to the route matching their auth state; renders nothing.
#[component]
fn AuthRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    install_auth_redirect(&auth, move || location.pathname.get(), use_navigate());
}
