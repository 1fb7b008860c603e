//! Auth-driven navigation shared by the route tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms only write the token store. Where the user lands afterwards is decided
//! here, by subscribing to the store and asking the router to navigate.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use crate::state::auth::TokenStore;

pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const HOME_ROUTE: &str = "/homepage";

/// Route the user belongs on for the given token and current path.
///
/// Signed-out users stay on the login page if they are there and are sent to
/// registration otherwise; signed-in users go to the home page.
pub fn auth_route(token: Option<&str>, current_path: &str) -> &'static str {
    match token {
        Some(token) if !token.is_empty() => HOME_ROUTE,
        _ if current_path == LOGIN_ROUTE => LOGIN_ROUTE,
        _ => REGISTER_ROUTE,
    }
}

/// Navigate whenever the token (or, when tracked by `current_path`, the location)
/// puts the user on the wrong route.
pub fn install_auth_redirect<S, P, F>(store: &S, current_path: P, navigate: F)
where
    S: TokenStore + ?Sized,
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    store.subscribe(Box::new(move |token| {
        let path = current_path();
        let target = auth_route(token, &path);
        if path != target {
            log::debug!("auth redirect {path} -> {target}");
            navigate(target, NavigateOptions::default());
        }
    }));
}
