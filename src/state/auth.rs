//! Session token state and the token-store contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms hand the issued token to a `TokenStore` on success. The app provides an
//! `RwSignal<AuthState>` as the process-wide store (it lives as long as the tab
//! and is persisted to `localStorage`); route guards subscribe to it to decide
//! navigation. `MemoryTokenStore` is the same contract without Leptos.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::util::storage;

const TOKEN_STORAGE_KEY: &str = "auth_forms_token";

/// Callback run with the current token whenever it changes.
pub type TokenListener = Box<dyn Fn(Option<&str>)>;

/// Holder of the session credential.
pub trait TokenStore {
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: &str);

    /// Register `listener`; it runs once with the current token and after every change.
    fn subscribe(&self, listener: TokenListener);
}

/// Authentication state shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    /// Load the persisted token, if any.
    pub fn restore() -> Self {
        Self { token: storage::load_json::<String>(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty()) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

impl TokenStore for RwSignal<AuthState> {
    fn token(&self) -> Option<String> {
        self.with_untracked(|state| state.token.clone())
    }

    fn set_token(&self, token: &str) {
        storage::save_json(TOKEN_STORAGE_KEY, &token);
        self.update(|state| state.token = Some(token.to_owned()));
    }

    fn subscribe(&self, listener: TokenListener) {
        let signal = *self;
        Effect::new(move || signal.with(|state| listener(state.token.as_deref())));
    }
}

/// Single-threaded in-memory store.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Default)]
struct MemoryInner {
    token: Option<String>,
    listeners: Vec<Rc<dyn Fn(Option<&str>)>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn notify(&self) {
        // Listeners may read the store, so release the borrow before calling them.
        let (token, listeners) = {
            let inner = self.inner.borrow();
            (inner.token.clone(), inner.listeners.clone())
        };
        for listener in listeners {
            listener(token.as_deref());
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    fn set_token(&self, token: &str) {
        self.inner.borrow_mut().token = Some(token.to_owned());
        self.notify();
    }

    fn subscribe(&self, listener: TokenListener) {
        let listener: Rc<dyn Fn(Option<&str>)> = Rc::from(listener);
        let current = self.token();
        self.inner.borrow_mut().listeners.push(Rc::clone(&listener));
        listener(current.as_deref());
    }
}
