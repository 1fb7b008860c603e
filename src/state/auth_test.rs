use super::*;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_has_no_token() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn empty_token_is_not_authenticated() {
    let state = AuthState { token: Some(String::new()) };
    assert!(!state.is_authenticated());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_is_empty_outside_browser() {
    assert_eq!(AuthState::restore(), AuthState::default());
}

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_round_trips_token() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.token(), None);
    store.set_token("abc123");
    assert_eq!(store.token().as_deref(), Some("abc123"));
}

#[test]
fn memory_store_clones_share_state() {
    let store = MemoryTokenStore::new();
    let other = store.clone();
    other.set_token("shared");
    assert_eq!(store.token().as_deref(), Some("shared"));
}

#[test]
fn subscribe_runs_immediately_and_on_every_change() {
    let store = MemoryTokenStore::new();
    let seen = Rc::new(RefCell::new(Vec::<Option<String>>::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(Box::new(move |token| sink.borrow_mut().push(token.map(str::to_owned))));

    store.set_token("one");
    store.set_token("two");

    assert_eq!(*seen.borrow(), vec![None, Some("one".to_owned()), Some("two".to_owned())]);
}

#[test]
fn listeners_can_read_the_store() {
    let store = MemoryTokenStore::new();
    let reader = store.clone();
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    store.subscribe(Box::new(move |_| *sink.borrow_mut() = reader.token()));

    store.set_token("abc");
    assert_eq!(seen.borrow().as_deref(), Some("abc"));
}
