use super::*;
use crate::state::auth::MemoryTokenStore;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn signed_out_user_stays_on_login() {
    assert_eq!(auth_route(None, LOGIN_ROUTE), LOGIN_ROUTE);
}

#[test]
fn signed_out_user_elsewhere_goes_to_register() {
    assert_eq!(auth_route(None, "/"), REGISTER_ROUTE);
    assert_eq!(auth_route(None, HOME_ROUTE), REGISTER_ROUTE);
    assert_eq!(auth_route(Some(""), HOME_ROUTE), REGISTER_ROUTE);
}

#[test]
fn signed_in_user_goes_home() {
    assert_eq!(auth_route(Some("abc123"), LOGIN_ROUTE), HOME_ROUTE);
    assert_eq!(auth_route(Some("abc123"), REGISTER_ROUTE), HOME_ROUTE);
}

#[test]
fn redirect_fires_on_token_change_only_when_route_differs() {
    let store = MemoryTokenStore::new();
    let path = Rc::new(RefCell::new(LOGIN_ROUTE.to_owned()));
    let visits = Rc::new(RefCell::new(Vec::<String>::new()));

    let current = Rc::clone(&path);
    let sink = Rc::clone(&visits);
    let location = Rc::clone(&path);
    install_auth_redirect(
        &store,
        move || current.borrow().clone(),
        move |target, _| {
            sink.borrow_mut().push(target.to_owned());
            *location.borrow_mut() = target.to_owned();
        },
    );
    assert!(visits.borrow().is_empty());

    store.set_token("abc123");
    assert_eq!(*visits.borrow(), vec![HOME_ROUTE.to_owned()]);

    store.set_token("rotated");
    assert_eq!(visits.borrow().len(), 1);
}
