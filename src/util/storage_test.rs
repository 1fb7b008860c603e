#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_json_is_none_outside_browser() {
    save_json("auth_forms_test", &"value");
    assert_eq!(load_json::<String>("auth_forms_test"), None);
}
