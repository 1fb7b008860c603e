use super::*;

// =============================================================
// ServerErrorPolicy
// =============================================================

#[test]
fn default_policy_is_local_first() {
    assert_eq!(ServerErrorPolicy::default(), ServerErrorPolicy::LocalFirst);
}

#[test]
fn local_first_prefers_local_text() {
    let policy = ServerErrorPolicy::LocalFirst;
    assert_eq!(policy.display(Some("local"), Some("server")), Some("local"));
    assert_eq!(policy.display(None, Some("server")), Some("server"));
    assert_eq!(policy.display(None, None), None);
    assert!(!policy.clears_on_edit());
}

#[test]
fn server_until_edited_prefers_server_text() {
    let policy = ServerErrorPolicy::ServerUntilEdited;
    assert_eq!(policy.display(Some("local"), Some("server")), Some("server"));
    assert_eq!(policy.display(Some("local"), None), Some("local"));
    assert!(policy.clears_on_edit());
}

// =============================================================
// ErrorSlots
// =============================================================

#[test]
fn slots_start_empty() {
    let slots = ErrorSlots::default();
    assert!(slots.is_empty());
    assert_eq!(slots.field(Field::Email), None);
    assert_eq!(slots.banner(), None);
}

#[test]
fn set_field_overwrites_previous_message() {
    let mut slots = ErrorSlots::default();
    slots.set_field(Field::Email, "first");
    slots.set_field(Field::Email, "second");
    assert_eq!(slots.field(Field::Email), Some("second"));
}

#[test]
fn clear_field_reports_removal() {
    let mut slots = ErrorSlots::default();
    slots.set_field(Field::Password, "bad");
    assert!(slots.clear_field(Field::Password));
    assert!(!slots.clear_field(Field::Password));
    assert!(slots.is_empty());
}

#[test]
fn clear_drops_fields_and_banner() {
    let mut slots = ErrorSlots::default();
    slots.set_field(Field::Email, "taken");
    slots.set_banner("down");
    assert!(!slots.is_empty());
    slots.clear();
    assert!(slots.is_empty());
}

#[test]
fn dismiss_banner_keeps_field_messages() {
    let mut slots = ErrorSlots::default();
    slots.set_field(Field::Email, "taken");
    slots.set_banner("down");
    slots.dismiss_banner();
    assert_eq!(slots.banner(), None);
    assert_eq!(slots.field(Field::Email), Some("taken"));
}
