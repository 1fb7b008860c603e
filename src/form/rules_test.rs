use super::*;

#[test]
fn every_declared_rule_has_a_message() {
    for field in Field::ALL {
        for constraint in rules_for(field) {
            assert!(
                message(field, constraint.kind()).is_some(),
                "missing message for {field:?} {:?}",
                constraint.kind()
            );
        }
    }
}

#[test]
fn required_is_always_checked_first() {
    for field in Field::ALL {
        assert_eq!(rules_for(field).first(), Some(&Constraint::Required));
    }
}

#[test]
fn email_has_no_max_length() {
    assert_eq!(rules_for(Field::Email), &[Constraint::Required, Constraint::MinLength(3)]);
    assert_eq!(message(Field::Email, ConstraintKind::MaxLength), None);
}

#[test]
fn confirm_password_checks_equality_after_lengths() {
    assert_eq!(rules_for(Field::ConfirmPassword).last(), Some(&Constraint::EqualsField(Field::Password)));
    assert_eq!(Constraint::EqualsField(Field::Password).kind(), ConstraintKind::Validate);
}

#[test]
fn confirm_password_shares_password_length_messages() {
    for kind in [ConstraintKind::Required, ConstraintKind::MinLength, ConstraintKind::MaxLength] {
        assert_eq!(message(Field::ConfirmPassword, kind), message(Field::Password, kind));
    }
}

#[test]
fn catalog_strings_are_exact() {
    assert_eq!(message(Field::Email, ConstraintKind::Required), Some("Email is required"));
    assert_eq!(
        message(Field::ConfirmPassword, ConstraintKind::Validate),
        Some("Password and Confirm Password should be same")
    );
    assert_eq!(
        message(Field::FirstName, ConstraintKind::MaxLength),
        Some("First Name can have maximum 20 characters")
    );
    assert_eq!(
        message(Field::LastName, ConstraintKind::MinLength),
        Some("Last Name should have minimum 3 characters")
    );
    assert_eq!(message(Field::DateOfBirth, ConstraintKind::Required), Some("Date of birth is required"));
}

#[test]
fn validate_kind_only_applies_to_confirm_password() {
    assert_eq!(message(Field::Password, ConstraintKind::Validate), None);
    assert_eq!(message(Field::DateOfBirth, ConstraintKind::MinLength), None);
}
