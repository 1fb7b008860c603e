//! Static per-field constraints and the validation message catalog.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use super::field::Field;

/// A single constraint attached to a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Required,
    MinLength(usize),
    MaxLength(usize),
    /// Value must equal the current value of another field.
    EqualsField(Field),
}

/// The kind of constraint a field violated; keys the message catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Required,
    MinLength,
    MaxLength,
    /// Cross-field check (confirm password).
    Validate,
}

impl Constraint {
    pub const fn kind(self) -> ConstraintKind {
        match self {
            Constraint::Required => ConstraintKind::Required,
            Constraint::MinLength(_) => ConstraintKind::MinLength,
            Constraint::MaxLength(_) => ConstraintKind::MaxLength,
            Constraint::EqualsField(_) => ConstraintKind::Validate,
        }
    }
}

const EMAIL_RULES: &[Constraint] = &[Constraint::Required, Constraint::MinLength(3)];
const PASSWORD_RULES: &[Constraint] =
    &[Constraint::Required, Constraint::MinLength(8), Constraint::MaxLength(20)];
const CONFIRM_PASSWORD_RULES: &[Constraint] = &[
    Constraint::Required,
    Constraint::MinLength(8),
    Constraint::MaxLength(20),
    Constraint::EqualsField(Field::Password),
];
const NAME_RULES: &[Constraint] = &[Constraint::Required, Constraint::MinLength(3), Constraint::MaxLength(20)];
const DATE_OF_BIRTH_RULES: &[Constraint] = &[Constraint::Required];

/// Constraints for `field`, in evaluation order.
pub const fn rules_for(field: Field) -> &'static [Constraint] {
    match field {
        Field::Email => EMAIL_RULES,
        Field::Password => PASSWORD_RULES,
        Field::ConfirmPassword => CONFIRM_PASSWORD_RULES,
        Field::FirstName | Field::LastName => NAME_RULES,
        Field::DateOfBirth => DATE_OF_BIRTH_RULES,
    }
}

/// Display text for a violated constraint, or `None` if the field has no such rule.
pub const fn message(field: Field, kind: ConstraintKind) -> Option<&'static str> {
    use ConstraintKind as K;

    let text = match (field, kind) {
        (Field::Email, K::Required) => "Email is required",
        (Field::Email, K::MinLength) => "Email should have minimum 3 characters",
        (Field::Password | Field::ConfirmPassword, K::Required) => "Password is required",
        (Field::Password | Field::ConfirmPassword, K::MinLength) => "Password should have minimum 8 characters",
        (Field::Password | Field::ConfirmPassword, K::MaxLength) => "Password can have maximum 20 characters",
        (Field::ConfirmPassword, K::Validate) => "Password and Confirm Password should be same",
        (Field::FirstName, K::Required) => "First Name is required",
        (Field::FirstName, K::MinLength) => "First Name should have minimum 3 characters",
        (Field::FirstName, K::MaxLength) => "First Name can have maximum 20 characters",
        (Field::LastName, K::Required) => "Last Name is required",
        (Field::LastName, K::MinLength) => "Last Name should have minimum 3 characters",
        (Field::LastName, K::MaxLength) => "Last Name can have maximum 20 characters",
        (Field::DateOfBirth, K::Required) => "Date of birth is required",
        _ => return None,
    };
    Some(text)
}
