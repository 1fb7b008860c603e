//! Local constraint evaluation over the current form values.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use super::AuthForm;
use super::field::{Field, FieldValueRef};
use super::rules::{self, Constraint, ConstraintKind};

/// The first violated constraint for each invalid field.
pub type Violations = BTreeMap<Field, ConstraintKind>;

/// Validate every field of `form` against its static rules.
pub fn validate<F: AuthForm>(form: &F) -> Violations {
    F::FIELDS
        .iter()
        .filter_map(|&field| first_violation(form, field).map(|kind| (field, kind)))
        .collect()
}

/// First constraint `field` fails, in rule order.
///
/// Cross-field rules read the other field from `form` as it is now.
pub fn first_violation<F: AuthForm>(form: &F, field: Field) -> Option<ConstraintKind> {
    let value = form.value(field)?;
    rules::rules_for(field)
        .iter()
        .find(|constraint| !satisfies(form, value, **constraint))
        .map(|constraint| constraint.kind())
}

/// Display text for the local violation on `field`, if any.
pub fn local_message<F: AuthForm>(form: &F, field: Field) -> Option<&'static str> {
    first_violation(form, field).and_then(|kind| rules::message(field, kind))
}

fn satisfies<F: AuthForm>(form: &F, value: FieldValueRef<'_>, constraint: Constraint) -> bool {
    match constraint {
        Constraint::Required => !value.is_empty(),
        // Length rules only apply to non-empty text; emptiness is `Required`'s job.
        Constraint::MinLength(min) => value
            .text()
            .is_none_or(|text| text.is_empty() || input_length(text) >= min),
        Constraint::MaxLength(max) => value.text().is_none_or(|text| input_length(text) <= max),
        Constraint::EqualsField(other) => form.value(other).is_none_or(|other| other == value),
    }
}

/// Length as the browser reports it for an input value, in UTF-16 code units.
fn input_length(text: &str) -> usize {
    text.encode_utf16().count()
}
