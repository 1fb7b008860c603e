use super::*;
use time::Month;

// =============================================================
// Field names
// =============================================================

#[test]
fn wire_names_round_trip_through_from_wire() {
    for field in Field::ALL {
        assert_eq!(Field::from_wire(field.wire_name()), Some(field));
    }
}

#[test]
fn from_wire_uses_camel_case_keys() {
    assert_eq!(Field::from_wire("confirmPassword"), Some(Field::ConfirmPassword));
    assert_eq!(Field::from_wire("dateOfBirth"), Some(Field::DateOfBirth));
    assert_eq!(Field::from_wire("confirm_password"), None);
    assert_eq!(Field::from_wire(""), None);
}

#[test]
fn labels_match_rendered_inputs() {
    assert_eq!(Field::ConfirmPassword.label(), "Confirm Password");
    assert_eq!(Field::DateOfBirth.label(), "Date of birth");
}

// =============================================================
// FieldValue conversions
// =============================================================

#[test]
fn into_text_rejects_date_values() {
    let err = FieldValue::Date(None).into_text(Field::Email).unwrap_err();
    assert_eq!(err, FormError::ValueKind { field: Field::Email, expected: "text" });
    assert_eq!(err.to_string(), "field `email` expects a text value");
}

#[test]
fn into_date_parses_date_input_text() {
    let date = FieldValue::from("1990-04-09").into_date(Field::DateOfBirth).unwrap();
    assert_eq!(date, Some(Date::from_calendar_date(1990, Month::April, 9).unwrap()));
}

#[test]
fn into_date_treats_blank_text_as_absent() {
    assert_eq!(FieldValue::from("  ").into_date(Field::DateOfBirth), Ok(None));
}

#[test]
fn into_date_rejects_malformed_text() {
    assert_eq!(
        FieldValue::from("09/04/1990").into_date(Field::DateOfBirth),
        Err(FormError::ValueKind { field: Field::DateOfBirth, expected: "date" })
    );
}

#[test]
fn field_value_ref_emptiness() {
    assert!(FieldValueRef::Text("").is_empty());
    assert!(!FieldValueRef::Text("a").is_empty());
    assert!(FieldValueRef::Date(None).is_empty());
    assert_eq!(FieldValueRef::Date(None).text(), None);
}
