use super::*;
use time::Month;

fn filled() -> RegisterForm {
    RegisterForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        date_of_birth: Some(Date::from_calendar_date(1815, Month::December, 10).unwrap()),
        email: "ada@example.com".to_owned(),
        password: "analytical".to_owned(),
        confirm_password: "analytical".to_owned(),
    }
}

#[test]
fn request_formats_date_of_birth_as_calendar_date() {
    let SubmitRequest::Register(request) = filled().to_request() else {
        panic!("expected register request");
    };
    assert_eq!(request.date_of_birth, "1815-12-10");
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.confirm_password, "analytical");
}

#[test]
fn request_sends_absent_date_of_birth_as_empty_string() {
    let form = RegisterForm { date_of_birth: None, ..filled() };
    let SubmitRequest::Register(request) = form.to_request() else {
        panic!("expected register request");
    };
    assert_eq!(request.date_of_birth, "");
}

#[test]
fn set_value_accepts_date_input_text() {
    let mut form = RegisterForm::default();
    form.set_value(Field::DateOfBirth, FieldValue::from("2000-01-31")).unwrap();
    assert_eq!(form.date_of_birth, Some(Date::from_calendar_date(2000, Month::January, 31).unwrap()));

    form.set_value(Field::DateOfBirth, FieldValue::from("")).unwrap();
    assert_eq!(form.date_of_birth, None);
}

#[test]
fn set_value_rejects_date_for_text_field() {
    let mut form = RegisterForm::default();
    let err = form.set_value(Field::FirstName, FieldValue::Date(None)).unwrap_err();
    assert_eq!(err, FormError::ValueKind { field: Field::FirstName, expected: "text" });
}

#[test]
fn every_field_is_addressable() {
    let form = filled();
    for field in Field::ALL {
        assert!(form.value(field).is_some(), "{field:?} missing");
        assert!(RegisterForm::has_field(field));
    }
}
