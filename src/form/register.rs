//! Register form values.
//!
//! A superset of the login fields plus names, date of birth, and a
//! confirm-password field that must match the password.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use time::Date;

use super::AuthForm;
use super::date::format_optional_date;
use super::field::{Field, FieldValue, FieldValueRef, FormError};
use crate::net::types::{RegisterRequest, SubmitRequest};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm for RegisterForm {
    const NAME: &'static str = "register";
    const FIELDS: &'static [Field] = &[
        Field::FirstName,
        Field::LastName,
        Field::DateOfBirth,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    fn value(&self, field: Field) -> Option<FieldValueRef<'_>> {
        let value = match field {
            Field::FirstName => FieldValueRef::Text(&self.first_name),
            Field::LastName => FieldValueRef::Text(&self.last_name),
            Field::DateOfBirth => FieldValueRef::Date(self.date_of_birth),
            Field::Email => FieldValueRef::Text(&self.email),
            Field::Password => FieldValueRef::Text(&self.password),
            Field::ConfirmPassword => FieldValueRef::Text(&self.confirm_password),
        };
        Some(value)
    }

    fn set_value(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        let slot = match field {
            Field::DateOfBirth => {
                self.date_of_birth = value.into_date(field)?;
                return Ok(());
            }
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into_text(field)?;
        Ok(())
    }

    fn to_request(&self) -> SubmitRequest {
        SubmitRequest::Register(RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: format_optional_date(self.date_of_birth),
        })
    }
}
