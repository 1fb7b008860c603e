//! Login form values.

use super::AuthForm;
use super::field::{Field, FieldValue, FieldValueRef, FormError};
use crate::net::types::{LoginRequest, SubmitRequest};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl AuthForm for LoginForm {
    const NAME: &'static str = "login";
    const FIELDS: &'static [Field] = &[Field::Email, Field::Password];

    fn value(&self, field: Field) -> Option<FieldValueRef<'_>> {
        match field {
            Field::Email => Some(FieldValueRef::Text(&self.email)),
            Field::Password => Some(FieldValueRef::Text(&self.password)),
            _ => None,
        }
    }

    fn set_value(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            _ => return Err(FormError::UnknownField { field, form: Self::NAME }),
        };
        *slot = value.into_text(field)?;
        Ok(())
    }

    fn to_request(&self) -> SubmitRequest {
        SubmitRequest::Login(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
