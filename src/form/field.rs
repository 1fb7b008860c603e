//! Field identities and values shared by the login and register forms.
//!
//! DESIGN
//! ======
//! Field names are a closed enum so local rules, server error routing, and
//! rendering all key into one name space. Wire names are the camelCase keys
//! the auth API uses in request bodies and in `{ field, message }` entries.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use time::Date;

use super::date::parse_date;

/// An input field on one of the auth forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    DateOfBirth,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::FirstName,
        Field::LastName,
        Field::DateOfBirth,
    ];

    /// Key used for this field in request bodies and server error entries.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::DateOfBirth => "dateOfBirth",
        }
    }

    /// Resolve a server-provided field discriminator.
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.wire_name() == name)
    }

    /// Human-readable input label.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::DateOfBirth => "Date of birth",
        }
    }
}

/// An owned value written into a form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(Option<Date>),
}

impl FieldValue {
    /// Unwrap a text value for a string field.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ValueKind`] when handed a date.
    pub fn into_text(self, field: Field) -> Result<String, FormError> {
        match self {
            FieldValue::Text(text) => Ok(text),
            FieldValue::Date(_) => Err(FormError::ValueKind { field, expected: "text" }),
        }
    }

    /// Unwrap a date value, parsing `YYYY-MM-DD` text as a date input would send it.
    /// Empty text clears the date.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ValueKind`] when the text is not a calendar date.
    pub fn into_date(self, field: Field) -> Result<Option<Date>, FormError> {
        match self {
            FieldValue::Date(date) => Ok(date),
            FieldValue::Text(text) if text.trim().is_empty() => Ok(None),
            FieldValue::Text(text) => parse_date(text.trim())
                .map(Some)
                .map_err(|_| FormError::ValueKind { field, expected: "date" }),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<Date> for FieldValue {
    fn from(value: Date) -> Self {
        FieldValue::Date(Some(value))
    }
}

impl From<Option<Date>> for FieldValue {
    fn from(value: Option<Date>) -> Self {
        FieldValue::Date(value)
    }
}

/// A borrowed view of a field's current value, used by validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValueRef<'a> {
    Text(&'a str),
    Date(Option<Date>),
}

impl<'a> FieldValueRef<'a> {
    /// Empty string or absent date.
    pub fn is_empty(self) -> bool {
        match self {
            FieldValueRef::Text(text) => text.is_empty(),
            FieldValueRef::Date(date) => date.is_none(),
        }
    }

    pub fn text(self) -> Option<&'a str> {
        match self {
            FieldValueRef::Text(text) => Some(text),
            FieldValueRef::Date(_) => None,
        }
    }
}

/// Rejected field edits.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("field `{}` is not part of the {form} form", .field.wire_name())]
    UnknownField { field: Field, form: &'static str },
    #[error("field `{}` expects a {expected} value", .field.wire_name())]
    ValueKind { field: Field, expected: &'static str },
}
