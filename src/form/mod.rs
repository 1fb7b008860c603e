//! Renderer-independent form core for the login and register screens.
//!
//! ARCHITECTURE
//! ============
//! `controller` owns field values, touched state, server error slots, and the
//! submission lifecycle. `validation` is a pure function of the values and the
//! static `rules`. `result` applies API outcomes. Pages hold a controller in a
//! signal and call these transitions from event handlers, so everything here
//! is testable without a browser.

pub mod controller;
pub mod date;
pub mod errors;
pub mod field;
pub mod login;
pub mod register;
pub mod result;
pub mod rules;
pub mod submission;
pub mod validation;

pub use controller::{FormController, SubmitOutcome};
pub use errors::{ErrorSlots, ServerErrorPolicy};
pub use field::{Field, FieldValue, FieldValueRef, FormError};
pub use login::LoginForm;
pub use register::RegisterForm;
pub use result::submit_with;
pub use submission::SubmissionResult;

use crate::net::types::SubmitRequest;

/// Field values for one form, plus the mapping to its request payload.
pub trait AuthForm: Clone + Default + PartialEq + std::fmt::Debug {
    /// Short form name used in log lines.
    const NAME: &'static str;
    /// Fields this form renders, in display order.
    const FIELDS: &'static [Field];

    /// Current value of `field`, or `None` if the form has no such field.
    fn value(&self, field: Field) -> Option<FieldValueRef<'_>>;

    /// Overwrite the value of `field`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if the field is not on this form or the value kind is wrong.
    fn set_value(&mut self, field: Field, value: FieldValue) -> Result<(), FormError>;

    /// Build the request body sent on submit.
    fn to_request(&self) -> SubmitRequest;

    fn has_field(field: Field) -> bool {
        Self::FIELDS.contains(&field)
    }
}
