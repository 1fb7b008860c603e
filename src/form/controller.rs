//! Per-instance form controller: values, touched state, error text, submit gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages keep one controller in an `RwSignal` and call these transitions from
//! input, blur, and submit handlers; the signal update is the re-render
//! notification. The request itself is sent by the caller with whatever
//! `SubmitOutcome::Dispatch` returns, and its result comes back through
//! `FormController::resolve` (see `result`).

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::BTreeSet;

use log::{debug, info};

use super::AuthForm;
use super::errors::{ErrorSlots, ServerErrorPolicy};
use super::field::{Field, FieldValue, FormError};
use super::submission::SubmissionResult;
use super::validation::{self, Violations};
use crate::net::types::SubmitRequest;

/// What a call to [`FormController::submit`] decided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; send this request and resolve its result.
    Dispatch(SubmitRequest),
    /// Local validation failed; nothing was sent.
    Blocked(Violations),
    /// A request is already pending; nothing was sent.
    InFlight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormController<F: AuthForm> {
    values: F,
    touched: BTreeSet<Field>,
    submit_attempted: bool,
    pub(super) slots: ErrorSlots,
    pub(super) status: SubmissionResult,
    policy: ServerErrorPolicy,
}

impl<F: AuthForm> Default for FormController<F> {
    fn default() -> Self {
        Self::new(ServerErrorPolicy::default())
    }
}

impl<F: AuthForm> FormController<F> {
    pub fn new(policy: ServerErrorPolicy) -> Self {
        Self {
            values: F::default(),
            touched: BTreeSet::new(),
            submit_attempted: false,
            slots: ErrorSlots::default(),
            status: SubmissionResult::Idle,
            policy,
        }
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    pub fn status(&self) -> &SubmissionResult {
        &self.status
    }

    pub fn policy(&self) -> ServerErrorPolicy {
        self.policy
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Update one field and mark it touched.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if the field is not on this form; the form
    /// is left unchanged. Returns [`FormError::ValueKind`] if the field cannot hold
    /// the value; the field is then emptied and marked touched so it never submits
    /// a stale value.
    pub fn set_field(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<(), FormError> {
        match self.values.set_value(field, value.into()) {
            Ok(()) => {
                self.mark_edited(field);
                Ok(())
            }
            Err(err @ FormError::ValueKind { .. }) => {
                self.values.set_value(field, FieldValue::Text(String::new()))?;
                self.mark_edited(field);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    fn mark_edited(&mut self, field: Field) {
        self.touched.insert(field);
        if self.policy.clears_on_edit() {
            self.slots.clear_field(field);
        }
    }

    /// Mark a field touched when it loses focus.
    pub fn blur(&mut self, field: Field) {
        if F::has_field(field) {
            self.touched.insert(field);
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Evaluate every local rule against the current values.
    pub fn validate(&self) -> Violations {
        validation::validate(&self.values)
    }

    /// Gate and start a submit attempt.
    ///
    /// Blocked attempts still reveal local errors on every field. A dispatched
    /// attempt clears server messages from the previous attempt and moves the
    /// form to `Pending`.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status.is_pending() {
            debug!("{} submit ignored: request already pending", F::NAME);
            return SubmitOutcome::InFlight;
        }

        self.submit_attempted = true;
        let violations = self.validate();
        if !violations.is_empty() {
            debug!("{} submit blocked: {} invalid field(s)", F::NAME, violations.len());
            return SubmitOutcome::Blocked(violations);
        }

        self.slots.clear();
        self.status = SubmissionResult::Pending;
        info!("{} submit dispatched", F::NAME);
        SubmitOutcome::Dispatch(self.values.to_request())
    }

    /// Local rule text for `field`, shown once it is touched or a submit was attempted.
    pub fn local_error_text(&self, field: Field) -> Option<&'static str> {
        if !self.submit_attempted && !self.touched.contains(&field) {
            return None;
        }
        validation::local_message(&self.values, field)
    }

    /// Text displayed under `field`, merging local and server sources by policy.
    pub fn error_text(&self, field: Field) -> Option<&str> {
        self.policy
            .display(self.local_error_text(field), self.slots.field(field))
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.error_text(field).is_some()
    }

    /// Form-level error not tied to an input.
    pub fn banner(&self) -> Option<&str> {
        self.slots.banner()
    }

    pub fn dismiss_banner(&mut self) {
        self.slots.dismiss_banner();
    }

    /// Restore default values and drop all error state. The submission status is kept.
    pub fn reset(&mut self) {
        self.values = F::default();
        self.touched.clear();
        self.submit_attempted = false;
        self.slots.clear();
    }
}
