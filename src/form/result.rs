//! Submission result handling: apply API outcomes to a pending form.
//!
//! ERROR HANDLING
//! ==============
//! Structured validation payloads are routed onto field slots or the banner.
//! Every other failure clears stale server text and shows a generic banner, so
//! a transport error never leaves the form silently unchanged. Nothing here is
//! fatal; the user edits and resubmits.

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

use std::collections::BTreeMap;

use log::{info, warn};

use super::AuthForm;
use super::controller::{FormController, SubmitOutcome};
use super::errors::GENERIC_FAILURE_MESSAGE;
use super::field::Field;
use super::submission::SubmissionResult;
use crate::net::api::AuthApi;
use crate::net::types::{ApiError, TokenResponse, ValidationErrorPayload};
use crate::state::auth::TokenStore;

/// Server errors split into per-field messages and a form-level message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutedErrors {
    pub fields: BTreeMap<Field, String>,
    pub banner: Option<String>,
}

/// Route payload entries by their `field` discriminator.
///
/// Entries naming a field outside `fields`, or naming none, go to the banner.
/// When several entries land in one slot the last one wins.
pub fn route_server_errors(fields: &[Field], payload: &ValidationErrorPayload) -> RoutedErrors {
    let mut routed = RoutedErrors::default();
    for entry in &payload.errors {
        let target = entry
            .field
            .as_deref()
            .and_then(Field::from_wire)
            .filter(|field| fields.contains(field));
        match target {
            Some(field) => {
                routed.fields.insert(field, entry.message.clone());
            }
            None => routed.banner = Some(entry.message.clone()),
        }
    }
    routed
}

impl<F: AuthForm> FormController<F> {
    /// Apply the outcome of the pending request.
    ///
    /// On success the form resets, the status becomes `Succeeded`, and the token
    /// is handed to `store`. On failure server messages from the payload replace
    /// any previous ones. Returns `false` and changes nothing if no request was
    /// pending.
    pub fn resolve<S>(&mut self, result: Result<TokenResponse, ApiError>, store: &S) -> bool
    where
        S: TokenStore + ?Sized,
    {
        if !self.status.is_pending() {
            warn!("{} result ignored: form is {}, not pending", F::NAME, self.status.label());
            return false;
        }

        match result {
            Ok(TokenResponse { token }) if !token.is_empty() => {
                self.reset();
                self.status = SubmissionResult::Succeeded(token.clone());
                info!("{} submission succeeded", F::NAME);
                store.set_token(&token);
            }
            Ok(_) => self.fail(ApiError::Decode("response carried no token".to_owned())),
            Err(err) => self.fail(err),
        }
        true
    }

    fn fail(&mut self, error: ApiError) {
        self.slots.clear();
        match &error {
            ApiError::Validation(payload) if !payload.errors.is_empty() => {
                let routed = route_server_errors(F::FIELDS, payload);
                info!(
                    "{} submission rejected: {} field error(s), banner={}",
                    F::NAME,
                    routed.fields.len(),
                    routed.banner.is_some()
                );
                for (field, message) in routed.fields {
                    self.slots.set_field(field, message);
                }
                if let Some(banner) = routed.banner {
                    self.slots.set_banner(banner);
                }
            }
            other => {
                warn!("{} submission failed: {other}", F::NAME);
                self.slots.set_banner(GENERIC_FAILURE_MESSAGE);
            }
        }
        self.status = SubmissionResult::Failed(error);
    }
}

/// Run one submit cycle: gate, send through `api`, and resolve into `controller`.
pub async fn submit_with<F, A, S>(controller: &mut FormController<F>, api: &A, store: &S) -> SubmitOutcome
where
    F: AuthForm,
    A: AuthApi,
    S: TokenStore + ?Sized,
{
    let outcome = controller.submit();
    if let SubmitOutcome::Dispatch(request) = &outcome {
        let result = api.send(request).await;
        controller.resolve(result, store);
    }
    outcome
}
