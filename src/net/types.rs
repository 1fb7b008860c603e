//! Wire DTOs for the auth API.
//!
//! DESIGN
//! ======
//! Request bodies use the camelCase keys the server expects. Rejections carry
//! `{ errors: [{ field?, message }] }`; anything else is an unstructured failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `POST auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST auth/register` body. `date_of_birth` is `YYYY-MM-DD` or empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

pub const LOGIN_PATH: &str = "auth/login";
pub const REGISTER_PATH: &str = "auth/register";

/// A request produced by a successful submit gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl SubmitRequest {
    /// Endpoint path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            SubmitRequest::Login(_) => LOGIN_PATH,
            SubmitRequest::Register(_) => REGISTER_PATH,
        }
    }
}

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: String,
}

/// One server-side validation error. No `field` means form-level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorPayload {
    #[serde(default)]
    pub errors: Vec<FieldErrorEntry>,
}

impl ValidationErrorPayload {
    /// Parse a rejection body, keeping it only if it lists at least one error.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|payload| !payload.errors.is_empty())
    }
}

/// Auth API call failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Structured rejection with per-field or form-level messages.
    #[error("request rejected with {} validation error(s)", .0.errors.len())]
    Validation(ValidationErrorPayload),

    /// Non-success status without a structured payload.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("request could not be sent: {0}")]
    Network(String),

    /// A success response whose body could not be used.
    #[error("response could not be decoded: {0}")]
    Decode(String),

    /// HTTP is only wired up in the browser build.
    #[error("auth API is not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response by its body.
    pub fn from_rejection(status: u16, body: &str) -> Self {
        match ValidationErrorPayload::parse(body) {
            Some(payload) => ApiError::Validation(payload),
            None => ApiError::Status { status, body: body.to_owned() },
        }
    }
}
