//! Auth API client for login and registration.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere (SSR, native tests): `HttpAuthApi` returns `ApiError::Unavailable`
//! since these endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as an `ApiError` so the form can show it instead of
//! the page crashing mid-hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::types::{
    ApiError, LOGIN_PATH, LoginRequest, REGISTER_PATH, RegisterRequest, SubmitRequest, TokenResponse,
};
use crate::config::ClientConfig;

/// The remote operations the auth forms submit to.
///
/// Both calls are safe to retry by resubmitting.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError>;

    /// Dispatch a gated submit request to the matching operation.
    async fn send(&self, request: &SubmitRequest) -> Result<TokenResponse, ApiError> {
        match request {
            SubmitRequest::Login(body) => self.login(body).await,
            SubmitRequest::Register(body) => self.register(body).await,
        }
    }
}

/// JSON-over-HTTP implementation of [`AuthApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<TokenResponse, ApiError> {
        let url = self.endpoint(path);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                log::debug!("POST {url} rejected with {status}");
                return Err(ApiError::from_rejection(status, &text));
            }
            resp.json::<TokenResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            log::debug!("POST {url} skipped outside the browser");
            Err(ApiError::Unavailable)
        }
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.post_json(LOGIN_PATH, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        self.post_json(REGISTER_PATH, request).await
    }
}
