//! Client configuration resolved from build-time environment variables.
//!
//! The browser has no process environment, so values are baked in with
//! `option_env!` when the WASM bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::form::ServerErrorPolicy;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333/api";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("AUTH_API_BASE_URL must not be empty")]
    EmptyBaseUrl,
    #[error("unknown AUTH_SERVER_ERROR_POLICY: {0} (expected 'local_first' or 'server_until_edited')")]
    UnknownPolicy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Auth API root; endpoint paths are appended after a `/`.
    pub api_base_url: String,
    pub server_error_policy: ServerErrorPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), server_error_policy: ServerErrorPolicy::default() }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `AUTH_API_BASE_URL`: default `http://localhost:3333/api`
    /// - `AUTH_SERVER_ERROR_POLICY`: `local_first` (default) or `server_until_edited`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("AUTH_API_BASE_URL"), option_env!("AUTH_SERVER_ERROR_POLICY"))
    }

    fn from_values(base_url: Option<&str>, policy: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(base_url)?;
        let server_error_policy = parse_policy(policy)?;
        Ok(Self { api_base_url, server_error_policy })
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let trimmed = raw.unwrap_or(DEFAULT_API_BASE_URL).trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    Ok(trimmed.to_owned())
}

fn parse_policy(raw: Option<&str>) -> Result<ServerErrorPolicy, ConfigError> {
    match raw.map(str::trim).unwrap_or("local_first") {
        "local_first" => Ok(ServerErrorPolicy::LocalFirst),
        "server_until_edited" => Ok(ServerErrorPolicy::ServerUntilEdited),
        other => Err(ConfigError::UnknownPolicy(other.to_owned())),
    }
}
