//! Networking modules for the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login/register calls and `types` defines the wire schema
//! shared with the form core.

pub mod api;
pub mod types;
