//! Shared client-side state.
//!
//! Only the session token crosses form instances; each form keeps its own
//! values and submission state in a local signal.

pub mod auth;
