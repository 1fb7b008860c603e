//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and routing concerns from the form core so
//! the core stays testable without a DOM.

pub mod auth;
pub mod storage;
