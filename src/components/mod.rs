//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components only render what they are given; form pages own the controller
//! and pass derived signals and callbacks down.

pub mod form_banner;
pub mod text_field;
