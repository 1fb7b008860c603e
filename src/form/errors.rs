//! Server-sourced error text and the policy for showing it next to local errors.
//!
//! DESIGN
//! ======
//! Local violations are recomputed from values on every read; only server
//! messages are stored. Per-field server messages share the field name space
//! with local rules. Anything the server does not attribute to a known field
//! goes to a single dismissable banner slot.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use std::collections::BTreeMap;

use super::field::Field;

/// Banner text for failures that carry no structured validation errors.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Which message wins when a field has both a local and a server error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServerErrorPolicy {
    /// Local text shows while the field fails local rules; the server message
    /// shows otherwise and lasts until the next submit.
    #[default]
    LocalFirst,
    /// The server message shows until the user edits that field.
    ServerUntilEdited,
}

impl ServerErrorPolicy {
    pub fn display<'a>(self, local: Option<&'a str>, server: Option<&'a str>) -> Option<&'a str> {
        match self {
            ServerErrorPolicy::LocalFirst => local.or(server),
            ServerErrorPolicy::ServerUntilEdited => server.or(local),
        }
    }

    /// Whether editing a field drops its server message.
    pub fn clears_on_edit(self) -> bool {
        matches!(self, ServerErrorPolicy::ServerUntilEdited)
    }
}

/// Server-returned error messages for one form instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorSlots {
    fields: BTreeMap<Field, String>,
    banner: Option<String>,
}

impl ErrorSlots {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.banner.is_none()
    }

    /// Drop every field message and the banner.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.banner = None;
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn set_field(&mut self, field: Field, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    /// Returns `true` if a message was removed.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.fields.remove(&field).is_some()
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn set_banner(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }
}
