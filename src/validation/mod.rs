//! Pure validation rule sets.
//!
//! Every validator in this module is a pure function: the same input always
//! yields the same error map, and nothing is thrown — failures are reported
//! through [`ValidationErrors`], a field→message map in which only failing
//! fields appear. Callers stop processing a submission when the map is
//! non-empty and surface the messages next to the offending fields.
//!
//! # Modules
//!
//! - [`name`]: space display-name rules (length, charset, reserved words)
//! - [`identity`]: email and DID-like identifier shape checks
//! - [`grant`]: grantee/capability/expiration form validation
//! - [`upload`]: file-selection batch limits
//! - [`path`]: path traversal and reserved-name rejection

pub mod grant;
pub mod identity;
pub mod name;
pub mod path;
pub mod upload;

pub use grant::{validate_grant, GrantRequest, CAPABILITY_WHITELIST};
pub use identity::{is_valid_email, is_valid_email_or_identifier, is_valid_identifier};
pub use name::validate_name;
pub use path::validate_path;
pub use upload::validate_upload;

use serde::Serialize;
use std::collections::BTreeMap;

/// Field→message error map returned by every validator.
///
/// Only failing fields are present; an empty map means the input passed. The
/// map is ordered so error listings render deterministically.
///
/// # Examples
///
/// ```
/// use spacepicker::validation::validate_name;
///
/// let errors = validate_name("My Space");
/// assert!(errors.is_empty());
///
/// let errors = validate_name("");
/// assert_eq!(errors.get("name"), Some("Name is required"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure message for a field, replacing any earlier message.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    /// Returns the failure message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Whether every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Folds another error map into this one.
    ///
    /// Used to combine per-field validators into one form-level result; later
    /// messages win on field collisions.
    pub fn merge(&mut self, other: Self) {
        self.fields.extend(other.fields);
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_means_valid() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn add_replaces_earlier_message() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("second"));
    }

    #[test]
    fn merge_folds_fields_together() {
        let mut left = ValidationErrors::new();
        left.add("name", "bad name");
        let mut right = ValidationErrors::new();
        right.add("grantee", "bad grantee");

        left.merge(right);
        assert_eq!(left.len(), 2);
        assert_eq!(left.get("grantee"), Some("bad grantee"));
    }

    #[test]
    fn serializes_as_flat_map() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "Name is required");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"name":"Name is required"}"#);
    }
}
