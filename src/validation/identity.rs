//! Email and DID-like identifier shape checks.
//!
//! Grantees can be referenced either by email address or by a DID-like
//! identifier. Both checks are shape checks only: the email rule is the usual
//! `local@domain.tld` regex, deliberately far short of full RFC 5322, and the
//! identifier rule accepts any `scheme:method:value` colon-delimited string.

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld` shape: no whitespace or extra `@`, dot in the domain.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// `scheme:method:value` shape with non-empty segments.
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+:[a-z0-9]+:[^\s]+$").expect("valid identifier pattern"));

/// Whether the input is shaped like an email address.
///
/// # Examples
///
/// ```
/// use spacepicker::validation::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("not-valid"));
/// assert!(!is_valid_email("user@localhost"));
/// ```
#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}

/// Whether the input is shaped like a DID-like identifier.
///
/// Requires three colon-delimited segments (`scheme:method:value`); the value
/// segment may itself contain further colons.
///
/// # Examples
///
/// ```
/// use spacepicker::validation::is_valid_identifier;
///
/// assert!(is_valid_identifier("did:key:z6MkhaXgBZD"));
/// assert!(is_valid_identifier("did:web:example.com"));
/// assert!(!is_valid_identifier("did:key"));
/// assert!(!is_valid_identifier("not-valid"));
/// ```
#[must_use]
pub fn is_valid_identifier(input: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(input)
}

/// Whether the input passes either the email or the identifier check.
#[must_use]
pub fn is_valid_email_or_identifier(input: &str) -> bool {
    is_valid_email(input) || is_valid_identifier(input)
}
