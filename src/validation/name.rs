//! Space display-name rules.

use super::ValidationErrors;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of a space name, in characters.
const MAX_NAME_LENGTH: usize = 100;

/// Names that collide with infrastructure conventions and are never allowed.
const RESERVED_NAMES: [&str; 7] = ["admin", "root", "system", "api", "www", "mail", "ftp"];

/// Allowed name characters: letters, digits, whitespace, `-`, `_`, `.`.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s\-_.]+$").expect("valid name pattern"));

/// Validates a space display name.
///
/// Rules, checked in order with the first failure reported under `"name"`:
/// required (not empty or whitespace-only), at most 100 characters, only
/// letters/digits/whitespace/`-`/`_`/`.`, and not case-insensitively equal to
/// a reserved word.
///
/// # Examples
///
/// ```
/// use spacepicker::validation::validate_name;
///
/// assert!(validate_name("My Space").is_empty());
/// assert!(validate_name("").get("name").is_some());
/// assert!(validate_name("bad$name").get("name").is_some());
/// assert!(validate_name("Admin").get("name").is_some());
/// ```
#[must_use]
pub fn validate_name(name: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let trimmed = name.trim();

    if trimmed.is_empty() {
        errors.add("name", "Name is required");
        return errors;
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        errors.add(
            "name",
            format!("Name must be at most {MAX_NAME_LENGTH} characters"),
        );
        return errors;
    }

    if !NAME_PATTERN.is_match(name) {
        errors.add(
            "name",
            "Name may only contain letters, numbers, spaces, hyphens, underscores, and periods",
        );
        return errors;
    }

    if RESERVED_NAMES
        .iter()
        .any(|reserved| trimmed.eq_ignore_ascii_case(reserved))
    {
        errors.add("name", format!("\"{trimmed}\" is a reserved name"));
    }

    errors
}
