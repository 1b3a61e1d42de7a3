//! Path traversal and reserved-name rejection.
//!
//! Paths supplied by the user (upload destinations, folder names) are checked
//! before they reach the storage client: traversal segments, reserved
//! device-style names, and over-long paths are rejected outright.

use super::ValidationErrors;

/// Maximum path length, in characters.
const MAX_PATH_LENGTH: usize = 260;

/// Segments that escape or alias the current directory.
const TRAVERSAL_SEGMENTS: [&str; 3] = [".", "..", "~"];

/// Device-style names that are reserved regardless of extension.
const RESERVED_DEVICE_NAMES: [&str; 22] = [
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Validates a user-supplied path.
///
/// Rules, each reported under `"path"` with the first failure winning:
/// - must not be empty
/// - at most 260 characters
/// - no `.`/`..`/`~` segments
/// - no segment whose name (with or without extension) is a reserved
///   device-style name, compared case-insensitively
///
/// Both `/` and `\` are treated as segment separators.
///
/// # Examples
///
/// ```
/// use spacepicker::validation::validate_path;
///
/// assert!(validate_path("docs/reports/2024.txt").is_empty());
/// assert!(validate_path("docs/../secrets").get("path").is_some());
/// assert!(validate_path("backups/NUL.txt").get("path").is_some());
/// ```
#[must_use]
pub fn validate_path(path: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if path.trim().is_empty() {
        errors.add("path", "Path is required");
        return errors;
    }

    if path.chars().count() > MAX_PATH_LENGTH {
        errors.add(
            "path",
            format!("Path must be at most {MAX_PATH_LENGTH} characters"),
        );
        return errors;
    }

    for segment in path.split(['/', '\\']).filter(|s| !s.is_empty()) {
        if TRAVERSAL_SEGMENTS.contains(&segment) {
            errors.add(
                "path",
                format!("Path must not contain the traversal segment \"{segment}\""),
            );
            return errors;
        }

        let stem = segment.split('.').next().unwrap_or(segment);
        if RESERVED_DEVICE_NAMES
            .iter()
            .any(|reserved| stem.eq_ignore_ascii_case(reserved))
        {
            errors.add(
                "path",
                format!("Path contains the reserved name \"{segment}\""),
            );
            return errors;
        }
    }

    errors
}
