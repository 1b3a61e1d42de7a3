//! Grantee/permission form validation.
//!
//! Sharing a space grants a set of capabilities to a grantee (an email address
//! or DID-like identifier), optionally bounded by an expiration date. The form
//! is validated as a whole: each failing field gets its own entry in the
//! returned map, so the UI can annotate every problem at once.

use super::identity::is_valid_email_or_identifier;
use super::ValidationErrors;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Maximum grantee length, in characters.
const MAX_GRANTEE_LENGTH: usize = 256;

/// Capabilities that may be granted, besides the wildcard `*`.
pub const CAPABILITY_WHITELIST: [&str; 7] = [
    "space/info",
    "store/add",
    "store/list",
    "store/remove",
    "upload/add",
    "upload/list",
    "upload/remove",
];

/// A request to grant capabilities on a space.
///
/// Produced by the share form and validated with [`validate_grant`] before
/// the embedding runtime hands it to the storage client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRequest {
    /// Email address or DID-like identifier of the recipient.
    pub grantee: String,

    /// Capabilities to grant; each must be whitelisted or the wildcard `*`.
    pub capabilities: Vec<String>,

    /// Optional expiration; when set, must be in the future and within a year.
    pub expiration: Option<DateTime<Utc>>,
}

/// Validates a grant request against the fixed rule set.
///
/// `now` is a parameter so the check stays pure and deterministic under test.
/// Rules:
/// - `grantee`: required, at most 256 characters, and shaped like an email
///   address or DID-like identifier.
/// - `capabilities`: non-empty; every entry must be the wildcard `*` or a
///   member of [`CAPABILITY_WHITELIST`].
/// - `expiration`: when present, strictly after `now` and no more than one
///   year out.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use spacepicker::validation::{validate_grant, GrantRequest};
///
/// let now = Utc::now();
/// let request = GrantRequest {
///     grantee: "user@example.com".to_string(),
///     capabilities: vec!["store/add".to_string()],
///     expiration: Some(now + Duration::days(30)),
/// };
/// assert!(validate_grant(&request, now).is_empty());
/// ```
#[must_use]
pub fn validate_grant(request: &GrantRequest, now: DateTime<Utc>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let grantee = request.grantee.trim();
    if grantee.is_empty() {
        errors.add("grantee", "Grantee is required");
    } else if grantee.chars().count() > MAX_GRANTEE_LENGTH {
        errors.add(
            "grantee",
            format!("Grantee must be at most {MAX_GRANTEE_LENGTH} characters"),
        );
    } else if !is_valid_email_or_identifier(grantee) {
        errors.add(
            "grantee",
            "Grantee must be an email address or a DID-like identifier",
        );
    }

    if request.capabilities.is_empty() {
        errors.add("capabilities", "At least one capability is required");
    } else {
        let unknown: Vec<&str> = request
            .capabilities
            .iter()
            .map(String::as_str)
            .filter(|capability| *capability != "*" && !CAPABILITY_WHITELIST.contains(capability))
            .collect();

        if !unknown.is_empty() {
            errors.add(
                "capabilities",
                format!("Unknown capabilities: {}", unknown.join(", ")),
            );
        }
    }

    if let Some(expiration) = request.expiration {
        if expiration <= now {
            errors.add("expiration", "Expiration must be in the future");
        } else if expiration > now + Duration::days(365) {
            errors.add("expiration", "Expiration must be within one year");
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> GrantRequest {
        GrantRequest {
            grantee: "user@example.com".to_string(),
            capabilities: vec!["store/add".to_string(), "upload/add".to_string()],
            expiration: None,
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn accepts_well_formed_requests() {
        assert!(validate_grant(&base_request(), now()).is_empty());

        let request = GrantRequest {
            grantee: "did:key:z6MkhaXgBZD".to_string(),
            capabilities: vec!["*".to_string()],
            expiration: Some(now() + Duration::days(364)),
        };
        assert!(validate_grant(&request, now()).is_empty());
    }

    #[test]
    fn grantee_is_required() {
        let request = GrantRequest {
            grantee: "  ".to_string(),
            ..base_request()
        };
        let errors = validate_grant(&request, now());
        assert_eq!(errors.get("grantee"), Some("Grantee is required"));
    }

    #[test]
    fn grantee_is_length_bounded() {
        let request = GrantRequest {
            grantee: format!("{}@example.com", "a".repeat(300)),
            ..base_request()
        };
        let errors = validate_grant(&request, now());
        assert!(errors.get("grantee").unwrap().contains("at most 256"));
    }

    #[test]
    fn grantee_must_be_email_or_identifier() {
        let request = GrantRequest {
            grantee: "not-valid".to_string(),
            ..base_request()
        };
        let errors = validate_grant(&request, now());
        assert!(errors.get("grantee").unwrap().contains("email address"));
    }

    #[test]
    fn capabilities_must_be_non_empty() {
        let request = GrantRequest {
            capabilities: vec![],
            ..base_request()
        };
        let errors = validate_grant(&request, now());
        assert_eq!(
            errors.get("capabilities"),
            Some("At least one capability is required")
        );
    }

    #[test]
    fn unknown_capabilities_are_named() {
        let request = GrantRequest {
            capabilities: vec![
                "store/add".to_string(),
                "store/explode".to_string(),
                "debug/all".to_string(),
            ],
            ..base_request()
        };
        let errors = validate_grant(&request, now());
        let message = errors.get("capabilities").unwrap();
        assert!(message.contains("store/explode"));
        assert!(message.contains("debug/all"));
        assert!(!message.contains("store/add,"));
    }

    #[test]
    fn expiration_must_be_in_the_future() {
        let request = GrantRequest {
            expiration: Some(now()),
            ..base_request()
        };
        let errors = validate_grant(&request, now());
        assert_eq!(
            errors.get("expiration"),
            Some("Expiration must be in the future")
        );

        let request = GrantRequest {
            expiration: Some(now() - Duration::days(1)),
            ..base_request()
        };
        assert!(!validate_grant(&request, now()).is_empty());
    }

    #[test]
    fn expiration_is_capped_at_one_year() {
        let request = GrantRequest {
            expiration: Some(now() + Duration::days(366)),
            ..base_request()
        };
        let errors = validate_grant(&request, now());
        assert_eq!(
            errors.get("expiration"),
            Some("Expiration must be within one year")
        );
    }

    #[test]
    fn multiple_failures_are_reported_together() {
        let request = GrantRequest {
            grantee: String::new(),
            capabilities: vec![],
            expiration: Some(now() - Duration::hours(1)),
        };
        let errors = validate_grant(&request, now());
        assert_eq!(errors.len(), 3);
    }
}
