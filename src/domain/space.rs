//! Space domain model.
//!
//! This module defines the core [`Space`] type representing a storage container
//! resource owned by the external storage client. Spaces are identified by an
//! opaque unique string and carry an optional display name and access mode.
//! The engine treats spaces as immutable: it reads and re-orders them, never
//! mutates them.

use serde::{Deserialize, Serialize};

/// Maximum identifier length shown before eliding the middle.
const SHORT_ID_MAX: usize = 12;

/// Characters kept on each side of an elided identifier.
const SHORT_ID_EDGE: usize = 4;

/// Access mode of a space.
///
/// Spaces are either publicly readable or restricted to authorized accounts.
/// The access mode is assigned by the storage client; the engine only filters
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// Anyone can read the space contents.
    Public,
    /// Only authorized accounts can read the space contents.
    Private,
}

/// A logical storage container resource.
///
/// Spaces are externally owned: the list of spaces is supplied by the embedding
/// runtime from its storage client, and the engine never fetches or mutates
/// them. The same logical space may arrive as different object instances across
/// refreshes, so identity is always the `id` string, never reference or deep
/// equality.
///
/// # Fields
///
/// - `id`: opaque unique identifier (often a DID-like string)
/// - `name`: optional display name; unnamed spaces are shown by identifier
/// - `access`: optional access mode; spaces without one match no specific
///   access filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    pub name: Option<String>,
    pub access: Option<AccessType>,
}

impl Space {
    /// Creates a space with only an identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacepicker::domain::Space;
    ///
    /// let space = Space::new("did:key:z6MkhaXgBZD");
    /// assert!(space.name.is_none());
    /// assert!(space.access.is_none());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            access: None,
        }
    }

    /// Sets the display name (builder style).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the access mode (builder style).
    #[must_use]
    pub fn with_access(mut self, access: AccessType) -> Self {
        self.access = Some(access);
        self
    }

    /// Returns the label under which this space is displayed and sorted.
    ///
    /// Named spaces use their name; unnamed spaces fall back to the shortened
    /// identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacepicker::domain::Space;
    ///
    /// let named = Space::new("did:key:abc").with_name("Photos");
    /// assert_eq!(named.display_name(), "Photos");
    ///
    /// let unnamed = Space::new("did:key:abc");
    /// assert_eq!(unnamed.display_name(), "abc");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.short_id())
    }

    /// Returns a shortened form of the identifier for display.
    ///
    /// The scheme and method segments of a DID-like identifier are stripped,
    /// leaving the value segment. Long values are elided in the middle,
    /// keeping the leading and trailing characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacepicker::domain::Space;
    ///
    /// let space = Space::new("did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK");
    /// assert_eq!(space.short_id(), "z6Mk...2doK");
    ///
    /// let short = Space::new("did:key:abc");
    /// assert_eq!(short.short_id(), "abc");
    /// ```
    #[must_use]
    pub fn short_id(&self) -> String {
        let value = self.id.rsplit(':').next().unwrap_or(&self.id);
        let chars: Vec<char> = value.chars().collect();

        if chars.len() <= SHORT_ID_MAX {
            value.to_string()
        } else {
            let head: String = chars[..SHORT_ID_EDGE].iter().collect();
            let tail: String = chars[chars.len() - SHORT_ID_EDGE..].iter().collect();
            format!("{head}...{tail}")
        }
    }

    /// Returns the lowercased key used for name sorting.
    ///
    /// Lowercasing stands in for locale-aware collation so that "apple" and
    /// "Apple" sort together regardless of case.
    #[must_use]
    pub fn sort_key(&self) -> String {
        self.display_name().to_lowercase()
    }
}
