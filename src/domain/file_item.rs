//! File item model and path/sort display helpers.
//!
//! This module defines [`FileItem`], the ancillary record used by the upload
//! and path helpers: a named filesystem entry with an optional size and
//! modification timestamp. It also provides the directories-first name sort
//! used when presenting file lists.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Kind of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

/// A filesystem entry presented in a file list.
///
/// File items arrive from the embedding runtime (a file input or directory
/// listing); the engine only sorts and validates them. Size and modification
/// time are optional since directories and freshly-selected uploads may not
/// carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileItem {
    /// Entry name (final path segment).
    pub name: String,

    /// Full path of the entry.
    pub path: String,

    /// Whether the entry is a file or a directory.
    pub kind: FileKind,

    /// Size in bytes, `None` for directories or when unknown.
    pub size: Option<u64>,

    /// Last modification time as a Unix timestamp, `None` when unknown.
    pub modified: Option<i64>,
}

impl FileItem {
    /// Creates a file entry with the given name, path, and size.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacepicker::domain::{FileItem, FileKind};
    ///
    /// let item = FileItem::file("notes.txt", "/docs/notes.txt", 1024);
    /// assert_eq!(item.kind, FileKind::File);
    /// assert_eq!(item.size, Some(1024));
    /// ```
    #[must_use]
    pub fn file(name: impl Into<String>, path: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: FileKind::File,
            size: Some(size),
            modified: None,
        }
    }

    /// Creates a directory entry with the given name and path.
    #[must_use]
    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: FileKind::Directory,
            size: None,
            modified: None,
        }
    }

    /// Returns a human-readable string describing how long ago the entry changed.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    ///
    /// Entries without a modification time yield `None`. The current time is a
    /// parameter so display code stays deterministic under test.
    #[must_use]
    pub fn modified_ago(&self, now: i64) -> Option<String> {
        let modified = self.modified?;
        let diff = (now - modified).max(0);

        let label = if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        };

        Some(label)
    }

    /// Returns the size formatted with a binary unit suffix.
    ///
    /// Directories and unknown sizes render as "--".
    ///
    /// # Examples
    ///
    /// ```
    /// use spacepicker::domain::FileItem;
    ///
    /// assert_eq!(FileItem::file("a", "/a", 512).display_size(), "512 B");
    /// assert_eq!(FileItem::file("b", "/b", 2048).display_size(), "2.0 KiB");
    /// assert_eq!(FileItem::directory("d", "/d").display_size(), "--");
    /// ```
    #[must_use]
    pub fn display_size(&self) -> String {
        self.size.map_or_else(|| "--".to_string(), format_bytes)
    }
}

/// Formats a byte count with a binary unit suffix.
///
/// # Examples
///
/// ```
/// use spacepicker::domain::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(2048), "2.0 KiB");
/// assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MiB");
/// ```
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    const GIB: u64 = 1024 * 1024 * 1024;

    #[allow(clippy::cast_precision_loss)]
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.1} GiB", bytes as f64 / GIB as f64)
    }
}

/// Sorts file items in place: directories first, then case-insensitive name order.
///
/// The sort is stable, so entries with equal keys keep their relative order.
///
/// # Examples
///
/// ```
/// use spacepicker::domain::{sort_file_items, FileItem};
///
/// let mut items = vec![
///     FileItem::file("zeta.txt", "/zeta.txt", 1),
///     FileItem::directory("assets", "/assets"),
///     FileItem::file("Alpha.txt", "/Alpha.txt", 1),
/// ];
/// sort_file_items(&mut items);
///
/// let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
/// assert_eq!(names, ["assets", "Alpha.txt", "zeta.txt"]);
/// ```
pub fn sort_file_items(items: &mut [FileItem]) {
    items.sort_by(|a, b| {
        let kind_order = kind_rank(a.kind).cmp(&kind_rank(b.kind));
        kind_order.then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

/// Sort rank for entry kinds; directories sort before files.
const fn kind_rank(kind: FileKind) -> u8 {
    match kind {
        FileKind::Directory => 0,
        FileKind::File => 1,
    }
}
