//! File-selection batch limits.
//!
//! Upload batches are validated before any transfer starts: the selection must
//! be non-empty, at most 100 files, with no file over 100 MiB and no more than
//! 1 GiB in total. Each violated limit produces its own message naming the
//! offending files and sizes, so the user can fix the batch in one pass.

use super::ValidationErrors;
use crate::domain::{format_bytes, FileItem};

/// Maximum number of files per batch.
pub const MAX_FILE_COUNT: usize = 100;

/// Maximum size of a single file, in bytes (100 MiB).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum combined size of a batch, in bytes (1 GiB).
pub const MAX_TOTAL_SIZE: u64 = 1024 * 1024 * 1024;

/// Validates an upload batch against the fixed limits.
///
/// Files without a known size count as zero bytes; the embedding runtime
/// normally fills sizes in before validation.
///
/// # Examples
///
/// ```
/// use spacepicker::domain::FileItem;
/// use spacepicker::validation::validate_upload;
///
/// let batch = vec![FileItem::file("notes.txt", "/notes.txt", 1024)];
/// assert!(validate_upload(&batch).is_empty());
///
/// let errors = validate_upload(&[]);
/// assert_eq!(errors.get("files"), Some("No files selected"));
/// ```
#[must_use]
pub fn validate_upload(files: &[FileItem]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if files.is_empty() {
        errors.add("files", "No files selected");
        return errors;
    }

    if files.len() > MAX_FILE_COUNT {
        errors.add(
            "count",
            format!(
                "Too many files selected: {} (maximum {MAX_FILE_COUNT})",
                files.len()
            ),
        );
    }

    let oversized: Vec<String> = files
        .iter()
        .filter(|file| file.size.unwrap_or(0) > MAX_FILE_SIZE)
        .map(|file| format!("{} ({})", file.name, file.display_size()))
        .collect();

    if !oversized.is_empty() {
        errors.add(
            "size",
            format!(
                "Files exceed the 100 MiB per-file limit: {}",
                oversized.join(", ")
            ),
        );
    }

    let total: u64 = files.iter().map(|file| file.size.unwrap_or(0)).sum();
    if total > MAX_TOTAL_SIZE {
        errors.add(
            "total",
            format!(
                "Combined size {} exceeds the 1 GiB batch limit",
                format_bytes(total)
            ),
        );
    }

    errors
}
