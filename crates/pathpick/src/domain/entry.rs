//! Directory entries and the shared sorting and line-formatting helpers.

use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::domain::options::{SortDirection, SortPolicy};

/// Minimum width of the name column.
pub const NAME_COLUMN_WIDTH: usize = 40;
/// Minimum width of the size column.
pub const SIZE_COLUMN_WIDTH: usize = 16;
/// Minimum width of the modification-time column.
pub const MODIFIED_COLUMN_WIDTH: usize = 24;

/// One child of a scanned directory.
///
/// Recomputed on every scan and never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Entry name, with a trailing separator when the entry is a directory.
    pub name: String,
    /// Byte size, captured for files when sizes are displayed.
    pub size_bytes: Option<u64>,
    /// Modification time, captured when modification times are displayed.
    pub modified: Option<SystemTime>,
}

impl DirectoryEntry {
    /// Creates an entry without size or modification metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes: None,
            modified: None,
        }
    }

    /// Renders the entry as three fixed-width columns.
    pub fn format_line(&self) -> String {
        let size_text = self
            .size_bytes
            .map(|size_bytes| format!("{size_bytes} bytes"))
            .unwrap_or_default();
        let modified_text = self
            .modified
            .and_then(format_modified_time)
            .unwrap_or_default();

        format!(
            "{:<name_width$}  {:>size_width$}  {:>modified_width$}",
            self.name,
            size_text,
            modified_text,
            name_width = NAME_COLUMN_WIDTH,
            size_width = SIZE_COLUMN_WIDTH,
            modified_width = MODIFIED_COLUMN_WIDTH,
        )
    }
}

/// Sorts `entries` in place by `policy`.
///
/// The sort is stable, so entries comparing equal keep their enumeration
/// order in both directions.
pub fn sort_entries(entries: &mut [DirectoryEntry], policy: SortPolicy) {
    let compare: fn(&DirectoryEntry, &DirectoryEntry) -> Ordering = match policy {
        SortPolicy::Name(_) => compare_names,
        SortPolicy::Size(_) => compare_sizes,
        SortPolicy::Modified(_) => compare_modified,
    };

    match policy.direction() {
        SortDirection::Ascending => entries.sort_by(compare),
        SortDirection::Descending => entries.sort_by(|first, second| compare(second, first)),
    }
}

fn compare_names(first: &DirectoryEntry, second: &DirectoryEntry) -> Ordering {
    first.name.to_lowercase().cmp(&second.name.to_lowercase())
}

fn compare_sizes(first: &DirectoryEntry, second: &DirectoryEntry) -> Ordering {
    first.size_bytes.cmp(&second.size_bytes)
}

fn compare_modified(first: &DirectoryEntry, second: &DirectoryEntry) -> Ordering {
    first.modified.cmp(&second.modified)
}

/// Formats `modified` as a local date and time, e.g. `Mon Oct 19 14:03:07 2026`.
///
/// Returns `None` for exactly the Unix epoch, which is treated as unset.
pub fn format_modified_time(modified: SystemTime) -> Option<String> {
    if modified == UNIX_EPOCH {
        return None;
    }

    let utc_datetime = OffsetDateTime::from(modified);
    let local_offset = UtcOffset::local_offset_at(utc_datetime).unwrap_or(UtcOffset::UTC);
    let format = format_description!(
        "[weekday repr:short] [month repr:short] [day padding:space] [hour]:[minute]:[second] [year]"
    );

    utc_datetime.to_offset(local_offset).format(format).ok()
}
