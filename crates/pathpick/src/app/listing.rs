//! Directory listing component: scans, sorts, and renders one directory into
//! the listing buffer.

use std::io;
use std::path::{MAIN_SEPARATOR, Path};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::app::text_buffer::TextBuffer;
use crate::domain::entry::{DirectoryEntry, sort_entries};
use crate::domain::error::PickerError;
use crate::domain::options::{DisplayOptions, DisplayOptionsProvider};
use crate::domain::path::split_listing_path;
use crate::infra::expand::expand_path;
use crate::infra::fs::{FileSystem, working_dir_or_root};

/// Synthetic entries shown above every successful listing.
pub const NAVIGATION_ENTRIES: [&str; 2] = ["./", "../"];

/// First line of the two-line block shown when a scan fails.
pub const DIRECTORY_ERROR_MESSAGE: &str = "Error opening directory.";

/// Bookkeeping that keeps repeated change notifications from rescanning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingState {
    /// Raw input text of the last completed refresh.
    pub shown_path: Option<String>,
    /// Normalized directory of the last completed refresh.
    pub shown_directory: Option<String>,
    /// Name prefix restricting the next scan; cleared after one use.
    pub active_filter: Option<String>,
}

/// Converts input path text into rendered listing lines.
pub struct DirectoryLister {
    buffer: TextBuffer,
    contents: Vec<String>,
    file_system: Rc<dyn FileSystem>,
    find_fragment: Option<String>,
    has_entries: bool,
    options: Box<dyn DisplayOptionsProvider>,
    state: ListingState,
}

impl DirectoryLister {
    /// Creates a lister with an empty listing buffer.
    pub fn new(file_system: Rc<dyn FileSystem>, options: Box<dyn DisplayOptionsProvider>) -> Self {
        Self {
            buffer: TextBuffer::new(),
            contents: Vec::new(),
            file_system,
            find_fragment: None,
            has_entries: false,
            options,
            state: ListingState::default(),
        }
    }

    /// Returns the rendered listing buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Returns the rendered listing buffer for cursor movement.
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Returns the sorted raw entry names of the last successful scan.
    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    /// Returns the file-name fragment typed after the listed directory.
    pub fn find_fragment(&self) -> Option<&str> {
        self.find_fragment.as_deref()
    }

    /// Returns the refresh bookkeeping.
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Returns the buffer row of the first entry starting with the typed
    /// fragment.
    pub fn matching_row(&self) -> Option<usize> {
        let fragment = self.find_fragment.as_deref()?;

        self.contents
            .iter()
            .position(|name| name.starts_with(fragment))
            .map(|index| index + NAVIGATION_ENTRIES.len())
    }

    /// Returns the entry name rendered on buffer `row`, including the
    /// navigation entries. Rows of an error block have no entry.
    pub fn entry_at_row(&self, row: usize) -> Option<&str> {
        if !self.has_entries {
            return None;
        }

        match row.checked_sub(NAVIGATION_ENTRIES.len()) {
            None => NAVIGATION_ENTRIES.get(row).copied(),
            Some(index) => self.contents.get(index).map(String::as_str),
        }
    }

    /// Restricts the next scan to names starting with `prefix` and forces
    /// that scan even when the input text is unchanged.
    pub fn set_filter(&mut self, prefix: &str) {
        self.state.active_filter = Some(prefix.to_string());
        self.state.shown_path = None;
    }

    /// Forces a rescan on the next change notification.
    pub fn on_option_changed(&mut self) {
        self.state.shown_path = None;
    }

    /// Refreshes the listing for `input`.
    ///
    /// Returns `false` without touching the buffer when `input` equals the
    /// last processed input. Filesystem failures are rendered into the
    /// buffer and never returned.
    pub fn on_input_changed(&mut self, input: &str) -> bool {
        if self.state.shown_path.as_deref() == Some(input) {
            debug!(input, "Listing already shows input, skipping refresh");

            return false;
        }

        let cwd = working_dir_or_root(self.file_system.as_ref());
        let expanded = expand_path(input);
        let (mut directory, fragment) = split_listing_path(&expanded, &cwd);
        if directory.is_empty() {
            directory = cwd.to_string_lossy().into_owned();
        }
        self.find_fragment = (!fragment.is_empty()).then_some(fragment);

        let options = self.options.display_options();
        let filter = self.state.active_filter.take();
        let scanned = self.scan(Path::new(&directory), &options, filter.as_deref());
        self.has_entries = scanned.is_ok();
        let lines = match scanned {
            Ok(entries) => {
                debug!(
                    directory = %directory,
                    entry_count = entries.len(),
                    "Scanned directory"
                );
                self.render_entries(&entries)
            }
            Err(error) => {
                self.contents.clear();
                error_lines(error)
            }
        };

        self.buffer.select_all();
        self.buffer.replace_all(lines);
        self.buffer.reset_position();
        self.state.shown_path = Some(input.to_string());
        self.state.shown_directory = Some(directory);

        true
    }

    /// Reads, filters, and sorts the children of `directory`.
    fn scan(
        &self,
        directory: &Path,
        options: &DisplayOptions,
        filter: Option<&str>,
    ) -> Result<Vec<DirectoryEntry>, PickerError> {
        if !self.file_system.is_dir(directory) {
            return Err(PickerError::PathNotFound {
                path: directory.to_path_buf(),
            });
        }

        let access_error = |source: io::Error| PickerError::DirectoryAccess {
            path: directory.to_path_buf(),
            source,
        };

        let names = self
            .file_system
            .read_dir_names(directory)
            .map_err(access_error)?;
        let mut entries = Vec::with_capacity(names.len());
        for raw_name in names {
            let name = raw_name.to_string_lossy();
            if !options.show_dot_files && name.starts_with('.') {
                continue;
            }
            if filter.is_some_and(|filter| !name.starts_with(filter)) {
                continue;
            }

            let mut entry = DirectoryEntry::new(name.into_owned());
            let entry_path = directory.join(&raw_name);
            if self.file_system.is_dir(&entry_path) {
                entry.name.push(MAIN_SEPARATOR);
            }
            if options.show_sizes && self.file_system.is_file(&entry_path) {
                entry.size_bytes = Some(
                    self.file_system
                        .file_size(&entry_path)
                        .map_err(access_error)?,
                );
            }
            if options.show_modified {
                entry.modified = Some(
                    self.file_system
                        .modified_time(&entry_path)
                        .map_err(access_error)?,
                );
            }

            entries.push(entry);
        }

        sort_entries(&mut entries, options.sort_policy());

        Ok(entries)
    }

    fn render_entries(&mut self, entries: &[DirectoryEntry]) -> Vec<String> {
        self.contents = entries.iter().map(|entry| entry.name.clone()).collect();

        NAVIGATION_ENTRIES
            .iter()
            .map(ToString::to_string)
            .chain(entries.iter().map(DirectoryEntry::format_line))
            .collect()
    }
}

/// Converts a scan failure into the lines that replace the listing.
fn error_lines(error: PickerError) -> Vec<String> {
    match error {
        PickerError::DirectoryAccess { path, source } => {
            warn!(path = %path.display(), %source, "Failed to scan directory");

            let mut description = source.to_string();
            if description.is_empty() {
                description = source.kind().to_string();
            }

            vec![DIRECTORY_ERROR_MESSAGE.to_string(), description]
        }
        not_found => vec![not_found.to_string()],
    }
}
