//! Picker composition root.
//!
//! [`FilePicker`] owns the path input buffer, the directory listing, and the
//! completion and open actions, and wires change notifications between them
//! for the runtime key handlers.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use crate::domain::options::{
    DisplayOptions, DisplayOptionsProvider, SharedDisplayOptions, SortDirection, SortPolicy,
};
use crate::domain::path::{absolute_path, ends_with_separator, join_path};
use crate::infra::fs::{FileSystem, working_dir_or_root};

pub mod completion;
pub mod listing;
pub mod open;
pub mod text_buffer;

use completion::{CompletionOutcome, PathCompleter};
use listing::{DirectoryLister, NAVIGATION_ENTRIES};
use open::{EditorSurface, FileOpener, OpenOutcome};
use text_buffer::TextBuffer;

/// Pane receiving key input.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Focus {
    #[default]
    PathInput,
    Listing,
}

/// Path input plus directory listing, driven by the runtime.
pub struct FilePicker {
    completer: PathCompleter,
    current_file: Option<PathBuf>,
    file_system: Rc<dyn FileSystem>,
    focus: Focus,
    input: TextBuffer,
    lister: DirectoryLister,
    opener: FileOpener,
    options: SharedDisplayOptions,
    status_message: Option<String>,
}

impl FilePicker {
    /// Creates a picker; call [`FilePicker::focus_path_input`] to pre-fill
    /// the input and draw the first listing.
    pub fn new(
        file_system: Rc<dyn FileSystem>,
        options: DisplayOptions,
        current_file: Option<PathBuf>,
    ) -> Self {
        let options = SharedDisplayOptions::new(options);

        Self {
            completer: PathCompleter::new(Rc::clone(&file_system)),
            current_file,
            focus: Focus::PathInput,
            input: TextBuffer::new(),
            lister: DirectoryLister::new(Rc::clone(&file_system), Box::new(options.clone())),
            opener: FileOpener::new(Rc::clone(&file_system)),
            file_system,
            options,
            status_message: None,
        }
    }

    pub fn input(&self) -> &TextBuffer {
        &self.input
    }

    pub fn lister(&self) -> &DirectoryLister {
        &self.lister
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn display_options(&self) -> DisplayOptions {
        self.options.display_options()
    }

    /// Focuses the path input, pre-filled with the directory of the current
    /// file (or the working directory) and fully selected so typing
    /// replaces it.
    pub fn focus_path_input(&mut self) {
        let directory = self
            .current_file
            .as_deref()
            .and_then(Path::parent)
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(
                || working_dir_or_root(self.file_system.as_ref()),
                Path::to_path_buf,
            );

        let mut text = directory.to_string_lossy().into_owned();
        if !ends_with_separator(&text) {
            text.push(MAIN_SEPARATOR);
        }

        self.input.replace_all(vec![text]);
        self.input.select_all();
        self.focus = Focus::PathInput;
        self.refresh_listing();
    }

    /// Moves key input back to the path input without changing its text.
    pub fn return_to_path_input(&mut self) {
        self.focus = Focus::PathInput;
    }

    /// Moves key input to the listing pane.
    pub fn focus_listing(&mut self) {
        self.input.deselect();
        self.focus = Focus::Listing;
    }

    /// Inserts typed text into the path input.
    pub fn type_text(&mut self, text: &str) {
        self.input.insert(text);
        self.status_message = None;
        self.refresh_listing();
    }

    /// Deletes the character before the input cursor.
    pub fn backspace(&mut self) {
        self.input.backspace();
        self.status_message = None;
        self.refresh_listing();
    }

    /// Runs tab completion and reports the outcome in the status line.
    pub fn complete(&mut self) -> CompletionOutcome {
        let outcome = self.completer.extend(&mut self.input, &mut self.lister);
        self.status_message = match &outcome {
            CompletionOutcome::Unavailable => Some("No such directory".to_string()),
            CompletionOutcome::NoMatches => Some("No matches".to_string()),
            CompletionOutcome::Filtered { fragment } if fragment.is_empty() => {
                Some("Several entries match".to_string())
            }
            CompletionOutcome::Filtered { fragment } => {
                Some(format!("Several entries start with \"{fragment}\""))
            }
            CompletionOutcome::Extended { .. } | CompletionOutcome::AlreadyComplete => None,
        };

        outcome
    }

    /// Opens or creates the file named by the input, or navigates into it
    /// when it is a directory. Failures are shown in the status line.
    pub fn create_or_open(&mut self, editor: &mut dyn EditorSurface) {
        match self.opener.create_or_open(self.input.first_line(), editor) {
            Ok(OpenOutcome::Directory(path)) => {
                let mut text = path.to_string_lossy().into_owned();
                if !ends_with_separator(&text) {
                    text.push(MAIN_SEPARATOR);
                }
                self.set_input_text(text);
            }
            Ok(OpenOutcome::Opened(path)) => {
                self.status_message = Some(format!("Opened {}", path.display()));
                self.current_file = Some(path);
                self.focus_path_input();
            }
            Ok(OpenOutcome::Created(path)) => {
                self.status_message = Some(format!("Created {}", path.display()));
                self.current_file = Some(path);
                self.focus_path_input();
            }
            Err(error) => {
                self.status_message = Some(error.to_string());
            }
        }
    }

    /// Returns the listing row under the listing cursor.
    pub fn selected_row(&self) -> usize {
        self.lister.buffer().pen().0
    }

    /// Moves the listing cursor by `offset` rows.
    pub fn move_selection(&mut self, offset: isize, visible_rows: usize) {
        self.lister.buffer_mut().move_pen_row(offset, visible_rows);
    }

    /// Chooses the listing entry on `row`.
    ///
    /// Directories (including the navigation entries) become the new input
    /// and are listed; a file puts its full path into the input and moves
    /// focus there so it can be opened.
    pub fn choose_row(&mut self, row: usize) {
        let Some(entry) = self.lister.entry_at_row(row) else {
            return;
        };
        let Some(directory) = self.lister.state().shown_directory.as_deref() else {
            return;
        };

        let is_navigation = NAVIGATION_ENTRIES.contains(&entry);
        let mut target = if entry == NAVIGATION_ENTRIES[1] {
            absolute_path(&join_path(directory, ".."), Path::new(directory))
        } else if is_navigation {
            directory.to_string()
        } else {
            join_path(directory, entry)
        };
        if is_navigation && !ends_with_separator(&target) {
            target.push(MAIN_SEPARATOR);
        }

        debug!(row, target = %target, "Chose listing row");
        if !ends_with_separator(&target) {
            self.focus = Focus::PathInput;
        }
        self.set_input_text(target);
    }

    /// Replaces the display options and rescans the listing.
    pub fn set_display_options(&mut self, options: DisplayOptions) {
        self.options.set(options);
        self.lister.on_option_changed();
        self.refresh_listing();
    }

    pub fn toggle_dot_files(&mut self) {
        self.update_options(|options| options.show_dot_files = !options.show_dot_files);
    }

    pub fn toggle_sizes(&mut self) {
        self.update_options(|options| options.show_sizes = !options.show_sizes);
    }

    pub fn toggle_modified(&mut self) {
        self.update_options(|options| options.show_modified = !options.show_modified);
    }

    /// Sorts by the key built by `policy`, flipping the direction when that
    /// key is already active.
    pub fn select_sort(&mut self, policy: fn(SortDirection) -> SortPolicy) {
        let current = self.display_options().sort_policy();
        let next = if policy(current.direction()) == current {
            policy(current.direction().flipped())
        } else {
            policy(SortDirection::Ascending)
        };

        self.update_options(|options| *options = options.with_sort(next));
    }

    fn update_options(&mut self, change: impl FnOnce(&mut DisplayOptions)) {
        let mut options = self.display_options();
        change(&mut options);
        self.set_display_options(options);
    }

    fn set_input_text(&mut self, text: String) {
        self.input.replace_all(vec![text]);
        self.status_message = None;
        self.refresh_listing();
    }

    fn refresh_listing(&mut self) {
        self.lister.on_input_changed(self.input.first_line());
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::app::open::MockEditorSurface;
    use crate::domain::error::PickerError;
    use crate::infra::fs::{MockFileSystem, RealFileSystem};

    fn picker_in(temp_dir: &TempDir) -> FilePicker {
        fs::write(temp_dir.path().join("notes.md"), "# notes").expect("failed to write test file");
        fs::create_dir(temp_dir.path().join("src")).expect("failed to create test directory");
        fs::write(temp_dir.path().join("src").join("main.rs"), "fn main() {}")
            .expect("failed to write test file");

        let mut picker = FilePicker::new(
            Rc::new(RealFileSystem),
            DisplayOptions::default(),
            Some(temp_dir.path().join("notes.md")),
        );
        picker.focus_path_input();

        picker
    }

    fn dir_text(path: &Path) -> String {
        format!("{}{MAIN_SEPARATOR}", path.display())
    }

    #[test]
    fn test_focus_path_input_prefills_current_file_directory() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");

        // Act
        let picker = picker_in(&temp_dir);

        // Assert
        assert_eq!(picker.input().first_line(), dir_text(temp_dir.path()));
        assert!(picker.input().is_all_selected());
        assert_eq!(picker.focus(), Focus::PathInput);
        assert_eq!(picker.lister().contents(), ["notes.md", "src/"]);
    }

    #[test]
    fn test_focus_path_input_uses_working_directory_without_current_file() {
        // Arrange
        let mut file_system = MockFileSystem::new();
        file_system
            .expect_current_dir()
            .returning(|| Ok(PathBuf::from("/work")));
        file_system.expect_is_dir().returning(|_| false);
        let mut picker = FilePicker::new(Rc::new(file_system), DisplayOptions::default(), None);

        // Act
        picker.focus_path_input();

        // Assert
        assert_eq!(picker.input().first_line(), "/work/");
        assert_eq!(picker.lister().buffer().lines(), ["/work: not found"]);
    }

    #[test]
    fn test_return_to_path_input_keeps_navigated_text() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);
        picker.focus_listing();
        picker.choose_row(3);

        // Act
        picker.return_to_path_input();

        // Assert
        assert_eq!(picker.focus(), Focus::PathInput);
        assert_eq!(
            picker.input().first_line(),
            dir_text(&temp_dir.path().join("src"))
        );
    }

    #[test]
    fn test_type_text_replaces_selection_and_refreshes_listing() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);
        let typed = dir_text(&temp_dir.path().join("src"));

        // Act
        picker.type_text(&typed);

        // Assert
        assert_eq!(picker.input().first_line(), typed);
        assert_eq!(picker.lister().contents(), ["main.rs"]);
    }

    #[test]
    fn test_complete_reports_missing_matches_in_status() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);

        // Act
        picker.type_text(&temp_dir.path().join("zzz").to_string_lossy());
        let outcome = picker.complete();

        // Assert
        assert_eq!(outcome, CompletionOutcome::NoMatches);
        assert_eq!(picker.status_message(), Some("No matches"));
    }

    #[test]
    fn test_complete_on_prefilled_directory_keeps_text_and_filters() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);

        // Act
        let outcome = picker.complete();

        // Assert
        assert_eq!(
            outcome,
            CompletionOutcome::Filtered {
                fragment: String::new()
            }
        );
        assert_eq!(picker.input().first_line(), dir_text(temp_dir.path()));
        assert!(!picker.input().is_all_selected());
        assert_eq!(picker.status_message(), Some("Several entries match"));
    }

    #[test]
    fn test_choose_row_descends_into_directory_entry() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);
        picker.focus_listing();

        // Act
        picker.choose_row(3);

        // Assert
        assert_eq!(
            picker.input().first_line(),
            dir_text(&temp_dir.path().join("src"))
        );
        assert_eq!(picker.lister().contents(), ["main.rs"]);
        assert_eq!(picker.focus(), Focus::Listing);
    }

    #[test]
    fn test_choose_row_parent_entry_lists_parent_directory() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);
        picker.type_text(&dir_text(&temp_dir.path().join("src")));

        // Act
        picker.choose_row(1);

        // Assert
        assert_eq!(picker.input().first_line(), dir_text(temp_dir.path()));
        assert_eq!(picker.lister().contents(), ["notes.md", "src/"]);
    }

    #[test]
    fn test_choose_row_current_entry_keeps_directory() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);

        // Act
        picker.choose_row(0);

        // Assert
        assert_eq!(picker.input().first_line(), dir_text(temp_dir.path()));
    }

    #[test]
    fn test_choose_row_file_entry_focuses_input_with_full_path() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);
        picker.focus_listing();

        // Act
        picker.choose_row(2);

        // Assert
        assert_eq!(
            picker.input().first_line(),
            temp_dir.path().join("notes.md").to_string_lossy()
        );
        assert_eq!(picker.focus(), Focus::PathInput);
    }

    #[test]
    fn test_choose_row_past_listing_is_ignored() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);
        let before = picker.input().clone();

        // Act
        picker.choose_row(40);

        // Assert
        assert_eq!(picker.input(), &before);
    }

    #[test]
    fn test_toggle_dot_files_rescans_listing() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(".env"), "").expect("failed to write test file");
        let mut picker = picker_in(&temp_dir);

        // Act
        picker.toggle_dot_files();

        // Assert
        assert!(picker.display_options().show_dot_files);
        assert_eq!(picker.lister().contents(), [".env", "notes.md", "src/"]);
    }

    #[test]
    fn test_select_sort_flips_direction_of_active_key() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);

        // Act
        picker.select_sort(SortPolicy::Name);

        // Assert
        assert_eq!(
            picker.display_options().sort_policy(),
            SortPolicy::Name(SortDirection::Descending)
        );
        assert_eq!(picker.lister().contents(), ["src/", "notes.md"]);
    }

    #[test]
    fn test_select_sort_switches_key_ascending() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);
        picker.select_sort(SortPolicy::Name);

        // Act
        picker.select_sort(SortPolicy::Size);

        // Assert
        assert_eq!(
            picker.display_options().sort_policy(),
            SortPolicy::Size(SortDirection::Ascending)
        );
    }

    #[test]
    fn test_move_selection_moves_listing_cursor() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);

        // Act
        picker.move_selection(2, 10);

        // Assert
        assert_eq!(picker.selected_row(), 2);
    }

    #[test]
    fn test_create_or_open_records_opened_file() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);
        let source_path = temp_dir.path().join("src").join("main.rs");
        picker.type_text(&source_path.to_string_lossy());
        let mut editor = MockEditorSurface::new();
        editor.expect_open().times(1).returning(|_| Ok(()));

        // Act
        picker.create_or_open(&mut editor);

        // Assert
        assert_eq!(picker.current_file(), Some(source_path.as_path()));
        assert_eq!(
            picker.input().first_line(),
            dir_text(&temp_dir.path().join("src"))
        );
        assert!(picker.status_message().is_some_and(|message| message.starts_with("Opened")));
    }

    #[test]
    fn test_create_or_open_navigates_into_directory() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);
        picker.type_text(&temp_dir.path().join("src").to_string_lossy());
        let mut editor = MockEditorSurface::new();
        editor.expect_open().never();

        // Act
        picker.create_or_open(&mut editor);

        // Assert
        assert_eq!(
            picker.input().first_line(),
            dir_text(&temp_dir.path().join("src"))
        );
        assert_eq!(picker.lister().contents(), ["main.rs"]);
    }

    #[test]
    fn test_create_or_open_shows_editor_failure_in_status() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut picker = picker_in(&temp_dir);
        picker.type_text(&temp_dir.path().join("notes.md").to_string_lossy());
        let mut editor = MockEditorSurface::new();
        editor
            .expect_open()
            .returning(|_| Err(PickerError::Io(std::io::Error::other("editor crashed"))));

        // Act
        picker.create_or_open(&mut editor);

        // Assert
        assert_eq!(picker.status_message(), Some("editor crashed"));
    }
}
