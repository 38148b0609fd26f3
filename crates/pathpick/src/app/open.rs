//! Open-or-create action for the path typed into the input.

use std::path::PathBuf;
use std::rc::Rc;

use tracing::{info, warn};

use crate::domain::error::PickerError;
use crate::domain::path::absolute_path;
use crate::infra::expand::expand_path;
use crate::infra::fs::{FileSystem, working_dir_or_root};

/// Text-editing surface that receives opened files.
#[cfg_attr(test, mockall::automock)]
pub trait EditorSurface {
    /// Loads `path` into the editor.
    ///
    /// # Errors
    /// Returns an error when the editor cannot be started or fails to load
    /// the file.
    fn open(&mut self, path: &std::path::Path) -> Result<(), PickerError>;
}

/// What the open action did with the typed path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The path is a directory; nothing was opened.
    Directory(PathBuf),
    /// An existing readable file was handed to the editor.
    Opened(PathBuf),
    /// A new empty file was created and handed to the editor.
    Created(PathBuf),
}

/// Opens existing files or creates new ones from typed path text.
pub struct FileOpener {
    file_system: Rc<dyn FileSystem>,
}

impl FileOpener {
    pub fn new(file_system: Rc<dyn FileSystem>) -> Self {
        Self { file_system }
    }

    /// Resolves `input_text` and opens, creates, or reports it.
    ///
    /// Existing files without read access are refused before the editor is
    /// involved.
    ///
    /// # Errors
    /// Returns [`PickerError::FileUnreadable`] for unreadable files and
    /// [`PickerError::Io`] when creation or the editor fails.
    pub fn create_or_open(
        &self,
        input_text: &str,
        editor: &mut dyn EditorSurface,
    ) -> Result<OpenOutcome, PickerError> {
        let cwd = working_dir_or_root(self.file_system.as_ref());
        let path = PathBuf::from(absolute_path(&expand_path(input_text), &cwd));

        if self.file_system.is_dir(&path) {
            return Ok(OpenOutcome::Directory(path));
        }

        if self.file_system.exists(&path) {
            if !self.file_system.is_readable(&path) {
                warn!(path = %path.display(), "Refusing to open unreadable file");

                return Err(PickerError::FileUnreadable { path });
            }

            editor.open(&path)?;
            info!(path = %path.display(), "Opened file");

            return Ok(OpenOutcome::Opened(path));
        }

        self.file_system.create_file(&path)?;
        editor.open(&path)?;
        info!(path = %path.display(), "Created file");

        Ok(OpenOutcome::Created(path))
    }
}
