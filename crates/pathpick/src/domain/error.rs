use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the picker components.
#[derive(Debug, Error)]
pub enum PickerError {
    /// The resolved directory does not exist or is not a directory.
    #[error("{}: not found", path.display())]
    PathNotFound { path: PathBuf },
    /// Enumerating the directory or reading entry metadata failed.
    #[error("Error opening directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// An existing file cannot be read.
    #[error("{}: Error opening file.", path.display())]
    FileUnreadable { path: PathBuf },
    /// Terminal, editor, or file creation failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_message() {
        // Arrange
        let error = PickerError::PathNotFound {
            path: PathBuf::from("/missing"),
        };

        // Act
        let message = error.to_string();

        // Assert
        assert_eq!(message, "/missing: not found");
    }

    #[test]
    fn test_file_unreadable_message() {
        // Arrange
        let error = PickerError::FileUnreadable {
            path: PathBuf::from("/etc/shadow"),
        };

        // Act
        let message = error.to_string();

        // Assert
        assert_eq!(message, "/etc/shadow: Error opening file.");
    }
}
