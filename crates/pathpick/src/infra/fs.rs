//! Synchronous filesystem boundary used by the picker components.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::time::SystemTime;

use tracing::warn;

/// Filesystem queries the listing, completion, and open actions depend on.
///
/// Production uses [`RealFileSystem`], while tests can inject
/// `MockFileSystem` to reproduce access failures that a temporary
/// directory cannot.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Returns whether `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Returns whether `path` resolves to a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns whether `path` resolves to a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Returns whether the current user can open `path` for reading.
    fn is_readable(&self, path: &Path) -> bool;

    /// Lists child names of `path` in enumeration order, exactly as the
    /// platform reports them.
    ///
    /// # Errors
    /// Returns an error when the directory cannot be opened or one of its
    /// entries cannot be read.
    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Returns the byte size of the file at `path`.
    ///
    /// # Errors
    /// Returns an error when metadata for `path` cannot be read.
    fn file_size(&self, path: &Path) -> io::Result<u64>;

    /// Returns the last modification time of `path`.
    ///
    /// # Errors
    /// Returns an error when metadata for `path` cannot be read or the
    /// platform does not record modification times.
    fn modified_time(&self, path: &Path) -> io::Result<SystemTime>;

    /// Creates an empty file at `path`, failing if it already exists.
    ///
    /// # Errors
    /// Returns an error when the parent directory is missing, not writable,
    /// or `path` already exists.
    fn create_file(&self, path: &Path) -> io::Result<()>;

    /// Returns the process working directory.
    ///
    /// # Errors
    /// Returns an error when the working directory was removed or is not
    /// accessible.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_readable(&self, path: &Path) -> bool {
        File::open(path).is_ok()
    }

    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<OsString>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|entry| entry.file_name()))
            .collect()
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        Ok(fs::metadata(path)?.len())
    }

    fn modified_time(&self, path: &Path) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }

    fn create_file(&self, path: &Path) -> io::Result<()> {
        OpenOptions::new().write(true).create_new(true).open(path)?;

        Ok(())
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Returns the working directory reported by `file_system`, falling back to
/// the filesystem root when it is unavailable.
pub fn working_dir_or_root(file_system: &dyn FileSystem) -> PathBuf {
    file_system.current_dir().unwrap_or_else(|error| {
        warn!(%error, "Working directory unavailable, falling back to root");

        PathBuf::from(MAIN_SEPARATOR.to_string())
    })
}
