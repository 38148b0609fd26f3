//! Lexical path-string helpers shared by the listing and completion
//! components.
//!
//! Everything here works on already-expanded text and never touches the
//! filesystem.

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Returns whether `text` ends in a path separator.
pub fn ends_with_separator(text: &str) -> bool {
    text.ends_with(MAIN_SEPARATOR)
}

/// Resolves `path` against `cwd` and collapses `.`, `..`, and repeated
/// separators without consulting the filesystem.
///
/// The result never ends in a separator unless it is the root.
pub fn absolute_path(path: &str, cwd: &Path) -> String {
    let joined = if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized.to_string_lossy().into_owned()
}

/// Splits `path` at its last separator into `(head, tail)`.
///
/// Trailing separators are stripped from `head` unless it consists only of
/// separators. Without any separator, `head` is empty.
pub fn split_path(path: &str) -> (String, String) {
    let Some(separator_index) = path.rfind(MAIN_SEPARATOR) else {
        return (String::new(), path.to_string());
    };

    let head = &path[..=separator_index];
    let tail = &path[separator_index + 1..];
    let trimmed_head = head.trim_end_matches(MAIN_SEPARATOR);
    let head = if trimmed_head.is_empty() {
        head
    } else {
        trimmed_head
    };

    (head.to_string(), tail.to_string())
}

/// Joins `directory` and `name` with exactly one separator between them.
pub fn join_path(directory: &str, name: &str) -> String {
    if directory.is_empty() {
        return name.to_string();
    }

    if ends_with_separator(directory) {
        return format!("{directory}{name}");
    }

    format!("{directory}{MAIN_SEPARATOR}{name}")
}

/// Splits raw input into the directory to list and the file-name fragment
/// to locate in it.
///
/// `expanded` is the input after home and variable expansion. Input ending
/// in a separator (or empty input) names a directory and yields an empty
/// fragment; otherwise the normalized path is split at its last separator.
pub fn split_listing_path(expanded: &str, cwd: &Path) -> (String, String) {
    let full_path = absolute_path(expanded, cwd);
    if expanded.is_empty() || ends_with_separator(expanded) {
        return (full_path, String::new());
    }

    split_path(&full_path)
}

/// Transient completion request derived from the current input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionQuery {
    /// Absolute directory whose children are candidates.
    pub directory: String,
    /// Literal text typed after the last separator.
    pub typed_fragment: String,
}

impl CompletionQuery {
    /// Builds a query from expanded input text.
    ///
    /// The fragment is taken verbatim from the end of `expanded`, so any
    /// completion appended to the input extends exactly what was typed.
    pub fn from_expanded(expanded: &str, cwd: &Path) -> Self {
        let (head, typed_fragment) = if ends_with_separator(expanded) {
            (expanded.to_string(), String::new())
        } else {
            split_path(expanded)
        };
        let head = if head.is_empty() { "." } else { head.as_str() };

        Self {
            directory: absolute_path(head, cwd),
            typed_fragment,
        }
    }
}
