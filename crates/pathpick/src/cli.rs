//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::options::{DisplayOptions, SortDirection, SortPolicy};

/// Editor used when neither `--editor` nor `$EDITOR` is set.
pub const DEFAULT_EDITOR: &str = "vi";

/// Sort key selectable from the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Modified,
}

/// pathpick - Pick or create a file from a sortable directory listing
#[derive(Parser, Debug)]
#[command(name = "pathpick", version, about)]
pub struct Cli {
    /// File treated as currently open; its directory pre-fills the input
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// List entries whose names start with a dot
    #[arg(long)]
    pub dot_files: bool,

    /// Show file sizes in bytes
    #[arg(long)]
    pub sizes: bool,

    /// Show modification times
    #[arg(long)]
    pub modified: bool,

    /// Initial sort key
    #[arg(long, value_enum, default_value_t = SortKey::Name)]
    pub sort: SortKey,

    /// Sort in descending order
    #[arg(long)]
    pub descending: bool,

    /// Editor command for opened files [default: $EDITOR, then vi]
    #[arg(long, value_name = "CMD")]
    pub editor: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log debug events
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the initial display options from the flags.
    pub fn display_options(&self) -> DisplayOptions {
        let direction = if self.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let policy = match self.sort {
            SortKey::Name => SortPolicy::Name(direction),
            SortKey::Size => SortPolicy::Size(direction),
            SortKey::Modified => SortPolicy::Modified(direction),
        };

        DisplayOptions {
            show_dot_files: self.dot_files,
            show_sizes: self.sizes,
            show_modified: self.modified,
            ..DisplayOptions::default()
        }
        .with_sort(policy)
    }

    /// Resolves the editor command from `--editor`, then `editor_env`, then
    /// [`DEFAULT_EDITOR`].
    pub fn editor_command(&self, editor_env: Option<String>) -> String {
        self.editor
            .clone()
            .or(editor_env)
            .filter(|command| !command.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
    }
}
