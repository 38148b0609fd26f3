//! Tab completion for the path input.

use std::path::{MAIN_SEPARATOR, Path};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::app::listing::DirectoryLister;
use crate::app::text_buffer::TextBuffer;
use crate::domain::path::{CompletionQuery, absolute_path, ends_with_separator};
use crate::infra::expand::expand_path;
use crate::infra::fs::{FileSystem, working_dir_or_root};

/// Result of one completion request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The containing directory is missing or unreadable; nothing changed.
    Unavailable,
    /// No entry starts with the typed fragment.
    NoMatches,
    /// Text was appended to the input.
    Extended { appended: String },
    /// The single match is already typed in full.
    AlreadyComplete,
    /// Completion is ambiguous and made no progress; the listing is now
    /// filtered to `fragment`.
    Filtered { fragment: String },
}

/// Extends typed path text by the longest unambiguous completion.
pub struct PathCompleter {
    file_system: Rc<dyn FileSystem>,
}

impl PathCompleter {
    pub fn new(file_system: Rc<dyn FileSystem>) -> Self {
        Self { file_system }
    }

    /// Completes the path on the first line of `input` and refreshes
    /// `lister` to match.
    pub fn extend(&self, input: &mut TextBuffer, lister: &mut DirectoryLister) -> CompletionOutcome {
        input.deselect();

        let original_text = input.first_line().to_string();
        let expanded = expand_path(&original_text).into_owned();
        let cwd = working_dir_or_root(self.file_system.as_ref());
        let query = CompletionQuery::from_expanded(&expanded, &cwd);
        let fragment = query.typed_fragment.as_str();
        let directory = Path::new(&query.directory);
        if !self.file_system.is_dir(directory) {
            debug!(directory = %query.directory, "Completion directory does not exist");

            return CompletionOutcome::Unavailable;
        }

        // Names that are not valid UTF-8 cannot be typed into the input.
        let matches: Vec<String> = match self.file_system.read_dir_names(directory) {
            Ok(names) => names
                .into_iter()
                .filter_map(|name| name.into_string().ok())
                .filter(|name| name.starts_with(fragment))
                .collect(),
            Err(error) => {
                warn!(directory = %query.directory, %error, "Failed to read completion candidates");

                return CompletionOutcome::Unavailable;
            }
        };

        let outcome = match matches.as_slice() {
            [] => {
                self.append_separator_for_directory(input, &cwd);

                CompletionOutcome::NoMatches
            }
            [single_match] => {
                input.insert(&single_match[fragment.len()..]);
                self.append_separator_for_directory(input, &cwd);

                appended_outcome(&original_text, input)
            }
            [first_match, ..] => {
                let prefix_len = common_prefix_len(&matches, fragment.len());
                input.insert(&first_match[fragment.len()..prefix_len]);

                if expand_path(input.first_line()) == expanded {
                    lister.set_filter(fragment);

                    CompletionOutcome::Filtered {
                        fragment: fragment.to_string(),
                    }
                } else {
                    appended_outcome(&original_text, input)
                }
            }
        };

        debug!(?outcome, match_count = matches.len(), "Completed path input");
        lister.on_input_changed(input.first_line());

        outcome
    }

    /// Appends one separator when the input names an existing directory and
    /// does not already end in a separator.
    fn append_separator_for_directory(&self, input: &mut TextBuffer, cwd: &Path) {
        let text = input.first_line();
        if text.is_empty() || ends_with_separator(text) {
            return;
        }

        let resolved = absolute_path(&expand_path(text), cwd);
        if self.file_system.is_dir(Path::new(&resolved)) {
            input.insert(&MAIN_SEPARATOR.to_string());
        }
    }
}

fn appended_outcome(original_text: &str, input: &TextBuffer) -> CompletionOutcome {
    let appended = input
        .first_line()
        .strip_prefix(original_text)
        .unwrap_or_default()
        .to_string();

    if appended.is_empty() {
        return CompletionOutcome::AlreadyComplete;
    }

    CompletionOutcome::Extended { appended }
}

/// Returns the byte length of the prefix shared by every match, starting
/// the scan at `start`.
///
/// Stops at the first differing byte or when any match is exhausted, then
/// backs off to a character boundary. The result is never below `start` nor
/// above the shortest match length.
pub fn common_prefix_len(matches: &[String], start: usize) -> usize {
    let Some((first_match, other_matches)) = matches.split_first() else {
        return start;
    };

    let mut prefix_len = start;
    while let Some(&byte) = first_match.as_bytes().get(prefix_len) {
        let shared = other_matches
            .iter()
            .all(|other_match| other_match.as_bytes().get(prefix_len) == Some(&byte));
        if !shared {
            break;
        }

        prefix_len += 1;
    }

    while !first_match.is_char_boundary(prefix_len) {
        prefix_len -= 1;
    }

    prefix_len
}
