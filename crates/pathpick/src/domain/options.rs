//! Display options controlling which entries are listed and how they sort.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Ordering direction for one sort key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns a short arrow used by the status bar.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// The single sort policy resolved from [`DisplayOptions`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortPolicy {
    Name(SortDirection),
    Size(SortDirection),
    Modified(SortDirection),
}

impl SortPolicy {
    /// Returns the direction carried by this policy.
    pub fn direction(self) -> SortDirection {
        match self {
            Self::Name(direction) | Self::Size(direction) | Self::Modified(direction) => {
                direction
            }
        }
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name(_) => "name",
            Self::Size(_) => "size",
            Self::Modified(_) => "modified",
        };

        write!(formatter, "{label} {}", self.direction().arrow())
    }
}

/// Host-owned configuration snapshot read by the listing component.
///
/// Sort keys are held in priority order: an explicit size sort wins over an
/// explicit modified-time sort, which wins over the always-present name
/// sort.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DisplayOptions {
    pub show_dot_files: bool,
    pub show_sizes: bool,
    pub show_modified: bool,
    pub sort_by_size: Option<SortDirection>,
    pub sort_by_modified: Option<SortDirection>,
    pub sort_by_name: SortDirection,
}

impl DisplayOptions {
    /// Resolves the one sort policy in effect.
    pub fn sort_policy(&self) -> SortPolicy {
        if let Some(direction) = self.sort_by_size {
            return SortPolicy::Size(direction);
        }

        if let Some(direction) = self.sort_by_modified {
            return SortPolicy::Modified(direction);
        }

        SortPolicy::Name(self.sort_by_name)
    }

    /// Returns a copy with `policy` as the only explicit sort key.
    #[must_use]
    pub fn with_sort(mut self, policy: SortPolicy) -> Self {
        self.sort_by_size = None;
        self.sort_by_modified = None;

        match policy {
            SortPolicy::Name(direction) => self.sort_by_name = direction,
            SortPolicy::Size(direction) => self.sort_by_size = Some(direction),
            SortPolicy::Modified(direction) => self.sort_by_modified = Some(direction),
        }

        self
    }
}

/// Read-only access to the host's current [`DisplayOptions`].
pub trait DisplayOptionsProvider {
    /// Returns the options snapshot to use for the next scan.
    fn display_options(&self) -> DisplayOptions;
}

impl DisplayOptionsProvider for DisplayOptions {
    fn display_options(&self) -> DisplayOptions {
        *self
    }
}

/// Host-side options cell shared with the listing component.
///
/// Clones observe the same value, so updates made by the host are seen on
/// the next scan.
#[derive(Clone, Debug, Default)]
pub struct SharedDisplayOptions {
    options: Rc<Cell<DisplayOptions>>,
}

impl SharedDisplayOptions {
    /// Creates a shared cell holding `options`.
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            options: Rc::new(Cell::new(options)),
        }
    }

    /// Replaces the current options.
    pub fn set(&self, options: DisplayOptions) {
        self.options.set(options);
    }
}

impl DisplayOptionsProvider for SharedDisplayOptions {
    fn display_options(&self) -> DisplayOptions {
        self.options.get()
    }
}
