//! Ratatui rendering of the picker.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::{FilePicker, Focus};

pub mod components;

use components::directory_listing::DirectoryListing;
use components::footer_bar::FooterBar;
use components::path_input::PathInput;
use components::status_bar::StatusBar;

/// Rows taken by everything except the listing body: status bar, bordered
/// input, listing borders, and footer.
const CHROME_HEIGHT: u16 = 1 + 3 + 2 + 1;

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Returns how many listing rows fit in a terminal `height` rows tall.
pub fn listing_visible_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(CHROME_HEIGHT).max(1))
}

/// Renders a complete frame including status bar, input, listing, and
/// footer.
pub fn render(f: &mut Frame, picker: &FilePicker) {
    let area = f.area();
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let focus = picker.focus();
    let lister = picker.lister();
    let highlighted_row = match focus {
        Focus::Listing => Some(picker.selected_row()),
        Focus::PathInput => lister.matching_row(),
    };

    StatusBar::new(
        lister.state().shown_directory.clone(),
        picker.display_options().sort_policy(),
    )
    .render(f, chunks[0]);
    PathInput::new(picker.input(), focus == Focus::PathInput).render(f, chunks[1]);
    DirectoryListing::new(
        lister.buffer(),
        highlighted_row,
        focus == Focus::Listing,
    )
    .render(f, chunks[2]);
    FooterBar::new(focus, picker.status_message().map(ToString::to_string)).render(f, chunks[3]);
}
