use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::text_buffer::TextBuffer;
use crate::ui::Component;

/// Listing pane rendering the lister buffer with one highlighted row.
pub struct DirectoryListing<'a> {
    buffer: &'a TextBuffer,
    highlighted_row: Option<usize>,
    is_focused: bool,
}

impl<'a> DirectoryListing<'a> {
    pub fn new(buffer: &'a TextBuffer, highlighted_row: Option<usize>, is_focused: bool) -> Self {
        Self {
            buffer,
            highlighted_row,
            is_focused,
        }
    }

    /// Returns the first rendered row, starting from the buffer scroll and
    /// moving down only as far as needed to show the highlighted row.
    fn first_visible_row(&self, visible_rows: usize) -> usize {
        let (scroll_row, _) = self.buffer.scroll();
        let visible_rows = visible_rows.max(1);

        match self.highlighted_row {
            Some(row) if row >= scroll_row + visible_rows => row + 1 - visible_rows,
            Some(row) if row < scroll_row => row,
            _ => scroll_row,
        }
    }

    fn visible_lines(&self, visible_rows: usize) -> Vec<Line<'a>> {
        let first_row = self.first_visible_row(visible_rows);
        let highlight_style = if self.is_focused {
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };

        self.buffer
            .lines()
            .iter()
            .enumerate()
            .skip(first_row)
            .take(visible_rows)
            .map(|(row, line)| {
                let style = if Some(row) == self.highlighted_row {
                    highlight_style
                } else {
                    Style::default()
                };

                Line::from(Span::styled(line.as_str(), style))
            })
            .collect()
    }
}

impl Component for DirectoryListing<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" Files ", Style::default().fg(border_color)));
        let visible_rows = usize::from(block.inner(area).height);

        f.render_widget(
            Paragraph::new(self.visible_lines(visible_rows)).block(block),
            area,
        );
    }
}
