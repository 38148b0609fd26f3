use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::text_buffer::TextBuffer;
use crate::ui::Component;

/// Single-line path input.
pub struct PathInput<'a> {
    buffer: &'a TextBuffer,
    is_focused: bool,
}

impl<'a> PathInput<'a> {
    pub fn new(buffer: &'a TextBuffer, is_focused: bool) -> Self {
        Self { buffer, is_focused }
    }

    /// Returns the first visible character column so the pen stays inside
    /// `inner_width`.
    fn horizontal_offset(&self, inner_width: u16) -> usize {
        let (_, pen_col) = self.buffer.pen();
        let inner_width = usize::from(inner_width.max(1));

        pen_col.saturating_sub(inner_width - 1)
    }
}

impl Component for PathInput<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" Path ", Style::default().fg(border_color)));
        let inner = block.inner(area);

        let offset = self.horizontal_offset(inner.width);
        let visible_text: String = self.buffer.first_line().chars().skip(offset).collect();
        let text_style = if self.buffer.is_all_selected() {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        f.render_widget(
            Paragraph::new(Span::styled(visible_text, text_style)).block(block),
            area,
        );

        if self.is_focused {
            let (_, pen_col) = self.buffer.pen();
            let cursor_col = u16::try_from(pen_col - offset).unwrap_or(u16::MAX);
            f.set_cursor_position(Position::new(
                inner.x.saturating_add(cursor_col),
                inner.y,
            ));
        }
    }
}
