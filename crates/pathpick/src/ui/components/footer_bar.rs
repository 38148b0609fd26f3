use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::Focus;
use crate::ui::Component;

const INPUT_HINTS: &str = "Tab complete · Enter open · ↓ listing · Esc quit";
const LISTING_HINTS: &str =
    "j/k move · Enter choose · . dotfiles · s sizes · m times · N/S/M sort · i input · q quit";

/// Bottom bar with the last status message, or key hints for the focused
/// pane.
pub struct FooterBar {
    focus: Focus,
    status_message: Option<String>,
}

impl FooterBar {
    pub fn new(focus: Focus, status_message: Option<String>) -> Self {
        Self {
            focus,
            status_message,
        }
    }

    fn text(&self) -> Span<'static> {
        if let Some(message) = &self.status_message {
            return Span::styled(format!(" {message}"), Style::default().fg(Color::Yellow));
        }

        let hints = match self.focus {
            Focus::PathInput => INPUT_HINTS,
            Focus::Listing => LISTING_HINTS,
        };

        Span::styled(
            format!(" {hints}"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        )
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let footer = Paragraph::new(Line::from(self.text()))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(footer, area);
    }
}
