use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::options::SortPolicy;
use crate::ui::Component;

/// Top bar showing the listed directory and the active sort.
pub struct StatusBar {
    shown_directory: Option<String>,
    sort_policy: SortPolicy,
}

impl StatusBar {
    pub fn new(shown_directory: Option<String>, sort_policy: SortPolicy) -> Self {
        Self {
            shown_directory,
            sort_policy,
        }
    }

    fn right_text(&self) -> String {
        format!("Sort: {} ", self.sort_policy)
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let left_text = Span::styled(
            format!(" Pathpick v{version}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let directory_text = self
            .shown_directory
            .as_deref()
            .map(|directory| format!("  {directory}"))
            .unwrap_or_default();
        let right_text = self.right_text();
        let used_width =
            left_text.width() + directory_text.chars().count() + right_text.chars().count();
        let padding = usize::from(area.width).saturating_sub(used_width);
        let status_bar = Paragraph::new(Line::from(vec![
            left_text,
            Span::styled(directory_text, Style::default().fg(Color::White)),
            Span::raw(" ".repeat(padding)),
            Span::styled(right_text, Style::default().fg(Color::Gray)),
        ]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::domain::options::SortDirection;

    #[test]
    fn test_status_bar_render_shows_directory_and_sort() {
        // Arrange
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let status_bar = StatusBar::new(
            Some("/home/user/docs".to_string()),
            SortPolicy::Size(SortDirection::Descending),
        );

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                status_bar.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("/home/user/docs"));
        assert!(text.contains("Sort: size ↓"));
    }
}
