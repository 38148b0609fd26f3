//! Synchronous terminal event loop.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::FilePicker;
use crate::ui;

pub mod key_handler;
mod terminal;

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Whether the loop keeps running after an event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventResult {
    Continue,
    Quit,
}

/// Runs the picker until the user quits, opening files with
/// `editor_command`.
///
/// # Errors
/// Returns an error if terminal setup, rendering, or event reading fails.
pub fn run(picker: &mut FilePicker, editor_command: &str) -> io::Result<()> {
    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;
    picker.focus_path_input();

    loop {
        terminal.draw(|f| ui::render(f, picker))?;

        let event_result = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let visible_rows = ui::listing_visible_rows(terminal.size()?.height);
                let mut editor = terminal::TerminalEditor::new(&mut terminal, editor_command);

                key_handler::handle_key_event(picker, &mut editor, key, visible_rows)
            }
            Event::Paste(text) => key_handler::handle_paste(picker, &text),
            _ => EventResult::Continue,
        };

        if event_result == EventResult::Quit {
            break;
        }
    }

    terminal.show_cursor()?;

    Ok(())
}
