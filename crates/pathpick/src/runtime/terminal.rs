use std::io;
use std::path::Path;
use std::process::Command;

use crossterm::cursor::Show;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::app::open::EditorSurface;
use crate::domain::error::PickerError;
use crate::runtime::TuiTerminal;

/// Restores terminal state on all exit paths after raw mode is enabled.
///
/// Cleanup lives in `Drop` so it also runs on early `?` returns and
/// unwinding panics.
pub(crate) struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = disable_raw_mode();
        let _ = execute!(stdout, DisableBracketedPaste, LeaveAlternateScreen, Show);
    }
}

/// Enables raw mode, enters the alternate screen, and turns on bracketed paste
/// so pasted paths arrive as `Event::Paste`.
pub(crate) fn setup_terminal() -> io::Result<TuiTerminal> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);

    Terminal::new(backend)
}

/// [`EditorSurface`] that suspends the TUI and runs an external editor
/// command in the foreground.
pub(crate) struct TerminalEditor<'a> {
    command: &'a str,
    terminal: &'a mut TuiTerminal,
}

impl<'a> TerminalEditor<'a> {
    pub(crate) fn new(terminal: &'a mut TuiTerminal, command: &'a str) -> Self {
        Self { command, terminal }
    }

    fn run_editor(&self, path: &Path) -> io::Result<()> {
        let (program, arguments) = split_command(self.command).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Editor command is empty")
        })?;
        debug!(program, path = %path.display(), "Launching editor");

        let status = Command::new(program).args(arguments).arg(path).status()?;
        if !status.success() {
            return Err(io::Error::other(format!("{program} exited with {status}")));
        }

        Ok(())
    }
}

impl EditorSurface for TerminalEditor<'_> {
    fn open(&mut self, path: &Path) -> Result<(), PickerError> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen,
            Show
        )?;

        let editor_result = self.run_editor(path);

        enable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableBracketedPaste
        )?;
        self.terminal.clear()?;

        editor_result.map_err(PickerError::Io)
    }
}

/// Splits an editor command such as `code --wait` into program and
/// arguments.
fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;

    Some((program, parts.collect()))
}
