use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::open::EditorSurface;
use crate::app::{FilePicker, Focus};
use crate::domain::options::SortPolicy;
use crate::runtime::EventResult;

/// Dispatches one key press to the handler of the focused pane.
pub fn handle_key_event(
    picker: &mut FilePicker,
    editor: &mut dyn EditorSurface,
    key: KeyEvent,
    visible_rows: usize,
) -> EventResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return EventResult::Quit;
    }

    match picker.focus() {
        Focus::PathInput => handle_input_key(picker, editor, key),
        Focus::Listing => handle_listing_key(picker, key, visible_rows),
    }
}

/// Inserts pasted text into the path input, dropping line breaks.
pub fn handle_paste(picker: &mut FilePicker, text: &str) -> EventResult {
    let first_line = text.lines().next().unwrap_or_default();
    if !first_line.is_empty() {
        picker.return_to_path_input();
        picker.type_text(first_line);
    }

    EventResult::Continue
}

fn handle_input_key(
    picker: &mut FilePicker,
    editor: &mut dyn EditorSurface,
    key: KeyEvent,
) -> EventResult {
    match key.code {
        KeyCode::Esc => return EventResult::Quit,
        KeyCode::Tab => {
            picker.complete();
        }
        KeyCode::Enter => picker.create_or_open(editor),
        KeyCode::Down => picker.focus_listing(),
        KeyCode::Backspace => picker.backspace(),
        KeyCode::Char(character) => {
            let mut encoded = [0; 4];
            picker.type_text(character.encode_utf8(&mut encoded));
        }
        _ => {}
    }

    EventResult::Continue
}

fn handle_listing_key(picker: &mut FilePicker, key: KeyEvent, visible_rows: usize) -> EventResult {
    let page = isize::try_from(visible_rows).unwrap_or(isize::MAX);

    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Esc | KeyCode::Char('i') => picker.return_to_path_input(),
        KeyCode::Char('j') | KeyCode::Down => picker.move_selection(1, visible_rows),
        KeyCode::Char('k') | KeyCode::Up => picker.move_selection(-1, visible_rows),
        KeyCode::PageDown => picker.move_selection(page, visible_rows),
        KeyCode::PageUp => picker.move_selection(-page, visible_rows),
        KeyCode::Enter => picker.choose_row(picker.selected_row()),
        KeyCode::Char('.') => picker.toggle_dot_files(),
        KeyCode::Char('s') => picker.toggle_sizes(),
        KeyCode::Char('m') => picker.toggle_modified(),
        KeyCode::Char('N') => picker.select_sort(SortPolicy::Name),
        KeyCode::Char('S') => picker.select_sort(SortPolicy::Size),
        KeyCode::Char('M') => picker.select_sort(SortPolicy::Modified),
        _ => {}
    }

    EventResult::Continue
}
