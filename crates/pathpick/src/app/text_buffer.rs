//! Minimal line buffer with a pen (cursor), scroll offset, and select-all.

/// Line-oriented text buffer shared between the picker components and the
/// renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    pen_row: usize,
    pen_col: usize,
    scroll_row: usize,
    scroll_col: usize,
    selected_all: bool,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// Creates a buffer holding one empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            pen_row: 0,
            pen_col: 0,
            scroll_row: 0,
            scroll_col: 0,
            selected_all: false,
        }
    }

    /// Returns all lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the first line, which holds the path in the input buffer.
    pub fn first_line(&self) -> &str {
        self.lines.first().map_or("", String::as_str)
    }

    /// Returns `(row, column)` of the pen; the column counts characters.
    pub fn pen(&self) -> (usize, usize) {
        (self.pen_row, self.pen_col)
    }

    /// Returns `(row, column)` of the scroll offset.
    pub fn scroll(&self) -> (usize, usize) {
        (self.scroll_row, self.scroll_col)
    }

    /// Returns whether the whole buffer is selected for overwrite.
    pub fn is_all_selected(&self) -> bool {
        self.selected_all
    }

    /// Selects the whole buffer so the next edit replaces it.
    pub fn select_all(&mut self) {
        self.selected_all = true;
    }

    /// Drops a select-all selection so the next edit appends at the pen.
    pub fn deselect(&mut self) {
        self.selected_all = false;
    }

    /// Replaces the entire contents with `lines` as one edit.
    ///
    /// The pen lands at the end of the last pasted line and the selection is
    /// cleared.
    pub fn replace_all(&mut self, lines: Vec<String>) {
        self.lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        self.selected_all = false;
        self.pen_row = self.lines.len() - 1;
        self.pen_col = self.lines[self.pen_row].chars().count();
    }

    /// Moves the pen and scroll offset to the top-left origin.
    pub fn reset_position(&mut self) {
        self.pen_row = 0;
        self.pen_col = 0;
        self.scroll_row = 0;
        self.scroll_col = 0;
    }

    /// Inserts plain `text` at the pen, replacing the buffer when everything
    /// is selected.
    pub fn insert(&mut self, text: &str) {
        if self.selected_all {
            self.replace_all(vec![String::new()]);
        }

        let byte_index = self.pen_byte_index();
        self.lines[self.pen_row].insert_str(byte_index, text);
        self.pen_col += text.chars().count();
    }

    /// Deletes the character before the pen, or the whole buffer when
    /// everything is selected.
    pub fn backspace(&mut self) {
        if self.selected_all {
            self.replace_all(vec![String::new()]);

            return;
        }

        if self.pen_col == 0 {
            return;
        }

        self.pen_col -= 1;
        let byte_index = self.pen_byte_index();
        self.lines[self.pen_row].remove(byte_index);
    }

    /// Moves the pen by `offset` rows, clamped to the buffer, and scrolls so
    /// the pen stays inside a viewport of `visible_rows`.
    pub fn move_pen_row(&mut self, offset: isize, visible_rows: usize) {
        let last_row = self.lines.len() - 1;
        let target_row = self.pen_row.saturating_add_signed(offset).min(last_row);
        self.pen_row = target_row;
        self.pen_col = 0;
        self.selected_all = false;

        let visible_rows = visible_rows.max(1);
        if self.pen_row < self.scroll_row {
            self.scroll_row = self.pen_row;
        } else if self.pen_row >= self.scroll_row + visible_rows {
            self.scroll_row = self.pen_row + 1 - visible_rows;
        }
    }

    fn pen_byte_index(&self) -> usize {
        let line = &self.lines[self.pen_row];

        line.char_indices()
            .nth(self.pen_col)
            .map_or(line.len(), |(byte_index, _)| byte_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(lines: &[&str]) -> TextBuffer {
        let mut buffer = TextBuffer::new();
        buffer.replace_all(lines.iter().map(ToString::to_string).collect());

        buffer
    }

    #[test]
    fn test_replace_all_moves_pen_to_end() {
        // Arrange
        let mut buffer = TextBuffer::new();

        // Act
        buffer.replace_all(vec!["one".to_string(), "three".to_string()]);

        // Assert
        assert_eq!(buffer.lines(), ["one", "three"]);
        assert_eq!(buffer.pen(), (1, 5));
    }

    #[test]
    fn test_replace_all_with_nothing_keeps_one_line() {
        // Arrange
        let mut buffer = buffer_with(&["old"]);

        // Act
        buffer.replace_all(Vec::new());

        // Assert
        assert_eq!(buffer.lines(), [""]);
    }

    #[test]
    fn test_insert_appends_at_pen() {
        // Arrange
        let mut buffer = buffer_with(&["/tmp/rep"]);

        // Act
        buffer.insert("ort");

        // Assert
        assert_eq!(buffer.first_line(), "/tmp/report");
        assert_eq!(buffer.pen(), (0, 11));
    }

    #[test]
    fn test_insert_replaces_selected_text() {
        // Arrange
        let mut buffer = buffer_with(&["/home/user/"]);
        buffer.select_all();

        // Act
        buffer.insert("/");

        // Assert
        assert_eq!(buffer.first_line(), "/");
        assert!(!buffer.is_all_selected());
    }

    #[test]
    fn test_deselect_keeps_text_for_appending() {
        // Arrange
        let mut buffer = buffer_with(&["/home/user/"]);
        buffer.select_all();

        // Act
        buffer.deselect();
        buffer.insert("docs");

        // Assert
        assert_eq!(buffer.first_line(), "/home/user/docs");
    }

    #[test]
    fn test_insert_handles_multibyte_characters() {
        // Arrange
        let mut buffer = buffer_with(&["/tmp/é"]);

        // Act
        buffer.insert("t");
        buffer.backspace();
        buffer.backspace();

        // Assert
        assert_eq!(buffer.first_line(), "/tmp/");
    }

    #[test]
    fn test_backspace_at_line_start_is_noop() {
        // Arrange
        let mut buffer = buffer_with(&["abc"]);
        buffer.reset_position();

        // Act
        buffer.backspace();

        // Assert
        assert_eq!(buffer.first_line(), "abc");
    }

    #[test]
    fn test_reset_position_returns_to_origin() {
        // Arrange
        let mut buffer = buffer_with(&["a", "b", "c", "d"]);
        buffer.move_pen_row(-1, 1);

        // Act
        buffer.reset_position();

        // Assert
        assert_eq!(buffer.pen(), (0, 0));
        assert_eq!(buffer.scroll(), (0, 0));
    }

    #[test]
    fn test_move_pen_row_clamps_and_scrolls() {
        // Arrange
        let mut buffer = buffer_with(&["a", "b", "c", "d", "e"]);
        buffer.reset_position();

        // Act
        buffer.move_pen_row(10, 2);

        // Assert
        assert_eq!(buffer.pen(), (4, 0));
        assert_eq!(buffer.scroll(), (3, 0));

        // Act
        buffer.move_pen_row(-10, 2);

        // Assert
        assert_eq!(buffer.pen(), (0, 0));
        assert_eq!(buffer.scroll(), (0, 0));
    }
}
