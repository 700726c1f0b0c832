//! Live terminal model
//!
//! The single mutable "what the terminal currently shows" state driven by
//! the sequencer. Only the last line can change after it is appended.

use crate::error::{Error, Result};

use super::frame::{CursorPos, Frame};
use super::line::Line;

/// Mutable terminal state, exclusively owned by one sequencer
#[derive(Debug, Clone)]
pub struct Terminal {
    lines: Vec<Line>,
    cursor_visible: bool,
    cursor: CursorPos,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    /// Create an empty terminal with a visible cursor
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            cursor_visible: true,
            cursor: CursorPos::default(),
        }
    }

    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if no line has been appended yet
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current last line
    pub fn last_line(&self) -> Option<&Line> {
        self.lines.last()
    }

    /// Whether the cursor is visible
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Append a new line at the bottom
    pub fn append_line(&mut self, line: Line) {
        self.lines.push(line);
        self.update_cursor();
    }

    /// Overwrite the last line
    ///
    /// Fails with [`Error::NoLines`] when nothing has been appended yet.
    pub fn replace_last_line(&mut self, line: Line) -> Result<()> {
        let last = self.lines.last_mut().ok_or(Error::NoLines)?;
        *last = line;
        self.update_cursor();
        Ok(())
    }

    /// Show or hide the cursor block
    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    /// Independent copy of the current state
    pub fn snapshot(&self) -> Frame {
        Frame::new(self.lines.clone(), self.cursor_visible, self.cursor)
    }

    fn update_cursor(&mut self) {
        self.cursor = match self.lines.last() {
            Some(line) => CursorPos {
                line: self.lines.len() - 1,
                col: line.char_count(),
            },
            None => CursorPos::default(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorTag;

    #[test]
    fn test_append_line_grows_by_one() {
        let mut term = Terminal::new();
        term.append_line(Line::new());
        assert_eq!(term.line_count(), 1);
        term.append_line(Line::from([("ok", ColorTag::Text)]));
        assert_eq!(term.line_count(), 2);
    }

    #[test]
    fn test_replace_last_line_on_empty_fails() {
        let mut term = Terminal::new();
        let err = term.replace_last_line(Line::new()).unwrap_err();
        assert!(matches!(err, Error::NoLines));
        assert!(term.is_empty());
    }

    #[test]
    fn test_replace_last_line_only_touches_last() {
        let mut term = Terminal::new();
        term.append_line(Line::from([("first", ColorTag::Text)]));
        term.append_line(Line::from([("second", ColorTag::Text)]));
        term.replace_last_line(Line::from([("third", ColorTag::Blue)]))
            .unwrap();

        let frame = term.snapshot();
        assert_eq!(frame.text(), vec!["first", "third"]);
        assert_eq!(term.line_count(), 2);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut term = Terminal::new();
        term.append_line(Line::from([("a", ColorTag::Text)]));
        let before = term.snapshot();

        term.replace_last_line(Line::from([("abc", ColorTag::Text)]))
            .unwrap();
        term.set_cursor_visible(false);

        assert_eq!(before.text(), vec!["a"]);
        assert!(before.cursor_visible());
        assert_eq!(term.snapshot().text(), vec!["abc"]);
    }

    #[test]
    fn test_cursor_tracks_end_of_last_line() {
        let mut term = Terminal::new();
        term.append_line(Line::new());
        term.append_line(Line::from([("$ ", ColorTag::Green), ("ls", ColorTag::Blue)]));
        let cursor = term.snapshot().cursor();
        assert_eq!(cursor, CursorPos { line: 1, col: 4 });
    }
}
