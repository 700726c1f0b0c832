//! Immutable frame snapshots
//!
//! A frame captures everything the renderer needs: the visible lines and
//! the cursor state. Frames are values; once captured they never change.

use serde::{Deserialize, Serialize};

use super::line::Line;

/// Cursor position, (line, column), both 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPos {
    pub line: usize,
    pub col: usize,
}

/// One captured visual state of the simulated terminal
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frame {
    lines: Vec<Line>,
    cursor_visible: bool,
    cursor: CursorPos,
}

impl Frame {
    /// Build a frame from its parts
    pub fn new(lines: Vec<Line>, cursor_visible: bool, cursor: CursorPos) -> Self {
        Self {
            lines,
            cursor_visible,
            cursor,
        }
    }

    /// Visible lines, top to bottom
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Whether the cursor block should be drawn
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Tracked cursor position
    pub fn cursor(&self) -> CursorPos {
        self.cursor
    }

    /// Last line, if any
    pub fn last_line(&self) -> Option<&Line> {
        self.lines.last()
    }

    /// True if no line shows any text
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(Line::is_blank)
    }

    /// Plain text of every line
    pub fn text(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }

    /// JSON dump for debugging and golden comparisons
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
