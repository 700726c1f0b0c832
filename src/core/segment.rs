//! Colored text segments
//!
//! A segment is the unit of colored text within a line. Its color is a
//! symbolic tag resolved against the palette at render time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbolic text color, resolved to RGB by the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    /// Default foreground
    #[default]
    Text,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Cyan,
    Red,
    Dim,
    White,
}

impl ColorTag {
    /// All tags, in palette order
    pub const ALL: [ColorTag; 10] = [
        ColorTag::Text,
        ColorTag::Green,
        ColorTag::Blue,
        ColorTag::Yellow,
        ColorTag::Orange,
        ColorTag::Purple,
        ColorTag::Cyan,
        ColorTag::Red,
        ColorTag::Dim,
        ColorTag::White,
    ];

    /// Lowercase tag name
    pub fn name(self) -> &'static str {
        match self {
            ColorTag::Text => "text",
            ColorTag::Green => "green",
            ColorTag::Blue => "blue",
            ColorTag::Yellow => "yellow",
            ColorTag::Orange => "orange",
            ColorTag::Purple => "purple",
            ColorTag::Cyan => "cyan",
            ColorTag::Red => "red",
            ColorTag::Dim => "dim",
            ColorTag::White => "white",
        }
    }
}

impl From<&str> for ColorTag {
    /// Unknown names fall back to the default text color
    fn from(name: &str) -> Self {
        ColorTag::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A run of text drawn in a single color
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Text content
    pub text: String,
    /// Color tag
    pub color: ColorTag,
}

impl Segment {
    /// Create a new segment
    pub fn new(text: impl Into<String>, color: ColorTag) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Number of characters, which is what the fixed advance is applied to
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Segment truncated to its first `count` characters
    pub fn prefix(&self, count: usize) -> Segment {
        let end = self
            .text
            .char_indices()
            .nth(count)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len());
        Segment {
            text: self.text[..end].to_string(),
            color: self.color,
        }
    }

    /// Check if the segment has no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tag_from_name() {
        assert_eq!(ColorTag::from("green"), ColorTag::Green);
        assert_eq!(ColorTag::from("DIM"), ColorTag::Dim);
    }

    #[test]
    fn test_color_tag_unknown_falls_back_to_text() {
        assert_eq!(ColorTag::from("magenta"), ColorTag::Text);
        assert_eq!(ColorTag::from(""), ColorTag::Text);
    }

    #[test]
    fn test_color_tag_serde_lowercase() {
        let json = serde_json::to_string(&ColorTag::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
    }

    #[test]
    fn test_segment_char_count_multibyte() {
        let seg = Segment::new("✓ ok", ColorTag::Green);
        assert_eq!(seg.char_count(), 4);
        assert_eq!(seg.text.len(), 6);
    }

    #[test]
    fn test_segment_prefix() {
        let seg = Segment::new("╔══╗", ColorTag::Blue);
        assert_eq!(seg.prefix(2).text, "╔═");
        assert_eq!(seg.prefix(0).text, "");
        assert_eq!(seg.prefix(10).text, "╔══╗");
        assert_eq!(seg.prefix(1).color, ColorTag::Blue);
    }
}
