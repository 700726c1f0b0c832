//! Terminal line representation
//!
//! A line is an ordered list of colored segments, drawn left to right.

use serde::{Deserialize, Serialize};

use super::segment::{ColorTag, Segment};

/// A row of colored segments
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line {
    segments: Vec<Segment>,
}

impl Line {
    /// Create an empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line from its segments
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Get all segments
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Append a segment to the end of the line
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Total characters across all segments
    pub fn char_count(&self) -> usize {
        self.segments.iter().map(Segment::char_count).sum()
    }

    /// Plain text of the line, colors dropped
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Check if the line shows no text
    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(Segment::is_empty)
    }

    /// Iterate segments with the character column each one starts at
    pub fn columns(&self) -> impl Iterator<Item = (usize, &Segment)> {
        self.segments.iter().scan(0usize, |col, segment| {
            let start = *col;
            *col += segment.char_count();
            Some((start, segment))
        })
    }
}

impl From<Vec<Segment>> for Line {
    fn from(segments: Vec<Segment>) -> Self {
        Self::from_segments(segments)
    }
}

impl<'a, const N: usize> From<[(&'a str, ColorTag); N]> for Line {
    fn from(parts: [(&'a str, ColorTag); N]) -> Self {
        parts
            .into_iter()
            .map(|(text, color)| Segment::new(text, color))
            .collect()
    }
}

impl FromIterator<Segment> for Line {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
