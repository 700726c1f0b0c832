//! Animation Sequencer
//!
//! Drives the live terminal through scripted effects and captures a frame
//! after each visible change. Effects:
//!
//! - typed line: characters revealed one at a time, sampled every
//!   `typing_speed` characters, then a short reading pause
//! - instant line: a whole line appears at once, held briefly
//! - hold: the current state repeated to simulate a pause

use serde::{Deserialize, Serialize};

use crate::config::Timing;
use crate::core::{Line, Terminal};
use crate::error::Result;

use super::script::Step;
use super::sink::FrameSink;

/// Named pause lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pause {
    Short,
    Medium,
    Long,
    /// Closing hold, twice the long pause
    Final,
}

impl Pause {
    /// Frame count for this pause under `timing`
    pub fn frames(self, timing: &Timing) -> usize {
        match self {
            Pause::Short => timing.pause_short,
            Pause::Medium => timing.pause_medium,
            Pause::Long => timing.pause_long,
            Pause::Final => timing.pause_long * 2,
        }
    }
}

/// Owns the live terminal and feeds captured frames to a sink
pub struct Sequencer<'a, S: FrameSink> {
    terminal: Terminal,
    timing: &'a Timing,
    sink: S,
}

impl<'a, S: FrameSink> Sequencer<'a, S> {
    /// Start with an empty terminal
    pub fn new(timing: &'a Timing, sink: S) -> Self {
        Self {
            terminal: Terminal::new(),
            timing,
            sink,
        }
    }

    /// Current live state
    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    /// Frames captured so far
    pub fn captured(&self) -> usize {
        self.sink.len()
    }

    /// Capture the current state once
    pub fn capture(&mut self) {
        self.sink.capture(self.terminal.snapshot());
    }

    /// Capture the current state `count` times
    pub fn hold(&mut self, count: usize) {
        for _ in 0..count {
            self.capture();
        }
    }

    pub fn pause(&mut self, pause: Pause) {
        self.hold(pause.frames(self.timing));
    }

    /// Append a line without capturing
    pub fn append_line(&mut self, line: Line) {
        self.terminal.append_line(line);
    }

    /// Replace the last line without capturing
    pub fn set_last_line(&mut self, line: Line) -> Result<()> {
        self.terminal.replace_last_line(line)
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.terminal.set_cursor_visible(visible);
    }

    /// Type `line` into the last line character by character
    ///
    /// The last line must already exist. Whatever the stride, the line
    /// ends up exactly equal to `line`.
    pub fn type_line(&mut self, line: &Line) -> Result<()> {
        let stride = self.timing.typing_speed.max(1);
        let mut committed = Line::new();

        for segment in line.segments() {
            for i in 0..segment.char_count() {
                let mut partial = committed.clone();
                partial.push(segment.prefix(i + 1));
                self.terminal.replace_last_line(partial)?;
                if i % stride == 0 {
                    self.capture();
                }
            }
            committed.push(segment.clone());
        }

        self.terminal.replace_last_line(line.clone())?;
        self.pause(Pause::Short);
        tracing::debug!(text = %line.text(), frames = self.captured(), "typed line");
        Ok(())
    }

    /// Append `line` fully formed and hold it briefly
    pub fn instant_line(&mut self, line: Line) {
        tracing::debug!(text = %line.text(), "instant line");
        self.terminal.append_line(line);
        self.hold(self.timing.instant_hold);
    }

    /// Execute one scripted step
    pub fn step(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Type(line) => self.type_line(line)?,
            Step::Instant(line) => self.instant_line(line.clone()),
            Step::Append(line) => self.append_line(line.clone()),
            Step::SetLast(line) => self.set_last_line(line.clone())?,
            Step::Hold(pause) => self.pause(*pause),
            Step::Cursor(visible) => self.set_cursor_visible(*visible),
        }
        Ok(())
    }

    /// Execute steps in order
    pub fn run(&mut self, steps: &[Step]) -> Result<()> {
        for step in steps {
            self.step(step)?;
        }
        Ok(())
    }

    /// Finish and hand back the sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
