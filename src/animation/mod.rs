//! Animation Module
//!
//! Scripted terminal sessions: a script of steps is played through the
//! sequencer, which captures frames into a sink.

mod script;
mod sequencer;
mod sink;

pub use script::{Script, Step};
pub use sequencer::{Pause, Sequencer};
pub use sink::{FrameSink, RenderingSink};
