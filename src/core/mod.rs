//! Terminal Core Module
//!
//! Platform-independent model of the simulated terminal:
//! - Colored segments and lines
//! - Immutable frame snapshots
//! - The live, mutable terminal model
//!
//! The core is deterministic: the same sequence of operations always
//! produces the same frames.

mod frame;
mod line;
mod segment;
mod terminal;

pub use frame::{CursorPos, Frame};
pub use line::Line;
pub use segment::{ColorTag, Segment};
pub use terminal::Terminal;
