//! Termreel
//!
//! Renders a scripted, simulated terminal session into an animated GIF.
//!
//! - `core`: segments, lines, frames and the live terminal model
//! - `config`: layout, timing, palette and font constants
//! - `renderer`: CPU rendering of frames to bitmaps
//! - `animation`: scripts, the sequencer and frame sinks
//! - `output`: GIF encoding

pub mod animation;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod renderer;

pub use error::{Error, Result};
