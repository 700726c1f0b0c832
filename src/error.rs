//! Error types for animation generation

use std::io;
use thiserror::Error;

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while creating the output directory or writing the file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// GIF encoder failure
    #[error("GIF encoding failed: {0}")]
    Gif(#[from] gif::EncodingError),

    /// The last line was mutated before any line existed
    #[error("cannot replace the last line of an empty terminal")]
    NoLines,

    /// Bitmap does not fit the 16-bit GIF screen size
    #[error("canvas {width}x{height} exceeds the GIF limit of 65535x65535")]
    CanvasTooLarge { width: u32, height: u32 },

    /// Nothing was captured, so there is nothing to encode
    #[error("no frames to encode")]
    NoFrames,
}

/// Result type for animation generation
pub type Result<T> = std::result::Result<T, Error>;
