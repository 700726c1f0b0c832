//! Renderer Module
//!
//! Turns frames into bitmaps on the CPU: font resolution with a built-in
//! fallback, a simple pixel canvas, and the terminal frame layout.

mod builtin_font;
mod canvas;
mod font;
mod frame_renderer;

pub use canvas::{Bitmap, Canvas};
pub use font::{FontError, FontRenderer, FontSource, Glyph};
pub use frame_renderer::FrameRenderer;
