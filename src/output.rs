//! GIF output
//!
//! Writes captured bitmaps as one looping animated GIF. The whole file is
//! written in a single call at the end of a run.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::renderer::Bitmap;

/// NeuQuant sampling factor; 10 is the encoder's recommended default
const QUANTIZE_SPEED: i32 = 10;

/// Write `bitmaps` as an infinitely looping GIF and return the file size
///
/// Each bitmap becomes one GIF frame shown for `frame_duration_ms`.
/// Runs of the same shared bitmap are quantized once. Missing parent
/// directories are created.
pub fn write_gif(path: &Path, bitmaps: &[Rc<Bitmap>], frame_duration_ms: u32) -> Result<u64> {
    let first = bitmaps.first().ok_or(Error::NoFrames)?;
    let (width, height) = gif_dimensions(first)?;
    for bitmap in &bitmaps[1..] {
        gif_dimensions(bitmap)?;
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = BufWriter::new(File::create(path)?);
    let mut encoder = gif::Encoder::new(file, width, height, &[])?;
    encoder.set_repeat(gif::Repeat::Infinite)?;

    // GIF delays are in hundredths of a second
    let delay = u16::try_from(frame_duration_ms / 10).unwrap_or(u16::MAX);
    let mut previous: Option<(&Rc<Bitmap>, gif::Frame<'static>)> = None;

    for bitmap in bitmaps {
        let frame = match &previous {
            Some((prev, frame)) if Rc::ptr_eq(prev, bitmap) => frame.clone(),
            _ => encode_frame(bitmap, delay)?,
        };
        encoder.write_frame(&frame)?;
        previous = Some((bitmap, frame));
    }

    let mut writer = encoder.into_inner()?;
    writer.flush()?;
    drop(writer);

    let size = fs::metadata(path)?.len();
    tracing::info!(path = %path.display(), frames = bitmaps.len(), size, "wrote gif");
    Ok(size)
}

/// Bitmap size as GIF logical screen dimensions
fn gif_dimensions(bitmap: &Bitmap) -> Result<(u16, u16)> {
    let (width, height) = bitmap.dimensions();
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(Error::CanvasTooLarge { width, height }),
    }
}

fn encode_frame(bitmap: &Bitmap, delay: u16) -> Result<gif::Frame<'static>> {
    let (width, height) = gif_dimensions(bitmap)?;
    let mut frame = gif::Frame::from_rgb_speed(width, height, bitmap.pixels(), QUANTIZE_SPEED);
    frame.delay = delay;
    Ok(frame)
}
