//! Software canvas
//!
//! A CPU pixel buffer with the handful of primitives the frame renderer
//! needs: solid fills, circles, and alpha-blended glyph masks.

use crate::config::Rgb;

use super::font::Glyph;

/// Finished RGB8 image, row-major, 3 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Get buffer dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGB bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at (x, y), if inside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 3) as usize;
        Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }
}

/// Drawing surface
pub struct Canvas {
    buffer: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut canvas = Self {
            buffer: vec![0u8; (width * height * 3) as usize],
            width,
            height,
        };
        canvas.clear(background);
        canvas
    }

    /// Fill the whole canvas with a color
    pub fn clear(&mut self, color: Rgb) {
        for pixel in self.buffer.chunks_exact_mut(3) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Fill a rectangle with a color, clipped to the canvas
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);

        for row in y..y_end {
            for col in x..x_end {
                self.put(col, row, color);
            }
        }
    }

    /// Fill a circle centered on (cx, cy)
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        let r2 = radius * radius;
        let top = (cy - radius).floor().max(0.0) as u32;
        let bottom = ((cy + radius).ceil() as u32).min(self.height);
        let left = (cx - radius).floor().max(0.0) as u32;
        let right = ((cx + radius).ceil() as u32).min(self.width);

        for row in top..bottom {
            for col in left..right {
                // Sample at pixel centers
                let dx = col as f32 + 0.5 - cx;
                let dy = row as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.put(col, row, color);
                }
            }
        }
    }

    /// Blend a glyph coverage mask with its top-left corner at (x, y)
    pub fn draw_glyph(&mut self, glyph: &Glyph, x: i32, y: i32, fg: Rgb) {
        for gy in 0..glyph.height {
            let py = y + gy as i32;
            if py < 0 || py >= self.height as i32 {
                continue;
            }

            for gx in 0..glyph.width {
                let px = x + gx as i32;
                if px < 0 || px >= self.width as i32 {
                    continue;
                }

                let alpha = glyph.bitmap.get(gy * glyph.width + gx).copied().unwrap_or(0);
                if alpha == 0 {
                    continue;
                }
                self.blend(px as u32, py as u32, fg, alpha);
            }
        }
    }

    /// Finish drawing
    pub fn into_bitmap(self) -> Bitmap {
        Bitmap {
            width: self.width,
            height: self.height,
            pixels: self.buffer,
        }
    }

    fn put(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = ((y * self.width + x) * 3) as usize;
        self.buffer[idx..idx + 3].copy_from_slice(&color);
    }

    fn blend(&mut self, x: u32, y: u32, src: Rgb, alpha: u8) {
        let idx = ((y * self.width + x) * 3) as usize;
        let alpha = u16::from(alpha);
        let inv_alpha = 255 - alpha;
        for channel in 0..3 {
            let dst = u16::from(self.buffer[idx + channel]);
            let src_c = u16::from(src[channel]);
            self.buffer[idx + channel] = ((src_c * alpha + dst * inv_alpha + 127) / 255) as u8;
        }
    }
}
