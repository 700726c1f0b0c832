//! Frame Renderer
//!
//! Maps one [`Frame`] to a fixed-size bitmap: window chrome first, then
//! each line of colored text on a fixed character grid, then the cursor
//! block. Output depends only on the frame and the configuration.
//!
//! When a frame has more lines than fit on the canvas, the oldest lines
//! scroll off the top like in a real terminal.

use crate::config::{Config, Layout, Palette, Rgb};
use crate::core::{ColorTag, Frame};

use super::canvas::{Bitmap, Canvas};
use super::font::FontRenderer;

/// Horizontal distance between traffic-light centers
const TRAFFIC_LIGHT_SPACING: f32 = 20.0;
const TRAFFIC_LIGHT_RADIUS: f32 = 5.0;
const TRAFFIC_LIGHT_FIRST_X: f32 = 17.0;
/// Title text offset left of center, and from the top
const TITLE_OFFSET_X: f32 = 80.0;
const TITLE_Y: f32 = 8.0;

/// Renders frames to bitmaps
pub struct FrameRenderer {
    layout: Layout,
    palette: Palette,
    font: FontRenderer,
    title_font: FontRenderer,
}

impl FrameRenderer {
    /// Create a renderer, resolving fonts from the configured candidates
    pub fn new(config: &Config) -> Self {
        let candidates = config.fonts.candidates.as_slice();
        let font = FontRenderer::resolve(candidates, config.layout.font_size);
        let title_font = FontRenderer::resolve(candidates, config.layout.title_font_size);
        Self::with_fonts(config, font, title_font)
    }

    /// Create a renderer with already-loaded fonts
    pub fn with_fonts(config: &Config, font: FontRenderer, title_font: FontRenderer) -> Self {
        Self {
            layout: config.layout.clone(),
            palette: config.palette.clone(),
            font,
            title_font,
        }
    }

    /// Render a frame
    pub fn render(&mut self, frame: &Frame) -> Bitmap {
        let layout = &self.layout;
        let palette = &self.palette;
        let mut canvas = Canvas::new(layout.width, layout.height, palette.background);

        // Title bar
        canvas.fill_rect(0, 0, layout.width, layout.title_bar_height, palette.title_bar);
        let light_y = layout.title_bar_height as f32 / 2.0;
        for (i, color) in palette.traffic_lights.iter().enumerate() {
            let light_x = TRAFFIC_LIGHT_FIRST_X + i as f32 * TRAFFIC_LIGHT_SPACING;
            canvas.fill_circle(light_x, light_y, TRAFFIC_LIGHT_RADIUS, *color);
        }
        let title_advance = layout.char_advance * layout.title_font_size / layout.font_size;
        let title_x = (layout.width / 2) as f32 - TITLE_OFFSET_X;
        draw_text(
            &mut canvas,
            &mut self.title_font,
            title_x,
            TITLE_Y,
            title_advance,
            &layout.title,
            palette.resolve(ColorTag::Dim),
        );

        // Content, scrolled so the newest lines stay on screen
        let scroll = frame.lines().len().saturating_sub(layout.visible_rows());
        for (index, line) in frame.lines().iter().skip(scroll).enumerate() {
            let y = layout.line_y(index);
            for (col, segment) in line.columns() {
                draw_text(
                    &mut canvas,
                    &mut self.font,
                    layout.column_x(col),
                    y,
                    layout.char_advance,
                    &segment.text,
                    palette.resolve(segment.color),
                );
            }
        }

        // Cursor
        if frame.cursor_visible() {
            if let Some(last) = frame.last_line() {
                let x = layout.column_x(last.char_count()).round() as u32;
                let y = layout.line_y(frame.lines().len() - 1 - scroll).round() as u32;
                canvas.fill_rect(
                    x,
                    y,
                    layout.cursor_width,
                    layout.line_height.saturating_sub(4),
                    palette.cursor,
                );
            }
        }

        canvas.into_bitmap()
    }
}

/// Draw `text` with one glyph per fixed advance, top of line at `y`
fn draw_text(
    canvas: &mut Canvas,
    font: &mut FontRenderer,
    x: f32,
    y: f32,
    advance: f32,
    text: &str,
    color: Rgb,
) {
    let baseline = y + font.ascent();
    for (i, c) in text.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        let pen_x = x + i as f32 * advance;
        let glyph = font.rasterize(c);
        let gx = (pen_x + glyph.xmin as f32).round() as i32;
        let gy = (baseline - (glyph.ymin + glyph.height as i32) as f32).round() as i32;
        canvas.draw_glyph(glyph, gx, gy, color);
    }
}
