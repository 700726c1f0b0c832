//! Font Rendering
//!
//! Handles font resolution and glyph rasterization. Uses fontdue for
//! outline fonts and a built-in bitmap font when none can be loaded.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use thiserror::Error;

use super::builtin_font;

/// A rasterized glyph with its placement relative to the pen position
#[derive(Debug, Clone)]
pub struct Glyph {
    /// Horizontal offset of the bitmap from the pen position
    pub xmin: i32,
    /// Offset of the bitmap's bottom edge above the baseline
    pub ymin: i32,
    pub width: usize,
    pub height: usize,
    /// Coverage data (grayscale, 1 byte per pixel, row-major)
    pub bitmap: Vec<u8>,
}

/// Where a font came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

enum Face {
    Outline(Font),
    Builtin { scale: usize },
}

impl Face {
    fn rasterize(&self, c: char, font_size: f32) -> Glyph {
        match self {
            Face::Outline(font) => {
                let (metrics, bitmap) = font.rasterize(c, font_size);
                Glyph {
                    xmin: metrics.xmin,
                    ymin: metrics.ymin,
                    width: metrics.width,
                    height: metrics.height,
                    bitmap,
                }
            }
            Face::Builtin { scale } => {
                let (width, height, bitmap) = builtin_font::rasterize(c, *scale);
                Glyph {
                    xmin: 0,
                    ymin: 0,
                    width,
                    height,
                    bitmap,
                }
            }
        }
    }
}

/// Font renderer that handles glyph rasterization and caching
pub struct FontRenderer {
    face: Face,
    source: FontSource,
    /// Font size in pixels
    font_size: f32,
    /// Baseline offset from the top of a text line
    ascent: f32,
    glyph_cache: HashMap<char, Glyph>,
}

impl FontRenderer {
    /// Create a new font renderer with the given font file and size
    pub fn new(font_path: &Path, font_size: f32) -> Result<Self, FontError> {
        let font_data = std::fs::read(font_path)?;
        let mut renderer = Self::from_bytes(&font_data, font_size)?;
        renderer.source = FontSource::File(font_path.to_path_buf());
        Ok(renderer)
    }

    /// Create a font renderer from font data bytes
    pub fn from_bytes(font_data: &[u8], font_size: f32) -> Result<Self, FontError> {
        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|e| FontError::Parse(e.to_string()))?;

        let ascent = font
            .horizontal_line_metrics(font_size)
            .ok_or(FontError::NoLineMetrics)?
            .ascent;

        Ok(Self {
            face: Face::Outline(font),
            source: FontSource::Builtin,
            font_size,
            ascent,
            glyph_cache: HashMap::new(),
        })
    }

    /// Built-in bitmap font; cannot fail
    pub fn builtin(font_size: f32) -> Self {
        let scale = ((font_size / 12.0).floor() as usize).max(1);
        Self {
            face: Face::Builtin { scale },
            source: FontSource::Builtin,
            font_size,
            ascent: ((builtin_font::GLYPH_HEIGHT + 2) * scale) as f32,
            glyph_cache: HashMap::new(),
        }
    }

    /// Load the first candidate that parses, else the built-in font
    pub fn resolve<P: AsRef<Path>>(candidates: &[P], font_size: f32) -> Self {
        for path in candidates {
            let path = path.as_ref();
            match Self::new(path, font_size) {
                Ok(renderer) => {
                    tracing::info!(path = %path.display(), font_size, "loaded font");
                    return renderer;
                }
                Err(e) => tracing::debug!(path = %path.display(), error = %e, "font candidate skipped"),
            }
        }

        tracing::warn!(font_size, "no monospace font found, using built-in bitmap font");
        Self::builtin(font_size)
    }

    /// Where this font was loaded from
    pub fn source(&self) -> &FontSource {
        &self.source
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Builtin { .. })
    }

    /// Get the font size
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Get the baseline offset from the top of a line
    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    /// Rasterize a character, using cache if available
    pub fn rasterize(&mut self, c: char) -> &Glyph {
        let face = &self.face;
        let font_size = self.font_size;
        self.glyph_cache
            .entry(c)
            .or_insert_with(|| face.rasterize(c, font_size))
    }
}

/// Font-related errors
#[derive(Error, Debug)]
pub enum FontError {
    #[error("Font IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Font parse error: {0}")]
    Parse(String),
    #[error("Font has no horizontal line metrics")]
    NoLineMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_to_builtin() {
        let renderer = FontRenderer::resolve(&["/nonexistent/font.ttf", "/also/missing.ttf"], 14.0);
        assert!(renderer.is_builtin());
        assert_eq!(renderer.source(), &FontSource::Builtin);
        assert_eq!(renderer.font_size(), 14.0);
    }

    #[test]
    fn test_resolve_empty_candidates() {
        let candidates: [&str; 0] = [];
        assert!(FontRenderer::resolve(&candidates, 12.0).is_builtin());
    }

    #[test]
    fn test_new_missing_file_is_io_error() {
        let err = FontRenderer::new(Path::new("/nonexistent/font.ttf"), 14.0)
            .err()
            .unwrap();
        assert!(matches!(err, FontError::Io(_)));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = FontRenderer::from_bytes(b"not a font", 14.0).err().unwrap();
        assert!(matches!(err, FontError::Parse(_)));
    }

    #[test]
    fn test_builtin_rasterize_cached() {
        let mut renderer = FontRenderer::builtin(14.0);
        let first = renderer.rasterize('A').bitmap.clone();
        let second = renderer.rasterize('A').bitmap.clone();
        assert_eq!(first, second);
        assert!(first.iter().any(|&p| p > 0));
    }

    #[test]
    fn test_system_font_if_available() {
        // Only meaningful on hosts with DejaVu installed
        let path = Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf");
        if let Ok(mut renderer) = FontRenderer::new(path, 14.0) {
            assert!(!renderer.is_builtin());
            assert!(renderer.ascent() > 0.0);
            let glyph = renderer.rasterize('M');
            assert!(glyph.width > 0);
        }
    }
}
