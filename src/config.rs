//! Configuration for the animation
//!
//! Every constant that shapes the output lives here. A [`Config`] is built
//! once at startup and handed to the renderer and sequencer by reference.

use serde::{Deserialize, Serialize};

use crate::core::ColorTag;

/// RGB color
pub type Rgb = [u8; 3];

/// Convert a `0xRRGGBB` literal to RGB
pub const fn hex(value: u32) -> Rgb {
    [(value >> 16) as u8, (value >> 8) as u8, value as u8]
}

/// Complete animation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Canvas geometry
    pub layout: Layout,
    /// Frame timing
    pub timing: Timing,
    /// Text and chrome colors
    pub palette: Palette,
    /// Font lookup
    pub fonts: FontConfig,
}

/// Canvas geometry, in pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    /// Left margin and the gap between title bar area and first line
    pub padding: u32,
    pub line_height: u32,
    /// Top of the content area, before padding is added
    pub content_top: u32,
    /// Horizontal advance applied per character
    pub char_advance: f32,
    pub title_bar_height: u32,
    pub cursor_width: u32,
    pub font_size: f32,
    pub title_font_size: f32,
    pub title: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 900,
            height: 550,
            padding: 20,
            line_height: 22,
            content_top: 40,
            char_advance: 8.5,
            title_bar_height: 30,
            cursor_width: 8,
            font_size: 14.0,
            title_font_size: 12.0,
            title: "GitHub Copilot - Agent Mode".to_string(),
        }
    }
}

impl Layout {
    /// Top edge of the given line
    pub fn line_y(&self, index: usize) -> f32 {
        (self.content_top + self.padding) as f32 + (index as u32 * self.line_height) as f32
    }

    /// Lines that fit below the title bar; older lines scroll off the top
    pub fn visible_rows(&self) -> usize {
        let content = self
            .height
            .saturating_sub(self.content_top + self.padding);
        (content / self.line_height.max(1)).max(1) as usize
    }

    /// Left edge of the given character column
    pub fn column_x(&self, col: usize) -> f32 {
        self.padding as f32 + col as f32 * self.char_advance
    }
}

/// Frame counts for each effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timing {
    /// Capture one frame every `typing_speed` typed characters
    pub typing_speed: usize,
    pub pause_short: usize,
    pub pause_medium: usize,
    pub pause_long: usize,
    /// Frames held after an instant line
    pub instant_hold: usize,
    /// Display time of each frame
    pub frame_duration_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            typing_speed: 3,
            pause_short: 8,
            pause_medium: 15,
            pause_long: 30,
            instant_hold: 2,
            frame_duration_ms: 50,
        }
    }
}

/// Terminal colors (VS Code dark theme)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub title_bar: Rgb,
    /// Close, minimize, maximize
    pub traffic_lights: [Rgb; 3],
    pub cursor: Rgb,
    /// Color for tags missing from `text_colors`
    pub default_text: Rgb,
    pub text_colors: Vec<(ColorTag, Rgb)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: hex(0x1e1e1e),
            title_bar: hex(0x323232),
            traffic_lights: [hex(0xff5f56), hex(0xffbd2e), hex(0x27c93f)],
            cursor: hex(0x4ec9b0),
            default_text: hex(0xd4d4d4),
            text_colors: vec![
                (ColorTag::Text, hex(0xd4d4d4)),
                (ColorTag::Green, hex(0x4ec9b0)),
                (ColorTag::Blue, hex(0x569cd6)),
                (ColorTag::Yellow, hex(0xdcdcaa)),
                (ColorTag::Orange, hex(0xce9178)),
                (ColorTag::Purple, hex(0xc586c0)),
                (ColorTag::Cyan, hex(0x9cdcfe)),
                (ColorTag::Red, hex(0xf14c4c)),
                (ColorTag::Dim, hex(0x6a9955)),
                (ColorTag::White, hex(0xffffff)),
            ],
        }
    }
}

impl Palette {
    /// Resolve a tag to RGB
    pub fn resolve(&self, tag: ColorTag) -> Rgb {
        self.text_colors
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, rgb)| *rgb)
            .unwrap_or(self.default_text)
    }
}

/// Monospace font candidates, tried in order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub candidates: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            candidates: [
                "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf",
                "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
                "/System/Library/Fonts/Menlo.ttc",
                "C:\\Windows\\Fonts\\consola.ttf",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(hex(0x1e1e1e), [0x1e, 0x1e, 0x1e]);
        assert_eq!(hex(0xff5f56), [255, 95, 86]);
    }

    #[test]
    fn test_palette_resolve() {
        let palette = Palette::default();
        assert_eq!(palette.resolve(ColorTag::Green), hex(0x4ec9b0));
        assert_eq!(palette.resolve(ColorTag::White), [255, 255, 255]);
    }

    #[test]
    fn test_palette_missing_tag_uses_default_text() {
        let palette = Palette {
            text_colors: vec![(ColorTag::Green, hex(0x00ff00))],
            ..Palette::default()
        };
        assert_eq!(palette.resolve(ColorTag::Red), palette.default_text);
    }

    #[test]
    fn test_layout_positions() {
        let layout = Layout::default();
        assert_eq!(layout.line_y(0), 60.0);
        assert_eq!(layout.line_y(2), 104.0);
        assert_eq!(layout.column_x(0), 20.0);
        assert_eq!(layout.column_x(2), 37.0);
        assert_eq!(layout.visible_rows(), 22);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.timing.typing_speed, 3);
        assert_eq!(parsed.layout.width, 900);
    }
}
