use ratatui::style::Color;

use crate::model::{Priority, UiConfig};

/// Parsed color theme for the board
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub border: Color,
    pub red: Color,
    pub orange: Color,
    pub green: Color,
    pub blue: Color,
    pub selection_bg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x11, 0x13, 0x18),
            text: Color::Rgb(0xD1, 0xD5, 0xDB),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x3B, 0x82, 0xF6),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            border: Color::Rgb(0x37, 0x41, 0x51),
            red: Color::Rgb(0xEF, 0x44, 0x44),
            orange: Color::Rgb(0xC2, 0x41, 0x0C),
            green: Color::Rgb(0x2B, 0x9F, 0x23),
            blue: Color::Rgb(0x3B, 0x82, 0xF6),
            selection_bg: Color::Rgb(0x1F, 0x29, 0x37),
            button_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
            button_fg: Color::Rgb(0x00, 0x00, 0x00),
        }
    }
}

/// Parse a hex color string like "#2B9F23" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from `[ui.colors]`, falling back to defaults.
    /// Unknown slots and malformed colors are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "border" => theme.border = color,
                "red" => theme.red = color,
                "orange" => theme.orange = color,
                "green" => theme.green = color,
                "blue" => theme.blue = color,
                "selection_bg" => theme.selection_bg = color,
                "button_bg" => theme.button_bg = color,
                "button_fg" => theme.button_fg = color,
                _ => {}
            }
        }
        theme
    }

    /// Pill color for a priority tag
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Low => self.blue,
            Priority::Medium => self.orange,
            Priority::High => self.red,
        }
    }
}
