//! Canonical `#RRGGBB` colors.

use crate::error::PaletteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB color. Displays as uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel values as floats, for HSL math.
    pub fn to_rgb_f64(self) -> (f64, f64, f64) {
        (self.r as f64, self.g as f64, self.b as f64)
    }

    /// Canonical hex form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_hex(s).ok_or_else(|| PaletteError::invalid_color(s))
    }
}

impl TryFrom<String> for Color {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Normalize user input to a canonical color.
///
/// Trims, uppercases, adds a missing `#` and expands 3-digit shorthand.
/// Returns `None` for anything that is not exactly six hex digits afterwards.
pub fn normalize_hex(input: &str) -> Option<Color> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };

    let value = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::new(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

/// Parse a hex string into its channels.
pub fn hex_to_rgb(input: &str) -> Option<(u8, u8, u8)> {
    normalize_hex(input).map(|c| (c.r, c.g, c.b))
}

/// Build a color from float channels, clamping to [0, 255] and rounding.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> Color {
    Color::new(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
