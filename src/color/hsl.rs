//! HSL conversions used by harmony generation.

use super::hex::{normalize_hex, rgb_to_hex, Color};
use crate::config::angle::normalize_degrees;
use serde::{Deserialize, Serialize};

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert back to a canonical color.
    pub fn to_color(self) -> Color {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.to_rgb_f64();
        rgb_to_hsl(r, g, b)
    }
}

/// Convert 0-255 channels to HSL.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let nr = r / 255.0;
    let ng = g / 255.0;
    let nb = b / 255.0;
    let max = nr.max(ng).max(nb);
    let min = nr.min(ng).min(nb);
    let d = max - min;

    let l = (max + min) / 2.0;
    if d == 0.0 {
        // Achromatic
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let s = d / (1.0 - (2.0 * l - 1.0).abs());
    let mut h = if max == nr {
        60.0 * (((ng - nb) / d) % 6.0)
    } else if max == ng {
        60.0 * ((nb - nr) / d + 2.0)
    } else {
        60.0 * ((nr - ng) / d + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }

    Hsl::new(h, s * 100.0, l * 100.0)
}

/// Convert HSL to unrounded 0-255 channels.
///
/// Saturation and lightness are clamped to [0, 100]; the hue is wrapped.
pub fn hsl_to_rgb(hsl: Hsl) -> (f64, f64, f64) {
    let h = normalize_degrees(hsl.h);
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    ((r1 + m) * 255.0, (g1 + m) * 255.0, (b1 + m) * 255.0)
}

/// HSL components straight to a canonical color.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> Color {
    let (r, g, b) = hsl_to_rgb(Hsl::new(h, s, l));
    rgb_to_hex(r, g, b)
}

/// Parse a hex string and convert it to HSL.
pub fn hex_to_hsl(input: &str) -> Option<Hsl> {
    normalize_hex(input).map(Hsl::from)
}
