//! Color codec: hex validation and RGB/HSL conversions.

mod hex;
mod hsl;

pub use hex::{hex_to_rgb, normalize_hex, rgb_to_hex, Color};
pub use hsl::{hex_to_hsl, hsl_to_hex, hsl_to_rgb, rgb_to_hsl, Hsl};
