//! Simulated room lighting.

use crate::color::{rgb_to_hex, Color};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overlay used for warm light.
const WARM_LIGHT: (f64, f64, f64) = (255.0, 214.0, 170.0);
/// Overlay used for cold light.
const COLD_LIGHT: (f64, f64, f64) = (190.0, 225.0, 255.0);
/// Brightness multiplier when the light is switched off.
const LIGHT_OFF_DIMMING: f64 = 0.7;

/// Light switch, color temperature and brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lighting {
    pub on: bool,
    /// 0 = warm, 100 = cold.
    pub temperature: u8,
    /// Percent.
    pub brightness: u8,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            on: true,
            temperature: 50,
            brightness: 100,
        }
    }
}

/// Human-facing description of the current light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightingMode {
    Off,
    Warm,
    Neutral,
    Cold,
}

impl fmt::Display for LightingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightingMode::Off => write!(f, "Light off"),
            LightingMode::Warm => write!(f, "Warm light"),
            LightingMode::Neutral => write!(f, "Neutral light"),
            LightingMode::Cold => write!(f, "Cold light"),
        }
    }
}

impl Lighting {
    pub fn set_temperature(&mut self, value: i64) {
        self.temperature = value.clamp(0, 100) as u8;
    }

    pub fn set_brightness(&mut self, value: i64) {
        self.brightness = value.clamp(0, 100) as u8;
    }

    pub fn mode(&self) -> LightingMode {
        if !self.on {
            return LightingMode::Off;
        }
        match self.temperature {
            t if t < 50 => LightingMode::Warm,
            50 => LightingMode::Neutral,
            _ => LightingMode::Cold,
        }
    }

    /// Opacity of the warm and cold overlays. Both are zero with the light off.
    pub fn overlay_alphas(&self) -> (f64, f64) {
        if !self.on {
            return (0.0, 0.0);
        }
        let t = self.temperature as f64;
        ((100.0 - t) / 200.0, t / 200.0)
    }

    /// Overall brightness multiplier.
    pub fn brightness_factor(&self) -> f64 {
        let base = self.brightness as f64 / 100.0;
        if self.on {
            base
        } else {
            base * LIGHT_OFF_DIMMING
        }
    }

    /// How `color` looks under this light.
    pub fn tint(&self, color: Color) -> Color {
        let (warm_alpha, cold_alpha) = self.overlay_alphas();
        let blend = |base: f64, overlay: f64, alpha: f64| base * (1.0 - alpha) + overlay * alpha;
        let factor = self.brightness_factor();

        let (r, g, b) = color.to_rgb_f64();
        let channel = |value: f64, warm: f64, cold: f64| {
            blend(blend(value, warm, warm_alpha), cold, cold_alpha) * factor
        };
        rgb_to_hex(
            channel(r, WARM_LIGHT.0, COLD_LIGHT.0),
            channel(g, WARM_LIGHT.1, COLD_LIGHT.1),
            channel(b, WARM_LIGHT.2, COLD_LIGHT.2),
        )
    }
}
