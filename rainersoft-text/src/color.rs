//! Hex/RGB color conversion.

use rainersoft_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness in `[0, 1]` (ITU-R BT.601 weights).
    #[must_use]
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) / 255.0
    }

    fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

/// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (any case).
///
/// # Errors
///
/// Returns [`Error::InvalidHexColor`] for any other shape or non-hex digit.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let invalid = || Error::InvalidHexColor(hex.to_string());
    let trimmed = hex.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded = match body.len() {
        3 => body.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => body.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Formats a color as lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Mixes `hex` toward white by `percent` (clamped to 0–100).
///
/// # Errors
///
/// Returns [`Error::InvalidHexColor`] if `hex` does not parse.
pub fn lighten(hex: &str, percent: u8) -> Result<String> {
    let p = u32::from(percent.min(100));
    let rgb = hex_to_rgb(hex)?;
    Ok(rgb_to_hex(rgb.map(|c| {
        let c = u32::from(c);
        (c + (255 - c) * p / 100) as u8
    })))
}

/// Mixes `hex` toward black by `percent` (clamped to 0–100).
///
/// # Errors
///
/// Returns [`Error::InvalidHexColor`] if `hex` does not parse.
pub fn darken(hex: &str, percent: u8) -> Result<String> {
    let p = u32::from(percent.min(100));
    let rgb = hex_to_rgb(hex)?;
    Ok(rgb_to_hex(rgb.map(|c| (u32::from(c) * (100 - p) / 100) as u8)))
}

/// Picks black or white text for legibility on a `hex` background.
///
/// # Errors
///
/// Returns [`Error::InvalidHexColor`] if `hex` does not parse.
pub fn contrast_text_color(hex: &str) -> Result<&'static str> {
    let rgb = hex_to_rgb(hex)?;
    Ok(if rgb.luminance() > 0.5 { "#000000" } else { "#ffffff" })
}
