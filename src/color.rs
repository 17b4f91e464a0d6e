//! Avatar colors and hex color parsing.

use std::str::FromStr;

use image::Rgba;
use palette::{Srgb, Srgba};

use crate::digest::Digest;
use crate::error::{IdenticonError, Result};

/// An 8-bit, non-premultiplied sRGB color with alpha.
pub type Color = Srgba<u8>;

/// Background used when the caller does not pick one.
pub const DEFAULT_BACKGROUND: Color = Srgba::<u8>::new(0xed, 0xed, 0xed, 0xff);

const HEX_DIGITS: usize = 6;

/// Parses a color written as exactly six hex digits (`"1a2b3c"`).
///
/// The result is fully opaque. A leading `#` or the three digit shorthand
/// are rejected.
pub fn parse_hex_color(input: &str) -> Result<Color> {
    if input.len() != HEX_DIGITS {
        return Err(IdenticonError::color_parse(
            input,
            "color must have 6 hex digits",
        ));
    }
    if !input.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(IdenticonError::color_parse(
            input,
            "color must only contain hex digits",
        ));
    }

    let rgb = Srgb::<u8>::from_str(input)
        .map_err(|e| IdenticonError::color_parse(input, e.to_string()))?;
    Ok(opaque(rgb.red, rgb.green, rgb.blue))
}

/// Formats the RGB channels of `color` as six lowercase hex digits.
pub fn to_hex(color: &Color) -> String {
    format!("{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Foreground color derived from the first three digest bytes.
pub fn derived_foreground(digest: &Digest) -> Color {
    let [r, g, b] = digest.color_bytes();
    opaque(r, g, b)
}

pub(crate) fn to_pixel(color: &Color) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, color.alpha])
}

fn opaque(r: u8, g: u8, b: u8) -> Color {
    Srgba::<u8>::new(r, g, b, 0xff)
}
