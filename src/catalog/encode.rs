//! Numeric encodings of a color.
//!
//! Catalog descriptors store channels as `0x`-prefixed hex bytes but alpha
//! as a decimal string; inline source constants use decimals throughout.

use serde::Serialize;

use crate::token::Color;

/// Channels as written into a colorset descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexComponents {
    pub red: String,
    pub green: String,
    pub blue: String,
    pub alpha: String,
}

/// Channels as fixed three-decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecimalComponents {
    pub red: String,
    pub green: String,
    pub blue: String,
    pub alpha: String,
}

/// Encodes a single channel as two uppercase hex digits of `round(c * 255)`.
///
/// The channel is clamped into `[0, 1]` first.
///
/// # Example
///
/// ```rust
/// use tokenport::catalog::hex_channel;
///
/// assert_eq!(hex_channel(0.0), "00");
/// assert_eq!(hex_channel(0.5), "80");
/// assert_eq!(hex_channel(1.0), "FF");
/// ```
pub fn hex_channel(channel: f64) -> String {
    format!("{:02X}", to_byte(channel))
}

/// Encodes a channel as a three-decimal string.
pub fn decimal_channel(channel: f64) -> String {
    format!("{:.3}", clamp_unit(channel))
}

/// Converts a color to its catalog encoding.
pub fn to_hex(color: &Color) -> HexComponents {
    let rgba = color.rgba().clamped();
    HexComponents {
        red: format!("0x{}", hex_channel(rgba.red)),
        green: format!("0x{}", hex_channel(rgba.green)),
        blue: format!("0x{}", hex_channel(rgba.blue)),
        alpha: decimal_channel(rgba.alpha),
    }
}

/// Converts a color to decimal strings for inline source constants.
pub fn to_decimal(color: &Color) -> DecimalComponents {
    let rgba = color.rgba().clamped();
    DecimalComponents {
        red: decimal_channel(rgba.red),
        green: decimal_channel(rgba.green),
        blue: decimal_channel(rgba.blue),
        alpha: decimal_channel(rgba.alpha),
    }
}

fn clamp_unit(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 1.0)
    }
}

fn to_byte(c: f64) -> u8 {
    (clamp_unit(c) * 255.0).round() as u8
}
