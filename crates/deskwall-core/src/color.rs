//! RGB hex decoding for the solid background color.

use crate::errors::{ResolveError, Result};

/// An RGB color with each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    /// Decode a 6-hex-digit color code such as `1e90ff`.
    ///
    /// Anything other than exactly six hex digits is rejected; a malformed
    /// payload decodes no channel at all.
    ///
    /// # Errors
    ///
    /// - `InvalidColor` — payload is not exactly six hex digits
    pub fn from_hex(input: &str) -> Result<Self> {
        if input.len() != 6 || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ResolveError::InvalidColor {
                input: input.to_string(),
            });
        }
        let channel = |lo: usize| {
            let byte = u8::from_str_radix(&input[lo..lo + 2], 16).unwrap_or_default();
            f64::from(byte) / 255.0
        };
        Ok(Self {
            red: channel(0),
            green: channel(2),
            blue: channel(4),
        })
    }

    /// Encode back to a 6-hex-digit code, rounding each channel to 8 bits.
    pub fn to_hex(&self) -> String {
        let byte = |channel: f64| (channel * 255.0).round() as u8;
        format!(
            "{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }
}
