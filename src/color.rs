use crate::error::{Error, Result};

/// Parses `#rrggbb` (the `#` is optional) into normalized RGBA with alpha 1,
/// the format an `<input type="color">` reports.
pub fn parse_hex_color(hex: &str) -> Result<[f32; 4]> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(hex.to_string()));
    }

    let channel = |i: usize| -> Result<f32> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|v| f32::from(v) / 255.0)
            .map_err(|_| Error::InvalidColor(hex.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?, 1.0])
}
