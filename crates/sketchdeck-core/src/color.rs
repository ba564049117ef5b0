//! CSS-style hex color parsing.

use peniko::Color;
use thiserror::Error;

/// Error returned when a color string is not a `#rrggbb` hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color {0:?}, expected #rrggbb")]
pub struct ColorParseError(pub String);

/// Parse a CSS color string like "#646cff".
pub fn parse_hex_color(s: &str) -> Result<Color, ColorParseError> {
    let trimmed = s.trim();
    let hex = trimmed
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.is_ascii())
        .ok_or_else(|| ColorParseError(s.to_string()))?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError(s.to_string()))
    };
    Ok(Color::from_rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255))
}

/// Color channels as `[r, g, b, a]` bytes.
pub fn rgba8(color: Color) -> [u8; 4] {
    let rgba = color.to_rgba8();
    [rgba.r, rgba.g, rgba.b, rgba.a]
}

/// Format a color as a lowercase `#rrggbb` string (alpha is dropped).
pub fn to_hex(color: Color) -> String {
    let [r, g, b, _] = rgba8(color);
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let color = parse_hex_color("#646cff").unwrap();
        assert_eq!(rgba8(color), [0x64, 0x6c, 0xff, 255]);
    }

    #[test]
    fn test_parse_uppercase_and_whitespace() {
        let color = parse_hex_color("  #FF4757 ").unwrap();
        assert_eq!(to_hex(color), "#ff4757");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_hex_color("646cff").is_err());
        assert!(parse_hex_color("#64c").is_err());
        assert!(parse_hex_color("#zz6cff").is_err());
        assert!(parse_hex_color("#éé6cf").is_err());
    }
}
