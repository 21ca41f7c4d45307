//! RGB colors as written in `theme.conf` files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure white, used for borders and glyphs.
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    /// Pure black.
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Parse a color in either accepted textual form.
    ///
    /// Accepts `#RRGGBB` hex or a comma separated `r,g,b` decimal triple.
    /// Returns `None` on anything else.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        if value.starts_with('#') && value.len() == 7 {
            return parse_hex_color(value).ok();
        }

        let parts: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() != 3 {
            return None;
        }

        let r = parts[0].parse::<u8>().ok()?;
        let g = parts[1].parse::<u8>().ok()?;
        let b = parts[2].parse::<u8>().ok()?;
        Some(Rgb(r, g, b))
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Convert to an opaque RGBA pixel.
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.0, self.1, self.2, 255])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(color: Rgb) -> Self {
        (color.0, color.1, color.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

/// Error returned when a string is not a valid color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}'", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(Error::custom)
    }
}

fn parse_hex_color(hex: &str) -> Result<Rgb, &'static str> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err("Hex color must be 6 characters");
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;
    Ok(Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_and_hex_agree() {
        assert_eq!(Rgb::parse("255,0,0"), Some(Rgb(255, 0, 0)));
        assert_eq!(Rgb::parse("#FF0000"), Some(Rgb(255, 0, 0)));
        assert_eq!(Rgb::parse(" 255 , 0 , 0 "), Rgb::parse("#ff0000"));
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert_eq!(Rgb::parse("not-a-color"), None);
        assert_eq!(Rgb::parse(""), None);
        assert_eq!(Rgb::parse("#FFF"), None);
        assert_eq!(Rgb::parse("#GG0000"), None);
        assert_eq!(Rgb::parse("1,2"), None);
        assert_eq!(Rgb::parse("1,2,3,4"), None);
        assert_eq!(Rgb::parse("300,0,0"), None);
        assert_eq!(Rgb::parse("-1,0,0"), None);
    }

    #[test]
    fn test_empty_parts_are_skipped() {
        assert_eq!(Rgb::parse("10,,20,30"), Some(Rgb(10, 20, 30)));
    }

    #[test]
    fn test_hex_deserialize() {
        #[derive(Deserialize)]
        struct Holder {
            color: Rgb,
        }

        let holder: Holder = toml::from_str("color = \"#64c864\"").unwrap();
        assert_eq!(holder.color, Rgb(100, 200, 100));
        assert_eq!(holder.color.to_hex(), "#64c864");
    }
}
