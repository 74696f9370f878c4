//! Color values shared by map styles and legends.

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Build from a packed 0xRRGGBB value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #RRGGBB
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    /// Parse `#RRGGBB`, `RRGGBB` or the short `#RGB` form.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => bail!("Invalid color {:?}: expected #RRGGBB or #RGB", s),
        };
        let packed = u32::from_str_radix(&expanded, 16)
            .map_err(|e| anyhow!("Invalid color {:?}: {}", s, e))?;
        Ok(Rgb::from_hex(packed))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_uppercase_hex() {
        assert_eq!(Rgb::from_hex(0x4CAF50).to_string(), "#4CAF50");
        assert_eq!(Rgb::new(0, 0, 255).to_string(), "#0000FF");
    }

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!("#9e9eFF".parse::<Rgb>().unwrap(), Rgb::from_hex(0x9E9EFF));
        assert_eq!("FFC107".parse::<Rgb>().unwrap(), Rgb::from_hex(0xFFC107));
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#GGGGGG".parse::<Rgb>().is_err());
    }

    #[test]
    fn serde_uses_css_strings() {
        let json = serde_json::to_string(&Rgb::from_hex(0x2196F3)).unwrap();
        assert_eq!(json, "\"#2196F3\"");
        let back: Rgb = serde_json::from_str("\"#e91e63\"").unwrap();
        assert_eq!(back, Rgb::from_hex(0xE91E63));
    }
}
