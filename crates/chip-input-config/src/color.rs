/// Hex color type stored as `"#RRGGBB"` / `"#RRGGBBAA"` strings in the config file.
///
/// The short `"#RGB"` form is accepted on input and expanded.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            3 => {
                let mut channels = digits.chars().map(|c| c.to_digit(16).map(|v| (v * 17) as u8));
                let r = channels.next()??;
                let g = channels.next()??;
                let b = channels.next()??;
                Some(Self::rgb(r, g, b))
            }
            6 | 8 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                let a = if digits.len() == 8 { channel(6)? } else { 255 };
                Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        let rgb = format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b);
        if self.a == 255 {
            rgb
        } else {
            format!("{rgb}{:02X}", self.a)
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s}")))
    }
}
