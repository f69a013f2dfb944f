//! Colour type, parsing and per-channel arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShapeError};

/// An RGB colour value.
///
/// Parsed from `#RGB` or `#RRGGBB` and always displayed as upper-case
/// `#RRGGBB`. Serialized as its hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    ///
    /// The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                let digits: Vec<u8> = hex
                    .chars()
                    .map(parse_hex_digit)
                    .collect::<Result<_>>()?;
                Ok(Self::rgb(
                    digits[0] << 4 | digits[0],
                    digits[1] << 4 | digits[1],
                    digits[2] << 4 | digits[2],
                ))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Build a colour from an `[r, g, b]` triple.
    pub fn from_rgb(channels: [u8; 3]) -> Self {
        Self::rgb(channels[0], channels[1], channels[2])
    }

    /// Convert to an `[r, g, b]` triple.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The complementary colour (`255 - c` per channel).
    pub fn invert(self) -> Self {
        Self::rgb(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Shift every channel by `percent` of 255, clamped to `[0, 255]`.
    ///
    /// Negative percentages darken.
    pub fn lighten(self, percent: f64) -> Self {
        let amount = (255.0 * percent / 100.0).round() as i32;
        let shift = |c: u8| (c as i32 + amount).clamp(0, 255) as u8;
        Self::rgb(shift(self.r), shift(self.g), shift(self.b))
    }
}

/// Linearly interpolate `steps` colours from `from` to `to`, inclusive.
///
/// Each channel is stepped independently with `t = i / (steps - 1)`.
/// A single step yields just `from`.
pub fn interpolate_colours(steps: usize, from: Colour, to: Colour) -> Result<Vec<Colour>> {
    match steps {
        0 => Err(ShapeError::InvalidParameter {
            message: "cannot interpolate zero colours".to_string(),
            help: Some("Request at least one step".to_string()),
        }),
        1 => Ok(vec![from]),
        _ => {
            let last = (steps - 1) as f64;
            let lerp = |a: u8, b: u8, t: f64| {
                (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
            };
            Ok((0..steps)
                .map(|i| {
                    let t = i as f64 / last;
                    Colour::rgb(lerp(from.r, to.r, t), lerp(from.g, to.g, t), lerp(from.b, to.b, t))
                })
                .collect())
        }
    }
}

impl FromStr for Colour {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = ShapeError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn invalid_hex(s: &str) -> ShapeError {
    ShapeError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| ShapeError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| ShapeError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0xBB, 0xCC));
        assert_eq!(c.to_string(), "#AABBCC");
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Colour::from_hex("00ff00").unwrap();
        assert_eq!(c, Colour::rgb(0, 255, 0));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#FF000080").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_rgb_round_trip_all_channels() {
        for v in 0..=255u8 {
            let triple = [v, 255 - v, v / 2];
            let parsed = Colour::from_hex(&Colour::from_rgb(triple).to_string()).unwrap();
            assert_eq!(parsed.to_rgb(), triple);
        }
        assert_eq!(Colour::from_rgb([10, 20, 30]).to_rgb(), [10, 20, 30]);
    }

    #[test]
    fn test_invert() {
        assert_eq!(Colour::BLACK.invert(), Colour::WHITE);
        assert_eq!(Colour::rgb(0x12, 0x80, 0xFF).invert(), Colour::rgb(0xED, 0x7F, 0x00));
    }

    #[test]
    fn test_lighten_clamps() {
        let c = Colour::rgb(250, 100, 0);
        assert_eq!(c.lighten(10.0), Colour::rgb(255, 126, 26));
        assert_eq!(c.lighten(-10.0), Colour::rgb(224, 74, 0));
        assert_eq!(Colour::WHITE.lighten(50.0), Colour::WHITE);
    }

    #[test]
    fn test_interpolate_monotonic() {
        let colours = interpolate_colours(5, Colour::BLACK, Colour::WHITE).unwrap();
        assert_eq!(colours.len(), 5);
        assert_eq!(colours[0], Colour::BLACK);
        assert_eq!(colours[4], Colour::WHITE);
        for pair in colours.windows(2) {
            assert!(pair[1].r > pair[0].r);
            assert!(pair[1].g > pair[0].g);
            assert!(pair[1].b > pair[0].b);
        }
    }

    #[test]
    fn test_interpolate_single_and_zero() {
        let red = Colour::rgb(255, 0, 0);
        assert_eq!(interpolate_colours(1, red, Colour::WHITE).unwrap(), vec![red]);
        assert!(matches!(
            interpolate_colours(0, red, Colour::WHITE),
            Err(ShapeError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let c: Colour = serde_yaml::from_str("\"#f80\"").unwrap();
        assert_eq!(c, Colour::rgb(0xFF, 0x88, 0x00));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#FF8800\"");
    }
}
