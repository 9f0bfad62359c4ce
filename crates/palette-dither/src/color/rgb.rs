//! 8-bit RGB color type

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color as three 8-bit channel intensities.
///
/// `Rgb` is a value type: two colors are the same color exactly when their
/// channels are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels as floats, the working representation of the ditherers.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Round each channel to the nearest integer and clamp it to 0..=255.
    ///
    /// Working values may leave the 8-bit range while error accumulates;
    /// this is the only way back into it.
    ///
    /// # Example
    /// ```
    /// use palette_dither::Rgb;
    /// assert_eq!(Rgb::from_f32_clamped([-12.0, 127.5, 301.2]), Rgb::new(0, 128, 255));
    /// ```
    #[inline]
    pub fn from_f32_clamped(value: [f32; 3]) -> Self {
        let channel = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        Self::new(channel(value[0]), channel(value[1]), channel(value[2]))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from hex text.
    ///
    /// Accepts `RRGGBB` with an optional leading `#`. Only the first six
    /// characters after the `#` are read; anything after them is ignored,
    /// so `"FF8800 orange"` parses as `#FF8800`. Surrounding whitespace is
    /// trimmed and parsing is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() < 6 {
            return Err(ParseColorError::TooShort {
                len: s.chars().count(),
            });
        }
        let digits = &s.as_bytes()[..6];
        if !digits.iter().all(u8::is_ascii_hexdigit) {
            return Err(ParseColorError::InvalidHex {
                text: String::from_utf8_lossy(digits).into_owned(),
            });
        }

        // All six bytes are ASCII hex digits, so the byte slices are valid str
        let channel = |i: usize| {
            u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| ParseColorError::InvalidHex {
                text: s[..6].to_string(),
            })
        };
        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        Ok(Self::new(r, g, b))
    }
}
