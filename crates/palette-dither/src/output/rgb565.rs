//! 16-bit 5/6/5 pixel packing.

use std::fmt;
use std::str::FromStr;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;

/// Which channel occupies the high five bits of a packed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ChannelOrder {
    /// `RRRRRGGG GGGBBBBB`
    #[default]
    Rgb,
    /// `BBBBBGGG GGGRRRRR`, for panels wired blue-first
    Bgr,
}

impl ChannelOrder {
    /// File extension conventionally used for this layout.
    pub fn extension(self) -> &'static str {
        match self {
            ChannelOrder::Rgb => "rgb565",
            ChannelOrder::Bgr => "bgr565",
        }
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelOrder::Rgb => f.write_str("RGB565"),
            ChannelOrder::Bgr => f.write_str("BGR565"),
        }
    }
}

/// Error returned when a channel order name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown channel order '{0}' (expected rgb or bgr)")]
pub struct UnknownChannelOrderError(pub String);

impl FromStr for ChannelOrder {
    type Err = UnknownChannelOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("rgb") || s.eq_ignore_ascii_case("rgb565") => {
                Ok(ChannelOrder::Rgb)
            }
            s if s.eq_ignore_ascii_case("bgr") || s.eq_ignore_ascii_case("bgr565") => {
                Ok(ChannelOrder::Bgr)
            }
            other => Err(UnknownChannelOrderError(other.to_string())),
        }
    }
}

/// Packed value firmware sprite blitters skip as transparent (magenta).
///
/// Magenta is symmetric in red and blue, so the key is the same in both
/// channel orders.
pub const TRANSPARENT_KEY: u16 = 0xF81F;

/// Alpha below which [`AlphaMode::ColorKey`] writes the key.
pub const DEFAULT_KEY_THRESHOLD: u8 = 128;

/// How pixels with an alpha plane are flattened to 16 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlphaMode {
    /// Composite over black: `c * a / 255`, rounded.
    #[default]
    OverBlack,
    /// Write `key` for pixels with alpha below `threshold`, and the
    /// unmodified color otherwise.
    ColorKey { threshold: u8, key: u16 },
}

impl AlphaMode {
    /// Color keying with magenta at alpha < 128.
    pub const fn color_key() -> Self {
        AlphaMode::ColorKey {
            threshold: DEFAULT_KEY_THRESHOLD,
            key: TRANSPARENT_KEY,
        }
    }

    #[inline]
    fn pack(self, color: Rgb, alpha: u8, order: ChannelOrder) -> u16 {
        match self {
            AlphaMode::OverBlack => pack565(over_black(color, alpha), order),
            AlphaMode::ColorKey { threshold, key } if alpha < threshold => key,
            AlphaMode::ColorKey { .. } => pack565(color, order),
        }
    }
}

/// Pack one color into 16 bits by dropping the low bits of each channel.
///
/// # Example
/// ```
/// use palette_dither::{pack565, ChannelOrder, Rgb};
/// assert_eq!(pack565(Rgb::new(255, 0, 0), ChannelOrder::Rgb), 0xF800);
/// assert_eq!(pack565(Rgb::new(255, 0, 0), ChannelOrder::Bgr), 0x001F);
/// ```
#[inline]
pub fn pack565(color: Rgb, order: ChannelOrder) -> u16 {
    let r5 = (color.r >> 3) as u16;
    let g6 = (color.g >> 2) as u16;
    let b5 = (color.b >> 3) as u16;
    match order {
        ChannelOrder::Rgb => (r5 << 11) | (g6 << 5) | b5,
        ChannelOrder::Bgr => (b5 << 11) | (g6 << 5) | r5,
    }
}

/// Expand a packed pixel back to 8 bits per channel.
///
/// The high bits are replicated into the low bits, so full-scale values
/// come back as 255.
#[inline]
pub fn unpack565(value: u16, order: ChannelOrder) -> Rgb {
    let high5 = ((value >> 11) & 0x1F) as u8;
    let g6 = ((value >> 5) & 0x3F) as u8;
    let low5 = (value & 0x1F) as u8;
    let expand5 = |v: u8| (v << 3) | (v >> 2);
    let g = (g6 << 2) | (g6 >> 4);
    match order {
        ChannelOrder::Rgb => Rgb::new(expand5(high5), g, expand5(low5)),
        ChannelOrder::Bgr => Rgb::new(expand5(low5), g, expand5(high5)),
    }
}

/// Serialize a buffer as little-endian 16-bit pixels in row-major order.
///
/// Buffers without an alpha plane are packed as is. Otherwise `alpha`
/// decides: [`AlphaMode::OverBlack`] turns fully transparent pixels into
/// `0x0000`, [`AlphaMode::ColorKey`] turns them into the key.
pub fn encode_565(image: &PixelBuffer, order: ChannelOrder, alpha: AlphaMode) -> Vec<u8> {
    let mut out = Vec::with_capacity(image.pixels().len() * 2);
    let plane = image.alpha();
    for (i, &pixel) in image.pixels().iter().enumerate() {
        let value = match plane {
            Some(plane) => alpha.pack(pixel, plane[i], order),
            None => pack565(pixel, order),
        };
        out.extend_from_slice(&value.to_le_bytes());
    }
    out
}

#[inline]
fn over_black(color: Rgb, alpha: u8) -> Rgb {
    let scale = |c: u8| ((c as u16 * alpha as u16 + 127) / 255) as u8;
    Rgb::new(scale(color.r), scale(color.g), scale(color.b))
}
