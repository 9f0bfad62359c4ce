//! Output encodings for display hardware.
//!
//! - **RGB565 / BGR565** ([`encode_565`]): 16 bits per pixel, 5 bits red,
//!   6 bits green, 5 bits blue, each value little-endian. Works on any
//!   [`PixelBuffer`](crate::PixelBuffer), dithered or not. Transparent
//!   pixels are either composited over black or replaced by a color key
//!   ([`AlphaMode`]).

mod rgb565;

pub use rgb565::{
    encode_565, pack565, unpack565, AlphaMode, ChannelOrder, UnknownChannelOrderError,
    DEFAULT_KEY_THRESHOLD, TRANSPARENT_KEY,
};
