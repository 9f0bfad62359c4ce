#![allow(clippy::module_inception)]

//! palette-dither: fixed-palette quantization for small displays
//!
//! Reduces full-color images to a short list of display colors, either by
//! nearest-color matching alone or with one of two dithering strategies,
//! and packs the result for 16-bit RGB565 panels.
//!
//! # Quick Start
//!
//! The [`Ditherer`] builder is the primary entry point:
//!
//! ```
//! use palette_dither::{DitherMethod, Ditherer, Palette, PixelBuffer, Rgb};
//!
//! let palette = Palette::parse_hex("# two tones\n000000\nFFFFFF\n").palette;
//! let image = PixelBuffer::filled(4, 2, Rgb::new(128, 128, 128));
//!
//! let ditherer = Ditherer::new(palette).method(DitherMethod::Diffusion);
//! let result = ditherer.dither(&image);
//!
//! assert_eq!(result.width(), 4);
//! assert_eq!(result.height(), 2);
//! ```
//!
//! # Palettes
//!
//! A [`Palette`] is an ordered, non-empty list of [`Rgb`] colors. Palette
//! files hold one hex color per line; see [`Palette::parse_hex`] for the
//! exact rules. A file with no usable colors yields the built-in 16-color
//! [`DEFAULT_PALETTE`].
//!
//! Matching uses the luma-weighted squared distance
//!
//! ```text
//! d = 0.299 * dr^2 + 0.587 * dg^2 + 0.114 * db^2
//! ```
//!
//! and ties go to the entry that appears first in the palette.
//!
//! # Dithering Algorithms
//!
//! - [`FloydSteinberg`]: error diffusion, strict left-to-right,
//!   top-to-bottom scan. Output depends on scan order.
//! - [`Bayer`]: 4x4 ordered dithering. Each pixel depends only on its own
//!   color and position.
//!
//! # RGB565
//!
//! [`encode_565`] serializes any [`PixelBuffer`] as little-endian 16-bit
//! pixels in either [`ChannelOrder`]. Transparency is flattened per
//! [`AlphaMode`]: over black, or to the magenta key [`TRANSPARENT_KEY`]
//! that sprite blitters skip.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;

#[cfg(test)]
mod domain_tests;

pub use api::{DitherError, Ditherer, DEFAULT_PROGRESS_ROWS};
pub use buffer::{BufferError, PixelBuffer};
pub use color::Rgb;
pub use dither::{Bayer, Dither, DitherMethod, FloydSteinberg, UnknownMethodError};
pub use output::{
    encode_565, pack565, unpack565, AlphaMode, ChannelOrder, UnknownChannelOrderError,
    DEFAULT_KEY_THRESHOLD, TRANSPARENT_KEY,
};
pub use palette::{
    nearest, MalformedLine, Palette, PaletteError, ParseColorError, ParsedPalette,
    DEFAULT_PALETTE,
};
