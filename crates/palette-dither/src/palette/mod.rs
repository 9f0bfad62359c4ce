//! Palette types and utilities
//!
//! This module provides the [`Palette`] type with its nearest-color
//! matcher, the line-oriented hex palette parser, and the error types for
//! parsing and validation.

mod error;
mod palette;
mod parse;

pub use error::{PaletteError, ParseColorError};
pub use palette::{nearest, Palette, DEFAULT_PALETTE, LUMA_WEIGHTS};
pub use parse::{MalformedLine, ParsedPalette};
