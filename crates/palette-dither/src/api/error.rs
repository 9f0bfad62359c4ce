//! Unified error type for the public API.

use crate::buffer::BufferError;
use crate::palette::{PaletteError, ParseColorError};

/// Every error the crate can produce, for `?` propagation in callers.
///
/// # Example
///
/// ```
/// use palette_dither::{DitherError, Palette, Rgb};
///
/// fn two_tone() -> Result<Palette, DitherError> {
///     let black: Rgb = "#000000".parse()?;
///     let white: Rgb = "FFFFFF".parse()?;
///     Ok(Palette::new(&[black, white])?)
/// }
/// assert_eq!(two_tone().unwrap().len(), 2);
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DitherError {
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    #[error("pixel buffer error: {0}")]
    Buffer(#[from] BufferError),
}
