//! Dithering algorithms.
//!
//! Two strategies reduce an image to a palette:
//!
//! - **Floyd-Steinberg** ([`FloydSteinberg`]): error diffusion in strict
//!   raster order. Smooth gradients, inherently sequential.
//! - **Bayer** ([`Bayer`]): ordered dithering with a 4x4 threshold matrix.
//!   Regular texture, every pixel independent.
//!
//! Both implement [`Dither`] and take the same input shape, so either can
//! stand in for the other. [`DitherMethod`] names them for configuration.
//!
//! # Example
//!
//! ```
//! use palette_dither::{Bayer, Dither, FloydSteinberg, Palette, PixelBuffer, Rgb};
//!
//! let palette = Palette::default_palette();
//! let image = PixelBuffer::filled(8, 8, Rgb::new(90, 140, 200));
//!
//! for ditherer in [&FloydSteinberg as &dyn Dither, &Bayer] {
//!     let out = ditherer.dither(&image, &palette);
//!     assert_eq!((out.width(), out.height()), (8, 8));
//! }
//! ```

mod floyd_steinberg;
mod kernel;
mod ordered;

use std::fmt;
use std::str::FromStr;

pub use floyd_steinberg::{dither_with_kernel, FloydSteinberg};
pub use kernel::*;
pub use ordered::{Bayer, BAYER_4X4, BAYER_SCALE};

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

/// Trait for palette dithering algorithms.
///
/// Implementors turn a full-color [`PixelBuffer`] into one of the same
/// dimensions whose every pixel is an entry of `palette`. The input is
/// only borrowed; the result is always a new buffer.
pub trait Dither {
    /// Dither `image`, calling `progress(rows_done, total_rows)` after each
    /// completed row.
    fn dither_with_progress(
        &self,
        image: &PixelBuffer,
        palette: &Palette,
        progress: &mut dyn FnMut(usize, usize),
    ) -> PixelBuffer;

    /// Dither `image` without progress reporting.
    fn dither(&self, image: &PixelBuffer, palette: &Palette) -> PixelBuffer {
        self.dither_with_progress(image, palette, &mut |_, _| {})
    }
}

/// Dither algorithm selection for the [`Ditherer`](crate::Ditherer) façade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum DitherMethod {
    /// Floyd-Steinberg error diffusion.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "floyd", alias = "floyd-steinberg"))]
    Diffusion,

    /// Bayer 4x4 ordered dithering.
    #[cfg_attr(feature = "serde", serde(alias = "bayer"))]
    Ordered,
}

impl DitherMethod {
    /// The algorithm implementing this method.
    pub fn algorithm(self) -> &'static dyn Dither {
        match self {
            DitherMethod::Diffusion => &FloydSteinberg,
            DitherMethod::Ordered => &Bayer,
        }
    }
}

impl fmt::Display for DitherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherMethod::Diffusion => f.write_str("diffusion"),
            DitherMethod::Ordered => f.write_str("ordered"),
        }
    }
}

/// Error returned when a dither method name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dither method '{0}' (expected diffusion, floyd, floyd-steinberg, ordered or bayer)")]
pub struct UnknownMethodError(pub String);

impl FromStr for DitherMethod {
    type Err = UnknownMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("diffusion")
                || s.eq_ignore_ascii_case("floyd")
                || s.eq_ignore_ascii_case("floyd-steinberg") =>
            {
                Ok(DitherMethod::Diffusion)
            }
            s if s.eq_ignore_ascii_case("ordered") || s.eq_ignore_ascii_case("bayer") => {
                Ok(DitherMethod::Ordered)
            }
            other => Err(UnknownMethodError(other.to_string())),
        }
    }
}
