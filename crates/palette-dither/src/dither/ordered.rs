//! Bayer ordered dithering algorithm.
//!
//! Ordered dithering perturbs every pixel by a threshold that depends only
//! on its position, then matches it against the palette. No error moves
//! between pixels, so the result does not depend on visiting order and the
//! texture repeats every four pixels in each direction.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::palette::Palette;

use super::Dither;

/// Canonical 4x4 Bayer threshold matrix (values 0..16), indexed `[y][x]`.
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Amplitude applied to the normalized matrix, in 8-bit channel units.
pub const BAYER_SCALE: f32 = 64.0;

/// Bayer 4x4 ordered dithering.
///
/// Each threshold is `(BAYER_4X4[y % 4][x % 4] / 16 - 0.5) * 64`, so
/// offsets run from -32 to +28 in steps of 4 and are added to all three
/// channels before clamping and matching.
///
/// # Example
///
/// ```
/// use palette_dither::{Bayer, Dither, Palette, PixelBuffer, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let image = PixelBuffer::filled(4, 4, Rgb::new(128, 128, 128));
///
/// let out = Bayer.dither(&image, &palette);
/// assert!(out.pixels().iter().all(|p| palette.contains(*p)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Bayer;

impl Bayer {
    /// Threshold offset for the pixel at column `x`, row `y`.
    #[inline]
    pub fn threshold(x: usize, y: usize) -> f32 {
        (BAYER_4X4[y % 4][x % 4] as f32 / 16.0 - 0.5) * BAYER_SCALE
    }

    /// Quantize a single pixel. Depends on nothing but its arguments.
    #[inline]
    pub fn dither_pixel(x: usize, y: usize, pixel: Rgb, palette: &Palette) -> Rgb {
        let t = Self::threshold(x, y);
        let [r, g, b] = pixel.to_f32();
        palette.nearest(Rgb::from_f32_clamped([r + t, g + t, b + t]))
    }
}

impl Dither for Bayer {
    fn dither_with_progress(
        &self,
        image: &PixelBuffer,
        palette: &Palette,
        progress: &mut dyn FnMut(usize, usize),
    ) -> PixelBuffer {
        let width = image.width();
        let height = image.height();
        let mut output = Vec::with_capacity(image.pixels().len());

        for y in 0..height {
            let row = &image.pixels()[y * width..(y + 1) * width];
            output.extend(
                row.iter()
                    .enumerate()
                    .map(|(x, &pixel)| Self::dither_pixel(x, y, pixel, palette)),
            );
            progress(y + 1, height);
        }

        image.derive(output)
    }
}
