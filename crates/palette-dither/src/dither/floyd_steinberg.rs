//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Pixels are visited in strict raster order. Each pixel is replaced with
//! its nearest palette color and the difference is pushed forward to the
//! neighbors that have not been visited yet, so the average tone of an
//! area survives quantization.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::palette::Palette;

use super::{Dither, Kernel, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 east, 3/16 south-west, 5/16 south, 1/16 south-east.
/// Shares that would land outside the image are dropped.
///
/// The scan is sequential by construction: every pixel depends on error
/// accumulated from its west, north-west, north and north-east neighbors.
///
/// # Example
///
/// ```
/// use palette_dither::{Dither, FloydSteinberg, Palette, PixelBuffer, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let image = PixelBuffer::new(2, 1, vec![Rgb::new(10, 10, 10), Rgb::new(245, 245, 245)]).unwrap();
///
/// let out = FloydSteinberg.dither(&image, &palette);
/// assert_eq!(out.pixels(), &[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither_with_progress(
        &self,
        image: &PixelBuffer,
        palette: &Palette,
        progress: &mut dyn FnMut(usize, usize),
    ) -> PixelBuffer {
        dither_with_kernel(image, palette, &FLOYD_STEINBERG, progress)
    }
}

/// Error diffusion with an arbitrary forward-pointing kernel.
///
/// The in-flight values live in a working buffer of `[f32; 3]` that only
/// this function owns. Finalized colors are appended to a separate output
/// vector in scan order; nothing reads them back, so a finished pixel can
/// never pick up more error.
///
/// `progress` is called with `(rows_done, total_rows)` after each row.
pub fn dither_with_kernel(
    image: &PixelBuffer,
    palette: &Palette,
    kernel: &Kernel,
    progress: &mut dyn FnMut(usize, usize),
) -> PixelBuffer {
    let width = image.width();
    let height = image.height();

    let mut working: Vec<[f32; 3]> = image.pixels().iter().map(|p| p.to_f32()).collect();
    let mut output: Vec<Rgb> = Vec::with_capacity(working.len());

    for y in 0..height {
        for x in 0..width {
            let value = working[y * width + x];

            // Accumulated error can push values outside 0..=255; the
            // matcher only sees the clamped integer color
            let chosen = palette.nearest(Rgb::from_f32_clamped(value));
            output.push(chosen);

            // Error is measured from the unclamped working value
            let target = chosen.to_f32();
            let error = [
                value[0] - target[0],
                value[1] - target[1],
                value[2] - target[2],
            ];

            for (nx, ny, share) in kernel.shares(x, y, width, height) {
                let cell = &mut working[ny * width + nx];
                cell[0] += error[0] * share;
                cell[1] += error[1] * share;
                cell[2] += error[2] * share;
            }
        }
        progress(y + 1, height);
    }

    image.derive(output)
}
