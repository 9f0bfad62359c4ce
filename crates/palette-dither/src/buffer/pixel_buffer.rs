//! Row-major RGB grid with optional alpha.

use super::error::BufferError;
use crate::color::Rgb;

/// A rectangular grid of colors, stored row by row from the top-left.
///
/// The alpha plane, when present, has one value per pixel and is never
/// consulted by color matching. Ditherers copy it to their output as-is.
///
/// # Example
///
/// ```
/// use palette_dither::{PixelBuffer, Rgb};
///
/// let buffer = PixelBuffer::new(2, 1, vec![Rgb::new(10, 10, 10), Rgb::new(245, 245, 245)]).unwrap();
/// assert_eq!(buffer.pixel(1, 0), Rgb::new(245, 245, 245));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    alpha: Option<Vec<u8>>,
}

fn check_len(width: usize, height: usize, per_pixel: usize, actual: usize) -> Result<(), BufferError> {
    let expected = width * height * per_pixel;
    if actual != expected {
        return Err(BufferError::DimensionMismatch {
            width,
            height,
            expected,
            actual,
        });
    }
    Ok(())
}

impl PixelBuffer {
    /// Create an opaque buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::DimensionMismatch`] unless
    /// `pixels.len() == width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, BufferError> {
        check_len(width, height, 1, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
            alpha: None,
        })
    }

    /// Create a buffer with a per-pixel alpha plane.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::DimensionMismatch`] if either plane has the
    /// wrong length.
    pub fn with_alpha(
        width: usize,
        height: usize,
        pixels: Vec<Rgb>,
        alpha: Vec<u8>,
    ) -> Result<Self, BufferError> {
        check_len(width, height, 1, pixels.len())?;
        check_len(width, height, 1, alpha.len())?;
        Ok(Self {
            width,
            height,
            pixels,
            alpha: Some(alpha),
        })
    }

    /// Create a buffer from packed RGB bytes (`[R, G, B, R, G, B, ...]`).
    pub fn from_rgb_bytes(width: usize, height: usize, data: &[u8]) -> Result<Self, BufferError> {
        check_len(width, height, 3, data.len())?;
        let pixels = data
            .chunks_exact(3)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Create a buffer from packed RGBA bytes, splitting off the alpha plane.
    pub fn from_rgba_bytes(width: usize, height: usize, data: &[u8]) -> Result<Self, BufferError> {
        check_len(width, height, 4, data.len())?;
        let (pixels, alpha): (Vec<Rgb>, Vec<u8>) = data
            .chunks_exact(4)
            .map(|p| (Rgb::new(p[0], p[1], p[2]), p[3]))
            .unzip();
        Self::with_alpha(width, height, pixels, alpha)
    }

    /// A `width` x `height` buffer filled with one color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
            alpha: None,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the buffer has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The alpha plane, if any.
    #[inline]
    pub fn alpha(&self) -> Option<&[u8]> {
        self.alpha.as_deref()
    }

    /// The pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        // chunks(0) panics; a zero-width buffer has no rows to yield
        self.pixels.chunks(self.width.max(1))
    }

    /// Packed RGB bytes, alpha dropped.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }

    /// Packed RGBA bytes; opaque when the buffer has no alpha plane.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for (i, p) in self.pixels.iter().enumerate() {
            let a = self.alpha.as_ref().map_or(255, |alpha| alpha[i]);
            rgba.extend_from_slice(&[p.r, p.g, p.b, a]);
        }
        rgba
    }

    /// Consume the buffer and return its pixels.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    /// Build an output buffer of the same shape, carrying over the alpha.
    pub(crate) fn derive(&self, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Self {
            width: self.width,
            height: self.height,
            pixels,
            alpha: self.alpha.clone(),
        }
    }
}
