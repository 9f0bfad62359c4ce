//! Ditherer builder, the primary entry point for the crate.
//!
//! [`Ditherer`] binds a [`Palette`] to a [`DitherMethod`] and reports row
//! progress through either a caller-supplied callback or `tracing`.

use crate::buffer::PixelBuffer;
use crate::dither::DitherMethod;
use crate::palette::Palette;

use super::DitherError;

/// Rows between progress log lines when no callback is installed.
pub const DEFAULT_PROGRESS_ROWS: usize = 50;

type ProgressFn = Box<dyn Fn(usize, usize) + Send + Sync>;

/// High-level dithering builder.
///
/// - Constructor requires a [`Palette`], so there is no invalid state
/// - Configuration methods consume and return `self`
/// - [`dither()`](Self::dither) takes `&self`, so one builder serves many
///   images
///
/// # Example
///
/// ```
/// use palette_dither::{DitherMethod, Ditherer, Palette, PixelBuffer, Rgb};
///
/// let ditherer = Ditherer::new(Palette::default_palette()).method(DitherMethod::Ordered);
///
/// let image = PixelBuffer::filled(4, 4, Rgb::new(128, 128, 128));
/// let out = ditherer.dither(&image);
///
/// assert_eq!((out.width(), out.height()), (4, 4));
/// assert!(out.pixels().iter().all(|&p| ditherer.palette().contains(p)));
/// ```
pub struct Ditherer {
    palette: Palette,
    method: DitherMethod,
    progress_rows: usize,
    on_progress: Option<ProgressFn>,
}

impl Ditherer {
    /// Create a ditherer using Floyd-Steinberg diffusion.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            method: DitherMethod::default(),
            progress_rows: DEFAULT_PROGRESS_ROWS,
            on_progress: None,
        }
    }

    /// Set the dithering algorithm.
    #[inline]
    pub fn method(mut self, method: DitherMethod) -> Self {
        self.method = method;
        self
    }

    /// Rows between logged progress lines. Zero disables them.
    ///
    /// Ignored once [`on_progress`](Self::on_progress) installs a callback.
    #[inline]
    pub fn progress_rows(mut self, rows: usize) -> Self {
        self.progress_rows = rows;
        self
    }

    /// Call `callback(rows_done, total_rows)` after every row instead of
    /// logging.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.on_progress = Some(Box::new(callback));
        self
    }

    /// The palette every output pixel is drawn from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The algorithm [`dither()`](Self::dither) will run.
    pub fn selected_method(&self) -> DitherMethod {
        self.method
    }

    /// Dither `image` into a buffer of the same size whose pixels are all
    /// palette entries. Alpha, if present, is carried through unchanged.
    pub fn dither(&self, image: &PixelBuffer) -> PixelBuffer {
        tracing::debug!(
            method = %self.method,
            palette_size = self.palette.len(),
            width = image.width(),
            height = image.height(),
            "Dithering image"
        );

        let algorithm = self.method.algorithm();
        match &self.on_progress {
            Some(callback) => {
                algorithm.dither_with_progress(image, &self.palette, &mut |done, total| {
                    callback(done, total)
                })
            }
            None => {
                let every = self.progress_rows;
                algorithm.dither_with_progress(image, &self.palette, &mut |done, total| {
                    if every > 0 && (done % every == 0 || done == total) {
                        tracing::debug!(rows = done, total, "Dither progress");
                    }
                })
            }
        }
    }

    /// Dither tightly packed 8-bit RGB bytes.
    pub fn dither_rgb_bytes(
        &self,
        width: usize,
        height: usize,
        data: &[u8],
    ) -> Result<PixelBuffer, DitherError> {
        let image = PixelBuffer::from_rgb_bytes(width, height, data)?;
        Ok(self.dither(&image))
    }
}

impl std::fmt::Debug for Ditherer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ditherer")
            .field("palette", &self.palette)
            .field("method", &self.method)
            .field("progress_rows", &self.progress_rows)
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}
