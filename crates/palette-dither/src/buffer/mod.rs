//! Pixel buffers
//!
//! [`PixelBuffer`] is the input and output shape of every ditherer: a
//! row-major grid of [`Rgb`](crate::Rgb) with an optional alpha plane
//! that rides along untouched.

mod error;
mod pixel_buffer;

pub use error::BufferError;
pub use pixel_buffer::PixelBuffer;
