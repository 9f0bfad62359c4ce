//! Sprite Forge
//!
//! Command-line tooling for preparing sprites for small SPI displays:
//! palette dithering and RGB565 packing on top of `palette-dither`.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod png_io;
pub mod services;

pub use error::{ConvertError, ImageError};
pub use models::AppConfig;
