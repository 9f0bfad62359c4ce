use std::path::PathBuf;

use palette_dither::{BufferError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported PNG format: {0}")]
    UnsupportedColorType(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("Pixel data error: {0}")]
    Buffer(#[from] BufferError),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
