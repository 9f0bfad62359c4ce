//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette
//! construction.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Fewer than six characters after stripping the optional '#'
    #[error("hex color too short: expected 6 digits, found {len} characters")]
    TooShort {
        /// Number of characters that were available
        len: usize,
    },
    /// One of the first six characters is not a hexadecimal digit
    #[error("invalid hex digits in '{text}'")]
    InvalidHex {
        /// The offending six-character prefix
        text: String,
    },
}

/// Error type for palette construction.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    Empty,

    /// Palette source could not be read
    #[error("failed to read palette {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}
