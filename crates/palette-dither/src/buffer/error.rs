use thiserror::Error;

/// Error type for pixel buffer construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Pixel, byte or alpha data length does not match the dimensions
    #[error("buffer length mismatch: {width}x{height} needs {expected} values, got {actual}")]
    DimensionMismatch {
        /// Buffer width in pixels
        width: usize,
        /// Buffer height in pixels
        height: usize,
        /// Required number of values
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },
}
