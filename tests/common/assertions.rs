//! Assertion helpers for tests.

use std::path::Path;

use palette_dither::{Palette, PixelBuffer};
use pretty_assertions::assert_eq;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert the file exists and starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG signature, got {:?}",
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert every pixel is an entry of `palette`
pub fn assert_palette_only(image: &PixelBuffer, palette: &Palette) {
    for (i, &pixel) in image.pixels().iter().enumerate() {
        assert!(
            palette.contains(pixel),
            "Pixel {i} is {pixel}, which is not in the palette"
        );
    }
}

/// Decode little-endian 16-bit values
pub fn words(bytes: &[u8]) -> Vec<u16> {
    assert_eq!(bytes.len() % 2, 0, "Odd byte count {}", bytes.len());
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
