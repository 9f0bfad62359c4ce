//! Test fixtures and constants.

use palette_dither::{PixelBuffer, Rgb};

/// Palette files in the hex line format
pub mod palettes {
    /// Black and white with the usual comment noise
    pub const BLACK_WHITE: &str = "\
; two-tone test palette
// black first, then white
#000000
FFFFFF  white
";

    /// Three saturated primaries
    pub const PRIMARIES: &str = "FF0000\n00FF00\n0000FF\n";

    /// Nothing but comments and junk: resolves to the default palette
    pub const COMMENTS_ONLY: &str = "\
; nothing here
// still nothing
# heading
12345
";
}

/// Horizontal grey ramp from black to white
pub fn grey_ramp(width: usize, height: usize) -> PixelBuffer {
    let pixels = (0..width * height)
        .map(|i| {
            let v = ((i % width) * 255 / (width - 1).max(1)) as u8;
            Rgb::new(v, v, v)
        })
        .collect();
    PixelBuffer::new(width, height, pixels).unwrap()
}

/// Colorful test image, deterministic
pub fn color_field(width: usize, height: usize) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            pixels.push(Rgb::new(
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x * 31 + y * 17) % 256) as u8,
            ));
        }
    }
    PixelBuffer::new(width, height, pixels).unwrap()
}

/// 2x2 white sprite whose alpha steps through 0, 85, 170, 255
pub fn fading_sprite() -> PixelBuffer {
    PixelBuffer::with_alpha(
        2,
        2,
        vec![Rgb::new(255, 255, 255); 4],
        vec![0, 85, 170, 255],
    )
    .unwrap()
}
