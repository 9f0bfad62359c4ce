//! Palette struct and luminance-weighted nearest-color matching.

use std::path::Path;

use super::error::PaletteError;
use super::parse::ParsedPalette;
use crate::color::Rgb;

/// Per-channel weights of the distance metric (red, green, blue).
///
/// These are the Rec. 601 luma coefficients. They approximate how strongly
/// the eye responds to each channel; they do not make RGB distances
/// perceptually uniform.
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Built-in 16-color palette used when a palette source yields no colors.
pub static DEFAULT_PALETTE: [Rgb; 16] = [
    Rgb::new(0x00, 0x1F, 0x3F), // deep blue
    Rgb::new(0x00, 0x74, 0xD9), // ocean blue
    Rgb::new(0x7F, 0xDB, 0xFF), // aqua
    Rgb::new(0x39, 0xCC, 0xCC), // teal
    Rgb::new(0x3D, 0x99, 0x70), // olive
    Rgb::new(0x2E, 0xCC, 0x40), // green
    Rgb::new(0x01, 0xFF, 0x70), // lime
    Rgb::new(0x8B, 0x45, 0x13), // brown
    Rgb::new(0xD2, 0xB4, 0x8C), // tan
    Rgb::new(0xAA, 0xAA, 0xAA), // gray
    Rgb::new(0xDD, 0xDD, 0xDD), // silver
    Rgb::new(0xFF, 0xFF, 0xFF), // white
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0x33, 0x33, 0x33), // dark gray
    Rgb::new(0xFF, 0x85, 0x1B), // orange
    Rgb::new(0xFF, 0x41, 0x36), // red
];

/// An ordered, non-empty set of output colors.
///
/// Entry order only matters for ties: when two entries are equally close
/// to a pixel, the one that appears first wins. Duplicate entries are
/// allowed; the later copies can never be selected.
///
/// # Example
///
/// ```
/// use palette_dither::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest(Rgb::new(200, 190, 210)), Rgb::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from a literal list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] if `colors` is empty.
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// The built-in 16-color palette.
    pub fn default_palette() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }

    /// Parse a line-oriented hex palette, keeping only the palette.
    ///
    /// See [`Palette::parse_hex`] for the format and the fallback rule.
    pub fn from_hex_text(text: &str) -> Self {
        Self::parse_hex(text).palette
    }

    /// Parse a line-oriented hex palette with diagnostics.
    ///
    /// One color per line as `RRGGBB` or `#RRGGBB`; blank lines and lines
    /// starting with `/`, `#` or `;` are skipped. Unparseable lines are
    /// reported in [`ParsedPalette::malformed`] and otherwise ignored. If no
    /// line yields a color, the built-in [`DEFAULT_PALETTE`] is used.
    ///
    /// ```
    /// use palette_dither::{Palette, Rgb};
    ///
    /// let parsed = Palette::parse_hex("; two tones\n#000000\nFFFFFF\nnope\n");
    /// assert_eq!(parsed.palette.colors(), &[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
    /// assert_eq!(parsed.malformed.len(), 1);
    /// assert!(!parsed.used_default);
    /// ```
    pub fn parse_hex(text: &str) -> ParsedPalette {
        ParsedPalette::parse(text)
    }

    /// Read and parse a hex palette file.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Io`] if the file cannot be read. A readable
    /// file without any valid color falls back to the default palette.
    pub fn load(path: impl AsRef<Path>) -> Result<ParsedPalette, PaletteError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = Self::parse_hex(&text);
        tracing::debug!(
            path = %path.display(),
            colors = parsed.palette.len(),
            skipped = parsed.malformed.len(),
            "Loaded palette"
        );
        Ok(parsed)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The palette entries in order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Get the color at the given index.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.colors.get(idx).copied()
    }

    /// Returns true if `color` is one of the entries.
    #[inline]
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    /// Luminance-weighted squared distance between two colors.
    #[inline]
    pub fn distance(a: Rgb, b: Rgb) -> f32 {
        let dr = a.r as f32 - b.r as f32;
        let dg = a.g as f32 - b.g as f32;
        let db = a.b as f32 - b.b as f32;
        dr * dr * LUMA_WEIGHTS[0] + dg * dg * LUMA_WEIGHTS[1] + db * db * LUMA_WEIGHTS[2]
    }

    /// Find the palette entry closest to `pixel`.
    ///
    /// Returns `(index, distance)`. Every entry is visited; an entry only
    /// replaces the current best on a strictly smaller distance, so the
    /// first of several equally close entries wins.
    #[inline]
    pub fn find_nearest(&self, pixel: Rgb) -> (usize, f32) {
        // Linear scan - palettes are small (16 colors typical)
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;

        for (i, &color) in self.colors.iter().enumerate() {
            let dist = Self::distance(pixel, color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// The palette color closest to `pixel`.
    #[inline]
    pub fn nearest(&self, pixel: Rgb) -> Rgb {
        self.colors[self.find_nearest(pixel).0]
    }
}

/// The color in `palette` closest to `pixel`.
///
/// Free-function form of [`Palette::nearest`].
#[inline]
pub fn nearest(pixel: Rgb, palette: &Palette) -> Rgb {
    palette.nearest(pixel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_white() -> Palette {
        Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap()
    }

    #[test]
    fn test_palette_basic_construction() {
        let palette = Palette::new(&[
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(255, 0, 0),
        ])
        .unwrap();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette.get(2), Some(Rgb::new(255, 0, 0)));
        assert_eq!(palette.get(3), None);
    }

    #[test]
    fn test_palette_empty_error() {
        let result = Palette::new(&[]);
        assert!(matches!(result, Err(PaletteError::Empty)));
    }

    #[test]
    fn test_palette_allows_duplicates() {
        let red = Rgb::new(255, 0, 0);
        let palette = Palette::new(&[red, Rgb::new(0, 0, 255), red]).unwrap();
        assert_eq!(palette.len(), 3);
        // The later copy never wins a tie against the first
        assert_eq!(palette.find_nearest(red).0, 0);
    }

    #[test]
    fn test_default_palette_contents() {
        let palette = Palette::default_palette();
        assert_eq!(palette.len(), 16);
        assert_eq!(palette.get(0), Some(Rgb::new(0x00, 0x1F, 0x3F)));
        assert_eq!(palette.get(11), Some(Rgb::new(0xFF, 0xFF, 0xFF)));
        assert_eq!(palette.get(12), Some(Rgb::new(0x00, 0x00, 0x00)));
        assert_eq!(palette.get(15), Some(Rgb::new(0xFF, 0x41, 0x36)));
    }

    #[test]
    fn test_find_nearest_exact_match() {
        let palette = black_white();
        let (idx, dist) = palette.find_nearest(Rgb::new(255, 255, 255));
        assert_eq!(idx, 1);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_find_nearest_extremes() {
        let palette = black_white();
        assert_eq!(palette.nearest(Rgb::new(10, 10, 10)), Rgb::new(0, 0, 0));
        assert_eq!(
            palette.nearest(Rgb::new(245, 245, 245)),
            Rgb::new(255, 255, 255)
        );
    }

    #[test]
    fn test_weighted_distance_protects_green() {
        // Same raw offset, but a green miss costs 0.587 against 0.299 for red
        let keeps_red = Rgb::new(50, 0, 0);
        let keeps_green = Rgb::new(0, 50, 0);
        let palette = Palette::new(&[keeps_red, keeps_green]).unwrap();

        let pixel = Rgb::new(50, 50, 0);
        assert!((Palette::distance(pixel, keeps_red) - 1467.5).abs() < 1e-2);
        assert!((Palette::distance(pixel, keeps_green) - 747.5).abs() < 1e-2);
        assert_eq!(nearest(pixel, &palette), keeps_green);
    }

    #[test]
    fn test_symmetric_offsets_tie_to_first_entry() {
        // (50,50,0) is exactly as far from (100,0,0) as from (0,100,0) under
        // any per-channel weighting, so palette order decides
        let red = Rgb::new(100, 0, 0);
        let green = Rgb::new(0, 100, 0);
        let pixel = Rgb::new(50, 50, 0);

        assert_eq!(
            Palette::distance(pixel, red),
            Palette::distance(pixel, green)
        );
        let green_first = Palette::new(&[green, red]).unwrap();
        assert_eq!(green_first.nearest(pixel), green);
        let red_first = Palette::new(&[red, green]).unwrap();
        assert_eq!(red_first.nearest(pixel), red);
    }

    #[test]
    fn test_exact_tie_keeps_first_entry() {
        let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(0, 0, 0)]).unwrap();
        assert_eq!(palette.find_nearest(Rgb::new(40, 40, 40)).0, 0);
    }

    #[test]
    fn test_distance_weights() {
        let black = Rgb::new(0, 0, 0);
        assert!((Palette::distance(Rgb::new(10, 0, 0), black) - 29.9).abs() < 1e-3);
        assert!((Palette::distance(Rgb::new(0, 10, 0), black) - 58.7).abs() < 1e-3);
        assert!((Palette::distance(Rgb::new(0, 0, 10), black) - 11.4).abs() < 1e-3);
    }
}
