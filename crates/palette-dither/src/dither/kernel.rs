//! Error diffusion kernel definitions.
//!
//! A kernel specifies how the quantization error of one pixel is shared
//! among neighbors that have not been visited yet.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` and a weight; the neighbor receives
/// `error * weight / divisor`. Every `dy` is non-negative and entries with
/// `dy == 0` have `dx > 0`, so error only ever flows forward in raster
/// order.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // east
        (-1, 1, 3), // south-west
        (0, 1, 5),  // south
        (1, 1, 1),  // south-east
    ],
    divisor: 16,
};

impl Kernel {
    /// Sum of all entry weights.
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| w as u32).sum()
    }

    /// Neighbors of `(x, y)` that lie inside a `width` x `height` image,
    /// with the fraction of the error each one receives.
    ///
    /// Entries that fall outside the image are dropped; their share of the
    /// error is discarded, not redistributed.
    pub fn shares(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let divisor = self.divisor as f32;
        self.entries.iter().filter_map(move |&(dx, dy, weight)| {
            let nx = x.checked_add_signed(dx as isize)?;
            let ny = y.checked_add_signed(dy as isize)?;
            (nx < width && ny < height).then(|| (nx, ny, weight as f32 / divisor))
        })
    }
}
