//! Color types
//!
//! Pixels move through the crate as plain 8-bit [`Rgb`] triples. The
//! diffusion ditherer keeps its in-flight values as `[f32; 3]` and only
//! comes back to [`Rgb`] through [`Rgb::from_f32_clamped`].
//!
//! # Example
//!
//! ```
//! use palette_dither::Rgb;
//!
//! let teal: Rgb = "39CCCC".parse().unwrap();
//! assert_eq!(teal, Rgb::new(0x39, 0xCC, 0xCC));
//! assert_eq!(teal.to_string(), "#39CCCC");
//! ```

mod rgb;

pub use rgb::Rgb;
