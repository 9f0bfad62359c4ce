//! High-level API: the [`Ditherer`] builder and the [`DitherError`] type
//! that collects every fallible step of the crate.

mod builder;
mod error;

pub use builder::{Ditherer, DEFAULT_PROGRESS_ROWS};
pub use error::DitherError;
