//! Software rendering of the scratch-off cover
//!
//! Everything is painted on the CPU into an owned `Raster`; the host uploads
//! the bytes to its canvas.

pub mod cover;
pub mod glyphs;

pub use cover::paint_cover;
