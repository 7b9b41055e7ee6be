//! Core domain types for brandmark.
//!
//! - `Colour` - opaque RGB colour values
//! - `BrandPalette` - the fixed table of named brand colours
//! - `Point` / `BoundingBox` - canvas-space geometry

mod colour;
mod geometry;
mod palette;

pub use colour::Colour;
pub use geometry::{BoundingBox, Point};
pub use palette::BrandPalette;
