//! brandmark - Procedural brand identity renderer
//!
//! Draws the Alpmera logo concepts, wordmark lockups and social media
//! images from geometric primitives and a fixed brand palette, and writes
//! them as PNG files.

pub mod canvas;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;

pub use canvas::{Canvas, Font, FontSpec};
pub use catalog::{
    AssetDescriptor, AssetIndex, AssetKind, Catalog, Generator, LogoConcept, Platform,
};
pub use error::{BrandError, Result};
pub use manifest::Manifest;
pub use render::{
    compose_wordmark, draw_orbital_mark, draw_pattern_dots, write_png, OrbitalGeometry,
    SocialAsset, SocialLayout,
};
pub use types::{BoundingBox, BrandPalette, Colour, Point};
