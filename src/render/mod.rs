//! Rendering module for brandmark.
//!
//! Logo marks, the shared orbital drawer, the dot pattern, wordmark
//! composition and the social layouts all draw onto a [`Canvas`].
//!
//! [`Canvas`]: crate::canvas::Canvas

mod marks;
mod orbital;
mod pattern;
mod png;
mod social;
mod wordmark;

pub use marks::{
    completion_stages, contained_a, convergence, nested_rings, orbital_aggregation, MARK_CENTER,
    MARK_SIZE,
};
pub use orbital::{
    draw_orbital_geometry, draw_orbital_mark, orbital_angle, orbital_centers, OrbitalGeometry,
    ORBITAL_COUNT,
};
pub use pattern::{draw_pattern_dots, pattern_points, PATTERN_DOT_RADIUS, PATTERN_SPACING};
pub use png::write_png;
pub use social::{SocialAsset, SocialLayout};
pub use wordmark::{compose_wordmark, BRAND_NAME, WORDMARK_EXTENSION, WORDMARK_FONT_SIZE};
