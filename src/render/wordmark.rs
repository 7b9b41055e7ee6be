//! Appends the brand name beneath a mark.

use std::borrow::Cow;

use crate::canvas::{Canvas, Font};
use crate::types::{BrandPalette, Point};

/// The literal brand name.
pub const BRAND_NAME: &str = "ALPMERA";

/// Pixel size of the wordmark under a mark.
pub const WORDMARK_FONT_SIZE: u32 = 64;

/// Extra canvas height added below the mark.
pub const WORDMARK_EXTENSION: u32 = 150;

/// Gap between the bottom of the mark and the top of the text.
pub const WORDMARK_GAP: u32 = 30;

/// Compose the wordmark under `mark`.
///
/// With `include_text` unset the mark itself is returned. Otherwise a new,
/// taller canvas is built; `mark` is never modified.
pub fn compose_wordmark<'a>(
    mark: &'a Canvas,
    include_text: bool,
    palette: &BrandPalette,
    font: &Font,
) -> Cow<'a, Canvas> {
    if !include_text {
        return Cow::Borrowed(mark);
    }

    let (width, height) = mark.dimensions();
    let mut canvas = Canvas::new(width, height + WORDMARK_EXTENSION, palette.secondary);
    canvas.paste(mark, 0, 0);

    let bbox = canvas.text_bbox(BRAND_NAME, font);
    let text_width = bbox.width().round() as i64;
    let x = (width as i64 - text_width).div_euclid(2);
    let y = (height + WORDMARK_GAP) as f64;

    canvas.text(Point::new(x as f64, y), BRAND_NAME, palette.primary, font);

    Cow::Owned(canvas)
}
