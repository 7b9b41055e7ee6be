//! Low-contrast dot grid texture.

use crate::canvas::Canvas;
use crate::types::{BoundingBox, Colour, Point};

/// Distance between neighbouring dots.
pub const PATTERN_SPACING: u32 = 60;

/// Radius of each dot.
pub const PATTERN_DOT_RADIUS: u32 = 2;

/// Dot centres for an area, with odd rows shifted by half the spacing.
pub fn pattern_points(width: u32, height: u32) -> impl Iterator<Item = Point> {
    let step = PATTERN_SPACING as usize;

    (0..height).step_by(step).flat_map(move |y| {
        let offset = if (y / PATTERN_SPACING) % 2 == 1 {
            PATTERN_SPACING / 2
        } else {
            0
        };

        (0..width)
            .step_by(step)
            .map(move |x| Point::new((x + offset) as f64, y as f64))
    })
}

/// Draw the dot grid over a `width` x `height` area.
pub fn draw_pattern_dots(canvas: &mut Canvas, width: u32, height: u32, colour: Colour) {
    let radius = PATTERN_DOT_RADIUS as f64;
    for point in pattern_points(width, height) {
        canvas.ellipse(BoundingBox::around(point, radius), None, Some(colour), 1);
    }
}
