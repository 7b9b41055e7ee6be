//! Raster canvas and drawing primitives.
//!
//! Every composition in the crate is drawn through [`Canvas`]. Primitives
//! take a [`BoundingBox`] the way the brand geometry is specified (a centre
//! and a radius) and rasterise without anti-aliasing, so identical calls
//! always produce identical pixels.

mod font;
mod glyphs;

pub use font::{Font, FontSpec};

use image::{imageops, Rgb, RgbImage};

use crate::types::{BoundingBox, Colour, Point};

/// A fixed-size RGB raster with a background colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
    background: Colour,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background.into()),
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// The colour the canvas was created with.
    pub fn background(&self) -> Colour {
        self.background
    }

    /// Get a pixel. Returns None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|&p| p.into())
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Draw the ellipse inscribed in `bbox`.
    ///
    /// The fill is painted first, then an outline band `width` pixels deep
    /// measured inward from the bounding box.
    pub fn ellipse(
        &mut self,
        bbox: BoundingBox,
        outline: Option<Colour>,
        fill: Option<Colour>,
        width: u32,
    ) {
        let shape = EllipseShape::new(bbox);

        if let Some(fill) = fill {
            self.paint(bbox, fill, |x, y| shape.contains(x, y, 0.0));
        }

        if let Some(outline) = outline {
            let width = width as f64;
            self.paint(bbox, outline, |x, y| shape.in_band(x, y, width));
        }
    }

    /// Draw an outline arc of the ellipse inscribed in `bbox`.
    ///
    /// Angles are in degrees, clockwise from the positive x axis.
    pub fn arc(&mut self, bbox: BoundingBox, start: f64, end: f64, colour: Colour, width: u32) {
        let shape = EllipseShape::new(bbox);
        let sweep = Sweep::new(start, end);
        let width = width as f64;

        self.paint(bbox, colour, |x, y| {
            shape.in_band(x, y, width) && sweep.contains(shape.angle_of(x, y))
        });
    }

    /// Fill a pie slice of the ellipse inscribed in `bbox`.
    pub fn pie_slice(&mut self, bbox: BoundingBox, start: f64, end: f64, fill: Colour) {
        let shape = EllipseShape::new(bbox);
        let sweep = Sweep::new(start, end);

        self.paint(bbox, fill, |x, y| {
            shape.contains(x, y, 0.0) && sweep.contains(shape.angle_of(x, y))
        });
    }

    /// Draw a straight stroke from `a` to `b` with flat caps.
    pub fn line(&mut self, a: Point, b: Point, colour: Colour, width: u32) {
        let half = width.max(1) as f64 / 2.0;
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len_sq = dx * dx + dy * dy;

        let bounds = BoundingBox::new(
            a.x.min(b.x) - half,
            a.y.min(b.y) - half,
            a.x.max(b.x) + half,
            a.y.max(b.y) + half,
        );

        if len_sq == 0.0 {
            self.paint(bounds, colour, |x, y| a.distance(Point::new(x, y)) <= half);
            return;
        }

        let len = len_sq.sqrt();
        self.paint(bounds, colour, |x, y| {
            let (px, py) = (x - a.x, y - a.y);
            let t = (px * dx + py * dy) / len_sq;
            (0.0..=1.0).contains(&t) && (px * dy - py * dx).abs() / len <= half
        });
    }

    /// Fill an inclusive rectangle.
    pub fn rectangle(&mut self, bbox: BoundingBox, fill: Colour) {
        self.paint(bbox, fill, |x, y| {
            x >= bbox.left && x <= bbox.right && y >= bbox.top && y <= bbox.bottom
        });
    }

    /// Draw `text` with its measured top-left corner at `position`.
    pub fn text(&mut self, position: Point, text: &str, colour: Colour, font: &Font) {
        font.draw(&mut self.image, position, text, colour);
    }

    /// Measure `text` as if drawn at the origin.
    pub fn text_bbox(&self, text: &str, font: &Font) -> BoundingBox {
        font.measure(text)
    }

    /// Copy `other` onto this canvas with its top-left corner at `(x, y)`.
    pub fn paste(&mut self, other: &Canvas, x: i64, y: i64) {
        imageops::replace(&mut self.image, &other.image, x, y);
    }

    /// Set every pixel inside `bounds` for which `inside(x, y)` holds.
    ///
    /// Pixel coordinates are passed as their integer position.
    fn paint(&mut self, bounds: BoundingBox, colour: Colour, inside: impl Fn(f64, f64) -> bool) {
        let Some((x0, y0, x1, y1)) = self.clip(bounds) else {
            return;
        };
        let pixel: Rgb<u8> = colour.into();

        for y in y0..=y1 {
            for x in x0..=x1 {
                if inside(x as f64, y as f64) {
                    self.image.put_pixel(x, y, pixel);
                }
            }
        }
    }

    /// Clip a float box (grown by one pixel) to the canvas pixel grid.
    fn clip(&self, bounds: BoundingBox) -> Option<(u32, u32, u32, u32)> {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return None;
        }

        let max_x = (width - 1) as f64;
        let max_y = (height - 1) as f64;
        let x0 = (bounds.left - 1.0).floor().max(0.0);
        let y0 = (bounds.top - 1.0).floor().max(0.0);
        let x1 = (bounds.right + 1.0).ceil().min(max_x);
        let y1 = (bounds.bottom + 1.0).ceil().min(max_y);

        if x0 > x1 || y0 > y1 {
            return None;
        }

        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

/// Ellipse inscribed in an inclusive bounding box.
struct EllipseShape {
    center: Point,
    rx: f64,
    ry: f64,
}

impl EllipseShape {
    fn new(bbox: BoundingBox) -> Self {
        Self {
            center: bbox.center(),
            rx: bbox.width() / 2.0 + 0.5,
            ry: bbox.height() / 2.0 + 0.5,
        }
    }

    /// True if the pixel lies inside the ellipse shrunk by `inset` pixels.
    fn contains(&self, x: f64, y: f64, inset: f64) -> bool {
        let rx = self.rx - inset;
        let ry = self.ry - inset;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }

        let nx = (x - self.center.x) / rx;
        let ny = (y - self.center.y) / ry;
        nx * nx + ny * ny <= 1.0
    }

    fn in_band(&self, x: f64, y: f64, width: f64) -> bool {
        self.contains(x, y, 0.0) && !self.contains(x, y, width)
    }

    /// Angle of the pixel around the centre, in degrees `[0, 360)`.
    fn angle_of(&self, x: f64, y: f64) -> f64 {
        (y - self.center.y)
            .atan2(x - self.center.x)
            .to_degrees()
            .rem_euclid(360.0)
    }
}

/// An angular range in degrees. An end before the start wraps forward.
struct Sweep {
    start: f64,
    span: f64,
}

impl Sweep {
    fn new(start: f64, end: f64) -> Self {
        let span = if end - start >= 360.0 {
            360.0
        } else {
            (end - start).rem_euclid(360.0)
        };

        Self {
            start: start.rem_euclid(360.0),
            span,
        }
    }

    fn contains(&self, angle: f64) -> bool {
        self.span >= 360.0 || (angle - self.start).rem_euclid(360.0) <= self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Colour = Colour::WHITE;
    const INK: Colour = Colour::BLACK;

    fn centre() -> Point {
        Point::new(50.0, 50.0)
    }

    #[test]
    fn test_new_fills_background() {
        let canvas = Canvas::new(4, 3, Colour::rgb(1, 2, 3));
        assert_eq!(canvas.dimensions(), (4, 3));
        assert!(canvas.as_image().pixels().all(|p| p.0 == [1, 2, 3]));
        assert_eq!(canvas.background(), Colour::rgb(1, 2, 3));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let canvas = Canvas::new(2, 2, BG);
        assert_eq!(canvas.pixel(1, 1), Some(BG));
        assert_eq!(canvas.pixel(2, 0), None);
    }

    #[test]
    fn test_filled_circle_radius() {
        let mut canvas = Canvas::new(101, 101, BG);
        canvas.ellipse(BoundingBox::around(centre(), 20.0), None, Some(INK), 1);

        assert_eq!(canvas.pixel(50, 50), Some(INK));
        assert_eq!(canvas.pixel(70, 50), Some(INK));
        assert_eq!(canvas.pixel(71, 50), Some(BG));
        assert_eq!(canvas.pixel(50, 30), Some(INK));
        assert_eq!(canvas.pixel(50, 29), Some(BG));
    }

    #[test]
    fn test_outline_leaves_centre() {
        let mut canvas = Canvas::new(101, 101, BG);
        canvas.ellipse(BoundingBox::around(centre(), 20.0), Some(INK), None, 3);

        assert_eq!(canvas.pixel(50, 50), Some(BG));
        assert_eq!(canvas.pixel(70, 50), Some(INK));
        assert_eq!(canvas.pixel(68, 50), Some(INK));
        assert_eq!(canvas.pixel(67, 50), Some(BG));
    }

    #[test]
    fn test_arc_respects_angles() {
        let mut canvas = Canvas::new(101, 101, BG);
        // Lower-right quadrant only (y grows downward).
        canvas.arc(BoundingBox::around(centre(), 20.0), 0.0, 90.0, INK, 2);

        assert_eq!(canvas.pixel(50, 70), Some(INK)); // 90 degrees
        assert_eq!(canvas.pixel(64, 64), Some(INK)); // 45 degrees
        assert_eq!(canvas.pixel(50, 30), Some(BG)); // 270 degrees
        assert_eq!(canvas.pixel(30, 50), Some(BG)); // 180 degrees
    }

    #[test]
    fn test_pie_slice_wraps_negative_angles() {
        let mut canvas = Canvas::new(101, 101, BG);
        canvas.pie_slice(BoundingBox::around(centre(), 20.0), -90.0, -10.0, INK);

        assert_eq!(canvas.pixel(55, 35), Some(INK)); // upper right
        assert_eq!(canvas.pixel(45, 35), Some(BG)); // upper left
        assert_eq!(canvas.pixel(55, 65), Some(BG)); // lower right
    }

    #[test]
    fn test_sweep_full_circle() {
        let sweep = Sweep::new(0.0, 360.0);
        assert!(sweep.contains(0.0));
        assert!(sweep.contains(359.9));

        let sweep = Sweep::new(350.0, 10.0);
        assert!(sweep.contains(355.0));
        assert!(sweep.contains(5.0));
        assert!(!sweep.contains(20.0));
    }

    #[test]
    fn test_horizontal_line_width() {
        let mut canvas = Canvas::new(20, 20, BG);
        canvas.line(Point::new(2.0, 10.0), Point::new(17.0, 10.0), INK, 4);

        assert_eq!(canvas.pixel(10, 8), Some(INK));
        assert_eq!(canvas.pixel(10, 12), Some(INK));
        assert_eq!(canvas.pixel(10, 13), Some(BG));
        assert_eq!(canvas.pixel(1, 10), Some(BG)); // flat cap
        assert_eq!(canvas.pixel(18, 10), Some(BG));
    }

    #[test]
    fn test_degenerate_line_is_a_dot() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.line(Point::new(5.0, 5.0), Point::new(5.0, 5.0), INK, 2);
        assert_eq!(canvas.pixel(5, 5), Some(INK));
        assert_eq!(canvas.pixel(8, 5), Some(BG));
    }

    #[test]
    fn test_rectangle_inclusive() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.rectangle(BoundingBox::new(2.0, 3.0, 4.0, 3.0), INK);

        assert_eq!(canvas.pixel(2, 3), Some(INK));
        assert_eq!(canvas.pixel(4, 3), Some(INK));
        assert_eq!(canvas.pixel(5, 3), Some(BG));
        assert_eq!(canvas.pixel(3, 4), Some(BG));
    }

    #[test]
    fn test_primitives_clip_to_canvas() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.ellipse(BoundingBox::around(Point::new(0.0, 0.0), 30.0), None, Some(INK), 1);
        canvas.line(Point::new(-50.0, -50.0), Point::new(60.0, 60.0), INK, 3);
        canvas.rectangle(BoundingBox::new(100.0, 100.0, 200.0, 200.0), INK);

        assert_eq!(canvas.pixel(0, 0), Some(INK));
    }

    #[test]
    fn test_paste_copies_pixels() {
        let mut base = Canvas::new(6, 6, BG);
        let mut stamp = Canvas::new(2, 2, INK);
        stamp.rectangle(BoundingBox::new(1.0, 1.0, 1.0, 1.0), Colour::rgb(9, 9, 9));

        base.paste(&stamp, 3, 4);

        assert_eq!(base.pixel(3, 4), Some(INK));
        assert_eq!(base.pixel(4, 5), Some(Colour::rgb(9, 9, 9)));
        assert_eq!(base.pixel(2, 4), Some(BG));
    }
}
