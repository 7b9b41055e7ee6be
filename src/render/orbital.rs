//! The orbital aggregation motif.
//!
//! A protected core, a thin orbit ring carrying seven equally spaced
//! orbitals, and an outer containment ring. The standalone logo concept and
//! every social asset draw the motif through [`draw_orbital_mark`].

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::canvas::Canvas;
use crate::types::{BoundingBox, Colour, Point};

/// Number of orbital elements on the orbit ring.
pub const ORBITAL_COUNT: usize = 7;

/// Radii and stroke widths of the motif, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitalGeometry {
    pub core_radius: u32,
    pub orbit_radius: u32,
    pub orbit_width: u32,
    pub orbital_radius: u32,
    pub outer_radius: u32,
    pub outer_width: u32,
}

impl OrbitalGeometry {
    /// Geometry of the standalone 800x800 mark.
    pub const STANDALONE: Self = Self {
        core_radius: 60,
        orbit_radius: 180,
        orbit_width: 2,
        orbital_radius: 18,
        outer_radius: 280,
        outer_width: 3,
    };

    /// Scale every radius and width uniformly, truncating to whole pixels.
    ///
    /// The orbit ring never drops below 1 pixel and the outer ring never
    /// below 2, so the motif stays legible at small sizes.
    pub fn scaled(scale: f64) -> Self {
        let base = Self::STANDALONE;
        let px = |v: u32| (v as f64 * scale).max(0.0) as u32;

        Self {
            core_radius: px(base.core_radius),
            orbit_radius: px(base.orbit_radius),
            orbit_width: px(base.orbit_width).max(1),
            orbital_radius: px(base.orbital_radius),
            outer_radius: px(base.outer_radius),
            outer_width: px(base.outer_width).max(2),
        }
    }
}

/// Angle of orbital `index`, starting at the top and advancing clockwise.
pub fn orbital_angle(index: usize) -> f64 {
    TAU * index as f64 / ORBITAL_COUNT as f64 - FRAC_PI_2
}

/// Centres of the orbitals on a ring of `orbit_radius` around `center`.
pub fn orbital_centers(center: Point, orbit_radius: f64) -> [Point; ORBITAL_COUNT] {
    std::array::from_fn(|i| center.polar(orbit_radius, orbital_angle(i)))
}

/// Draw the motif centred at `center`, scaled by `scale`, in `colour`.
pub fn draw_orbital_mark(canvas: &mut Canvas, center: Point, scale: f64, colour: Colour) {
    draw_orbital_geometry(canvas, center, OrbitalGeometry::scaled(scale), colour);
}

/// Draw the motif with explicit geometry.
pub fn draw_orbital_geometry(
    canvas: &mut Canvas,
    center: Point,
    geometry: OrbitalGeometry,
    colour: Colour,
) {
    let radius = |r: u32| BoundingBox::around(center, r as f64);

    canvas.ellipse(radius(geometry.core_radius), None, Some(colour), 1);

    canvas.ellipse(
        radius(geometry.orbit_radius),
        Some(colour),
        None,
        geometry.orbit_width,
    );

    for orbital in orbital_centers(center, geometry.orbit_radius as f64) {
        canvas.ellipse(
            BoundingBox::around(orbital, geometry.orbital_radius as f64),
            None,
            Some(colour),
            1,
        );
    }

    canvas.ellipse(
        radius(geometry.outer_radius),
        Some(colour),
        None,
        geometry.outer_width,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_one_is_standalone() {
        assert_eq!(OrbitalGeometry::scaled(1.0), OrbitalGeometry::STANDALONE);
    }

    #[test]
    fn test_scaled_radii_are_proportional() {
        let g = OrbitalGeometry::scaled(0.5);
        assert_eq!(g.core_radius, 30);
        assert_eq!(g.orbit_radius, 90);
        assert_eq!(g.orbital_radius, 9);
        assert_eq!(g.outer_radius, 140);
    }

    #[test]
    fn test_social_scales() {
        let sizes = |g: OrbitalGeometry| {
            (
                g.core_radius,
                g.orbit_radius,
                g.orbital_radius,
                g.outer_radius,
                g.orbit_width,
                g.outer_width,
            )
        };

        // 180 * 0.7 lands just below 126 in floating point.
        assert_eq!(sizes(OrbitalGeometry::scaled(0.7)), (42, 125, 12, 196, 1, 2));
        assert_eq!(sizes(OrbitalGeometry::scaled(0.6)), (36, 108, 10, 168, 1, 2));
        assert_eq!(sizes(OrbitalGeometry::scaled(0.55)), (33, 99, 9, 154, 1, 2));
    }

    #[test]
    fn test_stroke_width_floors() {
        let g = OrbitalGeometry::scaled(0.1);
        assert_eq!(g.orbit_width, 1);
        assert_eq!(g.outer_width, 2);

        let g = OrbitalGeometry::scaled(2.0);
        assert_eq!(g.orbit_width, 4);
        assert_eq!(g.outer_width, 6);
    }

    #[test]
    fn test_first_orbital_is_at_top() {
        let centers = orbital_centers(Point::new(400.0, 400.0), 180.0);
        assert!((centers[0].x - 400.0).abs() < 1e-9);
        assert!((centers[0].y - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_orbitals_equally_spaced() {
        let center = Point::new(0.0, 0.0);
        let centers = orbital_centers(center, 100.0);
        let step = centers[0].distance(centers[1]);

        for i in 0..ORBITAL_COUNT {
            let next = centers[(i + 1) % ORBITAL_COUNT];
            assert!((centers[i].distance(next) - step).abs() < 1e-9);
            assert!((centers[i].distance(center) - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_draws_inverted_on_dark_canvas() {
        let dark = Colour::rgb(27, 77, 62);
        let light = Colour::rgb(232, 222, 209);
        let mut canvas = Canvas::new(400, 400, dark);

        draw_orbital_mark(&mut canvas, Point::new(200.0, 200.0), 0.6, light);

        assert_eq!(canvas.pixel(200, 200), Some(light)); // core
        assert_eq!(canvas.pixel(200, 92), Some(light)); // first orbital
        assert_eq!(canvas.pixel(0, 0), Some(dark));
    }
}
