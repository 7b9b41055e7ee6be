//! The five logo mark concepts.
//!
//! Each concept is a pure function of the palette drawing onto a fresh
//! 800x800 canvas. Vocabulary is restricted to circles, rings, arcs, pie
//! slices and straight strokes: no arrows, carts, price tags or flames.

use crate::canvas::Canvas;
use crate::types::{BoundingBox, BrandPalette, Point};

use super::orbital::{draw_orbital_geometry, OrbitalGeometry};

/// Width and height of every mark canvas.
pub const MARK_SIZE: u32 = 800;

/// Centre of every mark canvas.
pub const MARK_CENTER: Point = Point::new(400.0, 400.0);

/// Nested rings as `(radius, thickness)`, outermost first.
pub const NESTED_RINGS: [(u32, u32); 3] = [(280, 12), (200, 10), (120, 8)];

/// Radius of the solid core inside the nested rings.
pub const NESTED_CORE_RADIUS: u32 = 50;

/// Convergence arcs per sector as `(radius, width, inset degrees)`.
const CONVERGENCE_ARCS: [(u32, u32, f64); 3] = [(100, 20, 0.0), (200, 12, 5.0), (280, 6, 10.0)];
const CONVERGENCE_SECTORS: u32 = 6;
const CONVERGENCE_SWEEP: f64 = 40.0;

/// Completion stage pie slices in degrees, with gaps between them.
pub const COMPLETION_SEGMENTS: [(f64, f64); 4] =
    [(-90.0, -10.0), (0.0, 80.0), (90.0, 170.0), (180.0, 260.0)];

fn mark_canvas(palette: &BrandPalette) -> Canvas {
    Canvas::new(MARK_SIZE, MARK_SIZE, palette.secondary)
}

fn circle(radius: u32) -> BoundingBox {
    BoundingBox::around(MARK_CENTER, radius as f64)
}

/// Three concentric rings of decreasing thickness around a solid core.
pub fn nested_rings(palette: &BrandPalette) -> Canvas {
    let mut canvas = mark_canvas(palette);

    for (radius, thickness) in NESTED_RINGS {
        // Unit-width strokes from the outer edge inward.
        for r in (radius + 1 - thickness..=radius).rev() {
            canvas.ellipse(circle(r), Some(palette.primary), None, 1);
        }
    }

    canvas.ellipse(circle(NESTED_CORE_RADIUS), None, Some(palette.primary), 1);

    canvas
}

/// Seven orbitals on a ring around a protected core.
pub fn orbital_aggregation(palette: &BrandPalette) -> Canvas {
    let mut canvas = mark_canvas(palette);
    draw_orbital_geometry(
        &mut canvas,
        MARK_CENTER,
        OrbitalGeometry::STANDALONE,
        palette.primary,
    );
    canvas
}

/// Six sectors of nested arcs converging on a centre point.
pub fn convergence(palette: &BrandPalette) -> Canvas {
    let mut canvas = mark_canvas(palette);

    canvas.ellipse(circle(40), None, Some(palette.primary), 1);

    let step = 360.0 / CONVERGENCE_SECTORS as f64;
    for sector in 0..CONVERGENCE_SECTORS {
        let start = step * sector as f64;
        let end = start + CONVERGENCE_SWEEP;

        for (radius, width, inset) in CONVERGENCE_ARCS {
            canvas.arc(
                circle(radius),
                start + inset,
                end - inset,
                palette.primary,
                width,
            );
        }
    }

    canvas
}

/// A geometric "A" inside a containment ring.
pub fn contained_a(palette: &BrandPalette) -> Canvas {
    let mut canvas = mark_canvas(palette);
    let ink = palette.primary;
    let Point { x: cx, y: cy } = MARK_CENTER;

    canvas.ellipse(circle(280), Some(ink), None, 4);

    let apex = Point::new(cx, cy - 160.0);
    let base_left = Point::new(cx - 140.0, cy + 120.0);
    let base_right = Point::new(cx + 140.0, cy + 120.0);

    canvas.line(apex, base_left, ink, 28);
    canvas.line(apex, base_right, ink, 28);

    let bar_y = cy + 20.0;
    canvas.line(
        Point::new(cx - 85.0, bar_y),
        Point::new(cx + 85.0, bar_y),
        ink,
        22,
    );

    // Round off the joints.
    for joint in [apex, base_left, base_right] {
        canvas.ellipse(BoundingBox::around(joint, 14.0), None, Some(ink), 1);
    }

    canvas
}

/// Four progress segments punched into a ring around a solid core.
pub fn completion_stages(palette: &BrandPalette) -> Canvas {
    let mut canvas = mark_canvas(palette);

    canvas.ellipse(circle(260), Some(palette.primary), None, 3);

    for (start, end) in COMPLETION_SEGMENTS {
        canvas.pie_slice(circle(240), start, end, palette.primary);
    }

    canvas.ellipse(circle(140), None, Some(palette.secondary), 1);
    canvas.ellipse(circle(60), None, Some(palette.primary), 1);

    canvas
}
