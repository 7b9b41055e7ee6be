//! Display fonts and the builtin fallback face.
//!
//! A [`Font`] is either a TrueType/OpenType face loaded from disk (shaped and
//! rasterised through `usvg`/`resvg`) or the builtin bitmap face, which is
//! always available. Loading reports failure through [`Result`]; callers that
//! must not fail use [`Font::load_or_builtin`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{Rgb, RgbImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};

use super::glyphs::{self, ADVANCE, GLYPH_HEIGHT};
use crate::error::{BrandError, Result};
use crate::types::{BoundingBox, Colour, Point};

/// Nominal pixel size of one builtin font unit at size 10.
const BUILTIN_UNITS_PER_SCALE: u32 = 10;

/// A font at a fixed pixel size.
#[derive(Clone)]
pub struct Font {
    size: u32,
    face: Face,
}

#[derive(Clone)]
enum Face {
    Builtin,
    Loaded {
        family: String,
        path: PathBuf,
        db: Arc<fontdb::Database>,
    },
}

impl Font {
    /// Load the first face found in a font file.
    ///
    /// Fails with [`BrandError::FontUnavailable`] if the file cannot be read
    /// or holds no usable face.
    pub fn load(path: impl AsRef<Path>, size: u32) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |message: String| BrandError::FontUnavailable {
            path: path.to_path_buf(),
            message,
        };

        let mut db = fontdb::Database::new();
        db.load_font_file(path)
            .map_err(|e| unavailable(e.to_string()))?;

        let family = db
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .ok_or_else(|| unavailable("no usable font face".to_string()))?;

        Ok(Self {
            size: size.max(1),
            face: Face::Loaded {
                family,
                path: path.to_path_buf(),
                db: Arc::new(db),
            },
        })
    }

    /// The builtin bitmap face. Never fails.
    pub fn builtin(size: u32) -> Self {
        Self {
            size: size.max(1),
            face: Face::Builtin,
        }
    }

    /// Load `path`, substituting the builtin face if it is unavailable.
    pub fn load_or_builtin(path: impl AsRef<Path>, size: u32) -> Self {
        match Self::load(path, size) {
            Ok(font) => font,
            Err(_) => Self::builtin(size),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Builtin)
    }

    /// Family name of a loaded face.
    pub fn family(&self) -> Option<&str> {
        match &self.face {
            Face::Builtin => None,
            Face::Loaded { family, .. } => Some(family),
        }
    }

    /// Measure the ink of `text` as if drawn with its top-left corner at the origin.
    pub(crate) fn measure(&self, text: &str) -> BoundingBox {
        if text.is_empty() {
            return BoundingBox::default();
        }

        match &self.face {
            Face::Builtin => {
                let scale = self.builtin_scale() as f64;
                let chars = text.chars().count() as f64;
                let width = (chars * ADVANCE as f64 - 1.0) * scale;
                BoundingBox::new(0.0, 0.0, width, GLYPH_HEIGHT as f64 * scale)
            }
            Face::Loaded { .. } => self
                .rasterize(text)
                .map(|scratch| scratch.ink_size())
                .unwrap_or_default(),
        }
    }

    /// Draw `text` with its measured top-left corner at `origin`.
    pub(crate) fn draw(&self, image: &mut RgbImage, origin: Point, text: &str, colour: Colour) {
        if text.is_empty() {
            return;
        }

        match &self.face {
            Face::Builtin => self.draw_builtin(image, origin, text, colour),
            Face::Loaded { .. } => self.draw_outline(image, origin, text, colour),
        }
    }

    fn builtin_scale(&self) -> u32 {
        (self.size / BUILTIN_UNITS_PER_SCALE).max(1)
    }

    fn draw_builtin(&self, image: &mut RgbImage, origin: Point, text: &str, colour: Colour) {
        let scale = self.builtin_scale() as i64;
        let (width, height) = (image.width() as i64, image.height() as i64);
        let left = origin.x.round() as i64;
        let top = origin.y.round() as i64;
        let pixel: Rgb<u8> = colour.into();

        for (index, c) in text.chars().enumerate() {
            let glyph_left = left + index as i64 * ADVANCE as i64 * scale;

            for (col, row) in glyphs::cells(glyphs::glyph(c)) {
                let x0 = glyph_left + col as i64 * scale;
                let y0 = top + row as i64 * scale;

                for y in y0.max(0)..(y0 + scale).min(height) {
                    for x in x0.max(0)..(x0 + scale).min(width) {
                        image.put_pixel(x as u32, y as u32, pixel);
                    }
                }
            }
        }
    }

    /// Rasterise `text` onto a scratch pixmap and locate its ink.
    fn rasterize(&self, text: &str) -> Option<Scratch> {
        let chars = text.chars().count() as u32;
        let width = self.size * (2 * chars + 2);
        let height = self.size * 3;
        // Room for side bearings on the left and descenders below.
        let pen = Point::new(self.size as f64, (self.size * 2) as f64);

        let tree = self.text_tree(text, pen, width, height)?;
        let mut pixmap = Pixmap::new(width, height)?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        let mut ink: Option<(u32, u32, u32, u32)> = None;
        for (index, pixel) in pixmap.pixels().iter().enumerate() {
            if pixel.alpha() == 0 {
                continue;
            }
            let x = index as u32 % width;
            let y = index as u32 / width;
            ink = Some(match ink {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }

        let (x0, y0, x1, y1) = ink?;
        Some(Scratch {
            pixmap,
            x0,
            y0,
            x1,
            y1,
        })
    }

    fn draw_outline(&self, image: &mut RgbImage, origin: Point, text: &str, colour: Colour) {
        let Some(scratch) = self.rasterize(text) else {
            return;
        };

        let (width, height) = (image.width() as i64, image.height() as i64);
        let left = origin.x.round() as i64;
        let top = origin.y.round() as i64;
        let stride = scratch.pixmap.width();

        for sy in scratch.y0..=scratch.y1 {
            let y = top + (sy - scratch.y0) as i64;
            if y < 0 || y >= height {
                continue;
            }

            for sx in scratch.x0..=scratch.x1 {
                let x = left + (sx - scratch.x0) as i64;
                if x < 0 || x >= width {
                    continue;
                }

                let alpha = scratch.pixmap.pixels()[(sy * stride + sx) as usize].alpha();
                if alpha == 0 {
                    continue;
                }

                let (x, y) = (x as u32, y as u32);
                let below: Colour = (*image.get_pixel(x, y)).into();
                let blended = below.mix(colour, alpha as f32 / 255.0);
                image.put_pixel(x, y, blended.into());
            }
        }
    }

    fn text_tree(
        &self,
        text: &str,
        baseline: Point,
        width: u32,
        height: u32,
    ) -> Option<usvg::Tree> {
        let Face::Loaded { family, db, .. } = &self.face else {
            return None;
        };

        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}"><text x="{x}" y="{y}" font-family="{family}" font-size="{size}" fill="black">{text}</text></svg>"#,
            x = baseline.x,
            y = baseline.y,
            family = escape_xml(family),
            size = self.size,
            text = escape_xml(text),
        );

        let options = usvg::Options {
            fontdb: Arc::clone(db),
            ..usvg::Options::default()
        };

        usvg::Tree::from_str(&svg, &options).ok()
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.face {
            Face::Builtin => f
                .debug_struct("Font")
                .field("size", &self.size)
                .field("face", &"builtin")
                .finish(),
            Face::Loaded { family, path, .. } => f
                .debug_struct("Font")
                .field("size", &self.size)
                .field("family", family)
                .field("path", path)
                .finish(),
        }
    }
}

/// Rendered text and the inclusive pixel rectangle holding its ink.
struct Scratch {
    pixmap: Pixmap,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl Scratch {
    fn ink_size(&self) -> BoundingBox {
        BoundingBox::new(
            0.0,
            0.0,
            (self.x1 - self.x0 + 1) as f64,
            (self.y1 - self.y0 + 1) as f64,
        )
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Where the display font comes from.
///
/// Resolving never fails: a missing or broken file resolves to the builtin
/// face at the requested size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSpec {
    pub path: Option<PathBuf>,
}

impl FontSpec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Always use the builtin face.
    pub fn builtin() -> Self {
        Self { path: None }
    }

    /// Resolve the display font at `size`.
    pub fn resolve(&self, size: u32) -> Font {
        match &self.path {
            Some(path) => Font::load_or_builtin(path, size),
            None => Font::builtin(size),
        }
    }

    /// True when the configured face loads.
    pub fn is_available(&self) -> bool {
        self.check().is_ok()
    }

    /// Load the configured face at a nominal size, reporting why it is
    /// unavailable. Without a path this is the builtin face.
    pub fn check(&self) -> Result<Font> {
        match &self.path {
            Some(path) => Font::load(path, 12),
            None => Ok(Font::builtin(12)),
        }
    }
}
