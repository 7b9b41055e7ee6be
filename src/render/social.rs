//! Social media headers, banners and profile images.
//!
//! Each asset is a fixed [`SocialLayout`] executed in one order: background,
//! dot pattern, orbital mark, wordmark with tagline and supporting lines,
//! then the accent rule.

use crate::canvas::{Canvas, FontSpec};
use crate::types::{BoundingBox, BrandPalette, Colour, Point};

use super::orbital::draw_orbital_mark;
use super::pattern::draw_pattern_dots;
use super::wordmark::BRAND_NAME;

/// A social image generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialAsset {
    /// Wide header for X: 1500x500.
    XHeader,
    /// LinkedIn page banner: 1584x396.
    LinkedInBanner,
    /// Square profile image, light mark on the primary colour.
    ProfileDark,
    /// Square profile image, primary mark on the canvas colour.
    ProfileLight,
}

impl SocialAsset {
    pub const ALL: [SocialAsset; 4] = [
        SocialAsset::XHeader,
        SocialAsset::LinkedInBanner,
        SocialAsset::ProfileDark,
        SocialAsset::ProfileLight,
    ];

    /// Output size as (width, height).
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            SocialAsset::XHeader => (1500, 500),
            SocialAsset::LinkedInBanner => (1584, 396),
            SocialAsset::ProfileDark | SocialAsset::ProfileLight => (400, 400),
        }
    }

    /// The fixed layout for this asset.
    pub fn layout(self, palette: &BrandPalette) -> SocialLayout {
        let (width, height) = self.dimensions();
        let middle = height as f64 / 2.0;

        match self {
            SocialAsset::XHeader => SocialLayout {
                width,
                height,
                background: palette.secondary,
                pattern: Some(palette.pattern_dot()),
                mark: MarkPlacement {
                    center: Point::new(250.0, middle),
                    scale: 0.7,
                    colour: palette.primary,
                },
                wordmark: Some(WordmarkBlock {
                    x: 480.0,
                    size: 72,
                    nudge: -10,
                    colour: palette.primary,
                    tagline: Some(TextLine {
                        text: "Trust-first collective buying",
                        size: 28,
                        offset: 85.0,
                        colour: palette.success,
                    }),
                }),
                supporting: None,
                rule: Some(Rule {
                    bbox: BoundingBox::new(100.0, 460.0, 1400.0, 464.0),
                    colour: palette.accent,
                }),
            },
            SocialAsset::LinkedInBanner => SocialLayout {
                width,
                height,
                background: palette.secondary,
                pattern: Some(palette.pattern_dot()),
                mark: MarkPlacement {
                    center: Point::new(200.0, middle),
                    scale: 0.55,
                    colour: palette.primary,
                },
                wordmark: Some(WordmarkBlock {
                    x: 400.0,
                    size: 64,
                    nudge: -20,
                    colour: palette.primary,
                    tagline: Some(TextLine {
                        text: "Trust-first collective buying operator",
                        size: 24,
                        offset: 70.0,
                        colour: palette.success,
                    }),
                }),
                supporting: Some(SupportingLines {
                    lines: &[
                        "Escrow-protected campaigns",
                        "Community-driven pricing",
                        "Seattle, WA",
                    ],
                    origin: Point::new(width as f64 - 380.0, 120.0),
                    line_height: 40.0,
                    size: 20,
                    colour: palette.text,
                }),
                rule: Some(Rule {
                    bbox: BoundingBox::new(80.0, 366.0, 1504.0, 370.0),
                    colour: palette.accent,
                }),
            },
            SocialAsset::ProfileDark | SocialAsset::ProfileLight => {
                let (background, ink) = if self == SocialAsset::ProfileDark {
                    (palette.primary, palette.secondary)
                } else {
                    (palette.secondary, palette.primary)
                };

                SocialLayout {
                    width,
                    height,
                    background,
                    pattern: None,
                    mark: MarkPlacement {
                        center: Point::new(width as f64 / 2.0, middle),
                        scale: 0.6,
                        colour: ink,
                    },
                    wordmark: None,
                    supporting: None,
                    rule: None,
                }
            }
        }
    }

    /// Render the asset.
    pub fn render(self, palette: &BrandPalette, fonts: &FontSpec) -> Canvas {
        self.layout(palette).render(fonts)
    }
}

/// Where the orbital mark goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkPlacement {
    pub center: Point,
    pub scale: f64,
    pub colour: Colour,
}

/// A single line of text placed relative to the wordmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLine {
    pub text: &'static str,
    pub size: u32,
    /// Vertical distance from the top of the wordmark.
    pub offset: f64,
    pub colour: Colour,
}

/// The brand name, vertically centred and then nudged, plus its tagline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordmarkBlock {
    pub x: f64,
    pub size: u32,
    pub nudge: i64,
    pub colour: Colour,
    pub tagline: Option<TextLine>,
}

/// A short list of lines stacked at a fixed origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportingLines {
    pub lines: &'static [&'static str],
    pub origin: Point,
    pub line_height: f64,
    pub size: u32,
    pub colour: Colour,
}

/// A thin filled rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub bbox: BoundingBox,
    pub colour: Colour,
}

/// A complete social image layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialLayout {
    pub width: u32,
    pub height: u32,
    pub background: Colour,
    pub pattern: Option<Colour>,
    pub mark: MarkPlacement,
    pub wordmark: Option<WordmarkBlock>,
    pub supporting: Option<SupportingLines>,
    pub rule: Option<Rule>,
}

impl SocialLayout {
    /// Execute the layout onto a fresh canvas.
    pub fn render(&self, fonts: &FontSpec) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height, self.background);

        if let Some(dot) = self.pattern {
            draw_pattern_dots(&mut canvas, self.width, self.height, dot);
        }

        draw_orbital_mark(&mut canvas, self.mark.center, self.mark.scale, self.mark.colour);

        if let Some(block) = &self.wordmark {
            self.draw_wordmark(&mut canvas, block, fonts);
        }

        if let Some(supporting) = &self.supporting {
            let font = fonts.resolve(supporting.size);
            for (i, line) in supporting.lines.iter().enumerate() {
                let position = Point::new(
                    supporting.origin.x,
                    supporting.origin.y + i as f64 * supporting.line_height,
                );
                canvas.text(position, line, supporting.colour, &font);
            }
        }

        if let Some(rule) = &self.rule {
            canvas.rectangle(rule.bbox, rule.colour);
        }

        canvas
    }

    fn draw_wordmark(&self, canvas: &mut Canvas, block: &WordmarkBlock, fonts: &FontSpec) {
        let font = fonts.resolve(block.size);
        let text_height = canvas.text_bbox(BRAND_NAME, &font).height().round() as i64;
        let top = (self.height as i64 - text_height).div_euclid(2) + block.nudge;
        let top = top as f64;

        canvas.text(Point::new(block.x, top), BRAND_NAME, block.colour, &font);

        if let Some(tagline) = &block.tagline {
            let font = fonts.resolve(tagline.size);
            let position = Point::new(block.x, top + tagline.offset);
            canvas.text(position, tagline.text, tagline.colour, &font);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(asset: SocialAsset) -> Canvas {
        asset.render(&BrandPalette::BRAND, &FontSpec::builtin())
    }

    #[test]
    fn test_dimensions_match_platforms() {
        for asset in SocialAsset::ALL {
            assert_eq!(render(asset).dimensions(), asset.dimensions());
        }
        assert_eq!(SocialAsset::XHeader.dimensions(), (1500, 500));
        assert_eq!(SocialAsset::LinkedInBanner.dimensions(), (1584, 396));
        assert_eq!(SocialAsset::ProfileDark.dimensions(), (400, 400));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        for asset in SocialAsset::ALL {
            assert!(render(asset) == render(asset), "{:?} differs between runs", asset);
        }
    }

    #[test]
    fn test_profile_dark_is_inverted() {
        let palette = BrandPalette::BRAND;
        let canvas = render(SocialAsset::ProfileDark);

        assert_eq!(canvas.pixel(0, 0), Some(palette.primary));
        assert_eq!(canvas.pixel(200, 200), Some(palette.secondary));
    }

    #[test]
    fn test_profile_light_uses_primary_mark() {
        let palette = BrandPalette::BRAND;
        let canvas = render(SocialAsset::ProfileLight);

        assert_eq!(canvas.pixel(0, 0), Some(palette.secondary));
        assert_eq!(canvas.pixel(200, 200), Some(palette.primary));
    }

    #[test]
    fn test_header_has_accent_rule_and_pattern() {
        let palette = BrandPalette::BRAND;
        let canvas = render(SocialAsset::XHeader);

        assert_eq!(canvas.pixel(750, 462), Some(palette.accent));
        assert_eq!(canvas.pixel(50, 462), Some(palette.secondary));
        // Grid origin carries a dot.
        assert_eq!(canvas.pixel(0, 0), Some(palette.pattern_dot()));
        // Mark core on the left.
        assert_eq!(canvas.pixel(250, 250), Some(palette.primary));
    }

    #[test]
    fn test_header_draws_wordmark_and_tagline() {
        let palette = BrandPalette::BRAND;
        let canvas = render(SocialAsset::XHeader);

        let count = |colour: Colour| {
            (480..1500)
                .flat_map(|x| (0..450).map(move |y| (x, y)))
                .filter(|&(x, y)| canvas.pixel(x, y) == Some(colour))
                .count()
        };

        assert!(count(palette.primary) > 0, "wordmark missing");
        assert!(count(palette.success) > 0, "tagline missing");
    }

    #[test]
    fn test_banner_supporting_lines() {
        let palette = BrandPalette::BRAND;
        let canvas = render(SocialAsset::LinkedInBanner);

        let text_pixels = (1204..1584)
            .flat_map(|x| (100..260).map(move |y| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) == Some(palette.text))
            .count();
        assert!(text_pixels > 0);
        assert_eq!(canvas.pixel(792, 368), Some(palette.accent));
    }

    #[test]
    fn test_layout_order_rule_over_pattern() {
        let palette = BrandPalette::BRAND;
        let layout = SocialAsset::XHeader.layout(&palette);
        assert!(layout.pattern.is_some());
        assert!(layout.rule.is_some());
        assert!(SocialAsset::ProfileDark.layout(&palette).wordmark.is_none());
    }
}
