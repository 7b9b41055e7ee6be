//! The fixed brand palette.

use super::Colour;

/// Named brand colours.
///
/// The palette is a plain immutable value handed to every generator instead
/// of module-level globals. [`BrandPalette::BRAND`] is the only palette the
/// brand ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandPalette {
    /// Deep Forest, used for every mark stroke and fill.
    pub primary: Colour,
    /// Warm Stone, the canvas colour.
    pub secondary: Colour,
    /// Muted Gold.
    pub accent: Colour,
    /// Forest Light, used for taglines.
    pub success: Colour,
    /// Muted Burgundy.
    pub danger: Colour,
    /// Soft Black.
    pub text: Colour,
    /// Secondary text grey.
    pub text_light: Colour,
    /// Warm off-white.
    pub background: Colour,
    /// Warm grey.
    pub border: Colour,
    /// Alternating table rows.
    pub table_alt: Colour,
    /// Background dot grid, a shade just below the canvas.
    pub pattern: Colour,
}

impl BrandPalette {
    /// The Alpmera brand palette.
    pub const BRAND: Self = Self {
        primary: Colour::rgb(0x1B, 0x4D, 0x3E),
        secondary: Colour::rgb(0xE8, 0xDE, 0xD1),
        accent: Colour::rgb(0xC9, 0xA9, 0x62),
        success: Colour::rgb(0x3A, 0x6B, 0x5A),
        danger: Colour::rgb(0x8B, 0x3A, 0x3A),
        text: Colour::rgb(0x2D, 0x2D, 0x2D),
        text_light: Colour::rgb(0x5A, 0x5A, 0x5A),
        background: Colour::rgb(0xFA, 0xFA, 0xF8),
        border: Colour::rgb(0xD4, 0xCF, 0xC7),
        table_alt: Colour::rgb(0xF5, 0xF2, 0xED),
        pattern: Colour::rgb(0xDE, 0xD4, 0xC7),
    };

    /// Returns the brand palette.
    pub const fn brand() -> Self {
        Self::BRAND
    }

    /// Dot colour for the background texture.
    pub fn pattern_dot(&self) -> Colour {
        self.pattern
    }

    /// All named colours in display order.
    pub fn entries(&self) -> [(&'static str, Colour); 11] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("success", self.success),
            ("danger", self.danger),
            ("text", self.text),
            ("text-light", self.text_light),
            ("background", self.background),
            ("border", self.border),
            ("table-alt", self.table_alt),
            ("pattern", self.pattern),
        ]
    }

    /// Look up a colour by name (with or without a leading `$`).
    pub fn get(&self, name: &str) -> Option<Colour> {
        let name = name.strip_prefix('$').unwrap_or(name);
        self.entries()
            .into_iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, colour)| colour)
    }
}

impl Default for BrandPalette {
    fn default() -> Self {
        Self::BRAND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_colours() {
        let palette = BrandPalette::brand();
        assert_eq!(palette.primary, Colour::rgb(27, 77, 62));
        assert_eq!(palette.secondary, Colour::rgb(232, 222, 209));
        assert_eq!(palette.accent, Colour::rgb(201, 169, 98));
        assert_eq!(palette.success, Colour::rgb(58, 107, 90));
        assert_eq!(palette.text, Colour::rgb(45, 45, 45));
    }

    #[test]
    fn test_brand_is_stable() {
        assert_eq!(BrandPalette::brand(), BrandPalette::brand());
        assert_eq!(BrandPalette::default(), BrandPalette::BRAND);
        assert_eq!(
            BrandPalette::BRAND.pattern_dot(),
            BrandPalette::BRAND.pattern_dot()
        );
    }

    #[test]
    fn test_pattern_dot_is_close_to_canvas() {
        let palette = BrandPalette::BRAND;
        let dot = palette.pattern_dot();

        assert_eq!(dot, Colour::rgb(222, 212, 199));
        assert_eq!(palette.get("pattern"), Some(dot));
        for (d, s) in dot.to_rgb().into_iter().zip(palette.secondary.to_rgb()) {
            assert!(d <= s);
            assert!(s - d < 16, "dot {} too far from canvas {}", dot, palette.secondary);
        }
    }

    #[test]
    fn test_get_by_name() {
        let palette = BrandPalette::BRAND;
        assert_eq!(palette.get("primary"), Some(palette.primary));
        assert_eq!(palette.get("$table-alt"), Some(palette.table_alt));
        assert_eq!(palette.get("missing"), None);
    }

    #[test]
    fn test_entries_are_unique() {
        let entries = BrandPalette::BRAND.entries();
        for (i, (a, _)) in entries.iter().enumerate() {
            assert!(entries[i + 1..].iter().all(|(b, _)| a != b));
        }
    }
}
