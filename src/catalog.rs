//! The fixed set of brand assets and where each one is written.
//!
//! Every output is described by an [`AssetDescriptor`]: a path relative to
//! the output root, a human description and the generator that draws it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::canvas::{Canvas, FontSpec};
use crate::error::{BrandError, Result};
use crate::render::{
    completion_stages, compose_wordmark, contained_a, convergence, nested_rings,
    orbital_aggregation, SocialAsset, BRAND_NAME, MARK_SIZE, WORDMARK_EXTENSION,
    WORDMARK_FONT_SIZE,
};
use crate::types::BrandPalette;

/// Directory for logo concepts, relative to the output root.
pub const LOGO_DIR: &str = "logos";

/// Directory for social assets, relative to the output root.
pub const SOCIAL_DIR: &str = "social";

/// The five candidate brand marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoConcept {
    NestedRings,
    Orbital,
    Convergence,
    ContainedA,
    CompletionStages,
}

impl LogoConcept {
    pub const ALL: [LogoConcept; 5] = [
        LogoConcept::NestedRings,
        LogoConcept::Orbital,
        LogoConcept::Convergence,
        LogoConcept::ContainedA,
        LogoConcept::CompletionStages,
    ];

    /// Stable identifier, also the output file stem.
    pub fn id(self) -> &'static str {
        match self {
            LogoConcept::NestedRings => "concept_1_nested_rings",
            LogoConcept::Orbital => "concept_2_orbital",
            LogoConcept::Convergence => "concept_3_convergence",
            LogoConcept::ContainedA => "concept_4_contained_a",
            LogoConcept::CompletionStages => "concept_5_completion",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LogoConcept::NestedRings => "Nested protection rings",
            LogoConcept::Orbital => "Orbital aggregation",
            LogoConcept::Convergence => "Converging elements",
            LogoConcept::ContainedA => "Contained lettermark",
            LogoConcept::CompletionStages => "Completion stages",
        }
    }

    /// Look up a concept by id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Draw the bare mark on its 800x800 canvas.
    pub fn render(self, palette: &BrandPalette) -> Canvas {
        match self {
            LogoConcept::NestedRings => nested_rings(palette),
            LogoConcept::Orbital => orbital_aggregation(palette),
            LogoConcept::Convergence => convergence(palette),
            LogoConcept::ContainedA => contained_a(palette),
            LogoConcept::CompletionStages => completion_stages(palette),
        }
    }
}

impl fmt::Display for LogoConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Social platform an asset is published to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    X,
    LinkedIn,
}

impl Platform {
    pub fn dir_name(self) -> &'static str {
        match self {
            Platform::X => "x",
            Platform::LinkedIn => "linkedin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::X => "X",
            Platform::LinkedIn => "LinkedIn",
        }
    }
}

/// Asset group, used to restrict a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    #[value(name = "logos")]
    Logo,
    Social,
}

/// How an asset is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// The bare mark.
    Mark(LogoConcept),
    /// The mark with the brand name beneath it.
    Full(LogoConcept),
    Social(SocialAsset),
}

impl Generator {
    pub fn kind(self) -> AssetKind {
        match self {
            Generator::Mark(_) | Generator::Full(_) => AssetKind::Logo,
            Generator::Social(_) => AssetKind::Social,
        }
    }

    /// Output size as (width, height), known without rendering.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Generator::Mark(_) => (MARK_SIZE, MARK_SIZE),
            Generator::Full(_) => (MARK_SIZE, MARK_SIZE + WORDMARK_EXTENSION),
            Generator::Social(asset) => asset.dimensions(),
        }
    }

    pub fn render(self, palette: &BrandPalette, fonts: &FontSpec) -> Canvas {
        match self {
            Generator::Mark(concept) => concept.render(palette),
            Generator::Full(concept) => {
                let mark = concept.render(palette);
                let font = fonts.resolve(WORDMARK_FONT_SIZE);
                compose_wordmark(&mark, true, palette, &font).into_owned()
            }
            Generator::Social(asset) => asset.render(palette, fonts),
        }
    }
}

/// One output of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    /// Path relative to the output root.
    pub path: PathBuf,
    pub description: String,
    pub generator: Generator,
}

impl AssetDescriptor {
    fn new(path: PathBuf, description: impl Into<String>, generator: Generator) -> Self {
        Self {
            path,
            description: description.into(),
            generator,
        }
    }

    pub fn kind(&self) -> AssetKind {
        self.generator.kind()
    }
}

/// Social outputs: both platforms share the same profile generators.
const SOCIAL_OUTPUTS: [(Platform, &str, &str, SocialAsset); 6] = [
    (Platform::X, "header_1500x500.png", "Header", SocialAsset::XHeader),
    (Platform::X, "profile_400x400.png", "Profile (dark)", SocialAsset::ProfileDark),
    (Platform::X, "profile_light_400x400.png", "Profile (light)", SocialAsset::ProfileLight),
    (Platform::LinkedIn, "banner_1584x396.png", "Banner", SocialAsset::LinkedInBanner),
    (Platform::LinkedIn, "profile_400x400.png", "Profile (dark)", SocialAsset::ProfileDark),
    (Platform::LinkedIn, "profile_light_400x400.png", "Profile (light)", SocialAsset::ProfileLight),
];

/// The complete asset catalog.
pub struct Catalog;

impl Catalog {
    /// Every job, logos first, in a stable order.
    pub fn outputs() -> Vec<AssetDescriptor> {
        let mut outputs = Self::logos();
        outputs.extend(Self::social());
        outputs
    }

    /// Jobs of a single kind.
    pub fn outputs_of(kind: AssetKind) -> Vec<AssetDescriptor> {
        match kind {
            AssetKind::Logo => Self::logos(),
            AssetKind::Social => Self::social(),
        }
    }

    fn logos() -> Vec<AssetDescriptor> {
        LogoConcept::ALL
            .into_iter()
            .flat_map(|concept| {
                let dir = PathBuf::from(LOGO_DIR);
                [
                    AssetDescriptor::new(
                        dir.join(format!("{}_mark.png", concept.id())),
                        concept.description(),
                        Generator::Mark(concept),
                    ),
                    AssetDescriptor::new(
                        dir.join(format!("{}_full.png", concept.id())),
                        format!("{} with wordmark", concept.description()),
                        Generator::Full(concept),
                    ),
                ]
            })
            .collect()
    }

    fn social() -> Vec<AssetDescriptor> {
        SOCIAL_OUTPUTS
            .iter()
            .map(|&(platform, file, label, asset)| {
                let path = PathBuf::from(SOCIAL_DIR).join(platform.dir_name()).join(file);
                let description = format!("{} {}", platform.label(), label.to_lowercase());
                AssetDescriptor::new(path, description, Generator::Social(asset))
            })
            .collect()
    }
}

/// Entry in the `assets.json` index written next to the outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub path: String,
    pub kind: AssetKind,
    pub width: u32,
    pub height: u32,
    pub description: String,
}

/// The `assets.json` index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetIndex {
    pub brand: &'static str,
    pub assets: Vec<IndexEntry>,
}

impl AssetIndex {
    pub fn new() -> Self {
        Self {
            brand: BRAND_NAME,
            assets: Vec::new(),
        }
    }

    /// Record a written asset.
    pub fn push(&mut self, descriptor: &AssetDescriptor, width: u32, height: u32) {
        self.assets.push(IndexEntry {
            path: descriptor.path.to_string_lossy().replace('\\', "/"),
            kind: descriptor.kind(),
            width,
            height,
            description: descriptor.description.clone(),
        });
    }

    /// Write the index as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| BrandError::Build {
            message: format!("Failed to serialize asset index: {}", e),
            help: None,
        })?;
        fs::write(path, json).map_err(|e| BrandError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write asset index: {}", e),
        })?;
        Ok(())
    }
}

impl Default for AssetIndex {
    fn default() -> Self {
        Self::new()
    }
}
