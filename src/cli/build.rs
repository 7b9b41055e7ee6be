//! Build command implementation.
//!
//! Renders every catalog asset and writes PNG files plus an `assets.json`
//! index. Assets are independent: one failed write is reported and the
//! rest of the build carries on.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::canvas::FontSpec;
use crate::catalog::{AssetIndex, AssetKind, Catalog};
use crate::error::{BrandError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::types::BrandPalette;

/// Index file written at the output root.
pub const INDEX_FILENAME: &str = "assets.json";

/// Render logo concepts and social assets to PNG
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Output directory (overrides brand.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Display font file (overrides brand.yaml)
    #[arg(long, conflicts_with = "builtin_font")]
    pub font: Option<PathBuf>,

    /// Use the builtin bitmap font
    #[arg(long)]
    pub builtin_font: bool,

    /// Only build one asset group
    #[arg(long, value_enum)]
    pub only: Option<AssetKind>,

    /// Manifest file (default: brand.yaml in the current directory)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

/// Resolved build settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub output: PathBuf,
    pub fonts: FontSpec,
    pub kinds: Vec<AssetKind>,
}

impl BuildPlan {
    /// Merge command-line flags over the manifest.
    pub fn new(args: &BuildArgs, manifest: Manifest) -> Self {
        let fonts = if args.builtin_font {
            FontSpec::builtin()
        } else {
            match args.font.clone().or(manifest.font.clone()) {
                Some(path) => FontSpec::new(path),
                None => FontSpec::builtin(),
            }
        };

        let kinds = match args.only {
            Some(kind) => vec![kind],
            None => manifest.kinds(),
        };

        Self {
            output: args.output.clone().unwrap_or(manifest.output),
            fonts,
            kinds,
        }
    }
}

/// What a build wrote and what it could not.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, BrandError)>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::discover(args.manifest.as_deref(), Path::new("."))?;
    let plan = BuildPlan::new(&args, manifest);

    let report = build(&plan, &BrandPalette::BRAND, printer)?;

    if report.failed.is_empty() {
        return Ok(());
    }

    Err(BrandError::Build {
        message: format!(
            "{} could not be written",
            plural(report.failed.len(), "asset", "assets")
        ),
        help: Some("See the errors above; the remaining assets were written".to_string()),
    })
}

/// Render and write every asset in the plan.
///
/// Only failures that stop the whole build (the output directory or the
/// index) are returned as errors. Per-asset failures land in the report.
pub fn build(plan: &BuildPlan, palette: &BrandPalette, printer: &Printer) -> Result<BuildReport> {
    fs::create_dir_all(&plan.output).map_err(|e| BrandError::Io {
        path: plan.output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let fonts = match plan.fonts.check() {
        Ok(font) => {
            if let Some(family) = font.family() {
                printer.info("Font", family);
            }
            plan.fonts.clone()
        }
        Err(e) => {
            printer.warning("Warning", &format!("{}; using the builtin font", e));
            FontSpec::builtin()
        }
    };

    if plan.kinds.is_empty() {
        printer.warning("Warning", "nothing to build: logos and social are both disabled");
    }

    let mut report = BuildReport::default();
    let mut index = AssetIndex::new();

    for &kind in &plan.kinds {
        for descriptor in Catalog::outputs_of(kind) {
            let canvas = descriptor.generator.render(palette, &fonts);
            let path = plan.output.join(&descriptor.path);
            let (width, height) = canvas.dimensions();

            match write_png(&canvas, &path) {
                Ok(()) => {
                    printer.status(
                        "Rendered",
                        &format!(
                            "{} {}",
                            display_path(&path),
                            printer.dim(&format!("({}x{})", width, height))
                        ),
                    );
                    index.push(&descriptor, width, height);
                    report.written.push(path);
                }
                Err(e) => {
                    printer.error("Failed", &format!("{}: {}", display_path(&path), e));
                    report.failed.push((path, e));
                }
            }
        }
    }

    index.write(&plan.output.join(INDEX_FILENAME))?;

    let summary = format!(
        "{} to {}",
        plural(report.written.len(), "asset", "assets"),
        printer.cyan(&display_path(&plan.output))
    );
    if report.failed.is_empty() {
        printer.status("Finished", &summary);
    } else {
        printer.warning(
            "Finished",
            &format!(
                "{}, {}",
                summary,
                plural(report.failed.len(), "failure", "failures")
            ),
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn plan(output: &Path, kinds: Vec<AssetKind>) -> BuildPlan {
        BuildPlan {
            output: output.to_path_buf(),
            fonts: FontSpec::builtin(),
            kinds,
        }
    }

    #[test]
    fn test_flags_override_manifest() {
        let manifest = Manifest {
            output: PathBuf::from("from-manifest"),
            font: Some(PathBuf::from("manifest.ttf")),
            logos: true,
            social: false,
        };
        let args = BuildArgs {
            output: Some(PathBuf::from("out")),
            only: Some(AssetKind::Social),
            font: Some(PathBuf::from("flag.ttf")),
            ..Default::default()
        };

        assert_eq!(
            BuildPlan::new(&args, manifest),
            BuildPlan {
                output: PathBuf::from("out"),
                fonts: FontSpec::new("flag.ttf"),
                kinds: vec![AssetKind::Social],
            }
        );
    }

    #[test]
    fn test_manifest_fills_missing_flags() {
        let args = BuildArgs {
            builtin_font: true,
            ..Default::default()
        };
        let plan = BuildPlan::new(&args, Manifest::default());

        assert_eq!(plan.output, PathBuf::from("brand-assets"));
        assert_eq!(plan.fonts, FontSpec::builtin());
        assert_eq!(plan.kinds, vec![AssetKind::Logo, AssetKind::Social]);
    }

    #[test]
    fn test_build_writes_every_asset() {
        let dir = tempdir().unwrap();
        let plan = plan(dir.path(), vec![AssetKind::Logo, AssetKind::Social]);

        let report = build(&plan, &BrandPalette::BRAND, &Printer::plain()).unwrap();

        assert_eq!(report.written.len(), 16);
        assert!(report.failed.is_empty());

        let full = image::open(dir.path().join("logos/concept_2_orbital_full.png")).unwrap();
        assert_eq!((full.width(), full.height()), (800, 950));

        let banner = image::open(dir.path().join("social/linkedin/banner_1584x396.png")).unwrap();
        assert_eq!((banner.width(), banner.height()), (1584, 396));
    }

    #[test]
    fn test_build_only_social_writes_index() {
        let dir = tempdir().unwrap();
        let plan = plan(dir.path(), vec![AssetKind::Social]);

        let report = build(&plan, &BrandPalette::BRAND, &Printer::plain()).unwrap();
        assert_eq!(report.written.len(), 6);
        assert!(!dir.path().join("logos").exists());

        let index = fs::read_to_string(dir.path().join(INDEX_FILENAME)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&index).unwrap();
        assert_eq!(parsed["assets"].as_array().unwrap().len(), 6);
        assert_eq!(parsed["assets"][3]["path"], "social/linkedin/banner_1584x396.png");
        assert_eq!(parsed["assets"][3]["width"], 1584);
    }

    #[test]
    fn test_failed_asset_does_not_stop_build() {
        let dir = tempdir().unwrap();
        // A file where the social directory should go blocks every social write.
        fs::write(dir.path().join("social"), "blocked").unwrap();

        let plan = plan(dir.path(), vec![AssetKind::Social, AssetKind::Logo]);
        let report = build(&plan, &BrandPalette::BRAND, &Printer::plain()).unwrap();

        assert_eq!(report.failed.len(), 6);
        assert_eq!(report.written.len(), 10);
        assert!(dir.path().join("logos/concept_5_completion_mark.png").exists());
    }

    #[test]
    fn test_missing_font_falls_back() {
        let dir = tempdir().unwrap();
        let plan = BuildPlan {
            output: dir.path().to_path_buf(),
            fonts: FontSpec::new(dir.path().join("missing.ttf")),
            kinds: vec![AssetKind::Logo],
        };

        let report = build(&plan, &BrandPalette::BRAND, &Printer::plain()).unwrap();
        assert_eq!(report.written.len(), 10);
        assert!(report.failed.is_empty());
    }

    #[test]
    fn test_output_directory_error_is_fatal() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("out");
        fs::write(&blocker, "file").unwrap();

        let plan = plan(&blocker, vec![AssetKind::Logo]);
        let result = build(&plan, &BrandPalette::BRAND, &Printer::plain());
        assert!(matches!(result, Err(BrandError::Io { .. })));
    }
}
