//! Project manifest (brand.yaml) parsing.
//!
//! The manifest sets the output directory, the display font and which asset
//! groups a build produces. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::AssetKind;
use crate::error::{BrandError, Result};

/// Manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "brand.yaml";

/// Display font used when the manifest does not name one.
pub const DEFAULT_FONT: &str = "LibreBaskerville-Regular.ttf";

/// Project manifest loaded from brand.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for rendered assets.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Display font file. `None` uses the builtin face.
    #[serde(default = "default_font")]
    pub font: Option<PathBuf>,

    /// Render the logo concepts.
    #[serde(default = "enabled")]
    pub logos: bool,

    /// Render the social assets.
    #[serde(default = "enabled")]
    pub social: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("brand-assets")
}

fn default_font() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_FONT))
}

fn enabled() -> bool {
    true
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            font: default_font(),
            logos: true,
            social: true,
        }
    }
}

impl Manifest {
    /// Load manifest from a brand.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BrandError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else brand.yaml from `dir` when present, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(MANIFEST_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| BrandError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Asset groups enabled by this manifest.
    pub fn kinds(&self) -> Vec<AssetKind> {
        let mut kinds = Vec::new();
        if self.logos {
            kinds.push(AssetKind::Logo);
        }
        if self.social {
            kinds.push(AssetKind::Social);
        }
        kinds
    }

    /// Starter manifest text written by `init`.
    pub fn starter() -> String {
        format!(
            "# brandmark project manifest\n\
             output: {}\n\
             font: {}\n\
             logos: true\n\
             social: true\n",
            default_output().display(),
            DEFAULT_FONT
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert_eq!(manifest.font, Some(PathBuf::from(DEFAULT_FONT)));
        assert!(manifest.logos);
        assert!(manifest.social);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
output: dist/brand
font: fonts/Display.ttf
logos: false
social: true
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(
            manifest,
            Manifest {
                output: PathBuf::from("dist/brand"),
                font: Some(PathBuf::from("fonts/Display.ttf")),
                logos: false,
                social: true,
            }
        );
        assert_eq!(manifest.kinds(), vec![AssetKind::Social]);
    }

    #[test]
    fn test_null_font_means_builtin() {
        let manifest = Manifest::parse("font: ~").unwrap();
        assert_eq!(manifest.font, None);
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let err = Manifest::parse("logos: [nope").unwrap_err();
        assert!(matches!(err, BrandError::Parse { .. }));
    }

    #[test]
    fn test_starter_parses_to_default() {
        assert_eq!(Manifest::parse(&Manifest::starter()).unwrap(), Manifest::default());
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Manifest::discover(None, dir.path()).unwrap(), Manifest::default());
    }

    #[test]
    fn test_discover_reads_working_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILENAME), "output: out").unwrap();

        let manifest = Manifest::discover(None, dir.path()).unwrap();
        assert_eq!(manifest.output, PathBuf::from("out"));
    }

    #[test]
    fn test_discover_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("other.yaml");

        let err = Manifest::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, BrandError::Io { .. }));
    }
}
