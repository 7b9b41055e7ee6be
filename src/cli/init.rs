//! Init command implementation.
//!
//! Writes a starter `brand.yaml` manifest.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::canvas::FontSpec;
use crate::error::{BrandError, Result};
use crate::manifest::{Manifest, DEFAULT_FONT, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

/// Initialize a brandmark project by generating a brand.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing brand.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(BrandError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&manifest_path, Manifest::starter()).map_err(|e| BrandError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));

    if !FontSpec::new(args.path.join(DEFAULT_FONT)).is_available() {
        printer.info(
            "Note",
            &format!("{} not found; builds will use the builtin font", DEFAULT_FONT),
        );
    }

    Ok(())
}
