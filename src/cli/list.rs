//! List command implementation.
//!
//! Prints the asset catalog: output paths, sizes and descriptions.

use clap::Args;

use crate::catalog::{AssetKind, Catalog, LogoConcept};
use crate::error::Result;
use crate::output::Printer;

/// List every asset a build produces
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list one asset group
    #[arg(long, value_enum)]
    pub only: Option<AssetKind>,

    /// List logo concept ids instead of output files
    #[arg(long)]
    pub concepts: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    if args.concepts {
        for concept in LogoConcept::ALL {
            let line = format!("{} {}", concept.id(), printer.dim(concept.description()));
            printer.info("Concept", &line);
        }
        return Ok(());
    }

    let kinds = match args.only {
        Some(kind) => vec![kind],
        None => vec![AssetKind::Logo, AssetKind::Social],
    };

    for kind in kinds {
        for line in inventory(kind) {
            printer.info(kind_label(kind), &line);
        }
    }

    Ok(())
}

fn kind_label(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Logo => "Logo",
        AssetKind::Social => "Social",
    }
}

/// One line per output: path, size and description.
fn inventory(kind: AssetKind) -> Vec<String> {
    Catalog::outputs_of(kind)
        .iter()
        .map(|descriptor| {
            let (width, height) = descriptor.generator.dimensions();
            format!(
                "{} ({}x{}) {}",
                descriptor.path.to_string_lossy().replace('\\', "/"),
                width,
                height,
                descriptor.description
            )
        })
        .collect()
}
