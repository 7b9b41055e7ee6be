//! Palette command implementation.
//!
//! Prints the brand palette as `$name: #RRGGBB` lines on stdout, or samples
//! the colours of a rendered PNG and names the ones that match the brand.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;
use image::RgbaImage;

use crate::error::{BrandError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{BrandPalette, Colour};

/// Print the brand palette, or sample colours from a PNG
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Print a single colour by name (e.g. `accent` or `$accent`)
    #[arg(conflicts_with = "sample")]
    pub name: Option<String>,

    /// PNG file to sample colours from
    #[arg(long)]
    pub sample: Option<PathBuf>,

    /// Also print each colour in HSL form
    #[arg(long)]
    pub hsl: bool,

    /// Maximum number of sampled colours to output
    #[arg(long, requires = "sample")]
    pub max: Option<usize>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palette = BrandPalette::BRAND;

    if let Some(name) = &args.name {
        println!("{}", named_line(&palette, name, args.hsl)?);
        return Ok(());
    }

    let Some(path) = &args.sample else {
        for line in palette_lines(&palette, args.hsl) {
            println!("{}", line);
        }
        return Ok(());
    };

    let img = image::open(path)
        .map_err(|e| BrandError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let colours = sample_colours(&img, args.max);
    printer.status(
        "Sampled",
        &format!(
            "{} from {}",
            plural(colours.len(), "colour", "colours"),
            display_path(path)
        ),
    );

    for line in sample_lines(&palette, &colours, args.hsl) {
        println!("{}", line);
    }

    Ok(())
}

fn palette_lines(palette: &BrandPalette, hsl: bool) -> Vec<String> {
    palette
        .entries()
        .iter()
        .map(|&(name, colour)| colour_line(name, colour, hsl))
        .collect()
}

/// `$name: #RRGGBB`, optionally followed by the HSL form.
fn colour_line(name: &str, colour: Colour, hsl: bool) -> String {
    if !hsl {
        return format!("${}: {}", name, colour);
    }

    let (h, s, l) = colour.to_hsl();
    format!(
        "${}: {} hsl({:.0}, {:.0}%, {:.0}%)",
        name, colour, h, s, l
    )
}

fn named_line(palette: &BrandPalette, name: &str, hsl: bool) -> Result<String> {
    let colour = palette.get(name).ok_or_else(|| {
        let names: Vec<&str> = palette.entries().iter().map(|(n, _)| *n).collect();
        BrandError::Parse {
            message: format!("Unknown palette colour: {}", name),
            help: Some(format!("Available colours: {}", names.join(", "))),
        }
    })?;

    Ok(colour_line(name.trim_start_matches('$'), colour, hsl))
}

/// Distinct opaque colours, most frequent first.
///
/// Ties are broken by colour value so the output is stable.
fn sample_colours(img: &RgbaImage, max: Option<usize>) -> Vec<(Colour, usize)> {
    let mut counts: HashMap<Colour, usize> = HashMap::new();
    for pixel in img.pixels() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        *counts.entry(Colour::rgb(r, g, b)).or_insert(0) += 1;
    }

    let mut colours: Vec<(Colour, usize)> = counts.into_iter().collect();
    colours.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_rgb().cmp(&b.0.to_rgb())));

    if let Some(max) = max {
        colours.truncate(max);
    }

    colours
}

/// Brand colours keep their name; anything else is numbered.
fn sample_lines(palette: &BrandPalette, colours: &[(Colour, usize)], hsl: bool) -> Vec<String> {
    colours
        .iter()
        .enumerate()
        .map(|(i, (colour, _))| {
            let name = palette
                .entries()
                .iter()
                .find(|(_, c)| c == colour)
                .map(|(name, _)| name.to_string())
                .unwrap_or_else(|| format!("colour-{}", i + 1));
            colour_line(&name, *colour, hsl)
        })
        .collect()
}
