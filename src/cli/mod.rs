pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod palette;

use clap::{Parser, Subcommand};

/// brandmark - Procedural brand identity renderer
#[derive(Parser, Debug)]
#[command(name = "brandmark")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render logo concepts and social assets to PNG
    Build(build::BuildArgs),

    /// List every asset a build produces
    List(list::ListArgs),

    /// Print the brand palette, or sample colours from a PNG
    Palette(palette::PaletteArgs),

    /// Initialize a brandmark project (generates brand.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssetKind;

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "brandmark", "build", "--only", "logos", "--output", "out", "--font", "a.ttf",
        ])
        .unwrap();

        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.only, Some(AssetKind::Logo));
        assert_eq!(args.output.as_deref(), Some(std::path::Path::new("out")));
        assert_eq!(args.font.as_deref(), Some(std::path::Path::new("a.ttf")));
    }

    #[test]
    fn test_font_flags_conflict() {
        let result =
            Cli::try_parse_from(["brandmark", "build", "--font", "a.ttf", "--builtin-font"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
