use clap::Parser;
use miette::Result;
use brandmark::cli::{Cli, Commands};
use brandmark::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => brandmark::cli::build::run(args, &printer)?,
        Commands::List(args) => brandmark::cli::list::run(args, &printer)?,
        Commands::Palette(args) => brandmark::cli::palette::run(args, &printer)?,
        Commands::Init(args) => brandmark::cli::init::run(args, &printer)?,
        Commands::Completions(args) => brandmark::cli::completions::run(args)?,
    }

    Ok(())
}
