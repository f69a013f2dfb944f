use clap::Parser;
use miette::Result;
use shapesmith::cli::{Cli, Commands};
use shapesmith::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => shapesmith::cli::generate::run(args, &printer)?,
        Commands::List(args) => shapesmith::cli::list::run(args, &printer)?,
        Commands::Watch(args) => shapesmith::cli::watch::run(args, &printer)?,
        Commands::Colour(args) => shapesmith::cli::colour::run(args, &printer)?,
        Commands::Gis(args) => shapesmith::cli::gis::run(args, &printer)?,
        Commands::Completions(args) => shapesmith::cli::completions::run(args)?,
    }

    Ok(())
}
