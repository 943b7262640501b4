use clap::Parser;
use miette::Result;
use spritefx::cli::{Cli, Commands};
use spritefx::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);

    match cli.command {
        Commands::Effect(args) => {
            spritefx::cli::effect::run(args, cli.config.as_deref(), &printer)?;
        }
        Commands::Slice(args) => {
            spritefx::cli::slice::run(args, &printer)?;
        }
        Commands::Init(args) => spritefx::cli::init::run(args, &printer)?,
        Commands::Completions(args) => spritefx::cli::completions::run(args)?,
    }

    Ok(())
}
