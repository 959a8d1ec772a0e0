use anyhow::Result;
use clap::{Parser, Subcommand};
use foldguide_rs::cli::{Af3Args, LogArgs, QuickstartArgs, run_af3, run_quickstart};

#[derive(Parser, Debug)]
#[command(
    name = "foldguide",
    about = "foldguide: AlphaFold 2 / AlphaFold 3 input preparation walkthroughs"
)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Quickstart(QuickstartArgs),
    Af3(Af3Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.log.init();
    match cli.command {
        Some(Commands::Quickstart(args)) => run_quickstart(args),
        Some(Commands::Af3(args)) => run_af3(args),
        None => run_quickstart(QuickstartArgs::default()),
    }
}
