use anyhow::Result;
use clap::Parser;
use foldguide_rs::cli::{Af3Args, LogArgs, run_af3};

#[derive(Parser, Debug)]
#[command(
    name = "af3examples",
    about = "Show AlphaFold 3 example complexes and the AlphaFold Server workflow"
)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,

    #[command(flatten)]
    args: Af3Args,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.log.init();
    run_af3(cli.args)
}
